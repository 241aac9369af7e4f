use crate::core::models::curve::CurveLengthError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PotentialError {
    #[error("No qualifying distances in the reference population")]
    EmptyPopulation,

    #[error("No distances or score curve available for base-pair code '{code}'")]
    MissingCode { code: String },

    #[error("Frequency tables cover different bin ranges ({observed} vs {reference})")]
    RangeMismatch { observed: String, reference: String },

    #[error(transparent)]
    CurveLength(#[from] CurveLengthError),
}
