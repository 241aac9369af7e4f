use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::curve::CurveError;
use crate::core::io::pdb::StructureError;
use crate::core::potential::error::PotentialError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read structure '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: StructureError,
    },

    #[error("Score curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Potential computation failed: {0}")]
    Potential(#[from] PotentialError),

    #[error("No training structures found in {0}")]
    NoInputs(String),

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
