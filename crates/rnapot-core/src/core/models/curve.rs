use super::bins::BinRange;
use crate::core::potential::interpolation::interp;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Score curve needs one score per bin: expected {expected}, found {found}")]
pub struct CurveLengthError {
    pub expected: usize,
    pub found: usize,
}

/// Log-odds scores for one base-pair code, one value per distance bin.
///
/// The curve doubles as an interpolation table whose x-axis is the bin midpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCurve {
    range: BinRange,
    scores: Vec<f64>,
}

impl ScoreCurve {
    pub fn new(range: BinRange, scores: Vec<f64>) -> Result<Self, CurveLengthError> {
        if scores.len() != range.len() || scores.is_empty() {
            return Err(CurveLengthError {
                expected: range.len(),
                found: scores.len(),
            });
        }
        Ok(Self { range, scores })
    }

    pub fn range(&self) -> BinRange {
        self.range
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn midpoints(&self) -> Vec<f64> {
        self.range.midpoints()
    }

    pub fn score_at_bin(&self, bin: u32) -> Option<f64> {
        self.range.index_of(bin).map(|i| self.scores[i])
    }

    /// Piecewise-linear score for a raw distance, clamped to the end scores outside the midpoints.
    pub fn interpolate(&self, distance: f64) -> f64 {
        interp(distance, &self.midpoints(), &self.scores)
    }
}
