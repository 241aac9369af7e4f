use super::error::PotentialError;
use super::frequency::FrequencyTable;
use crate::core::models::curve::ScoreCurve;

/// Score assigned where the log-odds ratio is undefined or infinite.
pub const SENTINEL_SCORE: f64 = 10.0;

/// `-ln((observed + epsilon) / (reference + epsilon))`, capped at `cap`.
///
/// A bin with no observations in either table carries no information and takes the
/// sentinel before capping. There is no lower bound.
#[inline]
pub fn log_odds_score(observed: f64, reference: f64, epsilon: f64, cap: f64) -> f64 {
    let score = if observed == 0.0 && reference == 0.0 {
        SENTINEL_SCORE
    } else {
        let ratio = -((observed + epsilon) / (reference + epsilon)).ln();
        if ratio.is_infinite() || ratio.is_nan() {
            SENTINEL_SCORE
        } else {
            ratio
        }
    };
    score.min(cap)
}

/// Builds the score curve of one base-pair code from its observed and reference tables.
pub fn build_score_curve(
    observed: &FrequencyTable,
    reference: &FrequencyTable,
    epsilon: f64,
    cap: f64,
) -> Result<ScoreCurve, PotentialError> {
    if observed.range() != reference.range() {
        return Err(PotentialError::RangeMismatch {
            observed: format!("{:?}", observed.range()),
            reference: format!("{:?}", reference.range()),
        });
    }

    let scores = observed
        .values()
        .iter()
        .zip(reference.values())
        .map(|(&obs, &reference)| log_odds_score(obs, reference, epsilon, cap))
        .collect();

    Ok(ScoreCurve::new(observed.range(), scores)?)
}
