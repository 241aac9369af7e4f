use crate::core::models::pair::PairDistance;
use crate::core::potential::registry::ScoreCurveRegistry;
use std::collections::BTreeMap;

/// One-dimensional piecewise-linear interpolation.
///
/// `xp` must be increasing and the same length as `fp`. Values left of `xp[0]` take
/// `fp[0]` and values right of the last point take the last `fp`.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len().min(fp.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First index whose x is strictly greater than `x`; 1..n by the checks above.
    let upper = xp[..n].partition_point(|&p| p <= x);
    let lower = upper - 1;
    let (x0, x1) = (xp[lower], xp[upper]);
    let (y0, y1) = (fp[lower], fp[upper]);
    if x == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDistance {
    pub distance: f64,
    pub score: f64,
}

/// Interpolated scores grouped by base-pair code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterpolatedScores {
    pub by_code: BTreeMap<String, Vec<ScoredDistance>>,
    /// Codes that were observed but have no score curve.
    pub missing_codes: Vec<String>,
}

impl InterpolatedScores {
    pub fn scores(&self, code: &str) -> Option<Vec<f64>> {
        self.by_code
            .get(code)
            .map(|entries| entries.iter().map(|e| e.score).collect())
    }

    pub fn len(&self) -> usize {
        self.by_code.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn per_code_totals(&self) -> BTreeMap<String, f64> {
        self.by_code
            .iter()
            .map(|(code, entries)| (code.clone(), entries.iter().map(|e| e.score).sum()))
            .collect()
    }

    /// Sum of every interpolated score, an estimate of the structure's pseudo-energy.
    pub fn total(&self) -> f64 {
        self.by_code
            .values()
            .flat_map(|entries| entries.iter().map(|e| e.score))
            .sum()
    }
}

/// Groups `distances` by code and interpolates each one into the matching curve.
///
/// Codes without a curve are left out of the result and listed in `missing_codes`.
pub fn interpolate_scores(
    distances: &[PairDistance],
    registry: &ScoreCurveRegistry,
) -> InterpolatedScores {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for pair in distances {
        grouped.entry(pair.code.as_str()).or_default().push(pair.distance);
    }

    let mut result = InterpolatedScores::default();
    for (code, values) in grouped {
        let Some(curve) = registry.get(code) else {
            result.missing_codes.push(code.to_string());
            continue;
        };
        let midpoints = curve.midpoints();
        let scored = values
            .into_iter()
            .map(|distance| ScoredDistance {
                distance,
                score: interp(distance, &midpoints, curve.scores()),
            })
            .collect();
        result.by_code.insert(code.to_string(), scored);
    }
    result
}
