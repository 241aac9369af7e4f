use crate::core::io::curve::{CurveError, discover_curve_files, read_curve};
use crate::core::models::bins::BinRange;
use crate::core::models::curve::ScoreCurve;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Score curves keyed by base-pair code.
#[derive(Debug, Clone, Default)]
pub struct ScoreCurveRegistry {
    curves: BTreeMap<String, ScoreCurve>,
}

impl ScoreCurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `<CODE>_scores.txt` file found in `dir`.
    pub fn load_dir(dir: &Path, range: BinRange) -> Result<Self, CurveError> {
        let mut registry = Self::new();
        for (code, path) in discover_curve_files(dir)? {
            debug!("Loading score curve for '{}' from {:?}", code, path);
            let curve = read_curve(&path, range)?;
            registry.insert(code, curve);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, code: impl Into<String>, curve: ScoreCurve) -> Option<ScoreCurve> {
        self.curves.insert(code.into(), curve)
    }

    pub fn get(&self, code: &str) -> Option<&ScoreCurve> {
        self.curves.get(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.curves.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreCurve)> {
        self.curves.iter().map(|(code, curve)| (code.as_str(), curve))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl FromIterator<(String, ScoreCurve)> for ScoreCurveRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ScoreCurve)>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}
