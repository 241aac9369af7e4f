use rnapot::engine::config::{
    DEFAULT_BASE_PAIRS, DEFAULT_EPSILON, DEFAULT_MIN_SEPARATION, DEFAULT_REPRESENTATIVE_ATOM,
    DEFAULT_SCORE_CAP,
};
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub base_pairs: Vec<String>,
    pub bin_min: u32,
    pub bin_max: u32,
    pub min_separation: usize,
    pub epsilon: f64,
    pub score_cap: f64,
    pub representative_atom: String,
    pub output_dir: PathBuf,
    pub curves_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_pairs: DEFAULT_BASE_PAIRS.iter().map(|s| s.to_string()).collect(),
            bin_min: 1,
            bin_max: 20,
            min_separation: DEFAULT_MIN_SEPARATION,
            epsilon: DEFAULT_EPSILON,
            score_cap: DEFAULT_SCORE_CAP,
            representative_atom: DEFAULT_REPRESENTATIVE_ATOM.to_string(),
            output_dir: PathBuf::from("."),
            curves_dir: PathBuf::from("."),
        }
    }
}
