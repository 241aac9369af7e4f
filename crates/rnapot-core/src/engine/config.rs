use crate::core::models::bins::BinRange;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The ten unordered nucleotide pairs, in their canonical spelling.
pub const DEFAULT_BASE_PAIRS: [&str; 10] =
    ["AA", "AU", "AC", "AG", "UU", "UC", "UG", "CC", "CG", "GG"];

pub const DEFAULT_MIN_SEPARATION: usize = 4;
pub const DEFAULT_EPSILON: f64 = 1e-10;
pub const DEFAULT_SCORE_CAP: f64 = 10.0;
pub const DEFAULT_REPRESENTATIVE_ATOM: &str = "C3'";

/// Upper bound on the number of distance bins a potential may use.
pub const MAX_BINS: usize = 10_000;

const STRUCTURE_EXTENSIONS: [&str; 2] = ["pdb", "ent"];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.into(),
    }
}

/// Parameters shared by training and scoring. Both phases must agree on them.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialParams {
    pub base_pairs: Vec<String>,
    pub bins: BinRange,
    pub min_separation: usize,
    pub epsilon: f64,
    pub score_cap: f64,
    pub representative_atom: String,
}

impl Default for PotentialParams {
    fn default() -> Self {
        Self {
            base_pairs: DEFAULT_BASE_PAIRS.iter().map(|s| s.to_string()).collect(),
            bins: BinRange::default(),
            min_separation: DEFAULT_MIN_SEPARATION,
            epsilon: DEFAULT_EPSILON,
            score_cap: DEFAULT_SCORE_CAP,
            representative_atom: DEFAULT_REPRESENTATIVE_ATOM.to_string(),
        }
    }
}

impl PotentialParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_pairs.is_empty() {
            return Err(invalid("base_pairs", "at least one base-pair code is required"));
        }
        let mut seen = HashSet::new();
        for code in &self.base_pairs {
            if code.is_empty() || code.contains('_') || code.chars().any(char::is_whitespace) {
                return Err(invalid(
                    "base_pairs",
                    format!("'{code}' is not a usable base-pair code"),
                ));
            }
            if !seen.insert(code.as_str()) {
                return Err(invalid("base_pairs", format!("duplicate code '{code}'")));
            }
        }
        if self.bins.is_empty() {
            return Err(invalid(
                "bins",
                format!("minimum bin {} exceeds maximum {}", self.bins.min, self.bins.max),
            ));
        }
        if self.bins.len() > MAX_BINS {
            return Err(invalid(
                "bins",
                format!("{} bins requested, at most {MAX_BINS} allowed", self.bins.len()),
            ));
        }
        if self.min_separation == 0 {
            return Err(invalid("min_separation", "must be at least 1"));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(invalid("epsilon", "must be a positive finite number"));
        }
        if !self.score_cap.is_finite() {
            return Err(invalid("score_cap", "must be finite"));
        }
        if self.representative_atom.trim().is_empty() {
            return Err(invalid("representative_atom", "must not be empty"));
        }
        Ok(())
    }
}

/// Where training structures come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Files(Vec<PathBuf>),
    /// Every `.pdb` or `.ent` file directly inside the directory.
    Directory(PathBuf),
}

impl InputSource {
    pub fn resolve(&self) -> std::io::Result<Vec<PathBuf>> {
        match self {
            InputSource::Files(files) => Ok(files.clone()),
            InputSource::Directory(dir) => {
                let mut files = Vec::new();
                for entry in std::fs::read_dir(dir)? {
                    let path = entry?.path();
                    if path.is_file() && has_structure_extension(&path) {
                        files.push(path);
                    }
                }
                files.sort();
                Ok(files)
            }
        }
    }
}

fn has_structure_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            STRUCTURE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub inputs: InputSource,
    pub output_dir: PathBuf,
    pub params: PotentialParams,
}

#[derive(Default)]
pub struct TrainingConfigBuilder {
    inputs: Option<InputSource>,
    output_dir: Option<PathBuf>,
    params: Option<PotentialParams>,
}

impl TrainingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_files(mut self, files: Vec<PathBuf>) -> Self {
        self.inputs = Some(InputSource::Files(files));
        self
    }
    pub fn input_dir(mut self, dir: PathBuf) -> Self {
        self.inputs = Some(InputSource::Directory(dir));
        self
    }
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }
    pub fn params(mut self, params: PotentialParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> Result<TrainingConfig, ConfigError> {
        let params = self.params.unwrap_or_default();
        params.validate()?;
        Ok(TrainingConfig {
            inputs: self.inputs.ok_or(ConfigError::MissingParameter("inputs"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            params,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub structure_path: PathBuf,
    pub curves_dir: PathBuf,
    pub params: PotentialParams,
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    structure_path: Option<PathBuf>,
    curves_dir: Option<PathBuf>,
    params: Option<PotentialParams>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_path(mut self, path: PathBuf) -> Self {
        self.structure_path = Some(path);
        self
    }
    pub fn curves_dir(mut self, dir: PathBuf) -> Self {
        self.curves_dir = Some(dir);
        self
    }
    pub fn params(mut self, params: PotentialParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        let params = self.params.unwrap_or_default();
        params.validate()?;
        Ok(ScoringConfig {
            structure_path: self
                .structure_path
                .ok_or(ConfigError::MissingParameter("structure_path"))?,
            curves_dir: self
                .curves_dir
                .ok_or(ConfigError::MissingParameter("curves_dir"))?,
            params,
        })
    }
}
