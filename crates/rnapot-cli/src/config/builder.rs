use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FilePotentialConfig};
use crate::cli::{PlotArgs, PotentialArgs, ScoreArgs, TrainArgs};
use crate::error::{CliError, Result};
use rnapot::core::models::bins::BinRange;
use rnapot::engine::config::{
    self as core_config, PotentialParams, ScoringConfigBuilder, TrainingConfigBuilder,
};
use std::path::PathBuf;
use std::str::FromStr;

/// Everything the `plot` command needs once flags, file and defaults are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub curves_dir: PathBuf,
    pub output_dir: PathBuf,
    pub bins: BinRange,
    pub width: u32,
    pub height: u32,
}

pub fn build_training_config(args: &TrainArgs) -> Result<core_config::TrainingConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.potential)?;
    let training_file = file_config.training.take().unwrap_or_default();
    let params = merge_potential(&args.potential, file_config.potential.take(), &defaults);

    let builder = if !args.inputs.is_empty() {
        TrainingConfigBuilder::new().input_files(args.inputs.clone())
    } else if let Some(dir) = args.input_dir.clone().or(training_file.input_dir) {
        TrainingConfigBuilder::new().input_dir(dir)
    } else {
        return Err(CliError::Argument(
            "No reference structures given. Pass PDB files or --input-dir.".to_string(),
        ));
    };

    let output_dir = args
        .output_dir
        .clone()
        .or(training_file.output_dir)
        .unwrap_or(defaults.output_dir);

    builder
        .output_dir(output_dir)
        .params(params)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

pub fn build_scoring_config(args: &ScoreArgs) -> Result<core_config::ScoringConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.potential)?;
    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let params = merge_potential(&args.potential, file_config.potential.take(), &defaults);

    let curves_dir = args
        .curves_dir
        .clone()
        .or(scoring_file.curves_dir)
        .unwrap_or(defaults.curves_dir);

    ScoringConfigBuilder::new()
        .structure_path(args.input.clone())
        .curves_dir(curves_dir)
        .params(params)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

pub fn build_plot_config(args: &PlotArgs) -> Result<PlotConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.potential)?;
    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let params = merge_potential(&args.potential, file_config.potential.take(), &defaults);
    params
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;

    if args.width == 0 || args.height == 0 {
        return Err(CliError::Argument(format!(
            "Plot size must be positive, got {}x{}.",
            args.width, args.height
        )));
    }

    let curves_dir = args
        .curves_dir
        .clone()
        .or(scoring_file.curves_dir)
        .unwrap_or(defaults.curves_dir);
    let output_dir = args.output_dir.clone().unwrap_or_else(|| curves_dir.clone());

    Ok(PlotConfig {
        curves_dir,
        output_dir,
        bins: params.bins,
        width: args.width,
        height: args.height,
    })
}

fn load_file_config(args: &PotentialArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn merge_potential(
    args: &PotentialArgs,
    file_val: Option<FilePotentialConfig>,
    defaults: &DefaultsConfig,
) -> PotentialParams {
    let file_val = file_val.unwrap_or_default();
    PotentialParams {
        base_pairs: args
            .base_pairs
            .clone()
            .or(file_val.base_pairs)
            .unwrap_or_else(|| defaults.base_pairs.clone()),
        bins: BinRange::new(
            file_val.bin_min.unwrap_or(defaults.bin_min),
            file_val.bin_max.unwrap_or(defaults.bin_max),
        ),
        min_separation: args
            .min_separation
            .or(file_val.min_separation)
            .unwrap_or(defaults.min_separation),
        epsilon: args
            .epsilon
            .or(file_val.epsilon)
            .unwrap_or(defaults.epsilon),
        score_cap: args
            .score_cap
            .or(file_val.score_cap)
            .unwrap_or(defaults.score_cap),
        representative_atom: args
            .atom
            .clone()
            .or(file_val.representative_atom)
            .unwrap_or_else(|| defaults.representative_atom.clone()),
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "potential.base-pairs" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .base_pairs = Some(
                    value_str
                        .split(',')
                        .map(|code| code.trim().to_string())
                        .collect(),
                );
            }
            "potential.bin-min" => {
                config.potential.get_or_insert_with(Default::default).bin_min =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "potential.bin-max" => {
                config.potential.get_or_insert_with(Default::default).bin_max =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "potential.min-separation" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .min_separation = Some(parse_value(key, value_str, "integer")?);
            }
            "potential.epsilon" => {
                config.potential.get_or_insert_with(Default::default).epsilon =
                    Some(parse_value(key, value_str, "float")?);
            }
            "potential.score-cap" => {
                config.potential.get_or_insert_with(Default::default).score_cap =
                    Some(parse_value(key, value_str, "float")?);
            }
            "potential.representative-atom" => {
                config
                    .potential
                    .get_or_insert_with(Default::default)
                    .representative_atom = Some(value_str.to_string());
            }
            "training.input-dir" => {
                config.training.get_or_insert_with(Default::default).input_dir =
                    Some(PathBuf::from(value_str));
            }
            "training.output-dir" => {
                config.training.get_or_insert_with(Default::default).output_dir =
                    Some(PathBuf::from(value_str));
            }
            "scoring.curves-dir" => {
                config.scoring.get_or_insert_with(Default::default).curves_dir =
                    Some(PathBuf::from(value_str));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
