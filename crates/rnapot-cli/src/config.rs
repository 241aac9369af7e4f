//! Layered CLI configuration: command-line flags, `--set` overrides, an optional TOML
//! file and built-in defaults, in that order of precedence.

pub mod builder;
pub mod defaults;
pub mod file;

pub use builder::{build_plot_config, build_scoring_config, build_training_config};
