use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rnapot - Train and apply a C3'-distance statistical potential for RNA 3D structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one log-odds score curve per base-pair code from a set of reference structures.
    Train(TrainArgs),
    /// Score a structure against previously trained score curves.
    Score(ScoreArgs),
    /// Render every score curve in a directory to a PNG line plot.
    Plot(PlotArgs),
}

/// Potential parameters shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PotentialArgs {
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the base-pair codes, as a comma-separated list (e.g., 'AU,CG,UG').
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    pub base_pairs: Option<Vec<String>>,

    /// Override the atom that represents each residue.
    #[arg(long, value_name = "NAME")]
    pub atom: Option<String>,

    /// Override the minimum sequence separation between paired residues.
    #[arg(long, value_name = "INT")]
    pub min_separation: Option<usize>,

    /// Override the pseudo-count added to frequencies before taking the logarithm.
    #[arg(long, value_name = "FLOAT")]
    pub epsilon: Option<f64>,

    /// Override the upper bound applied to every score.
    #[arg(long, value_name = "FLOAT")]
    pub score_cap: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S potential.min-separation=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Reference structure files in PDB format.
    #[arg(value_name = "PDB", conflicts_with = "input_dir")]
    pub inputs: Vec<PathBuf>,

    /// Directory scanned for '.pdb' and '.ent' reference structures.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory that receives the '<CODE>_scores.txt' files.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub potential: PotentialArgs,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the structure to score, in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory holding the '<CODE>_scores.txt' files produced by `train`.
    #[arg(short = 'r', long, value_name = "DIR")]
    pub curves_dir: Option<PathBuf>,

    /// Write every interpolated score to a CSV file with columns code,distance,score.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub potential: PotentialArgs,
}

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Directory holding the '<CODE>_scores.txt' files to plot.
    #[arg(short = 'r', long, value_name = "DIR")]
    pub curves_dir: Option<PathBuf>,

    /// Directory that receives the '<CODE>_Scores_Plot.png' files. Defaults to the curves directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Width of each image in pixels.
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub width: u32,

    /// Height of each image in pixels.
    #[arg(long, value_name = "PX", default_value_t = 600)]
    pub height: u32,

    #[command(flatten)]
    pub potential: PotentialArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn train_accepts_files_and_overrides() {
        let cli = Cli::try_parse_from([
            "rnapot",
            "-vv",
            "train",
            "a.pdb",
            "b.pdb",
            "-o",
            "curves",
            "--base-pairs",
            "AU,CG",
            "-S",
            "potential.epsilon=1e-6",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Train(args) = cli.command else {
            panic!("expected train command");
        };
        assert_eq!(args.inputs, vec![PathBuf::from("a.pdb"), PathBuf::from("b.pdb")]);
        assert_eq!(args.output_dir, Some(PathBuf::from("curves")));
        assert_eq!(
            args.potential.base_pairs,
            Some(vec!["AU".to_string(), "CG".to_string()])
        );
        assert_eq!(args.potential.set_values, vec!["potential.epsilon=1e-6"]);
    }

    #[test]
    fn train_rejects_files_together_with_a_directory() {
        let result = Cli::try_parse_from(["rnapot", "train", "a.pdb", "--input-dir", "refs"]);
        assert!(result.is_err());
    }

    #[test]
    fn score_requires_an_input() {
        assert!(Cli::try_parse_from(["rnapot", "score", "-r", "curves"]).is_err());
        assert!(Cli::try_parse_from(["rnapot", "score", "-i", "q.pdb"]).is_ok());
    }
}
