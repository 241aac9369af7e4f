use crate::cli::ScoreArgs;
use crate::config::build_scoring_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use rnapot::core::potential::interpolation::InterpolatedScores;
use rnapot::{engine::progress::ProgressReporter, workflows};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize)]
struct ScoreRecord<'a> {
    code: &'a str,
    distance: f64,
    score: f64,
}

pub fn run(args: ScoreArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_scoring_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core scoring workflow...");
    let result = workflows::score::run(&config, &reporter)?;

    if let Some(csv_path) = &args.csv {
        info!("Writing {} score(s) to {:?}", result.scores.len(), csv_path);
        write_scores_csv(&result.scores, csv_path)?;
    }

    println!(
        "Scored {} pair(s) from {} residue(s) in {}",
        result.scores.len(),
        result.residue_count,
        result.structure_path.display()
    );
    for (code, total) in result.scores.per_code_totals() {
        println!("  {:<4} {:>12.6}", code, total);
    }
    if !result.scores.missing_codes.is_empty() {
        println!(
            "No score curve for: {}",
            result.scores.missing_codes.join(", ")
        );
    }
    println!("Total score: {:.6}", result.total());

    Ok(())
}

fn write_scores_csv(scores: &InterpolatedScores, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (code, entries) in &scores.by_code {
        for entry in entries {
            writer.serialize(ScoreRecord {
                code: code.as_str(),
                distance: entry.distance,
                score: entry.score,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
