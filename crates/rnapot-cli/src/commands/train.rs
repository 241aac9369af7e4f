use crate::cli::TrainArgs;
use crate::config::build_training_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use rnapot::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: TrainArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_training_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Training potential...");
    info!("Invoking the core training workflow...");
    let result = workflows::train::run(&config, &reporter)?;

    println!(
        "Pooled {} distance(s) from {} structure(s).",
        result.total_distances, result.structures_used
    );
    for path in &result.written {
        println!("  ✓ {}", path.display());
    }

    if !result.skipped_codes.is_empty() {
        warn!(
            "{} base-pair code(s) had no distances and were skipped.",
            result.skipped_codes.len()
        );
        println!(
            "Skipped (no matching distances): {}",
            result.skipped_codes.join(", ")
        );
    }
    for failed in &result.failed_structures {
        println!(
            "Warning: could not read {}: {}",
            failed.path.display(),
            failed.reason
        );
    }

    Ok(())
}
