use crate::cli::PlotArgs;
use crate::config::build_plot_config;
use crate::error::{CliError, Result};
use plotters::prelude::{BLUE, BitMapBackend, ChartBuilder, Color, IntoDrawingArea, LineSeries, WHITE};
use rnapot::core::models::curve::ScoreCurve;
use rnapot::core::potential::registry::ScoreCurveRegistry;
use rnapot::engine::error::EngineError;
use std::ops::Range;
use std::path::Path;
use tracing::{info, warn};

const PLOT_FILE_SUFFIX: &str = "_Scores_Plot.png";

pub fn run(args: PlotArgs) -> Result<()> {
    let config = build_plot_config(&args)?;

    info!("Loading score curves from {:?}", config.curves_dir);
    let registry =
        ScoreCurveRegistry::load_dir(&config.curves_dir, config.bins).map_err(EngineError::from)?;
    if registry.is_empty() {
        warn!("No score curves found in {:?}.", config.curves_dir);
        println!(
            "Warning: no '*_scores.txt' files found in {}",
            config.curves_dir.display()
        );
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_dir)?;
    println!("Plotting {} score curve(s)...", registry.len());
    for (code, curve) in registry.iter() {
        let path = config.output_dir.join(plot_file_name(code));
        info!("Rendering {} to {:?}", code, path);
        draw_curve_plot(&path, code, curve, (config.width, config.height))?;
        println!("  ✓ {}", path.display());
    }

    Ok(())
}

pub fn plot_file_name(code: &str) -> String {
    format!("{code}{PLOT_FILE_SUFFIX}")
}

/// Chart extents: the full bin span on x, and the score range padded by 5% on y.
fn axis_ranges(curve: &ScoreCurve) -> (Range<f64>, Range<f64>) {
    let range = curve.range();
    let x = f64::from(range.min) - 1.0..f64::from(range.max);

    let (lo, hi) = curve
        .scores()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (x, lo - pad..hi + pad)
}

fn draw_curve_plot(
    path: &Path,
    code: &str,
    curve: &ScoreCurve,
    size: (u32, u32),
) -> Result<()> {
    let plot_err = |e: &dyn std::fmt::Display| CliError::Plot {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let (x_range, y_range) = axis_ranges(curve);
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{code} scores"), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_mesh()
        .x_desc("distance")
        .y_desc("score")
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| plot_err(&e))?;

    chart
        .draw_series(LineSeries::new(
            curve
                .midpoints()
                .into_iter()
                .zip(curve.scores().iter().copied()),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| plot_err(&e))?;

    root.present().map_err(|e| plot_err(&e))?;
    Ok(())
}
