use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rnapot::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;
const SPINNER_TEMPLATE: &str = "{spinner:.green} {prefix:.bold} {msg}";
const BAR_TEMPLATE: &str = "{prefix:>20.bold} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";

/// One terminal bar reused across the phases of a training or scoring run.
///
/// The bar prefix is the phase name and the message is the structure file or
/// base-pair code that was just processed.
struct PhaseBar {
    bar: ProgressBar,
    skipped: usize,
}

impl PhaseBar {
    fn new(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();
        Self { bar, skipped: 0 }
    }

    fn apply(&mut self, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                self.skipped = 0;
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(spinner_style());
                self.bar.set_prefix(name);
                self.bar.set_message("");
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::TaskStart { total_steps } => {
                self.bar.disable_steady_tick();
                self.bar.set_length(total_steps);
                self.bar.set_position(0);
                self.bar.set_style(bar_style());
            }
            Progress::ItemDone { item } => {
                self.bar.inc(1);
                self.bar.set_message(item);
            }
            Progress::TaskFinish => {
                if let Some(length) = self.bar.length() {
                    self.bar.set_position(length);
                }
                self.bar.set_message("");
            }
            Progress::Skipped { item, reason } => {
                self.skipped += 1;
                self.bar.println(format!("  ⚠ {item}: {reason}"));
            }
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                let summary = match self.skipped {
                    0 => "✓ done".to_string(),
                    n => format!("✓ done, {n} skipped"),
                };
                self.bar.finish_with_message(summary);
            }
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

/// Renders workflow [`Progress`] events on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<PhaseBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            state: Arc::new(Mutex::new(PhaseBar::new(target))),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();
        Box::new(move |event: Progress| match state.lock() {
            Ok(mut phase_bar) => phase_bar.apply(event),
            Err(_) => warn!("Progress bar mutex was poisoned. Cannot update progress."),
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
