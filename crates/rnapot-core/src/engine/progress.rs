/// Events emitted by the workflows while they run.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    /// One step of the current task is done. `item` is the structure file or
    /// base-pair code it covered.
    ItemDone { item: String },
    TaskFinish,

    /// An input file or base-pair code was left out; the run continues.
    Skipped { item: String, reason: String },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    pub fn item_done(&self, item: impl Into<String>) {
        if self.callback.is_some() {
            self.report(Progress::ItemDone { item: item.into() });
        }
    }

    pub fn skipped(&self, item: impl Into<String>, reason: impl Into<String>) {
        if self.callback.is_some() {
            self.report(Progress::Skipped {
                item: item.into(),
                reason: reason.into(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.item_done("helix.pdb");
        reporter.skipped("AA", "no distances");
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(format!("{event:?}"));
        }));

        reporter.report(Progress::PhaseStart { name: "Scoring" });
        reporter.skipped("XA", "no score curve");
        reporter.report(Progress::PhaseFinish);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].contains("Scoring"));
        assert!(seen[1].contains("XA") && seen[1].contains("no score curve"));
        assert_eq!(seen[2], "PhaseFinish");
    }
}
