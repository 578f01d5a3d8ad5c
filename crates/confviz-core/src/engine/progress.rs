use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Ranking,
    Planning,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Parsing => "Parsing ensemble",
            Stage::Ranking => "Ranking conformers",
            Stage::Planning => "Planning ChimeraX script",
            Stage::Writing => "Writing output files",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    StageStart { stage: Stage },
    StageFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; a reporter without one is a no-op.
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

    /// Runs `f` between a `StageStart` and a `StageFinish` event.
    pub fn stage<T>(&self, stage: Stage, f: impl FnOnce() -> T) -> T {
        self.report(Progress::StageStart { stage });
        let result = f();
        self.report(Progress::StageFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
        assert_eq!(reporter.stage(Stage::Ranking, || 7), 7);
    }

    #[test]
    fn stage_wraps_closure_in_start_and_finish_events() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p: Progress| {
            events.lock().unwrap().push(p);
        }));

        reporter.stage(Stage::Parsing, || {
            reporter.report(Progress::Message("inside".to_string()));
        });
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::StageStart {
                    stage: Stage::Parsing
                },
                Progress::Message("inside".to_string()),
                Progress::StageFinish,
            ]
        );
    }

    #[test]
    fn stage_names_are_human_readable() {
        assert_eq!(Stage::Writing.to_string(), "Writing output files");
    }
}
