use hpfold::engine::progress::{PipelineKind, Progress, ProgressCallback};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Shows the current stage of one pipeline as a spinner on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new(pipeline: PipelineKind) -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_prefix(pipeline.to_string())
            .with_message("Waiting...");
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    /// Creates a handler whose spinner is drawn alongside the others in `multi`.
    pub fn attached_to(multi: &MultiProgress, pipeline: PipelineKind) -> Self {
        let handler = Self::new(pipeline);
        if let Ok(mut pb) = handler.pb.lock() {
            *pb = multi.add(pb.clone());
        }
        handler
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::StageStart { stage, .. } => {
                    if pb_guard.is_finished() {
                        pb_guard.reset();
                    }
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(format!("{}...", stage.name()));
                }
                Progress::StageFinish { .. } => {
                    pb_guard.tick();
                }
                Progress::Finished { .. } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_with_message("✓ Done");
                }
                Progress::Failed { stage, .. } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.abandon_with_message(format!("✗ {} failed", stage.name()));
                }
                Progress::Message(msg) => {
                    if !pb_guard.is_finished() {
                        pb_guard.println(format!("  {}", msg));
                    } else {
                        pb_guard.set_message(msg);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} [{prefix}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpfold::engine::progress::Stage;
    use std::thread;

    const PIPELINE: PipelineKind = PipelineKind::Energy;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new(PIPELINE);
        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.prefix(), "energy");
    }

    #[test]
    fn callback_follows_the_stage_sequence() {
        let handler = CliProgressHandler::new(PIPELINE);
        let callback = handler.get_callback();

        callback(Progress::StageStart {
            pipeline: PIPELINE,
            stage: Stage::Loading,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Loading results...");
            assert!(!pb.is_finished());
        }

        callback(Progress::StageFinish {
            pipeline: PIPELINE,
            stage: Stage::Loading,
        });
        callback(Progress::Finished { pipeline: PIPELINE });
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.message(), "✓ Done");
        }
    }

    #[test]
    fn failure_names_the_stage() {
        let handler = CliProgressHandler::new(PIPELINE);
        let callback = handler.get_callback();

        callback(Progress::StageStart {
            pipeline: PIPELINE,
            stage: Stage::Writing,
        });
        callback(Progress::Failed {
            pipeline: PIPELINE,
            stage: Stage::Writing,
        });

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✗ Writing artifacts failed");
    }

    #[test]
    fn callback_is_thread_safe() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let handler = CliProgressHandler::attached_to(&multi, PipelineKind::Conformation);
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::StageStart {
                pipeline: PipelineKind::Conformation,
                stage: Stage::Rendering,
            });
            callback(Progress::Finished {
                pipeline: PipelineKind::Conformation,
            });
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Done");
    }
}
