use super::Outcome;
use crate::utils::progress::CliProgressHandler;
use hpfold::engine::config::ConformationConfig;
use hpfold::engine::progress::{PipelineKind, ProgressReporter};
use hpfold::workflows;
use tracing::info;

pub fn run(config: &ConformationConfig, progress: CliProgressHandler) -> Outcome {
    info!(
        "Invoking the conformation chart workflow ({} HP residues, overflow coloring '{}')...",
        config.sequence.len(),
        config.overflow
    );
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    workflows::conformation::run(config, &reporter)
}

pub fn run_standalone(config: &ConformationConfig) -> Outcome {
    run(config, CliProgressHandler::new(PipelineKind::Conformation))
}
