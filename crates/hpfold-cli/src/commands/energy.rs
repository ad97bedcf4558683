use super::Outcome;
use crate::utils::progress::CliProgressHandler;
use hpfold::engine::config::EnergyConfig;
use hpfold::engine::progress::{PipelineKind, ProgressReporter};
use hpfold::workflows;
use tracing::info;

pub fn run(config: &EnergyConfig, progress: CliProgressHandler) -> Outcome {
    info!("Invoking the energy chart workflow...");
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    workflows::energy::run(config, &reporter)
}

pub fn run_standalone(config: &EnergyConfig) -> Outcome {
    run(config, CliProgressHandler::new(PipelineKind::Energy))
}
