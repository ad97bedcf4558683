use super::{PipelineReport, RunSummary, StageRunner, resolve_paths};
use crate::core::io::{energy::EnergyFile, traits::ResultFile};
use crate::core::render::Artifact;
use crate::core::render::energy::EnergyChart;
use crate::engine::config::EnergyConfig;
use crate::engine::error::PipelineError;
use crate::engine::progress::{PipelineKind, ProgressReporter, Stage};
use crate::engine::writer::write_artifacts;
use tracing::{info, instrument};

const PIPELINE: PipelineKind = PipelineKind::Energy;

/// Plots the energy trajectory and writes it in every configured format.
#[instrument(skip_all, name = "energy_pipeline")]
pub fn run(
    config: &EnergyConfig,
    reporter: &ProgressReporter,
) -> Result<PipelineReport, PipelineError> {
    let stages = StageRunner::new(PIPELINE, reporter);

    let paths = stages.run(Stage::Resolving, || {
        Ok(resolve_paths(&stages, &config.input, &config.output_dirs))
    })?;

    let trajectory = stages.run(Stage::Loading, || {
        Ok(EnergyFile::read_from_path(&paths.input)?)
    })?;
    let summary = trajectory.summary();
    match &summary {
        Some(s) => info!(
            "Loaded {} steps from {:?} (initial {:.3}, final {:.3}, minimum {:.3} at step {})",
            s.steps, &paths.input, s.initial, s.final_energy, s.minimum, s.minimum_step
        ),
        None => info!("Loaded an empty energy trajectory from {:?}", &paths.input),
    }

    let artifacts = stages.run(Stage::Rendering, || {
        let chart = EnergyChart::new(&trajectory);
        config
            .formats
            .iter()
            .map(|&format| {
                Artifact::render(&chart, &config.chart_stem, format, config.figure, config.dpi)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| PipelineError::Render {
                pipeline: PIPELINE,
                source,
            })
    })?;

    let written = stages.run(Stage::Writing, || {
        write_artifacts(&paths.output_dir, &artifacts)
    })?;
    stages.finish();

    Ok(PipelineReport {
        pipeline: PIPELINE,
        input: paths.input,
        output_dir: paths.output_dir,
        artifacts: written,
        summary: RunSummary::Energy(summary),
    })
}
