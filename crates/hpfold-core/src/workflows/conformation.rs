use super::{PipelineReport, RunSummary, StageRunner, resolve_paths};
use crate::core::io::{conformation::ConformationFile, traits::ResultFile};
use crate::core::render::conformation::{ConformationChart, MarkerColor};
use crate::core::render::{Artifact, ArtifactFormat};
use crate::engine::config::ConformationConfig;
use crate::engine::error::PipelineError;
use crate::engine::progress::{PipelineKind, ProgressReporter, Stage};
use crate::engine::writer::write_artifacts;
use tracing::{info, instrument};

const PIPELINE: PipelineKind = PipelineKind::Conformation;

/// Renders the final conformation as a 3D trace colored by the configured HP sequence.
#[instrument(skip_all, name = "conformation_pipeline")]
pub fn run(
    config: &ConformationConfig,
    reporter: &ProgressReporter,
) -> Result<PipelineReport, PipelineError> {
    let stages = StageRunner::new(PIPELINE, reporter);

    let paths = stages.run(Stage::Resolving, || {
        Ok(resolve_paths(&stages, &config.input, &config.output_dirs))
    })?;

    let conformation = stages.run(Stage::Loading, || {
        Ok(ConformationFile::read_from_path(&paths.input)?)
    })?;
    info!(
        "Loaded {} residue positions from {:?}",
        conformation.len(),
        &paths.input
    );

    let (artifact, unlabeled) = stages.run(Stage::Rendering, || {
        let render_error = |source| PipelineError::Render {
            pipeline: PIPELINE,
            source,
        };
        let chart = ConformationChart::new(&conformation, &config.sequence, config.overflow)
            .map_err(render_error)?;
        let unlabeled = chart
            .markers()
            .iter()
            .filter(|m| m.color == MarkerColor::Unlabeled)
            .count();
        let artifact = Artifact::render(
            &chart,
            &config.chart_stem,
            ArtifactFormat::Png,
            config.figure,
            config.dpi,
        )
        .map_err(render_error)?;
        Ok((artifact, unlabeled))
    })?;

    let written = stages.run(Stage::Writing, || {
        write_artifacts(&paths.output_dir, std::slice::from_ref(&artifact))
    })?;
    stages.finish();

    Ok(PipelineReport {
        pipeline: PIPELINE,
        input: paths.input,
        output_dir: paths.output_dir,
        artifacts: written,
        summary: RunSummary::Conformation {
            residues: conformation.len(),
            unlabeled,
        },
    })
}
