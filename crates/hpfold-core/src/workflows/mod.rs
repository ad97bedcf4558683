//! End-to-end pipelines: `Resolve -> Load -> Render -> Write`.
//!
//! Each pipeline is a single synchronous pass with no retained state, so the energy and
//! conformation pipelines can run in either order or concurrently.

pub mod conformation;
pub mod energy;

use crate::core::models::energy::EnergySummary;
use crate::core::paths::{CandidateList, resolve_dir, resolve_file};
use crate::engine::error::PipelineError;
use crate::engine::progress::{PipelineKind, Progress, ProgressReporter, Stage};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Pipeline-specific facts gathered while running, for the final report.
#[derive(Debug, Clone, PartialEq)]
pub enum RunSummary {
    Energy(Option<EnergySummary>),
    Conformation { residues: usize, unlabeled: usize },
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub pipeline: PipelineKind,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub artifacts: Vec<PathBuf>,
    pub summary: RunSummary,
}

/// Input file and output directory chosen for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

pub(crate) fn resolve_paths(
    stages: &StageRunner<'_, '_>,
    input: &CandidateList,
    output_dirs: &CandidateList,
) -> ResolvedPaths {
    let pipeline = stages.pipeline;
    let input_res = resolve_file(input);
    if !input_res.exists() {
        debug!("[{}] No input candidate exists", pipeline);
    } else if input_res.is_fallback() {
        warn!(
            "[{}] {:?} not found, using fallback {:?}",
            pipeline,
            input.primary(),
            &input_res.path
        );
        stages.message(format!("Reading {}", input_res.path.display()));
    }

    let output_res = resolve_dir(output_dirs);
    if output_res.is_fallback() {
        info!(
            "[{}] Output directory {:?} not found, writing to {:?}",
            pipeline,
            output_dirs.primary(),
            &output_res.path
        );
    }

    ResolvedPaths {
        input: input_res.path,
        output_dir: output_res.path,
    }
}

/// Runs pipeline stages while emitting the matching progress events.
pub(crate) struct StageRunner<'r, 'a> {
    pipeline: PipelineKind,
    reporter: &'r ProgressReporter<'a>,
}

impl<'r, 'a> StageRunner<'r, 'a> {
    pub(crate) fn new(pipeline: PipelineKind, reporter: &'r ProgressReporter<'a>) -> Self {
        Self { pipeline, reporter }
    }

    pub(crate) fn run<T>(
        &self,
        stage: Stage,
        f: impl FnOnce() -> Result<T, PipelineError>,
    ) -> Result<T, PipelineError> {
        let pipeline = self.pipeline;
        debug!("[{}] {}", pipeline, stage.name());
        self.reporter.report(Progress::StageStart { pipeline, stage });
        let result = f();
        match &result {
            Ok(_) => self.reporter.report(Progress::StageFinish { pipeline, stage }),
            Err(e) => {
                warn!("[{}] {} failed: {}", pipeline, stage.name(), e);
                self.reporter.report(Progress::Failed { pipeline, stage });
            }
        }
        result
    }

    pub(crate) fn message(&self, text: String) {
        self.reporter.report(Progress::Message(text));
    }

    pub(crate) fn finish(&self) {
        self.reporter.report(Progress::Finished {
            pipeline: self.pipeline,
        });
    }
}
