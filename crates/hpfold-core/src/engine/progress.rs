use std::fmt;

/// The two independent post-processing pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Energy,
    Conformation,
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PipelineKind::Energy => "energy",
            PipelineKind::Conformation => "conformation",
        })
    }
}

/// Non-terminal states of a pipeline run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Resolving,
    Loading,
    Rendering,
    Writing,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Resolving => "Resolving paths",
            Stage::Loading => "Loading results",
            Stage::Rendering => "Rendering chart",
            Stage::Writing => "Writing artifacts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    StageStart { pipeline: PipelineKind, stage: Stage },
    StageFinish { pipeline: PipelineKind, stage: Stage },

    /// Terminal `DONE` state.
    Finished { pipeline: PipelineKind },
    /// Terminal `FAILED` state, entered from `stage`.
    Failed { pipeline: PipelineKind, stage: Stage },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

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
}
