use super::progress::{PipelineKind, Stage};
use crate::core::io::error::{LoadError, ParseError};
use crate::core::render::error::RenderError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a pipeline run, caught at the pipeline boundary and reported to the operator.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input file not found: '{path}'", path = path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to render the {pipeline} chart: {source}")]
    Render {
        pipeline: PipelineKind,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse failure class used in operator diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Read,
    Parse,
    Render,
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Read => "ReadError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::Render => "RenderError",
            ErrorKind::Write => "WriteError",
        })
    }
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::NotFound { .. } => ErrorKind::NotFound,
            PipelineError::Read { .. } => ErrorKind::Read,
            PipelineError::Parse { .. } => ErrorKind::Parse,
            PipelineError::Render { .. } => ErrorKind::Render,
            PipelineError::Write { .. } => ErrorKind::Write,
        }
    }

    /// The stage the pipeline was in when it failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::NotFound { .. }
            | PipelineError::Read { .. }
            | PipelineError::Parse { .. } => Stage::Loading,
            PipelineError::Render { .. } => Stage::Rendering,
            PipelineError::Write { .. } => Stage::Writing,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PipelineError::NotFound { path }
            | PipelineError::Read { path, .. }
            | PipelineError::Parse { path, .. }
            | PipelineError::Write { path, .. } => Some(path),
            PipelineError::Render { .. } => None,
        }
    }

    /// Suggested fix shown after the diagnostic, if one applies.
    pub fn remedy(&self) -> Option<String> {
        match self {
            PipelineError::NotFound { path } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let dir = path
                    .parent()
                    .filter(|d| !d.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                Some(format!(
                    "Ensure {} exists in {}/ or in the current directory.",
                    name,
                    dir.display()
                ))
            }
            PipelineError::Read { .. } => Some("Check the file permissions.".to_string()),
            PipelineError::Parse { .. } => Some(
                "Check that the simulation finished and wrote the file completely.".to_string(),
            ),
            PipelineError::Render { .. } => None,
            PipelineError::Write { .. } => {
                Some("Check that the output directory exists and is writable.".to_string())
            }
        }
    }
}

impl From<LoadError> for PipelineError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound { path } => PipelineError::NotFound { path },
            LoadError::Io { path, source } => PipelineError::Read { path, source },
            LoadError::Parse { path, source } => PipelineError::Parse { path, source },
        }
    }
}
