use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a line of a result file could not be decoded.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseErrorKind {
    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },
    #[error("'{token}' is not a finite number")]
    NonFinite { token: String },
    #[error("expected {expected} columns, found {found}")]
    WrongColumnCount { expected: usize, found: usize },
    #[error("line is not valid UTF-8 text")]
    InvalidEncoding,
}

/// Errors raised while decoding a result file from a reader.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Line { line: usize, kind: ParseErrorKind },
}

/// Errors raised while loading a result file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: '{path}'", path = path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read '{path}': {source}", path = path.display())]
    Io {
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
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }

    pub(crate) fn from_open(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}

/// Parses one whitespace-delimited token as a finite `f64`.
pub(crate) fn parse_finite(token: &str, line: usize) -> Result<f64, ParseError> {
    let value: f64 = token.parse().map_err(|_| ParseError::Line {
        line,
        kind: ParseErrorKind::InvalidNumber {
            token: token.to_string(),
        },
    })?;
    if !value.is_finite() {
        return Err(ParseError::Line {
            line,
            kind: ParseErrorKind::NonFinite {
                token: token.to_string(),
            },
        });
    }
    Ok(value)
}
