use super::error::{LoadError, ParseError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading one kind of simulation result file.
pub trait ResultFile {
    /// The model decoded from the file.
    type Output;

    /// Decodes the model from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a line cannot be decoded or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, ParseError>;

    /// Opens `path` and decodes the model from it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist,
    /// [`LoadError::Io`] if it cannot be opened or read, and
    /// [`LoadError::Parse`] if its content is malformed.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::from_open(path.to_path_buf(), e))?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader).map_err(|source| match source {
            ParseError::Io(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => LoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
