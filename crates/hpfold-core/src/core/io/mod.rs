//! Readers for the plain-text result files written by the folding simulation.
//!
//! Both formats are whitespace-delimited numeric text in the style accepted by numpy's
//! `loadtxt`: blank lines are skipped and lines starting with `#` are comments.

pub mod conformation;
pub mod energy;
pub mod error;
pub mod traits;

use self::error::{ParseError, ParseErrorKind};
use std::io::{self, BufRead};

/// Iterates over the meaningful lines of a result file as `(line_number, content)`,
/// with 1-based line numbers and comments/blank lines removed.
///
/// Lines that are not valid UTF-8 are reported as [`ParseErrorKind::InvalidEncoding`].
pub(crate) fn data_lines(
    reader: &mut impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), ParseError>> + '_ {
    BufRead::lines(reader)
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok((idx + 1, content)))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Some(Err(ParseError::Line {
                line: idx + 1,
                kind: ParseErrorKind::InvalidEncoding,
            })),
            Err(e) => Some(Err(ParseError::Io(e))),
        })
}
