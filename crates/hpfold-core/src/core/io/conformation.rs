use super::data_lines;
use super::error::{ParseError, ParseErrorKind, parse_finite};
use super::traits::ResultFile;
use crate::core::models::conformation::Conformation;
use nalgebra::Point3;
use std::io::BufRead;

const COLUMNS: usize = 3;

/// Reader for `koncowa_konformacja.txt`: one `x y z` row per residue, in sequence order.
pub struct ConformationFile;

impl ResultFile for ConformationFile {
    type Output = Conformation;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, ParseError> {
        let mut positions = Vec::new();
        for line_res in data_lines(reader) {
            let (line_num, line) = line_res?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != COLUMNS {
                return Err(ParseError::Line {
                    line: line_num,
                    kind: ParseErrorKind::WrongColumnCount {
                        expected: COLUMNS,
                        found: tokens.len(),
                    },
                });
            }
            let x = parse_finite(tokens[0], line_num)?;
            let y = parse_finite(tokens[1], line_num)?;
            let z = parse_finite(tokens[2], line_num)?;
            positions.push(Point3::new(x, y, z));
        }
        Ok(Conformation::new(positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::LoadError;
    use std::io::Cursor;

    fn parse(content: &str) -> Result<Conformation, ParseError> {
        ConformationFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_rows_as_positions_in_sequence_order() {
        let conformation = parse("0 0 0\n1 0 0\n1 1 0\n").unwrap();
        assert_eq!(
            conformation.positions(),
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn accepts_tabs_and_repeated_spaces_between_columns() {
        let conformation = parse("0\t  -1   2.5\n").unwrap();
        assert_eq!(conformation.positions(), &[Point3::new(0.0, -1.0, 2.5)]);
    }

    #[test]
    fn empty_file_yields_empty_conformation() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn rejects_rows_with_fewer_than_three_columns() {
        let err = parse("0 0 0\n1 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Line {
                line: 2,
                kind: ParseErrorKind::WrongColumnCount {
                    expected: 3,
                    found: 2
                }
            }
        ));
    }

    #[test]
    fn rejects_rows_with_more_than_three_columns() {
        let err = parse("0 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Line {
                kind: ParseErrorKind::WrongColumnCount { found: 4, .. },
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = parse("0 y 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Line {
                line: 1,
                kind: ParseErrorKind::InvalidNumber { .. }
            }
        ));
    }

    #[test]
    fn read_from_path_reports_malformed_rows_as_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("koncowa_konformacja.txt");
        std::fs::write(&path, "0 0\n").unwrap();

        let err = ConformationFile::read_from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
