use super::data_lines;
use super::error::{ParseError, parse_finite};
use super::traits::ResultFile;
use crate::core::models::energy::EnergyTrajectory;
use std::io::BufRead;

/// Reader for `energia.txt`: one energy value per simulation step.
///
/// Values are read as a flat whitespace-delimited sequence, so several values on one
/// line are accepted and kept in order.
pub struct EnergyFile;

impl ResultFile for EnergyFile {
    type Output = EnergyTrajectory;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, ParseError> {
        let mut values = Vec::new();
        for line_res in data_lines(reader) {
            let (line_num, line) = line_res?;
            for token in line.split_whitespace() {
                values.push(parse_finite(token, line_num)?);
            }
        }
        Ok(EnergyTrajectory::new(values))
    }
}
