//! Immutable data models produced by the result-file readers.

pub mod conformation;
pub mod energy;
pub mod sequence;
