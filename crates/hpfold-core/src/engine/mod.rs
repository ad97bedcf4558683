//! Pipeline plumbing shared by both workflows: configuration, progress events, the error
//! taxonomy reported at the pipeline boundary and artifact persistence.

pub mod config;
pub mod error;
pub mod progress;
pub mod writer;
