//! # HP-Fold Core Library
//!
//! Turns the raw output of an HP-model lattice folding simulation into diagnostic charts:
//! an energy-versus-step trajectory and a 3D rendering of the final conformation with
//! residues colored by hydrophobicity class.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Immutable data models (`EnergyTrajectory`,
//!   `Conformation`, `HydrophobicitySequence`), result-file readers, the ranked path
//!   resolver and the chart renderers.
//!
//! - **[`engine`]: The Plumbing.** Pipeline configuration, the error taxonomy reported at
//!   the pipeline boundary, stage progress events and the artifact writer.
//!
//! - **[`workflows`]: The Public API.** One entry point per pipeline
//!   (`Resolve -> Load -> Render -> Write`), each returning a `PipelineReport` or a
//!   typed `PipelineError`.

pub mod core;
pub mod engine;
pub mod workflows;
