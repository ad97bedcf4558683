//! # Core Module
//!
//! Stateless building blocks shared by both pipelines.
//!
//! - **Data models** ([`models`]) - energy trajectories, conformations and the HP sequence
//! - **Result files** ([`io`]) - readers for the simulation's plain-text outputs
//! - **Path resolution** ([`paths`]) - ranked candidate lookup for inputs and outputs
//! - **Rendering** ([`render`]) - chart models and their `plotters` drawings

pub mod io;
pub mod models;
pub mod paths;
pub mod render;
