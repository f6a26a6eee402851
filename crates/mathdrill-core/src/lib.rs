//! mathdrill-core — Equation generation, challenge evaluation, and session logging.
//!
//! This crate defines the data model and engine that the mathdrill CLI
//! builds on: random single-operation equations, challenges with one field
//! concealed, attempt records, and the per-session CSV log.

pub mod challenge;
pub mod equation;
pub mod error;
pub mod log;
pub mod record;
pub mod session;
