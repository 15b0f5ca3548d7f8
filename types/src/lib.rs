//! Core domain types for Summit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod error;
mod ids;
mod sequence;
mod strategy;

pub use error::{ErrorKind, InputViolation, SearchError};
pub use ids::BoundaryIndex;
pub use sequence::{Samples, Sequence};
pub use strategy::{PreconditionPolicy, RunMode, Strategy};
