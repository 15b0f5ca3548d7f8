//! Boundary search for Summit.
//!
//! Given a non-empty ordered sequence, locate the index where it stops rising.
//! Two strategies answer the same question:
//!
//! - [`LinearScan`]: O(n), correct on any input. Returns the first descent, or
//!   the last index when the sequence never descends.
//! - [`BinarySearch`]: O(log n), only trustworthy on single-peak input (a
//!   non-decreasing run followed by a strictly decreasing run).
//!
//! ```text
//! &[T] -> Sequence (non-empty) -> Strategy::locate_traced(seq, trace) -> BoundaryIndex
//!                                          |
//!                                          v
//!                                  ProbeTrace (optional)
//! ```
//!
//! Both strategies are pure: no shared state, no IO. Probe tracing is a hook
//! and never changes the result.

mod binary;
mod linear;
mod search;
mod shape;
mod trace;

pub use binary::{BinarySearch, find_boundary_binary};
pub use linear::{LinearScan, find_boundary_linear};
pub use search::{BoundarySearch, Comparison, Searcher, compare_strategies};
pub use shape::{Shape, classify_shape};
pub use trace::{NoTrace, Probe, ProbeTrace, TracingProbe};

pub use summit_types::{
    BoundaryIndex, ErrorKind, InputViolation, PreconditionPolicy, RunMode, Samples, SearchError,
    Sequence, Strategy,
};
