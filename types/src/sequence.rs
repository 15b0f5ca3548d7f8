//! Non-empty sequence proof types.
//!
//! These types enforce the one precondition every boundary search shares: the
//! input has at least one element. Once you hold a `Sequence`, `last_index()`
//! is always a valid position and no search has to re-check emptiness.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{BoundaryIndex, InputViolation, SearchError};

/// A borrowed, read-only view of a non-empty slice.
///
/// # Invariants
///
/// - `len() >= 1`
/// - The underlying slice is never mutated through this view
///
/// The caller keeps ownership; constructing a `Sequence` is O(1).
#[derive(Debug, PartialEq, Eq)]
pub struct Sequence<'a, T>(&'a [T]);

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sequence<'_, T> {}

impl<'a, T> Sequence<'a, T> {
    pub fn new(values: &'a [T]) -> Result<Self, SearchError> {
        if values.is_empty() {
            Err(InputViolation::Empty.into())
        } else {
            Ok(Self(values))
        }
    }

    #[must_use]
    pub const fn as_slice(self) -> &'a [T] {
        self.0
    }

    /// Index of the final element. Never underflows.
    #[must_use]
    pub const fn last_index(self) -> usize {
        self.0.len() - 1
    }

    #[must_use]
    pub fn value_at(self, index: BoundaryIndex) -> Option<&'a T> {
        self.0.get(index.value())
    }
}

impl<T> Deref for Sequence<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

/// Owned counterpart of [`Sequence`], used where values cross a process
/// boundary (stdin, config, JSON reports).
///
/// # Serde
///
/// Serializes as a plain JSON array. Deserialization fails on an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>"))]
pub struct Samples<T>(Vec<T>);

impl<T> Samples<T> {
    pub fn new(values: Vec<T>) -> Result<Self, SearchError> {
        if values.is_empty() {
            Err(InputViolation::Empty.into())
        } else {
            Ok(Self(values))
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Sequence<'_, T> {
        Sequence(&self.0)
    }
}

impl<T> TryFrom<Vec<T>> for Samples<T> {
    type Error = SearchError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<T> From<Samples<T>> for Vec<T> {
    fn from(samples: Samples<T>) -> Self {
        samples.0
    }
}

impl<T> Deref for Samples<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
