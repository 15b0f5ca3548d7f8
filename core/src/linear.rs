use summit_types::{BoundaryIndex, SearchError, Sequence, Strategy};

use crate::search::BoundarySearch;
use crate::trace::ProbeTrace;

/// Left-to-right scan for the first descent.
///
/// Works on any sequence. O(n) time, O(1) space. Reports no probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearScan;

impl BoundarySearch for LinearScan {
    fn strategy(&self) -> Strategy {
        Strategy::Linear
    }

    fn locate_traced<T, R>(&self, seq: Sequence<'_, T>, _trace: &mut R) -> BoundaryIndex
    where
        T: PartialOrd,
        R: ProbeTrace<T> + ?Sized,
    {
        first_descent(seq)
    }
}

/// First `i` with `values[i] > values[i + 1]`, or the last index when the
/// sequence never descends.
pub fn find_boundary_linear<T: PartialOrd>(values: &[T]) -> Result<BoundaryIndex, SearchError> {
    Sequence::new(values).map(first_descent)
}

pub(crate) fn first_descent<T: PartialOrd>(seq: Sequence<'_, T>) -> BoundaryIndex {
    let index = seq
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .unwrap_or(seq.last_index());
    BoundaryIndex::new(index)
}
