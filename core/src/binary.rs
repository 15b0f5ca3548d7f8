use summit_types::{BoundaryIndex, SearchError, Sequence, Strategy};

use crate::search::BoundarySearch;
use crate::trace::{NoTrace, Probe, ProbeTrace};

/// Halves an inclusive `[low, high]` window around the descent predicate.
///
/// # Precondition
///
/// The sequence is a non-decreasing run followed by a strictly decreasing run.
/// Under that precondition the result equals [`LinearScan`](crate::LinearScan)'s
/// and costs O(log n) comparisons. The precondition is not checked here; see
/// [`Searcher`](crate::Searcher) with `PreconditionPolicy::Verify`.
///
/// # Outside the precondition
///
/// The result is not guaranteed to match the linear scan. It is still an
/// in-range index `i` with `values[i - 1] <= values[i]` (when `i > 0`) and
/// `values[i] > values[i + 1]` (when `i` is not last): some rising edge into a
/// descent, not necessarily the first one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinarySearch;

impl BoundarySearch for BinarySearch {
    fn strategy(&self) -> Strategy {
        Strategy::Binary
    }

    fn locate_traced<T, R>(&self, seq: Sequence<'_, T>, trace: &mut R) -> BoundaryIndex
    where
        T: PartialOrd,
        R: ProbeTrace<T> + ?Sized,
    {
        bisect_descent(seq, trace)
    }
}

pub fn find_boundary_binary<T: PartialOrd>(values: &[T]) -> Result<BoundaryIndex, SearchError> {
    Sequence::new(values).map(|seq| bisect_descent(seq, &mut NoTrace))
}

pub(crate) fn bisect_descent<T, R>(seq: Sequence<'_, T>, trace: &mut R) -> BoundaryIndex
where
    T: PartialOrd,
    R: ProbeTrace<T> + ?Sized,
{
    let values = seq.as_slice();
    let mut low = 0;
    let mut high = seq.last_index();

    while low <= high {
        let mid = low + (high - low) / 2;
        trace.probe(&Probe {
            low,
            mid,
            high,
            low_value: &values[low],
            mid_value: &values[mid],
            high_value: &values[high],
        });

        if descends_at(values, mid) {
            // Boundary is at or before mid.
            match mid.checked_sub(1) {
                Some(next_high) => high = next_high,
                None => break,
            }
        } else {
            low = mid + 1;
        }
    }

    BoundaryIndex::new(low)
}

/// The last index has no successor and always counts as a descent, so the
/// window never probes past the end.
fn descends_at<T: PartialOrd>(values: &[T], index: usize) -> bool {
    match values.get(index + 1) {
        Some(next) => values[index] > *next,
        None => true,
    }
}
