//! Strategy selection and the policy-aware [`Searcher`].

use summit_types::{
    BoundaryIndex, InputViolation, PreconditionPolicy, SearchError, Sequence, Strategy,
};

use crate::binary::BinarySearch;
use crate::linear::LinearScan;
use crate::shape::{Shape, classify_shape};
use crate::trace::{NoTrace, ProbeTrace};

/// Locate the boundary index of a non-empty sequence.
///
/// Implementations are pure: the same sequence always yields the same index,
/// and the trace only observes.
pub trait BoundarySearch {
    fn strategy(&self) -> Strategy;

    fn locate_traced<T, R>(&self, seq: Sequence<'_, T>, trace: &mut R) -> BoundaryIndex
    where
        T: PartialOrd,
        R: ProbeTrace<T> + ?Sized;

    fn locate<T: PartialOrd>(&self, seq: Sequence<'_, T>) -> BoundaryIndex {
        self.locate_traced(seq, &mut NoTrace)
    }
}

impl BoundarySearch for Strategy {
    fn strategy(&self) -> Strategy {
        *self
    }

    fn locate_traced<T, R>(&self, seq: Sequence<'_, T>, trace: &mut R) -> BoundaryIndex
    where
        T: PartialOrd,
        R: ProbeTrace<T> + ?Sized,
    {
        match self {
            Strategy::Linear => LinearScan.locate_traced(seq, trace),
            Strategy::Binary => BinarySearch.locate_traced(seq, trace),
        }
    }
}

/// A strategy paired with how much it trusts its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    strategy: Strategy,
    policy: PreconditionPolicy,
}

impl Searcher {
    #[must_use]
    pub const fn new(strategy: Strategy, policy: PreconditionPolicy) -> Self {
        Self { strategy, policy }
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub const fn policy(&self) -> PreconditionPolicy {
        self.policy
    }

    pub fn run<T: PartialOrd>(&self, values: &[T]) -> Result<BoundaryIndex, SearchError> {
        self.run_traced(values, &mut NoTrace)
    }

    /// Validate the input, then locate the boundary.
    ///
    /// Empty input is always rejected. Under `PreconditionPolicy::Verify` the
    /// binary strategy also rejects sequences that are not single-peaked; the
    /// linear strategy is correct on any input and skips the check.
    pub fn run_traced<T, R>(
        &self,
        values: &[T],
        trace: &mut R,
    ) -> Result<BoundaryIndex, SearchError>
    where
        T: PartialOrd,
        R: ProbeTrace<T> + ?Sized,
    {
        let seq = Sequence::new(values)?;

        if self.strategy == Strategy::Binary
            && self.policy.verifies()
            && let Shape::Irregular { rises_again_at } = classify_shape(seq)
        {
            tracing::debug!(rises_again_at, "rejecting input that is not single-peaked");
            return Err(InputViolation::NotSinglePeak { rises_again_at }.into());
        }

        let index = self.strategy.locate_traced(seq, trace);
        tracing::trace!(
            strategy = self.strategy.as_str(),
            len = seq.len(),
            index = index.value(),
            "boundary located"
        );
        Ok(index)
    }
}

/// Both strategies run on the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub linear: BoundaryIndex,
    pub binary: BoundaryIndex,
}

impl Comparison {
    #[must_use]
    pub fn agree(&self) -> bool {
        self.linear == self.binary
    }

    #[must_use]
    pub fn get(&self, strategy: Strategy) -> BoundaryIndex {
        match strategy {
            Strategy::Linear => self.linear,
            Strategy::Binary => self.binary,
        }
    }
}

/// Run the linear and binary strategies side by side.
///
/// The trace sees only the binary strategy's probes, since the linear scan
/// reports none.
pub fn compare_strategies<T, R>(
    values: &[T],
    policy: PreconditionPolicy,
    trace: &mut R,
) -> Result<Comparison, SearchError>
where
    T: PartialOrd,
    R: ProbeTrace<T> + ?Sized,
{
    let linear = Searcher::new(Strategy::Linear, policy).run(values)?;
    let binary = Searcher::new(Strategy::Binary, policy).run_traced(values, trace)?;
    let comparison = Comparison { linear, binary };
    if !comparison.agree() {
        tracing::debug!(
            linear = linear.value(),
            binary = binary.value(),
            "strategies disagree"
        );
    }
    Ok(comparison)
}
