//! Probe tracing for the binary strategy.
//!
//! One [`Probe`] is reported per loop iteration, before the window shrinks.

use std::fmt::Debug;

/// Snapshot of one binary-search iteration.
///
/// `low <= mid <= high` always holds; all three are valid indices.
#[derive(Debug)]
pub struct Probe<'a, T> {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
    pub low_value: &'a T,
    pub mid_value: &'a T,
    pub high_value: &'a T,
}

pub trait ProbeTrace<T> {
    fn probe(&mut self, probe: &Probe<'_, T>);
}

/// Discards every probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl<T> ProbeTrace<T> for NoTrace {
    #[inline]
    fn probe(&mut self, _probe: &Probe<'_, T>) {}
}

/// Emits each probe as a `debug` event on the `summit_core::trace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProbe;

impl<T: Debug> ProbeTrace<T> for TracingProbe {
    fn probe(&mut self, probe: &Probe<'_, T>) {
        tracing::debug!(
            low = probe.low,
            mid = probe.mid,
            high = probe.high,
            low_value = ?probe.low_value,
            mid_value = ?probe.mid_value,
            high_value = ?probe.high_value,
            "probe"
        );
    }
}

impl<T, F> ProbeTrace<T> for F
where
    F: FnMut(&Probe<'_, T>),
{
    fn probe(&mut self, probe: &Probe<'_, T>) {
        self(probe);
    }
}
