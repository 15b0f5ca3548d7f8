//! Single-peak shape classification.
//!
//! A full O(n) pass, used to verify the binary strategy's precondition when a
//! caller opts in, and by tests to sort inputs into "must agree" and
//! "may differ".

use std::cmp::Ordering;

use summit_types::{BoundaryIndex, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Non-decreasing up to `peak`, non-increasing after it.
    ///
    /// `strict_descent` is true when every step after the peak strictly
    /// decreases. Only then is the binary strategy guaranteed to agree with
    /// the linear scan.
    SinglePeak {
        peak: BoundaryIndex,
        strict_descent: bool,
    },
    /// The sequence descends and later rises (or holds an incomparable pair)
    /// starting at `rises_again_at`.
    Irregular { rises_again_at: usize },
}

impl Shape {
    #[must_use]
    pub const fn is_single_peak(self) -> bool {
        matches!(self, Self::SinglePeak { .. })
    }

    #[must_use]
    pub const fn strategies_agree(self) -> bool {
        matches!(
            self,
            Self::SinglePeak {
                strict_descent: true,
                ..
            }
        )
    }
}

pub fn classify_shape<T: PartialOrd>(seq: Sequence<'_, T>) -> Shape {
    let mut peak: Option<usize> = None;
    let mut strict_descent = true;

    for (i, pair) in seq.windows(2).enumerate() {
        let step = pair[0].partial_cmp(&pair[1]);
        match peak {
            None => {
                if step == Some(Ordering::Greater) {
                    peak = Some(i);
                }
            }
            Some(_) => match step {
                Some(Ordering::Greater) => {}
                Some(Ordering::Equal) => strict_descent = false,
                Some(Ordering::Less) | None => {
                    return Shape::Irregular {
                        rises_again_at: i + 1,
                    };
                }
            },
        }
    }

    Shape::SinglePeak {
        peak: BoundaryIndex::new(peak.unwrap_or(seq.last_index())),
        strict_descent,
    }
}
