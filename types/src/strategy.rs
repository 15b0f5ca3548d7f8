use serde::{Deserialize, Serialize};

/// Which algorithm locates the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Left-to-right scan. Correct on any sequence.
    #[default]
    Linear,
    /// Window-halving search. Only meaningful on single-peak sequences.
    Binary,
}

impl Strategy {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" | "scan" | "o(n)" => Some(Self::Linear),
            "binary" | "bisect" | "o(log n)" => Some(Self::Binary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }

    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::Linear => "O(n)",
            Self::Binary => "O(log n)",
        }
    }

    #[must_use]
    pub fn all() -> &'static [Strategy] {
        &[Strategy::Linear, Strategy::Binary]
    }
}

/// What a caller wants run: one strategy, or both side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single(Strategy),
    Compare,
}

impl Default for RunMode {
    fn default() -> Self {
        Self::Single(Strategy::default())
    }
}

impl RunMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "both" | "compare" => Some(Self::Compare),
            other => Strategy::parse(other).map(Self::Single),
        }
    }
}

/// Whether the binary strategy trusts the single-peak precondition or checks
/// it first.
///
/// Verification is O(n) and defeats the point of the O(log n) search, so it is
/// opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreconditionPolicy {
    #[default]
    Assume,
    Verify,
}

impl PreconditionPolicy {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "assume" | "trust" => Some(Self::Assume),
            "verify" | "check" => Some(Self::Verify),
            _ => None,
        }
    }

    #[must_use]
    pub const fn verifies(self) -> bool {
        matches!(self, Self::Verify)
    }
}
