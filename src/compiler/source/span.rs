use serde::Serialize;

use super::Offset;

/// A half open range `[low, high)` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    low: Offset,
    high: Offset,
}

impl Span {
    pub fn new(low: Offset, high: Offset) -> Span {
        debug_assert!(low <= high, "Span low must not exceed high");
        Span { low, high }
    }

    pub fn zero() -> Span {
        Span::new(Offset::new(0), Offset::new(0))
    }

    /// An empty span sitting at the given offset.
    pub fn at(o: Offset) -> Span {
        Span::new(o, o)
    }

    pub fn low(&self) -> Offset {
        self.low
    }

    pub fn high(&self) -> Offset {
        self.high
    }

    /// Returns the smallest span which covers both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.low.min(other.low), self.high.max(other.high))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}
