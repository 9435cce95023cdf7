/// Half-open interval `[min, max)` to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: u64,
    pub max: u64,
}

impl Range {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// `[0, max)`.
    pub fn below(max: u64) -> Self {
        Self { min: 0, max }
    }

    /// Number of candidates, zero for an inverted range.
    pub fn span(&self) -> u64 {
        self.max.saturating_sub(self.min)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value < self.max
    }
}

impl From<std::ops::Range<u64>> for Range {
    fn from(range: std::ops::Range<u64>) -> Self {
        Self::new(range.start, range.end)
    }
}
