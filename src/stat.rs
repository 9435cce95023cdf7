//! Hit counting for distribution checks in tests.

const BLOCK: usize = 256;

fn kahan_add(x: f64, sum: &mut f64, c: &mut f64) {
    let y = x - *c;
    let t = *sum + y;
    *c = (t - *sum) - y;
    *sum = t;
}

/// Compensated sum over blocks of plain sums.
fn block_kahan_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    // Correction.
    let mut c = 0.0;
    let mut block = 0.0;
    let mut filled = 0;

    for v in values {
        block += v;
        filled += 1;
        if filled == BLOCK {
            kahan_add(block, &mut sum, &mut c);
            block = 0.0;
            filled = 0;
        }
    }
    kahan_add(block, &mut sum, &mut c);
    sum
}

/// Number of times each slot `0..len` was drawn.
#[derive(Debug)]
pub(crate) struct Tally {
    hits: Vec<u64>,
}

impl Tally {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            hits: vec![0; len],
        }
    }

    pub(crate) fn record(&mut self, slot: usize) {
        self.hits[slot] += 1;
    }

    /// Mean hits per slot, `None` without slots.
    pub(crate) fn mean(&self) -> Option<f64> {
        if self.hits.is_empty() {
            return None;
        }
        let total = block_kahan_sum(self.hits.iter().map(|&h| h as f64));
        Some(total / self.hits.len() as f64)
    }

    pub(crate) fn variance(&self) -> Option<f64> {
        let mean = self.mean()?;
        let squares = block_kahan_sum(self.hits.iter().map(|&h| {
            let d = h as f64 - mean;
            d * d
        }));
        Some(squares / self.hits.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::{block_kahan_sum, Tally};

    #[test]
    fn test_tally_stats() {
        let mut tally = Tally::new(5);
        for slot in 0..5 {
            for _ in 0..=slot {
                tally.record(slot);
            }
        }
        // hits = [1, 2, 3, 4, 5]
        assert!((tally.mean().unwrap() - 3.0).abs() < 1e-9);
        assert!((tally.variance().unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_tally_empty() {
        let tally = Tally::new(0);
        assert!(tally.mean().is_none());
        assert!(tally.variance().is_none());
    }

    #[test]
    fn test_sum_spans_blocks() {
        let sum = block_kahan_sum((0..1000).map(|v| v as f64));
        assert_eq!(sum, 499_500.0);
    }
}
