use std::collections::BTreeSet;
use std::ops::Bound;

use tracing::{debug, error, trace, warn};

use crate::error::{Result, SampleError};
use crate::range::Range;
use crate::source::{RandomSource, SampleInt};

/// Rejects a request before any value is drawn.
fn validate<T: SampleInt>(n: usize, range: Range) -> Result<()> {
    let err = if range.max > T::MAX {
        SampleError::MaxOutOfRange {
            max: range.max,
            limit: T::MAX,
        }
    } else if range.min >= range.max {
        SampleError::EmptyRange {
            min: range.min,
            max: range.max,
        }
    } else if n as u64 > range.span() {
        SampleError::TooManyRequested {
            requested: n,
            available: range.span(),
        }
    } else {
        return Ok(());
    };
    warn!(%err, "rejecting sample request");
    Err(err)
}

/// Every insertion must grow the set by exactly one.
fn ensure_grown<T>(drawn: &BTreeSet<T>, value: u64, draws: usize) -> Result<()> {
    if drawn.len() == draws {
        return Ok(());
    }
    let err = SampleError::DuplicateGenerated { value, draws };
    error!(%err, "result set did not grow");
    Err(err)
}

/// Generate `n` distinct values from `range` using exactly `n` calls to `source`.
///
/// Draw `i` is taken uniformly over the `max - min - i` slots still free and
/// then shifted past every already chosen value at or below it, so no draw is
/// ever rejected. The scan over chosen values resumes at the previous
/// insertion whenever the new draw is not below it.
///
/// O(n) memory, O(n^2) time in the worst case.
pub fn sample<S: RandomSource>(
    source: &mut S,
    n: usize,
    range: Range,
) -> Result<BTreeSet<S::Output>> {
    validate::<S::Output>(n, range)?;
    debug!(n, min = range.min, max = range.max, "sampling unique values");

    let min = range.min;
    let mut hi = range.max;
    let mut drawn: BTreeSet<S::Output> = BTreeSet::new();

    // Most recent insertion and the number of chosen values below it.
    let mut last: Option<S::Output> = None;
    let mut last_offset = 0u64;

    for i in 0..n {
        let raw = source.next_value().widen();
        let mut r = min + raw % (hi - min);
        trace!(draw = i, raw, slot = r, "drew free slot");

        let start = match last {
            Some(value) if value.widen() <= r => {
                r += last_offset;
                Bound::Included(value)
            }
            _ => {
                last_offset = 0;
                Bound::Unbounded
            }
        };

        for x in drawn.range((start, Bound::Unbounded)) {
            if x.widen() <= r {
                last_offset += 1;
                r += 1;
            } else {
                break;
            }
        }

        hi -= 1;

        let value: S::Output = SampleInt::narrow(r);
        drawn.insert(value);
        ensure_grown(&drawn, r, i + 1)?;
        last = Some(value);
    }

    Ok(drawn)
}

/// [`sample`] over `[0, max)`.
pub fn sample_below<S: RandomSource>(
    source: &mut S,
    n: usize,
    max: u64,
) -> Result<BTreeSet<S::Output>> {
    sample(source, n, Range::below(max))
}

/// Same contract and output as [`sample`], but every draw rescans the chosen
/// values from the start. Always O(n^2); kept as a reference to check the
/// cursor-based version against.
pub fn sample_rescan<S: RandomSource>(
    source: &mut S,
    n: usize,
    range: Range,
) -> Result<BTreeSet<S::Output>> {
    validate::<S::Output>(n, range)?;
    debug!(n, min = range.min, max = range.max, "sampling unique values by rescan");

    let min = range.min;
    let mut hi = range.max;
    let mut drawn: BTreeSet<S::Output> = BTreeSet::new();

    for i in 0..n {
        let mut r = min + source.next_value().widen() % (hi - min);

        for x in &drawn {
            if SampleInt::widen(*x) <= r {
                r += 1;
            } else {
                break;
            }
        }

        hi -= 1;

        let value: S::Output = SampleInt::narrow(r);
        drawn.insert(value);
        ensure_grown(&drawn, r, i + 1)?;
    }

    Ok(drawn)
}

/// [`sample_rescan`] over `[0, max)`.
pub fn sample_rescan_below<S: RandomSource>(
    source: &mut S,
    n: usize,
    max: u64,
) -> Result<BTreeSet<S::Output>> {
    sample_rescan(source, n, Range::below(max))
}
