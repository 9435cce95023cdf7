//! Draw `n` distinct integers uniformly from `[min, max)` with exactly `n`
//! calls to a caller supplied random source.

mod error;
mod generator;
mod range;
mod sampler;
mod source;
#[cfg(test)]
mod stat;

pub use error::{Result, SampleError};
pub use generator::{Config, UniqueGenerator};
pub use range::Range;
pub use sampler::{sample, sample_below, sample_rescan, sample_rescan_below};
pub use source::{ConstantSource, RandomSource, RngSource, SampleInt, SequenceSource};
