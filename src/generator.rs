use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::Result;
use crate::range::Range;
use crate::sampler;
use crate::source::RngSource;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Fixed seed for reproducible output. Seeded from OS entropy when unset.
    pub seed: Option<u64>,
}

/// Sampler bundled with its own `u32` generator.
#[derive(Debug)]
pub struct UniqueGenerator {
    source: RngSource<StdRng, u32>,
}

impl UniqueGenerator {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                debug!(seed, "seeding unique generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            source: RngSource::new(rng),
        }
    }

    /// `n` distinct values from `range`.
    pub fn sample(&mut self, n: usize, range: Range) -> Result<BTreeSet<u32>> {
        sampler::sample(&mut self.source, n, range)
    }

    /// `n` distinct values from `[0, max)`.
    pub fn sample_below(&mut self, n: usize, max: u64) -> Result<BTreeSet<u32>> {
        sampler::sample_below(&mut self.source, n, max)
    }

    /// `n` distinct values from `[0, u32::MAX)`.
    pub fn sample_any(&mut self, n: usize) -> Result<BTreeSet<u32>> {
        self.sample_below(n, u64::from(u32::MAX))
    }
}

impl Default for UniqueGenerator {
    fn default() -> Self {
        Self::new()
    }
}
