use std::fmt::Debug;
use std::marker::PhantomData;

use rand::distributions::{Distribution, Standard};
use rand::{Rng, RngCore};

/// Unsigned integral types a [`RandomSource`] may yield.
///
/// `bool` is not an implementor, so a boolean generator is rejected at compile time.
pub trait SampleInt: Copy + Ord + Debug {
    /// Largest value of the type, widened.
    const MAX: u64;

    fn widen(self) -> u64;

    /// Callers guarantee `value <= Self::MAX`.
    fn narrow(value: u64) -> Self;
}

macro_rules! impl_sample_int {
    ($($ty:ty),*) => {
        $(
            impl SampleInt for $ty {
                const MAX: u64 = <$ty>::MAX as u64;

                #[inline]
                fn widen(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn narrow(value: u64) -> Self {
                    debug_assert!(value <= <Self as SampleInt>::MAX);
                    value as $ty
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, u64, usize);

/// Capability producing successive raw integral values.
///
/// The sampler only ever calls [`RandomSource::next_value`]; seeding and any
/// internal state are the implementor's business.
pub trait RandomSource {
    type Output: SampleInt;

    fn next_value(&mut self) -> Self::Output;
}

impl<F, T> RandomSource for F
where
    F: FnMut() -> T,
    T: SampleInt,
{
    type Output = T;

    fn next_value(&mut self) -> T {
        self()
    }
}

/// Draws `T` values from any `rand` generator.
#[derive(Debug)]
pub struct RngSource<R, T> {
    rng: R,
    _output: PhantomData<fn() -> T>,
}

impl<R: RngCore, T> RngSource<R, T> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            _output: PhantomData,
        }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R, T> RandomSource for RngSource<R, T>
where
    R: RngCore,
    T: SampleInt,
    Standard: Distribution<T>,
{
    type Output = T;

    fn next_value(&mut self) -> T {
        self.rng.gen()
    }
}

/// Replays a fixed script of values. Panics once the script runs out.
#[derive(Debug, Clone)]
pub struct SequenceSource<T> {
    values: Vec<T>,
    index: usize,
}

impl<T: SampleInt> SequenceSource<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values, index: 0 }
    }

    /// Values handed out so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl<T: SampleInt> RandomSource for SequenceSource<T> {
    type Output = T;

    fn next_value(&mut self) -> T {
        let Some(&value) = self.values.get(self.index) else {
            panic!(
                "SequenceSource: ran out of values after {} draws",
                self.index
            );
        };
        self.index += 1;
        value
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource<T>(pub T);

impl<T: SampleInt> RandomSource for ConstantSource<T> {
    type Output = T;

    fn next_value(&mut self) -> T {
        self.0
    }
}
