use thiserror::Error;

/// Reasons a sampling call is rejected or aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// `max` does not fit in the source's output type.
    #[error("max {max} does not fit in the source output type (limit {limit})")]
    MaxOutOfRange { max: u64, limit: u64 },

    /// `min >= max`.
    #[error("range [{min}, {max}) is empty")]
    EmptyRange { min: u64, max: u64 },

    /// More distinct values requested than the range holds.
    #[error("cannot draw {requested} distinct values from {available} candidates")]
    TooManyRequested { requested: usize, available: u64 },

    /// The result set lost an element after an insertion.
    #[error("duplicate {value} generated after {draws} draws, verify the source can produce enough values")]
    DuplicateGenerated { value: u64, draws: usize },
}

pub type Result<T> = std::result::Result<T, SampleError>;
