//! Construction errors for [`Harness`](crate::Harness).
//!
//! Once a harness exists nothing it does can fail: assertion failures, overflow, aborts, and nested runs are all
//! tallied and reported rather than returned.

use thiserror::Error;

/// Errors raised while binding a harness to its result buffer and function list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("result buffer holds {len} slots but a capacity of {capacity} was requested")]
    BufferTooSmall { capacity: u8, len: usize },

    #[error("result buffer holds {0} slots; at most 255 assertion slots are supported")]
    CapacityTooLarge(usize),

    #[error("{0} test functions supplied; at most 65535 are supported")]
    TooManyFunctions(usize),
}

/// Result type for harness construction.
pub type HarnessResult<T> = Result<T, HarnessError>;
