//! Error types shared by the instance model and both DP engines.
//!
//! Every variant except [`KnapsackError::Io`] and [`KnapsackError::Parse`] is a
//! precondition violation: it is reported at construction or call time and
//! never corrected silently.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type KnapsackResult<T> = std::result::Result<T, KnapsackError>;

/// Errors raised while building instances, solving them, or reading them from disk.
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// `weights` and `profits` must describe the same items.
    #[error("weights and profits differ in length ({weights} weights, {profits} profits)")]
    LengthMismatch { weights: usize, profits: usize },

    /// Item weights must be strictly positive.
    #[error("item {index} has zero weight")]
    ZeroWeight { index: usize },

    /// The approximation parameter must lie in the open interval (0, 1).
    #[error("epsilon must lie in (0, 1), got {0}")]
    EpsilonOutOfRange(f64),

    /// The operation needs at least one item.
    #[error("instance has no items")]
    EmptyInstance,

    /// Total weight or total profit does not fit in a `u64`.
    #[error("sum of item weights or profits overflows u64")]
    SumOverflow,

    /// The requested table axis does not fit in addressable memory.
    #[error("table axis of length {0} cannot be allocated")]
    CapacityTooLarge(u64),

    /// The instance generator was called with unusable parameters.
    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),

    /// Malformed line in an instance file.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
