//! Error types for array operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Every variant except [`ArrayError::AllocationFailed`] leaves the array
/// exactly as it was before the failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A construction parameter was rejected (zero capacity, bad config).
    InvalidArgument {
        /// Human-readable description of the rejected value.
        reason: String,
    },
    /// Element access outside the live range `[0, len)`.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Live length at the time of the call.
        len: usize,
    },
    /// Insert, erase or position lookup outside the operation's range.
    PositionOutOfRange {
        /// The requested position index.
        index: usize,
        /// Live length at the time of the call.
        len: usize,
    },
    /// `front()` or `back()` on an array with no live elements.
    EmptyContainer,
    /// A [`Position`](crate::Position) issued before the most recent
    /// capacity change.
    StalePosition {
        /// Epoch encoded in the position.
        position_epoch: u32,
        /// The array's current epoch.
        current_epoch: u32,
    },
    /// The allocator refused the request, or the normalized capacity
    /// does not fit in `usize`.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
}

impl ArrayError {
    /// Whether this error belongs to the out-of-range family
    /// (index, position or empty-container).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::PositionOutOfRange { .. } | Self::EmptyContainer
        )
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::PositionOutOfRange { index, len } => {
                write!(f, "position {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "array is empty"),
            Self::StalePosition {
                position_epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "stale position: epoch {position_epoch}, current epoch {current_epoch}"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}
