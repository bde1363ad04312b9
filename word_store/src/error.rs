#[cfg(feature = "std")]
use thiserror::Error;

/// Word store errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Out-of-bounds word access
    #[cfg_attr(feature = "std", error("Word index {index} out of bounds for length {len}"))]
    OutOfBounds { index: usize, len: usize },

    /// The allocator could not provide `requested` words
    #[cfg_attr(feature = "std", error("failed to grow storage to {requested} words"))]
    GrowFailed { requested: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::OutOfBounds { index, len } => {
                write!(f, "Word index {} out of bounds for length {}", index, len)
            }
            StoreError::GrowFailed { requested } => {
                write!(f, "failed to grow storage to {} words", requested)
            }
        }
    }
}
