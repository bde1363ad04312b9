#[cfg(feature = "std")]
use thiserror::Error;

/// Errors returned by [`PackedBitVector`](crate::PackedBitVector) reads and writes.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FidBitsError {
    /// A read reached bit `index`, but only bits `0..len` are addressable.
    #[cfg_attr(feature = "std", error("Bit index {index} is out of range for size {len}"))]
    OutOfRange { index: u64, len: u64 },

    #[cfg_attr(
        feature = "std",
        error("Slice width must be in the range 0..=64, got {0}")
    )]
    InvalidWidth(u8),

    /// A write of `width` bits at `index` ends past `u64::MAX` or needs more
    /// words than this target can allocate. The vector is left unchanged.
    #[cfg_attr(
        feature = "std",
        error("Bit span at {index} of width {width} does not fit in addressable storage")
    )]
    CapacityOverflow { index: u64, width: u8 },
}

pub type Result<T> = core::result::Result<T, FidBitsError>;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FidBitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FidBitsError::OutOfRange { index, len } => {
                write!(f, "Bit index {} is out of range for size {}", index, len)
            }
            FidBitsError::InvalidWidth(w) => {
                write!(f, "Slice width must be in the range 0..=64, got {}", w)
            }
            FidBitsError::CapacityOverflow { index, width } => write!(
                f,
                "Bit span at {} of width {} does not fit in addressable storage",
                index, width
            ),
        }
    }
}
