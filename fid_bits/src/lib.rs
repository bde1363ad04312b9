//! # fid_bits
//!
//! A `no_std` compatible growable bit vector packed into 64-bit words, meant
//! as the storage layer of rank/select dictionaries.
//!
//! Bits are addressed by a global index; bit `i` lives in word `i / 64` at
//! offset `i % 64` (offset 0 = least-significant bit). Slices of up to 64
//! bits can be read and written at any index, including across a word
//! boundary. Writes grow the vector on demand; reads past the end fail.
//!
//! ```rust
//! use fid_bits::{FidBitsError, PackedBitVector};
//!
//! let mut bits = PackedBitVector::new();
//! bits.set_slice(0, 7, 0).unwrap();
//! assert_eq!(bits.size(), 7);
//!
//! bits.set_slice(64, 23, 0x12345).unwrap();
//! assert_eq!(bits.size(), 87);
//! assert_eq!(bits.get_slice(64, 23), Ok(0x12345));
//!
//! assert_eq!(bits.get_bit(87), Err(FidBitsError::OutOfRange { index: 87, len: 87 }));
//! ```
//!
//! ## Packing fixed-width codes
//!
//! ```rust
//! use fid_bits::PackedBitVector;
//!
//! // Ten 13-bit codes take three words instead of ten.
//! let mut codes = PackedBitVector::new();
//! for code in 0..10u64 {
//!     codes.push_slice(13, code * 700).unwrap();
//! }
//! assert_eq!(codes.size(), 130);
//! assert_eq!(codes.words().len(), 3);
//! assert_eq!(codes.get_slice(13 * 9, 13), Ok(6300));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod addr;
pub mod bit_vector;
pub mod error;
pub mod iter;

mod bit_ops;

pub use addr::{BitIndex, WORD_BITS};
pub use bit_vector::{MAX_SLICE_WIDTH, PackedBitVector};
pub use error::{FidBitsError, Result};
pub use iter::Bits;
