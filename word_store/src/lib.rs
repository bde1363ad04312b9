//! # word_store
//!
//! Growable storage for plain-old-data words, used as the backing array of
//! packed bit structures.
//!
//! ```rust
//! use word_store::WordStore;
//!
//! let mut words = WordStore::<u64>::new();
//! words.grow_to(3).unwrap();
//! words[1] = 0xFF;
//!
//! assert_eq!(words.len(), 3);
//! assert_eq!(words.as_slice(), &[0, 0xFF, 0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::WordStore;
