//! Growable bit vector packed into 64-bit words.
//!
//! # Examples
//!
//! ```rust
//! use fid_bits::PackedBitVector;
//!
//! let mut bits = PackedBitVector::new();
//! bits.set_slice(60, 8, 0b1011_0110).unwrap(); // straddles words 0 and 1
//! bits.set_bit(3, true);
//!
//! assert_eq!(bits.size(), 68);
//! assert_eq!(bits.get_slice(60, 8).unwrap(), 0b1011_0110);
//! assert!(bits.get_bit(3).unwrap());
//! assert!(!bits.get_bit(4).unwrap());
//! ```

use core::fmt;

use word_store::WordStore;

use crate::addr::{BitIndex, WORD_BITS, words_for};
use crate::bit_ops::{low_mask, read_bits, write_bits};
use crate::error::{FidBitsError, Result};
use crate::iter::Bits;

/// Widest slice that fits in one read or write.
pub const MAX_SLICE_WIDTH: u8 = WORD_BITS as u8;

/// A growable sequence of bits stored in 64-bit words.
///
/// Bit `i` lives in word `i / 64` at offset `i % 64`, offset 0 being the
/// least-significant bit. Valid indices are `0..size()`. Writes past the end
/// grow the vector; reads past the end fail with
/// [`FidBitsError::OutOfRange`]. The vector never shrinks.
#[derive(Debug, Clone)]
pub struct PackedBitVector {
    words: WordStore<u64>,
    size: u64,
}

#[inline]
fn validate_width(width: u8) -> Result<()> {
    if width <= MAX_SLICE_WIDTH {
        Ok(())
    } else {
        Err(FidBitsError::InvalidWidth(width))
    }
}

impl PackedBitVector {
    /// Creates an empty vector backed by a single zero word.
    ///
    /// ```
    /// use fid_bits::PackedBitVector;
    ///
    /// let bits = PackedBitVector::new();
    /// assert_eq!(bits.size(), 0);
    /// assert_eq!(bits.words(), &[0]);
    /// ```
    pub fn new() -> Self {
        let mut words = WordStore::new();
        words.push(0);
        Self { words, size: 0 }
    }

    /// Creates an empty vector with storage reserved for `bits` positions.
    ///
    /// Only the allocation changes; `size()` is still zero. A `bits` count
    /// too large to index on this target reserves nothing extra.
    pub fn with_capacity(bits: u64) -> Self {
        let mut words = WordStore::with_capacity(words_for(bits).unwrap_or(1));
        words.push(0);
        Self { words, size: 0 }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Raw bits currently allocated. Always greater than `size()`.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.words.len() as u64 * WORD_BITS
    }

    /// Backing words, least-significant bit first within each word.
    #[inline]
    pub fn words(&self) -> &[u64] {
        self.words.as_slice()
    }

    /// Makes the span `i..i + width` addressable, appending zero words as
    /// needed. Nothing changes when the span cannot be allocated.
    fn grow_for(&mut self, i: u64, width: u8) -> Result<()> {
        let overflow = FidBitsError::CapacityOverflow { index: i, width };
        let end = i.checked_add(u64::from(width)).ok_or(overflow)?;
        if self.size >= end {
            return Ok(());
        }
        let needed = words_for(end).ok_or(overflow)?;
        if needed > self.words.len() {
            log::trace!(
                "growing bit vector from {} to {} words (size {} -> {})",
                self.words.len(),
                needed,
                self.size,
                end
            );
            self.words.grow_to(needed).map_err(|_| overflow)?;
        }
        self.size = end;
        Ok(())
    }

    /// Makes bits `0..target` addressable, appending zero words as needed.
    ///
    /// Does nothing if `size() >= target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` bits cannot be allocated on this target.
    ///
    /// ```
    /// use fid_bits::PackedBitVector;
    ///
    /// let mut bits = PackedBitVector::new();
    /// bits.ensure_capacity(456);
    /// assert_eq!(bits.size(), 456);
    /// assert_eq!(bits.words().len(), 8);
    ///
    /// bits.ensure_capacity(4);
    /// assert_eq!(bits.size(), 456);
    /// ```
    pub fn ensure_capacity(&mut self, target: u64) {
        if target == 0 {
            return;
        }
        if let Err(err) = self.grow_for(target - 1, 1) {
            panic!("{}", err);
        }
    }

    /// Returns bit `i`.
    ///
    /// # Errors
    ///
    /// [`FidBitsError::OutOfRange`] if `i >= size()`.
    ///
    /// ```
    /// use fid_bits::{FidBitsError, PackedBitVector};
    ///
    /// let mut bits = PackedBitVector::new();
    /// bits.set_bit(0, true);
    /// assert_eq!(bits.get_bit(0), Ok(true));
    /// assert_eq!(bits.get_bit(1), Err(FidBitsError::OutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn get_bit(&self, i: u64) -> Result<bool> {
        let out_of_range = FidBitsError::OutOfRange {
            index: i,
            len: self.size,
        };
        if i >= self.size {
            return Err(out_of_range);
        }
        let pos = BitIndex(i);
        let word = *self.words.get(pos.word()).map_err(|_| out_of_range)?;
        Ok(word & pos.mask() != 0)
    }

    /// Sets bit `i` to `value`, growing the vector if `i >= size()`.
    ///
    /// No other bit changes.
    ///
    /// # Panics
    ///
    /// Panics if `i == u64::MAX` or bit `i` cannot be allocated on this
    /// target, like `Vec` does on capacity overflow. The vector is not
    /// modified before the panic.
    pub fn set_bit(&mut self, i: u64, value: bool) {
        if let Err(err) = self.grow_for(i, 1) {
            panic!("{}", err);
        }
        let pos = BitIndex(i);
        let word = &mut self.words[pos.word()];
        if value {
            *word |= pos.mask();
        } else {
            *word &= !pos.mask();
        }
    }

    /// Reads the `width`-bit slice starting at bit `i`.
    ///
    /// Bit `i` becomes bit 0 of the result; bits above `width` are zero.
    /// A zero width always yields `Ok(0)`, whatever `i` is.
    ///
    /// # Errors
    ///
    /// - [`FidBitsError::InvalidWidth`] if `width > 64`
    /// - [`FidBitsError::OutOfRange`] if `i + width > size()`
    ///
    /// ```
    /// use fid_bits::{FidBitsError, PackedBitVector};
    ///
    /// let mut bits = PackedBitVector::new();
    /// bits.set_slice(0, 7, 1 << 6).unwrap();
    ///
    /// assert_eq!(bits.get_slice(0, 7), Ok(64));
    /// assert_eq!(bits.get_slice(12, 0), Ok(0));
    /// assert_eq!(bits.get_slice(0, 123), Err(FidBitsError::InvalidWidth(123)));
    /// assert!(matches!(bits.get_slice(0, 10), Err(FidBitsError::OutOfRange { .. })));
    /// ```
    pub fn get_slice(&self, i: u64, width: u8) -> Result<u64> {
        validate_width(width)?;
        if width == 0 {
            return Ok(0);
        }
        let end = i.saturating_add(u64::from(width));
        let out_of_range = FidBitsError::OutOfRange {
            index: end - 1,
            len: self.size,
        };
        if end > self.size {
            return Err(out_of_range);
        }

        let pos = BitIndex(i);
        let offset = pos.offset();
        let width = u32::from(width);
        let first = *self.words.get(pos.word()).map_err(|_| out_of_range)?;

        if offset + width <= u64::BITS {
            return Ok(read_bits(first, offset, width));
        }

        // Crosses into the next word: offset is at least 1 here.
        let second = *self
            .words
            .get(BitIndex(end - 1).word())
            .map_err(|_| out_of_range)?;
        let low = first >> offset;
        let high = second << (u64::BITS - offset);
        Ok((low | high) & low_mask(width))
    }

    /// Replaces the `width`-bit slice starting at bit `i` with the low
    /// `width` bits of `value`, growing the vector if the slice ends past
    /// `size()`.
    ///
    /// Bits outside the slice are unchanged. A zero width is a no-op.
    ///
    /// # Errors
    ///
    /// - [`FidBitsError::InvalidWidth`] if `width > 64`
    /// - [`FidBitsError::CapacityOverflow`] if `i + width` exceeds `u64::MAX`
    ///   or the words cannot be allocated on this target
    ///
    /// The vector is unchanged when an error is returned.
    ///
    /// ```
    /// use fid_bits::PackedBitVector;
    ///
    /// let mut bits = PackedBitVector::new();
    /// bits.set_slice(63, 8, 0x7F).unwrap();
    /// assert_eq!(bits.get_slice(63, 8), Ok(0x7F));
    ///
    /// bits.set_slice(63, 8, 0x80).unwrap();
    /// assert_eq!(bits.get_slice(63, 8), Ok(0x80));
    /// ```
    pub fn set_slice(&mut self, i: u64, width: u8, value: u64) -> Result<()> {
        validate_width(width)?;
        if width == 0 {
            return Ok(());
        }
        self.grow_for(i, width)?;

        let pos = BitIndex(i);
        let offset = pos.offset();
        let width = u32::from(width);
        let head = width.min(u64::BITS - offset);

        write_bits(&mut self.words[pos.word()], offset, head, value);
        if head < width {
            write_bits(&mut self.words[pos.word() + 1], 0, width - head, value >> head);
        }
        Ok(())
    }

    /// Appends one bit at index `size()`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`PackedBitVector::set_bit`].
    pub fn push_bit(&mut self, value: bool) {
        self.set_bit(self.size, value);
    }

    /// Appends a `width`-bit slice at index `size()`.
    ///
    /// # Errors
    ///
    /// Same as [`PackedBitVector::set_slice`].
    ///
    /// ```
    /// use fid_bits::PackedBitVector;
    ///
    /// let mut bits = PackedBitVector::new();
    /// bits.push_slice(3, 0b101).unwrap();
    /// bits.push_slice(2, 0b11).unwrap();
    /// assert_eq!(bits.size(), 5);
    /// assert_eq!(bits.get_slice(0, 5), Ok(0b11_101));
    /// ```
    pub fn push_slice(&mut self, width: u8, value: u64) -> Result<()> {
        self.set_slice(self.size, width, value)
    }

    /// Iterates over bits `0..size()`.
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(self)
    }
}

impl Default for PackedBitVector {
    fn default() -> Self {
        Self::new()
    }
}

// Compares the addressable bits only; spare capacity is ignored.
impl PartialEq for PackedBitVector {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let full = BitIndex(self.size).word();
        let tail = BitIndex(self.size).offset();
        let (a, b) = (self.words(), other.words());
        if a[..full] != b[..full] {
            return false;
        }
        tail == 0 || read_bits(a[full], 0, tail) == read_bits(b[full], 0, tail)
    }
}

impl Eq for PackedBitVector {}

/// Renders the addressable bits as `0`/`1`, bit 0 first.
///
/// ```
/// use fid_bits::PackedBitVector;
///
/// let bits: PackedBitVector = [true, false, false, true].into_iter().collect();
/// assert_eq!(bits.to_string(), "1001");
/// ```
impl fmt::Display for PackedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Extend<bool> for PackedBitVector {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push_bit(bit);
        }
    }
}

impl FromIterator<bool> for PackedBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let bits = PackedBitVector::new();
        assert_eq!(bits.size(), 0);
        assert!(bits.is_empty());
        assert_eq!(bits.words(), &[0]);
        assert_eq!(bits.capacity(), 64);
        assert_eq!(bits.get_bit(0), Err(FidBitsError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn size_tracks_slice_writes() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 7, 0)?;
        assert_eq!(bits.size(), 7);

        bits.set_slice(64, 23, 0)?;
        assert_eq!(bits.size(), 87);

        bits.set_slice(10, 5, 0)?;
        assert_eq!(bits.size(), 87);
        Ok(())
    }

    #[test]
    fn get_bit_uses_zero_based_offsets() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 6, 1 << 5)?;
        assert_eq!(bits.get_bit(5), Ok(true));
        assert_eq!(bits.get_bit(2), Ok(false));
        assert_eq!(bits.get_bit(6), Err(FidBitsError::OutOfRange { index: 6, len: 6 }));

        bits.set_slice(64, 6, 1 << 5)?;
        assert_eq!(bits.get_bit(69), Ok(true));
        assert_eq!(bits.get_bit(64), Ok(false));

        assert_eq!(bits.get_bit(100), Err(FidBitsError::OutOfRange { index: 100, len: 70 }));
        Ok(())
    }

    #[test]
    fn bit_zero_of_each_word_is_reachable() {
        let mut bits = PackedBitVector::new();
        bits.set_bit(0, true);
        bits.set_bit(64, true);
        assert_eq!(bits.words(), &[1, 1]);
        assert_eq!(bits.get_bit(0), Ok(true));
        assert_eq!(bits.get_bit(64), Ok(true));
        assert_eq!(bits.get_slice(0, 1), Ok(1));
    }

    #[test]
    fn get_slice_checks() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 7, 1 << 6)?;
        assert_eq!(bits.get_slice(0, 7), Ok(64));
        assert_eq!(bits.get_slice(0, 10), Err(FidBitsError::OutOfRange { index: 9, len: 7 }));
        assert_eq!(bits.get_slice(0, 123), Err(FidBitsError::InvalidWidth(123)));
        assert_eq!(bits.get_slice(12, 0), Ok(0));
        assert_eq!(bits.get_slice(7, 0), Ok(0));

        bits.set_slice(128, 7, 1 << 6)?;
        assert_eq!(bits.get_slice(126, 9), Ok(1 << 8));
        Ok(())
    }

    #[test]
    fn invalid_width_on_large_vector() {
        let mut bits = PackedBitVector::new();
        bits.ensure_capacity(100);
        assert_eq!(bits.get_slice(0, 123), Err(FidBitsError::InvalidWidth(123)));
        assert_eq!(bits.get_slice(0, 65), Err(FidBitsError::InvalidWidth(65)));
    }

    #[test]
    fn set_bit_grows_and_clears() {
        let mut bits = PackedBitVector::new();
        bits.set_bit(4, false);
        assert_eq!(bits.size(), 5);
        assert_eq!(bits.get_bit(4), Ok(false));

        bits.set_bit(6, true);
        assert_eq!(bits.get_bit(6), Ok(true));

        bits.set_slice(0, 7, 0x7F).unwrap();
        bits.set_bit(3, false);
        assert_eq!(bits.get_slice(0, 7), Ok(0x77));
    }

    #[test]
    fn set_slice_roundtrips() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 8, (1 << 7) - 1)?;
        assert_eq!(bits.get_slice(0, 8)?, (1 << 7) - 1);
        assert_eq!(bits.get_slice(4, 4)?, (1 << 3) - 1);

        bits.set_slice(63, 8, (1 << 7) - 1)?;
        assert_eq!(bits.get_slice(63, 8)?, (1 << 7) - 1);

        bits.set_slice(0, 0, 5)?;
        assert_eq!(bits.set_slice(0, 64 + 5, 10), Err(FidBitsError::InvalidWidth(69)));
        Ok(())
    }

    #[test]
    fn zero_width_write_does_not_grow() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(1000, 0, u64::MAX)?;
        assert_eq!(bits.size(), 0);
        assert_eq!(bits.words().len(), 1);
        Ok(())
    }

    #[test]
    fn overwrite_clears_old_bits() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(60, 10, 0b11_1111_1111)?;
        bits.set_slice(60, 10, 0b10_0000_0001)?;
        assert_eq!(bits.get_slice(60, 10)?, 0b10_0000_0001);
        assert_eq!(bits.words()[0], 0b0001u64 << 60);
        assert_eq!(bits.words()[1], 0b10_0000);
        Ok(())
    }

    #[test]
    fn slice_write_keeps_neighbours() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 64, u64::MAX)?;
        bits.set_slice(64, 64, u64::MAX)?;
        bits.set_slice(62, 4, 0)?;
        assert_eq!(bits.words()[0], u64::MAX >> 2);
        assert_eq!(bits.words()[1], u64::MAX << 2);
        assert_eq!(bits.get_slice(0, 62)?, low_mask(62));
        assert_eq!(bits.get_slice(66, 62)?, low_mask(62));
        Ok(())
    }

    #[test]
    fn full_width_slices() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 64, 0x0123_4567_89AB_CDEF)?;
        assert_eq!(bits.get_slice(0, 64)?, 0x0123_4567_89AB_CDEF);

        bits.set_slice(100, 64, u64::MAX)?;
        assert_eq!(bits.size(), 164);
        assert_eq!(bits.get_slice(100, 64)?, u64::MAX);
        assert_eq!(bits.get_slice(99, 1)?, 0);
        Ok(())
    }

    #[test]
    fn ensure_capacity_allocates_through_size() {
        let mut bits = PackedBitVector::new();
        bits.ensure_capacity(4);
        assert_eq!(bits.size(), 4);

        bits.ensure_capacity(456);
        assert_eq!(bits.size(), 456);
        assert_eq!(bits.words().len() as u64, 456 / 64 + 1);

        bits.ensure_capacity(64 * 8);
        assert_eq!(bits.words().len(), 9);
        assert!(bits.capacity() > bits.size());
    }

    #[test]
    fn with_capacity_only_reserves() {
        let bits = PackedBitVector::with_capacity(1000);
        assert_eq!(bits.size(), 0);
        assert_eq!(bits, PackedBitVector::new());
    }

    #[test]
    fn push_appends() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.push_bit(true);
        bits.push_slice(63, 0)?;
        bits.push_bit(true);
        assert_eq!(bits.size(), 65);
        assert_eq!(bits.words(), &[1, 1]);
        Ok(())
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = PackedBitVector::new();
        let mut b = PackedBitVector::with_capacity(4096);
        a.set_bit(70, true);
        b.set_bit(70, true);
        assert_eq!(a, b);

        b.set_bit(3, true);
        assert_ne!(a, b);

        a.set_bit(71, false);
        assert_ne!(a.size(), b.size());
    }

    #[test]
    fn display_and_collect() {
        let bits: PackedBitVector = "0110".chars().map(|c| c == '1').collect();
        assert_eq!(bits.size(), 4);
        assert_eq!(bits.to_string(), "0110");
        assert_eq!(PackedBitVector::new().to_string(), "");
    }

    #[test]
    fn set_slice_past_u64_max_is_rejected() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 10, 0b11_0000_0101)?;
        let words = bits.words().to_vec();

        assert_eq!(
            bits.set_slice(u64::MAX - 2, 8, 0xFF),
            Err(FidBitsError::CapacityOverflow { index: u64::MAX - 2, width: 8 })
        );
        assert_eq!(
            bits.set_slice(u64::MAX, 64, 1),
            Err(FidBitsError::CapacityOverflow { index: u64::MAX, width: 64 })
        );
        assert_eq!(bits.size(), 10);
        assert_eq!(bits.words(), &words[..]);
        Ok(())
    }

    #[test]
    fn set_slice_unallocatable_span_is_rejected() -> Result<()> {
        let mut bits = PackedBitVector::new();
        bits.set_slice(0, 10, 0b11_0000_0101)?;
        let words = bits.words().to_vec();

        // Fits in u64, but the words it needs exceed any allocation.
        assert_eq!(
            bits.set_slice(u64::MAX - 64, 8, 0xFF),
            Err(FidBitsError::CapacityOverflow { index: u64::MAX - 64, width: 8 })
        );
        assert_eq!(bits.size(), 10);
        assert_eq!(bits.words(), &words[..]);
        assert_eq!(bits.get_slice(0, 10)?, 0b11_0000_0101);
        Ok(())
    }

    #[test]
    fn last_bit_index_is_rejected_by_set_slice() {
        let mut bits = PackedBitVector::new();
        assert_eq!(
            bits.set_slice(u64::MAX, 1, 1),
            Err(FidBitsError::CapacityOverflow { index: u64::MAX, width: 1 })
        );
        assert_eq!(bits.size(), 0);
        assert_eq!(bits.words(), &[0]);
    }

    #[test]
    #[should_panic(expected = "does not fit in addressable storage")]
    fn set_bit_at_u64_max_panics() {
        let mut bits = PackedBitVector::new();
        bits.set_bit(u64::MAX, true);
    }

    #[test]
    #[should_panic(expected = "does not fit in addressable storage")]
    fn ensure_capacity_past_allocation_panics() {
        let mut bits = PackedBitVector::new();
        bits.ensure_capacity(u64::MAX);
    }

    #[cfg(feature = "std")]
    #[test]
    fn failed_set_bit_leaves_size_unchanged() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let mut bits = PackedBitVector::new();
        bits.set_bit(3, true);

        let result = catch_unwind(AssertUnwindSafe(|| bits.set_bit(u64::MAX, true)));
        assert!(result.is_err());
        assert_eq!(bits.size(), 4);
        assert_eq!(bits.words(), &[0b1000]);

        let result = catch_unwind(AssertUnwindSafe(|| bits.set_bit(u64::MAX - 1, true)));
        assert!(result.is_err());
        assert_eq!(bits.size(), 4);
        assert_eq!(bits.get_bit(3), Ok(true));
    }
}
