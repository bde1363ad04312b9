//! Global bit index to `(word, offset)` translation.
//!
//! Offset 0 is the least-significant bit of a word, so the mask for a bit is
//! always `1 << offset`.

/// Number of bits in one backing word.
pub const WORD_BITS: u64 = u64::BITS as u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(pub u64);

impl BitIndex {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Index of the word holding this bit.
    ///
    /// Saturates at `usize::MAX` when the word index does not fit in a
    /// `usize`; no store can hold that many words, so lookups fail instead
    /// of aliasing a low word.
    #[inline]
    pub fn word(self) -> usize {
        usize::try_from(self.0 / WORD_BITS).unwrap_or(usize::MAX)
    }

    /// Position of this bit inside its word, in `0..64`.
    #[inline]
    pub fn offset(self) -> u32 {
        (self.0 % WORD_BITS) as u32
    }

    /// Single-bit mask selecting this bit within its word.
    #[inline]
    pub fn mask(self) -> u64 {
        1u64 << self.offset()
    }
}

impl From<u64> for BitIndex {
    #[inline]
    fn from(i: u64) -> Self {
        BitIndex(i)
    }
}

/// Number of words needed so that bit `bits` itself is allocated, or
/// `None` if that count does not fit in a `usize`.
///
/// Allocating through the word containing `bits` keeps
/// `words * 64 > bits` for every logical size.
#[inline]
pub fn words_for(bits: u64) -> Option<usize> {
    usize::try_from(bits / WORD_BITS).ok()?.checked_add(1)
}
