// Word-local bit span primitives. Every span here fits inside one word:
// `offset + width <= 64`.

/// Mask of the low `width` bits; `width == 64` selects the whole word.
#[inline]
pub fn low_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Reads `width` bits of `word` starting at `offset`.
#[inline]
pub fn read_bits(word: u64, offset: u32, width: u32) -> u64 {
    debug_assert!(offset + width <= u64::BITS);
    if width == 0 {
        return 0;
    }
    (word >> offset) & low_mask(width)
}

/// Replaces `width` bits of `word` starting at `offset` with the low bits of `value`.
///
/// The span is cleared before the new bits are OR-ed in, so previously set
/// bits are overwritten. Bits outside the span are left untouched.
#[inline]
pub fn write_bits(word: &mut u64, offset: u32, width: u32, value: u64) {
    debug_assert!(offset + width <= u64::BITS);
    if width == 0 {
        return;
    }
    let mask = low_mask(width) << offset;
    *word = (*word & !mask) | ((value << offset) & mask);
}
