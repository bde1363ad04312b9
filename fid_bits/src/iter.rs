use crate::PackedBitVector;

/// Iterator over the addressable bits of a [`PackedBitVector`], bit 0 first.
///
/// ```rust
/// use fid_bits::PackedBitVector;
///
/// let mut bits = PackedBitVector::new();
/// bits.set_slice(0, 4, 0b0101).unwrap();
///
/// let collected: Vec<bool> = bits.iter().collect();
/// assert_eq!(collected, vec![true, false, true, false]);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bits: &'a PackedBitVector,
    index: u64,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(bits: &'a PackedBitVector) -> Self {
        Self { bits, index: 0 }
    }
}

impl<'a> Iterator for Bits<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bits.get_bit(self.index).ok()?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.size().saturating_sub(self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Bits<'a> {}

impl<'a> IntoIterator for &'a PackedBitVector {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
