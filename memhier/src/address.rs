/// Splits 32-bit addresses into a tag and a set index for one cache level
///
/// The offset width comes from the block size and is shared by every level, the index width is
/// the level's own. Decoding is total, any combination of widths is accepted and bits shifted
/// past the top of the address simply read as zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressDecoder {
    offset_bits: u32,
    index_bits: u32,
}

impl AddressDecoder {
    pub fn new(offset_bits: u32, index_bits: u32) -> Self {
        Self { offset_bits, index_bits }
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    pub fn tag_bits(&self) -> u32 {
        u32::BITS.saturating_sub(self.offset_bits + self.index_bits)
    }

    /// Converts an address into (tag, index)
    ///
    /// # Examples
    ///
    /// ```
    /// use memhier::address::AddressDecoder;
    /// let decoder = AddressDecoder::new(4, 2);
    /// assert_eq!(decoder.decode(0b1011_10_0110), (0b1011, 0b10));
    /// ```
    #[inline(always)]
    pub fn decode(&self, address: u32) -> (u32, u32) {
        let address = address as u64;
        let index_mask = (1u64 << self.index_bits.min(u32::BITS)) - 1;
        let index = (address >> self.offset_bits.min(u32::BITS)) & index_mask;
        let tag = address >> (self.offset_bits + self.index_bits).min(u32::BITS);
        (tag as u32, index as u32)
    }

    /// Rebuilds the block-aligned address a (tag, index) pair was decoded from
    pub fn encode(&self, tag: u32, index: u32) -> u32 {
        let tag_shift = (self.offset_bits + self.index_bits).min(u64::BITS - 1);
        let index_mask = (1u64 << self.index_bits.min(u32::BITS)) - 1;
        let address = ((tag as u64) << tag_shift) | (((index as u64) & index_mask) << self.offset_bits.min(u32::BITS));
        address as u32
    }
}
