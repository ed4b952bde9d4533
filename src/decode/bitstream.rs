/// Reads `count` bits (at most 32) starting at absolute bit `bit_pos` of `block`.
///
/// Bits are numbered LSB-first, starting at bit 0 of byte 0. Bits past the
/// end of the block read as zero.
#[inline]
pub fn read_bits(block: &[u8; 16], bit_pos: u32, count: u32) -> u32 {
    debug_assert!(count <= 32);

    let bits = u128::from_le_bytes(*block).checked_shr(bit_pos).unwrap_or(0);
    let mask = (1u128 << count.min(32)) - 1;

    (bits & mask) as u32
}

/// Sequential reader over a single compressed block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BitStream<'a> {
    block: &'a [u8; 16],
    position: u32,
}

impl<'a> BitStream<'a> {
    #[inline]
    pub(crate) fn new(block: &'a [u8; 16]) -> Self {
        Self { block, position: 0 }
    }

    #[inline]
    pub(crate) fn read_bit(&mut self) -> u32 {
        self.read_bits(1)
    }

    #[inline]
    pub(crate) fn read_bits(&mut self, num_bits: u32) -> u32 {
        let bits = read_bits(self.block, self.position, num_bits);
        self.position += num_bits;
        bits
    }

    /// Number of bits consumed so far.
    #[inline]
    pub(crate) fn position(&self) -> u32 {
        self.position
    }
}
