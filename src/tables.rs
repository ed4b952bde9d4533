//! Static BC7 lookup tables.
//!
//! Everything here is plain `static` data: the per-mode field layouts, the
//! partition shapes with their anchor ("fix-up") pixels and the fixed-point
//! interpolation weights. Partition and anchor data follow the tables
//! published with the BPTC format description.

/// Field layout of one BC7 mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModeDescriptor {
    /// Number of subsets (1, 2 or 3). Each subset owns two endpoints.
    pub subset_count: u8,
    /// Width of the partition id field.
    pub partition_bits: u8,
    /// Width of the channel rotation field.
    pub rotation_bits: u8,
    /// Width of the index selector field (0 or 1).
    pub index_selector_bits: u8,
    /// Bits per R, G and B endpoint channel, excluding p-bits.
    pub color_bits: u8,
    /// Bits per alpha endpoint channel, excluding p-bits. Zero means opaque.
    pub alpha_bits: u8,
    /// One p-bit per endpoint.
    pub endpoint_p_bits: bool,
    /// One p-bit per subset, shared by both of its endpoints.
    pub shared_p_bits: bool,
    /// Width of the primary per-pixel index.
    pub primary_index_bits: u8,
    /// Width of the secondary per-pixel index, zero when the mode has one index set.
    pub secondary_index_bits: u8,
}

impl ModeDescriptor {
    /// Number of endpoints stored in the block.
    #[inline]
    pub const fn endpoint_count(&self) -> usize {
        self.subset_count as usize * 2
    }

    /// Number of p-bits stored in the block.
    #[inline]
    pub const fn p_bit_count(&self) -> usize {
        if self.endpoint_p_bits {
            self.endpoint_count()
        } else if self.shared_p_bits {
            self.subset_count as usize
        } else {
            0
        }
    }

    /// Whether the block stores an alpha channel for its endpoints.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.alpha_bits > 0
    }

    /// Whether the block carries a second index set.
    #[inline]
    pub const fn has_secondary_indices(&self) -> bool {
        self.secondary_index_bits > 0
    }

    /// Total number of bits the layout occupies, mode prefix included.
    ///
    /// Every valid mode adds up to exactly 128.
    pub const fn total_bits(&self, mode: u8) -> u32 {
        let endpoints = self.endpoint_count() as u32;
        let anchors = self.subset_count as u32;

        let mut bits = mode as u32 + 1;
        bits += self.partition_bits as u32;
        bits += self.rotation_bits as u32;
        bits += self.index_selector_bits as u32;
        bits += endpoints * (3 * self.color_bits as u32 + self.alpha_bits as u32);
        bits += self.p_bit_count() as u32;
        bits += 16 * self.primary_index_bits as u32 - anchors;
        if self.secondary_index_bits > 0 {
            bits += 16 * self.secondary_index_bits as u32 - 1;
        }
        bits
    }
}

#[allow(clippy::too_many_arguments)]
const fn mode(
    subset_count: u8,
    partition_bits: u8,
    rotation_bits: u8,
    index_selector_bits: u8,
    color_bits: u8,
    alpha_bits: u8,
    endpoint_p_bits: bool,
    shared_p_bits: bool,
    primary_index_bits: u8,
    secondary_index_bits: u8,
) -> ModeDescriptor {
    ModeDescriptor {
        subset_count,
        partition_bits,
        rotation_bits,
        index_selector_bits,
        color_bits,
        alpha_bits,
        endpoint_p_bits,
        shared_p_bits,
        primary_index_bits,
        secondary_index_bits,
    }
}

/// Layouts of modes 0 to 7.
#[rustfmt::skip]
pub static MODES: [ModeDescriptor; 8] = [
    //   subsets  part  rot  isel  rgb  a  ep-p   shared-p  idx  idx2
    mode(3,       4,    0,   0,    4,   0, true,  false,    3,   0), // 0
    mode(2,       6,    0,   0,    6,   0, false, true,     3,   0), // 1
    mode(3,       6,    0,   0,    5,   0, false, false,    2,   0), // 2
    mode(2,       6,    0,   0,    7,   0, true,  false,    2,   0), // 3
    mode(1,       0,    2,   1,    5,   6, false, false,    2,   3), // 4
    mode(1,       0,    2,   0,    7,   8, false, false,    2,   2), // 5
    mode(1,       0,    0,   0,    7,   7, true,  false,    4,   0), // 6
    mode(2,       6,    0,   0,    5,   5, true,  false,    2,   0), // 7
];

/// Interpolation weights for 2-bit indices.
pub static WEIGHT2: [u8; 4] = [0, 21, 43, 64];
/// Interpolation weights for 3-bit indices.
pub static WEIGHT3: [u8; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
/// Interpolation weights for 4-bit indices.
pub static WEIGHT4: [u8; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Returns the weight table for an index width of 2, 3 or 4 bits.
#[inline]
pub fn weights(index_bits: u8) -> &'static [u8] {
    match index_bits {
        2 => &WEIGHT2[..],
        3 => &WEIGHT3[..],
        _ => &WEIGHT4[..],
    }
}

/// Subset of `pixel` under `partition` for a block with `subset_count` subsets.
#[inline]
pub fn subset_of(subset_count: u8, partition: usize, pixel: usize) -> usize {
    match subset_count {
        2 => PARTITION_2[partition * 16 + pixel] as usize,
        3 => PARTITION_3[partition * 16 + pixel] as usize,
        _ => 0,
    }
}

/// Whether `pixel` stores its primary index with one bit less.
#[inline]
pub fn is_anchor(subset_count: u8, partition: usize, pixel: usize) -> bool {
    if pixel == 0 {
        return true;
    }

    match subset_count {
        2 => ANCHOR_2[partition] as usize == pixel,
        3 => ANCHOR_3A[partition] as usize == pixel || ANCHOR_3B[partition] as usize == pixel,
        _ => false,
    }
}

/// Subset id of every pixel for the 64 two-subset partitions, row-major by partition.
#[rustfmt::skip]
pub static PARTITION_2: [u8; 64 * 16] = [
    0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, //  0
    0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, //  1
    0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, //  2
    0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, //  3
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, //  4
    0, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, //  5
    0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, //  6
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1, //  7
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, //  8
    0, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //  9
    0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, // 10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 1, // 11
    0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 12
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, // 13
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 14
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, // 15
    0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, // 16
    0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, // 17
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, // 18
    0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, // 19
    0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, // 20
    0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, // 21
    0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, // 22
    0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, // 23
    0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, // 24
    0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, // 25
    0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, // 26
    0, 0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, // 27
    0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, // 28
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, // 29
    0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, // 30
    0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, // 31
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, // 32
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, // 33
    0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, // 34
    0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, // 35
    0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, // 36
    0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, // 37
    0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, // 38
    0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, // 39
    0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, // 40
    0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, // 41
    0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, // 42
    0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 0, // 43
    0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, // 44
    0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, // 45
    0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, // 46
    0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, // 47
    0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, // 48
    0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, // 49
    0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, // 50
    0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, // 51
    0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, // 52
    0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, // 53
    0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, // 54
    0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, // 55
    0, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, // 56
    0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, // 57
    0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, // 58
    0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, // 59
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, // 60
    0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, // 61
    0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, // 62
    0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, // 63
];

/// Subset id of every pixel for the 64 three-subset partitions, row-major by partition.
#[rustfmt::skip]
pub static PARTITION_3: [u8; 64 * 16] = [
    0, 0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 1, 2, 2, 2, 2, //  0
    0, 0, 0, 1, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 2, 1, //  1
    0, 0, 0, 0, 2, 0, 0, 1, 2, 2, 1, 1, 2, 2, 1, 1, //  2
    0, 2, 2, 2, 0, 0, 2, 2, 0, 0, 1, 1, 0, 1, 1, 1, //  3
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, //  4
    0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 2, 0, 0, 2, 2, //  5
    0, 0, 2, 2, 0, 0, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, //  6
    0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, //  7
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, //  8
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, //  9
    0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, // 10
    0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, // 11
    0, 1, 1, 2, 0, 1, 1, 2, 0, 1, 1, 2, 0, 1, 1, 2, // 12
    0, 1, 2, 2, 0, 1, 2, 2, 0, 1, 2, 2, 0, 1, 2, 2, // 13
    0, 0, 1, 1, 0, 1, 1, 2, 1, 1, 2, 2, 1, 2, 2, 2, // 14
    0, 0, 1, 1, 2, 0, 0, 1, 2, 2, 0, 0, 2, 2, 2, 0, // 15
    0, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 2, 1, 1, 2, 2, // 16
    0, 1, 1, 1, 0, 0, 1, 1, 2, 0, 0, 1, 2, 2, 0, 0, // 17
    0, 0, 0, 0, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, // 18
    0, 0, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 1, 1, 1, 1, // 19
    0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 2, 2, 0, 2, 2, 2, // 20
    0, 0, 0, 1, 0, 0, 0, 1, 2, 2, 2, 1, 2, 2, 2, 1, // 21
    0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2, // 22
    0, 0, 0, 0, 1, 1, 0, 0, 2, 2, 1, 0, 2, 2, 1, 0, // 23
    0, 1, 2, 2, 0, 1, 2, 2, 0, 0, 1, 1, 0, 0, 0, 0, // 24
    0, 0, 1, 2, 0, 0, 1, 2, 1, 1, 2, 2, 2, 2, 2, 2, // 25
    0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, 0, 1, 1, 0, // 26
    0, 0, 0, 0, 0, 1, 1, 0, 1, 2, 2, 1, 1, 2, 2, 1, // 27
    0, 0, 2, 2, 1, 1, 0, 2, 1, 1, 0, 2, 0, 0, 2, 2, // 28
    0, 1, 1, 0, 0, 1, 1, 0, 2, 0, 0, 2, 2, 2, 2, 2, // 29
    0, 0, 1, 1, 0, 1, 2, 2, 0, 1, 2, 2, 0, 0, 1, 1, // 30
    0, 0, 0, 0, 2, 0, 0, 0, 2, 2, 1, 1, 2, 2, 2, 1, // 31
    0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 2, 2, 2, // 32
    0, 2, 2, 2, 0, 0, 2, 2, 0, 0, 1, 2, 0, 0, 1, 1, // 33
    0, 0, 1, 1, 0, 0, 1, 2, 0, 0, 2, 2, 0, 2, 2, 2, // 34
    0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0, 0, 1, 2, 0, // 35
    0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0, 0, 0, 0, // 36
    0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, // 37
    0, 1, 2, 0, 2, 0, 1, 2, 1, 2, 0, 1, 0, 1, 2, 0, // 38
    0, 0, 1, 1, 2, 2, 0, 0, 1, 1, 2, 2, 0, 0, 1, 1, // 39
    0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 0, 0, 0, 0, 1, 1, // 40
    0, 1, 0, 1, 0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, // 41
    0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 2, 1, 2, 1, 2, 1, // 42
    0, 0, 2, 2, 1, 1, 2, 2, 0, 0, 2, 2, 1, 1, 2, 2, // 43
    0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 2, 2, 0, 0, 1, 1, // 44
    0, 2, 2, 0, 1, 2, 2, 1, 0, 2, 2, 0, 1, 2, 2, 1, // 45
    0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 0, 1, 0, 1, // 46
    0, 0, 0, 0, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, // 47
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 2, 2, 2, 2, // 48
    0, 2, 2, 2, 0, 1, 1, 1, 0, 2, 2, 2, 0, 1, 1, 1, // 49
    0, 0, 0, 2, 1, 1, 1, 2, 0, 0, 0, 2, 1, 1, 1, 2, // 50
    0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, // 51
    0, 2, 2, 2, 0, 1, 1, 1, 0, 1, 1, 1, 0, 2, 2, 2, // 52
    0, 0, 0, 2, 1, 1, 1, 2, 1, 1, 1, 2, 0, 0, 0, 2, // 53
    0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 2, 2, // 54
    0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, 2, 1, 1, 2, // 55
    0, 1, 1, 0, 0, 1, 1, 0, 2, 2, 2, 2, 2, 2, 2, 2, // 56
    0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 2, 2, // 57
    0, 0, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 0, 0, 2, 2, // 58
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 1, 1, 2, // 59
    0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, // 60
    0, 2, 2, 2, 1, 2, 2, 2, 0, 2, 2, 2, 1, 2, 2, 2, // 61
    0, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // 62
    0, 1, 1, 1, 2, 0, 1, 1, 2, 2, 0, 1, 2, 2, 2, 0, // 63
];

/// Anchor pixel of subset 1 for each two-subset partition.
#[rustfmt::skip]
pub static ANCHOR_2: [u8; 64] = [
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15,  2,  8,  2,  2,  8,  8, 15,  2,  8,  2,  2,  8,  8,  2,  2,
    15, 15,  6,  8,  2,  8, 15, 15,  2,  8,  2,  2,  2, 15, 15,  6,
     6,  2,  6,  8, 15, 15,  2,  2, 15, 15, 15, 15, 15,  2,  2, 15,
];

/// Anchor pixel of subset 1 for each three-subset partition.
#[rustfmt::skip]
pub static ANCHOR_3A: [u8; 64] = [
     3,  3, 15, 15,  8,  3, 15, 15,  8,  8,  6,  6,  6,  5,  3,  3,
     3,  3,  8, 15,  3,  3,  6, 10,  5,  8,  8,  6,  8,  5, 15, 15,
     8, 15,  3,  5,  6, 10,  8, 15, 15,  3, 15,  5, 15, 15, 15, 15,
     3, 15,  5,  5,  5,  8,  5, 10,  5, 10,  8, 13, 15, 12,  3,  3,
];

/// Anchor pixel of subset 2 for each three-subset partition.
#[rustfmt::skip]
pub static ANCHOR_3B: [u8; 64] = [
    15,  8,  8,  3, 15, 15,  3,  8, 15, 15, 15, 15, 15, 15, 15,  8,
    15,  8, 15,  3, 15,  8, 15,  8,  3, 15,  6, 10, 15, 15, 10,  8,
    15,  3, 15, 10, 10,  8,  9, 10,  6, 15,  8, 15,  3,  6,  6,  8,
    15,  3, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,  3, 15, 15,  8,
];
