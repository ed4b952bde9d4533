#![allow(dead_code)]

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

pub const WEIGHT2: [u8; 4] = [0, 21, 43, 64];
pub const WEIGHT3: [u8; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
pub const WEIGHT4: [u8; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Field widths of one mode, written out by hand so the tests don't share
/// the decoder's tables.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub subsets: usize,
    pub partition_bits: u32,
    pub rotation_bits: u32,
    pub index_selector_bits: u32,
    pub color_bits: u32,
    pub alpha_bits: u32,
    pub p_bits: usize,
    pub index_bits: u32,
    pub secondary_index_bits: u32,
}

const fn layout_of(fields: [u32; 9]) -> Layout {
    Layout {
        subsets: fields[0] as usize,
        partition_bits: fields[1],
        rotation_bits: fields[2],
        index_selector_bits: fields[3],
        color_bits: fields[4],
        alpha_bits: fields[5],
        p_bits: fields[6] as usize,
        index_bits: fields[7],
        secondary_index_bits: fields[8],
    }
}

// subsets, partition, rotation, selector, color, alpha, p-bits, index, secondary index
const LAYOUTS: [Layout; 8] = [
    layout_of([3, 4, 0, 0, 4, 0, 6, 3, 0]),
    layout_of([2, 6, 0, 0, 6, 0, 2, 3, 0]),
    layout_of([3, 6, 0, 0, 5, 0, 0, 2, 0]),
    layout_of([2, 6, 0, 0, 7, 0, 4, 2, 0]),
    layout_of([1, 0, 2, 1, 5, 6, 0, 2, 3]),
    layout_of([1, 0, 2, 0, 7, 8, 0, 2, 2]),
    layout_of([1, 0, 0, 0, 7, 7, 2, 4, 0]),
    layout_of([2, 6, 0, 0, 5, 5, 4, 2, 0]),
];

pub fn layout(mode: u8) -> &'static Layout {
    &LAYOUTS[mode as usize]
}

impl Layout {
    pub fn has_alpha(&self) -> bool {
        self.alpha_bits > 0
    }

    /// P-bit that applies to `endpoint`, given the block's p-bits.
    pub fn p_bit_of(&self, endpoint: usize, p_bits: &[u32; 6]) -> Option<u32> {
        match self.p_bits {
            0 => None,
            count if count == self.subsets * 2 => Some(p_bits[endpoint]),
            _ => Some(p_bits[endpoint / 2]),
        }
    }
}

/// Writes bits LSB-first into a 128-bit block.
#[derive(Default)]
pub struct BitWriter {
    bits: u128,
    position: u32,
}

impl BitWriter {
    /// Appends the low `count` bits of `value`. Higher bits are dropped.
    pub fn write(&mut self, value: u32, count: u32) {
        let mask = (1u128 << count) - 1;
        self.bits |= (value as u128 & mask) << self.position;
        self.position += count;
    }

    pub fn finish(self) -> [u8; 16] {
        assert_eq!(self.position, 128, "block layout must fill 128 bits");
        self.bits.to_le_bytes()
    }
}

/// Lays out the fields of a BC7 block for a given mode.
///
/// Endpoints are given as raw, quantized channel values. Anchor pixels are
/// supplied together with the partition, and their indices are written one
/// bit shorter, so the top bit of an anchor index is silently dropped.
#[derive(Clone)]
pub struct BlockBuilder {
    mode: u8,
    partition: u32,
    anchors: Vec<usize>,
    rotation: u32,
    index_selector: u32,
    endpoints: [[u32; 4]; 6],
    p_bits: [u32; 6],
    primary: [u32; 16],
    secondary: [u32; 16],
}

impl BlockBuilder {
    /// Starts a block in partition 0, whose anchors are pixel 0, pixel 15
    /// for two subsets and pixels 3 and 15 for three subsets.
    pub fn new(mode: u8) -> Self {
        assert!(mode < 8);
        let anchors = match layout(mode).subsets {
            1 => vec![0],
            2 => vec![0, 15],
            _ => vec![0, 3, 15],
        };
        Self {
            mode,
            partition: 0,
            anchors,
            rotation: 0,
            index_selector: 0,
            endpoints: [[0; 4]; 6],
            p_bits: [0; 6],
            primary: [0; 16],
            secondary: [0; 16],
        }
    }

    pub fn partition(mut self, partition: u32, anchors: &[usize]) -> Self {
        assert_eq!(anchors.len(), layout(self.mode).subsets);
        self.partition = partition;
        self.anchors = anchors.to_vec();
        self
    }

    pub fn rotation(mut self, rotation: u32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn index_selector(mut self, index_selector: u32) -> Self {
        self.index_selector = index_selector;
        self
    }

    pub fn endpoint(mut self, endpoint: usize, raw: [u32; 4]) -> Self {
        self.endpoints[endpoint] = raw;
        self
    }

    pub fn all_endpoints(mut self, raw: [u32; 4]) -> Self {
        self.endpoints = [raw; 6];
        self
    }

    pub fn p_bit(mut self, index: usize, p_bit: u32) -> Self {
        self.p_bits[index] = p_bit;
        self
    }

    pub fn all_p_bits(mut self, p_bit: u32) -> Self {
        self.p_bits = [p_bit; 6];
        self
    }

    pub fn primary_indices(mut self, indices: [u32; 16]) -> Self {
        self.primary = indices;
        self
    }

    pub fn secondary_indices(mut self, indices: [u32; 16]) -> Self {
        self.secondary = indices;
        self
    }

    pub fn build(&self) -> [u8; 16] {
        let layout = layout(self.mode);
        let mut writer = BitWriter::default();

        writer.write(1 << self.mode, self.mode as u32 + 1);
        writer.write(self.partition, layout.partition_bits);
        writer.write(self.rotation, layout.rotation_bits);
        writer.write(self.index_selector, layout.index_selector_bits);

        let endpoints = &self.endpoints[..layout.subsets * 2];
        for channel in 0..3 {
            for endpoint in endpoints {
                writer.write(endpoint[channel], layout.color_bits);
            }
        }
        for endpoint in endpoints {
            writer.write(endpoint[3], layout.alpha_bits);
        }

        for p_bit in &self.p_bits[..layout.p_bits] {
            writer.write(*p_bit, 1);
        }

        for (pixel, index) in self.primary.iter().enumerate() {
            let mut bits = layout.index_bits;
            if self.anchors.contains(&pixel) {
                bits -= 1;
            }
            writer.write(*index, bits);
        }

        if layout.secondary_index_bits > 0 {
            for (pixel, index) in self.secondary.iter().enumerate() {
                let mut bits = layout.secondary_index_bits;
                if pixel == 0 {
                    bits -= 1;
                }
                writer.write(*index, bits);
            }
        }

        writer.finish()
    }

    /// Dequantized colors of every endpoint, computed from the raw fields.
    pub fn endpoint_colors(&self) -> [[u8; 4]; 6] {
        let layout = layout(self.mode);
        core::array::from_fn(|endpoint| {
            let p_bit = layout.p_bit_of(endpoint, &self.p_bits);
            endpoint_color(self.mode, self.endpoints[endpoint], p_bit)
        })
    }
}

/// Bit-replicating expansion of a `bits` wide value, p-bit appended when present.
pub fn unquantize(raw: u32, bits: u32, p_bit: Option<u32>) -> u8 {
    let (value, bits) = match p_bit {
        Some(p_bit) => ((raw << 1) | p_bit, bits + 1),
        None => (raw, bits),
    };
    let mut expanded = 0;
    let mut filled = 0;
    while filled < 8 {
        expanded = (expanded << bits) | value;
        filled += bits;
    }
    (expanded >> (filled - 8)) as u8
}

/// Dequantized color of a raw endpoint under `mode`.
pub fn endpoint_color(mode: u8, raw: [u32; 4], p_bit: Option<u32>) -> [u8; 4] {
    let layout = layout(mode);
    let alpha = if layout.has_alpha() {
        unquantize(raw[3], layout.alpha_bits, p_bit)
    } else {
        255
    };

    [
        unquantize(raw[0], layout.color_bits, p_bit),
        unquantize(raw[1], layout.color_bits, p_bit),
        unquantize(raw[2], layout.color_bits, p_bit),
        alpha,
    ]
}

/// Reference fixed-point blend of one channel.
pub fn lerp(low: u8, high: u8, weight: u8) -> u8 {
    let weight = weight as u32;
    ((low as u32 * (64 - weight) + high as u32 * weight + 32) >> 6) as u8
}

/// Deterministic pseudo random blocks.
pub fn random_blocks(seed: u64, count: usize) -> Vec<[u8; 16]> {
    let mut rng = Pcg64::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            block
        })
        .collect()
}
