//! Decoding of a single BC7 block.
//!
//! Layout and arithmetic follow the BPTC format description and match the
//! output of bcdec for every valid mode.

use bytemuck::cast_slice;

use super::{
    bitstream::BitStream,
    endpoint::read_endpoints,
    interpolate::{blend, rotate},
};
use crate::{
    tables::{is_anchor, subset_of, MODES},
    DecodeSettings,
};

/// Mode of a compressed block, taken from its unary mode prefix.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum BlockMode {
    /// One of the eight defined modes, `0..=7`.
    Mode(u8),
    /// No mode bit is set in the first byte. The format leaves the content
    /// undefined; the decoder fills the block with a fixed color.
    Reserved,
}

/// Reads the mode of `block`: the position of the lowest set bit of its first byte.
#[inline]
pub fn block_mode(block: &[u8; 16]) -> BlockMode {
    match block[0].trailing_zeros() {
        mode @ 0..=7 => BlockMode::Mode(mode as u8),
        _ => BlockMode::Reserved,
    }
}

/// Decodes `block` into 16 RGBA8 pixels in row-major order.
///
/// Reserved blocks decode to opaque black.
#[inline]
pub fn decode_block_rgba(block: &[u8; 16]) -> [[u8; 4]; 16] {
    decode_pixels(block, &DecodeSettings::default()).0
}

/// Decodes `block` and writes it into `destination`, an RGBA8 image of
/// `image_width` x `image_height` pixels, at block coordinates
/// (`block_x`, `block_y`).
///
/// Pixels past the right or bottom edge of the image are skipped, so the
/// last block row and column of images whose size is not a multiple of 4
/// can be passed as-is. Nothing is written past the end of `destination`.
pub fn decode_block(
    block: &[u8; 16],
    block_x: u32,
    block_y: u32,
    image_width: u32,
    image_height: u32,
    destination: &mut [u8],
) {
    let (pixels, _) = decode_pixels(block, &DecodeSettings::default());
    write_pixels(
        &pixels,
        block_x,
        block_y,
        image_width,
        image_height,
        destination,
    );
}

/// Decodes a BC7 block by reading 16 bytes from `compressed_block` and writing the RGBA8 data into `decompressed_block` with `destination_pitch` many bytes per output row.
///
/// Nothing is written if `compressed_block` is shorter than 16 bytes.
///
/// # Panics
///
/// Panics if `decompressed_block` is shorter than `3 * destination_pitch + 16` bytes.
pub fn decode_block_bc7(
    compressed_block: &[u8],
    decompressed_block: &mut [u8],
    destination_pitch: usize,
) {
    let Some(block) = compressed_block.first_chunk::<16>() else {
        return;
    };

    let (pixels, _) = decode_pixels(block, &DecodeSettings::default());

    for (row, row_pixels) in pixels.chunks_exact(4).enumerate() {
        let offset = row * destination_pitch;
        decompressed_block[offset..offset + 16].copy_from_slice(cast_slice(row_pixels));
    }
}

/// Decodes all 16 pixels of `block` and reports which mode it used.
pub(crate) fn decode_pixels(
    block: &[u8; 16],
    settings: &DecodeSettings,
) -> ([[u8; 4]; 16], BlockMode) {
    let BlockMode::Mode(mode) = block_mode(block) else {
        return ([settings.reserved_color; 16], BlockMode::Reserved);
    };

    let descriptor = &MODES[mode as usize];
    let mut bstream = BitStream::new(block);

    // Skip the mode prefix
    bstream.read_bits(mode as u32 + 1);

    let partition = bstream.read_bits(descriptor.partition_bits as u32) as usize;
    let rotation = bstream.read_bits(descriptor.rotation_bits as u32);
    let index_selector = bstream.read_bits(descriptor.index_selector_bits as u32);

    let endpoints = read_endpoints(descriptor, &mut bstream);

    // Anchor indices are stored with one less bit, their MSB is always zero.
    let primary_bits = descriptor.primary_index_bits;
    let mut primary = [0u8; 16];
    for (pixel, index) in primary.iter_mut().enumerate() {
        let bits = if is_anchor(descriptor.subset_count, partition, pixel) {
            primary_bits - 1
        } else {
            primary_bits
        };
        *index = bstream.read_bits(bits as u32) as u8;
    }

    // The secondary set only has pixel 0 as anchor.
    let secondary_bits = descriptor.secondary_index_bits;
    let mut secondary = [0u8; 16];
    if descriptor.has_secondary_indices() {
        for (pixel, index) in secondary.iter_mut().enumerate() {
            let bits = if pixel == 0 {
                secondary_bits - 1
            } else {
                secondary_bits
            };
            *index = bstream.read_bits(bits as u32) as u8;
        }
    }

    debug_assert_eq!(bstream.position(), 128);

    let ((color_indices, color_bits), (alpha_indices, alpha_bits)) =
        match (descriptor.has_secondary_indices(), index_selector) {
            (false, _) => ((&primary, primary_bits), (&primary, primary_bits)),
            (true, 0) => ((&primary, primary_bits), (&secondary, secondary_bits)),
            (true, _) => ((&secondary, secondary_bits), (&primary, primary_bits)),
        };

    let mut pixels = [[0u8; 4]; 16];
    for (pixel, rgba) in pixels.iter_mut().enumerate() {
        let subset = subset_of(descriptor.subset_count, partition, pixel);

        *rgba = blend(
            endpoints[subset * 2],
            endpoints[subset * 2 + 1],
            (color_indices[pixel], color_bits),
            (alpha_indices[pixel], alpha_bits),
        );
        rotate(rgba, rotation);
    }

    (pixels, BlockMode::Mode(mode))
}

/// Copies a decoded block into an RGBA8 image, clipped to the image bounds.
pub(crate) fn write_pixels(
    pixels: &[[u8; 4]; 16],
    block_x: u32,
    block_y: u32,
    image_width: u32,
    image_height: u32,
    destination: &mut [u8],
) {
    let width = image_width as usize;
    let x = (block_x as usize).saturating_mul(4);
    let y = (block_y as usize).saturating_mul(4);

    let columns = width.saturating_sub(x).min(4);
    let rows = (image_height as usize).saturating_sub(y).min(4);

    for (row, row_pixels) in pixels.chunks_exact(4).take(rows).enumerate() {
        let offset = ((y + row) * width + x) * 4;
        let Some(target) = destination.get_mut(offset..offset + columns * 4) else {
            return;
        };
        target.copy_from_slice(cast_slice(&row_pixels[..columns]));
    }
}
