mod bitstream;
mod block;
mod endpoint;
mod interpolate;

use bytemuck::cast_slice;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub use self::{
    bitstream::read_bits,
    block::{block_mode, decode_block, decode_block_bc7, decode_block_rgba, BlockMode},
    endpoint::dequantize,
};
use self::block::{decode_pixels, write_pixels};
use crate::{blocks_byte_size, DecodeError, DecodeSettings, BLOCK_BYTE_SIZE};

/// Counters collected while decoding an image.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DecodeSummary {
    /// Number of blocks decoded.
    pub blocks: usize,
    /// Number of blocks that used the reserved mode and were filled with
    /// [`DecodeSettings::reserved_color`].
    pub reserved_blocks: usize,
}

/// Decodes a BC7 image into `output_bitstream` as tightly packed RGBA8 rows.
///
/// `input_bitstream` holds the blocks in row-major block order, as stored in
/// DDS and KTX files. Only the first `width * height * 4` bytes of
/// `output_bitstream` are written.
pub fn decompress_blocks(
    width: u32,
    height: u32,
    input_bitstream: &[u8],
    output_bitstream: &mut [u8],
    settings: &DecodeSettings,
) -> Result<DecodeSummary, DecodeError> {
    let (blocks, output, row_pitch) = prepare(width, height, input_bitstream, output_bitstream)?;
    let blocks_x = width.div_ceil(4) as usize;

    let reserved_blocks = blocks
        .chunks_exact(blocks_x)
        .zip(output.chunks_mut(row_pitch * 4))
        .map(|(row_blocks, row_output)| decode_block_row(width, row_blocks, row_output, settings))
        .sum();

    Ok(finish(width, height, blocks.len(), reserved_blocks))
}

/// Same as [`decompress_blocks`], but decodes block rows on the rayon thread pool.
///
/// Every block row owns a disjoint band of the output, so the result is
/// identical to the sequential version.
#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn decompress_blocks_par(
    width: u32,
    height: u32,
    input_bitstream: &[u8],
    output_bitstream: &mut [u8],
    settings: &DecodeSettings,
) -> Result<DecodeSummary, DecodeError> {
    let (blocks, output, row_pitch) = prepare(width, height, input_bitstream, output_bitstream)?;
    let blocks_x = width.div_ceil(4) as usize;

    let reserved_blocks = blocks
        .par_chunks_exact(blocks_x)
        .zip(output.par_chunks_mut(row_pitch * 4))
        .map(|(row_blocks, row_output)| decode_block_row(width, row_blocks, row_output, settings))
        .sum();

    Ok(finish(width, height, blocks.len(), reserved_blocks))
}

/// Validates the buffers and returns the blocks, the used part of the output and the row pitch.
fn prepare<'a, 'b>(
    width: u32,
    height: u32,
    input_bitstream: &'a [u8],
    output_bitstream: &'b mut [u8],
) -> Result<(&'a [[u8; 16]], &'b mut [u8], usize), DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension { width, height });
    }

    let expected = blocks_byte_size(width, height);
    if input_bitstream.len() != expected {
        return Err(DecodeError::InvalidLength {
            expected,
            actual: input_bitstream.len(),
        });
    }

    let row_pitch = width as usize * 4;
    let needed = row_pitch * height as usize;
    if output_bitstream.len() < needed {
        return Err(DecodeError::OutputBufferTooSmall {
            needed,
            actual: output_bitstream.len(),
        });
    }

    debug_assert_eq!(expected % BLOCK_BYTE_SIZE, 0);

    Ok((
        cast_slice(input_bitstream),
        &mut output_bitstream[..needed],
        row_pitch,
    ))
}

/// Decodes one row of blocks into its band of up to four pixel rows.
/// Returns the number of reserved blocks.
fn decode_block_row(
    width: u32,
    row_blocks: &[[u8; 16]],
    row_output: &mut [u8],
    settings: &DecodeSettings,
) -> usize {
    let rows = (row_output.len() / (width as usize * 4)) as u32;
    let mut reserved_blocks = 0;

    for (block_x, block) in row_blocks.iter().enumerate() {
        let (pixels, mode) = decode_pixels(block, settings);
        if mode == BlockMode::Reserved {
            reserved_blocks += 1;
        }
        write_pixels(&pixels, block_x as u32, 0, width, rows, row_output);
    }

    reserved_blocks
}

fn finish(width: u32, height: u32, blocks: usize, reserved_blocks: usize) -> DecodeSummary {
    log::debug!("Decoded {width}x{height} BC7 image ({blocks} blocks)");

    if reserved_blocks > 0 {
        log::warn!(
            "{reserved_blocks} of {blocks} blocks use the reserved mode and were filled with a constant color"
        );
    }

    DecodeSummary {
        blocks,
        reserved_blocks,
    }
}
