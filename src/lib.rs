//! # bc7_decode
//!
//! Software decoder for BC7 (BPTC) compressed textures.
//!
//! Decodes 128-bit BC7 blocks into 4x4 RGBA8 pixel patches on the CPU.
//! All eight block modes are supported. Blocks using the reserved mode
//! decode to a constant color (opaque black by default).
//!
//! ## Block level
//!
//! [`decode::decode_block`] decodes one block straight into an RGBA8 image
//! and clips at the image edges, [`decode::decode_block_rgba`] returns the
//! 16 pixels instead.
//!
//! ## Image level
//!
//! [`decode::decompress_blocks`] decodes a whole image whose blocks are
//! stored in row-major order. With the `rayon` feature (enabled by default)
//! [`decode::decompress_blocks_par`] spreads the block rows over the rayon
//! thread pool.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod decode;
mod error;
mod settings;
pub mod tables;

pub use decode::{decode_block, decode_block_rgba, BlockMode, DecodeSummary};
pub use error::DecodeError;
pub use settings::DecodeSettings;

/// Size of one compressed block in bytes.
pub const BLOCK_BYTE_SIZE: usize = 16;

/// Returns the bytes per row of blocks for the given width.
///
/// The width is used to calculate how many blocks are needed per row,
/// which is then multiplied by the block size.
/// Width is rounded up to the nearest multiple of 4.
pub const fn bytes_per_row(width: u32) -> u32 {
    let blocks_per_row = width.div_ceil(4);
    blocks_per_row * BLOCK_BYTE_SIZE as u32
}

/// Returns the byte size required for storing compressed blocks for the given dimensions.
///
/// Width and height are rounded up to the nearest multiple of 4.
pub const fn blocks_byte_size(width: u32, height: u32) -> usize {
    let block_width = (width as usize).div_ceil(4);
    let block_height = (height as usize).div_ceil(4);
    block_width * block_height * BLOCK_BYTE_SIZE
}
