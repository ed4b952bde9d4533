use super::bitstream::BitStream;
use crate::tables::ModeDescriptor;

/// Fully decoded RGBA8 endpoint colors of one block. Only the first
/// `endpoint_count()` entries are meaningful.
pub(crate) type Endpoints = [[u8; 4]; 6];

/// Expands a `bits` wide channel value to 8 bits, optionally appending a p-bit first.
///
/// The value is shifted so its MSB lies in bit 7 and its top bits are
/// replicated into the vacated low bits. Values wider than 8 bits keep
/// their top 8 bits.
#[inline]
pub fn dequantize(raw: u32, bits: u32, p_bit: Option<u32>) -> u8 {
    let (value, total_bits) = match p_bit {
        Some(p_bit) => ((raw << 1) | (p_bit & 1), bits.saturating_add(1)),
        None => (raw, bits),
    };

    let value = match total_bits {
        0 => 0,
        1..=8 => {
            let value = value << (8 - total_bits);
            value | (value >> total_bits)
        }
        _ => value.checked_shr(total_bits - 8).unwrap_or(0),
    };
    (value & 0xFF) as u8
}

/// Reads the raw endpoint channels and p-bits of `mode` and dequantizes them.
///
/// Channels are stored channel-major: all red values, then all green,
/// blue and alpha, followed by the p-bits.
#[allow(clippy::needless_range_loop)]
pub(crate) fn read_endpoints(mode: &ModeDescriptor, bstream: &mut BitStream) -> Endpoints {
    let num_endpoints = mode.endpoint_count();
    let mut raw = [[0u32; 4]; 6];

    for channel in 0..3 {
        for endpoint in raw.iter_mut().take(num_endpoints) {
            endpoint[channel] = bstream.read_bits(mode.color_bits as u32);
        }
    }

    if mode.has_alpha() {
        for endpoint in raw.iter_mut().take(num_endpoints) {
            endpoint[3] = bstream.read_bits(mode.alpha_bits as u32);
        }
    }

    let mut p_bits = [0u32; 6];
    for p_bit in p_bits.iter_mut().take(mode.p_bit_count()) {
        *p_bit = bstream.read_bit();
    }

    let mut endpoints = [[0u8; 4]; 6];
    for (index, (endpoint, raw)) in endpoints
        .iter_mut()
        .zip(raw.iter())
        .take(num_endpoints)
        .enumerate()
    {
        let p_bit = if mode.endpoint_p_bits {
            Some(p_bits[index])
        } else if mode.shared_p_bits {
            Some(p_bits[index >> 1])
        } else {
            None
        };

        for channel in 0..3 {
            endpoint[channel] = dequantize(raw[channel], mode.color_bits as u32, p_bit);
        }

        // Modes without alpha are opaque.
        endpoint[3] = if mode.has_alpha() {
            dequantize(raw[3], mode.alpha_bits as u32, p_bit)
        } else {
            0xFF
        };
    }

    endpoints
}
