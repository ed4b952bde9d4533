use crate::tables::weights;

#[inline]
pub(crate) fn interpolate(a: u8, b: u8, weights: &[u8], index: u8) -> u8 {
    let weight = weights[index as usize] as u32;
    ((a as u32 * (64 - weight) + b as u32 * weight + 32) >> 6) as u8
}

/// Blends every channel of an endpoint pair.
///
/// `color` drives R, G and B, `alpha` drives A. Each is an index together
/// with its bit width.
#[inline]
pub(crate) fn blend(low: [u8; 4], high: [u8; 4], color: (u8, u8), alpha: (u8, u8)) -> [u8; 4] {
    let (color_index, color_bits) = color;
    let (alpha_index, alpha_bits) = alpha;
    let color_weights = weights(color_bits);
    let alpha_weights = weights(alpha_bits);

    [
        interpolate(low[0], high[0], color_weights, color_index),
        interpolate(low[1], high[1], color_weights, color_index),
        interpolate(low[2], high[2], color_weights, color_index),
        interpolate(low[3], high[3], alpha_weights, alpha_index),
    ]
}

/// Undoes the channel rotation of modes 4 and 5.
#[inline]
pub(crate) fn rotate(pixel: &mut [u8; 4], rotation: u32) {
    match rotation {
        1 => pixel.swap(3, 0), // Scalar(R) Vector(AGB)
        2 => pixel.swap(3, 1), // Scalar(G) Vector(RAB)
        3 => pixel.swap(3, 2), // Scalar(B) Vector(RGA)
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{WEIGHT2, WEIGHT3, WEIGHT4};

    #[test]
    fn test_interpolate_endpoints() {
        for table in [&WEIGHT2[..], &WEIGHT3[..], &WEIGHT4[..]] {
            let last = (table.len() - 1) as u8;
            assert_eq!(interpolate(10, 200, table, 0), 10);
            assert_eq!(interpolate(10, 200, table, last), 200);
        }
    }

    #[test]
    fn test_interpolate_rounds_to_nearest() {
        // (0 * 43 + 255 * 21 + 32) >> 6 = 84
        assert_eq!(interpolate(0, 255, &WEIGHT2, 1), 84);
        // (0 * 21 + 255 * 43 + 32) >> 6 = 171
        assert_eq!(interpolate(0, 255, &WEIGHT2, 2), 171);
        assert_eq!(interpolate(255, 0, &WEIGHT4, 8), 120);
    }

    #[test]
    fn test_blend_uses_separate_alpha_index() {
        let pixel = blend([0, 0, 0, 0], [255, 255, 255, 255], (3, 2), (0, 3));
        assert_eq!(pixel, [255, 255, 255, 0]);
    }

    #[test]
    fn test_rotate() {
        let rgba = [1, 2, 3, 4];

        let mut pixel = rgba;
        rotate(&mut pixel, 0);
        assert_eq!(pixel, [1, 2, 3, 4]);

        let mut pixel = rgba;
        rotate(&mut pixel, 1);
        assert_eq!(pixel, [4, 2, 3, 1]);

        let mut pixel = rgba;
        rotate(&mut pixel, 2);
        assert_eq!(pixel, [1, 4, 3, 2]);

        let mut pixel = rgba;
        rotate(&mut pixel, 3);
        assert_eq!(pixel, [1, 2, 4, 3]);
    }
}
