/// Decoding settings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodeSettings {
    /// RGBA8 color written for every pixel of a block with the reserved mode.
    pub reserved_color: [u8; 4],
}

impl DecodeSettings {
    /// Reserved blocks decode to opaque black.
    pub const fn opaque_black() -> Self {
        Self {
            reserved_color: [0, 0, 0, 255],
        }
    }

    /// Reserved blocks decode to transparent black, like D3D and bcdec do.
    pub const fn transparent_black() -> Self {
        Self {
            reserved_color: [0, 0, 0, 0],
        }
    }
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self::opaque_black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(DecodeSettings::default(), DecodeSettings::opaque_black());
        assert_eq!(DecodeSettings::default().reserved_color, [0, 0, 0, 255]);
        assert_eq!(DecodeSettings::transparent_black().reserved_color, [0; 4]);
    }
}
