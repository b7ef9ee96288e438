//! Nearest-palette quantization for indexed color terminals.

/// Map an RGB color to an index in the xterm 256-color palette.
///
/// Pure grays (`r == g == b`) use the 24-step ramp at 232-255, with the
/// extremes snapped to the cube's black (16) and white (231). Everything
/// else lands in the 6x6x6 cube at 16-231.
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 3 {
            return 16;
        }
        if r > 252 {
            return 231;
        }
        // (r - 3) / 10 reaches 24 for r >= 243; the ramp ends at 255.
        return (232 + (r as u16 - 3) / 10).min(255) as u8;
    }

    let level = |c: u8| ((c as u16 * 6) / 256).min(5) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Map an RGB color to one of the 16 basic ANSI colors.
///
/// Each channel above 128 sets its bit (red 1, green 2, blue 4, the ANSI
/// order) and any such channel also sets the bright bit 8.
pub fn rgb_to_16(r: u8, g: u8, b: u8) -> u8 {
    // SGR order: 40 + index is black, red, green, yellow, blue, ...
    let red = if r > 128 { 1 } else { 0 };
    let green = if g > 128 { 2 } else { 0 };
    let blue = if b > 128 { 4 } else { 0 };
    let bits = red | green | blue;
    let intensity = if bits != 0 { 8 } else { 0 };
    intensity | bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_256_black_and_white() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(2, 2, 2), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(253, 253, 253), 231);
    }

    #[test]
    fn test_256_gray_ramp_range() {
        for v in 3..=252u8 {
            let idx = rgb_to_256(v, v, v);
            assert!((232..=255).contains(&idx), "gray {} mapped to {}", v, idx);
        }
        assert_eq!(rgb_to_256(3, 3, 3), 232);
        assert_eq!(rgb_to_256(128, 128, 128), 244);
        assert_eq!(rgb_to_256(252, 252, 252), 255);
    }

    #[test]
    fn test_256_color_cube() {
        assert_eq!(rgb_to_256(255, 0, 0), 196);
        assert_eq!(rgb_to_256(0, 255, 0), 46);
        assert_eq!(rgb_to_256(0, 0, 255), 21);
        // 128 * 6 / 256 = 3
        assert_eq!(rgb_to_256(128, 0, 0), 16 + 36 * 3);
    }

    #[test]
    fn test_16_range_and_intensity() {
        let samples = [
            (0, 0, 0),
            (128, 128, 128),
            (129, 0, 0),
            (0, 200, 0),
            (0, 0, 255),
            (255, 255, 255),
        ];
        for &(r, g, b) in &samples {
            let idx = rgb_to_16(r, g, b);
            assert!(idx < 16);
            let bright = r > 128 || g > 128 || b > 128;
            assert_eq!(idx & 8 != 0, bright, "rgb({}, {}, {}) -> {}", r, g, b, idx);
        }
    }

    #[test]
    fn test_16_channel_bits() {
        assert_eq!(rgb_to_16(0, 0, 0), 0);
        assert_eq!(rgb_to_16(128, 128, 128), 0);
        assert_eq!(rgb_to_16(255, 0, 0), 9);
        assert_eq!(rgb_to_16(0, 255, 0), 10);
        assert_eq!(rgb_to_16(0, 0, 255), 12);
        assert_eq!(rgb_to_16(255, 255, 255), 15);
    }
}
