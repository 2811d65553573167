//! RGBA color value.

/// An immutable 4-channel color: red, green, blue, alpha, each 0-255.
///
/// Plain value semantics — two colors are equal iff all four channels
/// match. No color space math beyond the channel average used by the
/// grayscale and threshold filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red channel (0-255).
    pub red: u8,
    /// Green channel (0-255).
    pub green: u8,
    /// Blue channel (0-255).
    pub blue: u8,
    /// Alpha channel (0-255, 255 = opaque).
    pub alpha: u8,
}

impl Rgba {
    /// Transparent black. Fill value for freshly allocated grids.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Real-valued average of the three color channels, (r + g + b) / 3.
    ///
    /// Kept as `f32` so callers decide where truncation happens (it
    /// happens at the 8-bit store, not here).
    pub fn channel_average(&self) -> f32 {
        (self.red as f32 + self.green as f32 + self.blue as f32) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Rgba::new(1, 2, 3, 4), Rgba::new(1, 2, 3, 4));
        assert_ne!(Rgba::new(1, 2, 3, 4), Rgba::new(1, 2, 3, 5));
    }

    #[test]
    fn test_channel_average_exact() {
        // (10 + 20 + 30) / 3 = 20, alpha ignored
        let c = Rgba::new(10, 20, 30, 255);
        assert_eq!(c.channel_average(), 20.0);
    }

    #[test]
    fn test_channel_average_fractional() {
        // (0 + 0 + 1) / 3 stays fractional until stored
        let c = Rgba::new(0, 0, 1, 0);
        assert!((c.channel_average() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
