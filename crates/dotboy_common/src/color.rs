/// An 8-bit-per-channel RGBA color.
///
/// Machines hand these to their frame sinks; frontends repack them into
/// whatever their surface wants via [`Color::rgb`] or [`Color::as_rgba`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // The DMG's four-level grayscale ramp, lightest first.
    pub const WHITE: Color = Color::new_rgb(0xFF, 0xFF, 0xFF);
    pub const LIGHT_GRAY: Color = Color::new_rgb(0xAA, 0xAA, 0xAA);
    pub const DARK_GRAY: Color = Color::new_rgb(0x55, 0x55, 0x55);
    pub const BLACK: Color = Color::new_rgb(0x00, 0x00, 0x00);

    /// Fully opaque color from its three channels.
    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xFF }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channel bytes in RGBA order, ready for a byte-oriented surface.
    #[inline]
    pub const fn as_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
