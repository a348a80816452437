use dotboy_common::Color;

/// The DMG's four-level grayscale, indexed by palette output (0 = white,
/// 3 = black).
pub(crate) const SHADES: [Color; 4] = [
    Color::WHITE,
    Color::LIGHT_GRAY,
    Color::DARK_GRAY,
    Color::BLACK,
];

/// Destination for rendered pixels.
///
/// The PPU pushes each composed pixel of a scanline through `set_pixel`
/// as the line enters HBlank, and calls `flush` once per frame at the
/// start of VBlank. Hosts that want double-buffering provide it behind
/// this trait.
pub trait FrameSink {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
    fn flush(&mut self);
}

/// Sink that discards all output; the default until a host attaches one.
#[derive(Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn set_pixel(&mut self, _x: usize, _y: usize, _color: Color) {}
    fn flush(&mut self) {}
}
