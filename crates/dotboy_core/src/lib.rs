//! Emulation core for the original (DMG) Game Boy.
//!
//! The crate is split into two halves: [`cpu`] holds the LR35902 core and
//! the bus seam it talks through, and [`machine`] wires that core to the
//! DMG's memory map, timer, PPU and joypad. Frontends drive the whole
//! thing through [`machine::GameBoy`].

pub mod cpu;
pub mod machine;

pub use machine::{Cartridge, FrameSink, GameBoy, NullSink};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;

/// T-cycles per full frame (154 scanlines x 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;
