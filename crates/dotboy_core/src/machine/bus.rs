use super::cartridge::Cartridge;
use super::sink::{FrameSink, NullSink};
use super::timer::Timer;
use super::MEMORY_SIZE;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

mod dma;
mod init;
mod joypad;
mod mmio;
mod ppu;
mod timer_io;
mod traits;

pub(crate) struct GameBoyBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    /// Optional cartridge with mapper. Without one, images of 32 KiB or
    /// less run from the flat `memory` copy.
    cartridge: Option<Box<dyn Cartridge>>,
    /// Timer / divider state.
    timer: Timer,
    /// Cycle position within the current scanline (0..456).
    scanline_counter: u32,
    /// Internal "STAT interrupt line" latch used to model STAT's
    /// edge-triggered interrupt behaviour. This tracks the logically ORed
    /// state of all enabled STAT interrupt sources between PPU cycles.
    stat_irq_line: bool,
    /// Latched frame of 2-bit shade indices, one byte per pixel, filled a
    /// scanline at a time as lines enter HBlank.
    pub(crate) framebuffer: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],
    /// Pixel destination; `NullSink` until a host attaches one.
    sink: Box<dyn FrameSink>,
    // Joypad state: selection bits and pressed masks. Selection bits
    // correspond to P1 bits 5 (buttons) and 4 (d-pad). The pressed masks
    // use bit=1 to mean "pressed" for:
    // - joyp_buttons: bit0=A, bit1=B, bit2=Select, bit3=Start
    // - joyp_dpad:    bit0=Right, bit1=Left, bit2=Up, bit3=Down
    joyp_select: u8,
    joyp_buttons: u8,
    joyp_dpad: u8,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            if_reg: 0,
            ie_reg: 0,
            cartridge: None,
            timer: Timer::new(),
            scanline_counter: 0,
            stat_irq_line: false,
            framebuffer: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            sink: Box::new(NullSink),
            joyp_select: 0x30, // no group selected; bits 7-6 read back as 1
            joyp_buttons: 0x00,
            joyp_dpad: 0x00,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    /// Reinstate the power-on IO/peripheral state without reallocating.
    ///
    /// The loaded ROM image, the attached cartridge and the frame sink
    /// survive a reset; RAM contents are left as they are, matching
    /// hardware where a reset does not scrub memory.
    pub(super) fn reset(&mut self) {
        self.if_reg = 0;
        self.ie_reg = 0;
        self.scanline_counter = 0;
        self.stat_irq_line = false;
        self.framebuffer.fill(0);
        self.joyp_select = 0x30;
        self.joyp_buttons = 0x00;
        self.joyp_dpad = 0x00;
        self.apply_dmg_initial_io_state();
    }

    /// Load a ROM image into the cartridge ROM area.
    ///
    /// Bank-switched cartridges are the mapper collaborator's business
    /// (see [`Cartridge`]); the flat copy here covers unbanked images.
    pub(super) fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(0x8000);
        self.memory[..len].copy_from_slice(&rom[..len]);
    }

    pub(super) fn set_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.cartridge = Some(cartridge);
    }

    pub(super) fn set_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.sink = sink;
    }
}
