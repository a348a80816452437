use std::collections::BTreeMap;

use dotboy_common::Key;

use crate::cpu::Cpu;
use crate::{CYCLES_PER_FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::sink::SHADES;
use super::{Cartridge, FrameSink, GameBoyBus};

/// High-level Game Boy machine.
///
/// Owns the CPU core and the bus; this is the entry point frontends
/// drive. Each `step` executes one instruction and advances the timer
/// and PPU by exactly its cycle cost.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
        }
    }

    /// Reinstate the power-on state without reallocating. The loaded ROM,
    /// the cartridge and the frame sink survive.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
    }

    /// Load a ROM image into the cartridge ROM area.
    ///
    /// PC is already at 0x0100 from the simulated boot state.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.bus.load_rom(rom);
    }

    /// Attach a mapper for bank-switched cartridges.
    pub fn set_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.bus.set_cartridge(cartridge);
    }

    /// Attach the destination for rendered pixels.
    pub fn set_frame_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.bus.set_sink(sink);
    }

    /// Execute a single instruction (or interrupt dispatch) and return
    /// its T-cycle cost. 0 means the CPU has locked up on an invalid
    /// opcode.
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.bus)
    }

    /// Advance exactly one T-cycle; see [`Cpu::clock`].
    pub fn clock(&mut self) {
        self.cpu.clock(&mut self.bus);
    }

    /// True iff the current instruction has consumed all its cycles.
    pub fn complete(&self) -> bool {
        self.cpu.complete()
    }

    /// Step the machine for one frame worth of time (70224 T-cycles).
    pub fn step_frame(&mut self) {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            let taken = self.step();
            if taken == 0 {
                // Locked CPU; stop instead of spinning.
                break;
            }
            cycles += taken;
        }
    }

    /// Disassemble `[start, end]` into an address -> mnemonic listing.
    pub fn disassemble(&mut self, start: u16, end: u16) -> BTreeMap<u16, String> {
        let GameBoy { cpu, bus } = self;
        cpu.disassemble(bus, start, end)
    }

    /// Copy the latched frame into an RGB24 buffer (3 bytes per pixel,
    /// row-major 160x144).
    pub fn video_frame(&self, buffer: &mut [u8]) {
        let pixels = (buffer.len() / 3).min(SCREEN_WIDTH * SCREEN_HEIGHT);
        for i in 0..pixels {
            let shade = self.bus.framebuffer[i];
            let (r, g, b) = SHADES[shade as usize].rgb();
            let out = i * 3;
            buffer[out] = r;
            buffer[out + 1] = g;
            buffer[out + 2] = b;
        }
    }

    /// Update joypad state from a frontend key event.
    ///
    /// - Z => A, X => B
    /// - A => Select, S => Start
    /// - Arrow keys => D-pad
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Right => self.bus.joypad_set_dpad_bit(0, pressed),
            Key::Left => self.bus.joypad_set_dpad_bit(1, pressed),
            Key::Up => self.bus.joypad_set_dpad_bit(2, pressed),
            Key::Down => self.bus.joypad_set_dpad_bit(3, pressed),
            Key::Z => self.bus.joypad_set_button_bit(0, pressed),
            Key::X => self.bus.joypad_set_button_bit(1, pressed),
            Key::A => self.bus.joypad_set_button_bit(2, pressed),
            Key::S => self.bus.joypad_set_button_bit(3, pressed),
            _ => {}
        }
    }
}
