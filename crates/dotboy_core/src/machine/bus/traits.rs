use crate::cpu::Bus;

use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    /// Advance peripherals by the cycle cost of one instruction: the
    /// timer first, then the PPU one T-cycle at a time.
    fn tick(&mut self, cycles: u32) {
        self.timer_advance(cycles);
        for _ in 0..cycles {
            self.cycle_video();
        }
    }

    /// STOP mode: the LCD keeps running while the system counter behind
    /// DIV/TIMA stands still.
    fn tick_div_frozen(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.cycle_video();
        }
    }
}
