use super::decode::OPCODES;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a single instruction (or service one interrupt) and return
    /// the number of T-cycles taken.
    ///
    /// Ordering within one step: interrupt check, fetch/decode/execute,
    /// bus advance by the instruction's cycle count, pending-IME
    /// promotion. IF is only observed at the interrupt-check boundary,
    /// never mid-instruction.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.locked {
            // Invalid opcode executed earlier; the CPU is dead until
            // power-off. Returning 0 cycles lets driver loops detect the
            // condition and stop.
            return 0;
        }

        if self.stopped {
            // STOP behaves like HALT with the divider frozen: any pending
            // interrupt resumes execution, otherwise the LCD keeps running
            // while DIV stands still.
            let ie = bus.read8(0xFFFF);
            let iflags = bus.read8(0xFF0F);
            if ie & iflags & 0x1F != 0 {
                self.stopped = false;
            } else {
                bus.tick_div_frozen(4);
                return 4;
            }
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            bus.tick(cycles);
            return cycles;
        }

        if self.halted {
            // In HALT the CPU effectively performs a NOP each step until
            // an interrupt becomes pending.
            bus.tick(4);
            return 4;
        }

        let opcode = self.fetch8(bus);
        let instr = &OPCODES[opcode as usize];
        let operand = self.stage(bus, instr.src);
        let extra = self.execute(bus, instr.op, operand);
        let cycles = instr.cycles + extra;

        bus.tick(cycles);
        self.apply_ime_delay();
        cycles
    }

    /// Advance exactly one T-cycle of emulation.
    ///
    /// If the current instruction still has unconsumed cycles, this only
    /// decrements the remaining count; otherwise the next instruction (or
    /// interrupt dispatch) runs in full and its remaining cost is spread
    /// over the following ticks. Hosts driving the emulator on a cycle
    /// budget pair this with [`Cpu::complete`].
    pub fn clock<B: Bus>(&mut self, bus: &mut B) {
        if self.cycles_remaining > 0 {
            self.cycles_remaining -= 1;
            return;
        }
        let cycles = self.step(bus);
        self.cycles_remaining = cycles.saturating_sub(1);
    }

    /// True iff the current instruction has consumed all its scheduled
    /// cycles.
    #[inline]
    pub fn complete(&self) -> bool {
        self.cycles_remaining == 0
    }
}
