use super::{Bus, Cpu};

impl Cpu {
    /// Service a pending maskable interrupt, if any.
    ///
    /// Checked once per `step`, before the opcode fetch:
    /// - `pending = IE & IF & 0x1F`; nothing pending means normal fetch.
    /// - A pending interrupt with IME clear while halted only wakes the
    ///   CPU (no service).
    /// - With IME set, the lowest set bit wins: its IF bit is cleared,
    ///   IME drops, PC is pushed and redirected to `0x40 + 8*k`, and the
    ///   dispatch is charged 20 T-cycles.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, `None` otherwise.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let ie = bus.read8(0xFFFF);
        let iflags = bus.read8(0xFF0F);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        if self.halted && !self.ime {
            // Wake without servicing; part of the HALT bug behaviour.
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        // Lowest-numbered pending interrupt wins
        // (VBlank > LCD STAT > Timer > Serial > Joypad).
        let index = pending.trailing_zeros() as u8;

        self.ime = false;
        self.halted = false;
        bus.write8(0xFF0F, iflags & !(1 << index));

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        let vector = 0x0040 + (index as u16) * 8;
        self.regs.pc = vector;

        log::debug!(
            "CPU interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IE=0x{:02X}",
            index,
            vector,
            pc,
            self.regs.sp,
            ie,
        );

        Some(20)
    }

    /// Apply the delayed IME change requested by EI.
    ///
    /// Runs at the end of every instruction. EI arms `ime_enable_pending`
    /// during execution; the end of the EI instruction promotes it to
    /// `ime_enable_delay`, and the end of the following instruction sets
    /// IME. The interrupt check of the instruction after EI therefore
    /// still sees IME clear, as hardware does.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
