use super::super::{Bus, Cpu};

impl Cpu {
    /// HALT: suspend instruction advance until `(IE & IF) != 0`.
    ///
    /// When IME is clear and an interrupt is already pending, the CPU
    /// does not halt at all; instead the next opcode is fetched twice
    /// (the HALT bug), which we model with a one-shot latch consumed by
    /// `fetch8`.
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let ie = bus.read8(0xFFFF);
        let iflags = bus.read8(0xFF0F);
        if !self.ime && (ie & iflags & 0x1F) != 0 {
            self.halt_bug = true;
        } else {
            self.halted = true;
        }
        0
    }

    /// STOP: enter the deep low-power state. The divider/timer freezes
    /// (the step loop advances the bus through `tick_div_frozen`) until
    /// a pending interrupt resumes execution.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is officially a 2-byte instruction; the second byte is
        // usually 0 and ignored. Fetch and discard the padding byte so
        // that PC matches hardware.
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        0
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        0
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        0
    }

    /// One of the opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC,
    /// FD). On hardware these hard-lock the CPU until power-off; we log
    /// the offending address and mark the core locked so `step` returns
    /// 0 cycles from now on.
    pub(super) fn exec_illegal(&mut self) -> u32 {
        if !self.locked {
            let opcode_addr = self.regs.pc.wrapping_sub(1);
            log::error!(
                "CPU locked: invalid opcode at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                pc = opcode_addr,
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
        }
        self.locked = true;
        0
    }
}
