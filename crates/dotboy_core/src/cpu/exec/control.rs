use super::super::decode::Cond;
use super::super::{Bus, Cpu, Flag};

impl Cpu {
    /// Evaluate a branch condition against the current flags.
    #[inline]
    pub(in crate::cpu) fn check_cond(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::NZ => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::NC => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }

    /// JP cc,a16. The target address is already staged; a taken jump
    /// costs 4 extra T-cycles.
    pub(super) fn exec_jp(&mut self, cond: Cond, addr: u16) -> u32 {
        if self.check_cond(cond) {
            self.regs.pc = addr;
            4
        } else {
            0
        }
    }

    /// JR cc,r8. The displacement is signed and relative to the address
    /// following the operand; a taken jump costs 4 extra T-cycles.
    pub(super) fn exec_jr(&mut self, cond: Cond, offset: u8) -> u32 {
        if self.check_cond(cond) {
            // Sign-extend the displacement and add modulo 2^16; PC
            // arithmetic wraps on hardware.
            self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as u16);
            4
        } else {
            0
        }
    }

    /// CALL cc,a16: push the address of the next instruction, then jump.
    /// A taken call costs 12 extra T-cycles.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Cond, addr: u16) -> u32 {
        if self.check_cond(cond) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            12
        } else {
            0
        }
    }

    /// RET / RET cc. The unconditional form's 16 cycles are entirely in
    /// the table; a taken conditional return adds 12 to its 8-cycle base.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Cond) -> u32 {
        match cond {
            Cond::Always => {
                let addr = self.pop_u16(bus);
                self.regs.pc = addr;
                0
            }
            _ if self.check_cond(cond) => {
                let addr = self.pop_u16(bus);
                self.regs.pc = addr;
                12
            }
            _ => 0,
        }
    }

    /// RETI: return and enable IME immediately (no EI-style delay).
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.pop_u16(bus);
        self.regs.pc = addr;
        self.ime = true;
        0
    }

    /// RST n: push PC and jump to one of the eight fixed vectors.
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) -> u32 {
        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector as u16;
        0
    }
}
