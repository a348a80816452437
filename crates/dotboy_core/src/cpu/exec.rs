mod control;
mod system;

use super::decode::{Op, Operand};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Apply a decoded operation to its staged operand and return any
    /// extra T-cycles (the branch-taken delta for conditional control
    /// flow, or the CB table cost for prefixed instructions).
    ///
    /// The match is exhaustive over [`Op`], so a table entry without an
    /// implementation fails to compile.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, op: Op, operand: Operand) -> u32 {
        match op {
            Op::Nop => 0,
            Op::Stop => self.exec_stop(bus),
            Op::Halt => self.exec_halt(bus),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),
            Op::Prefix => self.exec_cb(bus),
            Op::Illegal => self.exec_illegal(),

            Op::Ld8(target) => {
                let value = operand.byte();
                self.write_tgt8(bus, target, value);
                0
            }
            Op::Ld16(target) => {
                self.write_tgt16(target, operand.word());
                0
            }
            Op::StSp => {
                // LD (a16),SP: store the staged SP little-endian at the
                // immediate address.
                let sp = operand.word();
                let addr = self.fetch16(bus);
                bus.write8(addr, sp as u8);
                bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
                0
            }
            Op::Push => {
                let value = operand.word();
                self.push_u16(bus, value);
                0
            }
            Op::Pop(target) => {
                let value = self.pop_u16(bus);
                self.write_tgt16(target, value);
                0
            }

            Op::Inc8(target) => {
                let result = self.alu_inc8(operand.byte());
                self.write_tgt8(bus, target, result);
                0
            }
            Op::Dec8(target) => {
                let result = self.alu_dec8(operand.byte());
                self.write_tgt8(bus, target, result);
                0
            }
            // 16-bit INC/DEC do not touch flags.
            Op::Inc16(target) => {
                self.write_tgt16(target, operand.word().wrapping_add(1));
                0
            }
            Op::Dec16(target) => {
                self.write_tgt16(target, operand.word().wrapping_sub(1));
                0
            }

            Op::Add => {
                self.alu_add(operand.byte(), false);
                0
            }
            Op::Adc => {
                self.alu_add(operand.byte(), true);
                0
            }
            Op::Sub => {
                self.alu_sub(operand.byte(), false);
                0
            }
            Op::Sbc => {
                self.alu_sub(operand.byte(), true);
                0
            }
            Op::And => {
                self.alu_and(operand.byte());
                0
            }
            Op::Xor => {
                self.alu_xor(operand.byte());
                0
            }
            Op::Or => {
                self.alu_or(operand.byte());
                0
            }
            Op::Cp => {
                self.alu_cp(operand.byte());
                0
            }
            Op::AddHl => {
                self.alu_add16_hl(operand.word());
                0
            }
            // The staged SP+r8 already carries the flag updates.
            Op::AddSp => {
                self.regs.sp = operand.word();
                0
            }

            Op::Daa => {
                self.alu_daa();
                0
            }
            Op::Cpl => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flag::N, true);
                self.set_flag(Flag::H, true);
                0
            }
            Op::Scf => {
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
                self.set_flag(Flag::C, true);
                0
            }
            Op::Ccf => {
                let carry = self.get_flag(Flag::C);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, false);
                self.set_flag(Flag::C, !carry);
                0
            }

            // The unprefixed rotate-A forms always clear Z.
            Op::Rlca => {
                self.regs.a = self.alu_rlc(self.regs.a, false);
                0
            }
            Op::Rla => {
                self.regs.a = self.alu_rl(self.regs.a, false);
                0
            }
            Op::Rrca => {
                self.regs.a = self.alu_rrc(self.regs.a, false);
                0
            }
            Op::Rra => {
                self.regs.a = self.alu_rr(self.regs.a, false);
                0
            }

            Op::Jp(cond) => self.exec_jp(cond, operand.word()),
            Op::JpHl => {
                self.regs.pc = self.regs.hl();
                0
            }
            Op::Jr(cond) => self.exec_jr(cond, operand.byte()),
            Op::Call(cond) => self.exec_call(bus, cond, operand.word()),
            Op::Ret(cond) => self.exec_ret(bus, cond),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector),
        }
    }
}
