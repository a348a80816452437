use super::decode::{CbOp, CB_OPCODES};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, rotates).
    ///
    /// Returns the full cost of the prefixed instruction; the 0xCB table
    /// entry itself contributes 0 base cycles.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let opcode = self.fetch8(bus);
        let instr = &CB_OPCODES[opcode as usize];
        let target = instr.target;

        match instr.op {
            CbOp::Rlc => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_rlc(value, true);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Rrc => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_rrc(value, true);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Rl => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_rl(value, true);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Rr => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_rr(value, true);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Sla => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_sla(value);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Sra => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_sra(value);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Swap => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_swap(value);
                self.write_tgt8(bus, target, result);
            }
            CbOp::Srl => {
                let value = self.read_tgt8(bus, target);
                let result = self.alu_srl(value);
                self.write_tgt8(bus, target, result);
            }
            // BIT b,r: Z from the complement of the tested bit, H set,
            // N cleared, C untouched.
            CbOp::Bit(bit) => {
                let value = self.read_tgt8(bus, target);
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            // RES/SET touch no flags.
            CbOp::Res(bit) => {
                let value = self.read_tgt8(bus, target);
                self.write_tgt8(bus, target, value & !(1 << bit));
            }
            CbOp::Set(bit) => {
                let value = self.read_tgt8(bus, target);
                self.write_tgt8(bus, target, value | (1 << bit));
            }
        }

        instr.cycles
    }
}
