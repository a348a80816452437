use std::collections::BTreeMap;

use super::decode::{Instr, Op, Src, Tgt8, CB_OPCODES, OPCODES};
use super::{Bus, Cpu};

/// Total encoded length of an instruction in bytes, derived from its
/// table entry: the opcode itself, any bytes the operand source stages,
/// and any bytes the operation consumes on its own (store addresses,
/// STOP's padding byte).
fn instr_len(instr: &Instr) -> u16 {
    let mut len = 1u16;
    len += match instr.src {
        Src::Imm8 | Src::HighImm8 | Src::SpImm8 => 1,
        Src::Imm16 | Src::IndImm16 => 2,
        _ => 0,
    };
    len += match instr.op {
        Op::Ld8(Tgt8::IndImm16) | Op::StSp => 2,
        Op::Ld8(Tgt8::HighImm8) => 1,
        Op::Stop => 1,
        Op::Prefix => 1,
        _ => 0,
    };
    len
}

impl Cpu {
    /// Produce a listing of `[start, end]` as a map from address to
    /// formatted mnemonic.
    ///
    /// Immediate operands are substituted into the mnemonic templates;
    /// relative jumps are shown with their resolved target address.
    /// Purely a debugging aid; reads go through the normal bus path.
    pub fn disassemble<B: Bus>(&self, bus: &mut B, start: u16, end: u16) -> BTreeMap<u16, String> {
        let mut listing = BTreeMap::new();
        let mut addr = start as u32;

        while addr <= end as u32 {
            let at = addr as u16;
            let opcode = bus.read8(at);
            let instr = &OPCODES[opcode as usize];

            let len = instr_len(instr);
            let text = if matches!(instr.op, Op::Prefix) {
                let cb_opcode = bus.read8(at.wrapping_add(1));
                CB_OPCODES[cb_opcode as usize].mnemonic.to_string()
            } else {
                format_instr(bus, at, instr)
            };

            listing.insert(at, text);
            addr += len as u32;
        }

        listing
    }
}

fn format_instr<B: Bus>(bus: &mut B, addr: u16, instr: &Instr) -> String {
    let mnemonic = instr.mnemonic;

    if mnemonic.contains("d16") || mnemonic.contains("a16") {
        let lo = bus.read8(addr.wrapping_add(1)) as u16;
        let hi = bus.read8(addr.wrapping_add(2)) as u16;
        let word = (hi << 8) | lo;
        let value = format!("${word:04X}");
        return mnemonic.replace("d16", &value).replace("a16", &value);
    }

    if mnemonic.contains("d8") || mnemonic.contains("a8") {
        let byte = bus.read8(addr.wrapping_add(1));
        let value = format!("${byte:02X}");
        return mnemonic.replace("d8", &value).replace("a8", &value);
    }

    if mnemonic.contains("r8") {
        let offset = bus.read8(addr.wrapping_add(1)) as i8;
        return match instr.op {
            // Relative jumps read best with the resolved target.
            Op::Jr(_) => {
                let target = (addr as i32 + 2 + offset as i32) as u16;
                mnemonic.replace("r8", &format!("${target:04X}"))
            }
            _ => mnemonic.replace("r8", &format!("{offset:+}")),
        };
    }

    mnemonic.to_string()
}
