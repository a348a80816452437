//! Opcode tables for the LR35902.
//!
//! Both the primary and the CB-prefixed instruction sets are described by
//! fixed arrays of 256 entries. An entry names the instruction, the tagged
//! operation to perform, the operand source that is staged before the
//! operation runs, and the base T-cycle cost (conditional instructions add
//! their branch-taken delta during execution). The executor dispatches on
//! the tags with exhaustive matches, so an unhandled combination fails to
//! compile rather than falling through at run time.

/// A staged operand, produced from a [`Src`] before the operation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

/// Writable byte destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Tgt8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    IndBC,
    IndDE,
    IndHL,
    /// (HL), incrementing HL after the access.
    IndHLInc,
    /// (HL), decrementing HL after the access.
    IndHLDec,
    /// Memory at an immediate 16-bit address.
    IndImm16,
    /// High RAM at 0xFF00 + C.
    HighC,
    /// High RAM at 0xFF00 + an immediate byte.
    HighImm8,
}

/// Writable word destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Tgt16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

/// Operand sources, the addressing-mode half of each table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Src {
    None,
    /// Byte at PC; PC += 1.
    Imm8,
    /// Little-endian word at PC; PC += 2.
    Imm16,
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    AF,
    BC,
    DE,
    HL,
    SP,
    IndBC,
    IndDE,
    IndHL,
    IndHLInc,
    IndHLDec,
    /// Byte at an immediate 16-bit address.
    IndImm16,
    /// Byte at 0xFF00 + C.
    HighC,
    /// Byte at 0xFF00 + an immediate byte.
    HighImm8,
    /// SP plus a signed immediate byte. Staging this source computes the
    /// sum and sets the flags the instruction pair that uses it shares:
    /// Z=0, N=0, H/C from the unsigned low byte.
    SpImm8,
}

/// Branch conditions for JP/JR/CALL/RET.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Cond {
    Always,
    NZ,
    Z,
    NC,
    C,
}

/// Primary-table operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: dispatch through the CB table.
    Prefix,
    /// One of the opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
    Illegal,
    Ld8(Tgt8),
    Ld16(Tgt16),
    /// LD (a16),SP.
    StSp,
    Push,
    Pop(Tgt16),
    Inc8(Tgt8),
    Dec8(Tgt8),
    Inc16(Tgt16),
    Dec16(Tgt16),
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
    AddHl,
    AddSp,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Rlca,
    Rla,
    Rrca,
    Rra,
    Jp(Cond),
    JpHl,
    Jr(Cond),
    Call(Cond),
    Ret(Cond),
    Reti,
    Rst(u8),
}

/// CB-table operations. BIT/RES/SET carry their bit index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

pub(super) struct Instr {
    pub mnemonic: &'static str,
    pub op: Op,
    pub src: Src,
    pub cycles: u32,
}

pub(super) struct CbInstr {
    pub mnemonic: &'static str,
    pub op: CbOp,
    pub target: Tgt8,
    pub cycles: u32,
}

const fn i(mnemonic: &'static str, op: Op, src: Src, cycles: u32) -> Instr {
    Instr {
        mnemonic,
        op,
        src,
        cycles,
    }
}

const fn cb(mnemonic: &'static str, op: CbOp, target: Tgt8, cycles: u32) -> CbInstr {
    CbInstr {
        mnemonic,
        op,
        target,
        cycles,
    }
}

/// The 256 primary opcodes. Cycle counts are the not-taken cost for
/// conditional instructions; the executor adds the taken delta.
#[rustfmt::skip]
pub(super) static OPCODES: [Instr; 256] = [
    // 0x00
    i("NOP",          Op::Nop,               Src::None,     4),
    i("LD BC,d16",    Op::Ld16(Tgt16::BC),   Src::Imm16,    12),
    i("LD (BC),A",    Op::Ld8(Tgt8::IndBC),  Src::A,        8),
    i("INC BC",       Op::Inc16(Tgt16::BC),  Src::BC,       8),
    i("INC B",        Op::Inc8(Tgt8::B),     Src::B,        4),
    i("DEC B",        Op::Dec8(Tgt8::B),     Src::B,        4),
    i("LD B,d8",      Op::Ld8(Tgt8::B),      Src::Imm8,     8),
    i("RLCA",         Op::Rlca,              Src::None,     4),
    i("LD (a16),SP",  Op::StSp,              Src::SP,       20),
    i("ADD HL,BC",    Op::AddHl,             Src::BC,       8),
    i("LD A,(BC)",    Op::Ld8(Tgt8::A),      Src::IndBC,    8),
    i("DEC BC",       Op::Dec16(Tgt16::BC),  Src::BC,       8),
    i("INC C",        Op::Inc8(Tgt8::C),     Src::C,        4),
    i("DEC C",        Op::Dec8(Tgt8::C),     Src::C,        4),
    i("LD C,d8",      Op::Ld8(Tgt8::C),      Src::Imm8,     8),
    i("RRCA",         Op::Rrca,              Src::None,     4),
    // 0x10
    i("STOP",         Op::Stop,              Src::None,     4),
    i("LD DE,d16",    Op::Ld16(Tgt16::DE),   Src::Imm16,    12),
    i("LD (DE),A",    Op::Ld8(Tgt8::IndDE),  Src::A,        8),
    i("INC DE",       Op::Inc16(Tgt16::DE),  Src::DE,       8),
    i("INC D",        Op::Inc8(Tgt8::D),     Src::D,        4),
    i("DEC D",        Op::Dec8(Tgt8::D),     Src::D,        4),
    i("LD D,d8",      Op::Ld8(Tgt8::D),      Src::Imm8,     8),
    i("RLA",          Op::Rla,               Src::None,     4),
    i("JR r8",        Op::Jr(Cond::Always),  Src::Imm8,     8),
    i("ADD HL,DE",    Op::AddHl,             Src::DE,       8),
    i("LD A,(DE)",    Op::Ld8(Tgt8::A),      Src::IndDE,    8),
    i("DEC DE",       Op::Dec16(Tgt16::DE),  Src::DE,       8),
    i("INC E",        Op::Inc8(Tgt8::E),     Src::E,        4),
    i("DEC E",        Op::Dec8(Tgt8::E),     Src::E,        4),
    i("LD E,d8",      Op::Ld8(Tgt8::E),      Src::Imm8,     8),
    i("RRA",          Op::Rra,               Src::None,     4),
    // 0x20
    i("JR NZ,r8",     Op::Jr(Cond::NZ),      Src::Imm8,     8),
    i("LD HL,d16",    Op::Ld16(Tgt16::HL),   Src::Imm16,    12),
    i("LD (HL+),A",   Op::Ld8(Tgt8::IndHLInc), Src::A,      8),
    i("INC HL",       Op::Inc16(Tgt16::HL),  Src::HL,       8),
    i("INC H",        Op::Inc8(Tgt8::H),     Src::H,        4),
    i("DEC H",        Op::Dec8(Tgt8::H),     Src::H,        4),
    i("LD H,d8",      Op::Ld8(Tgt8::H),      Src::Imm8,     8),
    i("DAA",          Op::Daa,               Src::None,     4),
    i("JR Z,r8",      Op::Jr(Cond::Z),       Src::Imm8,     8),
    i("ADD HL,HL",    Op::AddHl,             Src::HL,       8),
    i("LD A,(HL+)",   Op::Ld8(Tgt8::A),      Src::IndHLInc, 8),
    i("DEC HL",       Op::Dec16(Tgt16::HL),  Src::HL,       8),
    i("INC L",        Op::Inc8(Tgt8::L),     Src::L,        4),
    i("DEC L",        Op::Dec8(Tgt8::L),     Src::L,        4),
    i("LD L,d8",      Op::Ld8(Tgt8::L),      Src::Imm8,     8),
    i("CPL",          Op::Cpl,               Src::None,     4),
    // 0x30
    i("JR NC,r8",     Op::Jr(Cond::NC),      Src::Imm8,     8),
    i("LD SP,d16",    Op::Ld16(Tgt16::SP),   Src::Imm16,    12),
    i("LD (HL-),A",   Op::Ld8(Tgt8::IndHLDec), Src::A,      8),
    i("INC SP",       Op::Inc16(Tgt16::SP),  Src::SP,       8),
    i("INC (HL)",     Op::Inc8(Tgt8::IndHL), Src::IndHL,    12),
    i("DEC (HL)",     Op::Dec8(Tgt8::IndHL), Src::IndHL,    12),
    i("LD (HL),d8",   Op::Ld8(Tgt8::IndHL),  Src::Imm8,     12),
    i("SCF",          Op::Scf,               Src::None,     4),
    i("JR C,r8",      Op::Jr(Cond::C),       Src::Imm8,     8),
    i("ADD HL,SP",    Op::AddHl,             Src::SP,       8),
    i("LD A,(HL-)",   Op::Ld8(Tgt8::A),      Src::IndHLDec, 8),
    i("DEC SP",       Op::Dec16(Tgt16::SP),  Src::SP,       8),
    i("INC A",        Op::Inc8(Tgt8::A),     Src::A,        4),
    i("DEC A",        Op::Dec8(Tgt8::A),     Src::A,        4),
    i("LD A,d8",      Op::Ld8(Tgt8::A),      Src::Imm8,     8),
    i("CCF",          Op::Ccf,               Src::None,     4),
    // 0x40
    i("LD B,B",       Op::Ld8(Tgt8::B),      Src::B,        4),
    i("LD B,C",       Op::Ld8(Tgt8::B),      Src::C,        4),
    i("LD B,D",       Op::Ld8(Tgt8::B),      Src::D,        4),
    i("LD B,E",       Op::Ld8(Tgt8::B),      Src::E,        4),
    i("LD B,H",       Op::Ld8(Tgt8::B),      Src::H,        4),
    i("LD B,L",       Op::Ld8(Tgt8::B),      Src::L,        4),
    i("LD B,(HL)",    Op::Ld8(Tgt8::B),      Src::IndHL,    8),
    i("LD B,A",       Op::Ld8(Tgt8::B),      Src::A,        4),
    i("LD C,B",       Op::Ld8(Tgt8::C),      Src::B,        4),
    i("LD C,C",       Op::Ld8(Tgt8::C),      Src::C,        4),
    i("LD C,D",       Op::Ld8(Tgt8::C),      Src::D,        4),
    i("LD C,E",       Op::Ld8(Tgt8::C),      Src::E,        4),
    i("LD C,H",       Op::Ld8(Tgt8::C),      Src::H,        4),
    i("LD C,L",       Op::Ld8(Tgt8::C),      Src::L,        4),
    i("LD C,(HL)",    Op::Ld8(Tgt8::C),      Src::IndHL,    8),
    i("LD C,A",       Op::Ld8(Tgt8::C),      Src::A,        4),
    // 0x50
    i("LD D,B",       Op::Ld8(Tgt8::D),      Src::B,        4),
    i("LD D,C",       Op::Ld8(Tgt8::D),      Src::C,        4),
    i("LD D,D",       Op::Ld8(Tgt8::D),      Src::D,        4),
    i("LD D,E",       Op::Ld8(Tgt8::D),      Src::E,        4),
    i("LD D,H",       Op::Ld8(Tgt8::D),      Src::H,        4),
    i("LD D,L",       Op::Ld8(Tgt8::D),      Src::L,        4),
    i("LD D,(HL)",    Op::Ld8(Tgt8::D),      Src::IndHL,    8),
    i("LD D,A",       Op::Ld8(Tgt8::D),      Src::A,        4),
    i("LD E,B",       Op::Ld8(Tgt8::E),      Src::B,        4),
    i("LD E,C",       Op::Ld8(Tgt8::E),      Src::C,        4),
    i("LD E,D",       Op::Ld8(Tgt8::E),      Src::D,        4),
    i("LD E,E",       Op::Ld8(Tgt8::E),      Src::E,        4),
    i("LD E,H",       Op::Ld8(Tgt8::E),      Src::H,        4),
    i("LD E,L",       Op::Ld8(Tgt8::E),      Src::L,        4),
    i("LD E,(HL)",    Op::Ld8(Tgt8::E),      Src::IndHL,    8),
    i("LD E,A",       Op::Ld8(Tgt8::E),      Src::A,        4),
    // 0x60
    i("LD H,B",       Op::Ld8(Tgt8::H),      Src::B,        4),
    i("LD H,C",       Op::Ld8(Tgt8::H),      Src::C,        4),
    i("LD H,D",       Op::Ld8(Tgt8::H),      Src::D,        4),
    i("LD H,E",       Op::Ld8(Tgt8::H),      Src::E,        4),
    i("LD H,H",       Op::Ld8(Tgt8::H),      Src::H,        4),
    i("LD H,L",       Op::Ld8(Tgt8::H),      Src::L,        4),
    i("LD H,(HL)",    Op::Ld8(Tgt8::H),      Src::IndHL,    8),
    i("LD H,A",       Op::Ld8(Tgt8::H),      Src::A,        4),
    i("LD L,B",       Op::Ld8(Tgt8::L),      Src::B,        4),
    i("LD L,C",       Op::Ld8(Tgt8::L),      Src::C,        4),
    i("LD L,D",       Op::Ld8(Tgt8::L),      Src::D,        4),
    i("LD L,E",       Op::Ld8(Tgt8::L),      Src::E,        4),
    i("LD L,H",       Op::Ld8(Tgt8::L),      Src::H,        4),
    i("LD L,L",       Op::Ld8(Tgt8::L),      Src::L,        4),
    i("LD L,(HL)",    Op::Ld8(Tgt8::L),      Src::IndHL,    8),
    i("LD L,A",       Op::Ld8(Tgt8::L),      Src::A,        4),
    // 0x70
    i("LD (HL),B",    Op::Ld8(Tgt8::IndHL),  Src::B,        8),
    i("LD (HL),C",    Op::Ld8(Tgt8::IndHL),  Src::C,        8),
    i("LD (HL),D",    Op::Ld8(Tgt8::IndHL),  Src::D,        8),
    i("LD (HL),E",    Op::Ld8(Tgt8::IndHL),  Src::E,        8),
    i("LD (HL),H",    Op::Ld8(Tgt8::IndHL),  Src::H,        8),
    i("LD (HL),L",    Op::Ld8(Tgt8::IndHL),  Src::L,        8),
    i("HALT",         Op::Halt,              Src::None,     4),
    i("LD (HL),A",    Op::Ld8(Tgt8::IndHL),  Src::A,        8),
    i("LD A,B",       Op::Ld8(Tgt8::A),      Src::B,        4),
    i("LD A,C",       Op::Ld8(Tgt8::A),      Src::C,        4),
    i("LD A,D",       Op::Ld8(Tgt8::A),      Src::D,        4),
    i("LD A,E",       Op::Ld8(Tgt8::A),      Src::E,        4),
    i("LD A,H",       Op::Ld8(Tgt8::A),      Src::H,        4),
    i("LD A,L",       Op::Ld8(Tgt8::A),      Src::L,        4),
    i("LD A,(HL)",    Op::Ld8(Tgt8::A),      Src::IndHL,    8),
    i("LD A,A",       Op::Ld8(Tgt8::A),      Src::A,        4),
    // 0x80
    i("ADD A,B",      Op::Add,               Src::B,        4),
    i("ADD A,C",      Op::Add,               Src::C,        4),
    i("ADD A,D",      Op::Add,               Src::D,        4),
    i("ADD A,E",      Op::Add,               Src::E,        4),
    i("ADD A,H",      Op::Add,               Src::H,        4),
    i("ADD A,L",      Op::Add,               Src::L,        4),
    i("ADD A,(HL)",   Op::Add,               Src::IndHL,    8),
    i("ADD A,A",      Op::Add,               Src::A,        4),
    i("ADC A,B",      Op::Adc,               Src::B,        4),
    i("ADC A,C",      Op::Adc,               Src::C,        4),
    i("ADC A,D",      Op::Adc,               Src::D,        4),
    i("ADC A,E",      Op::Adc,               Src::E,        4),
    i("ADC A,H",      Op::Adc,               Src::H,        4),
    i("ADC A,L",      Op::Adc,               Src::L,        4),
    i("ADC A,(HL)",   Op::Adc,               Src::IndHL,    8),
    i("ADC A,A",      Op::Adc,               Src::A,        4),
    // 0x90
    i("SUB B",        Op::Sub,               Src::B,        4),
    i("SUB C",        Op::Sub,               Src::C,        4),
    i("SUB D",        Op::Sub,               Src::D,        4),
    i("SUB E",        Op::Sub,               Src::E,        4),
    i("SUB H",        Op::Sub,               Src::H,        4),
    i("SUB L",        Op::Sub,               Src::L,        4),
    i("SUB (HL)",     Op::Sub,               Src::IndHL,    8),
    i("SUB A",        Op::Sub,               Src::A,        4),
    i("SBC A,B",      Op::Sbc,               Src::B,        4),
    i("SBC A,C",      Op::Sbc,               Src::C,        4),
    i("SBC A,D",      Op::Sbc,               Src::D,        4),
    i("SBC A,E",      Op::Sbc,               Src::E,        4),
    i("SBC A,H",      Op::Sbc,               Src::H,        4),
    i("SBC A,L",      Op::Sbc,               Src::L,        4),
    i("SBC A,(HL)",   Op::Sbc,               Src::IndHL,    8),
    i("SBC A,A",      Op::Sbc,               Src::A,        4),
    // 0xA0
    i("AND B",        Op::And,               Src::B,        4),
    i("AND C",        Op::And,               Src::C,        4),
    i("AND D",        Op::And,               Src::D,        4),
    i("AND E",        Op::And,               Src::E,        4),
    i("AND H",        Op::And,               Src::H,        4),
    i("AND L",        Op::And,               Src::L,        4),
    i("AND (HL)",     Op::And,               Src::IndHL,    8),
    i("AND A",        Op::And,               Src::A,        4),
    i("XOR B",        Op::Xor,               Src::B,        4),
    i("XOR C",        Op::Xor,               Src::C,        4),
    i("XOR D",        Op::Xor,               Src::D,        4),
    i("XOR E",        Op::Xor,               Src::E,        4),
    i("XOR H",        Op::Xor,               Src::H,        4),
    i("XOR L",        Op::Xor,               Src::L,        4),
    i("XOR (HL)",     Op::Xor,               Src::IndHL,    8),
    i("XOR A",        Op::Xor,               Src::A,        4),
    // 0xB0
    i("OR B",         Op::Or,                Src::B,        4),
    i("OR C",         Op::Or,                Src::C,        4),
    i("OR D",         Op::Or,                Src::D,        4),
    i("OR E",         Op::Or,                Src::E,        4),
    i("OR H",         Op::Or,                Src::H,        4),
    i("OR L",         Op::Or,                Src::L,        4),
    i("OR (HL)",      Op::Or,                Src::IndHL,    8),
    i("OR A",         Op::Or,                Src::A,        4),
    i("CP B",         Op::Cp,                Src::B,        4),
    i("CP C",         Op::Cp,                Src::C,        4),
    i("CP D",         Op::Cp,                Src::D,        4),
    i("CP E",         Op::Cp,                Src::E,        4),
    i("CP H",         Op::Cp,                Src::H,        4),
    i("CP L",         Op::Cp,                Src::L,        4),
    i("CP (HL)",      Op::Cp,                Src::IndHL,    8),
    i("CP A",         Op::Cp,                Src::A,        4),
    // 0xC0
    i("RET NZ",       Op::Ret(Cond::NZ),     Src::None,     8),
    i("POP BC",       Op::Pop(Tgt16::BC),    Src::None,     12),
    i("JP NZ,a16",    Op::Jp(Cond::NZ),      Src::Imm16,    12),
    i("JP a16",       Op::Jp(Cond::Always),  Src::Imm16,    12),
    i("CALL NZ,a16",  Op::Call(Cond::NZ),    Src::Imm16,    12),
    i("PUSH BC",      Op::Push,              Src::BC,       16),
    i("ADD A,d8",     Op::Add,               Src::Imm8,     8),
    i("RST 00H",      Op::Rst(0x00),         Src::None,     16),
    i("RET Z",        Op::Ret(Cond::Z),      Src::None,     8),
    i("RET",          Op::Ret(Cond::Always), Src::None,     16),
    i("JP Z,a16",     Op::Jp(Cond::Z),       Src::Imm16,    12),
    i("PREFIX CB",    Op::Prefix,            Src::None,     0),
    i("CALL Z,a16",   Op::Call(Cond::Z),     Src::Imm16,    12),
    i("CALL a16",     Op::Call(Cond::Always), Src::Imm16,   12),
    i("ADC A,d8",     Op::Adc,               Src::Imm8,     8),
    i("RST 08H",      Op::Rst(0x08),         Src::None,     16),
    // 0xD0
    i("RET NC",       Op::Ret(Cond::NC),     Src::None,     8),
    i("POP DE",       Op::Pop(Tgt16::DE),    Src::None,     12),
    i("JP NC,a16",    Op::Jp(Cond::NC),      Src::Imm16,    12),
    i("??",           Op::Illegal,           Src::None,     0),
    i("CALL NC,a16",  Op::Call(Cond::NC),    Src::Imm16,    12),
    i("PUSH DE",      Op::Push,              Src::DE,       16),
    i("SUB d8",       Op::Sub,               Src::Imm8,     8),
    i("RST 10H",      Op::Rst(0x10),         Src::None,     16),
    i("RET C",        Op::Ret(Cond::C),      Src::None,     8),
    i("RETI",         Op::Reti,              Src::None,     16),
    i("JP C,a16",     Op::Jp(Cond::C),       Src::Imm16,    12),
    i("??",           Op::Illegal,           Src::None,     0),
    i("CALL C,a16",   Op::Call(Cond::C),     Src::Imm16,    12),
    i("??",           Op::Illegal,           Src::None,     0),
    i("SBC A,d8",     Op::Sbc,               Src::Imm8,     8),
    i("RST 18H",      Op::Rst(0x18),         Src::None,     16),
    // 0xE0
    i("LDH (a8),A",   Op::Ld8(Tgt8::HighImm8), Src::A,      12),
    i("POP HL",       Op::Pop(Tgt16::HL),    Src::None,     12),
    i("LD (C),A",     Op::Ld8(Tgt8::HighC),  Src::A,        8),
    i("??",           Op::Illegal,           Src::None,     0),
    i("??",           Op::Illegal,           Src::None,     0),
    i("PUSH HL",      Op::Push,              Src::HL,       16),
    i("AND d8",       Op::And,               Src::Imm8,     8),
    i("RST 20H",      Op::Rst(0x20),         Src::None,     16),
    i("ADD SP,r8",    Op::AddSp,             Src::SpImm8,   16),
    i("JP (HL)",      Op::JpHl,              Src::None,     4),
    i("LD (a16),A",   Op::Ld8(Tgt8::IndImm16), Src::A,      16),
    i("??",           Op::Illegal,           Src::None,     0),
    i("??",           Op::Illegal,           Src::None,     0),
    i("??",           Op::Illegal,           Src::None,     0),
    i("XOR d8",       Op::Xor,               Src::Imm8,     8),
    i("RST 28H",      Op::Rst(0x28),         Src::None,     16),
    // 0xF0
    i("LDH A,(a8)",   Op::Ld8(Tgt8::A),      Src::HighImm8, 12),
    i("POP AF",       Op::Pop(Tgt16::AF),    Src::None,     12),
    i("LD A,(C)",     Op::Ld8(Tgt8::A),      Src::HighC,    8),
    i("DI",           Op::Di,                Src::None,     4),
    i("??",           Op::Illegal,           Src::None,     0),
    i("PUSH AF",      Op::Push,              Src::AF,       16),
    i("OR d8",        Op::Or,                Src::Imm8,     8),
    i("RST 30H",      Op::Rst(0x30),         Src::None,     16),
    i("LD HL,SP+r8",  Op::Ld16(Tgt16::HL),   Src::SpImm8,   12),
    i("LD SP,HL",     Op::Ld16(Tgt16::SP),   Src::HL,       8),
    i("LD A,(a16)",   Op::Ld8(Tgt8::A),      Src::IndImm16, 16),
    i("EI",           Op::Ei,                Src::None,     4),
    i("??",           Op::Illegal,           Src::None,     0),
    i("??",           Op::Illegal,           Src::None,     0),
    i("CP d8",        Op::Cp,                Src::Imm8,     8),
    i("RST 38H",      Op::Rst(0x38),         Src::None,     16),
];

/// The 256 CB-prefixed opcodes. Cycle counts are totals including the
/// 0xCB prefix fetch.
#[rustfmt::skip]
pub(super) static CB_OPCODES: [CbInstr; 256] = [
    // 0x00
    cb("RLC B",       CbOp::Rlc,     Tgt8::B,     8),
    cb("RLC C",       CbOp::Rlc,     Tgt8::C,     8),
    cb("RLC D",       CbOp::Rlc,     Tgt8::D,     8),
    cb("RLC E",       CbOp::Rlc,     Tgt8::E,     8),
    cb("RLC H",       CbOp::Rlc,     Tgt8::H,     8),
    cb("RLC L",       CbOp::Rlc,     Tgt8::L,     8),
    cb("RLC (HL)",    CbOp::Rlc,     Tgt8::IndHL, 16),
    cb("RLC A",       CbOp::Rlc,     Tgt8::A,     8),
    cb("RRC B",       CbOp::Rrc,     Tgt8::B,     8),
    cb("RRC C",       CbOp::Rrc,     Tgt8::C,     8),
    cb("RRC D",       CbOp::Rrc,     Tgt8::D,     8),
    cb("RRC E",       CbOp::Rrc,     Tgt8::E,     8),
    cb("RRC H",       CbOp::Rrc,     Tgt8::H,     8),
    cb("RRC L",       CbOp::Rrc,     Tgt8::L,     8),
    cb("RRC (HL)",    CbOp::Rrc,     Tgt8::IndHL, 16),
    cb("RRC A",       CbOp::Rrc,     Tgt8::A,     8),
    // 0x10
    cb("RL B",        CbOp::Rl,      Tgt8::B,     8),
    cb("RL C",        CbOp::Rl,      Tgt8::C,     8),
    cb("RL D",        CbOp::Rl,      Tgt8::D,     8),
    cb("RL E",        CbOp::Rl,      Tgt8::E,     8),
    cb("RL H",        CbOp::Rl,      Tgt8::H,     8),
    cb("RL L",        CbOp::Rl,      Tgt8::L,     8),
    cb("RL (HL)",     CbOp::Rl,      Tgt8::IndHL, 16),
    cb("RL A",        CbOp::Rl,      Tgt8::A,     8),
    cb("RR B",        CbOp::Rr,      Tgt8::B,     8),
    cb("RR C",        CbOp::Rr,      Tgt8::C,     8),
    cb("RR D",        CbOp::Rr,      Tgt8::D,     8),
    cb("RR E",        CbOp::Rr,      Tgt8::E,     8),
    cb("RR H",        CbOp::Rr,      Tgt8::H,     8),
    cb("RR L",        CbOp::Rr,      Tgt8::L,     8),
    cb("RR (HL)",     CbOp::Rr,      Tgt8::IndHL, 16),
    cb("RR A",        CbOp::Rr,      Tgt8::A,     8),
    // 0x20
    cb("SLA B",       CbOp::Sla,     Tgt8::B,     8),
    cb("SLA C",       CbOp::Sla,     Tgt8::C,     8),
    cb("SLA D",       CbOp::Sla,     Tgt8::D,     8),
    cb("SLA E",       CbOp::Sla,     Tgt8::E,     8),
    cb("SLA H",       CbOp::Sla,     Tgt8::H,     8),
    cb("SLA L",       CbOp::Sla,     Tgt8::L,     8),
    cb("SLA (HL)",    CbOp::Sla,     Tgt8::IndHL, 16),
    cb("SLA A",       CbOp::Sla,     Tgt8::A,     8),
    cb("SRA B",       CbOp::Sra,     Tgt8::B,     8),
    cb("SRA C",       CbOp::Sra,     Tgt8::C,     8),
    cb("SRA D",       CbOp::Sra,     Tgt8::D,     8),
    cb("SRA E",       CbOp::Sra,     Tgt8::E,     8),
    cb("SRA H",       CbOp::Sra,     Tgt8::H,     8),
    cb("SRA L",       CbOp::Sra,     Tgt8::L,     8),
    cb("SRA (HL)",    CbOp::Sra,     Tgt8::IndHL, 16),
    cb("SRA A",       CbOp::Sra,     Tgt8::A,     8),
    // 0x30
    cb("SWAP B",      CbOp::Swap,    Tgt8::B,     8),
    cb("SWAP C",      CbOp::Swap,    Tgt8::C,     8),
    cb("SWAP D",      CbOp::Swap,    Tgt8::D,     8),
    cb("SWAP E",      CbOp::Swap,    Tgt8::E,     8),
    cb("SWAP H",      CbOp::Swap,    Tgt8::H,     8),
    cb("SWAP L",      CbOp::Swap,    Tgt8::L,     8),
    cb("SWAP (HL)",   CbOp::Swap,    Tgt8::IndHL, 16),
    cb("SWAP A",      CbOp::Swap,    Tgt8::A,     8),
    cb("SRL B",       CbOp::Srl,     Tgt8::B,     8),
    cb("SRL C",       CbOp::Srl,     Tgt8::C,     8),
    cb("SRL D",       CbOp::Srl,     Tgt8::D,     8),
    cb("SRL E",       CbOp::Srl,     Tgt8::E,     8),
    cb("SRL H",       CbOp::Srl,     Tgt8::H,     8),
    cb("SRL L",       CbOp::Srl,     Tgt8::L,     8),
    cb("SRL (HL)",    CbOp::Srl,     Tgt8::IndHL, 16),
    cb("SRL A",       CbOp::Srl,     Tgt8::A,     8),
    // 0x40
    cb("BIT 0,B",     CbOp::Bit(0),  Tgt8::B,     8),
    cb("BIT 0,C",     CbOp::Bit(0),  Tgt8::C,     8),
    cb("BIT 0,D",     CbOp::Bit(0),  Tgt8::D,     8),
    cb("BIT 0,E",     CbOp::Bit(0),  Tgt8::E,     8),
    cb("BIT 0,H",     CbOp::Bit(0),  Tgt8::H,     8),
    cb("BIT 0,L",     CbOp::Bit(0),  Tgt8::L,     8),
    cb("BIT 0,(HL)",  CbOp::Bit(0),  Tgt8::IndHL, 12),
    cb("BIT 0,A",     CbOp::Bit(0),  Tgt8::A,     8),
    cb("BIT 1,B",     CbOp::Bit(1),  Tgt8::B,     8),
    cb("BIT 1,C",     CbOp::Bit(1),  Tgt8::C,     8),
    cb("BIT 1,D",     CbOp::Bit(1),  Tgt8::D,     8),
    cb("BIT 1,E",     CbOp::Bit(1),  Tgt8::E,     8),
    cb("BIT 1,H",     CbOp::Bit(1),  Tgt8::H,     8),
    cb("BIT 1,L",     CbOp::Bit(1),  Tgt8::L,     8),
    cb("BIT 1,(HL)",  CbOp::Bit(1),  Tgt8::IndHL, 12),
    cb("BIT 1,A",     CbOp::Bit(1),  Tgt8::A,     8),
    // 0x50
    cb("BIT 2,B",     CbOp::Bit(2),  Tgt8::B,     8),
    cb("BIT 2,C",     CbOp::Bit(2),  Tgt8::C,     8),
    cb("BIT 2,D",     CbOp::Bit(2),  Tgt8::D,     8),
    cb("BIT 2,E",     CbOp::Bit(2),  Tgt8::E,     8),
    cb("BIT 2,H",     CbOp::Bit(2),  Tgt8::H,     8),
    cb("BIT 2,L",     CbOp::Bit(2),  Tgt8::L,     8),
    cb("BIT 2,(HL)",  CbOp::Bit(2),  Tgt8::IndHL, 12),
    cb("BIT 2,A",     CbOp::Bit(2),  Tgt8::A,     8),
    cb("BIT 3,B",     CbOp::Bit(3),  Tgt8::B,     8),
    cb("BIT 3,C",     CbOp::Bit(3),  Tgt8::C,     8),
    cb("BIT 3,D",     CbOp::Bit(3),  Tgt8::D,     8),
    cb("BIT 3,E",     CbOp::Bit(3),  Tgt8::E,     8),
    cb("BIT 3,H",     CbOp::Bit(3),  Tgt8::H,     8),
    cb("BIT 3,L",     CbOp::Bit(3),  Tgt8::L,     8),
    cb("BIT 3,(HL)",  CbOp::Bit(3),  Tgt8::IndHL, 12),
    cb("BIT 3,A",     CbOp::Bit(3),  Tgt8::A,     8),
    // 0x60
    cb("BIT 4,B",     CbOp::Bit(4),  Tgt8::B,     8),
    cb("BIT 4,C",     CbOp::Bit(4),  Tgt8::C,     8),
    cb("BIT 4,D",     CbOp::Bit(4),  Tgt8::D,     8),
    cb("BIT 4,E",     CbOp::Bit(4),  Tgt8::E,     8),
    cb("BIT 4,H",     CbOp::Bit(4),  Tgt8::H,     8),
    cb("BIT 4,L",     CbOp::Bit(4),  Tgt8::L,     8),
    cb("BIT 4,(HL)",  CbOp::Bit(4),  Tgt8::IndHL, 12),
    cb("BIT 4,A",     CbOp::Bit(4),  Tgt8::A,     8),
    cb("BIT 5,B",     CbOp::Bit(5),  Tgt8::B,     8),
    cb("BIT 5,C",     CbOp::Bit(5),  Tgt8::C,     8),
    cb("BIT 5,D",     CbOp::Bit(5),  Tgt8::D,     8),
    cb("BIT 5,E",     CbOp::Bit(5),  Tgt8::E,     8),
    cb("BIT 5,H",     CbOp::Bit(5),  Tgt8::H,     8),
    cb("BIT 5,L",     CbOp::Bit(5),  Tgt8::L,     8),
    cb("BIT 5,(HL)",  CbOp::Bit(5),  Tgt8::IndHL, 12),
    cb("BIT 5,A",     CbOp::Bit(5),  Tgt8::A,     8),
    // 0x70
    cb("BIT 6,B",     CbOp::Bit(6),  Tgt8::B,     8),
    cb("BIT 6,C",     CbOp::Bit(6),  Tgt8::C,     8),
    cb("BIT 6,D",     CbOp::Bit(6),  Tgt8::D,     8),
    cb("BIT 6,E",     CbOp::Bit(6),  Tgt8::E,     8),
    cb("BIT 6,H",     CbOp::Bit(6),  Tgt8::H,     8),
    cb("BIT 6,L",     CbOp::Bit(6),  Tgt8::L,     8),
    cb("BIT 6,(HL)",  CbOp::Bit(6),  Tgt8::IndHL, 12),
    cb("BIT 6,A",     CbOp::Bit(6),  Tgt8::A,     8),
    cb("BIT 7,B",     CbOp::Bit(7),  Tgt8::B,     8),
    cb("BIT 7,C",     CbOp::Bit(7),  Tgt8::C,     8),
    cb("BIT 7,D",     CbOp::Bit(7),  Tgt8::D,     8),
    cb("BIT 7,E",     CbOp::Bit(7),  Tgt8::E,     8),
    cb("BIT 7,H",     CbOp::Bit(7),  Tgt8::H,     8),
    cb("BIT 7,L",     CbOp::Bit(7),  Tgt8::L,     8),
    cb("BIT 7,(HL)",  CbOp::Bit(7),  Tgt8::IndHL, 12),
    cb("BIT 7,A",     CbOp::Bit(7),  Tgt8::A,     8),
    // 0x80
    cb("RES 0,B",     CbOp::Res(0),  Tgt8::B,     8),
    cb("RES 0,C",     CbOp::Res(0),  Tgt8::C,     8),
    cb("RES 0,D",     CbOp::Res(0),  Tgt8::D,     8),
    cb("RES 0,E",     CbOp::Res(0),  Tgt8::E,     8),
    cb("RES 0,H",     CbOp::Res(0),  Tgt8::H,     8),
    cb("RES 0,L",     CbOp::Res(0),  Tgt8::L,     8),
    cb("RES 0,(HL)",  CbOp::Res(0),  Tgt8::IndHL, 16),
    cb("RES 0,A",     CbOp::Res(0),  Tgt8::A,     8),
    cb("RES 1,B",     CbOp::Res(1),  Tgt8::B,     8),
    cb("RES 1,C",     CbOp::Res(1),  Tgt8::C,     8),
    cb("RES 1,D",     CbOp::Res(1),  Tgt8::D,     8),
    cb("RES 1,E",     CbOp::Res(1),  Tgt8::E,     8),
    cb("RES 1,H",     CbOp::Res(1),  Tgt8::H,     8),
    cb("RES 1,L",     CbOp::Res(1),  Tgt8::L,     8),
    cb("RES 1,(HL)",  CbOp::Res(1),  Tgt8::IndHL, 16),
    cb("RES 1,A",     CbOp::Res(1),  Tgt8::A,     8),
    // 0x90
    cb("RES 2,B",     CbOp::Res(2),  Tgt8::B,     8),
    cb("RES 2,C",     CbOp::Res(2),  Tgt8::C,     8),
    cb("RES 2,D",     CbOp::Res(2),  Tgt8::D,     8),
    cb("RES 2,E",     CbOp::Res(2),  Tgt8::E,     8),
    cb("RES 2,H",     CbOp::Res(2),  Tgt8::H,     8),
    cb("RES 2,L",     CbOp::Res(2),  Tgt8::L,     8),
    cb("RES 2,(HL)",  CbOp::Res(2),  Tgt8::IndHL, 16),
    cb("RES 2,A",     CbOp::Res(2),  Tgt8::A,     8),
    cb("RES 3,B",     CbOp::Res(3),  Tgt8::B,     8),
    cb("RES 3,C",     CbOp::Res(3),  Tgt8::C,     8),
    cb("RES 3,D",     CbOp::Res(3),  Tgt8::D,     8),
    cb("RES 3,E",     CbOp::Res(3),  Tgt8::E,     8),
    cb("RES 3,H",     CbOp::Res(3),  Tgt8::H,     8),
    cb("RES 3,L",     CbOp::Res(3),  Tgt8::L,     8),
    cb("RES 3,(HL)",  CbOp::Res(3),  Tgt8::IndHL, 16),
    cb("RES 3,A",     CbOp::Res(3),  Tgt8::A,     8),
    // 0xA0
    cb("RES 4,B",     CbOp::Res(4),  Tgt8::B,     8),
    cb("RES 4,C",     CbOp::Res(4),  Tgt8::C,     8),
    cb("RES 4,D",     CbOp::Res(4),  Tgt8::D,     8),
    cb("RES 4,E",     CbOp::Res(4),  Tgt8::E,     8),
    cb("RES 4,H",     CbOp::Res(4),  Tgt8::H,     8),
    cb("RES 4,L",     CbOp::Res(4),  Tgt8::L,     8),
    cb("RES 4,(HL)",  CbOp::Res(4),  Tgt8::IndHL, 16),
    cb("RES 4,A",     CbOp::Res(4),  Tgt8::A,     8),
    cb("RES 5,B",     CbOp::Res(5),  Tgt8::B,     8),
    cb("RES 5,C",     CbOp::Res(5),  Tgt8::C,     8),
    cb("RES 5,D",     CbOp::Res(5),  Tgt8::D,     8),
    cb("RES 5,E",     CbOp::Res(5),  Tgt8::E,     8),
    cb("RES 5,H",     CbOp::Res(5),  Tgt8::H,     8),
    cb("RES 5,L",     CbOp::Res(5),  Tgt8::L,     8),
    cb("RES 5,(HL)",  CbOp::Res(5),  Tgt8::IndHL, 16),
    cb("RES 5,A",     CbOp::Res(5),  Tgt8::A,     8),
    // 0xB0
    cb("RES 6,B",     CbOp::Res(6),  Tgt8::B,     8),
    cb("RES 6,C",     CbOp::Res(6),  Tgt8::C,     8),
    cb("RES 6,D",     CbOp::Res(6),  Tgt8::D,     8),
    cb("RES 6,E",     CbOp::Res(6),  Tgt8::E,     8),
    cb("RES 6,H",     CbOp::Res(6),  Tgt8::H,     8),
    cb("RES 6,L",     CbOp::Res(6),  Tgt8::L,     8),
    cb("RES 6,(HL)",  CbOp::Res(6),  Tgt8::IndHL, 16),
    cb("RES 6,A",     CbOp::Res(6),  Tgt8::A,     8),
    cb("RES 7,B",     CbOp::Res(7),  Tgt8::B,     8),
    cb("RES 7,C",     CbOp::Res(7),  Tgt8::C,     8),
    cb("RES 7,D",     CbOp::Res(7),  Tgt8::D,     8),
    cb("RES 7,E",     CbOp::Res(7),  Tgt8::E,     8),
    cb("RES 7,H",     CbOp::Res(7),  Tgt8::H,     8),
    cb("RES 7,L",     CbOp::Res(7),  Tgt8::L,     8),
    cb("RES 7,(HL)",  CbOp::Res(7),  Tgt8::IndHL, 16),
    cb("RES 7,A",     CbOp::Res(7),  Tgt8::A,     8),
    // 0xC0
    cb("SET 0,B",     CbOp::Set(0),  Tgt8::B,     8),
    cb("SET 0,C",     CbOp::Set(0),  Tgt8::C,     8),
    cb("SET 0,D",     CbOp::Set(0),  Tgt8::D,     8),
    cb("SET 0,E",     CbOp::Set(0),  Tgt8::E,     8),
    cb("SET 0,H",     CbOp::Set(0),  Tgt8::H,     8),
    cb("SET 0,L",     CbOp::Set(0),  Tgt8::L,     8),
    cb("SET 0,(HL)",  CbOp::Set(0),  Tgt8::IndHL, 16),
    cb("SET 0,A",     CbOp::Set(0),  Tgt8::A,     8),
    cb("SET 1,B",     CbOp::Set(1),  Tgt8::B,     8),
    cb("SET 1,C",     CbOp::Set(1),  Tgt8::C,     8),
    cb("SET 1,D",     CbOp::Set(1),  Tgt8::D,     8),
    cb("SET 1,E",     CbOp::Set(1),  Tgt8::E,     8),
    cb("SET 1,H",     CbOp::Set(1),  Tgt8::H,     8),
    cb("SET 1,L",     CbOp::Set(1),  Tgt8::L,     8),
    cb("SET 1,(HL)",  CbOp::Set(1),  Tgt8::IndHL, 16),
    cb("SET 1,A",     CbOp::Set(1),  Tgt8::A,     8),
    // 0xD0
    cb("SET 2,B",     CbOp::Set(2),  Tgt8::B,     8),
    cb("SET 2,C",     CbOp::Set(2),  Tgt8::C,     8),
    cb("SET 2,D",     CbOp::Set(2),  Tgt8::D,     8),
    cb("SET 2,E",     CbOp::Set(2),  Tgt8::E,     8),
    cb("SET 2,H",     CbOp::Set(2),  Tgt8::H,     8),
    cb("SET 2,L",     CbOp::Set(2),  Tgt8::L,     8),
    cb("SET 2,(HL)",  CbOp::Set(2),  Tgt8::IndHL, 16),
    cb("SET 2,A",     CbOp::Set(2),  Tgt8::A,     8),
    cb("SET 3,B",     CbOp::Set(3),  Tgt8::B,     8),
    cb("SET 3,C",     CbOp::Set(3),  Tgt8::C,     8),
    cb("SET 3,D",     CbOp::Set(3),  Tgt8::D,     8),
    cb("SET 3,E",     CbOp::Set(3),  Tgt8::E,     8),
    cb("SET 3,H",     CbOp::Set(3),  Tgt8::H,     8),
    cb("SET 3,L",     CbOp::Set(3),  Tgt8::L,     8),
    cb("SET 3,(HL)",  CbOp::Set(3),  Tgt8::IndHL, 16),
    cb("SET 3,A",     CbOp::Set(3),  Tgt8::A,     8),
    // 0xE0
    cb("SET 4,B",     CbOp::Set(4),  Tgt8::B,     8),
    cb("SET 4,C",     CbOp::Set(4),  Tgt8::C,     8),
    cb("SET 4,D",     CbOp::Set(4),  Tgt8::D,     8),
    cb("SET 4,E",     CbOp::Set(4),  Tgt8::E,     8),
    cb("SET 4,H",     CbOp::Set(4),  Tgt8::H,     8),
    cb("SET 4,L",     CbOp::Set(4),  Tgt8::L,     8),
    cb("SET 4,(HL)",  CbOp::Set(4),  Tgt8::IndHL, 16),
    cb("SET 4,A",     CbOp::Set(4),  Tgt8::A,     8),
    cb("SET 5,B",     CbOp::Set(5),  Tgt8::B,     8),
    cb("SET 5,C",     CbOp::Set(5),  Tgt8::C,     8),
    cb("SET 5,D",     CbOp::Set(5),  Tgt8::D,     8),
    cb("SET 5,E",     CbOp::Set(5),  Tgt8::E,     8),
    cb("SET 5,H",     CbOp::Set(5),  Tgt8::H,     8),
    cb("SET 5,L",     CbOp::Set(5),  Tgt8::L,     8),
    cb("SET 5,(HL)",  CbOp::Set(5),  Tgt8::IndHL, 16),
    cb("SET 5,A",     CbOp::Set(5),  Tgt8::A,     8),
    // 0xF0
    cb("SET 6,B",     CbOp::Set(6),  Tgt8::B,     8),
    cb("SET 6,C",     CbOp::Set(6),  Tgt8::C,     8),
    cb("SET 6,D",     CbOp::Set(6),  Tgt8::D,     8),
    cb("SET 6,E",     CbOp::Set(6),  Tgt8::E,     8),
    cb("SET 6,H",     CbOp::Set(6),  Tgt8::H,     8),
    cb("SET 6,L",     CbOp::Set(6),  Tgt8::L,     8),
    cb("SET 6,(HL)",  CbOp::Set(6),  Tgt8::IndHL, 16),
    cb("SET 6,A",     CbOp::Set(6),  Tgt8::A,     8),
    cb("SET 7,B",     CbOp::Set(7),  Tgt8::B,     8),
    cb("SET 7,C",     CbOp::Set(7),  Tgt8::C,     8),
    cb("SET 7,D",     CbOp::Set(7),  Tgt8::D,     8),
    cb("SET 7,E",     CbOp::Set(7),  Tgt8::E,     8),
    cb("SET 7,H",     CbOp::Set(7),  Tgt8::H,     8),
    cb("SET 7,L",     CbOp::Set(7),  Tgt8::L,     8),
    cb("SET 7,(HL)",  CbOp::Set(7),  Tgt8::IndHL, 16),
    cb("SET 7,A",     CbOp::Set(7),  Tgt8::A,     8),
];
