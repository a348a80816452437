use super::*;
use once_cell::sync::Lazy;

struct TestBus {
    memory: [u8; 0x10000],
    ticked: u64,
    frozen_ticked: u64,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            ticked: 0,
            frozen_ticked: 0,
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn tick(&mut self, cycles: u32) {
        self.ticked += cycles as u64;
    }

    fn tick_div_frozen(&mut self, cycles: u32) {
        self.frozen_ticked += cycles as u64;
    }
}

/// CPU at PC=0 with a flat bus containing `program` at address 0.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut cpu = Cpu::new();
    cpu.regs.pc = 0x0000;
    let mut bus = TestBus::default();
    bus.memory[..program.len()].copy_from_slice(program);
    (cpu, bus)
}

fn flags(cpu: &Cpu) -> (bool, bool, bool, bool) {
    (
        cpu.get_flag(Flag::Z),
        cpu.get_flag(Flag::N),
        cpu.get_flag(Flag::H),
        cpu.get_flag(Flag::C),
    )
}

/// Shared BCD exercise: pairs of (augend, addend) covering the DAA
/// correction cases, with their expected adjusted sums.
static BCD_CASES: Lazy<Vec<(u8, u8, u8, bool)>> = Lazy::new(|| {
    vec![
        // (a, b, daa result, carry after daa)
        (0x45, 0x38, 0x83, false),
        (0x09, 0x01, 0x10, false),
        (0x90, 0x10, 0x00, true),
        (0x99, 0x01, 0x00, true),
        (0x00, 0x00, 0x00, false),
    ]
});

#[test]
fn boot_register_state() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, 0xB0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);

    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn reset_restores_boot_state() {
    let mut cpu = Cpu::new();
    cpu.regs.pc = 0x1234;
    cpu.regs.set_af(0x0000);
    cpu.ime = true;
    cpu.halted = true;

    cpu.reset();

    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
    assert!(cpu.complete());
}

#[test]
fn af_low_nibble_is_masked() {
    let mut regs = Registers::default();
    regs.set_af(0x12FF);
    assert_eq!(regs.af(), 0x12F0);
    regs.f = 0xFF & 0xF0;
    assert_eq!(regs.af() & 0x000F, 0);
}

#[test]
fn ld_register_and_immediate() {
    // LD B,$42 ; LD A,B ; LD (HL),A ; LD C,(HL)
    let (mut cpu, mut bus) = setup(&[0x06, 0x42, 0x78, 0x77, 0x4E]);
    cpu.regs.set_hl(0xC000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b, 0x42);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x42);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.c, 0x42);
}

#[test]
fn ld_hl_inc_dec_adjust_hl() {
    // LD (HL+),A ; LD (HL-),A ; LD A,(HL+) ; LD A,(HL-)
    let (mut cpu, mut bus) = setup(&[0x22, 0x32, 0x2A, 0x3A]);
    cpu.regs.a = 0x5A;
    cpu.regs.set_hl(0xC000);

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC000], 0x5A);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC001], 0x5A);
    assert_eq!(cpu.regs.hl(), 0xC000);

    bus.memory[0xC000] = 0x77;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x77);
    assert_eq!(cpu.regs.hl(), 0xC001);

    bus.memory[0xC001] = 0x88;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x88);
    assert_eq!(cpu.regs.hl(), 0xC000);
}

#[test]
fn ld_a16_and_high_ram_forms() {
    // LD ($C123),A ; LD A,($C123) ; LDH ($80),A ; LDH A,($80) ;
    // LD (C),A ; LD A,(C)
    let (mut cpu, mut bus) = setup(&[
        0xEA, 0x23, 0xC1, // LD (a16),A
        0xFA, 0x23, 0xC1, // LD A,(a16)
        0xE0, 0x80, // LDH (a8),A
        0xF0, 0x80, // LDH A,(a8)
        0xE2, // LD (C),A
        0xF2, // LD A,(C)
    ]);
    cpu.regs.a = 0x99;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC123], 0x99);

    bus.memory[0xC123] = 0x3C;
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.a, 0x3C);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x3C);

    bus.memory[0xFF80] = 0x11;
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.a, 0x11);

    cpu.regs.c = 0x81;
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xFF81], 0x11);

    bus.memory[0xFF81] = 0x22;
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x22);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    // LD ($C000),SP
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(bus.memory[0xC000], 0xF8);
    assert_eq!(bus.memory[0xC001], 0xFF);
}

#[test]
fn add_sets_zero_half_and_carry() {
    // ADD A,B with A=0x3A, B=0xC6 -> 0x00, all of Z/H/C set.
    let (mut cpu, mut bus) = setup(&[0x80]);
    cpu.regs.a = 0x3A;
    cpu.regs.b = 0xC6;

    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, true, true));
    assert_eq!(cpu.regs.f & 0x0F, 0);
}

#[test]
fn adc_includes_carry_in() {
    // ADC A,$0F with A=0xF0 and C set -> 0x00 with carry out.
    let (mut cpu, mut bus) = setup(&[0xCE, 0x0F]);
    cpu.regs.a = 0xF0;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, true, true));
}

#[test]
fn sub_and_cp_borrow_semantics() {
    // SUB $20 with A=0x10 borrows; CP leaves A untouched.
    let (mut cpu, mut bus) = setup(&[0xD6, 0x20, 0xFE, 0xF0]);
    cpu.regs.a = 0x10;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xF0);
    assert_eq!(flags(&cpu), (false, true, false, true));

    cpu.step(&mut bus);
    // CP 0xF0 against A=0xF0: equal, so Z and N only.
    assert_eq!(cpu.regs.a, 0xF0);
    assert_eq!(flags(&cpu), (true, true, false, false));
}

#[test]
fn sbc_includes_borrow_in() {
    // SBC A,$00 with A=0x01 and C set -> 0x00.
    let (mut cpu, mut bus) = setup(&[0xDE, 0x00]);
    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, true, false, false));
}

#[test]
fn add_then_sub_round_trips_a() {
    // ADD A,B ; SUB B returns A to its original value, flags from SUB.
    let (mut cpu, mut bus) = setup(&[0x80, 0x90]);
    cpu.regs.a = 0x42;
    cpu.regs.b = 0x17;

    cpu.step(&mut bus);
    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn and_or_xor_flag_contracts() {
    // AND $F0 ; OR $00 ; XOR A
    let (mut cpu, mut bus) = setup(&[0xE6, 0xF0, 0xF6, 0x00, 0xAF]);
    cpu.regs.a = 0x0F;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, true, false));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, false, false));

    cpu.regs.a = 0x5A;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, false, false));
}

#[test]
fn inc_half_carry_leaves_carry_alone() {
    // INC A with A=0x0F: half-carry sets, C stays as it was.
    let (mut cpu, mut bus) = setup(&[0x3C]);
    cpu.regs.a = 0x0F;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);

    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(flags(&cpu), (false, false, true, true));
}

#[test]
fn dec_flags() {
    // DEC B with B=0x10 borrows from bit 4; DEC C with C=0x01 zeroes.
    let (mut cpu, mut bus) = setup(&[0x05, 0x0D]);
    cpu.regs.b = 0x10;
    cpu.regs.c = 0x01;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x0F);
    assert_eq!(flags(&cpu), (false, true, true, true));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.c, 0x00);
    assert_eq!(flags(&cpu), (true, true, false, true));
}

#[test]
fn inc_dec_hl_indirect() {
    // INC (HL) ; DEC (HL)
    let (mut cpu, mut bus) = setup(&[0x34, 0x35]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert!(cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0xFF);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn add_hl_leaves_zero_flag_alone() {
    // ADD HL,BC with HL=0x0FFF, BC=0x0001: bit-11 carry, Z untouched.
    let (mut cpu, mut bus) = setup(&[0x09, 0x09]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(flags(&cpu), (true, false, true, false));

    // ADD HL,BC with HL=0xFFFF: bit-15 carry.
    cpu.regs.set_hl(0xFFFF);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::Z)); // still from before
}

#[test]
fn add_sp_signed_flags_from_low_byte() {
    // ADD SP,$08 with SP=0xFFF8: H and C from the unsigned low byte.
    let (mut cpu, mut bus) = setup(&[0xE8, 0x08]);
    cpu.regs.sp = 0xFFF8;
    cpu.set_flag(Flag::Z, true);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(flags(&cpu), (false, false, true, true));
}

#[test]
fn ld_hl_sp_plus_negative_offset() {
    // LD HL,SP-1 with SP=0x0000 wraps without setting H/C.
    let (mut cpu, mut bus) = setup(&[0xF8, 0xFF]);
    cpu.regs.sp = 0x0000;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFF);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(flags(&cpu), (false, false, false, false));
}

#[test]
fn ld_sp_hl() {
    let (mut cpu, mut bus) = setup(&[0xF9]);
    cpu.regs.set_hl(0xD000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xD000);
}

#[test]
fn daa_adjusts_bcd_sums() {
    for &(a, b, expected, carry) in BCD_CASES.iter() {
        // LD B,b ; ADD A,B ; DAA
        let (mut cpu, mut bus) = setup(&[0x06, b, 0x80, 0x27]);
        cpu.regs.a = a;

        cpu.step(&mut bus);
        cpu.step(&mut bus);
        cpu.step(&mut bus);

        assert_eq!(
            cpu.regs.a, expected,
            "DAA after {a:#04X} + {b:#04X}: got {:#04X}",
            cpu.regs.a
        );
        assert_eq!(cpu.get_flag(Flag::C), carry);
        assert!(!cpu.get_flag(Flag::H));
        assert_eq!(cpu.get_flag(Flag::Z), expected == 0);
    }
}

#[test]
fn daa_after_subtraction() {
    // SUB B with A=0x45, B=0x38 -> 0x0D (H set); DAA corrects to 0x07.
    let (mut cpu, mut bus) = setup(&[0x90, 0x27]);
    cpu.regs.a = 0x45;
    cpu.regs.b = 0x38;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x0D);
    assert!(cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x07);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn cpl_is_an_involution() {
    let (mut cpu, mut bus) = setup(&[0x2F, 0x2F]);
    cpu.regs.a = 0x35;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x35);
}

#[test]
fn scf_and_ccf() {
    let (mut cpu, mut bus) = setup(&[0x37, 0x3F, 0x3F]);
    cpu.clear_flags();
    cpu.set_flag(Flag::N, true);
    cpu.set_flag(Flag::H, true);

    cpu.step(&mut bus);
    assert_eq!(flags(&cpu), (false, false, false, true));

    cpu.step(&mut bus);
    assert!(!cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn rotate_a_forms_always_clear_z() {
    // RLCA with A=0x85 -> 0x0B, carry out of bit 7.
    let (mut cpu, mut bus) = setup(&[0x07]);
    cpu.regs.a = 0x85;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x0B);
    assert_eq!(flags(&cpu), (false, false, false, true));

    // RRA with A=0x01, C clear: result 0x00 but Z stays clear.
    let (mut cpu, mut bus) = setup(&[0x1F]);
    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, false);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (false, false, false, true));

    // RLA shifts the old carry into bit 0.
    let (mut cpu, mut bus) = setup(&[0x17]);
    cpu.regs.a = 0x80;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flag::C));

    // RRCA wraps bit 0 to bit 7.
    let (mut cpu, mut bus) = setup(&[0x0F]);
    cpu.regs.a = 0x01;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn cb_rotates_and_shifts() {
    // CB RLC B with B=0: result 0, Z set (unlike RLCA).
    let (mut cpu, mut bus) = setup(&[0xCB, 0x00]);
    cpu.regs.b = 0x00;
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.get_flag(Flag::Z));

    // CB SRL A with A=0x01 -> 0, Z and C set.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x3F]);
    cpu.regs.a = 0x01;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(flags(&cpu), (true, false, false, true));

    // CB SRA keeps the sign bit.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x2F]);
    cpu.regs.a = 0x81;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xC0);
    assert!(cpu.get_flag(Flag::C));

    // CB SLA on (HL) costs 16 cycles.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x26]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xC0;
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x80);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn swap_is_an_involution() {
    // SWAP A twice restores the value; Z reflects a zero operand.
    let (mut cpu, mut bus) = setup(&[0xCB, 0x37, 0xCB, 0x37]);
    cpu.regs.a = 0xF1;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x1F);
    assert!(!cpu.get_flag(Flag::Z));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xF1);

    let (mut cpu, mut bus) = setup(&[0xCB, 0x37]);
    cpu.regs.a = 0x00;
    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn bit_set_res_laws() {
    // SET 3,B ; BIT 3,B ; RES 3,B ; BIT 3,B
    let (mut cpu, mut bus) = setup(&[0xCB, 0xD8, 0xCB, 0x58, 0xCB, 0x98, 0xCB, 0x58]);
    cpu.regs.b = 0x00;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x08);

    cpu.step(&mut bus);
    // BIT: Z clear (bit is set), N=0, H=1, C preserved.
    assert_eq!(flags(&cpu), (false, false, true, true));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x00);

    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn bit_on_hl_indirect_costs_12() {
    let (mut cpu, mut bus) = setup(&[0xCB, 0x46]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x01;

    assert_eq!(cpu.step(&mut bus), 12);
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn jr_conditional_timing() {
    // JR Z,+4 at 0x0200 with Z set: PC=0x0206, 12 cycles.
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[0x0200] = 0x28;
    bus.memory[0x0201] = 0x04;
    cpu.regs.pc = 0x0200;
    cpu.set_flag(Flag::Z, true);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0206);

    // Same with Z clear: fall through, 8 cycles.
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[0x0200] = 0x28;
    bus.memory[0x0201] = 0x04;
    cpu.regs.pc = 0x0200;
    cpu.set_flag(Flag::Z, false);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0202);
}

#[test]
fn jr_backwards() {
    // JR -2 loops onto itself.
    let (mut cpu, mut bus) = setup(&[0x18, 0xFE]);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn jp_timing_and_target() {
    // JP $8000 unconditional: 16 cycles.
    let (mut cpu, mut bus) = setup(&[0xC3, 0x00, 0x80]);
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x8000);

    // JP NC,$8000 with C set: not taken, 12 cycles.
    let (mut cpu, mut bus) = setup(&[0xD2, 0x00, 0x80]);
    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn jp_hl_is_4_cycles() {
    let (mut cpu, mut bus) = setup(&[0xE9]);
    cpu.regs.set_hl(0x4000);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn call_ret_round_trip() {
    // CALL $1234 at 0x0000; RET at 0x1234.
    let (mut cpu, mut bus) = setup(&[0xCD, 0x34, 0x12]);
    bus.memory[0x1234] = 0xC9;
    cpu.regs.sp = 0xFFFE;

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // Return address 0x0003, little-endian on the stack.
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0x00);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_call_and_ret_cycles() {
    // CALL NZ with Z set: not taken, 12 cycles.
    let (mut cpu, mut bus) = setup(&[0xC4, 0x34, 0x12]);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0003);

    // RET NZ with Z clear: taken, 20 cycles.
    let (mut cpu, mut bus) = setup(&[0xC0]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x00;
    bus.memory[0xFFFD] = 0x30;
    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x3000);

    // RET C with C clear: not taken, 8 cycles.
    let (mut cpu, mut bus) = setup(&[0xD8]);
    cpu.set_flag(Flag::C, false);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn rst_pushes_and_jumps() {
    let (mut cpu, mut bus) = setup(&[0xDF]); // RST 18H
    cpu.regs.sp = 0xFFFE;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0018);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn push_pop_round_trips_registers() {
    // PUSH BC ; POP DE
    let (mut cpu, mut bus) = setup(&[0xC5, 0xD1]);
    cpu.regs.sp = 0xFFFE;
    cpu.regs.set_bc(0xBEEF);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.de(), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn push_pop_af_masks_low_nibble() {
    // POP AF from a word with a dirty low nibble, then PUSH AF.
    let (mut cpu, mut bus) = setup(&[0xF1, 0xF5]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0xFF; // would-be F
    bus.memory[0xFFFD] = 0x12; // A

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xFFFC], 0xF0);
    assert_eq!(bus.memory[0xFFFD], 0x12);
}

#[test]
fn inc16_dec16_no_flags() {
    let (mut cpu, mut bus) = setup(&[0x03, 0x0B, 0x33]);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.sp = 0x0000;
    let f_before = cpu.regs.f;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.bc(), 0x0000);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.bc(), 0xFFFF);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, 0x0001);
    assert_eq!(cpu.regs.f, f_before);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    // EI ; NOP ; NOP with a VBlank interrupt already pending.
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    cpu.step(&mut bus); // EI
    assert!(!cpu.ime);

    cpu.step(&mut bus); // NOP executes; interrupt not yet serviceable
    assert_eq!(cpu.regs.pc, 0x0002);
    assert!(cpu.ime);

    // Now the dispatch happens instead of the second NOP.
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[0xFF0F] & 0x01, 0);
}

#[test]
fn di_disables_immediately() {
    // DI ; NOP with interrupt pending and IME previously on.
    let (mut cpu, mut bus) = setup(&[0xF3, 0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    cpu.step(&mut bus); // DI runs (interrupt check precedes it only if IME set -- force order)
    // IME was true entering DI, so the dispatch happens before DI executes.
    assert_eq!(cpu.regs.pc, 0x0040);

    // With no pending interrupt, DI simply clears IME.
    let (mut cpu, mut bus) = setup(&[0xF3, 0x00]);
    cpu.ime = true;
    cpu.step(&mut bus);
    assert!(!cpu.ime);
}

#[test]
fn interrupt_dispatch_effects() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    cpu.regs.sp = 0xFFFE;
    cpu.regs.pc = 0x0150;
    bus.memory[0xFFFF] = 0x04; // Timer enabled
    bus.memory[0xFF0F] = 0x04; // Timer pending

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 20);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[0xFF0F] & 0x04, 0);
    // Old PC pushed.
    assert_eq!(bus.memory[0xFFFC], 0x50);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    // The bus was advanced by exactly the dispatch cost.
    assert_eq!(bus.ticked, 20);
}

#[test]
fn interrupt_priority_lowest_bit_wins() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1F;
    bus.memory[0xFF0F] = 0x06; // STAT (bit 1) and Timer (bit 2)

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0048); // STAT vector
    assert_eq!(bus.memory[0xFF0F], 0x04); // Timer still pending
}

#[test]
fn masked_interrupt_is_not_serviced() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x04; // pending Timer, but only VBlank enabled

    assert_eq!(cpu.step(&mut bus), 4); // plain NOP
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn reti_restores_pc_and_ime() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x03;
    bus.memory[0xFFFD] = 0x00;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert!(cpu.ime);
}

#[test]
fn halt_waits_and_wakes_without_service_when_ime_clear() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C]); // HALT ; INC A
    cpu.regs.a = 0x00;

    cpu.step(&mut bus);
    assert!(cpu.halted);

    // Halted steps are 4-cycle NOPs.
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.regs.a, 0x00);

    // A pending interrupt with IME clear wakes the CPU; the handler is
    // not invoked and the next instruction runs.
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;
    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn halt_with_ime_services_pending_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x76]);
    cpu.ime = true;

    cpu.step(&mut bus);
    assert!(cpu.halted);

    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 20);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn halt_bug_refetches_next_opcode() {
    // HALT with IME clear and an interrupt already pending: the CPU does
    // not halt, and the following opcode executes twice.
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C, 0x00]); // HALT ; INC A
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;
    cpu.regs.a = 0x00;

    cpu.step(&mut bus); // HALT (bugged)
    assert!(!cpu.halted);

    cpu.step(&mut bus); // INC A without PC advance
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.step(&mut bus); // INC A again
    assert_eq!(cpu.regs.a, 0x02);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn stop_freezes_div_until_interrupt() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00, 0x00]); // STOP ; NOP
    cpu.step(&mut bus);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0002);

    // Stopped steps advance the bus with the divider frozen.
    let frozen_before = bus.frozen_ticked;
    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.is_stopped());
    assert_eq!(bus.frozen_ticked, frozen_before + 4);

    // A pending interrupt ends STOP; execution continues at the NOP.
    bus.memory[0xFFFF] = 0x10;
    bus.memory[0xFF0F] = 0x10;
    cpu.step(&mut bus);
    assert!(!cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn illegal_opcode_locks_cpu() {
    let (mut cpu, mut bus) = setup(&[0xD3, 0x00]);

    assert_eq!(cpu.step(&mut bus), 0);
    assert!(cpu.is_locked());

    // Locked CPU makes no further progress.
    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.reset();
    assert!(!cpu.is_locked());
}

#[test]
fn clock_paces_instructions_cycle_by_cycle() {
    let (mut cpu, mut bus) = setup(&[0x00, 0x00]); // NOP ; NOP
    assert!(cpu.complete());

    // First tick executes the NOP and leaves 3 cycles outstanding.
    cpu.clock(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert!(!cpu.complete());

    cpu.clock(&mut bus);
    cpu.clock(&mut bus);
    assert!(!cpu.complete());
    cpu.clock(&mut bus);
    assert!(cpu.complete());
    assert_eq!(cpu.regs.pc, 0x0001);

    // The next tick starts the second NOP.
    cpu.clock(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn bus_advances_by_exact_instruction_cost() {
    // LD (HL),d8 is 12 cycles; CALL taken is 24.
    let (mut cpu, mut bus) = setup(&[0x36, 0x55, 0xCD, 0x00, 0x10]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.sp = 0xFFFE;

    cpu.step(&mut bus);
    assert_eq!(bus.ticked, 12);
    cpu.step(&mut bus);
    assert_eq!(bus.ticked, 12 + 24);
}

#[test]
fn disassemble_formats_operands() {
    let (cpu, mut bus) = setup(&[
        0x00, // NOP
        0x3E, 0x42, // LD A,$42
        0x20, 0xFB, // JR NZ,$0000
        0xCB, 0x37, // SWAP A
        0xC3, 0x00, 0x80, // JP $8000
    ]);

    let listing = cpu.disassemble(&mut bus, 0x0000, 0x0009);

    assert_eq!(listing[&0x0000], "NOP");
    assert_eq!(listing[&0x0001], "LD A,$42");
    assert_eq!(listing[&0x0003], "JR NZ,$0000");
    assert_eq!(listing[&0x0005], "SWAP A");
    assert_eq!(listing[&0x0007], "JP $8000");
    assert_eq!(listing.len(), 5);
}

#[test]
fn disassemble_covers_multi_byte_tail() {
    // A range ending mid-instruction still lists the final opcode.
    let (cpu, mut bus) = setup(&[0xEA, 0x00, 0xC0, 0xF0, 0x44]);
    let listing = cpu.disassemble(&mut bus, 0x0000, 0x0004);
    assert_eq!(listing[&0x0000], "LD ($C000),A");
    assert_eq!(listing[&0x0003], "LDH A,($44)");
}
