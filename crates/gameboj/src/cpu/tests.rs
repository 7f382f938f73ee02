use super::*;
use crate::address_map::{REG_IE, REG_IF};
use crate::error::CpuError;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl TestBus {
    /// Bus with `program` at the cartridge entry point.
    fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::default();
        bus.load(0x0100, program);
        bus
    }

    fn load(&mut self, address: u16, bytes: &[u8]) {
        let start = address as usize;
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl AddressSpace for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

fn setup(program: &[u8]) -> (Cpu, TestBus) {
    (Cpu::post_boot(), TestBus::with_program(program))
}

/// Runs the engine at its next active cycle and returns the cycles booked.
fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u64 {
    let Schedule::ActiveAt(cycle) = cpu.schedule() else {
        panic!("CPU is halted");
    };
    cpu.advance(cycle, bus).expect("instruction failed");
    match cpu.schedule() {
        Schedule::ActiveAt(next) => next - cycle,
        Schedule::Idle => 0,
    }
}

fn enable_interrupts(cpu: &mut Cpu, enabled: Interrupts) {
    Component::write(cpu, REG_IE, enabled.bits());
}

#[test]
fn post_boot_state_matches_dmg() {
    let cpu = Cpu::post_boot();
    assert_eq!(cpu.regs().af(), 0x01B0);
    assert_eq!(cpu.regs().bc(), 0x0013);
    assert_eq!(cpu.regs().de(), 0x00D8);
    assert_eq!(cpu.regs().hl(), 0x014D);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cpu.pc(), 0x0100);
    assert!(!cpu.ime());

    let cpu = Cpu::new();
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.regs().af(), 0x0000);
}

#[test]
fn reset_returns_to_power_on() {
    let (mut cpu, mut bus) = setup(&[0x3E, 0x42]);
    step(&mut cpu, &mut bus);
    Component::write(&mut cpu, 0xFF90, 0x12);
    cpu.reset();
    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.regs().get(Reg::A), 0);
    assert_eq!(Component::read(&cpu, 0xFF90), Some(0));
    assert_eq!(cpu.schedule(), Schedule::ActiveAt(0));
}

#[test]
fn busy_cycles_are_no_ops() {
    // LD BC,0x1234 ; NOP
    let (mut cpu, mut bus) = setup(&[0x01, 0x34, 0x12, 0x00]);
    cpu.advance(0, &mut bus).unwrap();
    assert_eq!(cpu.regs().bc(), 0x1234);
    assert_eq!(cpu.schedule(), Schedule::ActiveAt(3));

    cpu.advance(1, &mut bus).unwrap();
    cpu.advance(2, &mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0103);

    cpu.advance(3, &mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0104);
    assert_eq!(cpu.schedule(), Schedule::ActiveAt(4));
}

#[test]
fn conditional_branches_pay_extra_only_when_taken() {
    // JR NZ,+5 (not taken, Z is set after boot) ; JR Z,-4 (taken)
    let (mut cpu, mut bus) = setup(&[0x20, 0x05, 0x28, 0xFC]);
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.pc(), 0x0102);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0100);
}

#[test]
fn conditional_call_and_return_costs() {
    // CALL NC,0x0200 (C is set: not taken) ; CALL C,0x0200
    let (mut cpu, mut bus) = setup(&[0xD4, 0x00, 0x02, 0xDC, 0x00, 0x02]);
    // RET NC (not taken) ; RET C
    bus.load(0x0200, &[0xD0, 0xD8]);

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(step(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.pc(), 0x0200);
    assert_eq!(cpu.sp(), 0xFFFC);

    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.pc(), 0x0201);
    assert_eq!(step(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.pc(), 0x0106);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn call_ret_and_rst_use_high_ram_stack() {
    // CALL 0x0200
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02, 0xFF]);
    bus.load(0x0200, &[0xC9]);

    assert_eq!(step(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.pc(), 0x0200);
    assert_eq!(Component::read(&cpu, 0xFFFC), Some(0x03));
    assert_eq!(Component::read(&cpu, 0xFFFD), Some(0x01));

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc(), 0x0103);

    // RST 38
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc(), 0x0038);
    assert_eq!(Component::read(&cpu, 0xFFFC), Some(0x04));
}

#[test]
fn invalid_opcode_is_fatal() {
    let (mut cpu, mut bus) = setup(&[0xD3]);
    let err = cpu.advance(0, &mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuError::InvalidOpcode {
            encoding: 0xD3,
            pc: 0x0100
        }
    );
    assert_eq!(cpu.pc(), 0x0100);
}

#[test]
fn stop_is_unsupported() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00]);
    let err = cpu.advance(0, &mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuError::Unsupported {
            mnemonic: "STOP",
            pc: 0x0100
        }
    );
}

#[test]
fn interrupts_are_serviced_by_priority() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.set_sp(0xD000);
    cpu.set_ime(true);
    enable_interrupts(&mut cpu, Interrupts::all());
    cpu.request_interrupt(Interrupt::Joypad);
    cpu.request_interrupt(Interrupt::Timer);
    cpu.request_interrupt(Interrupt::VBlank);

    assert_eq!(step(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.pc(), 0x0040);
    assert!(!cpu.ime());
    assert_eq!(cpu.interrupt_flags(), Interrupts::TIMER | Interrupts::JOYPAD);
    assert_eq!(cpu.sp(), 0xCFFE);
    assert_eq!(bus.memory[0xCFFE], 0x00);
    assert_eq!(bus.memory[0xCFFF], 0x01);

    cpu.set_ime(true);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.pc(), 0x0050);
    assert_eq!(cpu.interrupt_flags(), Interrupts::JOYPAD);
}

#[test]
fn disabled_interrupts_are_not_serviced() {
    let (mut cpu, mut bus) = setup(&[0x00, 0x00]);
    enable_interrupts(&mut cpu, Interrupts::TIMER);
    cpu.request_interrupt(Interrupt::Timer);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.pc(), 0x0101);

    cpu.set_ime(true);
    enable_interrupts(&mut cpu, Interrupts::VBLANK);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.pc(), 0x0102);
    assert_eq!(cpu.interrupt_flags(), Interrupts::TIMER);
}

#[test]
fn requests_are_idempotent() {
    let mut cpu = Cpu::new();
    cpu.request_interrupt(Interrupt::Serial);
    cpu.request_interrupt(Interrupt::Serial);
    assert_eq!(cpu.interrupt_flags(), Interrupts::SERIAL);
    assert_eq!(Component::read(&cpu, REG_IF), Some(0x08));
}

#[test]
fn halt_waits_for_an_enabled_request() {
    // HALT ; NOP
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    assert_eq!(step(&mut cpu, &mut bus), 0);
    assert!(cpu.is_halted());
    assert_eq!(cpu.pc(), 0x0101);

    for cycle in 1..6 {
        cpu.advance(cycle, &mut bus).unwrap();
    }
    assert!(cpu.is_halted());

    // Requested but not enabled: still asleep.
    cpu.request_interrupt(Interrupt::Timer);
    cpu.advance(6, &mut bus).unwrap();
    assert!(cpu.is_halted());

    // Enabled with IME off: wakes and resumes after HALT.
    enable_interrupts(&mut cpu, Interrupts::TIMER);
    cpu.advance(7, &mut bus).unwrap();
    assert!(!cpu.is_halted());
    assert_eq!(cpu.pc(), 0x0102);
    assert_eq!(cpu.schedule(), Schedule::ActiveAt(8));
    assert_eq!(cpu.interrupt_flags(), Interrupts::TIMER);
}

#[test]
fn halt_with_ime_enters_the_handler() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);
    cpu.set_sp(0xD000);
    cpu.set_ime(true);
    enable_interrupts(&mut cpu, Interrupts::SERIAL);
    step(&mut cpu, &mut bus);
    assert!(cpu.is_halted());

    cpu.request_interrupt(Interrupt::Serial);
    cpu.advance(40, &mut bus).unwrap();
    assert_eq!(cpu.pc(), 0x0058);
    assert_eq!(cpu.schedule(), Schedule::ActiveAt(45));
    assert_eq!(bus.memory[0xCFFE], 0x01);
    assert_eq!(bus.memory[0xCFFF], 0x01);
}

#[test]
fn ei_di_and_reti_change_ime_immediately() {
    // EI ; DI ; RETI
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0xD9]);
    cpu.set_sp(0xD000);
    bus.load(0xD000, &[0x34, 0x12]);

    step(&mut cpu, &mut bus);
    assert!(cpu.ime());
    step(&mut cpu, &mut bus);
    assert!(!cpu.ime());
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.ime());
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xD002);
}

#[test]
fn own_surface_masks_interrupt_registers() {
    let mut cpu = Cpu::new();
    Component::write(&mut cpu, REG_IE, 0xFF);
    Component::write(&mut cpu, REG_IF, 0xE4);
    assert_eq!(Component::read(&cpu, REG_IE), Some(0x1F));
    assert_eq!(Component::read(&cpu, REG_IF), Some(0x04));
    assert_eq!(cpu.interrupt_flags(), Interrupts::TIMER);

    Component::write(&mut cpu, 0xFF80, 0xAA);
    Component::write(&mut cpu, 0xFFFE, 0xBB);
    assert_eq!(Component::read(&cpu, 0xFF80), Some(0xAA));
    assert_eq!(Component::read(&cpu, 0xFFFE), Some(0xBB));
    assert_eq!(Component::read(&cpu, 0xFF7F), None);
    assert_eq!(Component::read(&cpu, 0xC000), None);
}

#[test]
fn ldh_reaches_the_cpu_registers() {
    // LD A,0x04 ; LDH (0x0F),A ; LDH (0x80),A ; LDH A,(0xFF)
    let (mut cpu, mut bus) = setup(&[0x3E, 0x04, 0xE0, 0x0F, 0xE0, 0x80, 0xF0, 0xFF]);
    enable_interrupts(&mut cpu, Interrupts::VBLANK | Interrupts::SERIAL);
    for _ in 0..4 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.interrupt_flags(), Interrupts::TIMER);
    assert_eq!(Component::read(&cpu, 0xFF80), Some(0x04));
    assert_eq!(cpu.regs().get(Reg::A), 0x09);
}

#[test]
fn loads_and_stores() {
    // LD HL,0xC000 ; LD A,0x42 ; LD (HL+),A ; LD (HL-),A ; LD B,(HL) ;
    // LD (0xC100),SP ; LD A,(0xC101) ; LD D,A ; LD SP,HL
    let (mut cpu, mut bus) = setup(&[
        0x21, 0x00, 0xC0, 0x3E, 0x42, 0x22, 0x32, 0x46, 0x08, 0x00, 0xC1, 0xFA, 0x01, 0xC1,
        0x57, 0xF9,
    ]);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC000], 0x42);
    assert_eq!(cpu.regs().hl(), 0xC001);
    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC001], 0x42);
    assert_eq!(cpu.regs().hl(), 0xC000);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::B), 0x42);

    assert_eq!(step(&mut cpu, &mut bus), 5);
    assert_eq!(bus.memory[0xC100], 0xFE);
    assert_eq!(bus.memory[0xC101], 0xFF);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::D), 0xFF);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.sp(), 0xC000);
}

#[test]
fn push_pop_af_clears_low_nibble() {
    // LD BC,0x12FF ; PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(&[0x01, 0xFF, 0x12, 0xC5, 0xF1]);
    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs().af(), 0x12F0);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn add_and_adc_flags() {
    // LD A,0xFF ; LD B,0x01 ; ADD A,B ; ADC A,0x00 ; ADC A,0x0F
    let (mut cpu, mut bus) = setup(&[0x3E, 0xFF, 0x06, 0x01, 0x80, 0xCE, 0x00, 0xCE, 0x0F]);
    for _ in 0..3 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs().get(Reg::A), 0x00);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H | Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x01);
    assert_eq!(cpu.regs().flags(), Flags::empty());

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x10);
    assert_eq!(cpu.regs().flags(), Flags::H);
}

#[test]
fn sub_sbc_and_cp_flags() {
    // XOR A ; SUB 0x01 ; SBC A,0x00 ; CP 0xFE
    let (mut cpu, mut bus) = setup(&[0xAF, 0xD6, 0x01, 0xDE, 0x00, 0xFE, 0xFE]);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().flags(), Flags::Z);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0xFF);
    assert_eq!(cpu.regs().flags(), Flags::N | Flags::H | Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0xFE);
    assert_eq!(cpu.regs().flags(), Flags::N);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0xFE);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::N);
}

#[test]
fn logic_ops_flags() {
    // LD A,0xF0 ; AND 0x0F ; OR 0x81 ; XOR A
    let (mut cpu, mut bus) = setup(&[0x3E, 0xF0, 0xE6, 0x0F, 0xF6, 0x81, 0xAF]);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x00);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x81);
    assert_eq!(cpu.regs().flags(), Flags::empty());
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x00);
    assert_eq!(cpu.regs().flags(), Flags::Z);
}

#[test]
fn inc_dec_preserve_carry() {
    // LD A,0xFF ; SCF ; INC A ; LD B,0x01 ; DEC B ; INC (HL) with HL=0xC000
    let (mut cpu, mut bus) = setup(&[0x3E, 0xFF, 0x37, 0x3C, 0x06, 0x01, 0x05, 0x21, 0x00, 0xC0, 0x34]);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x00);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H | Flags::C);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::B), 0x00);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::N | Flags::C);

    step(&mut cpu, &mut bus);
    bus.memory[0xC000] = 0x0F;
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert_eq!(cpu.regs().flags(), Flags::H | Flags::C);
}

#[test]
fn sixteen_bit_arithmetic() {
    // LD HL,0x0FFF ; LD BC,0x0001 ; ADD HL,BC ; INC SP ; DEC BC
    let (mut cpu, mut bus) = setup(&[0x21, 0xFF, 0x0F, 0x01, 0x01, 0x00, 0x09, 0x33, 0x0B]);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    cpu.regs_mut().set_flags(Flags::Z);
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs().hl(), 0x1000);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.sp(), 0xFFFF);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().bc(), 0x0000);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H);
}

#[test]
fn sp_relative_arithmetic() {
    // ADD SP,-1 ; LD HL,SP+2
    let (mut cpu, mut bus) = setup(&[0xE8, 0xFF, 0xF8, 0x02]);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.sp(), 0xFFFD);
    assert_eq!(cpu.regs().flags(), Flags::H | Flags::C);

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs().hl(), 0xFFFF);
    assert_eq!(cpu.sp(), 0xFFFD);
    assert_eq!(cpu.regs().flags(), Flags::empty());
}

#[test]
fn daa_corrects_bcd_addition() {
    // LD A,0x15 ; ADD A,0x27 ; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x15, 0xC6, 0x27, 0x27]);
    for _ in 0..3 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs().get(Reg::A), 0x42);
    assert_eq!(cpu.regs().flags(), Flags::empty());
}

#[test]
fn cpl_scf_ccf() {
    // LD A,0x0F ; CPL ; SCF ; CCF
    let (mut cpu, mut bus) = setup(&[0x3E, 0x0F, 0x2F, 0x37, 0x3F]);
    step(&mut cpu, &mut bus);
    cpu.regs_mut().set_flags(Flags::Z);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0xF0);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::N | Flags::H);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::C);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().flags(), Flags::Z);
}

#[test]
fn accumulator_rotations_clear_z() {
    // LD A,0x80 ; RLCA ; RRA ; RRA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x80, 0x07, 0x1F, 0x1F]);
    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x01);
    assert_eq!(cpu.regs().flags(), Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x80);
    assert_eq!(cpu.regs().flags(), Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0xC0);
    assert_eq!(cpu.regs().flags(), Flags::empty());
}

#[test]
fn prefixed_rotations_and_shifts() {
    // LD B,0x00 ; RLC B ; LD A,0xF1 ; SWAP A ; SRA A ; SRL A ; SLA A
    let (mut cpu, mut bus) = setup(&[
        0x06, 0x00, 0xCB, 0x00, 0x3E, 0xF1, 0xCB, 0x37, 0xCB, 0x2F, 0xCB, 0x3F, 0xCB, 0x27,
    ]);
    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs().flags(), Flags::Z);
    assert_eq!(cpu.pc(), 0x0104);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x1F);
    assert_eq!(cpu.regs().flags(), Flags::empty());

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x0F);
    assert_eq!(cpu.regs().flags(), Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x07);
    assert_eq!(cpu.regs().flags(), Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::A), 0x0E);
    assert_eq!(cpu.regs().flags(), Flags::empty());
}

#[test]
fn bit_res_set() {
    // LD HL,0xC000 ; BIT 7,H ; BIT 1,(HL) ; RES 0,(HL) ; SET 7,(HL) ; SET 3,C
    let (mut cpu, mut bus) = setup(&[
        0x21, 0x00, 0xC0, 0xCB, 0x7C, 0xCB, 0x4E, 0xCB, 0x86, 0xCB, 0xFE, 0xCB, 0xD9,
    ]);
    bus.memory[0xC000] = 0x01;
    step(&mut cpu, &mut bus);
    cpu.regs_mut().set_flags(Flags::C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().flags(), Flags::H | Flags::C);

    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H | Flags::C);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x80);

    let c = cpu.regs().get(Reg::C);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs().get(Reg::C), c | 0x08);
    assert_eq!(cpu.regs().flags(), Flags::Z | Flags::H | Flags::C);
}

#[test]
fn jumps() {
    // JP 0x0200
    let (mut cpu, mut bus) = setup(&[0xC3, 0x00, 0x02]);
    // LD HL,0x0300 ; JP HL
    bus.load(0x0200, &[0x21, 0x00, 0x03, 0xE9]);
    // JP NZ,0x0400 (Z set, not taken) ; JP Z,0x0400
    bus.load(0x0300, &[0xC2, 0x00, 0x04, 0xCA, 0x00, 0x04]);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc(), 0x0200);
    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.pc(), 0x0300);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0303);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.pc(), 0x0400);
}

#[test]
fn relative_jumps_go_backwards() {
    // NOP ; JR -3
    let (mut cpu, mut bus) = setup(&[0x00, 0x18, 0xFD]);
    // JR NZ,-4 (Z set, not taken) ; JR Z,-4
    bus.load(0x0200, &[0x20, 0xFC, 0x28, 0xFC]);

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0100);

    cpu.set_pc(0x0200);
    assert!(cpu.regs().flag(Flags::Z));
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.pc(), 0x0202);
    assert_eq!(step(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0200);
}

#[test]
fn daa_corrects_bcd_subtraction() {
    // LD A,0x42 ; SUB 0x17 ; DAA ; LD A,0x15 ; SUB 0x27 ; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x42, 0xD6, 0x17, 0x27, 0x3E, 0x15, 0xD6, 0x27, 0x27]);
    for _ in 0..3 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs().get(Reg::A), 0x25);
    assert_eq!(cpu.regs().flags(), Flags::N);

    for _ in 0..3 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs().get(Reg::A), 0x88);
    assert_eq!(cpu.regs().flags(), Flags::N | Flags::C);
}

#[test]
fn adc_and_sbc_read_hl_and_carry() {
    // LD HL,0xC000 ; SCF ; LD A,0x0E ; ADC A,(HL) ; SCF ; SBC A,(HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x37, 0x3E, 0x0E, 0x8E, 0x37, 0x9E]);
    bus.memory[0xC000] = 0x01;
    for _ in 0..3 {
        step(&mut cpu, &mut bus);
    }
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs().get(Reg::A), 0x10);
    assert_eq!(cpu.regs().flags(), Flags::H);

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs().get(Reg::A), 0x0E);
    assert_eq!(cpu.regs().flags(), Flags::N | Flags::H);
}
