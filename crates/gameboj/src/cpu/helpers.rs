use super::alu::{RotDir, ValueFlags};
use super::opcode::Opcode;
use super::{AddressSpace, Cpu, Flags, Reg, Reg16};
use crate::bits;
use crate::component::Component;

/// Where each flag comes from after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FlagSrc {
    /// Forced to 0.
    V0,
    /// Forced to 1.
    V1,
    /// Taken from the ALU result.
    Alu,
    /// Left as it was in F.
    Cpu,
}

impl FlagSrc {
    #[inline]
    fn pick(self, flag: Flags, alu: Flags, cpu: Flags) -> bool {
        match self {
            FlagSrc::V0 => false,
            FlagSrc::V1 => true,
            FlagSrc::Alu => alu.contains(flag),
            FlagSrc::Cpu => cpu.contains(flag),
        }
    }
}

/// 8-bit operand encodings, `None` where the field means (HL).
const REG_FIELD: [Option<Reg>; 8] = [
    Some(Reg::B),
    Some(Reg::C),
    Some(Reg::D),
    Some(Reg::E),
    Some(Reg::H),
    Some(Reg::L),
    None,
    Some(Reg::A),
];

/// 16-bit operand encodings; the fourth slot means SP or AF depending on the
/// instruction.
const REG16_FIELD: [Reg16; 4] = [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::AF];

impl Cpu {
    // Memory. The CPU's own registers and high RAM answer before the bus;
    // writes reach both so the bus keeps broadcasting every store.

    #[inline]
    pub(super) fn read8<A: AddressSpace>(&self, bus: &mut A, address: u16) -> u8 {
        Component::read(self, address).unwrap_or_else(|| bus.read8(address))
    }

    #[inline]
    pub(super) fn write8<A: AddressSpace>(&mut self, bus: &mut A, address: u16, value: u8) {
        Component::write(self, address, value);
        bus.write8(address, value);
    }

    #[inline]
    pub(super) fn read8_at_hl<A: AddressSpace>(&self, bus: &mut A) -> u8 {
        self.read8(bus, self.regs.hl())
    }

    #[inline]
    pub(super) fn write8_at_hl<A: AddressSpace>(&mut self, bus: &mut A, value: u8) {
        let hl = self.regs.hl();
        self.write8(bus, hl, value);
    }

    #[inline]
    pub(super) fn read8_after_opcode<A: AddressSpace>(&self, bus: &mut A) -> u8 {
        self.read8(bus, self.pc.wrapping_add(1))
    }

    /// Little-endian word at `address`.
    #[inline]
    pub(super) fn read16<A: AddressSpace>(&self, bus: &mut A, address: u16) -> u16 {
        let lo = self.read8(bus, address);
        let hi = self.read8(bus, address.wrapping_add(1));
        bits::make16(hi, lo)
    }

    #[inline]
    pub(super) fn read16_after_opcode<A: AddressSpace>(&self, bus: &mut A) -> u16 {
        self.read16(bus, self.pc.wrapping_add(1))
    }

    #[inline]
    pub(super) fn write16<A: AddressSpace>(&mut self, bus: &mut A, address: u16, value: u16) {
        self.write8(bus, address, bits::lsb8(value));
        self.write8(bus, address.wrapping_add(1), bits::msb8(value));
    }

    #[inline]
    pub(super) fn push16<A: AddressSpace>(&mut self, bus: &mut A, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        let sp = self.sp;
        self.write16(bus, sp, value);
    }

    #[inline]
    pub(super) fn pop16<A: AddressSpace>(&mut self, bus: &mut A) -> u16 {
        let value = self.read16(bus, self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    // Register pairs.

    /// Pair value, the fourth encoding reading AF.
    #[inline]
    pub(super) fn reg16(&self, pair: Reg16) -> u16 {
        self.regs.get16(pair)
    }

    #[inline]
    pub(super) fn set_reg16(&mut self, pair: Reg16, value: u16) {
        self.regs.set16(pair, value);
    }

    /// Pair value, the fourth encoding reading SP instead of AF.
    #[inline]
    pub(super) fn reg16_sp(&self, pair: Reg16) -> u16 {
        match pair {
            Reg16::AF => self.sp,
            _ => self.regs.get16(pair),
        }
    }

    #[inline]
    pub(super) fn set_reg16_sp(&mut self, pair: Reg16, value: u16) {
        match pair {
            Reg16::AF => self.sp = value,
            _ => self.regs.set16(pair, value),
        }
    }

    // Operand fields of the opcode.

    /// 8-bit register in the 3-bit field at `start`.
    ///
    /// Only called by families whose table entries never encode (HL) there.
    #[inline]
    pub(super) fn extract_reg(opcode: &Opcode, start: u32) -> Reg {
        let field = bits::extract(opcode.encoding as u32, start, 3) as usize;
        match REG_FIELD[field] {
            Some(reg) => reg,
            None => unreachable!("{} has no register in bits {start}..{}", opcode.mnemonic, start + 3),
        }
    }

    #[inline]
    pub(super) fn extract_reg16(opcode: &Opcode) -> Reg16 {
        REG16_FIELD[bits::extract(opcode.encoding as u32, 4, 2) as usize]
    }

    /// HL step of the `(HL+)`/`(HL-)` loads: bit 4 selects decrement.
    #[inline]
    pub(super) fn extract_hl_increment(opcode: &Opcode) -> u16 {
        if bits::test(opcode.encoding as u32, 4) {
            0xFFFF
        } else {
            1
        }
    }

    #[inline]
    pub(super) fn extract_direction(opcode: &Opcode) -> RotDir {
        if bits::test(opcode.encoding as u32, 3) {
            RotDir::Right
        } else {
            RotDir::Left
        }
    }

    /// 3-bit field at bits 3..6 (bit index of BIT/RES/SET, RST target).
    #[inline]
    pub(super) fn extract_u3(opcode: &Opcode) -> u32 {
        bits::extract(opcode.encoding as u32, 3, 3)
    }

    /// Condition in bits 3..5: NZ, Z, NC, C.
    #[inline]
    pub(super) fn extract_condition(&self, opcode: &Opcode) -> bool {
        let flags = self.regs.flags();
        match bits::extract(opcode.encoding as u32, 3, 2) {
            0 => !flags.contains(Flags::Z),
            1 => flags.contains(Flags::Z),
            2 => !flags.contains(Flags::C),
            _ => flags.contains(Flags::C),
        }
    }

    /// Carry-in for ADC/SBC: bit 3 of the opcode selects it, F supplies it.
    #[inline]
    pub(super) fn carry_in(&self, opcode: &Opcode) -> bool {
        bits::test(opcode.encoding as u32, 3) && self.regs.flag(Flags::C)
    }

    // Results.

    #[inline]
    pub(super) fn set_reg_from_alu(&mut self, reg: Reg, vf: ValueFlags) {
        self.regs.set(reg, vf.value8());
    }

    #[inline]
    pub(super) fn set_flags(&mut self, vf: ValueFlags) {
        self.regs.set_flags(vf.flags);
    }

    /// Stores the value in `reg` and takes every flag from the ALU.
    #[inline]
    pub(super) fn set_reg_flags(&mut self, reg: Reg, vf: ValueFlags) {
        self.set_reg_from_alu(reg, vf);
        self.set_flags(vf);
    }

    #[inline]
    pub(super) fn write8_at_hl_and_set_flags<A: AddressSpace>(&mut self, bus: &mut A, vf: ValueFlags) {
        self.write8_at_hl(bus, vf.value8());
        self.set_flags(vf);
    }

    /// Rebuilds F, choosing the source of each flag independently.
    pub(super) fn combine_alu_flags(&mut self, vf: ValueFlags, z: FlagSrc, n: FlagSrc, h: FlagSrc, c: FlagSrc) {
        let cpu = self.regs.flags();
        let alu = vf.flags;
        let flags = Flags::znhc(
            z.pick(Flags::Z, alu, cpu),
            n.pick(Flags::N, alu, cpu),
            h.pick(Flags::H, alu, cpu),
            c.pick(Flags::C, alu, cpu),
        );
        self.regs.set_flags(flags);
    }
}
