use super::Flow;
use crate::bits;
use crate::cpu::alu::{self, ValueFlags};
use crate::cpu::helpers::FlagSrc;
use crate::cpu::opcode::{Family, Opcode};
use crate::cpu::{AddressSpace, Cpu, Flags, Reg};

impl Cpu {
    /// Second operand of the 8-bit accumulator families: a register, the
    /// immediate, or the byte at (HL).
    fn a_operand<A: AddressSpace>(&self, bus: &mut A, opcode: &Opcode) -> u8 {
        use Family::*;
        match opcode.family {
            AddAR8 | SubAR8 | CpAR8 | AndAR8 | OrAR8 | XorAR8 => {
                self.regs.get(Cpu::extract_reg(opcode, 0))
            }
            AddAN8 | SubAN8 | CpAN8 | AndAN8 | OrAN8 | XorAN8 => self.read8_after_opcode(bus),
            AddAHlr | SubAHlr | CpAHlr | AndAHlr | OrAHlr | XorAHlr => self.read8_at_hl(bus),
            family => unreachable!("{family:?} has no accumulator operand"),
        }
    }

    /// `ADD`/`ADC`.
    pub(super) fn exec_add_a<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let operand = self.a_operand(bus, opcode);
        let vf = alu::add(self.regs.get(Reg::A), operand, self.carry_in(opcode));
        self.set_reg_flags(Reg::A, vf);
        Flow::Next
    }

    /// `SUB`/`SBC`.
    pub(super) fn exec_sub_a<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let operand = self.a_operand(bus, opcode);
        let vf = alu::sub(self.regs.get(Reg::A), operand, self.carry_in(opcode));
        self.set_reg_flags(Reg::A, vf);
        Flow::Next
    }

    pub(super) fn exec_cp_a<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let operand = self.a_operand(bus, opcode);
        let vf = alu::sub(self.regs.get(Reg::A), operand, false);
        self.set_flags(vf);
        Flow::Next
    }

    /// `AND`, `OR`, `XOR`.
    pub(super) fn exec_logic_a<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        use Family::*;
        let operand = self.a_operand(bus, opcode);
        let a = self.regs.get(Reg::A);
        let vf = match opcode.family {
            AndAR8 | AndAN8 | AndAHlr => alu::and(a, operand),
            OrAR8 | OrAN8 | OrAHlr => alu::or(a, operand),
            _ => alu::xor(a, operand),
        };
        self.set_reg_flags(Reg::A, vf);
        Flow::Next
    }

    /// `ADD HL,rr`: Z untouched, carries from bits 11 and 15.
    pub(super) fn exec_add_hl_r16sp(&mut self, opcode: &Opcode) -> Flow {
        let operand = self.reg16_sp(Cpu::extract_reg16(opcode));
        let vf = alu::add16_high(self.regs.hl(), operand);
        self.regs.set_hl(vf.value);
        self.combine_alu_flags(vf, FlagSrc::Cpu, FlagSrc::V0, FlagSrc::Alu, FlagSrc::Alu);
        Flow::Next
    }

    /// `ADD SP,e8` (bit 4 clear) and `LD HL,SP+e8` (bit 4 set). Both take
    /// their carries from the low byte and clear Z and N.
    pub(super) fn exec_ld_hl_sp_s8<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let offset = bits::sign_extend8(self.read8_after_opcode(bus));
        let vf = alu::add16_low(self.sp, offset);
        if bits::test(opcode.encoding as u32, 4) {
            self.regs.set_hl(vf.value);
        } else {
            self.sp = vf.value;
        }
        self.combine_alu_flags(vf, FlagSrc::V0, FlagSrc::V0, FlagSrc::Alu, FlagSrc::Alu);
        Flow::Next
    }

    pub(super) fn exec_cpl(&mut self) -> Flow {
        let a = self.regs.get(Reg::A);
        self.regs.set(Reg::A, bits::complement8(a));
        let vf = ValueFlags::new(0, false, true, true, false);
        self.combine_alu_flags(vf, FlagSrc::Cpu, FlagSrc::Alu, FlagSrc::Alu, FlagSrc::Cpu);
        Flow::Next
    }

    pub(super) fn exec_daa(&mut self) -> Flow {
        let flags = self.regs.flags();
        let vf = alu::bcd_adjust(
            self.regs.get(Reg::A),
            flags.contains(Flags::N),
            flags.contains(Flags::H),
            flags.contains(Flags::C),
        );
        self.set_reg_from_alu(Reg::A, vf);
        self.combine_alu_flags(vf, FlagSrc::Alu, FlagSrc::Cpu, FlagSrc::V0, FlagSrc::Alu);
        Flow::Next
    }

    /// `SCF` sets C, `CCF` (bit 3 set) flips it.
    pub(super) fn exec_sccf(&mut self, opcode: &Opcode) -> Flow {
        let c = !bits::test(opcode.encoding as u32, 3) || !self.regs.flag(Flags::C);
        let vf = ValueFlags::new(0, false, false, false, c);
        self.combine_alu_flags(vf, FlagSrc::Cpu, FlagSrc::V0, FlagSrc::V0, FlagSrc::Alu);
        Flow::Next
    }

    /// `RLCA`, `RRCA`, `RLA`, `RRA`. Unlike their prefixed forms these
    /// always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: &Opcode) -> Flow {
        let dir = Cpu::extract_direction(opcode);
        let a = self.regs.get(Reg::A);
        let vf = match opcode.family {
            Family::Rotca => alu::rotate(dir, a),
            _ => alu::rotate_through_carry(dir, a, self.regs.flag(Flags::C)),
        };
        self.set_reg_from_alu(Reg::A, vf);
        self.combine_alu_flags(vf, FlagSrc::V0, FlagSrc::V0, FlagSrc::V0, FlagSrc::Alu);
        Flow::Next
    }
}
