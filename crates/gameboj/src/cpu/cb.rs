use super::alu;
use super::exec::Flow;
use super::helpers::FlagSrc;
use super::opcode::{Family, Opcode};
use super::{AddressSpace, Cpu, Flags, Reg};
use crate::bits;

/// Prefixed (`CB xx`) instructions. Bits 0..3 select the operand, with 6
/// meaning (HL); the `*Hlr` families are the (HL) forms.
impl Cpu {
    #[inline]
    fn cb_operand<A: AddressSpace>(&self, bus: &mut A, opcode: &Opcode) -> (Option<Reg>, u8) {
        if Cpu::is_hl_operand(opcode) {
            (None, self.read8_at_hl(bus))
        } else {
            let reg = Cpu::extract_reg(opcode, 0);
            (Some(reg), self.regs.get(reg))
        }
    }

    #[inline]
    fn is_hl_operand(opcode: &Opcode) -> bool {
        use Family::*;
        matches!(
            opcode.family,
            RotcHlr | RotHlr | SwapHlr | SlaHlr | SraHlr | SrlHlr | BitU3Hlr | ChgU3Hlr
        )
    }

    /// `RLC`, `RRC`, `RL`, `RR`, `SWAP`, `SLA`, `SRA`, `SRL`; all flags
    /// come from the ALU.
    pub(super) fn exec_shift<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        use Family::*;
        let (reg, value) = self.cb_operand(bus, opcode);
        let vf = match opcode.family {
            RotcR8 | RotcHlr => alu::rotate(Cpu::extract_direction(opcode), value),
            RotR8 | RotHlr => alu::rotate_through_carry(
                Cpu::extract_direction(opcode),
                value,
                self.regs.flag(Flags::C),
            ),
            SwapR8 | SwapHlr => alu::swap(value),
            SlaR8 | SlaHlr => alu::shift_left(value),
            SraR8 | SraHlr => alu::shift_right_arithmetic(value),
            SrlR8 | SrlHlr => alu::shift_right_logical(value),
            family => unreachable!("{family:?} is not a shift"),
        };
        match reg {
            Some(reg) => self.set_reg_flags(reg, vf),
            None => self.write8_at_hl_and_set_flags(bus, vf),
        }
        Flow::Next
    }

    /// `BIT n`: Z from the tested bit, H set, C preserved.
    pub(super) fn exec_bit<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let (_, value) = self.cb_operand(bus, opcode);
        let vf = alu::test_bit(value, Cpu::extract_u3(opcode));
        self.combine_alu_flags(vf, FlagSrc::Alu, FlagSrc::V0, FlagSrc::V1, FlagSrc::Cpu);
        Flow::Next
    }

    /// `RES n` and `SET n` (bit 6 set); flags untouched.
    pub(super) fn exec_chg<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let (reg, value) = self.cb_operand(bus, opcode);
        let set = bits::test(opcode.encoding as u32, 6);
        let value = bits::set(value as u32, Cpu::extract_u3(opcode), set) as u8;
        match reg {
            Some(reg) => self.regs.set(reg, value),
            None => self.write8_at_hl(bus, value),
        }
        Flow::Next
    }
}
