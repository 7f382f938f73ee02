use super::Flow;
use crate::cpu::alu;
use crate::cpu::helpers::FlagSrc;
use crate::cpu::opcode::{Family, Opcode};
use crate::cpu::{AddressSpace, Cpu};

impl Cpu {
    /// 8-bit `INC`/`DEC` on a register or (HL). C is preserved.
    pub(super) fn exec_incdec8<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let (to_memory, increment) = match opcode.family {
            Family::IncR8 => (false, true),
            Family::IncHlr => (true, true),
            Family::DecR8 => (false, false),
            Family::DecHlr => (true, false),
            family => unreachable!("{family:?} is not an 8-bit increment"),
        };

        let reg = (!to_memory).then(|| Cpu::extract_reg(opcode, 3));
        let value = match reg {
            Some(reg) => self.regs.get(reg),
            None => self.read8_at_hl(bus),
        };

        let (vf, n) = if increment {
            (alu::add(value, 1, false), FlagSrc::V0)
        } else {
            (alu::sub(value, 1, false), FlagSrc::V1)
        };

        match reg {
            Some(reg) => self.set_reg_from_alu(reg, vf),
            None => self.write8_at_hl(bus, vf.value8()),
        }
        self.combine_alu_flags(vf, FlagSrc::Alu, n, FlagSrc::Alu, FlagSrc::Cpu);
        Flow::Next
    }

    /// 16-bit `INC rr`/`DEC rr`; flags untouched.
    pub(super) fn exec_incdec16(&mut self, opcode: &Opcode) -> Flow {
        let pair = Cpu::extract_reg16(opcode);
        let value = self.reg16_sp(pair);
        let value = match opcode.family {
            Family::IncR16Sp => value.wrapping_add(1),
            _ => value.wrapping_sub(1),
        };
        self.set_reg16_sp(pair, value);
        Flow::Next
    }
}
