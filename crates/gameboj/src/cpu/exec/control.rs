use super::Flow;
use crate::address_map::RESETS;
use crate::bits;
use crate::cpu::opcode::{Family, Opcode};
use crate::cpu::{AddressSpace, Cpu};

impl Cpu {
    /// `JP HL`, `JP nn`, `JP cc,nn`, `JR e`, `JR cc,e`.
    ///
    /// Relative jumps are taken from the address of the next instruction.
    pub(super) fn exec_jump<A: AddressSpace>(
        &mut self,
        bus: &mut A,
        opcode: &Opcode,
        next_pc: u16,
    ) -> Flow {
        match opcode.family {
            Family::JpHl => Flow::Jump(self.regs.hl()),
            Family::JpN16 => Flow::Jump(self.read16_after_opcode(bus)),
            Family::JpCcN16 => {
                let target = self.read16_after_opcode(bus);
                Flow::branch(self.extract_condition(opcode), target)
            }
            Family::JrE8 => Flow::Jump(self.relative_target(bus, next_pc)),
            Family::JrCcE8 => {
                let target = self.relative_target(bus, next_pc);
                Flow::branch(self.extract_condition(opcode), target)
            }
            family => unreachable!("{family:?} is not a jump"),
        }
    }

    /// `CALL nn`, `CALL cc,nn`, `RST n`. The return address pushed is the
    /// next instruction.
    pub(super) fn exec_call<A: AddressSpace>(
        &mut self,
        bus: &mut A,
        opcode: &Opcode,
        next_pc: u16,
    ) -> Flow {
        match opcode.family {
            Family::CallN16 => {
                let target = self.read16_after_opcode(bus);
                self.push16(bus, next_pc);
                Flow::Jump(target)
            }
            Family::CallCcN16 => {
                let target = self.read16_after_opcode(bus);
                if self.extract_condition(opcode) {
                    self.push16(bus, next_pc);
                    Flow::Taken(target)
                } else {
                    Flow::Next
                }
            }
            Family::RstU3 => {
                self.push16(bus, next_pc);
                Flow::Jump(RESETS[Cpu::extract_u3(opcode) as usize])
            }
            family => unreachable!("{family:?} is not a call"),
        }
    }

    /// `RET` and `RET cc`.
    pub(super) fn exec_ret<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        match opcode.family {
            Family::Ret => Flow::Jump(self.pop16(bus)),
            Family::RetCc if self.extract_condition(opcode) => Flow::Taken(self.pop16(bus)),
            Family::RetCc => Flow::Next,
            family => unreachable!("{family:?} is not a return"),
        }
    }

    #[inline]
    fn relative_target<A: AddressSpace>(&self, bus: &mut A, next_pc: u16) -> u16 {
        let offset = bits::sign_extend8(self.read8_after_opcode(bus));
        next_pc.wrapping_add(offset)
    }
}
