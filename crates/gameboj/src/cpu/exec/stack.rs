use super::Flow;
use crate::cpu::opcode::Opcode;
use crate::cpu::{AddressSpace, Cpu};

impl Cpu {
    pub(super) fn exec_push_r16<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let value = self.reg16(Cpu::extract_reg16(opcode));
        self.push16(bus, value);
        Flow::Next
    }

    /// `POP AF` drops the low nibble of F like any other write to it.
    pub(super) fn exec_pop_r16<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let value = self.pop16(bus);
        self.set_reg16(Cpu::extract_reg16(opcode), value);
        Flow::Next
    }
}
