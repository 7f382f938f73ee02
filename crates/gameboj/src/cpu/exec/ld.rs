use super::Flow;
use crate::address_map::REGS_START;
use crate::cpu::opcode::{Family, Opcode};
use crate::cpu::{AddressSpace, Cpu, Reg, Reg16};

impl Cpu {
    /// Loads into a register: `LD r,(HL)`, `LD A,(HL±)`, `LDH A,(n)`,
    /// `LDH A,(C)`, `LD A,(nn)`, `LD A,(BC)`, `LD A,(DE)`, `LD r,n` and
    /// `LD rr,nn`.
    pub(super) fn exec_load<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        match opcode.family {
            Family::LdR8Hlr => {
                let value = self.read8_at_hl(bus);
                self.regs.set(Cpu::extract_reg(opcode, 3), value);
            }
            Family::LdAHlru => {
                let hl = self.regs.hl();
                let value = self.read8(bus, hl);
                self.regs.set(Reg::A, value);
                self.regs.set_hl(hl.wrapping_add(Cpu::extract_hl_increment(opcode)));
            }
            Family::LdAN8r => {
                let address = REGS_START + self.read8_after_opcode(bus) as u16;
                let value = self.read8(bus, address);
                self.regs.set(Reg::A, value);
            }
            Family::LdACr => {
                let address = REGS_START + self.regs.get(Reg::C) as u16;
                let value = self.read8(bus, address);
                self.regs.set(Reg::A, value);
            }
            Family::LdAN16r => {
                let address = self.read16_after_opcode(bus);
                let value = self.read8(bus, address);
                self.regs.set(Reg::A, value);
            }
            Family::LdABcr => {
                let value = self.read8(bus, self.regs.bc());
                self.regs.set(Reg::A, value);
            }
            Family::LdADer => {
                let value = self.read8(bus, self.regs.de());
                self.regs.set(Reg::A, value);
            }
            Family::LdR8N8 => {
                let value = self.read8_after_opcode(bus);
                self.regs.set(Cpu::extract_reg(opcode, 3), value);
            }
            Family::LdR16SpN16 => {
                let value = self.read16_after_opcode(bus);
                self.set_reg16_sp(Cpu::extract_reg16(opcode), value);
            }
            family => unreachable!("{family:?} is not a load"),
        }
        Flow::Next
    }

    /// Stores to memory: `LD (HL),r`, `LD (HL±),A`, `LDH (n),A`,
    /// `LDH (C),A`, `LD (nn),A`, `LD (BC),A`, `LD (DE),A`, `LD (HL),n` and
    /// `LD (nn),SP`.
    pub(super) fn exec_store<A: AddressSpace>(&mut self, bus: &mut A, opcode: &Opcode) -> Flow {
        let a = self.regs.get(Reg::A);
        match opcode.family {
            Family::LdHlrR8 => {
                let value = self.regs.get(Cpu::extract_reg(opcode, 0));
                self.write8_at_hl(bus, value);
            }
            Family::LdHlruA => {
                let hl = self.regs.hl();
                self.write8(bus, hl, a);
                self.regs.set_hl(hl.wrapping_add(Cpu::extract_hl_increment(opcode)));
            }
            Family::LdN8rA => {
                let address = REGS_START + self.read8_after_opcode(bus) as u16;
                self.write8(bus, address, a);
            }
            Family::LdCrA => {
                let address = REGS_START + self.regs.get(Reg::C) as u16;
                self.write8(bus, address, a);
            }
            Family::LdN16rA => {
                let address = self.read16_after_opcode(bus);
                self.write8(bus, address, a);
            }
            Family::LdBcrA => {
                let address = self.regs.bc();
                self.write8(bus, address, a);
            }
            Family::LdDerA => {
                let address = self.regs.de();
                self.write8(bus, address, a);
            }
            Family::LdHlrN8 => {
                let value = self.read8_after_opcode(bus);
                self.write8_at_hl(bus, value);
            }
            Family::LdN16rSp => {
                let address = self.read16_after_opcode(bus);
                let sp = self.sp;
                self.write16(bus, address, sp);
            }
            family => unreachable!("{family:?} is not a store"),
        }
        Flow::Next
    }

    pub(super) fn exec_ld_r8_r8(&mut self, opcode: &Opcode) -> Flow {
        let value = self.regs.get(Cpu::extract_reg(opcode, 0));
        self.regs.set(Cpu::extract_reg(opcode, 3), value);
        Flow::Next
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> Flow {
        self.sp = self.reg16(Reg16::HL);
        Flow::Next
    }
}
