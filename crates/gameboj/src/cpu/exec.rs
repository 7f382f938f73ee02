mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::opcode::{self, Family, Opcode, PREFIX};
use super::{AddressSpace, Cpu, Schedule};
use crate::error::CpuError;

/// Where execution continues after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Flow {
    /// Fall through to the following instruction.
    Next,
    /// Unconditional transfer of control.
    Jump(u16),
    /// Conditional transfer that was taken; costs the extra cycles.
    Taken(u16),
    /// Stop dispatching until an interrupt is pending.
    Halt,
}

impl Flow {
    #[inline]
    pub(super) fn branch(taken: bool, target: u16) -> Self {
        if taken {
            Flow::Taken(target)
        } else {
            Flow::Next
        }
    }
}

impl Cpu {
    /// Fetches, decodes and executes the instruction at PC, then books its
    /// cost so the next step runs at `cycle + cost`.
    pub(super) fn step<A: AddressSpace>(&mut self, cycle: u64, bus: &mut A) -> Result<(), CpuError> {
        let pc = self.pc;
        let code = self.read8(bus, pc);
        let decoded = if code == PREFIX {
            opcode::prefixed(self.read8(bus, pc.wrapping_add(1)))
        } else {
            opcode::direct(code)
        };
        let Some(opcode) = decoded else {
            self.log_lockup("invalid opcode", code);
            return Err(CpuError::InvalidOpcode { encoding: code, pc });
        };

        log::trace!(
            "GB CPU {pc:04X}: {:<12} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
            opcode.mnemonic,
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.sp,
        );

        let next_pc = pc.wrapping_add(opcode.total_bytes as u16);
        let mut cost = opcode.cycles as u64;
        match self.execute(bus, opcode, next_pc)? {
            Flow::Next => self.pc = next_pc,
            Flow::Jump(target) => self.pc = target,
            Flow::Taken(target) => {
                self.pc = target;
                cost += opcode.additional_cycles as u64;
            }
            Flow::Halt => {
                self.pc = next_pc;
                self.schedule = Schedule::Idle;
                return Ok(());
            }
        }
        self.schedule = Schedule::ActiveAt(cycle + cost);
        Ok(())
    }

    fn execute<A: AddressSpace>(
        &mut self,
        bus: &mut A,
        opcode: &Opcode,
        next_pc: u16,
    ) -> Result<Flow, CpuError> {
        use Family::*;

        let flow = match opcode.family {
            Nop => Flow::Next,

            LdR8Hlr | LdAHlru | LdAN8r | LdACr | LdAN16r | LdABcr | LdADer | LdR8N8
            | LdR16SpN16 => self.exec_load(bus, opcode),
            LdHlrR8 | LdHlruA | LdN8rA | LdCrA | LdN16rA | LdBcrA | LdDerA | LdHlrN8
            | LdN16rSp => self.exec_store(bus, opcode),
            LdR8R8 => self.exec_ld_r8_r8(opcode),
            LdSpHl => self.exec_ld_sp_hl(),

            PopR16 => self.exec_pop_r16(bus, opcode),
            PushR16 => self.exec_push_r16(bus, opcode),

            AddAR8 | AddAN8 | AddAHlr => self.exec_add_a(bus, opcode),
            SubAR8 | SubAN8 | SubAHlr => self.exec_sub_a(bus, opcode),
            CpAR8 | CpAN8 | CpAHlr => self.exec_cp_a(bus, opcode),
            AndAR8 | AndAN8 | AndAHlr | OrAR8 | OrAN8 | OrAHlr | XorAR8 | XorAN8 | XorAHlr => {
                self.exec_logic_a(bus, opcode)
            }
            AddHlR16Sp => self.exec_add_hl_r16sp(opcode),
            LdHlSpS8 => self.exec_ld_hl_sp_s8(bus, opcode),
            Cpl => self.exec_cpl(),
            Daa => self.exec_daa(),
            Sccf => self.exec_sccf(opcode),
            Rotca | Rota => self.exec_rotate_a(opcode),

            IncR8 | IncHlr | DecR8 | DecHlr => self.exec_incdec8(bus, opcode),
            IncR16Sp | DecR16Sp => self.exec_incdec16(opcode),

            RotcR8 | RotR8 | RotcHlr | RotHlr | SwapR8 | SwapHlr | SlaR8 | SraR8 | SrlR8
            | SlaHlr | SraHlr | SrlHlr => self.exec_shift(bus, opcode),
            BitU3R8 | BitU3Hlr => self.exec_bit(bus, opcode),
            ChgU3R8 | ChgU3Hlr => self.exec_chg(bus, opcode),

            JpHl | JpN16 | JpCcN16 | JrE8 | JrCcE8 => self.exec_jump(bus, opcode, next_pc),
            CallN16 | CallCcN16 | RstU3 => self.exec_call(bus, opcode, next_pc),
            Ret | RetCc => self.exec_ret(bus, opcode),

            Edi | Reti | Halt | Stop => self.exec_system(bus, opcode)?,
        };
        Ok(flow)
    }

    /// Register dump for the fatal paths, at error level.
    pub(super) fn log_lockup(&self, what: &str, code: u8) {
        log::error!(
            "GB CPU locked: {what} 0x{code:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            pc = self.pc,
            sp = self.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
    }
}
