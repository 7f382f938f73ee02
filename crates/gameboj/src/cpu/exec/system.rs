use super::Flow;
use crate::bits;
use crate::cpu::opcode::{Family, Opcode};
use crate::cpu::{AddressSpace, Cpu};
use crate::error::CpuError;

impl Cpu {
    /// `DI`/`EI`, `RETI`, `HALT` and `STOP`.
    ///
    /// IME changes take effect before the next instruction; the one
    /// instruction delay of `EI` on hardware is not modelled.
    pub(super) fn exec_system<A: AddressSpace>(
        &mut self,
        bus: &mut A,
        opcode: &Opcode,
    ) -> Result<Flow, CpuError> {
        match opcode.family {
            Family::Edi => {
                self.ime = bits::test(opcode.encoding as u32, 3);
                Ok(Flow::Next)
            }
            Family::Reti => {
                self.ime = true;
                Ok(Flow::Jump(self.pop16(bus)))
            }
            Family::Halt => Ok(Flow::Halt),
            Family::Stop => {
                self.log_lockup("unsupported instruction", opcode.encoding);
                Err(CpuError::Unsupported {
                    mnemonic: opcode.mnemonic,
                    pc: self.pc,
                })
            }
            family => unreachable!("{family:?} is not a system instruction"),
        }
    }
}
