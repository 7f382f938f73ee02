use super::{AddressSpace, Cpu};

/// Machine cycles charged for entering an interrupt handler.
pub(super) const INTERRUPT_ENTRY_CYCLES: u64 = 5;

impl Cpu {
    /// Enters the handler of the highest-priority pending interrupt if IME
    /// allows it.
    ///
    /// IME is cleared, only the serviced request bit is acknowledged and the
    /// current PC is pushed. Returns the cost of the entry, or `None` when
    /// no interrupt was taken.
    pub(super) fn service_interrupt<A: AddressSpace>(&mut self, bus: &mut A) -> Option<u64> {
        if !self.ime {
            return None;
        }
        let interrupt = self.pending_interrupts().highest()?;

        self.ime = false;
        self.iflags.remove(interrupt.mask());
        let pc = self.pc;
        self.push16(bus, pc);
        self.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} from pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            interrupt,
            self.pc,
            pc,
            self.sp,
            self.iflags.bits(),
            self.ie.bits(),
        );
        Some(INTERRUPT_ENTRY_CYCLES)
    }
}
