//! LR35902 execution engine.
//!
//! The engine is advanced once per machine cycle by the driver. It either
//! waits for the cycle at which the previous instruction completes, or
//! services one interrupt, or executes exactly one instruction and books its
//! cost against the next active cycle.

pub mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod interrupts;
pub mod opcode;
mod regs;

#[cfg(test)]
mod tests;

use bitflags::bitflags;

use crate::address_map::{HIGH_RAM_END, HIGH_RAM_SIZE, HIGH_RAM_START, INTERRUPTS, REG_IE, REG_IF};
use crate::component::Component;
use crate::error::CpuError;
use crate::memory::Ram;

pub use bus::AddressSpace;
pub use regs::{Flags, Reg, Reg16, RegisterFile};

/// Interrupt sources, in priority order (lowest index first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn mask(self) -> Interrupts {
        Interrupts::from_bits_truncate(1 << self.index())
    }

    /// Handler address the CPU jumps to when servicing this interrupt.
    #[inline]
    pub fn vector(self) -> u16 {
        INTERRUPTS[self.index()]
    }
}

bitflags! {
    /// Contents of the IE and IF registers. Only the low five bits exist.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interrupts: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl Interrupts {
    /// Highest-priority interrupt in the set.
    #[inline]
    pub fn highest(self) -> Option<Interrupt> {
        if self.is_empty() {
            None
        } else {
            Some(Interrupt::ALL[self.bits().trailing_zeros() as usize])
        }
    }
}

/// Something that peripherals raise interrupt requests on.
pub trait InterruptSink {
    fn request_interrupt(&mut self, interrupt: Interrupt);
}

/// When the engine will next do work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Halted; only a pending enabled interrupt wakes the engine up.
    Idle,
    /// Busy until the given machine cycle, at which the next step runs.
    ActiveAt(u64),
}

#[derive(Clone, Debug)]
pub struct Cpu {
    regs: RegisterFile,
    sp: u16,
    pc: u16,
    ie: Interrupts,
    iflags: Interrupts,
    ime: bool,
    high_ram: Ram,
    schedule: Schedule,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-on state: every register zero, PC at the boot ROM entry.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            sp: 0,
            pc: 0,
            ie: Interrupts::empty(),
            iflags: Interrupts::empty(),
            ime: false,
            high_ram: Ram::new(HIGH_RAM_SIZE),
            schedule: Schedule::ActiveAt(0),
        }
    }

    /// CPU as the DMG boot ROM leaves it when it jumps to the cartridge.
    pub fn post_boot() -> Self {
        let mut cpu = Self::new();
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Back to the power-on state. High RAM is cleared as well.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Register values as documented for the DMG after the boot ROM ran.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.set16(Reg16::AF, 0x01B0);
        self.regs.set16(Reg16::BC, 0x0013);
        self.regs.set16(Reg16::DE, 0x00D8);
        self.regs.set16(Reg16::HL, 0x014D);
        self.sp = 0xFFFE;
        self.pc = 0x0100;
    }

    #[inline]
    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    #[inline]
    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, sp: u16) {
        self.sp = sp;
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    #[inline]
    pub fn set_ime(&mut self, ime: bool) {
        self.ime = ime;
    }

    #[inline]
    pub fn interrupt_enable(&self) -> Interrupts {
        self.ie
    }

    #[inline]
    pub fn interrupt_flags(&self) -> Interrupts {
        self.iflags
    }

    #[inline]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.schedule == Schedule::Idle
    }

    /// Advances the engine to machine cycle `cycle`.
    ///
    /// Callers must pass every cycle in increasing order. At most one
    /// interrupt entry or one instruction runs per call.
    pub fn advance<A: AddressSpace>(&mut self, cycle: u64, bus: &mut A) -> Result<(), CpuError> {
        match self.schedule {
            Schedule::Idle if self.pending_interrupts().is_empty() => return Ok(()),
            Schedule::Idle => {
                log::trace!("GB CPU woke from HALT at cycle {cycle}");
                self.schedule = Schedule::ActiveAt(cycle);
            }
            Schedule::ActiveAt(next) if next != cycle => return Ok(()),
            Schedule::ActiveAt(_) => {}
        }

        if let Some(cost) = self.service_interrupt(bus) {
            self.schedule = Schedule::ActiveAt(cycle + cost);
            return Ok(());
        }

        self.step(cycle, bus)
    }

    #[inline]
    fn pending_interrupts(&self) -> Interrupts {
        self.ie & self.iflags
    }
}

impl InterruptSink for Cpu {
    #[inline]
    fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.iflags |= interrupt.mask();
    }
}

/// The CPU's own memory-mapped surface: high RAM plus IE and IF.
impl Component for Cpu {
    fn read(&self, address: u16) -> Option<u8> {
        match address {
            REG_IE => Some(self.ie.bits()),
            REG_IF => Some(self.iflags.bits()),
            a if (HIGH_RAM_START..HIGH_RAM_END).contains(&a) => {
                Some(self.high_ram.read((a - HIGH_RAM_START) as usize))
            }
            _ => None,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        match address {
            REG_IE => self.ie = Interrupts::from_bits_truncate(data),
            REG_IF => self.iflags = Interrupts::from_bits_truncate(data),
            a if (HIGH_RAM_START..HIGH_RAM_END).contains(&a) => {
                self.high_ram.write((a - HIGH_RAM_START) as usize, data)
            }
            _ => {}
        }
    }
}
