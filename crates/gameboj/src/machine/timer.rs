use crate::address_map::{REG_DIV, REG_TAC, REG_TIMA, REG_TMA};
use crate::bits;
use crate::component::Component;
use crate::cpu::{Interrupt, InterruptSink};

/// Counter bit watched by TIMA for each TAC clock select (4096 Hz,
/// 262144 Hz, 65536 Hz, 16384 Hz).
const TAC_BITS: [u32; 4] = [9, 3, 5, 7];

/// DIV reads 0xAB when the boot ROM hands over to the cartridge.
const POST_BOOT_COUNTER: u16 = 0xABCC;

/// Divider and timer unit.
///
/// The hidden 16-bit counter advances by 4 every machine cycle and DIV
/// exposes its upper byte. TIMA counts falling edges of
/// `TAC.enable && counter[TAC_BITS[TAC & 3]]`, whatever causes them:
/// time passing, a DIV reset or a TAC write.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
    /// Overflow caused by a register write, reported on the next cycle.
    overflow_pending: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer as left by the DMG boot ROM.
    pub fn post_boot() -> Self {
        Self {
            counter: POST_BOOT_COUNTER,
            ..Self::default()
        }
    }

    #[inline]
    pub fn div(&self) -> u8 {
        bits::msb8(self.counter)
    }

    #[inline]
    pub fn tima(&self) -> u8 {
        self.tima
    }

    /// Advances one machine cycle.
    pub fn cycle(&mut self, sink: &mut impl InterruptSink) {
        let overflowed = self.update(|timer| timer.counter = timer.counter.wrapping_add(4));
        if overflowed || std::mem::take(&mut self.overflow_pending) {
            sink.request_interrupt(Interrupt::Timer);
        }
    }

    #[inline]
    fn state(&self) -> bool {
        bits::test(self.tac as u32, 2)
            && bits::test(self.counter as u32, TAC_BITS[bits::clip(2, self.tac as u32) as usize])
    }

    /// Applies `change`, then bumps TIMA if it produced a falling edge.
    /// Returns whether TIMA overflowed.
    fn update(&mut self, change: impl FnOnce(&mut Self)) -> bool {
        let before = self.state();
        change(self);
        if !before || self.state() {
            return false;
        }
        if self.tima == 0xFF {
            self.tima = self.tma;
            true
        } else {
            self.tima += 1;
            false
        }
    }
}

impl Component for Timer {
    fn read(&self, address: u16) -> Option<u8> {
        match address {
            REG_DIV => Some(self.div()),
            REG_TIMA => Some(self.tima),
            REG_TMA => Some(self.tma),
            REG_TAC => Some(self.tac),
            _ => None,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        let overflowed = match address {
            REG_DIV => self.update(|timer| timer.counter = 0),
            REG_TAC => self.update(|timer| timer.tac = data),
            REG_TIMA => {
                self.tima = data;
                false
            }
            REG_TMA => {
                self.tma = data;
                false
            }
            _ => false,
        };
        self.overflow_pending |= overflowed;
    }
}
