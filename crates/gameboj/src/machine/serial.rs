use crate::address_map::{REG_SB, REG_SC};
use crate::component::Component;
use crate::cpu::{Interrupt, InterruptSink};

/// SC bits that start a transfer on the internal clock.
const START_INTERNAL: u8 = 0x81;
const TRANSFER_START: u8 = 0x80;

/// Serial port reduced to what test ROMs need: every byte sent on the
/// internal clock is captured in `output` and the transfer completes at
/// once.
///
/// Nothing is ever received; the interrupt for a finished transfer is
/// raised on the following machine cycle.
#[derive(Clone, Debug, Default)]
pub struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
    transfer_done: bool,
}

impl Serial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes sent so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Advances one machine cycle.
    pub fn cycle(&mut self, sink: &mut impl InterruptSink) {
        if std::mem::take(&mut self.transfer_done) {
            sink.request_interrupt(Interrupt::Serial);
        }
    }
}

impl Component for Serial {
    fn read(&self, address: u16) -> Option<u8> {
        match address {
            REG_SB => Some(self.sb),
            REG_SC => Some(self.sc),
            _ => None,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        match address {
            REG_SB => self.sb = data,
            REG_SC => {
                self.sc = data;
                if data & START_INTERNAL == START_INTERNAL {
                    self.output.push(self.sb);
                    log::trace!("GB serial out: 0x{:02X}", self.sb);
                    self.sc &= !TRANSFER_START;
                    self.transfer_done = true;
                }
            }
            _ => {}
        }
    }
}
