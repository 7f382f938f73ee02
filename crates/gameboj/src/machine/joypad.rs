use crate::address_map::REG_P1;
use crate::bits;
use crate::component::Component;
use crate::cpu::{Interrupt, InterruptSink};

/// Keys of the console, in P1 bit order within their line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Key {
    /// (line, bit) of the key. Line 0 is the directions, line 1 the
    /// buttons.
    #[inline]
    fn position(self) -> (usize, u32) {
        let index = self as u32;
        ((index / 4) as usize, index % 4)
    }
}

/// P1 bit that, when clear, selects each line.
const LINE_SELECT: [u32; 2] = [4, 5];

/// Joypad register P1 (0xFF00).
///
/// Bits 4 and 5 are written by the program to select the directions and
/// the buttons; the low nibble reads the selected lines, 0 meaning
/// pressed. Bits 6 and 7 always read 1.
#[derive(Clone, Debug)]
pub struct Joypad {
    /// Released keys per line, one bit per key, 1 meaning released.
    lines: [u8; 2],
    select: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            lines: [0x0F; 2],
            select: 0x30,
        }
    }
}

impl Joypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held. Pressing a released key requests JOYPAD.
    pub fn key_pressed(&mut self, key: Key, sink: &mut impl InterruptSink) {
        let (line, bit) = key.position();
        if bits::test(self.lines[line] as u32, bit) {
            sink.request_interrupt(Interrupt::Joypad);
        }
        self.lines[line] = bits::set(self.lines[line] as u32, bit, false) as u8;
    }

    pub fn key_released(&mut self, key: Key) {
        let (line, bit) = key.position();
        self.lines[line] = bits::set(self.lines[line] as u32, bit, true) as u8;
    }

    fn p1(&self) -> u8 {
        let low = LINE_SELECT
            .iter()
            .zip(self.lines)
            .filter(|(select, _)| !bits::test(self.select as u32, **select))
            .fold(0x0F, |low, (_, line)| low & line);
        0xC0 | self.select | low
    }
}

impl Component for Joypad {
    fn read(&self, address: u16) -> Option<u8> {
        (address == REG_P1).then(|| self.p1())
    }

    fn write(&mut self, address: u16, data: u8) {
        if address == REG_P1 {
            // Only the selection bits are writable.
            self.select = data & 0x30;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{Cpu, Interrupts};

    #[test]
    fn nothing_selected_reads_all_ones() {
        let mut joypad = Joypad::new();
        let mut cpu = Cpu::new();
        joypad.key_pressed(Key::Start, &mut cpu);
        assert_eq!(joypad.read(REG_P1), Some(0xFF));
        assert_eq!(joypad.read(0xFF01), None);
    }

    #[test]
    fn selected_line_shows_pressed_keys_as_zero() {
        let mut joypad = Joypad::new();
        let mut cpu = Cpu::new();
        joypad.key_pressed(Key::Down, &mut cpu);
        joypad.key_pressed(Key::A, &mut cpu);

        joypad.write(REG_P1, 0x20);
        assert_eq!(joypad.read(REG_P1), Some(0xE7));

        joypad.write(REG_P1, 0x10);
        assert_eq!(joypad.read(REG_P1), Some(0xDE));

        joypad.write(REG_P1, 0x00);
        assert_eq!(joypad.read(REG_P1), Some(0xC6));

        joypad.key_released(Key::Down);
        joypad.write(REG_P1, 0x20);
        assert_eq!(joypad.read(REG_P1), Some(0xEF));
    }

    #[test]
    fn only_new_presses_interrupt() {
        let mut joypad = Joypad::new();
        let mut cpu = Cpu::new();
        joypad.key_pressed(Key::B, &mut cpu);
        assert_eq!(cpu.interrupt_flags(), Interrupts::JOYPAD);

        Component::write(&mut cpu, crate::address_map::REG_IF, 0);
        joypad.key_pressed(Key::B, &mut cpu);
        assert!(cpu.interrupt_flags().is_empty());

        joypad.key_released(Key::B);
        joypad.key_pressed(Key::B, &mut cpu);
        assert_eq!(cpu.interrupt_flags(), Interrupts::JOYPAD);
    }
}
