//! The console: CPU, bus and the peripherals wired the DMG way.

mod cartridge;
mod gameboy;
mod joypad;
mod lcd;
mod serial;
mod timer;

pub use cartridge::{Cartridge, Mbc0, Mbc1, HEADER_RAM_SIZE, HEADER_TYPE};
pub use gameboy::{GameBoy, MachineConfig};
pub use joypad::{Joypad, Key};
pub use lcd::{Lcd, Mode};
pub use serial::Serial;
pub use timer::Timer;

/// Raw clock ticks per second; the CPU runs one machine cycle every 4.
pub const CLOCK_FREQ: u64 = 1 << 22;

/// Raw clock ticks per machine cycle.
pub const TICKS_PER_CYCLE: u64 = 4;
