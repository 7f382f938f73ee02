pub mod address_map;
pub mod bits;
pub mod bus;
pub mod component;
pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use bus::Bus;
pub use component::Component;
pub use cpu::{AddressSpace, Cpu, Interrupt, InterruptSink, Interrupts, Schedule};
pub use error::{CartridgeError, CpuError};
pub use machine::{Cartridge, GameBoy, Key, MachineConfig, CLOCK_FREQ};
