//! Plain storage and the components that map it onto the bus.

mod boot_rom;
mod ram;
mod ram_controller;
mod rom;

pub use boot_rom::BootRomController;
pub use ram::Ram;
pub use ram_controller::RamController;
pub use rom::Rom;
