use crate::address_map::{BOOT_ROM_END, BOOT_ROM_SIZE, REG_BOOT_ROM_DISABLE};
use crate::machine::Cartridge;
use crate::component::Component;

use super::Rom;

/// Overlays the boot ROM on the start of the cartridge until the program
/// writes to 0xFF50.
///
/// The cartridge is reached only through this controller; every access
/// the overlay does not claim is forwarded to it.
#[derive(Debug)]
pub struct BootRomController {
    boot_rom: Option<Rom>,
    cartridge: Cartridge,
}

impl BootRomController {
    /// Panics if `boot_rom` is not exactly 256 bytes long. Passing `None`
    /// starts with the overlay already unmapped.
    pub fn new(boot_rom: Option<Rom>, cartridge: Cartridge) -> Self {
        if let Some(rom) = &boot_rom {
            assert_eq!(
                rom.size(),
                BOOT_ROM_SIZE,
                "boot ROM must be {BOOT_ROM_SIZE} bytes"
            );
        }
        Self {
            boot_rom,
            cartridge,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.boot_rom.is_some()
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

impl Component for BootRomController {
    fn read(&self, address: u16) -> Option<u8> {
        match &self.boot_rom {
            Some(rom) if address < BOOT_ROM_END => Some(rom.read(address as usize)),
            _ => self.cartridge.read(address),
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        if address == REG_BOOT_ROM_DISABLE && self.boot_rom.take().is_some() {
            log::debug!("GB boot ROM unmapped (wrote 0x{data:02X} to 0xFF50)");
        }
        self.cartridge.write(address, data);
    }
}
