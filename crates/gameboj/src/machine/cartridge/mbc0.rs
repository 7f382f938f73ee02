use crate::address_map::{CARTRIDGE_ROM_END, CARTRIDGE_ROM_START};
use crate::component::Component;
use crate::error::CartridgeError;
use crate::memory::Rom;

const ROM_SIZE: usize = (CARTRIDGE_ROM_END - CARTRIDGE_ROM_START) as usize;

/// Cartridge without a bank controller: 32 KiB of ROM mapped flat.
#[derive(Debug)]
pub struct Mbc0 {
    rom: Rom,
}

impl Mbc0 {
    pub fn new(rom: Rom) -> Result<Self, CartridgeError> {
        if rom.size() != ROM_SIZE {
            return Err(CartridgeError::BadRomSize {
                expected: ROM_SIZE,
                actual: rom.size(),
            });
        }
        Ok(Self { rom })
    }
}

impl Component for Mbc0 {
    fn read(&self, address: u16) -> Option<u8> {
        (address < CARTRIDGE_ROM_END).then(|| self.rom.read(address as usize))
    }

    fn write(&mut self, _address: u16, _data: u8) {}
}
