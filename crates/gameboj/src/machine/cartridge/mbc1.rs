use crate::address_map::CARTRIDGE_ROM_END;
use crate::bits;
use crate::component::Component;
use crate::error::CartridgeError;
use crate::memory::{Ram, Rom};

/// Value written to 0x0000..0x1FFF (low nibble) that enables external RAM.
const RAM_ENABLE: u8 = 0x0A;
const MIN_ROM_SIZE: usize = CARTRIDGE_ROM_END as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BankingMode {
    /// The two upper bits only apply to the switchable ROM bank.
    Rom,
    /// The two upper bits also select the fixed ROM bank and the RAM bank.
    Ram,
}

/// MBC1 bank controller.
///
/// Registers (selected by address bits 13..15 of a write below 0x8000):
/// - 0x0000..0x1FFF: RAM enable
/// - 0x2000..0x3FFF: low 5 bits of the ROM bank (0 reads as 1)
/// - 0x4000..0x5FFF: 2 upper bits (ROM bank bits 5..6 or RAM bank)
/// - 0x6000..0x7FFF: banking mode
#[derive(Debug)]
pub struct Mbc1 {
    rom: Rom,
    ram: Ram,
    ram_enabled: bool,
    mode: BankingMode,
    rom_lsb5: u32,
    ram_rom2: u32,
    rom_mask: usize,
    ram_mask: usize,
}

impl Mbc1 {
    pub fn new(rom: Rom, ram_size: usize) -> Result<Self, CartridgeError> {
        let size = rom.size();
        if size < MIN_ROM_SIZE || !size.is_power_of_two() {
            return Err(CartridgeError::BadRomSize {
                expected: size.next_power_of_two().max(MIN_ROM_SIZE),
                actual: size,
            });
        }

        Ok(Self {
            rom,
            ram: Ram::new(ram_size),
            ram_enabled: false,
            mode: BankingMode::Rom,
            rom_lsb5: 1,
            ram_rom2: 0,
            rom_mask: size - 1,
            ram_mask: ram_size.saturating_sub(1),
        })
    }

    fn msb2(&self) -> u32 {
        match self.mode {
            BankingMode::Rom => 0,
            BankingMode::Ram => self.ram_rom2,
        }
    }

    fn rom_address(&self, b20_19: u32, b18_14: u32, address: u16) -> usize {
        let offset = bits::clip(14, address as u32);
        ((b20_19 << 19) | (b18_14 << 14) | offset) as usize & self.rom_mask
    }

    fn ram_address(&self, address: u16) -> usize {
        let offset = bits::clip(13, address as u32);
        ((self.msb2() << 13) | offset) as usize & self.ram_mask
    }

    fn ram_accessible(&self) -> bool {
        self.ram_enabled && self.ram.size() > 0
    }
}

impl Component for Mbc1 {
    fn read(&self, address: u16) -> Option<u8> {
        match bits::extract(address as u32, 13, 3) {
            0 | 1 => Some(self.rom.read(self.rom_address(self.msb2(), 0, address))),
            2 | 3 => Some(
                self.rom
                    .read(self.rom_address(self.ram_rom2, self.rom_lsb5, address)),
            ),
            5 if self.ram_accessible() => Some(self.ram.read(self.ram_address(address))),
            5 => Some(0xFF),
            _ => None,
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        match bits::extract(address as u32, 13, 3) {
            0 => self.ram_enabled = bits::clip(4, data as u32) as u8 == RAM_ENABLE,
            1 => self.rom_lsb5 = bits::clip(5, data as u32).max(1),
            2 => self.ram_rom2 = bits::clip(2, data as u32),
            3 => {
                self.mode = if bits::test(data as u32, 0) {
                    BankingMode::Ram
                } else {
                    BankingMode::Rom
                }
            }
            5 if self.ram_accessible() => {
                let index = self.ram_address(address);
                self.ram.write(index, data);
            }
            _ => {}
        }
    }
}
