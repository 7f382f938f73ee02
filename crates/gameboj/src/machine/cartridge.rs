mod mbc0;
mod mbc1;

pub use mbc0::Mbc0;
pub use mbc1::Mbc1;

use crate::component::Component;
use crate::error::CartridgeError;
use crate::memory::Rom;

/// Header offset of the cartridge (controller) type byte.
pub const HEADER_TYPE: usize = 0x147;
/// Header offset of the external RAM size code.
pub const HEADER_RAM_SIZE: usize = 0x149;

/// External RAM sizes indexed by the header RAM size code.
const RAM_SIZES: [usize; 4] = [0, 2048, 8192, 32768];

/// A game cartridge: ROM image plus its memory bank controller.
#[derive(Debug)]
pub enum Cartridge {
    Mbc0(Mbc0),
    Mbc1(Mbc1),
}

impl Cartridge {
    /// Builds a cartridge from a raw ROM image, picking the controller from
    /// the header.
    pub fn from_rom(data: Vec<u8>) -> Result<Self, CartridgeError> {
        if data.len() <= HEADER_RAM_SIZE {
            return Err(CartridgeError::TooShort { len: data.len() });
        }

        let kind = data[HEADER_TYPE];
        let ram_code = data[HEADER_RAM_SIZE];
        let cartridge = match kind {
            0x00 => Cartridge::Mbc0(Mbc0::new(Rom::from(data))?),
            0x01..=0x03 => {
                let ram_size = *RAM_SIZES
                    .get(ram_code as usize)
                    .ok_or(CartridgeError::BadRamSize { code: ram_code })?;
                Cartridge::Mbc1(Mbc1::new(Rom::from(data), ram_size)?)
            }
            code => return Err(CartridgeError::UnknownType { code }),
        };

        log::info!(
            "GB cartridge loaded: type=0x{kind:02X} ram_code=0x{ram_code:02X} ({})",
            cartridge.describe()
        );
        Ok(cartridge)
    }

    fn describe(&self) -> &'static str {
        match self {
            Cartridge::Mbc0(_) => "no MBC",
            Cartridge::Mbc1(_) => "MBC1",
        }
    }
}

impl Component for Cartridge {
    fn read(&self, address: u16) -> Option<u8> {
        match self {
            Cartridge::Mbc0(m) => m.read(address),
            Cartridge::Mbc1(m) => m.read(address),
        }
    }

    fn write(&mut self, address: u16, data: u8) {
        match self {
            Cartridge::Mbc0(m) => m.write(address, data),
            Cartridge::Mbc1(m) => m.write(address, data),
        }
    }
}
