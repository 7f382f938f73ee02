use std::error::Error;
use std::fmt;

/// Fatal conditions raised while the CPU dispatches an instruction.
///
/// The engine is deterministic, so every one of these points at either a
/// broken program or hardware the core does not model. Nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `pc` is one of the unmapped opcode holes.
    InvalidOpcode { encoding: u8, pc: u16 },
    /// The instruction exists but is deliberately not emulated.
    Unsupported { mnemonic: &'static str, pc: u16 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::InvalidOpcode { encoding, pc } => {
                write!(f, "invalid opcode 0x{encoding:02X} at 0x{pc:04X}")
            }
            CpuError::Unsupported { mnemonic, pc } => {
                write!(f, "unsupported instruction {mnemonic} at 0x{pc:04X}")
            }
        }
    }
}

impl Error for CpuError {}

/// Problems found in a ROM image while building a [`Cartridge`](crate::Cartridge).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartridgeError {
    /// The image is too small to contain a header.
    TooShort { len: usize },
    /// Header byte 0x147 names a controller that is not emulated.
    UnknownType { code: u8 },
    /// The image size does not suit the selected controller.
    BadRomSize { expected: usize, actual: usize },
    /// Header byte 0x149 is not one of the known RAM size codes.
    BadRamSize { code: u8 },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::TooShort { len } => {
                write!(f, "ROM image of {len} bytes has no cartridge header")
            }
            CartridgeError::UnknownType { code } => {
                write!(f, "unsupported cartridge type 0x{code:02X}")
            }
            CartridgeError::BadRomSize { expected, actual } => {
                write!(f, "ROM image has {actual} bytes, expected {expected}")
            }
            CartridgeError::BadRamSize { code } => {
                write!(f, "unknown external RAM size code 0x{code:02X}")
            }
        }
    }
}

impl Error for CartridgeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_addresses_in_hex() {
        let err = CpuError::InvalidOpcode {
            encoding: 0xD3,
            pc: 0x0150,
        };
        assert_eq!(err.to_string(), "invalid opcode 0xD3 at 0x0150");

        let err = CpuError::Unsupported {
            mnemonic: "STOP",
            pc: 0x0200,
        };
        assert_eq!(err.to_string(), "unsupported instruction STOP at 0x0200");
    }

    #[test]
    fn cartridge_errors_describe_the_header() {
        assert_eq!(
            CartridgeError::UnknownType { code: 0x13 }.to_string(),
            "unsupported cartridge type 0x13"
        );
        assert_eq!(
            CartridgeError::BadRamSize { code: 0x05 }.to_string(),
            "unknown external RAM size code 0x05"
        );
    }
}
