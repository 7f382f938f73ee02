//! Fixed DMG address map.
//!
//! Components decide whether an address is theirs by comparing against these
//! constants; ranges are half-open (`START..END`).

pub const BOOT_ROM_START: u16 = 0x0000;
pub const BOOT_ROM_END: u16 = 0x0100;
pub const BOOT_ROM_SIZE: usize = (BOOT_ROM_END - BOOT_ROM_START) as usize;

pub const CARTRIDGE_ROM_START: u16 = 0x0000;
pub const CARTRIDGE_ROM_END: u16 = 0x8000;

pub const VIDEO_RAM_START: u16 = 0x8000;
pub const VIDEO_RAM_END: u16 = 0xA000;
pub const VIDEO_RAM_SIZE: usize = (VIDEO_RAM_END - VIDEO_RAM_START) as usize;

pub const CARTRIDGE_RAM_START: u16 = 0xA000;
pub const CARTRIDGE_RAM_END: u16 = 0xC000;

pub const WORK_RAM_START: u16 = 0xC000;
pub const WORK_RAM_END: u16 = 0xE000;
pub const WORK_RAM_SIZE: usize = (WORK_RAM_END - WORK_RAM_START) as usize;

pub const ECHO_RAM_START: u16 = 0xE000;
pub const ECHO_RAM_END: u16 = 0xFE00;

pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFEA0;
pub const OAM_SIZE: usize = (OAM_END - OAM_START) as usize;

pub const REGS_START: u16 = 0xFF00;

pub const REG_P1: u16 = 0xFF00;
pub const REG_SB: u16 = 0xFF01;
pub const REG_SC: u16 = 0xFF02;

pub const REG_DIV: u16 = 0xFF04;
pub const REG_TIMA: u16 = 0xFF05;
pub const REG_TMA: u16 = 0xFF06;
pub const REG_TAC: u16 = 0xFF07;

pub const REG_IF: u16 = 0xFF0F;

pub const REGS_LCDC_START: u16 = 0xFF40;
pub const REGS_LCDC_END: u16 = 0xFF4C;

pub const REG_LCDC: u16 = 0xFF40;
pub const REG_STAT: u16 = 0xFF41;
pub const REG_SCY: u16 = 0xFF42;
pub const REG_SCX: u16 = 0xFF43;
pub const REG_LY: u16 = 0xFF44;
pub const REG_LYC: u16 = 0xFF45;
pub const REG_DMA: u16 = 0xFF46;
pub const REG_BGP: u16 = 0xFF47;
pub const REG_OBP0: u16 = 0xFF48;
pub const REG_OBP1: u16 = 0xFF49;
pub const REG_WY: u16 = 0xFF4A;
pub const REG_WX: u16 = 0xFF4B;

pub const REG_BOOT_ROM_DISABLE: u16 = 0xFF50;

pub const HIGH_RAM_START: u16 = 0xFF80;
pub const HIGH_RAM_END: u16 = 0xFFFF;
pub const HIGH_RAM_SIZE: usize = (HIGH_RAM_END - HIGH_RAM_START) as usize;

pub const REG_IE: u16 = 0xFFFF;

/// Interrupt handler addresses, indexed by interrupt priority.
pub const INTERRUPTS: [u16; 5] = [0x0040, 0x0048, 0x0050, 0x0058, 0x0060];

/// `RST n` targets, indexed by the 3-bit field of the opcode.
pub const RESETS: [u16; 8] = [0x00, 0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38];
