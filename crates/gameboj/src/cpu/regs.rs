use bitflags::bitflags;

use crate::bits;

/// 8-bit registers of the LR35902.
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space. The
/// discriminant is the cell index inside the [`RegisterFile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg {
    A = 0,
    F = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    H = 6,
    L = 7,
}

impl Reg {
    pub const COUNT: usize = 8;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Register pairs, high register first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
}

impl Reg16 {
    #[inline]
    pub fn halves(self) -> (Reg, Reg) {
        match self {
            Reg16::AF => (Reg::A, Reg::F),
            Reg16::BC => (Reg::B, Reg::C),
            Reg16::DE => (Reg::D, Reg::E),
            Reg16::HL => (Reg::H, Reg::L),
        }
    }
}

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

impl Flags {
    /// Packs four booleans into a flag set.
    #[inline]
    pub fn znhc(z: bool, n: bool, h: bool, c: bool) -> Self {
        let mut flags = Flags::empty();
        flags.set(Flags::Z, z);
        flags.set(Flags::N, n);
        flags.set(Flags::H, h);
        flags.set(Flags::C, c);
        flags
    }
}

/// The eight 8-bit CPU registers, stored as a fixed array indexed by
/// [`Reg`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    cells: [u8; Reg::COUNT],
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, reg: Reg) -> u8 {
        self.cells[reg.index()]
    }

    /// Stores `value` into `reg`.
    ///
    /// Writes to F drop the low nibble, which does not exist in hardware.
    #[inline]
    pub fn set(&mut self, reg: Reg, value: u8) {
        let value = if reg == Reg::F { value & 0xF0 } else { value };
        self.cells[reg.index()] = value;
    }

    #[inline]
    pub fn test_bit(&self, reg: Reg, index: u32) -> bool {
        assert!(index < 8, "bit index {index} out of range for an 8-bit register");
        bits::test(self.get(reg) as u32, index)
    }

    #[inline]
    pub fn set_bit(&mut self, reg: Reg, index: u32, value: bool) {
        assert!(index < 8, "bit index {index} out of range for an 8-bit register");
        let bits = bits::set(self.get(reg) as u32, index, value);
        self.set(reg, bits as u8);
    }

    pub fn reset(&mut self) {
        self.cells = [0; Reg::COUNT];
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.get(Reg::F))
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.set(Reg::F, flags.bits());
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn get16(&self, pair: Reg16) -> u16 {
        let (high, low) = pair.halves();
        bits::make16(self.get(high), self.get(low))
    }

    #[inline]
    pub fn set16(&mut self, pair: Reg16, value: u16) {
        let (high, low) = pair.halves();
        self.set(high, bits::msb8(value));
        // Lower 4 bits of F are always zero; `set` takes care of that.
        self.set(low, bits::lsb8(value));
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.get16(Reg16::AF)
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.get16(Reg16::BC)
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.get16(Reg16::DE)
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.get16(Reg16::HL)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.set16(Reg16::HL, value)
    }
}
