//! Arithmetic and logic unit.
//!
//! Every operation is a pure function returning the computed value together
//! with the Z, N, H and C flags it produced. The engine then decides, per
//! instruction family, which of these flags actually reach the F register.

use super::Flags;
use crate::bits;

/// Result of an ALU operation: an 8- or 16-bit value and its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueFlags {
    pub value: u16,
    pub flags: Flags,
}

impl ValueFlags {
    #[inline]
    pub fn new(value: u16, z: bool, n: bool, h: bool, c: bool) -> Self {
        Self {
            value,
            flags: Flags::znhc(z, n, h, c),
        }
    }

    /// Low byte of the value, for 8-bit operations.
    #[inline]
    pub fn value8(&self) -> u8 {
        self.value as u8
    }

    #[inline]
    pub fn z(&self) -> bool {
        self.flags.contains(Flags::Z)
    }

    #[inline]
    pub fn n(&self) -> bool {
        self.flags.contains(Flags::N)
    }

    #[inline]
    pub fn h(&self) -> bool {
        self.flags.contains(Flags::H)
    }

    #[inline]
    pub fn c(&self) -> bool {
        self.flags.contains(Flags::C)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotDir {
    Left,
    Right,
}

/// 8-bit ADD/ADC.
pub fn add(l: u8, r: u8, carry: bool) -> ValueFlags {
    let c = carry as u16;
    let full = l as u16 + r as u16 + c;
    let half = (l & 0x0F) as u16 + (r & 0x0F) as u16 + c;
    let value = full as u8;
    ValueFlags::new(value as u16, value == 0, false, half > 0x0F, full > 0xFF)
}

/// 16-bit add whose H and C come from the low byte (bits 3 and 7).
///
/// Used by `ADD SP,e8` and `LD HL,SP+e8`.
pub fn add16_low(l: u16, r: u16) -> ValueFlags {
    let value = l.wrapping_add(r);
    let h = (l & 0x000F) + (r & 0x000F) > 0x000F;
    let c = (l & 0x00FF) + (r & 0x00FF) > 0x00FF;
    ValueFlags::new(value, false, false, h, c)
}

/// 16-bit add whose H and C come from the high byte (bits 11 and 15),
/// taking the carry out of the low byte into account.
///
/// Used by `ADD HL,rr`.
pub fn add16_high(l: u16, r: u16) -> ValueFlags {
    let value = l.wrapping_add(r);
    let low_carry = ((l & 0x00FF) + (r & 0x00FF) > 0x00FF) as u16;
    let (lh, rh) = (l >> 8, r >> 8);
    let h = (lh & 0x0F) + (rh & 0x0F) + low_carry > 0x0F;
    let c = lh + rh + low_carry > 0xFF;
    ValueFlags::new(value, false, false, h, c)
}

/// 8-bit SUB/SBC (and CP, which discards the value).
pub fn sub(l: u8, r: u8, borrow: bool) -> ValueFlags {
    let b = borrow as u16;
    let value = (l as u16).wrapping_sub(r as u16).wrapping_sub(b) as u8;
    let h = (r & 0x0F) as u16 + b > (l & 0x0F) as u16;
    let c = r as u16 + b > l as u16;
    ValueFlags::new(value as u16, value == 0, true, h, c)
}

/// Decimal adjust after a BCD addition (`n` clear) or subtraction (`n` set).
pub fn bcd_adjust(v: u8, n: bool, h: bool, c: bool) -> ValueFlags {
    let fix_low = h || (!n && (v & 0x0F) > 0x09);
    let fix_high = c || (!n && v > 0x99);
    let fix = 0x60 * fix_high as u8 + 0x06 * fix_low as u8;
    let value = if n {
        v.wrapping_sub(fix)
    } else {
        v.wrapping_add(fix)
    };
    ValueFlags::new(value as u16, value == 0, n, false, fix_high)
}

pub fn and(l: u8, r: u8) -> ValueFlags {
    let value = l & r;
    ValueFlags::new(value as u16, value == 0, false, true, false)
}

pub fn or(l: u8, r: u8) -> ValueFlags {
    let value = l | r;
    ValueFlags::new(value as u16, value == 0, false, false, false)
}

pub fn xor(l: u8, r: u8) -> ValueFlags {
    let value = l ^ r;
    ValueFlags::new(value as u16, value == 0, false, false, false)
}

/// SLA: bit 7 goes to C, bit 0 becomes 0.
pub fn shift_left(v: u8) -> ValueFlags {
    let value = v << 1;
    ValueFlags::new(value as u16, value == 0, false, false, v & 0x80 != 0)
}

/// SRA: bit 0 goes to C, bit 7 is preserved.
pub fn shift_right_arithmetic(v: u8) -> ValueFlags {
    let value = ((v as i8) >> 1) as u8;
    ValueFlags::new(value as u16, value == 0, false, false, v & 0x01 != 0)
}

/// SRL: bit 0 goes to C, bit 7 becomes 0.
pub fn shift_right_logical(v: u8) -> ValueFlags {
    let value = v >> 1;
    ValueFlags::new(value as u16, value == 0, false, false, v & 0x01 != 0)
}

/// 8-bit rotation; the bit that wraps around is also copied to C.
pub fn rotate(dir: RotDir, v: u8) -> ValueFlags {
    let (value, carry) = match dir {
        RotDir::Left => (v.rotate_left(1), v & 0x80 != 0),
        RotDir::Right => (v.rotate_right(1), v & 0x01 != 0),
    };
    ValueFlags::new(value as u16, value == 0, false, false, carry)
}

/// 9-bit rotation through the carry flag.
pub fn rotate_through_carry(dir: RotDir, v: u8, carry: bool) -> ValueFlags {
    let wide = ((carry as u32) << 8) | v as u32;
    let distance = match dir {
        RotDir::Left => 1,
        RotDir::Right => -1,
    };
    let rotated = bits::rotate(9, wide, distance);
    let value = rotated as u8;
    ValueFlags::new(value as u16, value == 0, false, false, bits::test(rotated, 8))
}

/// Exchanges the two nibbles of `v`.
pub fn swap(v: u8) -> ValueFlags {
    let value = v.rotate_left(4);
    ValueFlags::new(value as u16, value == 0, false, false, false)
}

/// BIT: Z is set when bit `index` of `v` is clear.
///
/// C is always reported as 0; the caller keeps its previous value.
pub fn test_bit(v: u8, index: u32) -> ValueFlags {
    assert!(index < 8, "bit index {index} out of range");
    ValueFlags::new(0, !bits::test(v as u32, index), false, true, false)
}
