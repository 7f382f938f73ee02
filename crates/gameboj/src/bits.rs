//! Small bit-twiddling helpers shared by the CPU core and the peripherals.
//!
//! Everything here is a pure function. Bit indices and field sizes are
//! preconditions: passing an index outside the word panics instead of
//! silently masking it away.

/// Returns a word with only bit `index` set.
#[inline]
pub fn mask(index: u32) -> u32 {
    assert!(index < 32, "bit index {index} out of range");
    1 << index
}

#[inline]
pub fn test(bits: u32, index: u32) -> bool {
    bits & mask(index) != 0
}

/// Returns `bits` with bit `index` forced to `value`.
#[inline]
pub fn set(bits: u32, index: u32, value: bool) -> u32 {
    if value {
        bits | mask(index)
    } else {
        bits & !mask(index)
    }
}

/// Keeps the `size` low bits of `bits`.
#[inline]
pub fn clip(size: u32, bits: u32) -> u32 {
    assert!(size <= 32, "clip size {size} out of range");
    if size == 32 {
        bits
    } else {
        bits & (mask(size) - 1)
    }
}

/// Extracts the `size`-bit field starting at bit `start`.
#[inline]
pub fn extract(bits: u32, start: u32, size: u32) -> u32 {
    assert!(start + size <= 32, "field {start}+{size} out of range");
    if size == 0 {
        return 0;
    }
    clip(size, bits >> start)
}

/// Rotates the `size` low bits of `bits` by `distance` positions.
///
/// Positive distances rotate left, negative ones rotate right.
pub fn rotate(size: u32, bits: u32, distance: i32) -> u32 {
    assert!(size > 0 && size <= 32, "rotation size {size} out of range");
    let value = clip(size, bits);
    let d = distance.rem_euclid(size as i32) as u32;
    if d == 0 {
        return value;
    }
    clip(size, (value << d) | (value >> (size - d)))
}

/// Sign-extends an 8-bit two's complement value to 16 bits.
#[inline]
pub fn sign_extend8(b: u8) -> u16 {
    b as i8 as i16 as u16
}

/// Mirrors the bits of a byte (bit 0 becomes bit 7 and so on).
#[inline]
pub fn reverse8(b: u8) -> u8 {
    b.reverse_bits()
}

#[inline]
pub fn complement8(b: u8) -> u8 {
    !b
}

/// Builds a 16-bit word from its high and low bytes.
#[inline]
pub fn make16(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

#[inline]
pub fn msb8(value: u16) -> u8 {
    (value >> 8) as u8
}

#[inline]
pub fn lsb8(value: u16) -> u8 {
    value as u8
}
