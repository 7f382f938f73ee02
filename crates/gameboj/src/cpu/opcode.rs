//! Opcode descriptors and the two 256-entry decode tables.

mod table;

use lazy_static::lazy_static;

use table::{DIRECT_OPCODES, PREFIXED_OPCODES};

/// Byte that selects the prefixed (bit/rotate/shift) instruction page.
pub const PREFIX: u8 = 0xCB;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Direct,
    Prefixed,
}

/// Instruction families sharing one dispatch rule.
///
/// Naming: `R8` an 8-bit register operand, `Hlr` the byte at (HL), `N8`/`N16`
/// an immediate, `N8r`/`N16r`/`Cr` memory at an immediate or at `0xFF00+C`,
/// `R16Sp` a register pair where the fourth encoding means SP, `Cc` a
/// condition, `U3` a 3-bit field of the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Nop,

    // Loads.
    LdR8Hlr,
    LdAHlru,
    LdAN8r,
    LdACr,
    LdAN16r,
    LdABcr,
    LdADer,
    LdR8N8,
    LdR16SpN16,
    PopR16,

    // Stores.
    LdHlrR8,
    LdHlruA,
    LdN8rA,
    LdCrA,
    LdN16rA,
    LdBcrA,
    LdDerA,
    LdHlrN8,
    LdN16rSp,
    PushR16,
    LdR8R8,
    LdSpHl,

    // Additions. ADC shares the ADD families, bit 3 selects the carry.
    AddAR8,
    AddAN8,
    AddAHlr,
    IncR8,
    IncHlr,
    IncR16Sp,
    AddHlR16Sp,
    /// `ADD SP,e8` and `LD HL,SP+e8`; bit 4 selects the destination.
    LdHlSpS8,

    // Subtractions and compares. SBC shares the SUB families.
    SubAR8,
    SubAN8,
    SubAHlr,
    DecR8,
    DecHlr,
    CpAR8,
    CpAN8,
    CpAHlr,
    DecR16Sp,

    // Bitwise.
    AndAN8,
    AndAR8,
    AndAHlr,
    OrAR8,
    OrAN8,
    OrAHlr,
    XorAR8,
    XorAN8,
    XorAHlr,
    Cpl,

    // Rotations and shifts. Bit 3 selects the direction of rotations.
    Rotca,
    Rota,
    RotcR8,
    RotR8,
    RotcHlr,
    RotHlr,
    SwapR8,
    SwapHlr,
    SlaR8,
    SraR8,
    SrlR8,
    SlaHlr,
    SraHlr,
    SrlHlr,

    // Bit test, reset and set. Bit 6 selects SET over RES.
    BitU3R8,
    BitU3Hlr,
    ChgU3R8,
    ChgU3Hlr,

    // Misc ALU.
    Daa,
    /// `SCF` and `CCF`; bit 3 selects CCF.
    Sccf,

    // Jumps.
    JpHl,
    JpN16,
    JpCcN16,
    JrE8,
    JrCcE8,

    // Calls and returns.
    CallN16,
    CallCcN16,
    RstU3,
    Ret,
    RetCc,

    // Interrupts. Bit 3 selects EI over DI.
    Edi,
    Reti,

    // Misc control.
    Halt,
    Stop,
}

/// Static description of one instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub encoding: u8,
    pub family: Family,
    pub mnemonic: &'static str,
    /// Length including the prefix byte for prefixed instructions.
    pub total_bytes: u8,
    /// Machine cycles charged every time.
    pub cycles: u8,
    /// Machine cycles added when a conditional jump, call or return is taken.
    pub additional_cycles: u8,
    pub kind: Kind,
}

impl Opcode {
    const fn direct(
        encoding: u8,
        family: Family,
        mnemonic: &'static str,
        total_bytes: u8,
        cycles: u8,
        additional_cycles: u8,
    ) -> Self {
        Self {
            encoding,
            family,
            mnemonic,
            total_bytes,
            cycles,
            additional_cycles,
            kind: Kind::Direct,
        }
    }

    /// Prefixed encodings are all two bytes long on the wire (`CB xx`); the
    /// listed length covers the second byte only and the prefix is added
    /// here.
    const fn prefixed(
        encoding: u8,
        family: Family,
        mnemonic: &'static str,
        total_bytes: u8,
        cycles: u8,
        additional_cycles: u8,
    ) -> Self {
        Self {
            encoding,
            family,
            mnemonic,
            total_bytes: total_bytes + 1,
            cycles,
            additional_cycles,
            kind: Kind::Prefixed,
        }
    }
}

type OpcodeTable = [Option<&'static Opcode>; 256];

fn build_table(kind: Kind) -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];
    for opcode in DIRECT_OPCODES.iter().chain(PREFIXED_OPCODES.iter()) {
        if opcode.kind != kind {
            continue;
        }
        let slot = &mut table[opcode.encoding as usize];
        assert!(
            slot.is_none(),
            "duplicate {:?} opcode 0x{:02X}",
            kind,
            opcode.encoding
        );
        *slot = Some(opcode);
    }
    table
}

lazy_static! {
    static ref DIRECT_TABLE: OpcodeTable = build_table(Kind::Direct);
    static ref PREFIXED_TABLE: OpcodeTable = build_table(Kind::Prefixed);
}

/// Looks up an unprefixed encoding. Opcode holes return `None`.
#[inline]
pub fn direct(encoding: u8) -> Option<&'static Opcode> {
    DIRECT_TABLE[encoding as usize]
}

/// Looks up the byte that follows a [`PREFIX`].
#[inline]
pub fn prefixed(encoding: u8) -> Option<&'static Opcode> {
    PREFIXED_TABLE[encoding as usize]
}
