//! Descriptor lists for every documented LR35902 instruction.
//!
//! Columns: encoding, family, mnemonic, length in bytes, machine cycles,
//! extra machine cycles when a conditional branch is taken.

use super::Family::*;
use super::Opcode;

pub(super) static DIRECT_OPCODES: [Opcode; 244] = [
    Opcode::direct(0x00, Nop, "NOP", 1, 1, 0),
    Opcode::direct(0x01, LdR16SpN16, "LD BC,n16", 3, 3, 0),
    Opcode::direct(0x02, LdBcrA, "LD (BC),A", 1, 2, 0),
    Opcode::direct(0x03, IncR16Sp, "INC BC", 1, 2, 0),
    Opcode::direct(0x04, IncR8, "INC B", 1, 1, 0),
    Opcode::direct(0x05, DecR8, "DEC B", 1, 1, 0),
    Opcode::direct(0x06, LdR8N8, "LD B,n8", 2, 2, 0),
    Opcode::direct(0x07, Rotca, "RLCA", 1, 1, 0),
    Opcode::direct(0x08, LdN16rSp, "LD (n16),SP", 3, 5, 0),
    Opcode::direct(0x09, AddHlR16Sp, "ADD HL,BC", 1, 2, 0),
    Opcode::direct(0x0A, LdABcr, "LD A,(BC)", 1, 2, 0),
    Opcode::direct(0x0B, DecR16Sp, "DEC BC", 1, 2, 0),
    Opcode::direct(0x0C, IncR8, "INC C", 1, 1, 0),
    Opcode::direct(0x0D, DecR8, "DEC C", 1, 1, 0),
    Opcode::direct(0x0E, LdR8N8, "LD C,n8", 2, 2, 0),
    Opcode::direct(0x0F, Rotca, "RRCA", 1, 1, 0),
    Opcode::direct(0x10, Stop, "STOP", 2, 1, 0),
    Opcode::direct(0x11, LdR16SpN16, "LD DE,n16", 3, 3, 0),
    Opcode::direct(0x12, LdDerA, "LD (DE),A", 1, 2, 0),
    Opcode::direct(0x13, IncR16Sp, "INC DE", 1, 2, 0),
    Opcode::direct(0x14, IncR8, "INC D", 1, 1, 0),
    Opcode::direct(0x15, DecR8, "DEC D", 1, 1, 0),
    Opcode::direct(0x16, LdR8N8, "LD D,n8", 2, 2, 0),
    Opcode::direct(0x17, Rota, "RLA", 1, 1, 0),
    Opcode::direct(0x18, JrE8, "JR e8", 2, 3, 0),
    Opcode::direct(0x19, AddHlR16Sp, "ADD HL,DE", 1, 2, 0),
    Opcode::direct(0x1A, LdADer, "LD A,(DE)", 1, 2, 0),
    Opcode::direct(0x1B, DecR16Sp, "DEC DE", 1, 2, 0),
    Opcode::direct(0x1C, IncR8, "INC E", 1, 1, 0),
    Opcode::direct(0x1D, DecR8, "DEC E", 1, 1, 0),
    Opcode::direct(0x1E, LdR8N8, "LD E,n8", 2, 2, 0),
    Opcode::direct(0x1F, Rota, "RRA", 1, 1, 0),
    Opcode::direct(0x20, JrCcE8, "JR NZ,e8", 2, 2, 1),
    Opcode::direct(0x21, LdR16SpN16, "LD HL,n16", 3, 3, 0),
    Opcode::direct(0x22, LdHlruA, "LD (HL+),A", 1, 2, 0),
    Opcode::direct(0x23, IncR16Sp, "INC HL", 1, 2, 0),
    Opcode::direct(0x24, IncR8, "INC H", 1, 1, 0),
    Opcode::direct(0x25, DecR8, "DEC H", 1, 1, 0),
    Opcode::direct(0x26, LdR8N8, "LD H,n8", 2, 2, 0),
    Opcode::direct(0x27, Daa, "DAA", 1, 1, 0),
    Opcode::direct(0x28, JrCcE8, "JR Z,e8", 2, 2, 1),
    Opcode::direct(0x29, AddHlR16Sp, "ADD HL,HL", 1, 2, 0),
    Opcode::direct(0x2A, LdAHlru, "LD A,(HL+)", 1, 2, 0),
    Opcode::direct(0x2B, DecR16Sp, "DEC HL", 1, 2, 0),
    Opcode::direct(0x2C, IncR8, "INC L", 1, 1, 0),
    Opcode::direct(0x2D, DecR8, "DEC L", 1, 1, 0),
    Opcode::direct(0x2E, LdR8N8, "LD L,n8", 2, 2, 0),
    Opcode::direct(0x2F, Cpl, "CPL", 1, 1, 0),
    Opcode::direct(0x30, JrCcE8, "JR NC,e8", 2, 2, 1),
    Opcode::direct(0x31, LdR16SpN16, "LD SP,n16", 3, 3, 0),
    Opcode::direct(0x32, LdHlruA, "LD (HL-),A", 1, 2, 0),
    Opcode::direct(0x33, IncR16Sp, "INC SP", 1, 2, 0),
    Opcode::direct(0x34, IncHlr, "INC (HL)", 1, 3, 0),
    Opcode::direct(0x35, DecHlr, "DEC (HL)", 1, 3, 0),
    Opcode::direct(0x36, LdHlrN8, "LD (HL),n8", 2, 3, 0),
    Opcode::direct(0x37, Sccf, "SCF", 1, 1, 0),
    Opcode::direct(0x38, JrCcE8, "JR C,e8", 2, 2, 1),
    Opcode::direct(0x39, AddHlR16Sp, "ADD HL,SP", 1, 2, 0),
    Opcode::direct(0x3A, LdAHlru, "LD A,(HL-)", 1, 2, 0),
    Opcode::direct(0x3B, DecR16Sp, "DEC SP", 1, 2, 0),
    Opcode::direct(0x3C, IncR8, "INC A", 1, 1, 0),
    Opcode::direct(0x3D, DecR8, "DEC A", 1, 1, 0),
    Opcode::direct(0x3E, LdR8N8, "LD A,n8", 2, 2, 0),
    Opcode::direct(0x3F, Sccf, "CCF", 1, 1, 0),
    Opcode::direct(0x40, LdR8R8, "LD B,B", 1, 1, 0),
    Opcode::direct(0x41, LdR8R8, "LD B,C", 1, 1, 0),
    Opcode::direct(0x42, LdR8R8, "LD B,D", 1, 1, 0),
    Opcode::direct(0x43, LdR8R8, "LD B,E", 1, 1, 0),
    Opcode::direct(0x44, LdR8R8, "LD B,H", 1, 1, 0),
    Opcode::direct(0x45, LdR8R8, "LD B,L", 1, 1, 0),
    Opcode::direct(0x46, LdR8Hlr, "LD B,(HL)", 1, 2, 0),
    Opcode::direct(0x47, LdR8R8, "LD B,A", 1, 1, 0),
    Opcode::direct(0x48, LdR8R8, "LD C,B", 1, 1, 0),
    Opcode::direct(0x49, LdR8R8, "LD C,C", 1, 1, 0),
    Opcode::direct(0x4A, LdR8R8, "LD C,D", 1, 1, 0),
    Opcode::direct(0x4B, LdR8R8, "LD C,E", 1, 1, 0),
    Opcode::direct(0x4C, LdR8R8, "LD C,H", 1, 1, 0),
    Opcode::direct(0x4D, LdR8R8, "LD C,L", 1, 1, 0),
    Opcode::direct(0x4E, LdR8Hlr, "LD C,(HL)", 1, 2, 0),
    Opcode::direct(0x4F, LdR8R8, "LD C,A", 1, 1, 0),
    Opcode::direct(0x50, LdR8R8, "LD D,B", 1, 1, 0),
    Opcode::direct(0x51, LdR8R8, "LD D,C", 1, 1, 0),
    Opcode::direct(0x52, LdR8R8, "LD D,D", 1, 1, 0),
    Opcode::direct(0x53, LdR8R8, "LD D,E", 1, 1, 0),
    Opcode::direct(0x54, LdR8R8, "LD D,H", 1, 1, 0),
    Opcode::direct(0x55, LdR8R8, "LD D,L", 1, 1, 0),
    Opcode::direct(0x56, LdR8Hlr, "LD D,(HL)", 1, 2, 0),
    Opcode::direct(0x57, LdR8R8, "LD D,A", 1, 1, 0),
    Opcode::direct(0x58, LdR8R8, "LD E,B", 1, 1, 0),
    Opcode::direct(0x59, LdR8R8, "LD E,C", 1, 1, 0),
    Opcode::direct(0x5A, LdR8R8, "LD E,D", 1, 1, 0),
    Opcode::direct(0x5B, LdR8R8, "LD E,E", 1, 1, 0),
    Opcode::direct(0x5C, LdR8R8, "LD E,H", 1, 1, 0),
    Opcode::direct(0x5D, LdR8R8, "LD E,L", 1, 1, 0),
    Opcode::direct(0x5E, LdR8Hlr, "LD E,(HL)", 1, 2, 0),
    Opcode::direct(0x5F, LdR8R8, "LD E,A", 1, 1, 0),
    Opcode::direct(0x60, LdR8R8, "LD H,B", 1, 1, 0),
    Opcode::direct(0x61, LdR8R8, "LD H,C", 1, 1, 0),
    Opcode::direct(0x62, LdR8R8, "LD H,D", 1, 1, 0),
    Opcode::direct(0x63, LdR8R8, "LD H,E", 1, 1, 0),
    Opcode::direct(0x64, LdR8R8, "LD H,H", 1, 1, 0),
    Opcode::direct(0x65, LdR8R8, "LD H,L", 1, 1, 0),
    Opcode::direct(0x66, LdR8Hlr, "LD H,(HL)", 1, 2, 0),
    Opcode::direct(0x67, LdR8R8, "LD H,A", 1, 1, 0),
    Opcode::direct(0x68, LdR8R8, "LD L,B", 1, 1, 0),
    Opcode::direct(0x69, LdR8R8, "LD L,C", 1, 1, 0),
    Opcode::direct(0x6A, LdR8R8, "LD L,D", 1, 1, 0),
    Opcode::direct(0x6B, LdR8R8, "LD L,E", 1, 1, 0),
    Opcode::direct(0x6C, LdR8R8, "LD L,H", 1, 1, 0),
    Opcode::direct(0x6D, LdR8R8, "LD L,L", 1, 1, 0),
    Opcode::direct(0x6E, LdR8Hlr, "LD L,(HL)", 1, 2, 0),
    Opcode::direct(0x6F, LdR8R8, "LD L,A", 1, 1, 0),
    Opcode::direct(0x70, LdHlrR8, "LD (HL),B", 1, 2, 0),
    Opcode::direct(0x71, LdHlrR8, "LD (HL),C", 1, 2, 0),
    Opcode::direct(0x72, LdHlrR8, "LD (HL),D", 1, 2, 0),
    Opcode::direct(0x73, LdHlrR8, "LD (HL),E", 1, 2, 0),
    Opcode::direct(0x74, LdHlrR8, "LD (HL),H", 1, 2, 0),
    Opcode::direct(0x75, LdHlrR8, "LD (HL),L", 1, 2, 0),
    Opcode::direct(0x76, Halt, "HALT", 1, 1, 0),
    Opcode::direct(0x77, LdHlrR8, "LD (HL),A", 1, 2, 0),
    Opcode::direct(0x78, LdR8R8, "LD A,B", 1, 1, 0),
    Opcode::direct(0x79, LdR8R8, "LD A,C", 1, 1, 0),
    Opcode::direct(0x7A, LdR8R8, "LD A,D", 1, 1, 0),
    Opcode::direct(0x7B, LdR8R8, "LD A,E", 1, 1, 0),
    Opcode::direct(0x7C, LdR8R8, "LD A,H", 1, 1, 0),
    Opcode::direct(0x7D, LdR8R8, "LD A,L", 1, 1, 0),
    Opcode::direct(0x7E, LdR8Hlr, "LD A,(HL)", 1, 2, 0),
    Opcode::direct(0x7F, LdR8R8, "LD A,A", 1, 1, 0),
    Opcode::direct(0x80, AddAR8, "ADD A,B", 1, 1, 0),
    Opcode::direct(0x81, AddAR8, "ADD A,C", 1, 1, 0),
    Opcode::direct(0x82, AddAR8, "ADD A,D", 1, 1, 0),
    Opcode::direct(0x83, AddAR8, "ADD A,E", 1, 1, 0),
    Opcode::direct(0x84, AddAR8, "ADD A,H", 1, 1, 0),
    Opcode::direct(0x85, AddAR8, "ADD A,L", 1, 1, 0),
    Opcode::direct(0x86, AddAHlr, "ADD A,(HL)", 1, 2, 0),
    Opcode::direct(0x87, AddAR8, "ADD A,A", 1, 1, 0),
    Opcode::direct(0x88, AddAR8, "ADC A,B", 1, 1, 0),
    Opcode::direct(0x89, AddAR8, "ADC A,C", 1, 1, 0),
    Opcode::direct(0x8A, AddAR8, "ADC A,D", 1, 1, 0),
    Opcode::direct(0x8B, AddAR8, "ADC A,E", 1, 1, 0),
    Opcode::direct(0x8C, AddAR8, "ADC A,H", 1, 1, 0),
    Opcode::direct(0x8D, AddAR8, "ADC A,L", 1, 1, 0),
    Opcode::direct(0x8E, AddAHlr, "ADC A,(HL)", 1, 2, 0),
    Opcode::direct(0x8F, AddAR8, "ADC A,A", 1, 1, 0),
    Opcode::direct(0x90, SubAR8, "SUB A,B", 1, 1, 0),
    Opcode::direct(0x91, SubAR8, "SUB A,C", 1, 1, 0),
    Opcode::direct(0x92, SubAR8, "SUB A,D", 1, 1, 0),
    Opcode::direct(0x93, SubAR8, "SUB A,E", 1, 1, 0),
    Opcode::direct(0x94, SubAR8, "SUB A,H", 1, 1, 0),
    Opcode::direct(0x95, SubAR8, "SUB A,L", 1, 1, 0),
    Opcode::direct(0x96, SubAHlr, "SUB A,(HL)", 1, 2, 0),
    Opcode::direct(0x97, SubAR8, "SUB A,A", 1, 1, 0),
    Opcode::direct(0x98, SubAR8, "SBC A,B", 1, 1, 0),
    Opcode::direct(0x99, SubAR8, "SBC A,C", 1, 1, 0),
    Opcode::direct(0x9A, SubAR8, "SBC A,D", 1, 1, 0),
    Opcode::direct(0x9B, SubAR8, "SBC A,E", 1, 1, 0),
    Opcode::direct(0x9C, SubAR8, "SBC A,H", 1, 1, 0),
    Opcode::direct(0x9D, SubAR8, "SBC A,L", 1, 1, 0),
    Opcode::direct(0x9E, SubAHlr, "SBC A,(HL)", 1, 2, 0),
    Opcode::direct(0x9F, SubAR8, "SBC A,A", 1, 1, 0),
    Opcode::direct(0xA0, AndAR8, "AND A,B", 1, 1, 0),
    Opcode::direct(0xA1, AndAR8, "AND A,C", 1, 1, 0),
    Opcode::direct(0xA2, AndAR8, "AND A,D", 1, 1, 0),
    Opcode::direct(0xA3, AndAR8, "AND A,E", 1, 1, 0),
    Opcode::direct(0xA4, AndAR8, "AND A,H", 1, 1, 0),
    Opcode::direct(0xA5, AndAR8, "AND A,L", 1, 1, 0),
    Opcode::direct(0xA6, AndAHlr, "AND A,(HL)", 1, 2, 0),
    Opcode::direct(0xA7, AndAR8, "AND A,A", 1, 1, 0),
    Opcode::direct(0xA8, XorAR8, "XOR A,B", 1, 1, 0),
    Opcode::direct(0xA9, XorAR8, "XOR A,C", 1, 1, 0),
    Opcode::direct(0xAA, XorAR8, "XOR A,D", 1, 1, 0),
    Opcode::direct(0xAB, XorAR8, "XOR A,E", 1, 1, 0),
    Opcode::direct(0xAC, XorAR8, "XOR A,H", 1, 1, 0),
    Opcode::direct(0xAD, XorAR8, "XOR A,L", 1, 1, 0),
    Opcode::direct(0xAE, XorAHlr, "XOR A,(HL)", 1, 2, 0),
    Opcode::direct(0xAF, XorAR8, "XOR A,A", 1, 1, 0),
    Opcode::direct(0xB0, OrAR8, "OR A,B", 1, 1, 0),
    Opcode::direct(0xB1, OrAR8, "OR A,C", 1, 1, 0),
    Opcode::direct(0xB2, OrAR8, "OR A,D", 1, 1, 0),
    Opcode::direct(0xB3, OrAR8, "OR A,E", 1, 1, 0),
    Opcode::direct(0xB4, OrAR8, "OR A,H", 1, 1, 0),
    Opcode::direct(0xB5, OrAR8, "OR A,L", 1, 1, 0),
    Opcode::direct(0xB6, OrAHlr, "OR A,(HL)", 1, 2, 0),
    Opcode::direct(0xB7, OrAR8, "OR A,A", 1, 1, 0),
    Opcode::direct(0xB8, CpAR8, "CP A,B", 1, 1, 0),
    Opcode::direct(0xB9, CpAR8, "CP A,C", 1, 1, 0),
    Opcode::direct(0xBA, CpAR8, "CP A,D", 1, 1, 0),
    Opcode::direct(0xBB, CpAR8, "CP A,E", 1, 1, 0),
    Opcode::direct(0xBC, CpAR8, "CP A,H", 1, 1, 0),
    Opcode::direct(0xBD, CpAR8, "CP A,L", 1, 1, 0),
    Opcode::direct(0xBE, CpAHlr, "CP A,(HL)", 1, 2, 0),
    Opcode::direct(0xBF, CpAR8, "CP A,A", 1, 1, 0),
    Opcode::direct(0xC0, RetCc, "RET NZ", 1, 2, 3),
    Opcode::direct(0xC1, PopR16, "POP BC", 1, 3, 0),
    Opcode::direct(0xC2, JpCcN16, "JP NZ,n16", 3, 3, 1),
    Opcode::direct(0xC3, JpN16, "JP n16", 3, 4, 0),
    Opcode::direct(0xC4, CallCcN16, "CALL NZ,n16", 3, 3, 3),
    Opcode::direct(0xC5, PushR16, "PUSH BC", 1, 4, 0),
    Opcode::direct(0xC6, AddAN8, "ADD A,n8", 2, 2, 0),
    Opcode::direct(0xC7, RstU3, "RST 00h", 1, 4, 0),
    Opcode::direct(0xC8, RetCc, "RET Z", 1, 2, 3),
    Opcode::direct(0xC9, Ret, "RET", 1, 4, 0),
    Opcode::direct(0xCA, JpCcN16, "JP Z,n16", 3, 3, 1),
    Opcode::direct(0xCC, CallCcN16, "CALL Z,n16", 3, 3, 3),
    Opcode::direct(0xCD, CallN16, "CALL n16", 3, 6, 0),
    Opcode::direct(0xCE, AddAN8, "ADC A,n8", 2, 2, 0),
    Opcode::direct(0xCF, RstU3, "RST 08h", 1, 4, 0),
    Opcode::direct(0xD0, RetCc, "RET NC", 1, 2, 3),
    Opcode::direct(0xD1, PopR16, "POP DE", 1, 3, 0),
    Opcode::direct(0xD2, JpCcN16, "JP NC,n16", 3, 3, 1),
    Opcode::direct(0xD4, CallCcN16, "CALL NC,n16", 3, 3, 3),
    Opcode::direct(0xD5, PushR16, "PUSH DE", 1, 4, 0),
    Opcode::direct(0xD6, SubAN8, "SUB A,n8", 2, 2, 0),
    Opcode::direct(0xD7, RstU3, "RST 10h", 1, 4, 0),
    Opcode::direct(0xD8, RetCc, "RET C", 1, 2, 3),
    Opcode::direct(0xD9, Reti, "RETI", 1, 4, 0),
    Opcode::direct(0xDA, JpCcN16, "JP C,n16", 3, 3, 1),
    Opcode::direct(0xDC, CallCcN16, "CALL C,n16", 3, 3, 3),
    Opcode::direct(0xDE, SubAN8, "SBC A,n8", 2, 2, 0),
    Opcode::direct(0xDF, RstU3, "RST 18h", 1, 4, 0),
    Opcode::direct(0xE0, LdN8rA, "LDH (n8),A", 2, 3, 0),
    Opcode::direct(0xE1, PopR16, "POP HL", 1, 3, 0),
    Opcode::direct(0xE2, LdCrA, "LD (C),A", 1, 2, 0),
    Opcode::direct(0xE5, PushR16, "PUSH HL", 1, 4, 0),
    Opcode::direct(0xE6, AndAN8, "AND A,n8", 2, 2, 0),
    Opcode::direct(0xE7, RstU3, "RST 20h", 1, 4, 0),
    Opcode::direct(0xE8, LdHlSpS8, "ADD SP,e8", 2, 4, 0),
    Opcode::direct(0xE9, JpHl, "JP HL", 1, 1, 0),
    Opcode::direct(0xEA, LdN16rA, "LD (n16),A", 3, 4, 0),
    Opcode::direct(0xEE, XorAN8, "XOR A,n8", 2, 2, 0),
    Opcode::direct(0xEF, RstU3, "RST 28h", 1, 4, 0),
    Opcode::direct(0xF0, LdAN8r, "LDH A,(n8)", 2, 3, 0),
    Opcode::direct(0xF1, PopR16, "POP AF", 1, 3, 0),
    Opcode::direct(0xF2, LdACr, "LD A,(C)", 1, 2, 0),
    Opcode::direct(0xF3, Edi, "DI", 1, 1, 0),
    Opcode::direct(0xF5, PushR16, "PUSH AF", 1, 4, 0),
    Opcode::direct(0xF6, OrAN8, "OR A,n8", 2, 2, 0),
    Opcode::direct(0xF7, RstU3, "RST 30h", 1, 4, 0),
    Opcode::direct(0xF8, LdHlSpS8, "LD HL,SP+e8", 2, 3, 0),
    Opcode::direct(0xF9, LdSpHl, "LD SP,HL", 1, 2, 0),
    Opcode::direct(0xFA, LdAN16r, "LD A,(n16)", 3, 4, 0),
    Opcode::direct(0xFB, Edi, "EI", 1, 1, 0),
    Opcode::direct(0xFE, CpAN8, "CP A,n8", 2, 2, 0),
    Opcode::direct(0xFF, RstU3, "RST 38h", 1, 4, 0),
];

pub(super) static PREFIXED_OPCODES: [Opcode; 256] = [
    Opcode::prefixed(0x00, RotcR8, "RLC B", 1, 2, 0),
    Opcode::prefixed(0x01, RotcR8, "RLC C", 1, 2, 0),
    Opcode::prefixed(0x02, RotcR8, "RLC D", 1, 2, 0),
    Opcode::prefixed(0x03, RotcR8, "RLC E", 1, 2, 0),
    Opcode::prefixed(0x04, RotcR8, "RLC H", 1, 2, 0),
    Opcode::prefixed(0x05, RotcR8, "RLC L", 1, 2, 0),
    Opcode::prefixed(0x06, RotcHlr, "RLC (HL)", 1, 4, 0),
    Opcode::prefixed(0x07, RotcR8, "RLC A", 1, 2, 0),
    Opcode::prefixed(0x08, RotcR8, "RRC B", 1, 2, 0),
    Opcode::prefixed(0x09, RotcR8, "RRC C", 1, 2, 0),
    Opcode::prefixed(0x0A, RotcR8, "RRC D", 1, 2, 0),
    Opcode::prefixed(0x0B, RotcR8, "RRC E", 1, 2, 0),
    Opcode::prefixed(0x0C, RotcR8, "RRC H", 1, 2, 0),
    Opcode::prefixed(0x0D, RotcR8, "RRC L", 1, 2, 0),
    Opcode::prefixed(0x0E, RotcHlr, "RRC (HL)", 1, 4, 0),
    Opcode::prefixed(0x0F, RotcR8, "RRC A", 1, 2, 0),
    Opcode::prefixed(0x10, RotR8, "RL B", 1, 2, 0),
    Opcode::prefixed(0x11, RotR8, "RL C", 1, 2, 0),
    Opcode::prefixed(0x12, RotR8, "RL D", 1, 2, 0),
    Opcode::prefixed(0x13, RotR8, "RL E", 1, 2, 0),
    Opcode::prefixed(0x14, RotR8, "RL H", 1, 2, 0),
    Opcode::prefixed(0x15, RotR8, "RL L", 1, 2, 0),
    Opcode::prefixed(0x16, RotHlr, "RL (HL)", 1, 4, 0),
    Opcode::prefixed(0x17, RotR8, "RL A", 1, 2, 0),
    Opcode::prefixed(0x18, RotR8, "RR B", 1, 2, 0),
    Opcode::prefixed(0x19, RotR8, "RR C", 1, 2, 0),
    Opcode::prefixed(0x1A, RotR8, "RR D", 1, 2, 0),
    Opcode::prefixed(0x1B, RotR8, "RR E", 1, 2, 0),
    Opcode::prefixed(0x1C, RotR8, "RR H", 1, 2, 0),
    Opcode::prefixed(0x1D, RotR8, "RR L", 1, 2, 0),
    Opcode::prefixed(0x1E, RotHlr, "RR (HL)", 1, 4, 0),
    Opcode::prefixed(0x1F, RotR8, "RR A", 1, 2, 0),
    Opcode::prefixed(0x20, SlaR8, "SLA B", 1, 2, 0),
    Opcode::prefixed(0x21, SlaR8, "SLA C", 1, 2, 0),
    Opcode::prefixed(0x22, SlaR8, "SLA D", 1, 2, 0),
    Opcode::prefixed(0x23, SlaR8, "SLA E", 1, 2, 0),
    Opcode::prefixed(0x24, SlaR8, "SLA H", 1, 2, 0),
    Opcode::prefixed(0x25, SlaR8, "SLA L", 1, 2, 0),
    Opcode::prefixed(0x26, SlaHlr, "SLA (HL)", 1, 4, 0),
    Opcode::prefixed(0x27, SlaR8, "SLA A", 1, 2, 0),
    Opcode::prefixed(0x28, SraR8, "SRA B", 1, 2, 0),
    Opcode::prefixed(0x29, SraR8, "SRA C", 1, 2, 0),
    Opcode::prefixed(0x2A, SraR8, "SRA D", 1, 2, 0),
    Opcode::prefixed(0x2B, SraR8, "SRA E", 1, 2, 0),
    Opcode::prefixed(0x2C, SraR8, "SRA H", 1, 2, 0),
    Opcode::prefixed(0x2D, SraR8, "SRA L", 1, 2, 0),
    Opcode::prefixed(0x2E, SraHlr, "SRA (HL)", 1, 4, 0),
    Opcode::prefixed(0x2F, SraR8, "SRA A", 1, 2, 0),
    Opcode::prefixed(0x30, SwapR8, "SWAP B", 1, 2, 0),
    Opcode::prefixed(0x31, SwapR8, "SWAP C", 1, 2, 0),
    Opcode::prefixed(0x32, SwapR8, "SWAP D", 1, 2, 0),
    Opcode::prefixed(0x33, SwapR8, "SWAP E", 1, 2, 0),
    Opcode::prefixed(0x34, SwapR8, "SWAP H", 1, 2, 0),
    Opcode::prefixed(0x35, SwapR8, "SWAP L", 1, 2, 0),
    Opcode::prefixed(0x36, SwapHlr, "SWAP (HL)", 1, 4, 0),
    Opcode::prefixed(0x37, SwapR8, "SWAP A", 1, 2, 0),
    Opcode::prefixed(0x38, SrlR8, "SRL B", 1, 2, 0),
    Opcode::prefixed(0x39, SrlR8, "SRL C", 1, 2, 0),
    Opcode::prefixed(0x3A, SrlR8, "SRL D", 1, 2, 0),
    Opcode::prefixed(0x3B, SrlR8, "SRL E", 1, 2, 0),
    Opcode::prefixed(0x3C, SrlR8, "SRL H", 1, 2, 0),
    Opcode::prefixed(0x3D, SrlR8, "SRL L", 1, 2, 0),
    Opcode::prefixed(0x3E, SrlHlr, "SRL (HL)", 1, 4, 0),
    Opcode::prefixed(0x3F, SrlR8, "SRL A", 1, 2, 0),
    Opcode::prefixed(0x40, BitU3R8, "BIT 0,B", 1, 2, 0),
    Opcode::prefixed(0x41, BitU3R8, "BIT 0,C", 1, 2, 0),
    Opcode::prefixed(0x42, BitU3R8, "BIT 0,D", 1, 2, 0),
    Opcode::prefixed(0x43, BitU3R8, "BIT 0,E", 1, 2, 0),
    Opcode::prefixed(0x44, BitU3R8, "BIT 0,H", 1, 2, 0),
    Opcode::prefixed(0x45, BitU3R8, "BIT 0,L", 1, 2, 0),
    Opcode::prefixed(0x46, BitU3Hlr, "BIT 0,(HL)", 1, 3, 0),
    Opcode::prefixed(0x47, BitU3R8, "BIT 0,A", 1, 2, 0),
    Opcode::prefixed(0x48, BitU3R8, "BIT 1,B", 1, 2, 0),
    Opcode::prefixed(0x49, BitU3R8, "BIT 1,C", 1, 2, 0),
    Opcode::prefixed(0x4A, BitU3R8, "BIT 1,D", 1, 2, 0),
    Opcode::prefixed(0x4B, BitU3R8, "BIT 1,E", 1, 2, 0),
    Opcode::prefixed(0x4C, BitU3R8, "BIT 1,H", 1, 2, 0),
    Opcode::prefixed(0x4D, BitU3R8, "BIT 1,L", 1, 2, 0),
    Opcode::prefixed(0x4E, BitU3Hlr, "BIT 1,(HL)", 1, 3, 0),
    Opcode::prefixed(0x4F, BitU3R8, "BIT 1,A", 1, 2, 0),
    Opcode::prefixed(0x50, BitU3R8, "BIT 2,B", 1, 2, 0),
    Opcode::prefixed(0x51, BitU3R8, "BIT 2,C", 1, 2, 0),
    Opcode::prefixed(0x52, BitU3R8, "BIT 2,D", 1, 2, 0),
    Opcode::prefixed(0x53, BitU3R8, "BIT 2,E", 1, 2, 0),
    Opcode::prefixed(0x54, BitU3R8, "BIT 2,H", 1, 2, 0),
    Opcode::prefixed(0x55, BitU3R8, "BIT 2,L", 1, 2, 0),
    Opcode::prefixed(0x56, BitU3Hlr, "BIT 2,(HL)", 1, 3, 0),
    Opcode::prefixed(0x57, BitU3R8, "BIT 2,A", 1, 2, 0),
    Opcode::prefixed(0x58, BitU3R8, "BIT 3,B", 1, 2, 0),
    Opcode::prefixed(0x59, BitU3R8, "BIT 3,C", 1, 2, 0),
    Opcode::prefixed(0x5A, BitU3R8, "BIT 3,D", 1, 2, 0),
    Opcode::prefixed(0x5B, BitU3R8, "BIT 3,E", 1, 2, 0),
    Opcode::prefixed(0x5C, BitU3R8, "BIT 3,H", 1, 2, 0),
    Opcode::prefixed(0x5D, BitU3R8, "BIT 3,L", 1, 2, 0),
    Opcode::prefixed(0x5E, BitU3Hlr, "BIT 3,(HL)", 1, 3, 0),
    Opcode::prefixed(0x5F, BitU3R8, "BIT 3,A", 1, 2, 0),
    Opcode::prefixed(0x60, BitU3R8, "BIT 4,B", 1, 2, 0),
    Opcode::prefixed(0x61, BitU3R8, "BIT 4,C", 1, 2, 0),
    Opcode::prefixed(0x62, BitU3R8, "BIT 4,D", 1, 2, 0),
    Opcode::prefixed(0x63, BitU3R8, "BIT 4,E", 1, 2, 0),
    Opcode::prefixed(0x64, BitU3R8, "BIT 4,H", 1, 2, 0),
    Opcode::prefixed(0x65, BitU3R8, "BIT 4,L", 1, 2, 0),
    Opcode::prefixed(0x66, BitU3Hlr, "BIT 4,(HL)", 1, 3, 0),
    Opcode::prefixed(0x67, BitU3R8, "BIT 4,A", 1, 2, 0),
    Opcode::prefixed(0x68, BitU3R8, "BIT 5,B", 1, 2, 0),
    Opcode::prefixed(0x69, BitU3R8, "BIT 5,C", 1, 2, 0),
    Opcode::prefixed(0x6A, BitU3R8, "BIT 5,D", 1, 2, 0),
    Opcode::prefixed(0x6B, BitU3R8, "BIT 5,E", 1, 2, 0),
    Opcode::prefixed(0x6C, BitU3R8, "BIT 5,H", 1, 2, 0),
    Opcode::prefixed(0x6D, BitU3R8, "BIT 5,L", 1, 2, 0),
    Opcode::prefixed(0x6E, BitU3Hlr, "BIT 5,(HL)", 1, 3, 0),
    Opcode::prefixed(0x6F, BitU3R8, "BIT 5,A", 1, 2, 0),
    Opcode::prefixed(0x70, BitU3R8, "BIT 6,B", 1, 2, 0),
    Opcode::prefixed(0x71, BitU3R8, "BIT 6,C", 1, 2, 0),
    Opcode::prefixed(0x72, BitU3R8, "BIT 6,D", 1, 2, 0),
    Opcode::prefixed(0x73, BitU3R8, "BIT 6,E", 1, 2, 0),
    Opcode::prefixed(0x74, BitU3R8, "BIT 6,H", 1, 2, 0),
    Opcode::prefixed(0x75, BitU3R8, "BIT 6,L", 1, 2, 0),
    Opcode::prefixed(0x76, BitU3Hlr, "BIT 6,(HL)", 1, 3, 0),
    Opcode::prefixed(0x77, BitU3R8, "BIT 6,A", 1, 2, 0),
    Opcode::prefixed(0x78, BitU3R8, "BIT 7,B", 1, 2, 0),
    Opcode::prefixed(0x79, BitU3R8, "BIT 7,C", 1, 2, 0),
    Opcode::prefixed(0x7A, BitU3R8, "BIT 7,D", 1, 2, 0),
    Opcode::prefixed(0x7B, BitU3R8, "BIT 7,E", 1, 2, 0),
    Opcode::prefixed(0x7C, BitU3R8, "BIT 7,H", 1, 2, 0),
    Opcode::prefixed(0x7D, BitU3R8, "BIT 7,L", 1, 2, 0),
    Opcode::prefixed(0x7E, BitU3Hlr, "BIT 7,(HL)", 1, 3, 0),
    Opcode::prefixed(0x7F, BitU3R8, "BIT 7,A", 1, 2, 0),
    Opcode::prefixed(0x80, ChgU3R8, "RES 0,B", 1, 2, 0),
    Opcode::prefixed(0x81, ChgU3R8, "RES 0,C", 1, 2, 0),
    Opcode::prefixed(0x82, ChgU3R8, "RES 0,D", 1, 2, 0),
    Opcode::prefixed(0x83, ChgU3R8, "RES 0,E", 1, 2, 0),
    Opcode::prefixed(0x84, ChgU3R8, "RES 0,H", 1, 2, 0),
    Opcode::prefixed(0x85, ChgU3R8, "RES 0,L", 1, 2, 0),
    Opcode::prefixed(0x86, ChgU3Hlr, "RES 0,(HL)", 1, 4, 0),
    Opcode::prefixed(0x87, ChgU3R8, "RES 0,A", 1, 2, 0),
    Opcode::prefixed(0x88, ChgU3R8, "RES 1,B", 1, 2, 0),
    Opcode::prefixed(0x89, ChgU3R8, "RES 1,C", 1, 2, 0),
    Opcode::prefixed(0x8A, ChgU3R8, "RES 1,D", 1, 2, 0),
    Opcode::prefixed(0x8B, ChgU3R8, "RES 1,E", 1, 2, 0),
    Opcode::prefixed(0x8C, ChgU3R8, "RES 1,H", 1, 2, 0),
    Opcode::prefixed(0x8D, ChgU3R8, "RES 1,L", 1, 2, 0),
    Opcode::prefixed(0x8E, ChgU3Hlr, "RES 1,(HL)", 1, 4, 0),
    Opcode::prefixed(0x8F, ChgU3R8, "RES 1,A", 1, 2, 0),
    Opcode::prefixed(0x90, ChgU3R8, "RES 2,B", 1, 2, 0),
    Opcode::prefixed(0x91, ChgU3R8, "RES 2,C", 1, 2, 0),
    Opcode::prefixed(0x92, ChgU3R8, "RES 2,D", 1, 2, 0),
    Opcode::prefixed(0x93, ChgU3R8, "RES 2,E", 1, 2, 0),
    Opcode::prefixed(0x94, ChgU3R8, "RES 2,H", 1, 2, 0),
    Opcode::prefixed(0x95, ChgU3R8, "RES 2,L", 1, 2, 0),
    Opcode::prefixed(0x96, ChgU3Hlr, "RES 2,(HL)", 1, 4, 0),
    Opcode::prefixed(0x97, ChgU3R8, "RES 2,A", 1, 2, 0),
    Opcode::prefixed(0x98, ChgU3R8, "RES 3,B", 1, 2, 0),
    Opcode::prefixed(0x99, ChgU3R8, "RES 3,C", 1, 2, 0),
    Opcode::prefixed(0x9A, ChgU3R8, "RES 3,D", 1, 2, 0),
    Opcode::prefixed(0x9B, ChgU3R8, "RES 3,E", 1, 2, 0),
    Opcode::prefixed(0x9C, ChgU3R8, "RES 3,H", 1, 2, 0),
    Opcode::prefixed(0x9D, ChgU3R8, "RES 3,L", 1, 2, 0),
    Opcode::prefixed(0x9E, ChgU3Hlr, "RES 3,(HL)", 1, 4, 0),
    Opcode::prefixed(0x9F, ChgU3R8, "RES 3,A", 1, 2, 0),
    Opcode::prefixed(0xA0, ChgU3R8, "RES 4,B", 1, 2, 0),
    Opcode::prefixed(0xA1, ChgU3R8, "RES 4,C", 1, 2, 0),
    Opcode::prefixed(0xA2, ChgU3R8, "RES 4,D", 1, 2, 0),
    Opcode::prefixed(0xA3, ChgU3R8, "RES 4,E", 1, 2, 0),
    Opcode::prefixed(0xA4, ChgU3R8, "RES 4,H", 1, 2, 0),
    Opcode::prefixed(0xA5, ChgU3R8, "RES 4,L", 1, 2, 0),
    Opcode::prefixed(0xA6, ChgU3Hlr, "RES 4,(HL)", 1, 4, 0),
    Opcode::prefixed(0xA7, ChgU3R8, "RES 4,A", 1, 2, 0),
    Opcode::prefixed(0xA8, ChgU3R8, "RES 5,B", 1, 2, 0),
    Opcode::prefixed(0xA9, ChgU3R8, "RES 5,C", 1, 2, 0),
    Opcode::prefixed(0xAA, ChgU3R8, "RES 5,D", 1, 2, 0),
    Opcode::prefixed(0xAB, ChgU3R8, "RES 5,E", 1, 2, 0),
    Opcode::prefixed(0xAC, ChgU3R8, "RES 5,H", 1, 2, 0),
    Opcode::prefixed(0xAD, ChgU3R8, "RES 5,L", 1, 2, 0),
    Opcode::prefixed(0xAE, ChgU3Hlr, "RES 5,(HL)", 1, 4, 0),
    Opcode::prefixed(0xAF, ChgU3R8, "RES 5,A", 1, 2, 0),
    Opcode::prefixed(0xB0, ChgU3R8, "RES 6,B", 1, 2, 0),
    Opcode::prefixed(0xB1, ChgU3R8, "RES 6,C", 1, 2, 0),
    Opcode::prefixed(0xB2, ChgU3R8, "RES 6,D", 1, 2, 0),
    Opcode::prefixed(0xB3, ChgU3R8, "RES 6,E", 1, 2, 0),
    Opcode::prefixed(0xB4, ChgU3R8, "RES 6,H", 1, 2, 0),
    Opcode::prefixed(0xB5, ChgU3R8, "RES 6,L", 1, 2, 0),
    Opcode::prefixed(0xB6, ChgU3Hlr, "RES 6,(HL)", 1, 4, 0),
    Opcode::prefixed(0xB7, ChgU3R8, "RES 6,A", 1, 2, 0),
    Opcode::prefixed(0xB8, ChgU3R8, "RES 7,B", 1, 2, 0),
    Opcode::prefixed(0xB9, ChgU3R8, "RES 7,C", 1, 2, 0),
    Opcode::prefixed(0xBA, ChgU3R8, "RES 7,D", 1, 2, 0),
    Opcode::prefixed(0xBB, ChgU3R8, "RES 7,E", 1, 2, 0),
    Opcode::prefixed(0xBC, ChgU3R8, "RES 7,H", 1, 2, 0),
    Opcode::prefixed(0xBD, ChgU3R8, "RES 7,L", 1, 2, 0),
    Opcode::prefixed(0xBE, ChgU3Hlr, "RES 7,(HL)", 1, 4, 0),
    Opcode::prefixed(0xBF, ChgU3R8, "RES 7,A", 1, 2, 0),
    Opcode::prefixed(0xC0, ChgU3R8, "SET 0,B", 1, 2, 0),
    Opcode::prefixed(0xC1, ChgU3R8, "SET 0,C", 1, 2, 0),
    Opcode::prefixed(0xC2, ChgU3R8, "SET 0,D", 1, 2, 0),
    Opcode::prefixed(0xC3, ChgU3R8, "SET 0,E", 1, 2, 0),
    Opcode::prefixed(0xC4, ChgU3R8, "SET 0,H", 1, 2, 0),
    Opcode::prefixed(0xC5, ChgU3R8, "SET 0,L", 1, 2, 0),
    Opcode::prefixed(0xC6, ChgU3Hlr, "SET 0,(HL)", 1, 4, 0),
    Opcode::prefixed(0xC7, ChgU3R8, "SET 0,A", 1, 2, 0),
    Opcode::prefixed(0xC8, ChgU3R8, "SET 1,B", 1, 2, 0),
    Opcode::prefixed(0xC9, ChgU3R8, "SET 1,C", 1, 2, 0),
    Opcode::prefixed(0xCA, ChgU3R8, "SET 1,D", 1, 2, 0),
    Opcode::prefixed(0xCB, ChgU3R8, "SET 1,E", 1, 2, 0),
    Opcode::prefixed(0xCC, ChgU3R8, "SET 1,H", 1, 2, 0),
    Opcode::prefixed(0xCD, ChgU3R8, "SET 1,L", 1, 2, 0),
    Opcode::prefixed(0xCE, ChgU3Hlr, "SET 1,(HL)", 1, 4, 0),
    Opcode::prefixed(0xCF, ChgU3R8, "SET 1,A", 1, 2, 0),
    Opcode::prefixed(0xD0, ChgU3R8, "SET 2,B", 1, 2, 0),
    Opcode::prefixed(0xD1, ChgU3R8, "SET 2,C", 1, 2, 0),
    Opcode::prefixed(0xD2, ChgU3R8, "SET 2,D", 1, 2, 0),
    Opcode::prefixed(0xD3, ChgU3R8, "SET 2,E", 1, 2, 0),
    Opcode::prefixed(0xD4, ChgU3R8, "SET 2,H", 1, 2, 0),
    Opcode::prefixed(0xD5, ChgU3R8, "SET 2,L", 1, 2, 0),
    Opcode::prefixed(0xD6, ChgU3Hlr, "SET 2,(HL)", 1, 4, 0),
    Opcode::prefixed(0xD7, ChgU3R8, "SET 2,A", 1, 2, 0),
    Opcode::prefixed(0xD8, ChgU3R8, "SET 3,B", 1, 2, 0),
    Opcode::prefixed(0xD9, ChgU3R8, "SET 3,C", 1, 2, 0),
    Opcode::prefixed(0xDA, ChgU3R8, "SET 3,D", 1, 2, 0),
    Opcode::prefixed(0xDB, ChgU3R8, "SET 3,E", 1, 2, 0),
    Opcode::prefixed(0xDC, ChgU3R8, "SET 3,H", 1, 2, 0),
    Opcode::prefixed(0xDD, ChgU3R8, "SET 3,L", 1, 2, 0),
    Opcode::prefixed(0xDE, ChgU3Hlr, "SET 3,(HL)", 1, 4, 0),
    Opcode::prefixed(0xDF, ChgU3R8, "SET 3,A", 1, 2, 0),
    Opcode::prefixed(0xE0, ChgU3R8, "SET 4,B", 1, 2, 0),
    Opcode::prefixed(0xE1, ChgU3R8, "SET 4,C", 1, 2, 0),
    Opcode::prefixed(0xE2, ChgU3R8, "SET 4,D", 1, 2, 0),
    Opcode::prefixed(0xE3, ChgU3R8, "SET 4,E", 1, 2, 0),
    Opcode::prefixed(0xE4, ChgU3R8, "SET 4,H", 1, 2, 0),
    Opcode::prefixed(0xE5, ChgU3R8, "SET 4,L", 1, 2, 0),
    Opcode::prefixed(0xE6, ChgU3Hlr, "SET 4,(HL)", 1, 4, 0),
    Opcode::prefixed(0xE7, ChgU3R8, "SET 4,A", 1, 2, 0),
    Opcode::prefixed(0xE8, ChgU3R8, "SET 5,B", 1, 2, 0),
    Opcode::prefixed(0xE9, ChgU3R8, "SET 5,C", 1, 2, 0),
    Opcode::prefixed(0xEA, ChgU3R8, "SET 5,D", 1, 2, 0),
    Opcode::prefixed(0xEB, ChgU3R8, "SET 5,E", 1, 2, 0),
    Opcode::prefixed(0xEC, ChgU3R8, "SET 5,H", 1, 2, 0),
    Opcode::prefixed(0xED, ChgU3R8, "SET 5,L", 1, 2, 0),
    Opcode::prefixed(0xEE, ChgU3Hlr, "SET 5,(HL)", 1, 4, 0),
    Opcode::prefixed(0xEF, ChgU3R8, "SET 5,A", 1, 2, 0),
    Opcode::prefixed(0xF0, ChgU3R8, "SET 6,B", 1, 2, 0),
    Opcode::prefixed(0xF1, ChgU3R8, "SET 6,C", 1, 2, 0),
    Opcode::prefixed(0xF2, ChgU3R8, "SET 6,D", 1, 2, 0),
    Opcode::prefixed(0xF3, ChgU3R8, "SET 6,E", 1, 2, 0),
    Opcode::prefixed(0xF4, ChgU3R8, "SET 6,H", 1, 2, 0),
    Opcode::prefixed(0xF5, ChgU3R8, "SET 6,L", 1, 2, 0),
    Opcode::prefixed(0xF6, ChgU3Hlr, "SET 6,(HL)", 1, 4, 0),
    Opcode::prefixed(0xF7, ChgU3R8, "SET 6,A", 1, 2, 0),
    Opcode::prefixed(0xF8, ChgU3R8, "SET 7,B", 1, 2, 0),
    Opcode::prefixed(0xF9, ChgU3R8, "SET 7,C", 1, 2, 0),
    Opcode::prefixed(0xFA, ChgU3R8, "SET 7,D", 1, 2, 0),
    Opcode::prefixed(0xFB, ChgU3R8, "SET 7,E", 1, 2, 0),
    Opcode::prefixed(0xFC, ChgU3R8, "SET 7,H", 1, 2, 0),
    Opcode::prefixed(0xFD, ChgU3R8, "SET 7,L", 1, 2, 0),
    Opcode::prefixed(0xFE, ChgU3Hlr, "SET 7,(HL)", 1, 4, 0),
    Opcode::prefixed(0xFF, ChgU3R8, "SET 7,A", 1, 2, 0),
];
