//! Operand field layouts.
//!
//! Every instruction format is a fixed set of bit fields. A [`Shape`] struct
//! holds the decoded values of one such set; the bit positions live in the
//! [`FieldDecl`] constants below so tests and tooling can inspect them.

use serde::{Deserialize, Serialize};

use crate::bits::{extract32, sextract32};

/// Operand field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Rs,
    Rt,
    Rd,
    Sa,
    Base,
    Fs,
    Ft,
    Fd,
    Imm,
    Offset,
    Code,
    Stype,
    CopFun,
    InstrIndex,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Rs => "rs",
            Field::Rt => "rt",
            Field::Rd => "rd",
            Field::Sa => "sa",
            Field::Base => "base",
            Field::Fs => "fs",
            Field::Ft => "ft",
            Field::Fd => "fd",
            Field::Imm => "imm",
            Field::Offset => "offset",
            Field::Code => "code",
            Field::Stype => "stype",
            Field::CopFun => "cop_fun",
            Field::InstrIndex => "instr_index",
        }
    }
}

/// How a field's bits are widened to `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Unsigned,
    Signed,
}

/// Position of one field inside the instruction word.
///
/// `sign == None` marks a field whose signedness depends on the mnemonic
/// (the 16-bit `imm` of ADDI vs ANDI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub field: Field,
    pub lsb: u32,
    pub width: u32,
    pub sign: Option<Sign>,
}

impl FieldDecl {
    pub const fn new(field: Field, lsb: u32, width: u32, sign: Sign) -> Self {
        Self { field, lsb, width, sign: Some(sign) }
    }

    pub const fn per_mnemonic(field: Field, lsb: u32, width: u32) -> Self {
        Self { field, lsb, width, sign: None }
    }

    /// Bits covered by this field.
    pub const fn mask(&self) -> u32 {
        (u32::MAX >> (32 - self.width)) << self.lsb
    }

    /// Extract the field from `word`. `imm` supplies the signedness for
    /// per-mnemonic fields; a per-mnemonic field without one zero-extends.
    pub fn extract(&self, word: u32, imm: Option<Sign>) -> i32 {
        match self.sign.or(imm) {
            Some(Sign::Signed) => sextract32(word, self.lsb, self.width),
            _ => extract32(word, self.lsb, self.width) as i32,
        }
    }
}

pub const RS: FieldDecl = FieldDecl::new(Field::Rs, 21, 5, Sign::Unsigned);
pub const BASE: FieldDecl = FieldDecl::new(Field::Base, 21, 5, Sign::Unsigned);
pub const RT: FieldDecl = FieldDecl::new(Field::Rt, 16, 5, Sign::Unsigned);
pub const FT: FieldDecl = FieldDecl::new(Field::Ft, 16, 5, Sign::Unsigned);
pub const RD: FieldDecl = FieldDecl::new(Field::Rd, 11, 5, Sign::Unsigned);
pub const FS: FieldDecl = FieldDecl::new(Field::Fs, 11, 5, Sign::Unsigned);
pub const SA: FieldDecl = FieldDecl::new(Field::Sa, 6, 5, Sign::Unsigned);
pub const FD: FieldDecl = FieldDecl::new(Field::Fd, 6, 5, Sign::Unsigned);
pub const STYPE: FieldDecl = FieldDecl::new(Field::Stype, 6, 5, Sign::Unsigned);
pub const OFFSET: FieldDecl = FieldDecl::new(Field::Offset, 0, 16, Sign::Signed);
pub const IMM: FieldDecl = FieldDecl::per_mnemonic(Field::Imm, 0, 16);
/// Trap code (TEQ, TNE, ...).
pub const CODE10: FieldDecl = FieldDecl::new(Field::Code, 6, 10, Sign::Unsigned);
/// SYSCALL / BREAK code.
pub const CODE20: FieldDecl = FieldDecl::new(Field::Code, 6, 20, Sign::Unsigned);
pub const COP_FUN: FieldDecl = FieldDecl::new(Field::CopFun, 0, 26, Sign::Unsigned);
pub const INSTR_INDEX: FieldDecl = FieldDecl::new(Field::InstrIndex, 0, 26, Sign::Unsigned);

/// A decoded operand layout.
pub trait Shape: Copy {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDecl];

    fn decode(word: u32, imm: Option<Sign>) -> Self;

    /// Value of `field`, or `None` if this layout has no such field.
    fn get(&self, field: Field) -> Option<i32>;
}

macro_rules! shapes {
    ($( $(#[$meta:meta])* $name:ident { $($f:ident: $ty:ty = $decl:expr),+ $(,)? } )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
            pub struct $name {
                $(pub $f: $ty,)+
            }

            impl Shape for $name {
                const NAME: &'static str = stringify!($name);
                const FIELDS: &'static [FieldDecl] = &[$($decl),+];

                fn decode(word: u32, imm: Option<Sign>) -> Self {
                    Self { $($f: $decl.extract(word, imm) as $ty,)+ }
                }

                fn get(&self, field: Field) -> Option<i32> {
                    $(
                        if field == $decl.field {
                            return Some(self.$f as i32);
                        }
                    )+
                    None
                }
            }
        )+
    };
}

shapes! {
    /// Three-register ALU form.
    RdRsRt { rd: u8 = RD, rs: u8 = RS, rt: u8 = RT }
    /// Immediate ALU form; `imm` signedness comes from the mnemonic.
    ImmRsRt { imm: i32 = IMM, rs: u8 = RS, rt: u8 = RT }
    RdRs { rd: u8 = RD, rs: u8 = RS }
    Rs { rs: u8 = RS }
    /// Integer load/store: `rt, offset(base)`.
    BaseOffsetRt { base: u8 = BASE, offset: i32 = OFFSET, rt: u8 = RT }
    ImmRt { imm: i32 = IMM, rt: u8 = RT }
    Rd { rd: u8 = RD }
    Stype { stype: i32 = STYPE }
    CodeRsRt { code: i32 = CODE10, rs: u8 = RS, rt: u8 = RT }
    ImmRs { imm: i32 = IMM, rs: u8 = RS }
    FdFs { fd: u8 = FD, fs: u8 = FS }
    FdFsFt { fd: u8 = FD, fs: u8 = FS, ft: u8 = FT }
    Offset { offset: i32 = OFFSET }
    FsFt { fs: u8 = FS, ft: u8 = FT }
    /// GPR <-> FPR moves.
    FsRt { fs: u8 = FS, rt: u8 = RT }
    /// FP load/store: `ft, offset(base)`.
    BaseFtOffset { base: u8 = BASE, ft: u8 = FT, offset: i32 = OFFSET }
    OffsetRsRt { offset: i32 = OFFSET, rs: u8 = RS, rt: u8 = RT }
    OffsetRs { offset: i32 = OFFSET, rs: u8 = RS }
    Code { code: i32 = CODE20 }
    CopFun { cop_fun: i32 = COP_FUN }
    RsRt { rs: u8 = RS, rt: u8 = RT }
    RdRtSa { rd: u8 = RD, rt: u8 = RT, sa: i32 = SA }
    InstrIndex { instr_index: i32 = INSTR_INDEX }
}
