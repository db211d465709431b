//! Instruction catalog: one entry per mnemonic, binding it to an operand
//! layout and a render template.

use serde::Serialize;

use crate::fields::{
    BaseFtOffset, BaseOffsetRt, Code, CodeRsRt, CopFun, FdFs, FdFsFt, Field, FieldDecl, FsFt, FsRt,
    ImmRs, ImmRsRt, ImmRt, InstrIndex, Offset, OffsetRs, OffsetRsRt, Rd, RdRs, RdRsRt, RdRtSa, Rs,
    RsRt, Shape, Sign, Stype,
};

/// One operand in rendered assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// General-purpose register, printed by its alias.
    Gpr(Field),
    /// Floating-point / multimedia register, printed as `f<N>`.
    Fpr(Field),
    /// Signed decimal.
    Dec(Field),
    /// `offset(base)` with an aliased base register.
    Mem { offset: Field, base: Field },
    /// `offset(rN)` with a raw base register number.
    MemRaw { offset: Field, base: Field },
}

use Slot::{Dec, Fpr, Gpr};

pub const RD_RS_RT: &[Slot] = &[Gpr(Field::Rd), Gpr(Field::Rs), Gpr(Field::Rt)];
pub const RD_RT_RS: &[Slot] = &[Gpr(Field::Rd), Gpr(Field::Rt), Gpr(Field::Rs)];
pub const RT_RS_IMM: &[Slot] = &[Gpr(Field::Rt), Gpr(Field::Rs), Dec(Field::Imm)];
pub const RS_RT_OFFSET: &[Slot] = &[Gpr(Field::Rs), Gpr(Field::Rt), Dec(Field::Offset)];
pub const RS_OFFSET: &[Slot] = &[Gpr(Field::Rs), Dec(Field::Offset)];
pub const RS_IMM: &[Slot] = &[Gpr(Field::Rs), Dec(Field::Imm)];
pub const RT_IMM: &[Slot] = &[Gpr(Field::Rt), Dec(Field::Imm)];
pub const RD_RT_SA: &[Slot] = &[Gpr(Field::Rd), Gpr(Field::Rt), Dec(Field::Sa)];
pub const RD_RS: &[Slot] = &[Gpr(Field::Rd), Gpr(Field::Rs)];
pub const RS_RT: &[Slot] = &[Gpr(Field::Rs), Gpr(Field::Rt)];
pub const RS: &[Slot] = &[Gpr(Field::Rs)];
pub const RD: &[Slot] = &[Gpr(Field::Rd)];
pub const RT_MEM: &[Slot] = &[
    Gpr(Field::Rt),
    Slot::Mem { offset: Field::Offset, base: Field::Base },
];
pub const RT_FS: &[Slot] = &[Gpr(Field::Rt), Fpr(Field::Fs)];
pub const FT_MEM_RAW: &[Slot] = &[
    Fpr(Field::Ft),
    Slot::MemRaw { offset: Field::Offset, base: Field::Base },
];
pub const FD_FS: &[Slot] = &[Fpr(Field::Fd), Fpr(Field::Fs)];
pub const FD_FS_FT: &[Slot] = &[Fpr(Field::Fd), Fpr(Field::Fs), Fpr(Field::Ft)];
pub const FS_FT: &[Slot] = &[Fpr(Field::Fs), Fpr(Field::Ft)];
pub const OFFSET: &[Slot] = &[Dec(Field::Offset)];
pub const CODE: &[Slot] = &[Dec(Field::Code)];
pub const COP_FUN: &[Slot] = &[Dec(Field::CopFun)];
pub const STYPE: &[Slot] = &[Dec(Field::Stype)];
pub const INSTR_INDEX: &[Slot] = &[Dec(Field::InstrIndex)];

macro_rules! catalog {
    ($( $op:ident $mnemonic:literal $shape:ident $([$sign:ident])? => $template:expr; )+) => {
        /// Instruction identity without operands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Op {
            $($op,)+
        }

        /// A decoded instruction: the mnemonic plus its operand values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(tag = "op", content = "fields")]
        pub enum Insn {
            $($op($shape),)+
        }

        impl Op {
            pub const ALL: &'static [Op] = &[$(Op::$op,)+];

            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Op::$op => $mnemonic,)+
                }
            }

            pub const fn template(self) -> &'static [Slot] {
                match self {
                    $(Op::$op => $template,)+
                }
            }

            /// Signedness of the `imm` field, for mnemonics that have one.
            pub const fn imm_sign(self) -> Option<Sign> {
                match self {
                    $(Op::$op => catalog!(@sign $($sign)?),)+
                }
            }

            pub const fn shape_name(self) -> &'static str {
                match self {
                    $(Op::$op => <$shape as Shape>::NAME,)+
                }
            }

            pub const fn fields(self) -> &'static [FieldDecl] {
                match self {
                    $(Op::$op => <$shape as Shape>::FIELDS,)+
                }
            }

            /// Extract this instruction's operands from `word`. The caller has
            /// already established that `word` encodes `self`.
            pub fn decode(self, word: u32) -> Insn {
                let sign = self.imm_sign();
                match self {
                    $(Op::$op => Insn::$op(<$shape as Shape>::decode(word, sign)),)+
                }
            }
        }

        impl Insn {
            pub const fn op(&self) -> Op {
                match self {
                    $(Insn::$op(_) => Op::$op,)+
                }
            }

            pub fn field(&self, field: Field) -> Option<i32> {
                match self {
                    $(Insn::$op(s) => s.get(field),)+
                }
            }
        }
    };
    (@sign) => { None };
    (@sign $sign:ident) => { Some(Sign::$sign) };
}

impl Insn {
    pub fn mnemonic(&self) -> &'static str {
        self.op().mnemonic()
    }
}

catalog! {
    // SPECIAL
    Sll "SLL" RdRtSa => RD_RT_SA;
    Srl "SRL" RdRtSa => RD_RT_SA;
    Sra "SRA" RdRtSa => RD_RT_SA;
    Sllv "SLLV" RdRsRt => RD_RS_RT;
    Srlv "SRLV" RdRsRt => RD_RS_RT;
    Srav "SRAV" RdRsRt => RD_RT_RS;
    Jr "JR" Rs => RS;
    Jalr "JALR" RdRs => RD_RS;
    Syscall "SYSCALL" Code => CODE;
    Break "BREAK" Code => CODE;
    Sync "SYNC" Stype => STYPE;
    Mfhi "MFHI" Rd => RD;
    Mthi "MTHI" Rs => RS;
    Mflo "MFLO" Rd => RD;
    Mtlo "MTLO" Rs => RS;
    Dsllv "DSLLV" RdRsRt => RD_RT_RS;
    Dsrlv "DSRLV" RdRsRt => RD_RT_RS;
    Dsrav "DSRAV" RdRsRt => RD_RT_RS;
    Mult "MULT" RsRt => RS_RT;
    Multu "MULTU" RsRt => RS_RT;
    Div "DIV" RsRt => RS_RT;
    Divu "DIVU" RsRt => RS_RT;
    Dmult "DMULT" RsRt => RS_RT;
    Dmultu "DMULTU" RsRt => RS_RT;
    Ddiv "DDIV" RsRt => RS_RT;
    Ddivu "DDIVU" RsRt => RS_RT;
    Add "ADD" RdRsRt => RD_RS_RT;
    Addu "ADDU" RdRsRt => RD_RS_RT;
    Sub "SUB" RdRsRt => RD_RS_RT;
    Subu "SUBU" RdRsRt => RD_RS_RT;
    And "AND" RdRsRt => RD_RS_RT;
    Or "OR" RdRsRt => RD_RS_RT;
    Xor "XOR" RdRsRt => RD_RS_RT;
    Nor "NOR" RdRsRt => RD_RS_RT;
    Slt "SLT" RdRsRt => RD_RS_RT;
    Sltu "SLTU" RdRsRt => RD_RS_RT;
    Dadd "DADD" RdRsRt => RD_RS_RT;
    Daddu "DADDU" RdRsRt => RD_RS_RT;
    Dsub "DSUB" RdRsRt => RD_RS_RT;
    Dsubu "DSUBU" RdRsRt => RD_RS_RT;
    Tge "TGE" CodeRsRt => RS_RT;
    Tgeu "TGEU" CodeRsRt => RS_RT;
    Tlt "TLT" CodeRsRt => RS_RT;
    Tltu "TLTU" CodeRsRt => RS_RT;
    Teq "TEQ" CodeRsRt => RS_RT;
    Tne "TNE" CodeRsRt => RS_RT;
    Dsll "DSLL" RdRtSa => RD_RT_SA;
    Dsrl "DSRL" RdRtSa => RD_RT_SA;
    Dsra "DSRA" RdRtSa => RD_RT_SA;
    Dsll32 "DSLL32" RdRtSa => RD_RT_SA;
    Dsrl32 "DSRL32" RdRtSa => RD_RT_SA;
    Dsra32 "DSRA32" RdRtSa => RD_RT_SA;

    // REGIMM
    Bltz "BLTZ" OffsetRs => RS_OFFSET;
    Bgez "BGEZ" OffsetRs => RS_OFFSET;
    Bltzl "BLTZL" OffsetRs => RS_OFFSET;
    Bgezl "BGEZL" OffsetRs => RS_OFFSET;
    Tgei "TGEI" ImmRs[Signed] => RS_IMM;
    Tgeiu "TGEIU" ImmRs[Signed] => RS_IMM;
    Tlti "TLTI" ImmRs[Signed] => RS_IMM;
    Tltiu "TLTIU" ImmRs[Signed] => RS_IMM;
    Teqi "TEQI" ImmRs[Signed] => RS_IMM;
    Tnei "TNEI" ImmRs[Signed] => RS_IMM;
    Bltzal "BLTZAL" OffsetRs => RS_OFFSET;
    Bgezal "BGEZAL" OffsetRs => RS_OFFSET;
    Bltzall "BLTZALL" OffsetRs => RS_OFFSET;
    Bgezall "BGEZALL" OffsetRs => RS_OFFSET;

    // primary opcodes
    J "J" InstrIndex => INSTR_INDEX;
    Jal "JAL" InstrIndex => INSTR_INDEX;
    Beq "BEQ" OffsetRsRt => RS_RT_OFFSET;
    Bne "BNE" OffsetRsRt => RS_RT_OFFSET;
    Blez "BLEZ" OffsetRs => RS_OFFSET;
    Bgtz "BGTZ" OffsetRs => RS_OFFSET;
    Addi "ADDI" ImmRsRt[Signed] => RT_RS_IMM;
    Addiu "ADDIU" ImmRsRt[Signed] => RT_RS_IMM;
    Slti "SLTI" ImmRsRt[Signed] => RT_RS_IMM;
    Sltiu "SLTIU" ImmRsRt[Unsigned] => RT_RS_IMM;
    Andi "ANDI" ImmRsRt[Unsigned] => RT_RS_IMM;
    Ori "ORI" ImmRsRt[Unsigned] => RT_RS_IMM;
    Xori "XORI" ImmRsRt[Unsigned] => RT_RS_IMM;
    Lui "LUI" ImmRt[Unsigned] => RT_IMM;
    Cop0 "COP0" CopFun => COP_FUN;

    // COP1
    Mfc1 "MFC1" FsRt => RT_FS;
    Dmfc1 "DMFC1" FsRt => RT_FS;
    Cfc1 "CFC1" FsRt => RT_FS;
    Mtc1 "MTC1" FsRt => RT_FS;
    Dmtc1 "DMTC1" FsRt => RT_FS;
    Ctc1 "CTC1" FsRt => RT_FS;
    Bc1f "BC1F" Offset => OFFSET;
    Bc1t "BC1T" Offset => OFFSET;
    Bc1fl "BC1FL" Offset => OFFSET;
    Bc1tl "BC1TL" Offset => OFFSET;
    AddS "ADD_S" FdFsFt => FD_FS_FT;
    SubS "SUB_S" FdFsFt => FD_FS_FT;
    MulS "MUL_S" FdFsFt => FD_FS_FT;
    DivS "DIV_S" FdFsFt => FD_FS_FT;
    SqrtS "SQRT_S" FdFs => FD_FS;
    AbsS "ABS_S" FdFs => FD_FS;
    MovS "MOV_S" FdFs => FD_FS;
    NegS "NEG_S" FdFs => FD_FS;
    RoundLS "ROUND_L_S" FdFs => FD_FS;
    TruncLS "TRUNC_L_S" FdFs => FD_FS;
    CeilLS "CEIL_L_S" FdFs => FD_FS;
    FloorLS "FLOOR_L_S" FdFs => FD_FS;
    RoundWS "ROUND_W_S" FdFs => FD_FS;
    TruncWS "TRUNC_W_S" FdFs => FD_FS;
    CeilWS "CEIL_W_S" FdFs => FD_FS;
    FloorWS "FLOOR_W_S" FdFs => FD_FS;
    CvtDS "CVT_D_S" FdFs => FD_FS;
    CvtWS "CVT_W_S" FdFs => FD_FS;
    CvtLS "CVT_L_S" FdFs => FD_FS;
    CFS "C_F_S" FsFt => FS_FT;
    CUnS "C_UN_S" FsFt => FS_FT;
    CEqS "C_EQ_S" FsFt => FS_FT;
    CUeqS "C_UEQ_S" FsFt => FS_FT;
    COltS "C_OLT_S" FsFt => FS_FT;
    CUltS "C_ULT_S" FsFt => FS_FT;
    COleS "C_OLE_S" FsFt => FS_FT;
    CUleS "C_ULE_S" FsFt => FS_FT;
    CSfS "C_SF_S" FsFt => FS_FT;
    CNgleS "C_NGLE_S" FsFt => FS_FT;
    CSeqS "C_SEQ_S" FsFt => FS_FT;
    CNglS "C_NGL_S" FsFt => FS_FT;
    CLtS "C_LT_S" FsFt => FS_FT;
    CNgeS "C_NGE_S" FsFt => FS_FT;
    CLeS "C_LE_S" FsFt => FS_FT;
    CNgtS "C_NGT_S" FsFt => FS_FT;
    AddD "ADD_D" FdFsFt => FD_FS_FT;
    SubD "SUB_D" FdFsFt => FD_FS_FT;
    MulD "MUL_D" FdFsFt => FD_FS_FT;
    DivD "DIV_D" FdFsFt => FD_FS_FT;
    SqrtD "SQRT_D" FdFs => FD_FS;
    AbsD "ABS_D" FdFs => FD_FS;
    MovD "MOV_D" FdFs => FD_FS;
    NegD "NEG_D" FdFs => FD_FS;
    RoundLD "ROUND_L_D" FdFs => FD_FS;
    TruncLD "TRUNC_L_D" FdFs => FD_FS;
    CeilLD "CEIL_L_D" FdFs => FD_FS;
    FloorLD "FLOOR_L_D" FdFs => FD_FS;
    RoundWD "ROUND_W_D" FdFs => FD_FS;
    TruncWD "TRUNC_W_D" FdFs => FD_FS;
    CeilWD "CEIL_W_D" FdFs => FD_FS;
    FloorWD "FLOOR_W_D" FdFs => FD_FS;
    CvtSD "CVT_S_D" FdFs => FD_FS;
    CvtWD "CVT_W_D" FdFs => FD_FS;
    CvtLD "CVT_L_D" FdFs => FD_FS;
    CFD "C_F_D" FsFt => FS_FT;
    CUnD "C_UN_D" FsFt => FS_FT;
    CEqD "C_EQ_D" FsFt => FS_FT;
    CUeqD "C_UEQ_D" FsFt => FS_FT;
    COltD "C_OLT_D" FsFt => FS_FT;
    CUltD "C_ULT_D" FsFt => FS_FT;
    COleD "C_OLE_D" FsFt => FS_FT;
    CUleD "C_ULE_D" FsFt => FS_FT;
    CSfD "C_SF_D" FsFt => FS_FT;
    CNgleD "C_NGLE_D" FsFt => FS_FT;
    CSeqD "C_SEQ_D" FsFt => FS_FT;
    CNglD "C_NGL_D" FsFt => FS_FT;
    CLtD "C_LT_D" FsFt => FS_FT;
    CNgeD "C_NGE_D" FsFt => FS_FT;
    CLeD "C_LE_D" FsFt => FS_FT;
    CNgtD "C_NGT_D" FsFt => FS_FT;
    CvtSW "CVT_S_W" FdFs => FD_FS;
    CvtDW "CVT_D_W" FdFs => FD_FS;
    CvtSL "CVT_S_L" FdFs => FD_FS;
    CvtDL "CVT_D_L" FdFs => FD_FS;

    // COP2 multimedia
    Paddsh "PADDSH" FdFsFt => FD_FS_FT;
    Psubsh "PSUBSH" FdFsFt => FD_FS_FT;
    Pshufh "PSHUFH" FdFsFt => FD_FS_FT;
    Punpcklhw "PUNPCKLHW" FdFsFt => FD_FS_FT;
    Pavgh "PAVGH" FdFsFt => FD_FS_FT;
    Pcmpeqw "PCMPEQW" FdFsFt => FD_FS_FT;
    Psllw "PSLLW" FdFsFt => FD_FS_FT;
    Psrlw "PSRLW" FdFsFt => FD_FS_FT;
    AdduCp2 "ADDU_CP2" FdFsFt => FD_FS_FT;
    SubuCp2 "SUBU_CP2" FdFsFt => FD_FS_FT;
    SliCp2 "SLI_CP2" FdFsFt => FD_FS_FT;
    SrlCp2 "SRL_CP2" FdFsFt => FD_FS_FT;
    Paddush "PADDUSH" FdFsFt => FD_FS_FT;
    Psubush "PSUBUSH" FdFsFt => FD_FS_FT;
    Packsswh "PACKSSWH" FdFsFt => FD_FS_FT;
    Punpckhhw "PUNPCKHHW" FdFsFt => FD_FS_FT;
    Pavgb "PAVGB" FdFsFt => FD_FS_FT;
    Pcmpgtw "PCMPGTW" FdFsFt => FD_FS_FT;
    Psllh "PSLLH" FdFsFt => FD_FS_FT;
    Psrlh "PSRLH" FdFsFt => FD_FS_FT;
    OrCp2 "OR_CP2" FdFsFt => FD_FS_FT;
    Pasubub "PASUBUB" FdFsFt => FD_FS_FT;
    DsllCp2 "DSLL_CP2" FdFsFt => FD_FS_FT;
    DsrlCp2 "DSRL_CP2" FdFsFt => FD_FS_FT;
    Paddh "PADDH" FdFsFt => FD_FS_FT;
    Psubh "PSUBH" FdFsFt => FD_FS_FT;
    Packsshb "PACKSSHB" FdFsFt => FD_FS_FT;
    Punpcklbh "PUNPCKLBH" FdFsFt => FD_FS_FT;
    Pmaxsh "PMAXSH" FdFsFt => FD_FS_FT;
    Pcmpeqh "PCMPEQH" FdFsFt => FD_FS_FT;
    Pmullh "PMULLH" FdFsFt => FD_FS_FT;
    Psraw "PSRAW" FdFsFt => FD_FS_FT;
    AddCp2 "ADD_CP2" FdFsFt => FD_FS_FT;
    SubCp2 "SUB_CP2" FdFsFt => FD_FS_FT;
    Pextrh "PEXTRH" FdFsFt => FD_FS_FT;
    SraCp2 "SRA_CP2" FdFsFt => FD_FS_FT;
    Paddw "PADDW" FdFsFt => FD_FS_FT;
    Psubw "PSUBW" FdFsFt => FD_FS_FT;
    Packushb "PACKUSHB" FdFsFt => FD_FS_FT;
    Punpckhbh "PUNPCKHBH" FdFsFt => FD_FS_FT;
    Pminsh "PMINSH" FdFsFt => FD_FS_FT;
    Pcmpgth "PCMPGTH" FdFsFt => FD_FS_FT;
    Pmulhh "PMULHH" FdFsFt => FD_FS_FT;
    Psrah "PSRAH" FdFsFt => FD_FS_FT;
    DaddCp2 "DADD_CP2" FdFsFt => FD_FS_FT;
    DsubCp2 "DSUB_CP2" FdFsFt => FD_FS_FT;
    Pmaddhw "PMADDHW" FdFsFt => FD_FS_FT;
    DsraCp2 "DSRA_CP2" FdFsFt => FD_FS_FT;
    Paddsb "PADDSB" FdFsFt => FD_FS_FT;
    Psubsb "PSUBSB" FdFsFt => FD_FS_FT;
    XorCp2 "XOR_CP2" FdFsFt => FD_FS_FT;
    Pinsrh0 "PINSRH_0" FdFsFt => FD_FS_FT;
    Pmaxub "PMAXUB" FdFsFt => FD_FS_FT;
    Pcmpeqb "PCMPEQB" FdFsFt => FD_FS_FT;
    Pmuluw "PMULUW" FdFsFt => FD_FS_FT;
    Punpcklwd "PUNPCKLWD" FdFsFt => FD_FS_FT;
    SequCp2 "SEQU_CP2" FdFsFt => FD_FS_FT;
    SltuCp2 "SLTU_CP2" FdFsFt => FD_FS_FT;
    SleuCp2 "SLEU_CP2" FdFsFt => FD_FS_FT;
    Biadd "BIADD" FdFs => FD_FS;
    Paddusb "PADDUSB" FdFsFt => FD_FS_FT;
    Psubusb "PSUBUSB" FdFsFt => FD_FS_FT;
    NorCp2 "NOR_CP2" FdFsFt => FD_FS_FT;
    Pinsrh1 "PINSRH_1" FdFsFt => FD_FS_FT;
    Pminub "PMINUB" FdFsFt => FD_FS_FT;
    Pcmpgtb "PCMPGTB" FdFsFt => FD_FS_FT;
    Pmulhuh "PMULHUH" FdFsFt => FD_FS_FT;
    Punpckhwd "PUNPCKHWD" FdFsFt => FD_FS_FT;
    SeqCp2 "SEQ_CP2" FdFsFt => FD_FS_FT;
    SltCp2 "SLT_CP2" FdFsFt => FD_FS_FT;
    SleCp2 "SLE_CP2" FdFsFt => FD_FS_FT;
    Pmovmskb "PMOVMSKB" FdFs => FD_FS;
    Paddb "PADDB" FdFsFt => FD_FS_FT;
    Psubb "PSUBB" FdFsFt => FD_FS_FT;
    AndCp2 "AND_CP2" FdFsFt => FD_FS_FT;
    Pinsrh2 "PINSRH_2" FdFsFt => FD_FS_FT;
    Paddd "PADDD" FdFsFt => FD_FS_FT;
    Psubd "PSUBD" FdFsFt => FD_FS_FT;
    Pandn "PANDN" FdFsFt => FD_FS_FT;
    Pinsrh3 "PINSRH_3" FdFsFt => FD_FS_FT;

    // primary opcodes, continued
    Cop3 "COP3" CopFun => COP_FUN;
    Beql "BEQL" OffsetRsRt => RS_RT_OFFSET;
    Bnel "BNEL" OffsetRsRt => RS_RT_OFFSET;
    Blezl "BLEZL" OffsetRs => RS_OFFSET;
    Bgtzl "BGTZL" OffsetRs => RS_OFFSET;
    Daddi "DADDI" ImmRsRt[Signed] => RT_RS_IMM;
    Daddiu "DADDIU" ImmRsRt[Signed] => RT_RS_IMM;
    Ldl "LDL" BaseOffsetRt => RT_MEM;
    Ldr "LDR" BaseOffsetRt => RT_MEM;

    // SPECIAL2
    MultG "MULT_G" RdRsRt => RD_RS_RT;
    DmultG "DMULT_G" RdRsRt => RD_RS_RT;
    MultuG "MULTU_G" RdRsRt => RD_RS_RT;
    DmultuG "DMULTU_G" RdRsRt => RD_RS_RT;
    DivG "DIV_G" RdRsRt => RD_RS_RT;
    DdivG "DDIV_G" RdRsRt => RD_RS_RT;
    DivuG "DIVU_G" RdRsRt => RD_RS_RT;
    DdivuG "DDIVU_G" RdRsRt => RD_RS_RT;
    MaddS "MADD_S" FdFsFt => FD_FS_FT;
    MaddD "MADD_D" FdFsFt => FD_FS_FT;
    MsubS "MSUB_S" FdFsFt => FD_FS_FT;
    MsubD "MSUB_D" FdFsFt => FD_FS_FT;
    NmaddS "NMADD_S" FdFsFt => FD_FS_FT;
    NmaddD "NMADD_D" FdFsFt => FD_FS_FT;
    NmsubS "NMSUB_S" FdFsFt => FD_FS_FT;
    NmsubD "NMSUB_D" FdFsFt => FD_FS_FT;
    ModG "MOD_G" RdRsRt => RD_RS_RT;
    DmodG "DMOD_G" RdRsRt => RD_RS_RT;
    ModuG "MODU_G" RdRsRt => RD_RS_RT;
    DmoduG "DMODU_G" RdRsRt => RD_RS_RT;

    // loads and stores
    Lb "LB" BaseOffsetRt => RT_MEM;
    Lh "LH" BaseOffsetRt => RT_MEM;
    Lwl "LWL" BaseOffsetRt => RT_MEM;
    Lw "LW" BaseOffsetRt => RT_MEM;
    Lbu "LBU" BaseOffsetRt => RT_MEM;
    Lhu "LHU" BaseOffsetRt => RT_MEM;
    Lwr "LWR" BaseOffsetRt => RT_MEM;
    Lwu "LWU" BaseOffsetRt => RT_MEM;
    Sb "SB" BaseOffsetRt => RT_MEM;
    Sh "SH" BaseOffsetRt => RT_MEM;
    Swl "SWL" BaseOffsetRt => RT_MEM;
    Sw "SW" BaseOffsetRt => RT_MEM;
    Sdl "SDL" BaseOffsetRt => RT_MEM;
    Sdr "SDR" BaseOffsetRt => RT_MEM;
    Swr "SWR" BaseOffsetRt => RT_MEM;
    Ll "LL" BaseOffsetRt => RT_MEM;
    Lwc1 "LWC1" BaseFtOffset => FT_MEM_RAW;
    Lwc2 "LWC2" BaseOffsetRt => RT_MEM;
    Lwc3 "LWC3" BaseOffsetRt => RT_MEM;
    Lld "LLD" BaseOffsetRt => RT_MEM;
    Ldc1 "LDC1" BaseFtOffset => FT_MEM_RAW;
    Ldc2 "LDC2" BaseOffsetRt => RT_MEM;
    Ld "LD" BaseOffsetRt => RT_MEM;
    Sc "SC" BaseOffsetRt => RT_MEM;
    Swc1 "SWC1" BaseFtOffset => FT_MEM_RAW;
    Swc2 "SWC2" BaseOffsetRt => RT_MEM;
    Swc3 "SWC3" BaseOffsetRt => RT_MEM;
    Scd "SCD" BaseOffsetRt => RT_MEM;
    Sdc1 "SDC1" BaseFtOffset => FT_MEM_RAW;
    Sdc2 "SDC2" BaseOffsetRt => RT_MEM;
    Sd "SD" BaseOffsetRt => RT_MEM;
}
