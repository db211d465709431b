//! Loongson 2F: MIPS III/IV integer and FPU instructions plus the vendor
//! SPECIAL2 integer/FMA group and the COP2 multimedia (SIMD) group.

use crate::decoder::{arm, flatten, guarded, leaf, switch, walk, Arm, Decoder, Encoding, Node};
use crate::instructions::{Insn, Op};

const fn opcode(v: u32) -> u32 {
    v << 26
}

const fn fmt(v: u32) -> u32 {
    v << 21
}

const fn rt(v: u32) -> u32 {
    v << 16
}

/// COP2 multimedia ops are keyed on bits 25:21 and the function field together.
const fn cop2(sub: u32, funct: u32) -> u32 {
    fmt(sub) | funct
}

const FUNCT: u32 = 0x0000_003F;
const OPCODE: u32 = 0xFC00_0000;
const FMT: u32 = 0x03E0_0000;
const RT: u32 = 0x001F_0000;

const SPECIAL: &[Arm] = &[
    arm(0x00, guarded(Op::Sll, 0x03e00000)),
    arm(0x02, guarded(Op::Srl, 0x03e00000)),
    arm(0x03, guarded(Op::Sra, 0x03e00000)),
    arm(0x04, guarded(Op::Sllv, 0x000007c0)),
    arm(0x06, guarded(Op::Srlv, 0x000007c0)),
    arm(0x07, guarded(Op::Srav, 0x000007c0)),
    arm(0x08, guarded(Op::Jr, 0x001fffc0)),
    arm(0x09, guarded(Op::Jalr, 0x001f07c0)),
    arm(0x0c, leaf(Op::Syscall)),
    arm(0x0d, leaf(Op::Break)),
    arm(0x0f, guarded(Op::Sync, 0x03fff800)),
    arm(0x10, guarded(Op::Mfhi, 0x03ff07c0)),
    arm(0x11, guarded(Op::Mthi, 0x001fffc0)),
    arm(0x12, guarded(Op::Mflo, 0x03ff07c0)),
    arm(0x13, guarded(Op::Mtlo, 0x001fffc0)),
    arm(0x14, guarded(Op::Dsllv, 0x000007c0)),
    arm(0x16, guarded(Op::Dsrlv, 0x000007c0)),
    arm(0x17, guarded(Op::Dsrav, 0x000007c0)),
    arm(0x18, guarded(Op::Mult, 0x0000ffc0)),
    arm(0x19, guarded(Op::Multu, 0x0000ffc0)),
    arm(0x1a, guarded(Op::Div, 0x0000ffc0)),
    arm(0x1b, guarded(Op::Divu, 0x0000ffc0)),
    arm(0x1c, guarded(Op::Dmult, 0x0000ffc0)),
    arm(0x1d, guarded(Op::Dmultu, 0x0000ffc0)),
    arm(0x1e, guarded(Op::Ddiv, 0x0000ffc0)),
    arm(0x1f, guarded(Op::Ddivu, 0x0000ffc0)),
    arm(0x20, guarded(Op::Add, 0x000007c0)),
    arm(0x21, guarded(Op::Addu, 0x000007c0)),
    arm(0x22, guarded(Op::Sub, 0x000007c0)),
    arm(0x23, guarded(Op::Subu, 0x000007c0)),
    arm(0x24, guarded(Op::And, 0x000007c0)),
    arm(0x25, guarded(Op::Or, 0x000007c0)),
    arm(0x26, guarded(Op::Xor, 0x000007c0)),
    arm(0x27, guarded(Op::Nor, 0x000007c0)),
    arm(0x2a, guarded(Op::Slt, 0x000007c0)),
    arm(0x2b, guarded(Op::Sltu, 0x000007c0)),
    arm(0x2c, guarded(Op::Dadd, 0x000007c0)),
    arm(0x2d, guarded(Op::Daddu, 0x000007c0)),
    arm(0x2e, guarded(Op::Dsub, 0x000007c0)),
    arm(0x2f, guarded(Op::Dsubu, 0x000007c0)),
    arm(0x30, leaf(Op::Tge)),
    arm(0x31, leaf(Op::Tgeu)),
    arm(0x32, leaf(Op::Tlt)),
    arm(0x33, leaf(Op::Tltu)),
    arm(0x34, leaf(Op::Teq)),
    arm(0x36, leaf(Op::Tne)),
    arm(0x38, guarded(Op::Dsll, 0x03e00000)),
    arm(0x3a, guarded(Op::Dsrl, 0x03e00000)),
    arm(0x3b, guarded(Op::Dsra, 0x03e00000)),
    arm(0x3c, guarded(Op::Dsll32, 0x03e00000)),
    arm(0x3e, guarded(Op::Dsrl32, 0x03e00000)),
    arm(0x3f, guarded(Op::Dsra32, 0x03e00000)),
];

const REGIMM: &[Arm] = &[
    arm(rt(0x00), leaf(Op::Bltz)),
    arm(rt(0x01), leaf(Op::Bgez)),
    arm(rt(0x02), leaf(Op::Bltzl)),
    arm(rt(0x03), leaf(Op::Bgezl)),
    arm(rt(0x08), leaf(Op::Tgei)),
    arm(rt(0x09), leaf(Op::Tgeiu)),
    arm(rt(0x0a), leaf(Op::Tlti)),
    arm(rt(0x0b), leaf(Op::Tltiu)),
    arm(rt(0x0c), leaf(Op::Teqi)),
    arm(rt(0x0e), leaf(Op::Tnei)),
    arm(rt(0x10), leaf(Op::Bltzal)),
    arm(rt(0x11), leaf(Op::Bgezal)),
    arm(rt(0x12), leaf(Op::Bltzall)),
    arm(rt(0x13), leaf(Op::Bgezall)),
];

const COP1_BC: &[Arm] = &[
    arm(rt(0x00), leaf(Op::Bc1f)),
    arm(rt(0x01), leaf(Op::Bc1t)),
    arm(rt(0x02), leaf(Op::Bc1fl)),
    arm(rt(0x03), leaf(Op::Bc1tl)),
];

const COP1_S: &[Arm] = &[
    arm(0x00, leaf(Op::AddS)),
    arm(0x01, leaf(Op::SubS)),
    arm(0x02, leaf(Op::MulS)),
    arm(0x03, leaf(Op::DivS)),
    arm(0x04, guarded(Op::SqrtS, 0x001f0000)),
    arm(0x05, guarded(Op::AbsS, 0x001f0000)),
    arm(0x06, guarded(Op::MovS, 0x001f0000)),
    arm(0x07, guarded(Op::NegS, 0x001f0000)),
    arm(0x08, guarded(Op::RoundLS, 0x001f0000)),
    arm(0x09, guarded(Op::TruncLS, 0x001f0000)),
    arm(0x0a, guarded(Op::CeilLS, 0x001f0000)),
    arm(0x0b, guarded(Op::FloorLS, 0x001f0000)),
    arm(0x0c, guarded(Op::RoundWS, 0x001f0000)),
    arm(0x0d, guarded(Op::TruncWS, 0x001f0000)),
    arm(0x0e, guarded(Op::CeilWS, 0x001f0000)),
    arm(0x0f, guarded(Op::FloorWS, 0x001f0000)),
    arm(0x21, guarded(Op::CvtDS, 0x001f0000)),
    arm(0x24, guarded(Op::CvtWS, 0x001f0000)),
    arm(0x25, guarded(Op::CvtLS, 0x001f0000)),
    arm(0x30, guarded(Op::CFS, 0x000007c0)),
    arm(0x31, guarded(Op::CUnS, 0x000007c0)),
    arm(0x32, guarded(Op::CEqS, 0x000007c0)),
    arm(0x33, guarded(Op::CUeqS, 0x000007c0)),
    arm(0x34, guarded(Op::COltS, 0x000007c0)),
    arm(0x35, guarded(Op::CUltS, 0x000007c0)),
    arm(0x36, guarded(Op::COleS, 0x000007c0)),
    arm(0x37, guarded(Op::CUleS, 0x000007c0)),
    arm(0x38, guarded(Op::CSfS, 0x000007c0)),
    arm(0x39, guarded(Op::CNgleS, 0x000007c0)),
    arm(0x3a, guarded(Op::CSeqS, 0x000007c0)),
    arm(0x3b, guarded(Op::CNglS, 0x000007c0)),
    arm(0x3c, guarded(Op::CLtS, 0x000007c0)),
    arm(0x3d, guarded(Op::CNgeS, 0x000007c0)),
    arm(0x3e, guarded(Op::CLeS, 0x000007c0)),
    arm(0x3f, guarded(Op::CNgtS, 0x000007c0)),
];

const COP1_D: &[Arm] = &[
    arm(0x00, leaf(Op::AddD)),
    arm(0x01, leaf(Op::SubD)),
    arm(0x02, leaf(Op::MulD)),
    arm(0x03, leaf(Op::DivD)),
    arm(0x04, guarded(Op::SqrtD, 0x001f0000)),
    arm(0x05, guarded(Op::AbsD, 0x001f0000)),
    arm(0x06, guarded(Op::MovD, 0x001f0000)),
    arm(0x07, guarded(Op::NegD, 0x001f0000)),
    arm(0x08, guarded(Op::RoundLD, 0x001f0000)),
    arm(0x09, guarded(Op::TruncLD, 0x001f0000)),
    arm(0x0a, guarded(Op::CeilLD, 0x001f0000)),
    arm(0x0b, guarded(Op::FloorLD, 0x001f0000)),
    arm(0x0c, guarded(Op::RoundWD, 0x001f0000)),
    arm(0x0d, guarded(Op::TruncWD, 0x001f0000)),
    arm(0x0e, guarded(Op::CeilWD, 0x001f0000)),
    arm(0x0f, guarded(Op::FloorWD, 0x001f0000)),
    arm(0x20, guarded(Op::CvtSD, 0x001f0000)),
    arm(0x24, guarded(Op::CvtWD, 0x001f0000)),
    arm(0x25, guarded(Op::CvtLD, 0x001f0000)),
    arm(0x30, guarded(Op::CFD, 0x000007c0)),
    arm(0x31, guarded(Op::CUnD, 0x000007c0)),
    arm(0x32, guarded(Op::CEqD, 0x000007c0)),
    arm(0x33, guarded(Op::CUeqD, 0x000007c0)),
    arm(0x34, guarded(Op::COltD, 0x000007c0)),
    arm(0x35, guarded(Op::CUltD, 0x000007c0)),
    arm(0x36, guarded(Op::COleD, 0x000007c0)),
    arm(0x37, guarded(Op::CUleD, 0x000007c0)),
    arm(0x38, guarded(Op::CSfD, 0x000007c0)),
    arm(0x39, guarded(Op::CNgleD, 0x000007c0)),
    arm(0x3a, guarded(Op::CSeqD, 0x000007c0)),
    arm(0x3b, guarded(Op::CNglD, 0x000007c0)),
    arm(0x3c, guarded(Op::CLtD, 0x000007c0)),
    arm(0x3d, guarded(Op::CNgeD, 0x000007c0)),
    arm(0x3e, guarded(Op::CLeD, 0x000007c0)),
    arm(0x3f, guarded(Op::CNgtD, 0x000007c0)),
];

const COP1_W: &[Arm] = &[
    arm(0x20, guarded(Op::CvtSW, 0x001f0000)),
    arm(0x21, guarded(Op::CvtDW, 0x001f0000)),
];

const COP1_L: &[Arm] = &[
    arm(0x20, guarded(Op::CvtSL, 0x001f0000)),
    arm(0x21, guarded(Op::CvtDL, 0x001f0000)),
];

const COP1: &[Arm] = &[
    arm(fmt(0x00), guarded(Op::Mfc1, 0x000007ff)),
    arm(fmt(0x01), guarded(Op::Dmfc1, 0x000007ff)),
    arm(fmt(0x02), guarded(Op::Cfc1, 0x000007ff)),
    arm(fmt(0x04), guarded(Op::Mtc1, 0x000007ff)),
    arm(fmt(0x05), guarded(Op::Dmtc1, 0x000007ff)),
    arm(fmt(0x06), guarded(Op::Ctc1, 0x000007ff)),
    arm(fmt(0x08), switch(RT, COP1_BC)),
    arm(fmt(0x10), switch(FUNCT, COP1_S)),
    arm(fmt(0x11), switch(FUNCT, COP1_D)),
    arm(fmt(0x14), switch(FUNCT, COP1_W)),
    arm(fmt(0x15), switch(FUNCT, COP1_L)),
];

const COP2: &[Arm] = &[
    arm(cop2(0x18, 0x00), leaf(Op::Paddsh)),
    arm(cop2(0x18, 0x01), leaf(Op::Psubsh)),
    arm(cop2(0x18, 0x02), leaf(Op::Pshufh)),
    arm(cop2(0x18, 0x03), leaf(Op::Punpcklhw)),
    arm(cop2(0x18, 0x08), leaf(Op::Pavgh)),
    arm(cop2(0x18, 0x09), leaf(Op::Pcmpeqw)),
    arm(cop2(0x18, 0x0a), leaf(Op::Psllw)),
    arm(cop2(0x18, 0x0b), leaf(Op::Psrlw)),
    arm(cop2(0x18, 0x0c), leaf(Op::AdduCp2)),
    arm(cop2(0x18, 0x0d), leaf(Op::SubuCp2)),
    arm(cop2(0x18, 0x0e), leaf(Op::SliCp2)),
    arm(cop2(0x18, 0x0f), leaf(Op::SrlCp2)),
    arm(cop2(0x19, 0x00), leaf(Op::Paddush)),
    arm(cop2(0x19, 0x01), leaf(Op::Psubush)),
    arm(cop2(0x19, 0x02), leaf(Op::Packsswh)),
    arm(cop2(0x19, 0x03), leaf(Op::Punpckhhw)),
    arm(cop2(0x19, 0x08), leaf(Op::Pavgb)),
    arm(cop2(0x19, 0x09), leaf(Op::Pcmpgtw)),
    arm(cop2(0x19, 0x0a), leaf(Op::Psllh)),
    arm(cop2(0x19, 0x0b), leaf(Op::Psrlh)),
    arm(cop2(0x19, 0x0c), leaf(Op::OrCp2)),
    arm(cop2(0x19, 0x0d), leaf(Op::Pasubub)),
    arm(cop2(0x19, 0x0e), leaf(Op::DsllCp2)),
    arm(cop2(0x19, 0x0f), leaf(Op::DsrlCp2)),
    arm(cop2(0x1a, 0x00), leaf(Op::Paddh)),
    arm(cop2(0x1a, 0x01), leaf(Op::Psubh)),
    arm(cop2(0x1a, 0x02), leaf(Op::Packsshb)),
    arm(cop2(0x1a, 0x03), leaf(Op::Punpcklbh)),
    arm(cop2(0x1a, 0x08), leaf(Op::Pmaxsh)),
    arm(cop2(0x1a, 0x09), leaf(Op::Pcmpeqh)),
    arm(cop2(0x1a, 0x0a), leaf(Op::Pmullh)),
    arm(cop2(0x1a, 0x0b), leaf(Op::Psraw)),
    arm(cop2(0x1a, 0x0c), leaf(Op::AddCp2)),
    arm(cop2(0x1a, 0x0d), leaf(Op::SubCp2)),
    arm(cop2(0x1a, 0x0e), leaf(Op::Pextrh)),
    arm(cop2(0x1a, 0x0f), leaf(Op::SraCp2)),
    arm(cop2(0x1b, 0x00), leaf(Op::Paddw)),
    arm(cop2(0x1b, 0x01), leaf(Op::Psubw)),
    arm(cop2(0x1b, 0x02), leaf(Op::Packushb)),
    arm(cop2(0x1b, 0x03), leaf(Op::Punpckhbh)),
    arm(cop2(0x1b, 0x08), leaf(Op::Pminsh)),
    arm(cop2(0x1b, 0x09), leaf(Op::Pcmpgth)),
    arm(cop2(0x1b, 0x0a), leaf(Op::Pmulhh)),
    arm(cop2(0x1b, 0x0b), leaf(Op::Psrah)),
    arm(cop2(0x1b, 0x0c), leaf(Op::DaddCp2)),
    arm(cop2(0x1b, 0x0d), leaf(Op::DsubCp2)),
    arm(cop2(0x1b, 0x0e), leaf(Op::Pmaddhw)),
    arm(cop2(0x1b, 0x0f), leaf(Op::DsraCp2)),
    arm(cop2(0x1c, 0x00), leaf(Op::Paddsb)),
    arm(cop2(0x1c, 0x01), leaf(Op::Psubsb)),
    arm(cop2(0x1c, 0x02), leaf(Op::XorCp2)),
    arm(cop2(0x1c, 0x03), leaf(Op::Pinsrh0)),
    arm(cop2(0x1c, 0x08), leaf(Op::Pmaxub)),
    arm(cop2(0x1c, 0x09), leaf(Op::Pcmpeqb)),
    arm(cop2(0x1c, 0x0a), leaf(Op::Pmuluw)),
    arm(cop2(0x1c, 0x0b), leaf(Op::Punpcklwd)),
    arm(cop2(0x1c, 0x0c), leaf(Op::SequCp2)),
    arm(cop2(0x1c, 0x0d), leaf(Op::SltuCp2)),
    arm(cop2(0x1c, 0x0e), leaf(Op::SleuCp2)),
    arm(cop2(0x1c, 0x0f), guarded(Op::Biadd, 0x001f0000)),
    arm(cop2(0x1d, 0x00), leaf(Op::Paddusb)),
    arm(cop2(0x1d, 0x01), leaf(Op::Psubusb)),
    arm(cop2(0x1d, 0x02), leaf(Op::NorCp2)),
    arm(cop2(0x1d, 0x03), leaf(Op::Pinsrh1)),
    arm(cop2(0x1d, 0x08), leaf(Op::Pminub)),
    arm(cop2(0x1d, 0x09), leaf(Op::Pcmpgtb)),
    arm(cop2(0x1d, 0x0a), leaf(Op::Pmulhuh)),
    arm(cop2(0x1d, 0x0b), leaf(Op::Punpckhwd)),
    arm(cop2(0x1d, 0x0c), leaf(Op::SeqCp2)),
    arm(cop2(0x1d, 0x0d), leaf(Op::SltCp2)),
    arm(cop2(0x1d, 0x0e), leaf(Op::SleCp2)),
    arm(cop2(0x1d, 0x0f), guarded(Op::Pmovmskb, 0x001f0000)),
    arm(cop2(0x1e, 0x00), leaf(Op::Paddb)),
    arm(cop2(0x1e, 0x01), leaf(Op::Psubb)),
    arm(cop2(0x1e, 0x02), leaf(Op::AndCp2)),
    arm(cop2(0x1e, 0x03), leaf(Op::Pinsrh2)),
    arm(cop2(0x1f, 0x00), leaf(Op::Paddd)),
    arm(cop2(0x1f, 0x01), leaf(Op::Psubd)),
    arm(cop2(0x1f, 0x02), leaf(Op::Pandn)),
    arm(cop2(0x1f, 0x03), leaf(Op::Pinsrh3)),
];

const MADD: &[Arm] = &[
    arm(fmt(0x10), leaf(Op::MaddS)),
    arm(fmt(0x11), leaf(Op::MaddD)),
];

const MSUB: &[Arm] = &[
    arm(fmt(0x10), leaf(Op::MsubS)),
    arm(fmt(0x11), leaf(Op::MsubD)),
];

const NMADD: &[Arm] = &[
    arm(fmt(0x10), leaf(Op::NmaddS)),
    arm(fmt(0x11), leaf(Op::NmaddD)),
];

const NMSUB: &[Arm] = &[
    arm(fmt(0x10), leaf(Op::NmsubS)),
    arm(fmt(0x11), leaf(Op::NmsubD)),
];

const SPECIAL2: &[Arm] = &[
    arm(0x10, guarded(Op::MultG, 0x000007c0)),
    arm(0x11, guarded(Op::DmultG, 0x000007c0)),
    arm(0x12, guarded(Op::MultuG, 0x000007c0)),
    arm(0x13, guarded(Op::DmultuG, 0x000007c0)),
    arm(0x14, guarded(Op::DivG, 0x000007c0)),
    arm(0x15, guarded(Op::DdivG, 0x000007c0)),
    arm(0x16, guarded(Op::DivuG, 0x000007c0)),
    arm(0x17, guarded(Op::DdivuG, 0x000007c0)),
    arm(0x18, switch(FMT, MADD)),
    arm(0x19, switch(FMT, MSUB)),
    arm(0x1a, switch(FMT, NMADD)),
    arm(0x1b, switch(FMT, NMSUB)),
    arm(0x1c, guarded(Op::ModG, 0x000007c0)),
    arm(0x1d, guarded(Op::DmodG, 0x000007c0)),
    arm(0x1e, guarded(Op::ModuG, 0x000007c0)),
    arm(0x1f, guarded(Op::DmoduG, 0x000007c0)),
];

const PRIMARY: &[Arm] = &[
    arm(opcode(0x00), switch(FUNCT, SPECIAL)),
    arm(opcode(0x01), switch(RT, REGIMM)),
    arm(opcode(0x02), leaf(Op::J)),
    arm(opcode(0x03), leaf(Op::Jal)),
    arm(opcode(0x04), leaf(Op::Beq)),
    arm(opcode(0x05), leaf(Op::Bne)),
    arm(opcode(0x06), guarded(Op::Blez, 0x001f0000)),
    arm(opcode(0x07), guarded(Op::Bgtz, 0x001f0000)),
    arm(opcode(0x08), leaf(Op::Addi)),
    arm(opcode(0x09), leaf(Op::Addiu)),
    arm(opcode(0x0a), leaf(Op::Slti)),
    arm(opcode(0x0b), leaf(Op::Sltiu)),
    arm(opcode(0x0c), leaf(Op::Andi)),
    arm(opcode(0x0d), leaf(Op::Ori)),
    arm(opcode(0x0e), leaf(Op::Xori)),
    arm(opcode(0x0f), guarded(Op::Lui, 0x03e00000)),
    arm(opcode(0x10), leaf(Op::Cop0)),
    arm(opcode(0x11), switch(FMT, COP1)),
    arm(opcode(0x12), switch(FMT | FUNCT, COP2)),
    arm(opcode(0x13), leaf(Op::Cop3)),
    arm(opcode(0x14), leaf(Op::Beql)),
    arm(opcode(0x15), leaf(Op::Bnel)),
    arm(opcode(0x16), guarded(Op::Blezl, 0x001f0000)),
    arm(opcode(0x17), guarded(Op::Bgtzl, 0x001f0000)),
    arm(opcode(0x18), leaf(Op::Daddi)),
    arm(opcode(0x19), leaf(Op::Daddiu)),
    arm(opcode(0x1a), leaf(Op::Ldl)),
    arm(opcode(0x1b), leaf(Op::Ldr)),
    arm(opcode(0x1c), switch(FUNCT, SPECIAL2)),
    arm(opcode(0x20), leaf(Op::Lb)),
    arm(opcode(0x21), leaf(Op::Lh)),
    arm(opcode(0x22), leaf(Op::Lwl)),
    arm(opcode(0x23), leaf(Op::Lw)),
    arm(opcode(0x24), leaf(Op::Lbu)),
    arm(opcode(0x25), leaf(Op::Lhu)),
    arm(opcode(0x26), leaf(Op::Lwr)),
    arm(opcode(0x27), leaf(Op::Lwu)),
    arm(opcode(0x28), leaf(Op::Sb)),
    arm(opcode(0x29), leaf(Op::Sh)),
    arm(opcode(0x2a), leaf(Op::Swl)),
    arm(opcode(0x2b), leaf(Op::Sw)),
    arm(opcode(0x2c), leaf(Op::Sdl)),
    arm(opcode(0x2d), leaf(Op::Sdr)),
    arm(opcode(0x2e), leaf(Op::Swr)),
    arm(opcode(0x30), leaf(Op::Ll)),
    arm(opcode(0x31), leaf(Op::Lwc1)),
    arm(opcode(0x32), leaf(Op::Lwc2)),
    arm(opcode(0x33), leaf(Op::Lwc3)),
    arm(opcode(0x34), leaf(Op::Lld)),
    arm(opcode(0x35), leaf(Op::Ldc1)),
    arm(opcode(0x36), leaf(Op::Ldc2)),
    arm(opcode(0x37), leaf(Op::Ld)),
    arm(opcode(0x38), leaf(Op::Sc)),
    arm(opcode(0x39), leaf(Op::Swc1)),
    arm(opcode(0x3a), leaf(Op::Swc2)),
    arm(opcode(0x3b), leaf(Op::Swc3)),
    arm(opcode(0x3c), leaf(Op::Scd)),
    arm(opcode(0x3d), leaf(Op::Sdc1)),
    arm(opcode(0x3e), leaf(Op::Sdc2)),
    arm(opcode(0x3f), leaf(Op::Sd)),
];

/// Root of the Loongson 2F decode tree, switching on the major opcode.
pub const ROOT: Node = switch(OPCODE, PRIMARY);

/// Stateless Loongson 2F decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ls2fDecoder;

impl Ls2fDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Just the instruction identity, without extracting operands.
    pub fn classify(&self, raw32: u32) -> Option<Op> {
        walk(&ROOT, raw32)
    }

    /// Every encoding the decoder accepts, in opcode order.
    pub fn encodings() -> Vec<Encoding> {
        flatten(&ROOT)
    }
}

impl Decoder for Ls2fDecoder {
    fn decode(&self, raw32: u32) -> Option<Insn> {
        self.classify(raw32).map(|op| op.decode(raw32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::check_tree;
    use std::collections::HashSet;

    #[test]
    fn tree_is_well_formed() {
        check_tree(&ROOT).unwrap();
    }

    #[test]
    fn every_op_has_exactly_one_encoding() {
        let enc = Ls2fDecoder::encodings();
        assert_eq!(enc.len(), Op::ALL.len());
        let ops: HashSet<Op> = enc.iter().map(|e| e.op).collect();
        assert_eq!(ops.len(), Op::ALL.len());
    }

    #[test]
    fn reserved_bits_never_overlap_dispatch_bits() {
        for e in Ls2fDecoder::encodings() {
            assert_eq!(e.mask & e.reserved, 0, "{}", e.op.mnemonic());
        }
    }

    #[test]
    fn classify_samples() {
        let d = Ls2fDecoder::new();
        assert_eq!(d.classify(0x0000_0000), Some(Op::Sll));
        assert_eq!(d.classify(0x03E0_0008), Some(Op::Jr));
        assert_eq!(d.classify(0x4B80_000F), Some(Op::Biadd));
        assert_eq!(d.classify(0x4BA0_000F), Some(Op::Pmovmskb));
        assert_eq!(d.classify(0x4622_0800), Some(Op::AddD));
        assert_eq!(d.classify(0x7220_0018), Some(Op::MaddD));
        assert_eq!(d.classify(0x4501_0010), Some(Op::Bc1t));
        assert_eq!(d.classify(0x8FA4_0010), Some(Op::Lw));
    }

    #[test]
    fn unassigned_opcodes_miss() {
        let d = Ls2fDecoder::new();
        // SPECIAL funct 0x01 (MOVCI on later cores)
        assert_eq!(d.classify(0x0000_0001), None);
        // major opcode 0x1D
        assert_eq!(d.classify(0x7400_0000), None);
        // COP1 fmt 0x03
        assert_eq!(d.classify(0x4460_0000), None);
        // COP2 with bits 25:24 != 0b11
        assert_eq!(d.classify(0x4800_0000), None);
        // COP2 sub 6, funct 0x08 is not assigned
        assert_eq!(d.classify(0x4BC0_0008), None);
        // SPECIAL2 FMA with fmt W
        assert_eq!(d.classify(0x7280_0018), None);
    }
}
