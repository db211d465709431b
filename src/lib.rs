pub mod bits;
pub mod decoder;
pub mod disasm;
pub mod error;
pub mod fields;
pub mod instructions;
pub mod memory;
pub mod regs;

pub mod isa {
    pub mod ls2f; // Loongson 2F (MIPS64 + COP2 multimedia)
}

pub use decoder::Decoder;
pub use disasm::{print_insn, Columns, DisasmConfig, Disassembler, Line};
pub use error::{len_or_sentinel, DisasmError};
pub use instructions::{Insn, Op};
pub use isa::ls2f::Ls2fDecoder;
pub use memory::{ByteSource, Endian, ErrorSink, LinearMemory, NullSink};
