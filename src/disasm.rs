use std::fmt::{self, Write as _};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::Decoder;
use crate::error::DisasmError;
use crate::fields::Field;
use crate::instructions::{Insn, Slot};
use crate::isa::ls2f::Ls2fDecoder;
use crate::memory::{ByteSource, Endian, ErrorSink};
use crate::regs::gpr_name;

impl Insn {
    fn value(&self, field: Field) -> i32 {
        // templates only name fields of their own shape
        self.field(field).unwrap_or(0)
    }

    fn write_slot(&self, f: &mut fmt::Formatter<'_>, slot: Slot) -> fmt::Result {
        match slot {
            Slot::Gpr(r) => f.write_str(&gpr_name(self.value(r) as u8)),
            Slot::Fpr(r) => write!(f, "f{}", self.value(r)),
            Slot::Dec(v) => write!(f, "{}", self.value(v)),
            Slot::Mem { offset, base } => {
                write!(f, "{}({})", self.value(offset), gpr_name(self.value(base) as u8))
            }
            Slot::MemRaw { offset, base } => {
                write!(f, "{}(r{})", self.value(offset), self.value(base))
            }
        }
    }
}

/// `MNEMONIC  op1, op2, ...` with the mnemonic left-aligned in nine columns.
impl fmt::Display for Insn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.op();
        write!(f, "{:<9}", op.mnemonic())?;
        for (i, slot) in op.template().iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            self.write_slot(f, *slot)?;
        }
        Ok(())
    }
}

bitflags! {
    /// Extra columns printed in front of the instruction text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Columns: u8 {
        const ADDRESS = 1 << 0;
        const BYTES = 1 << 1;
        const WORD = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    pub endian: Endian,
    pub columns: Columns,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            endian: Endian::Little,
            columns: Columns::ADDRESS,
        }
    }
}

/// Decode and render the instruction at `addr`.
///
/// Fetch failures are reported to `errors` before being returned. A word
/// that decodes to nothing leaves both sinks untouched. On success exactly
/// one line (without newline) is written to `out` and 4 is returned.
pub fn print_insn<S, E, W>(
    addr: u32,
    source: &mut S,
    endian: Endian,
    errors: &mut E,
    out: &mut W,
) -> Result<usize, DisasmError>
where
    S: ByteSource + ?Sized,
    E: ErrorSink + ?Sized,
    W: fmt::Write + ?Sized,
{
    step(&Ls2fDecoder, addr, source, endian, errors, out)
}

fn fetch<S: ByteSource + ?Sized>(source: &mut S, addr: u32) -> anyhow::Result<[u8; 4]> {
    let mut buf = [0u8; 4];
    source.read(addr, &mut buf)?;
    Ok(buf)
}

fn step<D, S, E, W>(
    decoder: &D,
    addr: u32,
    source: &mut S,
    endian: Endian,
    errors: &mut E,
    out: &mut W,
) -> Result<usize, DisasmError>
where
    D: Decoder + ?Sized,
    S: ByteSource + ?Sized,
    E: ErrorSink + ?Sized,
    W: fmt::Write + ?Sized,
{
    let bytes = match fetch(source, addr) {
        Ok(b) => b,
        Err(err) => {
            debug!("fetch failed at {addr:#010x}: {err:#}");
            errors.report_error(&err, addr);
            return Err(DisasmError::Fetch { addr, source: err });
        }
    };
    let word = endian.word(bytes);
    let insn = decoder
        .decode(word)
        .ok_or(DisasmError::Undecoded { addr, word })?;
    write!(out, "{insn}")?;
    Ok(4)
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub addr: u32,
    /// Raw bytes in memory order; empty when the fetch failed.
    pub bytes: Vec<u8>,
    pub word: Option<u32>,
    pub insn: Option<Insn>,
    pub text: String,
}

impl Line {
    /// Render with the requested leading columns.
    pub fn render(&self, columns: Columns) -> String {
        let mut s = String::new();
        if columns.contains(Columns::ADDRESS) {
            let _ = write!(s, "{:#010x}: ", self.addr);
        }
        if columns.contains(Columns::BYTES) {
            let hex: Vec<String> = self.bytes.iter().map(|b| format!("{b:02x}")).collect();
            let _ = write!(s, "{:<12}", hex.join(" "));
        }
        if columns.contains(Columns::WORD) {
            match self.word {
                Some(w) => {
                    let _ = write!(s, "{w:08x}  ");
                }
                None => s.push_str("          "),
            }
        }
        s.push_str(&self.text);
        s
    }
}

/// A decoder plus the settings used to drive it over memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disassembler<D = Ls2fDecoder> {
    pub cfg: DisasmConfig,
    decoder: D,
}

impl Disassembler {
    pub fn new(cfg: DisasmConfig) -> Self {
        Self { cfg, decoder: Ls2fDecoder }
    }
}

impl<D: Decoder> Disassembler<D> {
    pub fn decode_word(&self, word: u32) -> Option<Insn> {
        self.decoder.decode(word)
    }

    /// [`print_insn`] with this disassembler's decoder and byte order.
    pub fn print_insn<S, E, W>(
        &self,
        addr: u32,
        source: &mut S,
        errors: &mut E,
        out: &mut W,
    ) -> Result<usize, DisasmError>
    where
        S: ByteSource + ?Sized,
        E: ErrorSink + ?Sized,
        W: fmt::Write + ?Sized,
    {
        step(&self.decoder, addr, source, self.cfg.endian, errors, out)
    }

    /// Linear sweep over `[start, end)`, four bytes per row.
    ///
    /// Words that decode to nothing become `.word 0x........` rows. The sweep
    /// stops at the first unreadable address with a single `<oob>` row.
    pub fn listing<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
        start: u32,
        end: u32,
    ) -> Vec<Line> {
        debug!("listing {start:#010x}..{end:#010x}");
        let mut lines = Vec::new();
        let mut addr = start as u64;
        while addr < end as u64 {
            let pc = addr as u32;
            match fetch(source, pc) {
                Ok(bytes) => {
                    let word = self.cfg.endian.word(bytes);
                    let insn = self.decoder.decode(word);
                    let text = match &insn {
                        Some(i) => i.to_string(),
                        None => format!(".word {word:#010x}"),
                    };
                    lines.push(Line {
                        addr: pc,
                        bytes: bytes.to_vec(),
                        word: Some(word),
                        insn,
                        text,
                    });
                }
                Err(err) => {
                    debug!("listing stopped at {pc:#010x}: {err:#}");
                    lines.push(Line {
                        addr: pc,
                        bytes: Vec::new(),
                        word: None,
                        insn: None,
                        text: "<oob>".to_string(),
                    });
                    break;
                }
            }
            addr += 4;
        }
        lines
    }
}
