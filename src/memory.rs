use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Where instruction bytes come from.
pub trait ByteSource {
    /// Fill `buf` with the bytes at `addr..addr + buf.len()`. Either the whole
    /// buffer is filled or an error is returned.
    fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        (**self).read(addr, buf)
    }
}

/// Byte order used to assemble an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    pub fn word(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        }
    }
}

/// Receives fetch failures, e.g. to print "cannot access memory at ...".
pub trait ErrorSink {
    fn report_error(&mut self, err: &anyhow::Error, addr: u32);
}

impl<F: FnMut(&anyhow::Error, u32)> ErrorSink for F {
    fn report_error(&mut self, err: &anyhow::Error, addr: u32) {
        self(err, addr)
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report_error(&mut self, _err: &anyhow::Error, _addr: u32) {}
}

/// A flat image mapped at `base`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub mem: Vec<u8>,
    pub base: u32,
}

impl LinearMemory {
    pub fn from_bytes(base: u32, mem: Vec<u8>) -> Self {
        Self { mem, base }
    }

    /// Store `words` from `base` on, in the given byte order.
    pub fn from_words(base: u32, endian: Endian, words: &[u32]) -> Self {
        let mem = words
            .iter()
            .flat_map(|w| match endian {
                Endian::Little => w.to_le_bytes(),
                Endian::Big => w.to_be_bytes(),
            })
            .collect();
        Self { mem, base }
    }

    pub fn end(&self) -> u64 {
        self.base as u64 + self.mem.len() as u64
    }
}

impl ByteSource for LinearMemory {
    fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        let end = addr as u64 + buf.len() as u64;
        if addr < self.base || end > self.end() {
            bail!(
                "{} bytes at {addr:#010x} outside [{:#010x}, {:#010x})",
                buf.len(),
                self.base,
                self.end()
            );
        }
        let off = (addr - self.base) as usize;
        buf.copy_from_slice(&self.mem[off..off + buf.len()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endian_word() {
        let b = [0x0F, 0x00, 0x80, 0x4B];
        assert_eq!(Endian::Little.word(b), 0x4B80_000F);
        assert_eq!(Endian::Big.word(b), 0x0F00_804B);
        assert_eq!(Endian::default(), Endian::Little);
    }

    #[test]
    fn linear_memory_bounds() {
        let mut m = LinearMemory::from_bytes(0x100, vec![1, 2, 3, 4, 5, 6]);
        let mut buf = [0u8; 4];
        m.read(0x102, &mut buf).unwrap();
        assert_eq!(buf, [3, 4, 5, 6]);
        assert!(m.read(0x103, &mut buf).is_err());
        assert!(m.read(0xFE, &mut buf).is_err());
        assert!(m.read(0xFFFF_FFFE, &mut buf).is_err());
    }

    #[test]
    fn words_round_trip_per_endian() {
        for e in [Endian::Little, Endian::Big] {
            let mut m = LinearMemory::from_words(0, e, &[0x1234_5678]);
            let mut buf = [0u8; 4];
            m.read(0, &mut buf).unwrap();
            assert_eq!(e.word(buf), 0x1234_5678);
        }
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |_: &anyhow::Error, addr: u32| seen.push(addr);
            sink.report_error(&anyhow::anyhow!("boom"), 0x40);
        }
        assert_eq!(seen, vec![0x40]);
    }
}
