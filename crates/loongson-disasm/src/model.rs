use anyhow::{anyhow, Result};
use loongson_rs::ByteSource;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    /// One past the last mapped address.
    pub fn end(&self) -> u64 {
        self.base as u64 + self.bytes.len() as u64
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.base && (addr as u64) < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    anyhow::ensure!(
        (base as u64 + payload.len() as u64) <= 1u64 << 32,
        "image does not fit in the 32-bit address space at {base:#010x}"
    );
    debug!("loaded {} bytes from {} at {base:#010x}", payload.len(), path.display());
    let seg = Segment {
        name: "segment0".into(),
        base,
        bytes: payload.to_vec(),
        perms: "r-x",
        kind: "raw",
    };
    Ok(Image { segments: vec![seg] })
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    img.segments
        .iter()
        .find(|s| s.contains(addr))
        .map(|s| s.bytes[(addr - s.base) as usize])
}

impl ByteSource for Image {
    fn read(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        for (i, b) in buf.iter_mut().enumerate() {
            let a = addr
                .checked_add(i as u32)
                .ok_or_else(|| anyhow!("read at {addr:#010x} wraps the address space"))?;
            *b = read_u8(self, a).ok_or_else(|| anyhow!("address {a:#010x} is not mapped"))?;
        }
        Ok(())
    }
}
