use std::fmt;

/// Why a single disassembly step produced no instruction.
#[derive(thiserror::Error, Debug)]
pub enum DisasmError {
    #[error("Cannot read instruction at {addr:#010x}: {source}")]
    Fetch {
        addr: u32,
        #[source]
        source: anyhow::Error,
    },
    #[error("No instruction matches {word:#010x} at {addr:#010x}")]
    Undecoded { addr: u32, word: u32 },
    #[error("Output sink rejected the line")]
    Output(#[from] fmt::Error),
}

/// Collapse a step result into the conventional byte count: 4 on success,
/// -1 on any failure.
pub fn len_or_sentinel(res: &Result<usize, DisasmError>) -> i32 {
    match res {
        Ok(n) => *n as i32,
        Err(_) => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = DisasmError::Undecoded { addr: 0x10, word: 0x7400_0000 };
        assert_eq!(e.to_string(), "No instruction matches 0x74000000 at 0x00000010");
        let e = DisasmError::Fetch { addr: 4, source: anyhow::anyhow!("unmapped") };
        assert_eq!(e.to_string(), "Cannot read instruction at 0x00000004: unmapped");
    }

    #[test]
    fn sentinel() {
        assert_eq!(len_or_sentinel(&Ok(4)), 4);
        assert_eq!(len_or_sentinel(&Err(DisasmError::Output(fmt::Error))), -1);
    }
}
