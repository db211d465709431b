use std::fmt;

use loongson_rs::{
    len_or_sentinel, print_insn, ByteSource, Columns, DisasmConfig, DisasmError, Disassembler,
    Endian, LinearMemory, NullSink,
};
use pretty_assertions::assert_eq;

struct Unmapped;

impl ByteSource for Unmapped {
    fn read(&mut self, addr: u32, _buf: &mut [u8]) -> anyhow::Result<()> {
        anyhow::bail!("nothing mapped at {addr:#x}")
    }
}

struct Refuse;

impl fmt::Write for Refuse {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn success_consumes_four_bytes() {
    let mut mem = LinearMemory::from_words(0x8000_0000, Endian::Little, &[0x4B80_000F]);
    let mut out = String::new();
    let res = print_insn(0x8000_0000, &mut mem, Endian::Little, &mut NullSink, &mut out);
    assert_eq!(len_or_sentinel(&res), 4);
    assert_eq!(out, "BIADD     f0, f0");
}

#[test]
fn byte_order_selects_the_word() {
    let mut mem = LinearMemory::from_bytes(0, vec![0x00, 0x85, 0x18, 0x04]);
    let mut out = String::new();
    print_insn(0, &mut mem, Endian::Big, &mut NullSink, &mut out).unwrap();
    assert_eq!(out, "SLLV      v1, a0, a1");

    // read little-endian this is REGIMM with rt=0x18, which is unassigned
    let mut out = String::new();
    let err = print_insn(0, &mut mem, Endian::Little, &mut NullSink, &mut out).unwrap_err();
    assert!(matches!(err, DisasmError::Undecoded { addr: 0, word: 0x0418_8500 }));
    assert_eq!(out, "");
}

#[test]
fn fetch_error_reported_once() {
    let mut reports = Vec::new();
    let mut out = String::new();
    let res = print_insn(
        0x40,
        &mut Unmapped,
        Endian::Little,
        &mut |err: &anyhow::Error, addr: u32| reports.push((addr, err.to_string())),
        &mut out,
    );
    assert_eq!(len_or_sentinel(&res), -1);
    assert!(matches!(res, Err(DisasmError::Fetch { addr: 0x40, .. })));
    assert_eq!(reports, vec![(0x40, "nothing mapped at 0x40".to_string())]);
    assert_eq!(out, "");
}

#[test]
fn undecoded_word_touches_no_sink() {
    let mut mem = LinearMemory::from_words(0, Endian::Little, &[0x0020_0000]);
    let mut calls = 0;
    let mut out = String::new();
    let mut count = |_: &anyhow::Error, _: u32| calls += 1;
    let res = print_insn(0, &mut mem, Endian::Little, &mut count, &mut out);
    assert_eq!(len_or_sentinel(&res), -1);
    assert_eq!(calls, 0);
    assert_eq!(out, "");
}

#[test]
fn short_read_at_end_of_memory() {
    let mut mem = LinearMemory::from_bytes(0, vec![0, 0, 0]);
    let mut out = String::new();
    let res = print_insn(0, &mut mem, Endian::Little, &mut NullSink, &mut out);
    assert!(matches!(res, Err(DisasmError::Fetch { .. })));
}

#[test]
fn output_sink_failure_surfaces() {
    let mut mem = LinearMemory::from_words(0, Endian::Little, &[0]);
    let res = print_insn(0, &mut mem, Endian::Little, &mut NullSink, &mut Refuse);
    assert!(matches!(res, Err(DisasmError::Output(_))));
}

#[test]
fn calls_are_independent() {
    let mut mem = LinearMemory::from_words(0, Endian::Little, &[0x0020_0000, 0x0000_0000]);
    let mut out = String::new();
    assert!(print_insn(0, &mut mem, Endian::Little, &mut NullSink, &mut out).is_err());
    assert_eq!(print_insn(4, &mut mem, Endian::Little, &mut NullSink, &mut out).unwrap(), 4);
    assert_eq!(out, "SLL       zero, zero, 0");
}

#[test]
fn disassembler_uses_configured_endian() {
    let cfg = DisasmConfig { endian: Endian::Big, columns: Columns::ADDRESS };
    let dis = Disassembler::new(cfg);
    let mut mem = LinearMemory::from_words(0x100, Endian::Big, &[0x2401_FFFF]);
    let mut out = String::new();
    assert_eq!(dis.print_insn(0x100, &mut mem, &mut NullSink, &mut out).unwrap(), 4);
    assert_eq!(out, "ADDIU     at, zero, -1");
}

#[test]
fn listing_falls_back_and_stops() {
    let dis = Disassembler::new(DisasmConfig::default());
    let mut mem = LinearMemory::from_words(0x1000, Endian::Little, &[0x03E0_0008, 0x7400_0000]);
    let lines = dis.listing(&mut mem, 0x1000, 0x1010);
    let rendered: Vec<String> = lines.iter().map(|l| l.render(Columns::ADDRESS)).collect();
    assert_eq!(
        rendered,
        vec![
            "0x00001000: JR        ra".to_string(),
            "0x00001004: .word 0x74000000".to_string(),
            "0x00001008: <oob>".to_string(),
        ]
    );
    assert_eq!(lines[0].bytes, vec![0x08, 0x00, 0xE0, 0x03]);
    assert!(lines[1].insn.is_none());
    assert_eq!(lines[2].word, None);
}

#[test]
fn listing_serializes() {
    let dis = Disassembler::new(DisasmConfig::default());
    let mut mem = LinearMemory::from_words(0, Endian::Little, &[0x4B80_000F]);
    let lines = dis.listing(&mut mem, 0, 4);
    let v = serde_json::to_value(&lines).unwrap();
    assert_eq!(v[0]["text"], "BIADD     f0, f0");
    assert_eq!(v[0]["word"], 0x4B80_000Fu32);
    assert_eq!(v[0]["insn"]["op"], "Biadd");
}

#[test]
fn config_round_trips_through_json() {
    let cfg = DisasmConfig { endian: Endian::Big, columns: Columns::ADDRESS | Columns::BYTES };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: DisasmConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
    let partial: DisasmConfig = serde_json::from_str(r#"{ "endian": "big" }"#).unwrap();
    assert_eq!(partial.endian, Endian::Big);
    assert_eq!(partial.columns, Columns::ADDRESS);
}
