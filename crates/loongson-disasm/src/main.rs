use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use loongson_disasm::{load_raw_bin, Image};
use loongson_rs::{Columns, DisasmConfig, Disassembler, Endian, Ls2fDecoder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Loongson 2F disassembler CLI", long_about = None)]
struct Cli {
    /// Assemble instruction words big-endian
    #[arg(long, global = true)]
    big_endian: bool,
    /// JSON disassembler config; command-line flags are applied on top
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Load address for the binary in target address space (hex or dec)
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections {
        #[command(flatten)]
        image: ImageArgs,
    },
    /// Disassemble a range [start, end) in bytes
    Range {
        #[command(flatten)]
        image: ImageArgs,
        /// Start address (hex or dec)
        #[arg(value_parser = parse_u32)]
        start: u32,
        /// End address (hex or dec, exclusive)
        #[arg(value_parser = parse_u32)]
        end: u32,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Show the assembled instruction word
        #[arg(long)]
        show_word: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Decode instruction words given on the command line
    Word {
        /// Instruction words (hex or dec)
        #[arg(value_name = "WORD", required = true, value_parser = parse_u32)]
        words: Vec<u32>,
    },
    /// List every encoding the decoder accepts
    Opcodes {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize)]
struct OpcodeOut {
    mnemonic: &'static str,
    shape: &'static str,
    mask: u32,
    value: u32,
    reserved: u32,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn load_config(path: Option<&Path>, big_endian: bool) -> Result<DisasmConfig> {
    let mut cfg = match path {
        Some(p) => {
            let txt = std::fs::read_to_string(p)
                .with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&txt).with_context(|| format!("parsing {}", p.display()))?
        }
        None => DisasmConfig::default(),
    };
    if big_endian {
        cfg.endian = Endian::Big;
    }
    Ok(cfg)
}

fn render_range(
    img: &mut Image,
    cfg: DisasmConfig,
    start: u32,
    end: u32,
    format: OutputFormat,
) -> Result<String> {
    anyhow::ensure!(end >= start, "end must be >= start");
    let lines = Disassembler::new(cfg).listing(img, start, end);
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&lines)?,
        OutputFormat::Text => {
            let mut buf = String::new();
            for line in &lines {
                let _ = writeln!(buf, "{}", line.render(cfg.columns));
            }
            buf
        }
    })
}

fn render_words(cfg: DisasmConfig, words: &[u32]) -> String {
    let dis = Disassembler::new(cfg);
    let mut buf = String::new();
    for &w in words {
        match dis.decode_word(w) {
            Some(insn) => {
                let _ = writeln!(buf, "{w:#010x}: {insn}");
            }
            None => {
                let _ = writeln!(buf, "{w:#010x}: .word {w:#010x}");
            }
        }
    }
    buf
}

fn opcodes() -> Vec<OpcodeOut> {
    Ls2fDecoder::encodings()
        .into_iter()
        .map(|e| OpcodeOut {
            mnemonic: e.op.mnemonic(),
            shape: e.op.shape_name(),
            mask: e.mask,
            value: e.value,
            reserved: e.reserved,
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut cfg = load_config(cli.config.as_deref(), cli.big_endian)?;

    match cli.cmd {
        Command::Sections { image } => {
            let img = load_raw_bin(&image.input, image.base, image.skip, image.len)?;
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!(
                    "{:<10} {:#010x}   {:#010x}   {:<6} {:<6}",
                    s.name,
                    s.base,
                    s.end(),
                    s.perms,
                    s.kind
                );
            }
        }
        Command::Range { image, start, end, show_bytes, show_word, format, out } => {
            let mut img = load_raw_bin(&image.input, image.base, image.skip, image.len)?;
            if show_bytes {
                cfg.columns |= Columns::BYTES;
            }
            if show_word {
                cfg.columns |= Columns::WORD;
            }
            let text = render_range(&mut img, cfg, start, end, format)?;
            if let Some(path) = out {
                std::fs::write(path, text)?;
            } else {
                print!("{}", text);
            }
        }
        Command::Word { words } => {
            print!("{}", render_words(cfg, &words));
        }
        Command::Opcodes { format } => {
            let ops = opcodes();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ops)?),
                OutputFormat::Text => {
                    for o in &ops {
                        println!(
                            "{:<10} mask={:#010x} match={:#010x} zero={:#010x} {}",
                            o.mnemonic, o.mask, o.value, o.reserved, o.shape
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loongson_disasm::Segment;

    fn image(base: u32, words: &[u32]) -> Image {
        let bytes = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let seg = Segment {
            name: "s".into(),
            base,
            bytes,
            perms: "r-x",
            kind: "raw",
        };
        Image { segments: vec![seg] }
    }

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("0X4b80000f").unwrap(), 0x4b80_000f);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn cli_parses_range() {
        let cli = Cli::try_parse_from([
            "loongson-disasm",
            "--big-endian",
            "range",
            "fw.bin",
            "--base",
            "0xbfc00000",
            "0xbfc00000",
            "0xbfc00010",
            "--show-bytes",
        ])
        .unwrap();
        assert!(cli.big_endian);
        match cli.cmd {
            Command::Range { image, start, end, show_bytes, format, .. } => {
                assert_eq!(image.input, PathBuf::from("fw.bin"));
                assert_eq!(image.base, 0xbfc0_0000);
                assert_eq!((start, end), (0xbfc0_0000, 0xbfc0_0010));
                assert!(show_bytes);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn range_disasm_decodes_simple() {
        let mut img = image(0x80, &[0x0000_0000, 0x4b80_000f, 0x7400_0000]);
        let cfg = DisasmConfig::default();
        let text = render_range(&mut img, cfg, 0x80, 0x90, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0x00000080: SLL       zero, zero, 0");
        assert_eq!(lines[1], "0x00000084: BIADD     f0, f0");
        assert_eq!(lines[2], "0x00000088: .word 0x74000000");
        assert_eq!(lines[3], "0x0000008c: <oob>");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn range_json_lists_lines() {
        let mut img = image(0, &[0x2401_ffff]);
        let cfg = DisasmConfig::default();
        let json = render_range(&mut img, cfg, 0, 4, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v[0]["addr"], 0);
        assert_eq!(v[0]["text"], "ADDIU     at, zero, -1");
        assert_eq!(v[0]["insn"]["op"], "Addiu");
        assert_eq!(v[0]["insn"]["fields"]["imm"], -1);
    }

    #[test]
    fn range_rejects_reversed_bounds() {
        let mut img = image(0, &[0]);
        assert!(render_range(&mut img, DisasmConfig::default(), 8, 4, OutputFormat::Text).is_err());
    }

    #[test]
    fn words_fall_back_to_dot_word() {
        let text = render_words(DisasmConfig::default(), &[0x0000_0000, 0x0020_0000]);
        assert_eq!(text, "0x00000000: SLL       zero, zero, 0\n0x00200000: .word 0x00200000\n");
    }

    #[test]
    fn config_file_then_flags() {
        let path = std::env::temp_dir().join(format!("_ls2f_cfg_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "columns": "ADDRESS | WORD" }"#).unwrap();
        let cfg = load_config(Some(&path), false).unwrap();
        assert_eq!(cfg.endian, Endian::Little);
        assert_eq!(cfg.columns, Columns::ADDRESS | Columns::WORD);
        let cfg = load_config(Some(&path), true).unwrap();
        assert_eq!(cfg.endian, Endian::Big);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn opcode_table_covers_catalog() {
        let ops = opcodes();
        assert_eq!(ops.len(), loongson_rs::Op::ALL.len());
        let biadd = ops.iter().find(|o| o.mnemonic == "BIADD").unwrap();
        assert_eq!(biadd.value, 0x4b80_000f);
        assert_eq!(biadd.reserved, 0x001f_0000);
    }
}
