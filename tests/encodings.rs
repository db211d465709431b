use loongson_rs::decoder::Decoder;
use loongson_rs::isa::ls2f::Ls2fDecoder;
use pretty_assertions::assert_eq;

// xorshift32, enough to scatter operand bits deterministically
fn next(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[test]
fn every_encoding_decodes_with_arbitrary_operands() {
    let d = Ls2fDecoder::new();
    let mut seed = 0x1234_5678;
    for e in Ls2fDecoder::encodings() {
        let free = !(e.mask | e.reserved);
        for _ in 0..64 {
            let word = e.value | (next(&mut seed) & free);
            let insn = d.decode(word);
            assert_eq!(insn.map(|i| i.op()), Some(e.op), "word {word:#010x}");
        }
        assert_eq!(d.classify(e.value | free).unwrap(), e.op);
    }
}

#[test]
fn each_reserved_bit_forces_a_miss() {
    let d = Ls2fDecoder::new();
    for e in Ls2fDecoder::encodings() {
        for bit in 0..32 {
            let b = 1u32 << bit;
            if e.reserved & b != 0 {
                assert_eq!(d.decode(e.value | b), None, "{} bit {bit}", e.op.mnemonic());
            }
        }
    }
}

#[test]
fn encodings_are_mutually_exclusive() {
    let enc = Ls2fDecoder::encodings();
    for (i, a) in enc.iter().enumerate() {
        for b in &enc[i + 1..] {
            let common = a.mask & b.mask;
            assert_ne!(
                a.value & common,
                b.value & common,
                "{} and {} overlap",
                a.op.mnemonic(),
                b.op.mnemonic()
            );
        }
    }
}

#[test]
fn decoding_is_pure() {
    let d = Ls2fDecoder::new();
    let mut seed = 0xDEAD_BEEF;
    for _ in 0..10_000 {
        let w = next(&mut seed);
        assert_eq!(d.decode(w), d.decode(w));
    }
}

#[test]
fn known_counts() {
    let enc = Ls2fDecoder::encodings();
    let cop2 = enc.iter().filter(|e| e.value >> 26 == 0x12).count();
    let special = enc.iter().filter(|e| e.value >> 26 == 0x00).count();
    let regimm = enc.iter().filter(|e| e.value >> 26 == 0x01).count();
    let cop1 = enc.iter().filter(|e| e.value >> 26 == 0x11).count();
    let special2 = enc.iter().filter(|e| e.value >> 26 == 0x1C).count();
    assert_eq!(cop2, 80);
    assert_eq!(special, 52);
    assert_eq!(regimm, 14);
    assert_eq!(cop1, 84);
    assert_eq!(special2, 20);
    assert_eq!(enc.len(), 305);
}
