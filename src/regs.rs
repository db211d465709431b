use std::borrow::Cow;

const NAMES: [Option<&str>; 32] = [
    Some("zero"), Some("at"), Some("v0"), Some("v1"),
    Some("a0"), Some("a1"), Some("a2"), Some("a3"),
    Some("a4"), Some("a5"), Some("a6"), Some("a7"),
    Some("t0"), Some("t1"), Some("t2"), Some("t3"),
    Some("s0"), Some("s1"), Some("s2"), Some("s3"),
    Some("s4"), Some("s5"), Some("s6"), Some("s7"),
    Some("t8"), Some("t9"), None, None,
    Some("gp"), Some("sp"), Some("s8"), Some("ra"),
];

/// Assembler name of general-purpose register `reg` (n64 register convention).
///
/// Registers without a conventional alias (26, 27) and anything outside
/// `0..32` come out as `r<N>`.
pub fn gpr_name(reg: u8) -> Cow<'static, str> {
    match NAMES.get(reg as usize).copied().flatten() {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("r{reg}")),
    }
}
