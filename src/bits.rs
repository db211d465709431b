//! Bit-field extraction over 32-bit instruction words.

/// Bits `[offset, offset + width)` of `word`, right-justified.
#[inline]
pub const fn extract32(word: u32, offset: u32, width: u32) -> u32 {
    debug_assert!(width >= 1 && offset + width <= 32);
    (word >> offset) & (u32::MAX >> (32 - width))
}

/// Like [`extract32`], with the top bit of the field sign-extended.
#[inline]
pub const fn sextract32(word: u32, offset: u32, width: u32) -> i32 {
    debug_assert!(width >= 1 && offset + width <= 32);
    ((word << (32 - width - offset)) as i32) >> (32 - width)
}
