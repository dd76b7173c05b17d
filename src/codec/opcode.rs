//! Opcode byte layout shared by the encoders and decoders.
//!
//! Every opcode is one byte: the high nibble selects the operation, the low
//! nibble is a 4-bit parameter `Y` interpreted as `Y + 1`. The chunked
//! classes scale the parameter by 16 or 64 pixels.

/// SetColor: `0x0X` sets the current color register to `X` (0-13).
pub const SET_COLOR: u8 = 0x00;
/// Skip 1-16 unchanged pixels: `0x1Y` (delta only).
pub const SKIP_SHORT: u8 = 0x10;
/// Repeat current color 1-16 times: `0x2Y`.
pub const REPEAT_SHORT: u8 = 0x20;
/// Chunks of 16 pixels: `0x3Y`. Repeat in baseline streams, Skip in delta.
pub const CHUNK16: u8 = 0x30;
/// Repeat current color in chunks of 16 changed pixels: `0x4Y` (delta only).
pub const REPEAT_CHUNK16: u8 = 0x40;
/// Skip unchanged pixels in chunks of 64: `0x5Y` (delta only).
pub const SKIP_CHUNK64: u8 = 0x50;
/// Terminates one frame's opcode stream.
pub const END_OF_FRAME: u8 = 0xFF;

/// Extract the operation class (high nibble, low nibble zeroed).
#[inline]
pub const fn class(op: u8) -> u8 {
    op & 0xF0
}

/// Extract the biased parameter: low nibble plus one, range 1-16.
#[inline]
pub const fn param(op: u8) -> usize {
    (op & 0x0F) as usize + 1
}

/// Build a SetColor opcode.
#[inline]
pub fn set_color(color: u8) -> u8 {
    debug_assert!((color as usize) < crate::palette::PALETTE_SIZE);
    SET_COLOR | color
}

/// Build a short skip opcode covering `n` pixels (1-16).
#[inline]
pub fn skip_short(n: usize) -> u8 {
    debug_assert!((1..=16).contains(&n));
    SKIP_SHORT | (n - 1) as u8
}

/// Build a short repeat opcode covering `n` pixels (1-16).
#[inline]
pub fn repeat_short(n: usize) -> u8 {
    debug_assert!((1..=16).contains(&n));
    REPEAT_SHORT | (n - 1) as u8
}

/// Build a 16-pixel-chunk opcode covering `chunks * 16` pixels (1-16 chunks).
#[inline]
pub fn chunk16(chunks: usize) -> u8 {
    debug_assert!((1..=16).contains(&chunks));
    CHUNK16 | (chunks - 1) as u8
}

/// Build a delta repeat opcode covering `chunks * 16` changed pixels.
#[inline]
pub fn repeat_chunk16(chunks: usize) -> u8 {
    debug_assert!((1..=16).contains(&chunks));
    REPEAT_CHUNK16 | (chunks - 1) as u8
}

/// Build a delta skip opcode covering `chunks * 64` unchanged pixels.
#[inline]
pub fn skip_chunk64(chunks: usize) -> u8 {
    debug_assert!((1..=16).contains(&chunks));
    SKIP_CHUNK64 | (chunks - 1) as u8
}
