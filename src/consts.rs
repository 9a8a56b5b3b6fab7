//======================================================================
// src/consts.rs
// Defines the fixed tables and sizes of the TWINE cipher.
//======================================================================

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 8;

/// Block size in nibbles.
pub const BLOCK_NIBBLES: usize = 16;

/// Number of cipher rounds.
pub const ROUNDS: usize = 36;

/// Round-key rows; row 0 is a filler so rounds index 1-based.
pub const RK_ROWS: usize = ROUNDS + 1;

/// Nibbles per round key.
pub const RK_NIBBLES: usize = 8;

/// Largest working-register size across variants (TWINE-128), in nibbles.
pub const WK_MAX_NIBBLES: usize = 32;

/// The 4-bit S-box (table 1).
pub const SBOX: [u8; 16] = [
    0x0C, 0x00, 0x0F, 0x0A, 0x02, 0x0B, 0x09, 0x05,
    0x08, 0x03, 0x0D, 0x07, 0x01, 0x0E, 0x06, 0x04,
];

/// Nibble shuffle applied between rounds (table 2): position `SHUF[h]`
/// receives the nibble at position `h`.
pub const SHUF: [usize; 16] = [5, 0, 1, 4, 7, 12, 3, 8, 13, 6, 9, 2, 15, 10, 11, 14];

/// Inverse of [`SHUF`].
pub const SHUF_INV: [usize; 16] = [1, 2, 11, 6, 3, 0, 9, 4, 7, 10, 13, 14, 5, 8, 15, 12];

/// 6-bit round constants (table 3). Entry 0 is a filler so the key
/// schedule reads `ROUND_CONST[i]` for round `i`; entries 1..=35 are used.
pub const ROUND_CONST: [u8; RK_ROWS] = [
    0x00, // filler
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x23,
    0x05, 0x0A, 0x14, 0x28, 0x13, 0x26, 0x0F, 0x1E, 0x3C, 0x3B, 0x35, 0x29,
    0x11, 0x22, 0x07, 0x0E, 0x1C, 0x38, 0x33, 0x25, 0x09, 0x12, 0x24, 0x0B,
];
