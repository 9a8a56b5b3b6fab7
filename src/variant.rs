//======================================================================
// src/variant.rs
// Defines key-size variants for the TWINE cipher.
//======================================================================

use cipher::consts::{U10, U16};

/// A trait that defines the parameters for a specific TWINE variant.
///
/// TWINE-80 and TWINE-128 share the round function and differ only in the
/// key-schedule geometry captured by these constants.
pub trait TwineVariant: Sized + Clone + Send + Sync + 'static {
    /// Key size in bytes.
    type KeySize: cipher::ArrayLength<u8>;
    const KEY_SIZE: usize;

    /// Working-register length in nibbles during key expansion.
    const WK_NIBBLES: usize;

    /// Working-register positions tapped for the 8 round-key nibbles.
    const RK_TAPS: [usize; 8];

    /// (destination, source) position pairs of the per-round S-box mixes.
    const MIX_TAPS: &'static [(usize, usize)];
}

/// TWINE variant with an 80-bit key.
#[derive(Clone)]
pub struct Twine80;
impl TwineVariant for Twine80 {
    type KeySize = U10;
    const KEY_SIZE: usize = 10;
    const WK_NIBBLES: usize = 20;
    const RK_TAPS: [usize; 8] = [1, 3, 4, 6, 13, 14, 15, 16];
    const MIX_TAPS: &'static [(usize, usize)] = &[(1, 0), (4, 16)];
}

/// TWINE variant with a 128-bit key.
#[derive(Clone)]
pub struct Twine128;
impl TwineVariant for Twine128 {
    type KeySize = U16;
    const KEY_SIZE: usize = 16;
    const WK_NIBBLES: usize = 32;
    const RK_TAPS: [usize; 8] = [2, 3, 12, 15, 17, 18, 28, 31];
    const MIX_TAPS: &'static [(usize, usize)] = &[(1, 0), (4, 16), (23, 30)];
}
