#![no_std]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up modules.
//======================================================================

pub use cipher; // Re-export cipher crate for downstream users

// --- Module declarations ---
pub mod block;
pub mod consts;
pub mod variant;

mod backends;
mod schedule;

use crate::block::TwineCipher;
use crate::variant::{Twine128, Twine80};

pub use crate::block::{KeySizeError, Twine};

// --- Convenience Type Aliases for Users ---

/// TWINE block cipher with an 80-bit key.
pub type Twine80Cipher = TwineCipher<Twine80>;

/// TWINE block cipher with a 128-bit key.
pub type Twine128Cipher = TwineCipher<Twine128>;
