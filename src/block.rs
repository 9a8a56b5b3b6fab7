//======================================================================
// src/block.rs
// TWINE cipher cores and the key-binding construction layer.
//======================================================================

use crate::backends::soft;
use crate::consts::BLOCK_BYTES;
use crate::schedule::{self, RoundKeys};
use crate::variant::{Twine128, Twine80, TwineVariant};
use cipher::consts::U8;
use cipher::{
    AlgorithmName, Block, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser,
    Key, KeyInit, KeySizeUser,
};
use core::fmt;
use core::marker::PhantomData;

/// The TWINE block cipher bound to an expanded key.
///
/// Immutable once constructed; a shared reference may encrypt and decrypt
/// from any number of threads concurrently.
pub struct TwineCipher<V: TwineVariant> {
    /// Round keys, 8 nibbles per round; row 0 keeps round indexing 1-based.
    round_keys: RoundKeys,
    /// PhantomData to associate the core with a specific `TwineVariant`.
    _variant: PhantomData<V>,
}

impl<V: TwineVariant> KeySizeUser for TwineCipher<V> {
    type KeySize = V::KeySize;
}

impl<V: TwineVariant> BlockSizeUser for TwineCipher<V> {
    type BlockSize = U8; // 64-bit blocks
}

impl<V: TwineVariant> KeyInit for TwineCipher<V> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            round_keys: schedule::expand::<V>(key.as_slice()),
            _variant: PhantomData,
        }
    }
}

impl<V: TwineVariant> BlockCipher for TwineCipher<V> {}

impl<V: TwineVariant> BlockEncrypt for TwineCipher<V> {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut soft::EncBack(&self.round_keys));
    }
}

impl<V: TwineVariant> BlockDecrypt for TwineCipher<V> {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut soft::DecBack(&self.round_keys));
    }
}

impl<V: TwineVariant> Clone for TwineCipher<V> {
    fn clone(&self) -> Self {
        Self {
            round_keys: self.round_keys,
            _variant: PhantomData,
        }
    }
}

impl<V: TwineVariant> AlgorithmName for TwineCipher<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TWINE-{}", V::KEY_SIZE * 8)
    }
}

impl<V: TwineVariant> fmt::Debug for TwineCipher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round keys are key material; keep them out of debug output.
        write!(f, "TwineCipher<TWINE-{}> {{ ... }}", V::KEY_SIZE * 8)
    }
}

/// Error returned when a key is neither 10 nor 16 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySizeError(pub usize);

impl fmt::Display for KeySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "twine: invalid key size {}", self.0)
    }
}

impl core::error::Error for KeySizeError {}

/// TWINE cipher with the key size chosen at run time.
///
/// [`new`](Twine::new) picks the key schedule from the key length. Callers
/// that know the key size statically should prefer the typed
/// [`Twine80Cipher`](crate::Twine80Cipher) and
/// [`Twine128Cipher`](crate::Twine128Cipher), which also plug into the
/// `cipher`-based mode-of-operation crates.
#[derive(Clone)]
pub enum Twine {
    /// Instance keyed for TWINE-80.
    Twine80(TwineCipher<Twine80>),
    /// Instance keyed for TWINE-128.
    Twine128(TwineCipher<Twine128>),
}

impl BlockSizeUser for Twine {
    type BlockSize = U8;
}

impl Twine {
    /// Binds a key to a cipher instance. `key` must be 10 or 16 bytes.
    pub fn new(key: &[u8]) -> Result<Self, KeySizeError> {
        match key.len() {
            10 => {
                let key = Key::<TwineCipher<Twine80>>::from_slice(key);
                Ok(Self::Twine80(TwineCipher::new(key)))
            }
            16 => {
                let key = Key::<TwineCipher<Twine128>>::from_slice(key);
                Ok(Self::Twine128(TwineCipher::new(key)))
            }
            n => Err(KeySizeError(n)),
        }
    }

    /// Block size in bytes.
    pub const fn block_size(&self) -> usize {
        BLOCK_BYTES
    }

    /// Encrypts the first 8 bytes of `src` into the first 8 bytes of `dst`.
    ///
    /// Panics if either slice is shorter than 8 bytes.
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) {
        let mut block = Block::<Self>::clone_from_slice(&src[..BLOCK_BYTES]);
        match self {
            Self::Twine80(c) => c.encrypt_block(&mut block),
            Self::Twine128(c) => c.encrypt_block(&mut block),
        }
        dst[..BLOCK_BYTES].copy_from_slice(block.as_slice());
    }

    /// Decrypts the first 8 bytes of `src` into the first 8 bytes of `dst`.
    ///
    /// Panics if either slice is shorter than 8 bytes.
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) {
        let mut block = Block::<Self>::clone_from_slice(&src[..BLOCK_BYTES]);
        match self {
            Self::Twine80(c) => c.decrypt_block(&mut block),
            Self::Twine128(c) => c.decrypt_block(&mut block),
        }
        dst[..BLOCK_BYTES].copy_from_slice(block.as_slice());
    }
}

impl fmt::Debug for Twine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twine80(c) => fmt::Debug::fmt(c, f),
            Self::Twine128(c) => fmt::Debug::fmt(c, f),
        }
    }
}
