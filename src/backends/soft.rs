//======================================================================
// src/backends/soft.rs
// Software (scalar) implementation of the TWINE block transform.
//======================================================================

use crate::consts::{BLOCK_NIBBLES, RK_NIBBLES, ROUNDS, SBOX, SHUF, SHUF_INV};
use crate::schedule::RoundKeys;
use cipher::consts::{U1, U8};
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

/// Encrypting backend borrowing the expanded round keys.
pub(crate) struct EncBack<'a>(pub(crate) &'a RoundKeys);

impl BlockSizeUser for EncBack<'_> {
    type BlockSize = U8;
}

impl ParBlocksSizeUser for EncBack<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for EncBack<'_> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut x = unpack(block.get_in().as_slice());
        for i in 1..ROUNDS {
            feistel(&mut x, &self.0[i]);
            x = shuffle(&x, &SHUF);
        }
        feistel(&mut x, &self.0[ROUNDS]);
        pack(&x, block.get_out().as_mut_slice());
    }
}

/// Decrypting backend borrowing the expanded round keys.
pub(crate) struct DecBack<'a>(pub(crate) &'a RoundKeys);

impl BlockSizeUser for DecBack<'_> {
    type BlockSize = U8;
}

impl ParBlocksSizeUser for DecBack<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for DecBack<'_> {
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut x = unpack(block.get_in().as_slice());
        for i in (2..=ROUNDS).rev() {
            feistel(&mut x, &self.0[i]);
            x = shuffle(&x, &SHUF_INV);
        }
        feistel(&mut x, &self.0[1]);
        pack(&x, block.get_out().as_mut_slice());
    }
}

/// Splits a block into nibbles: `2i` is the high nibble of byte `i`.
#[inline(always)]
pub(crate) fn unpack(bytes: &[u8]) -> [u8; BLOCK_NIBBLES] {
    let mut x = [0u8; BLOCK_NIBBLES];
    for (i, &b) in bytes.iter().enumerate() {
        x[2 * i] = b >> 4;
        x[2 * i + 1] = b & 0x0F;
    }
    x
}

/// Reassembles nibbles back into bytes.
#[inline(always)]
pub(crate) fn pack(x: &[u8; BLOCK_NIBBLES], out: &mut [u8]) {
    for (i, b) in out.iter_mut().enumerate() {
        *b = x[2 * i] << 4 | x[2 * i + 1];
    }
}

/// One Feistel layer: each odd nibble absorbs `S[even nibble ^ key nibble]`.
#[inline(always)]
fn feistel(x: &mut [u8; BLOCK_NIBBLES], rk: &[u8; RK_NIBBLES]) {
    for j in 0..RK_NIBBLES {
        x[2 * j + 1] ^= SBOX[(x[2 * j] ^ rk[j]) as usize];
    }
}

/// Rebuilds the block with position `table[h]` receiving nibble `h`.
#[inline(always)]
fn shuffle(x: &[u8; BLOCK_NIBBLES], table: &[usize; BLOCK_NIBBLES]) -> [u8; BLOCK_NIBBLES] {
    let mut y = [0u8; BLOCK_NIBBLES];
    for h in 0..BLOCK_NIBBLES {
        y[table[h]] = x[h];
    }
    y
}
