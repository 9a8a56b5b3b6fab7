//======================================================================
// src/schedule.rs
// TWINE key expansion: derives the 36 round keys from the master key.
//======================================================================

use crate::consts::{RK_NIBBLES, RK_ROWS, ROUNDS, ROUND_CONST, SBOX, WK_MAX_NIBBLES};
use crate::variant::TwineVariant;
use zeroize::Zeroize;

/// Expanded round-key schedule: 8 nibbles per round, row 0 unused.
pub(crate) type RoundKeys = [[u8; RK_NIBBLES]; RK_ROWS];

/// Expands `key` into the full round-key schedule.
///
/// The working register holds the key as nibbles (high nibble first) and
/// is remixed and rotated once per round; it is wiped before returning.
pub(crate) fn expand<V: TwineVariant>(key: &[u8]) -> RoundKeys {
    debug_assert_eq!(key.len(), V::KEY_SIZE);

    let mut reg = [0u8; WK_MAX_NIBBLES];
    let wk = &mut reg[..V::WK_NIBBLES];
    for (i, &b) in key.iter().enumerate() {
        wk[2 * i] = b >> 4;
        wk[2 * i + 1] = b & 0x0F;
    }

    let mut rk = [[0u8; RK_NIBBLES]; RK_ROWS];
    for i in 1..ROUNDS {
        tap::<V>(&mut rk[i], wk);

        for &(dst, src) in V::MIX_TAPS {
            wk[dst] ^= SBOX[wk[src] as usize];
        }
        let con = ROUND_CONST[i];
        wk[7] ^= con >> 3;
        wk[19] ^= con & 7;

        // Rotate left by four nibbles; the evicted four re-enter the
        // tail in (1, 2, 3, 0) order.
        let (t0, t1, t2, t3) = (wk[0], wk[1], wk[2], wk[3]);
        wk.copy_within(4.., 0);
        let tail = V::WK_NIBBLES - 4;
        wk[tail] = t1;
        wk[tail + 1] = t2;
        wk[tail + 2] = t3;
        wk[tail + 3] = t0;
    }
    tap::<V>(&mut rk[ROUNDS], wk);

    reg.zeroize();
    rk
}

/// Copies the round-key nibbles out of the working register.
#[inline]
fn tap<V: TwineVariant>(row: &mut [u8; RK_NIBBLES], wk: &[u8]) {
    for (j, &pos) in V::RK_TAPS.iter().enumerate() {
        row[j] = wk[pos];
    }
}
