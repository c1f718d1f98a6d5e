//! De Bruijn forward bit scan
//!
//! Multiplying an isolated bit `1 << k` by a de Bruijn sequence of order 6
//! shifts the sequence left by `k`, so the top 6 bits of the product are a
//! window that occurs once per `k`. [`INDEX64`] maps each window back to `k`.

use crate::bitboards::{isolate_lsb, Bitword};
use crate::error::BitOpsError;

/// De Bruijn sequence paired with [`INDEX64`]; edit one, regenerate the other.
pub const DEBRUIJN64: u64 = 0x03f7_9d71_b4cb_0a89;

/// `INDEX64[(DEBRUIJN64 << k) >> 58] == k` for every `k` in `0..64`
#[rustfmt::skip]
pub const INDEX64: [u8; 64] = [
     0,  1, 48,  2, 57, 49, 28,  3,
    61, 58, 50, 42, 38, 29, 17,  4,
    62, 55, 59, 36, 53, 51, 43, 22,
    45, 39, 33, 30, 24, 18, 12,  5,
    63, 47, 56, 27, 60, 41, 37, 16,
    54, 35, 52, 21, 44, 32, 23, 11,
    46, 26, 40, 15, 34, 20, 31, 10,
    25, 14, 19,  9, 13,  8,  7,  6,
];

const _: () = assert!(
    debruijn_table_is_consistent(),
    "INDEX64 does not invert DEBRUIJN64"
);

/// Derive the lookup table for a 64-bit de Bruijn `magic`.
///
/// Slots that no shift lands on stay 0, so for a `magic` that is not a de
/// Bruijn sequence the result does not invert the multiplication.
pub const fn index64_for(magic: u64) -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut k = 0;
    while k < 64 {
        table[((magic << k) >> 58) as usize] = k as u8;
        k += 1;
    }
    table
}

/// Whether [`INDEX64`] is exactly the table derived from [`DEBRUIJN64`]
pub const fn debruijn_table_is_consistent() -> bool {
    let derived = index64_for(DEBRUIJN64);
    let mut slot = 0;
    while slot < 64 {
        if derived[slot] != INDEX64[slot] {
            return false;
        }
        slot += 1;
    }
    // every k must also map back to itself; catches magics with colliding windows
    let mut k = 0;
    while k < 64 {
        if INDEX64[((DEBRUIJN64 << k) >> 58) as usize] as u32 != k {
            return false;
        }
        k += 1;
    }
    true
}

/// Index (0..=63) of the lowest set bit of `bb`.
///
/// `bb` must be nonzero. An empty word reads slot 0 of the table and returns
/// 0, which is indistinguishable from a real hit on bit 0; debug builds panic
/// instead. Use [`try_bit_scan_forward`] when the word may be empty.
#[inline]
pub fn bit_scan_forward(bb: Bitword) -> u32 {
    debug_assert!(bb != 0, "bit_scan_forward on an empty word");
    INDEX64[(isolate_lsb(bb).wrapping_mul(DEBRUIJN64) >> 58) as usize] as u32
}

/// Checked [`bit_scan_forward`]
#[inline]
pub fn try_bit_scan_forward(bb: Bitword) -> Result<u32, BitOpsError> {
    if bb == 0 {
        log::trace!("rejecting bit scan of an empty word");
        return Err(BitOpsError::ZeroInput);
    }
    Ok(bit_scan_forward(bb))
}
