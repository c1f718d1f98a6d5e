//! Population count utilities

use crate::bitboards::Bitword;

/// Count set bits by clearing the lowest one until the word is empty.
///
/// Runs in O(set bits), which is cheap for sparse words.
#[inline]
pub fn popcount(mut x: Bitword) -> u32 {
    let mut count = 0;
    while x != 0 {
        x &= x - 1;
        count += 1;
    }
    count
}
