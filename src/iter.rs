//! Walking the set bits of a word, lowest first

use std::iter::FusedIterator;

use crate::bitboards::{isolate_lsb, Bitword};
use crate::bitscan::bit_scan_forward;
use crate::popcount::popcount;

/// Clear the lowest set bit of `v`.
///
/// Returns the remaining word and the index of the bit that was removed, or
/// `None` when `v` is empty.
#[inline]
pub fn pop_lsb(v: Bitword) -> Option<(Bitword, u32)> {
    if v == 0 {
        return None;
    }
    Some((v & (v - 1), bit_scan_forward(v)))
}

/// Each set bit of `v` as a single-bit word
#[inline]
pub fn iter_lsb(v: Bitword) -> IterLsb {
    IterLsb { rest: v }
}

/// The index of each set bit of `v`, in increasing order
#[inline]
pub fn iter_bitscan_forward(v: Bitword) -> IterBitScanForward {
    IterBitScanForward { rest: v }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterLsb {
    rest: Bitword,
}

impl Iterator for IterLsb {
    type Item = Bitword;

    #[inline]
    fn next(&mut self) -> Option<Bitword> {
        if self.rest == 0 {
            return None;
        }
        let bit = isolate_lsb(self.rest);
        self.rest ^= bit;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.rest) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for IterLsb {}
impl FusedIterator for IterLsb {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterBitScanForward {
    rest: Bitword,
}

impl Iterator for IterBitScanForward {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let (rest, idx) = pop_lsb(self.rest)?;
        self.rest = rest;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.rest) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for IterBitScanForward {}
impl FusedIterator for IterBitScanForward {}
