//! Branch-free bit primitives over 64-bit words for bitboard engines.
//!
//! The centerpiece is [`bit_scan_forward`], a de Bruijn multiply-and-lookup
//! scan for the lowest set bit. With the `python` feature the same operations
//! are exported as a Python extension module.

mod bitboards;
mod bitscan;
mod error;
mod iter;
mod popcount;
#[cfg(feature = "python")]
mod python;

pub use bitboards::{isolate_lsb, widen, Bitword, Widen, EMPTY, FULL};
pub use bitscan::{
    bit_scan_forward, debruijn_table_is_consistent, index64_for, try_bit_scan_forward,
    DEBRUIJN64, INDEX64,
};
pub use error::BitOpsError;
pub use iter::{iter_bitscan_forward, iter_lsb, pop_lsb, IterBitScanForward, IterLsb};
pub use popcount::popcount;
