use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::bitboards::{isolate_lsb, widen, Bitword};
use crate::bitscan::try_bit_scan_forward;
use crate::iter::{iter_bitscan_forward as bits_forward, iter_lsb as bits_lsb};
use crate::popcount::popcount;

/// Lowest set bit of a bitboard
#[pyfunction]
fn lsb(v: Bitword) -> PyResult<Bitword> {
    Ok(isolate_lsb(v))
}

/// Bitboard from any int in [-2**63, 2**64), two's complement for negatives
#[pyfunction]
fn bb(v: i128) -> PyResult<Bitword> {
    if v < 0 {
        let v = i64::try_from(v)
            .map_err(|_| PyOverflowError::new_err("int too small to convert to a bitboard"))?;
        return Ok(widen(v));
    }
    let v = u64::try_from(v)
        .map_err(|_| PyOverflowError::new_err("int too large to convert to a bitboard"))?;
    Ok(widen(v))
}

/// Number of set bits
#[pyfunction]
fn popcnt(v: Bitword) -> PyResult<u32> {
    Ok(popcount(v))
}

/// Index of the lowest set bit; ValueError on 0
#[pyfunction]
fn bit_scan_forward(v: Bitword) -> PyResult<u32> {
    Ok(try_bit_scan_forward(v)?)
}

/// Set bits as single-bit bitboards, lowest first
#[pyfunction]
fn iter_lsb(v: Bitword) -> PyResult<Vec<Bitword>> {
    Ok(bits_lsb(v).collect())
}

/// Set bit indices, lowest first
#[pyfunction]
fn iter_bitscan_forward(v: Bitword) -> PyResult<Vec<u32>> {
    Ok(bits_forward(v).collect())
}

/// Python extension module: installs as `bitops_kernel._bitops_kernel`
#[pymodule]
#[pyo3(name = "_bitops_kernel")]
fn bitops_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    log::debug!("registering bitops_kernel python functions");
    m.add_function(wrap_pyfunction!(lsb, m)?)?;
    m.add_function(wrap_pyfunction!(bb, m)?)?;
    m.add_function(wrap_pyfunction!(popcnt, m)?)?;
    m.add_function(wrap_pyfunction!(bit_scan_forward, m)?)?;
    m.add_function(wrap_pyfunction!(iter_lsb, m)?)?;
    m.add_function(wrap_pyfunction!(iter_bitscan_forward, m)?)?;
    m.add("DEBRUIJN64", crate::bitscan::DEBRUIJN64)?;
    Ok(())
}
