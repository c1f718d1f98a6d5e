use thiserror::Error;

/// Errors from the checked bit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitOpsError {
    /// A bit scan was asked for the lowest set bit of an empty word.
    #[error("bit scan of an empty word: no bit is set")]
    ZeroInput,
}

#[cfg(feature = "python")]
impl From<BitOpsError> for pyo3::PyErr {
    fn from(err: BitOpsError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
