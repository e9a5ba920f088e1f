//! LUT generation error types.

use thiserror::Error;

/// Result type for LUT generation.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while generating a LUT file.
#[derive(Debug, Error)]
pub enum LutError {
    /// A parameter was outside its accepted range.
    #[error("invalid {param}: {value} (expected {min}..={max})")]
    InvalidParameter {
        /// Parameter name
        param: &'static str,
        /// Rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// I/O error while writing a table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    /// Checks that `value` lies in `min..=max`, rejecting NaN as well.
    pub(crate) fn check_range(
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> LutResult<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(LutError::InvalidParameter {
                param,
                value,
                min,
                max,
            })
        }
    }
}
