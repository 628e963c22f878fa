//! Errors raised when constructing core values.

use thiserror::Error;

/// Errors that can occur when building fixed-width values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    #[error("Value {value} does not fit in {width} bit(s)")]
    OutOfRange { value: u8, width: u32 },
}
