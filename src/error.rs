//! The single error type shared by every phase of the prefix code pipeline.
//!
//! Building codes can only fail on invalid input. The remaining variants
//! come from encoding and decoding with a finished codec.

use thiserror::Error;

use crate::min_heap::HeapErr;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixCodeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Symbol {0} is not in the code table")]
    UnknownSymbol(String),

    #[error("Bit stream ended in the middle of a code at bit {bit_index}")]
    TruncatedCode { bit_index: usize },

    #[error("Bit {bit_index} is not a valid code for a single-symbol tree")]
    InvalidBit { bit_index: usize },

    #[error("Expected {expected} decoded symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Internal heap error (this is a bug): {0}")]
    HeapError(#[from] HeapErr),
}

pub type Result<T> = std::result::Result<T, PrefixCodeError>;
