use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use thiserror::Error;

/// Validation failures raised by the cipher engines and the chaining layer.
///
/// None of the ciphers in this workspace authenticate their output, so a
/// tampered ciphertext decrypts to garbage instead of producing an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("{cipher} key must be one of {expected:?} bytes, got {actual}")]
    KeyLength {
        cipher: &'static str,
        expected: &'static [usize],
        actual: usize,
    },

    #[error("input of {len} bytes is not a multiple of the {block_size}-byte block")]
    BlockAlignment { block_size: usize, len: usize },

    #[error("{mode} IV must be one of {expected:?} bytes, got {actual}")]
    IvLength {
        mode: CipherMode,
        expected: Vec<usize>,
        actual: usize,
    },

    #[error("{cipher} IV must be {expected} bytes, got {actual}")]
    StreamIvLength {
        cipher: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed {0:?} padding")]
    InvalidPadding(PaddingMode),

    #[error("message of {len} bytes is shorter than the required {min} bytes")]
    MessageTooShort { min: usize, len: usize },

    #[error("unknown chaining mode: {0}")]
    UnknownMode(String),

    #[error("unknown padding mode: {0}")]
    UnknownPadding(String),
}
