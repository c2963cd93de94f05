pub mod crypto;

pub use crypto::bit_word::{BitWord, ByteOrder};
pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::{BlockCipher, CipherAlgorithm, StreamCipher, SymmetricCipher};
pub use crypto::cipher_types::{CipherMode, PaddingMode};
pub use crypto::error::CipherError;
