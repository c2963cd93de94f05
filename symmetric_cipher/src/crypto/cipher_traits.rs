use crate::crypto::error::CipherError;
use crate::crypto::utils::random_bytes;

/// Whole-buffer entry point. Block ciphers implement it as unpadded ECB,
/// variable-length and stream ciphers natively.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Construction from a master key. The key schedule is derived once here and
/// never changes for the lifetime of the instance.
pub trait SymmetricCipher: Sized {
    const NAME: &'static str;
    const KEY_SIZES: &'static [usize];

    fn with_key(key: &[u8]) -> Result<Self, CipherError>;

    fn check_key(key: &[u8]) -> Result<(), CipherError> {
        if Self::KEY_SIZES.contains(&key.len()) {
            Ok(())
        } else {
            Err(CipherError::KeyLength {
                cipher: Self::NAME,
                expected: Self::KEY_SIZES,
                actual: key.len(),
            })
        }
    }

    /// Random key of the largest admissible size.
    fn generate_key() -> Vec<u8> {
        let len = Self::KEY_SIZES.iter().copied().max().unwrap_or(0);
        random_bytes(len)
    }
}

/// Single-block primitive consumed by the chaining layer.
///
/// Callers pass exactly `block_size()` bytes; the chaining layer guarantees it.
pub trait BlockCipher: Send + Sync {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Vec<u8>;
    fn decrypt_block(&self, block: &[u8]) -> Vec<u8>;
}

/// Keystream generator whose state advances with every call.
pub trait StreamCipher {
    fn apply_keystream(&mut self, data: &[u8]) -> Vec<u8>;
    /// Rewinds to the state right after key (and IV) setup.
    fn reset(&mut self);
}
