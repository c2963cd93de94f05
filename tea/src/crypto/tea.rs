use crate::crypto::block64::{self, BLOCK_SIZE};
use crate::crypto::{DELTA, KEY_SIZE};
use symmetric_cipher::crypto::bit_word::{BitWord, ByteOrder};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

pub const CYCLES: u32 = 32;

/// Tiny Encryption Algorithm, 32 cycles over a big-endian 64-bit block.
#[derive(Debug, Clone)]
pub struct Tea {
    key: [u32; 4],
}

impl Tea {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        Ok(Self {
            key: block64::key_words(key, ByteOrder::Big),
        })
    }

    pub fn encrypt_words(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let [k0, k1, k2, k3] = self.key;
        let mut sum = 0u32;
        for _ in 0..CYCLES {
            sum = sum.add_mod(DELTA);
            v0 = v0.add_mod((v1 << 4).add_mod(k0) ^ v1.add_mod(sum) ^ (v1 >> 5).add_mod(k1));
            v1 = v1.add_mod((v0 << 4).add_mod(k2) ^ v0.add_mod(sum) ^ (v0 >> 5).add_mod(k3));
        }
        (v0, v1)
    }

    pub fn decrypt_words(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let [k0, k1, k2, k3] = self.key;
        let mut sum = DELTA.wrapping_mul(CYCLES);
        for _ in 0..CYCLES {
            v1 = v1.sub_mod((v0 << 4).add_mod(k2) ^ v0.add_mod(sum) ^ (v0 >> 5).add_mod(k3));
            v0 = v0.sub_mod((v1 << 4).add_mod(k0) ^ v1.add_mod(sum) ^ (v1 >> 5).add_mod(k1));
            sum = sum.sub_mod(DELTA);
        }
        (v0, v1)
    }

    pub fn context(
        &self,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<CipherContext, CipherError> {
        CipherContext::new(Box::new(self.clone()), mode, padding, iv)
    }
}

impl SymmetricCipher for Tea {
    const NAME: &'static str = "TEA";
    const KEY_SIZES: &'static [usize] = &[KEY_SIZE];

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl BlockCipher for Tea {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let (v0, v1) = block64::split(block);
        let (v0, v1) = self.encrypt_words(v0, v1);
        block64::join(v0, v1)
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let (v0, v1) = block64::split(block);
        let (v0, v1) = self.decrypt_words(v0, v1);
        block64::join(v0, v1)
    }
}

impl CipherAlgorithm for Tea {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        block64::process_blocks(data, |block| self.encrypt_block(block))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        block64::process_blocks(data, |block| self.decrypt_block(block))
    }
}
