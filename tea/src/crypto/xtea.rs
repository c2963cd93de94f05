use crate::crypto::block64::{self, BLOCK_SIZE};
use crate::crypto::{DELTA, KEY_SIZE};
use symmetric_cipher::crypto::bit_word::{BitWord, ByteOrder};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

/// 32 cycles, i.e. 64 Feistel rounds.
pub const DEFAULT_CYCLES: u32 = 32;

/// XTEA. Subkeys are picked per half-round from the running `sum`.
#[derive(Debug, Clone)]
pub struct Xtea {
    key: [u32; 4],
    cycles: u32,
}

impl Xtea {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::with_cycles(key, DEFAULT_CYCLES)
    }

    pub fn with_cycles(key: &[u8], cycles: u32) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        if cycles != DEFAULT_CYCLES {
            log::debug!("XTEA running {} cycles instead of {}", cycles, DEFAULT_CYCLES);
        }
        Ok(Self {
            key: block64::key_words(key, ByteOrder::Big),
            cycles,
        })
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    fn mix(v: u32) -> u32 {
        ((v << 4) ^ (v >> 5)).add_mod(v)
    }

    pub fn encrypt_words(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let mut sum = 0u32;
        for _ in 0..self.cycles {
            v0 = v0.add_mod(Self::mix(v1) ^ sum.add_mod(self.key[(sum & 3) as usize]));
            sum = sum.add_mod(DELTA);
            v1 = v1.add_mod(Self::mix(v0) ^ sum.add_mod(self.key[((sum >> 11) & 3) as usize]));
        }
        (v0, v1)
    }

    pub fn decrypt_words(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let mut sum = DELTA.wrapping_mul(self.cycles);
        for _ in 0..self.cycles {
            v1 = v1.sub_mod(Self::mix(v0) ^ sum.add_mod(self.key[((sum >> 11) & 3) as usize]));
            sum = sum.sub_mod(DELTA);
            v0 = v0.sub_mod(Self::mix(v1) ^ sum.add_mod(self.key[(sum & 3) as usize]));
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

impl SymmetricCipher for Xtea {
    const NAME: &'static str = "XTEA";
    const KEY_SIZES: &'static [usize] = &[KEY_SIZE];

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl BlockCipher for Xtea {
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

impl CipherAlgorithm for Xtea {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        block64::process_blocks(data, |block| self.encrypt_block(block))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        block64::process_blocks(data, |block| self.decrypt_block(block))
    }
}
