use crate::crypto::key_schedule::{self, SerpentKeyExpansion, NUM_ROUNDS};
use crate::crypto::linear::{inverse_transform_block, transform_block};
use crate::crypto::permutation::{final_permutation, initial_permutation};
use crate::crypto::sboxes::{substitute_nibbles, INV_SBOX, SBOX};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::crypto::utils::{xor_blocks, xor_in_place};

pub const BLOCK_SIZE: usize = 16;

/// 128-bit block SPN cipher with 32 rounds.
///
/// Rounds run in the permuted domain: the block enters through IP, each round
/// substitutes nibble-wise, and FP restores the external bit order at the end.
#[derive(Clone)]
pub struct Serpent {
    round_keys: Vec<Vec<u8>>,
}

impl Serpent {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        let round_keys = SerpentKeyExpansion.generate_round_keys(key);
        log::debug!("Serpent key schedule ready for a {}-bit key", key.len() * 8);
        Ok(Self { round_keys })
    }

    pub fn context(
        &self,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<CipherContext, CipherError> {
        CipherContext::new(Box::new(self.clone()), mode, padding, iv)
    }

    /// ECB with PKCS#7 padding.
    pub fn ecb_context(&self) -> Result<CipherContext, CipherError> {
        self.context(CipherMode::ECB, PaddingMode::PKCS7, None)
    }

    /// CBC with PKCS#7 padding and the IV carried in front of the ciphertext.
    /// Without an explicit IV every message gets a fresh random one.
    pub fn cbc_context(&self, iv: Option<Vec<u8>>) -> Result<CipherContext, CipherError> {
        Ok(self
            .context(CipherMode::CBC, PaddingMode::PKCS7, iv)?
            .with_prepended_iv())
    }

    fn check_alignment(data: &[u8]) -> Result<(), CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::BlockAlignment {
                block_size: BLOCK_SIZE,
                len: data.len(),
            });
        }
        Ok(())
    }
}

impl SymmetricCipher for Serpent {
    const NAME: &'static str = "Serpent";
    const KEY_SIZES: &'static [usize] = &key_schedule::KEY_SIZES;

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl BlockCipher for Serpent {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let mut state = initial_permutation(block);
        for round in 0..NUM_ROUNDS {
            xor_in_place(&mut state, &self.round_keys[round]);
            state = substitute_nibbles(&SBOX[round % 8], &state);
            if round < NUM_ROUNDS - 1 {
                state = transform_block(&state);
            } else {
                xor_in_place(&mut state, &self.round_keys[NUM_ROUNDS]);
            }
        }
        final_permutation(&state)
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        let mut state = initial_permutation(block);
        for round in (0..NUM_ROUNDS).rev() {
            if round == NUM_ROUNDS - 1 {
                xor_in_place(&mut state, &self.round_keys[NUM_ROUNDS]);
            } else {
                state = inverse_transform_block(&state);
            }
            state = substitute_nibbles(&INV_SBOX[round % 8], &state);
            state = xor_blocks(&state, &self.round_keys[round]);
        }
        final_permutation(&state)
    }
}

/// Unpadded ECB over the whole buffer.
impl CipherAlgorithm for Serpent {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_alignment(data)?;
        Ok(data
            .chunks_exact(BLOCK_SIZE)
            .flat_map(|block| self.encrypt_block(block))
            .collect())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Self::check_alignment(data)?;
        Ok(data
            .chunks_exact(BLOCK_SIZE)
            .flat_map(|block| self.decrypt_block(block))
            .collect())
    }
}
