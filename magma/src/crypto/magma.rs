use crate::crypto::key_schedule::{MagmaKeyExpansion, KEY_SIZE, NUM_ROUNDS};
use crate::crypto::transformation::MagmaTransformation;
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;

pub const BLOCK_SIZE: usize = 8;

/// 64-bit block, 256-bit key GOST cipher built on the shared Feistel network.
///
/// Output follows the GOST convention of dropping the swap after round 32,
/// so the ciphertext of `L || R` is `R32 || L32`.
#[derive(Clone)]
pub struct Magma {
    network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl Magma {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;

        let network = FeistelNetwork::new(
            NUM_ROUNDS,
            Arc::new(MagmaKeyExpansion),
            Arc::new(MagmaTransformation),
        )
        .without_final_swap();
        let round_keys = network.expand_key(key);
        log::debug!("Magma key schedule ready, {} round keys", round_keys.len());

        Ok(Self {
            network,
            round_keys,
        })
    }

    /// Wraps a copy of this cipher in a chaining context. Magma defaults to
    /// no padding, so block modes need aligned input.
    pub fn context(&self, mode: CipherMode, iv: Option<Vec<u8>>) -> Result<CipherContext, CipherError> {
        self.context_with_padding(mode, PaddingMode::None, iv)
    }

    pub fn context_with_padding(
        &self,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<CipherContext, CipherError> {
        CipherContext::new(Box::new(self.clone()), mode, padding, iv)
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

impl SymmetricCipher for Magma {
    const NAME: &'static str = "Magma";
    const KEY_SIZES: &'static [usize] = &[KEY_SIZE];

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl BlockCipher for Magma {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        self.network.encrypt_with_round_keys(block, &self.round_keys)
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        self.network.decrypt_with_round_keys(block, &self.round_keys)
    }
}

/// Unpadded ECB over the whole buffer.
impl CipherAlgorithm for Magma {
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
