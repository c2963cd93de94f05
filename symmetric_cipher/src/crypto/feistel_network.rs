use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor_blocks;
use std::sync::Arc;

/// Balanced Feistel network driven by pluggable key expansion and round function.
///
/// Every round maps `(L, R)` to `(R, L ^ F(R, k))`. With `swap_last_round`
/// disabled the halves are emitted as `R || L` after the final round, which is
/// the GOST convention: decryption is then the same network fed the reversed
/// round-key sequence.
#[derive(Clone)]
pub struct FeistelNetwork {
    num_round: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    swap_last_round: bool,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            key_expansion,
            transformation,
            swap_last_round: true,
        }
    }

    pub fn without_final_swap(mut self) -> Self {
        self.swap_last_round = false;
        self
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn expand_key(&self, key: &[u8]) -> Vec<Vec<u8>> {
        self.key_expansion.generate_round_keys(key)
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        assert_eq!(block.len() % 2, 0, "Block size must be even");
        assert!(
            round_keys.len() >= self.num_round,
            "Key schedule is shorter than the round count"
        );

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in &round_keys[..self.num_round] {
            let feistel_out = self.transformation.transform(&right, round_key);
            let new_right = xor_blocks(&left, &feistel_out);
            left = right;
            right = new_right;
        }

        if self.swap_last_round {
            [left, right].concat()
        } else {
            [right, left].concat()
        }
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        assert_eq!(block.len() % 2, 0, "Block size must be even");
        assert!(
            round_keys.len() >= self.num_round,
            "Key schedule is shorter than the round count"
        );

        let (first, second) = block.split_at(block.len() / 2);
        let (mut left, mut right) = if self.swap_last_round {
            (first.to_vec(), second.to_vec())
        } else {
            (second.to_vec(), first.to_vec())
        };

        for round_key in round_keys[..self.num_round].iter().rev() {
            let feistel_out = self.transformation.transform(&left, round_key);
            let new_left = xor_blocks(&right, &feistel_out);
            right = left;
            left = new_left;
        }

        [left, right].concat()
    }
}
