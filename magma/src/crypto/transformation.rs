use crate::crypto::sboxes::substitute;
use symmetric_cipher::crypto::bit_word::{BitWord, ByteOrder};
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;

/// Round function `g[k](a) = rotl11(t(a + k mod 2^32))`.
pub fn g(round_key: u32, half: u32) -> u32 {
    substitute(half.add_mod(round_key)).rotl(11)
}

pub struct MagmaTransformation;

impl EncryptionTransformation for MagmaTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        let half = u32::read(input_block, ByteOrder::Big);
        let key = u32::read(round_key, ByteOrder::Big);
        g(key, half).to_be_bytes().to_vec()
    }
}
