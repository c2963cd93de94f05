use crate::crypto::permutation::initial_permutation;
use crate::crypto::sboxes::{substitute_bitslice, SBOX};
use symmetric_cipher::crypto::bit_word::{pack_words, unpack_words, BitWord, ByteOrder};
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

pub const KEY_SIZES: [usize; 3] = [16, 24, 32];
pub const NUM_ROUNDS: usize = 32;
const PHI: u32 = 0x9e37_79b9;
const FULL_KEY: usize = 32;

/// Short keys get a single `1` bit appended, then zero fill up to 256 bits.
pub fn pad_key(key: &[u8]) -> Vec<u8> {
    let mut padded = key.to_vec();
    if padded.len() < FULL_KEY {
        padded.push(0x01);
        padded.resize(FULL_KEY, 0);
    }
    padded
}

/// The 132 prekeys `w_0..w_131`, seeded from the padded key.
pub fn prekeys(key: &[u8]) -> Vec<u32> {
    let mut w: Vec<u32> = pack_words(&pad_key(key), ByteOrder::Little);
    for i in 8..(8 + 4 * (NUM_ROUNDS + 1)) {
        let next = (w[i - 8] ^ w[i - 5] ^ w[i - 3] ^ w[i - 1] ^ PHI ^ (i as u32 - 8)).rotl(11);
        w.push(next);
    }
    w.split_off(8)
}

/// 33 round keys, already moved into the permuted domain with IP.
pub struct SerpentKeyExpansion;

impl KeyExpansion for SerpentKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        prekeys(key)
            .chunks_exact(4)
            .enumerate()
            .map(|(round, chunk)| {
                let sbox = &SBOX[(NUM_ROUNDS + 3 - round) % 8];
                let words = substitute_bitslice(sbox, [chunk[0], chunk[1], chunk[2], chunk[3]]);
                initial_permutation(&unpack_words(&words, ByteOrder::Little))
            })
            .collect()
    }
}
