use symmetric_cipher::crypto::bit_word::{pack_words, unpack_words, ByteOrder};
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

pub const KEY_SIZE: usize = 32;
pub const NUM_ROUNDS: usize = 32;

/// Eight big-endian subkeys `K1..K8` taken straight from the 256-bit key.
pub fn subkeys(key: &[u8]) -> Vec<u32> {
    pack_words(&key[..KEY_SIZE], ByteOrder::Big)
}

/// Subkey order over the 32 rounds: `K1..K8` three times, then `K8..K1`.
pub fn round_key_sequence(subkeys: &[u32]) -> Vec<u32> {
    (0..NUM_ROUNDS)
        .map(|i| {
            if i < 24 {
                subkeys[i % 8]
            } else {
                subkeys[7 - (i % 8)]
            }
        })
        .collect()
}

pub struct MagmaKeyExpansion;

impl KeyExpansion for MagmaKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        round_key_sequence(&subkeys(key))
            .into_iter()
            .map(|k| unpack_words(&[k], ByteOrder::Big))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_eight_rounds_walk_backwards() {
        let key: Vec<u8> = (0..32).collect();
        let seq = round_key_sequence(&subkeys(&key));
        assert_eq!(seq.len(), NUM_ROUNDS);
        assert_eq!(seq[0], 0x0001_0203);
        assert_eq!(seq[23], 0x1C1D_1E1F);
        assert_eq!(seq[24], 0x1C1D_1E1F);
        assert_eq!(seq[31], 0x0001_0203);
    }
}
