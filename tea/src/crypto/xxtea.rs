use crate::crypto::{DELTA, KEY_SIZE};
use symmetric_cipher::crypto::bit_word::{pack_words, unpack_words, BitWord, ByteOrder};
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;

const WORD: usize = 4;
const MIN_WORDS: usize = 2;

/// Corrected Block TEA over a whole message of `n >= 2` little-endian words.
///
/// Encryption zero-pads the message to whole words (and to at least two of
/// them). Decryption hands back the padded buffer; the pad is not stripped
/// because nothing records its length.
#[derive(Debug, Clone)]
pub struct Xxtea {
    key: [u32; 4],
}

/// Full passes over the message for `n` words.
pub fn rounds_for(n: usize) -> usize {
    6 + 52 / n
}

impl Xxtea {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        let words: Vec<u32> = pack_words(key, ByteOrder::Little);
        Ok(Self {
            key: [words[0], words[1], words[2], words[3]],
        })
    }

    fn mx(&self, sum: u32, y: u32, z: u32, p: usize, e: u32) -> u32 {
        let k = self.key[(p & 3) ^ e as usize];
        (((z >> 5) ^ (y << 2)).add_mod((y >> 3) ^ (z << 4))) ^ ((sum ^ y).add_mod(k ^ z))
    }

    /// Encrypts `v` in place. Fewer than two words are left untouched.
    pub fn encrypt_words(&self, v: &mut [u32]) {
        let n = v.len();
        if n < MIN_WORDS {
            return;
        }

        let mut sum = 0u32;
        let mut z = v[n - 1];
        for _ in 0..rounds_for(n) {
            sum = sum.add_mod(DELTA);
            let e = (sum >> 2) & 3;
            for p in 0..n {
                let y = v[(p + 1) % n];
                v[p] = v[p].add_mod(self.mx(sum, y, z, p, e));
                z = v[p];
            }
        }
    }

    pub fn decrypt_words(&self, v: &mut [u32]) {
        let n = v.len();
        if n < MIN_WORDS {
            return;
        }

        let rounds = rounds_for(n);
        let mut sum = DELTA.wrapping_mul(rounds as u32);
        let mut y = v[0];
        for _ in 0..rounds {
            let e = (sum >> 2) & 3;
            for p in (0..n).rev() {
                let z = v[(p + n - 1) % n];
                v[p] = v[p].sub_mod(self.mx(sum, y, z, p, e));
                y = v[p];
            }
            sum = sum.sub_mod(DELTA);
        }
    }
}

impl SymmetricCipher for Xxtea {
    const NAME: &'static str = "XXTEA";
    const KEY_SIZES: &'static [usize] = &[KEY_SIZE];

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl CipherAlgorithm for Xxtea {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut padded = data.to_vec();
        let target = padded.len().div_ceil(WORD).max(MIN_WORDS) * WORD;
        if target != padded.len() {
            log::trace!("XXTEA zero-padding {} bytes to {}", padded.len(), target);
            padded.resize(target, 0);
        }

        let mut words: Vec<u32> = pack_words(&padded, ByteOrder::Little);
        self.encrypt_words(&mut words);
        Ok(unpack_words(&words, ByteOrder::Little))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        if data.len() % WORD != 0 {
            return Err(CipherError::BlockAlignment {
                block_size: WORD,
                len: data.len(),
            });
        }
        if data.len() < MIN_WORDS * WORD {
            return Err(CipherError::MessageTooShort {
                min: MIN_WORDS * WORD,
                len: data.len(),
            });
        }

        let mut words: Vec<u32> = pack_words(data, ByteOrder::Little);
        self.decrypt_words(&mut words);
        Ok(unpack_words(&words, ByteOrder::Little))
    }
}
