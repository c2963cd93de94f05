use crate::crypto::state::{RabbitState, KEYSTREAM_BLOCK};
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, StreamCipher, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::utils::xor_blocks;

pub const KEY_SIZE: usize = 16;
pub const IV_SIZE: usize = 8;

/// Rabbit stream cipher with 128-bit keys and optional 64-bit IVs.
///
/// `apply_keystream` advances the stream; `reset` rewinds it to the state
/// right after key (and IV) setup. Each call consumes whole 16-byte keystream
/// blocks, so the unused tail of a partial block is dropped.
#[derive(Debug, Clone)]
pub struct Rabbit {
    initial: RabbitState,
    state: RabbitState,
}

impl Rabbit {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        let initial = RabbitState::from_key(key);
        Ok(Self {
            state: initial.clone(),
            initial,
        })
    }

    pub fn with_iv(key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        Self::check_key(key)?;
        if iv.len() != IV_SIZE {
            return Err(CipherError::StreamIvLength {
                cipher: Self::NAME,
                expected: IV_SIZE,
                actual: iv.len(),
            });
        }

        let mut initial = RabbitState::from_key(key);
        initial.apply_iv(iv);
        log::debug!("Rabbit keyed with a {}-byte IV", iv.len());
        Ok(Self {
            state: initial.clone(),
            initial,
        })
    }

    /// Advances the state once and returns the next 16 keystream bytes.
    pub fn next_block(&mut self) -> [u8; KEYSTREAM_BLOCK] {
        self.state.next_state();
        self.state.extract()
    }

    /// A second generator starting from this one's initial state.
    fn fresh(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            state: self.initial.clone(),
        }
    }
}

impl SymmetricCipher for Rabbit {
    const NAME: &'static str = "Rabbit";
    const KEY_SIZES: &'static [usize] = &[KEY_SIZE];

    fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        Self::new(key)
    }
}

impl StreamCipher for Rabbit {
    fn apply_keystream(&mut self, data: &[u8]) -> Vec<u8> {
        log::trace!("Rabbit keystream over {} bytes", data.len());
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(KEYSTREAM_BLOCK) {
            let keystream = self.next_block();
            out.extend(xor_blocks(chunk, &keystream));
        }
        out
    }

    fn reset(&mut self) {
        self.state = self.initial.clone();
    }
}

/// Every call starts a fresh keystream from the post-setup state, so
/// `decrypt(encrypt(m)) == m` without any manual rewinding.
impl CipherAlgorithm for Rabbit {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(self.fresh().apply_keystream(data))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        Ok(self.fresh().apply_keystream(data))
    }
}
