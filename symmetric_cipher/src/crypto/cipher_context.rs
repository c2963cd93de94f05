use crate::crypto::cipher_traits::{BlockCipher, CipherAlgorithm};
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::CipherError;
use crate::crypto::utils::{
    apply_padding, increment_block, random_bytes, remove_padding, xor_blocks,
};
use rayon::prelude::*;
use std::sync::Arc;

// ECB and CTR inputs at least this large are split across the rayon pool.
const OPTIMAL_PARALLELISM_THRESHOLD: usize = 4 * 1024 * 1024;

/// Composes a [`BlockCipher`] into a mode of operation over whole messages.
///
/// The chaining state lives only for the duration of one `encrypt`/`decrypt`
/// call; the context itself is immutable and can be cloned and shared.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
    iv_generated: bool,
    prepend_iv: bool,
}

impl CipherContext {
    /// Builds a context. A missing IV for a mode that needs one is generated
    /// randomly and can be read back through [`iv`](Self::iv).
    pub fn new(
        algorithm: Box<dyn BlockCipher>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        let block_size = algorithm.block_size();
        let mut iv_generated = false;

        let iv = if mode.requires_iv() {
            match iv {
                Some(iv) => {
                    Self::check_iv(mode, block_size, &iv)?;
                    Some(iv)
                }
                None => {
                    let len = mode.generated_iv_len(block_size);
                    log::debug!("no IV supplied for {mode}, generating {len} random bytes");
                    iv_generated = true;
                    Some(random_bytes(len))
                }
            }
        } else {
            if iv.is_some() {
                log::warn!("{mode} mode does not use an IV, ignoring the supplied one");
            }
            None
        };

        log::debug!(
            "cipher context: mode {}, padding {:?}, block {} bytes",
            mode,
            padding,
            block_size
        );

        Ok(Self {
            algorithm: Arc::from(algorithm),
            mode,
            padding,
            iv,
            iv_generated,
            prepend_iv: false,
        })
    }

    /// Emits the IV in front of every ciphertext and reads it back on decrypt.
    /// The prefix is always one block: CTR writes its full initial counter
    /// block, so a decrypting context needs no IV of its own. When the IV was
    /// generated rather than supplied, each message gets a fresh one.
    pub fn with_prepended_iv(mut self) -> Self {
        self.prepend_iv = true;
        self
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        log::trace!("{} encrypt of {} bytes", self.mode, data.len());

        if !self.prepend_iv || !self.mode.requires_iv() {
            return self.process_data(data, self.iv.as_deref().unwrap_or(&[]), true);
        }

        let iv = match &self.iv {
            Some(_) if self.iv_generated => {
                random_bytes(self.mode.generated_iv_len(self.block_size()))
            }
            Some(iv) => iv.clone(),
            None => Vec::new(),
        };
        let prefix = self.initial_counter(&iv);
        let body = self.process_data(data, &prefix, true)?;
        Ok([prefix, body].concat())
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        log::trace!("{} decrypt of {} bytes", self.mode, data.len());

        if !self.prepend_iv || !self.mode.requires_iv() {
            return self.process_data(data, self.iv.as_deref().unwrap_or(&[]), false);
        }

        let (iv, body) = self.split_embedded_iv(data)?;
        self.process_data(body, iv, false)
    }

    /// Splits a ciphertext produced with [`with_prepended_iv`](Self::with_prepended_iv)
    /// into its IV block and the body. Modes without an IV have an empty prefix.
    pub fn split_embedded_iv<'a>(&self, data: &'a [u8]) -> Result<(&'a [u8], &'a [u8]), CipherError> {
        let iv_len = if self.mode.requires_iv() {
            self.block_size()
        } else {
            0
        };
        if data.len() < iv_len {
            return Err(CipherError::MessageTooShort {
                min: iv_len,
                len: data.len(),
            });
        }
        Ok(data.split_at(iv_len))
    }

    fn check_iv(mode: CipherMode, block_size: usize, iv: &[u8]) -> Result<(), CipherError> {
        if mode.accepts_iv_len(block_size, iv.len()) {
            Ok(())
        } else {
            Err(CipherError::IvLength {
                mode,
                expected: mode.iv_lengths(block_size),
                actual: iv.len(),
            })
        }
    }

    fn process_data(&self, data: &[u8], iv: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();

        if self.mode.is_stream_mode() {
            return Ok(match self.mode {
                CipherMode::CTR => self.process_ctr(data, iv),
                _ => self.process_feedback(data, iv, encrypt),
            });
        }

        if encrypt {
            let padded = apply_padding(data.to_vec(), block_size, self.padding)?;
            Ok(match self.mode {
                CipherMode::ECB => self.process_ecb(&padded, true),
                CipherMode::PCBC => self.pcbc_encrypt(&padded, iv),
                _ => self.cbc_encrypt(&padded, iv),
            })
        } else {
            if data.len() % block_size != 0 {
                return Err(CipherError::BlockAlignment {
                    block_size,
                    len: data.len(),
                });
            }
            let decrypted = match self.mode {
                CipherMode::ECB => self.process_ecb(data, false),
                CipherMode::PCBC => self.pcbc_decrypt(data, iv),
                _ => self.cbc_decrypt(data, iv),
            };
            remove_padding(decrypted, block_size, self.padding)
        }
    }

    fn process_ecb(&self, data: &[u8], encrypt: bool) -> Vec<u8> {
        let block_size = self.block_size();
        let run = |block: &[u8]| {
            if encrypt {
                self.algorithm.encrypt_block(block)
            } else {
                self.algorithm.decrypt_block(block)
            }
        };

        if data.len() >= OPTIMAL_PARALLELISM_THRESHOLD {
            log::debug!("ECB over {} bytes dispatched to rayon", data.len());
            data.par_chunks(block_size).flat_map_iter(run).collect()
        } else {
            data.chunks(block_size).flat_map(run).collect()
        }
    }

    fn cbc_encrypt(&self, data: &[u8], iv: &[u8]) -> Vec<u8> {
        let mut prev = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            let encrypted = self.algorithm.encrypt_block(&xor_blocks(block, &prev));
            result.extend_from_slice(&encrypted);
            prev = encrypted;
        }
        result
    }

    fn cbc_decrypt(&self, data: &[u8], iv: &[u8]) -> Vec<u8> {
        let mut prev = iv;
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            let decrypted = self.algorithm.decrypt_block(block);
            result.extend(xor_blocks(&decrypted, prev));
            prev = block;
        }
        result
    }

    fn pcbc_encrypt(&self, data: &[u8], iv: &[u8]) -> Vec<u8> {
        let mut prev = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            let encrypted = self.algorithm.encrypt_block(&xor_blocks(block, &prev));
            prev = xor_blocks(block, &encrypted);
            result.extend(encrypted);
        }
        result
    }

    fn pcbc_decrypt(&self, data: &[u8], iv: &[u8]) -> Vec<u8> {
        let mut prev = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            let plain = xor_blocks(&self.algorithm.decrypt_block(block), &prev);
            prev = xor_blocks(&plain, block);
            result.extend(plain);
        }
        result
    }

    /// CFB and OFB. Both only ever run the forward block function; the last
    /// chunk may be shorter than a block and consumes a prefix of the keystream.
    fn process_feedback(&self, data: &[u8], iv: &[u8], encrypt: bool) -> Vec<u8> {
        let mut register = iv.to_vec();
        let mut result = Vec::with_capacity(data.len());
        for chunk in data.chunks(self.block_size()) {
            let keystream = self.algorithm.encrypt_block(&register);
            let processed = xor_blocks(chunk, &keystream);
            register = match self.mode {
                CipherMode::OFB => keystream,
                _ if encrypt => processed.clone(),
                _ => chunk.to_vec(),
            };
            result.extend(processed);
        }
        result
    }

    /// A half-block CTR nonce becomes `nonce || 0..0`; full blocks pass through.
    fn initial_counter(&self, iv: &[u8]) -> Vec<u8> {
        let mut counter = iv.to_vec();
        counter.resize(self.block_size(), 0);
        counter
    }

    fn process_ctr_batch(&self, chunk: &[u8], counter_start: &[u8], index: usize) -> Vec<u8> {
        let mut counter = counter_start.to_vec();
        increment_block(&mut counter, index as u64);
        let keystream = self.algorithm.encrypt_block(&counter);
        xor_blocks(chunk, &keystream)
    }

    /// CTR: keystream block `i` is `E(counter0 + i)`. Encryption and
    /// decryption are the same operation.
    fn process_ctr(&self, data: &[u8], iv: &[u8]) -> Vec<u8> {
        let block_size = self.block_size();
        let counter_start = self.initial_counter(iv);

        if data.len() >= OPTIMAL_PARALLELISM_THRESHOLD {
            log::debug!("CTR over {} bytes dispatched to rayon", data.len());
            data.par_chunks(block_size)
                .enumerate()
                .flat_map_iter(|(i, chunk)| self.process_ctr_batch(chunk, &counter_start, i))
                .collect()
        } else {
            data.chunks(block_size)
                .enumerate()
                .flat_map(|(i, chunk)| self.process_ctr_batch(chunk, &counter_start, i))
                .collect()
        }
    }
}

impl CipherAlgorithm for CipherContext {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        CipherContext::encrypt(self, data)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        CipherContext::decrypt(self, data)
    }
}
