//! Plumbing shared by the two fixed 64-bit block ciphers.

use symmetric_cipher::crypto::bit_word::{pack_words, BitWord, ByteOrder};
use symmetric_cipher::crypto::error::CipherError;

pub const BLOCK_SIZE: usize = 8;

/// Four subkeys read from the 128-bit key in the given byte order.
pub fn key_words(key: &[u8], order: ByteOrder) -> [u32; 4] {
    let words: Vec<u32> = pack_words(key, order);
    [words[0], words[1], words[2], words[3]]
}

pub fn split(block: &[u8]) -> (u32, u32) {
    (
        u32::read(&block[..4], ByteOrder::Big),
        u32::read(&block[4..8], ByteOrder::Big),
    )
}

pub fn join(v0: u32, v1: u32) -> Vec<u8> {
    let mut out = vec![0u8; BLOCK_SIZE];
    v0.write(&mut out[..4], ByteOrder::Big);
    v1.write(&mut out[4..], ByteOrder::Big);
    out
}

/// Runs `f` over every 8-byte block of an aligned buffer.
pub fn process_blocks<F>(data: &[u8], f: F) -> Result<Vec<u8>, CipherError>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    if data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::BlockAlignment {
            block_size: BLOCK_SIZE,
            len: data.len(),
        });
    }
    Ok(data.chunks_exact(BLOCK_SIZE).flat_map(f).collect())
}
