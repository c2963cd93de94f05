use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::error::CipherError;
use bitvec::prelude::*;
use rand::RngCore;

/// Table-driven bit permutation: output bit `i` is input bit `table[i]`.
///
/// Bits are numbered little-endian, bit `i` being bit `i % 8` of byte `i / 8`.
/// The table length must be a multiple of 8.
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = data.view_bits::<Lsb0>();
    let mut permuted: BitVec<u8, Lsb0> = BitVec::with_capacity(table.len());
    for &pos in table {
        permuted.push(bits[pos]);
    }
    permuted.into_vec()
}

pub fn xor_blocks(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

pub fn xor_in_place(target: &mut [u8], other: &[u8]) {
    for (t, o) in target.iter_mut().zip(other.iter()) {
        *t ^= o;
    }
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// Returns `supplied`, or `len` random bytes when the caller left it empty.
pub fn resolve_or_generate(supplied: &[u8], len: usize) -> Vec<u8> {
    if supplied.is_empty() {
        log::debug!("generating {} random bytes", len);
        random_bytes(len)
    } else {
        supplied.to_vec()
    }
}

pub fn apply_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
) -> Result<Vec<u8>, CipherError> {
    let remainder = data.len() % block_size;

    match padding {
        PaddingMode::None => {
            if remainder != 0 {
                return Err(CipherError::BlockAlignment {
                    block_size,
                    len: data.len(),
                });
            }
        }
        PaddingMode::Zeros => {
            if remainder != 0 {
                data.resize(data.len() + block_size - remainder, 0);
            }
        }
        PaddingMode::ANSI_X923 => {
            let padding_length = block_size - remainder;
            data.extend(std::iter::repeat(0).take(padding_length - 1));
            data.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            let padding_length = block_size - remainder;
            data.extend(std::iter::repeat(padding_length as u8).take(padding_length));
        }
        PaddingMode::ISO10126 => {
            let padding_length = block_size - remainder;
            data.extend(random_bytes(padding_length - 1));
            data.push(padding_length as u8);
        }
    }
    Ok(data)
}

/// Strips padding from decrypted data. `Zeros` drops every trailing zero byte,
/// which also eats zeros that belonged to the plaintext.
pub fn remove_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
) -> Result<Vec<u8>, CipherError> {
    match padding {
        PaddingMode::None => Ok(data),
        PaddingMode::Zeros => {
            let keep = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            data.truncate(keep);
            Ok(data)
        }
        PaddingMode::ANSI_X923 | PaddingMode::PKCS7 | PaddingMode::ISO10126 => {
            let pad_len = match data.last() {
                Some(&last) => last as usize,
                None => return Err(CipherError::InvalidPadding(padding)),
            };
            if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
                return Err(CipherError::InvalidPadding(padding));
            }

            let start = data.len() - pad_len;
            let filler = &data[start..data.len() - 1];
            let well_formed = match padding {
                PaddingMode::PKCS7 => filler.iter().all(|&b| b as usize == pad_len),
                PaddingMode::ANSI_X923 => filler.iter().all(|&b| b == 0),
                _ => true,
            };
            if !well_formed {
                return Err(CipherError::InvalidPadding(padding));
            }

            data.truncate(start);
            Ok(data)
        }
    }
}

/// Big-endian increment of a counter block by `value`, wrapping on overflow.
pub fn increment_block(block: &mut [u8], value: u64) {
    let mut carry = value as u128;
    for byte in block.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}
