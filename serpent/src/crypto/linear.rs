use crate::crypto::permutation::{final_permutation, initial_permutation};
use symmetric_cipher::crypto::bit_word::{pack_words, unpack_words, BitWord, ByteOrder};

/// Serpent linear transformation on the four bitsliced words.
pub fn transform(x: [u32; 4]) -> [u32; 4] {
    let [mut x0, mut x1, mut x2, mut x3] = x;
    x0 = x0.rotl(13);
    x2 = x2.rotl(3);
    x1 ^= x0 ^ x2;
    x3 ^= x2 ^ (x0 << 3);
    x1 = x1.rotl(1);
    x3 = x3.rotl(7);
    x0 ^= x1 ^ x3;
    x2 ^= x3 ^ (x1 << 7);
    x0 = x0.rotl(5);
    x2 = x2.rotl(22);
    [x0, x1, x2, x3]
}

pub fn inverse_transform(x: [u32; 4]) -> [u32; 4] {
    let [mut x0, mut x1, mut x2, mut x3] = x;
    x2 = x2.rotr(22);
    x0 = x0.rotr(5);
    x2 ^= x3 ^ (x1 << 7);
    x0 ^= x1 ^ x3;
    x3 = x3.rotr(7);
    x1 = x1.rotr(1);
    x3 ^= x2 ^ (x0 << 3);
    x1 ^= x0 ^ x2;
    x2 = x2.rotr(3);
    x0 = x0.rotr(13);
    [x0, x1, x2, x3]
}

fn to_words(block: &[u8]) -> [u32; 4] {
    let words: Vec<u32> = pack_words(block, ByteOrder::Little);
    [words[0], words[1], words[2], words[3]]
}

/// LT applied to a block in the permuted domain: `IP(LT(FP(block)))`.
pub fn transform_block(block: &[u8]) -> Vec<u8> {
    let words = transform(to_words(&final_permutation(block)));
    initial_permutation(&unpack_words(&words, ByteOrder::Little))
}

pub fn inverse_transform_block(block: &[u8]) -> Vec<u8> {
    let words = inverse_transform(to_words(&final_permutation(block)));
    initial_permutation(&unpack_words(&words, ByteOrder::Little))
}
