pub const SBOX: [[u8; 16]; 8] = [
    [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
    [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
    [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
    [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
    [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
    [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
    [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
    [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
];

pub const INV_SBOX: [[u8; 16]; 8] = invert_all(&SBOX);

const fn invert_all(boxes: &[[u8; 16]; 8]) -> [[u8; 16]; 8] {
    let mut inv = [[0u8; 16]; 8];
    let mut b = 0;
    while b < 8 {
        let mut i = 0;
        while i < 16 {
            inv[b][boxes[b][i] as usize] = i as u8;
            i += 1;
        }
        b += 1;
    }
    inv
}

/// Applies one 4-bit S-box to all 32 nibbles of a block in the standard
/// (permuted) domain, low nibble of each byte first.
pub fn substitute_nibbles(table: &[u8; 16], block: &[u8]) -> Vec<u8> {
    block
        .iter()
        .map(|&b| table[(b & 0x0F) as usize] | (table[(b >> 4) as usize] << 4))
        .collect()
}

/// Bitsliced application over four words: bit `j` of words 0..3 form the
/// 4-bit input of the `j`-th S-box copy, word 0 holding the low bit.
pub fn substitute_bitslice(table: &[u8; 16], words: [u32; 4]) -> [u32; 4] {
    let mut out = [0u32; 4];
    for j in 0..32 {
        let input = (0..4).fold(0usize, |acc, k| acc | (((words[k] >> j) & 1) as usize) << k);
        let value = table[input];
        for (k, word) in out.iter_mut().enumerate() {
            *word |= (((value >> k) & 1) as u32) << j;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_tables_undo_forward_tables() {
        for (sbox, inv) in SBOX.iter().zip(INV_SBOX.iter()) {
            for x in 0..16u8 {
                assert_eq!(inv[sbox[x as usize] as usize], x);
            }
        }
    }

    #[test]
    fn nibble_order_within_byte() {
        assert_eq!(substitute_nibbles(&SBOX[0], &[0x10]), vec![0x83]);
    }

    #[test]
    fn bitslice_matches_single_lane() {
        // lane 0 carries input 0b0101 = 5, every other lane carries 0
        let out = substitute_bitslice(&SBOX[0], [1, 0, 1, 0]);
        let lane0: u8 = (0..4).map(|k| ((out[k] & 1) as u8) << k).sum();
        assert_eq!(lane0, SBOX[0][5]);
        let lane1: u8 = (0..4).map(|k| (((out[k] >> 1) & 1) as u8) << k).sum();
        assert_eq!(lane1, SBOX[0][0]);
    }
}
