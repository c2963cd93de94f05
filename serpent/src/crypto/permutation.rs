use symmetric_cipher::crypto::utils::permute_bits;

/// `IP[i] = 32 * (i % 4) + i / 4`; bit `i` is bit `i % 8` of byte `i / 8`.
pub const IP: [usize; 128] = build_ip();
/// Exact inverse of [`IP`].
pub const FP: [usize; 128] = build_fp();

const fn build_ip() -> [usize; 128] {
    let mut table = [0usize; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = 32 * (i % 4) + i / 4;
        i += 1;
    }
    table
}

const fn build_fp() -> [usize; 128] {
    let mut table = [0usize; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = 4 * (i % 32) + i / 32;
        i += 1;
    }
    table
}

pub fn initial_permutation(block: &[u8]) -> Vec<u8> {
    permute_bits(block, &IP)
}

pub fn final_permutation(block: &[u8]) -> Vec<u8> {
    permute_bits(block, &FP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fp_inverts_ip() {
        for i in 0..128 {
            assert_eq!(FP[IP[i]], i);
            assert_eq!(IP[FP[i]], i);
        }
    }

    #[test]
    fn ip_gathers_bit_columns() {
        // input bit 1 (word 0, bit 1) lands on output bit 4
        let mut block = [0u8; 16];
        block[0] = 0b10;
        let permuted = initial_permutation(&block);
        assert_eq!(permuted[0], 0b1_0000);
        assert_eq!(final_permutation(&permuted), block.to_vec());
    }
}
