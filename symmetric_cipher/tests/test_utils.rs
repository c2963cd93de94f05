#[cfg(test)]
mod tests {
    use symmetric_cipher::crypto::cipher_types::PaddingMode;
    use symmetric_cipher::crypto::error::CipherError;
    use symmetric_cipher::crypto::utils::*;

    #[test]
    fn test_permute_bits_numbers_lsb_first() {
        // output bit 0 takes input bit 2, bit 2 of byte 0
        let mut table: Vec<usize> = (0..8).collect();
        table.swap(0, 2);
        assert_eq!(permute_bits(&[0b0000_0100], &table), vec![0b0000_0001]);
    }

    #[test]
    fn test_permute_bits_reverse() {
        let input = vec![0b0000_0001, 0b0000_0000];
        let table: Vec<usize> = (0..16).rev().collect();
        assert_eq!(permute_bits(&input, &table), vec![0b0000_0000, 0b1000_0000]);
    }

    #[test]
    fn test_permute_bits_interleave() {
        // even input bits go to the first byte, odd bits to the second
        let table = [0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15];
        let input = vec![0b0101_0101, 0b0101_0101];
        assert_eq!(permute_bits(&input, &table), vec![0xFF, 0x00]);
    }

    #[test]
    fn test_apply_padding_none_requires_alignment() {
        assert_eq!(
            apply_padding(vec![1, 2, 3], 8, PaddingMode::None),
            Err(CipherError::BlockAlignment { block_size: 8, len: 3 })
        );
        assert_eq!(apply_padding(vec![7; 16], 8, PaddingMode::None).unwrap(), vec![7; 16]);
        assert!(apply_padding(Vec::new(), 8, PaddingMode::None).unwrap().is_empty());
    }

    #[test]
    fn test_apply_padding_zeros() {
        let data = vec![1, 2, 3];
        let padded = apply_padding(data.clone(), 8, PaddingMode::Zeros).unwrap();
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[..3], &data[..]);
        assert!(padded[3..].iter().all(|&b| b == 0));

        let aligned = apply_padding(vec![9; 8], 8, PaddingMode::Zeros).unwrap();
        assert_eq!(aligned.len(), 8);
    }

    #[test]
    fn test_apply_padding_pkcs7() {
        let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::PKCS7).unwrap();
        assert_eq!(padded, vec![1, 2, 3, 5, 5, 5, 5, 5]);
    }

    #[test]
    fn test_apply_padding_ansi_x923() {
        let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::ANSI_X923).unwrap();
        assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 5]);
    }

    #[test]
    fn test_apply_padding_iso10126() {
        let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::ISO10126).unwrap();
        assert_eq!(padded.len(), 8);
        assert_eq!(padded.last().copied(), Some(5));
    }

    #[test]
    fn test_full_padding_block_pkcs7() {
        let data = vec![11, 22, 33, 44, 55, 66, 77, 88];
        let padded = apply_padding(data.clone(), 8, PaddingMode::PKCS7).unwrap();
        assert_eq!(padded.len(), 16);
        assert!(padded[8..].iter().all(|&b| b == 8));
        assert_eq!(remove_padding(padded, 8, PaddingMode::PKCS7).unwrap(), data);
    }

    #[test]
    fn test_padding_roundtrip_tagged_schemes() {
        for padding in [PaddingMode::PKCS7, PaddingMode::ANSI_X923, PaddingMode::ISO10126] {
            for len in 0..20 {
                let data: Vec<u8> = (0..len as u8).collect();
                let padded = apply_padding(data.clone(), 8, padding).unwrap();
                assert_eq!(padded.len() % 8, 0);
                assert!(padded.len() > data.len());
                assert_eq!(remove_padding(padded, 8, padding).unwrap(), data);
            }
        }
    }

    #[test]
    fn test_remove_padding_zeros() {
        let unpadded = remove_padding(vec![1, 2, 3, 0, 0], 8, PaddingMode::Zeros).unwrap();
        assert_eq!(unpadded, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_padding_rejects_malformed() {
        assert_eq!(
            remove_padding(vec![1, 2, 3, 4, 5, 6, 7, 0], 8, PaddingMode::PKCS7),
            Err(CipherError::InvalidPadding(PaddingMode::PKCS7))
        );
        assert_eq!(
            remove_padding(vec![1, 2, 3, 4, 5, 6, 3, 3], 8, PaddingMode::PKCS7),
            Err(CipherError::InvalidPadding(PaddingMode::PKCS7))
        );
        assert_eq!(
            remove_padding(vec![1, 2, 3, 4, 5, 1, 0, 3], 8, PaddingMode::ANSI_X923),
            Err(CipherError::InvalidPadding(PaddingMode::ANSI_X923))
        );
        assert_eq!(
            remove_padding(vec![9; 8], 8, PaddingMode::ISO10126),
            Err(CipherError::InvalidPadding(PaddingMode::ISO10126))
        );
        assert_eq!(
            remove_padding(Vec::new(), 8, PaddingMode::PKCS7),
            Err(CipherError::InvalidPadding(PaddingMode::PKCS7))
        );
    }

    #[test]
    fn test_increment_block_carries() {
        let mut block = vec![0x00, 0x00, 0x00, 0xFF];
        increment_block(&mut block, 1);
        assert_eq!(block, vec![0x00, 0x00, 0x01, 0x00]);

        let mut block = vec![0xFF; 4];
        increment_block(&mut block, 1);
        assert_eq!(block, vec![0x00; 4]);

        let mut block = vec![0x00, 0x00, 0x01, 0x02];
        increment_block(&mut block, 0x0102);
        assert_eq!(block, vec![0x00, 0x00, 0x02, 0x04]);
    }

    #[test]
    fn test_resolve_or_generate() {
        assert_eq!(resolve_or_generate(&[1, 2, 3], 16), vec![1, 2, 3]);
        assert_eq!(resolve_or_generate(&[], 16).len(), 16);
    }

    #[test]
    fn test_xor_helpers() {
        assert_eq!(xor_blocks(&[0xF0, 0x0F], &[0xFF, 0xFF]), vec![0x0F, 0xF0]);
        let mut target = [1u8, 2, 3];
        xor_in_place(&mut target, &[1, 2]);
        assert_eq!(target, [0, 0, 3]);
    }
}
