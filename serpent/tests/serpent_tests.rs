use hex_literal::hex;
use rand::RngCore;
use serpent::crypto::serpent::Serpent;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

fn sequential(len: u8) -> Vec<u8> {
    (0..len).collect()
}

#[test]
fn test_block_size_is_correct() {
    let cipher = Serpent::new(&[0u8; 16]).unwrap();
    assert_eq!(cipher.block_size(), 16);
}

#[test]
fn test_zero_key_vectors() {
    let cipher = Serpent::new(&[0u8; 32]).unwrap();
    assert_eq!(
        cipher.encrypt_block(&[0u8; 16]),
        hex!("49672ba898d98df95019180445491089")
    );

    let cipher = Serpent::new(&[0u8; 16]).unwrap();
    assert_eq!(
        cipher.encrypt_block(&[0u8; 16]),
        hex!("3620b17ae6a993d09618b8768266bae9")
    );
}

#[test]
fn test_sequential_key_vectors() {
    let plaintext = sequential(16);

    let cipher = Serpent::new(&sequential(32)).unwrap();
    let ciphertext = cipher.encrypt_block(&plaintext);
    assert_eq!(ciphertext, hex!("de269ff833e432b85b2e88d2701ce75c"));
    assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);

    let cipher = Serpent::new(&sequential(24)).unwrap();
    let ciphertext = cipher.encrypt_block(&plaintext);
    assert_eq!(ciphertext, hex!("753d5b42d86672fb29070c4fe4eaaf4c"));
    assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);
}

#[test]
fn test_single_bit_key() {
    let mut key = [0u8; 16];
    key[0] = 0x80;
    let cipher = Serpent::new(&key).unwrap();
    assert_eq!(
        cipher.encrypt_block(&[0u8; 16]),
        hex!("264e5481eff42a4606abda06c0bfda3d")
    );
}

#[test]
fn test_key_length_validation() {
    for len in [0, 8, 15, 17, 20, 31, 33] {
        assert_eq!(
            Serpent::new(&vec![0u8; len]).err(),
            Some(CipherError::KeyLength {
                cipher: "Serpent",
                expected: &[16, 24, 32],
                actual: len,
            })
        );
    }
    for len in [16, 24, 32] {
        assert!(Serpent::new(&vec![0u8; len]).is_ok());
    }
    assert_eq!(Serpent::generate_key().len(), 32);
}

#[test]
fn test_random_blocks_roundtrip() {
    let mut rng = rand::rng();
    for key_len in [16, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let cipher = Serpent::with_key(&key).unwrap();

        for _ in 0..8 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            assert_eq!(cipher.decrypt_block(&cipher.encrypt_block(&block)), block);
        }
    }
}

#[test]
fn test_ecb_context_pads_with_pkcs7() {
    let cipher = Serpent::new(&[0u8; 32]).unwrap();
    let ctx = cipher.ecb_context().unwrap();

    let ciphertext = ctx.encrypt(b"abc").unwrap();
    assert_eq!(ciphertext, hex!("5e34ee33525d11b1ab5dde75d25f7136"));
    assert_eq!(ctx.decrypt(&ciphertext).unwrap(), b"abc");

    assert_eq!(ctx.encrypt(&[0u8; 16]).unwrap().len(), 32);
    assert!(ctx.encrypt(&[]).unwrap().len() == 16);
}

#[test]
fn test_cbc_context_prepends_supplied_iv() {
    let cipher = Serpent::new(&[0u8; 32]).unwrap();
    let ctx = cipher.cbc_context(Some(sequential(16))).unwrap();

    let ciphertext = ctx.encrypt(b"serpent cbc test").unwrap();
    assert_eq!(
        ciphertext,
        hex!(
            "000102030405060708090a0b0c0d0e0f
             b76158de08c9407e8e85ffd4c6a45be3
             e2341a592fc6a00d97ee523a603ae74b"
        )
    );
    assert_eq!(ctx.decrypt(&ciphertext).unwrap(), b"serpent cbc test");
}

#[test]
fn test_cbc_context_generates_fresh_iv() {
    let cipher = Serpent::new(&Serpent::generate_key()).unwrap();
    let ctx = cipher.cbc_context(None).unwrap();
    let message = b"identical plaintexts, different ciphertexts";

    let first = ctx.encrypt(message).unwrap();
    let second = ctx.encrypt(message).unwrap();
    assert_ne!(first[..16], second[..16]);
    assert_eq!(first.len(), 16 + 48);
    assert_eq!(ctx.decrypt(&first).unwrap(), message);
    assert_eq!(ctx.decrypt(&second).unwrap(), message);
}

#[test]
fn test_cbc_context_rejects_truncated_input() {
    let cipher = Serpent::new(&[1u8; 16]).unwrap();
    let ctx = cipher.cbc_context(None).unwrap();
    assert_eq!(
        ctx.decrypt(&[0u8; 10]),
        Err(CipherError::MessageTooShort { min: 16, len: 10 })
    );
    assert_eq!(
        ctx.decrypt(&[0u8; 20]),
        Err(CipherError::BlockAlignment { block_size: 16, len: 4 })
    );
}

#[test]
fn test_all_modes_roundtrip() {
    let cipher = Serpent::new(&sequential(24)).unwrap();
    let data = b"Serpent in every chaining mode, with an unaligned tail".to_vec();
    for mode in CipherMode::ALL {
        let ctx = cipher.context(mode, PaddingMode::PKCS7, None).unwrap();
        let ciphertext = ctx.encrypt(&data).unwrap();
        assert_eq!(ctx.decrypt(&ciphertext).unwrap(), data, "{mode}");
    }
}

#[test]
fn test_whole_buffer_api_requires_alignment() {
    let cipher = Serpent::new(&[0u8; 32]).unwrap();
    let two_blocks = [0u8; 32];
    let ciphertext = cipher.encrypt(&two_blocks).unwrap();
    assert_eq!(&ciphertext[..16], &hex!("49672ba898d98df95019180445491089"));
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), two_blocks);
    assert!(cipher.encrypt(&[0u8; 15]).is_err());
}

#[test]
fn test_key_avalanche() {
    let base = Serpent::new(&[0u8; 32]).unwrap().encrypt_block(&[0u8; 16]);
    let mut key = [0u8; 32];
    key[31] = 0x01;
    let flipped = Serpent::new(&key).unwrap().encrypt_block(&[0u8; 16]);

    let distance: u32 = base
        .iter()
        .zip(flipped.iter())
        .map(|(a, b)| (a ^ b).count_ones())
        .sum();
    assert!(distance >= 40, "only {distance} bits changed");
}
