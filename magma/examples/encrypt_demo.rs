use rand::SeedableRng;
use rand::{rngs::StdRng, RngCore};

use magma::crypto::key_schedule::{round_key_sequence, subkeys};
use magma::crypto::sboxes::substitute;
use magma::crypto::transformation::g;
use magma::Magma;

use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

const RFC_KEY: [u8; 32] = [
    0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa, 0x99, 0x88,
    0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00,
    0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7,
    0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff,
];

fn main() -> Result<(), CipherError> {
    // --------------------------------------------------------
    // 0) Key schedule & single-block Magma demo
    // --------------------------------------------------------
    println!("=== Key schedule & single-block Magma demo ===");
    let keys = subkeys(&RFC_KEY);
    println!(" K1 = 0x{:08x}, K8 = 0x{:08x}", keys[0], keys[7]);
    let sequence = round_key_sequence(&keys);
    println!(" Round 25 uses 0x{:08x}", sequence[24]);

    let cipher = Magma::new(&RFC_KEY)?;
    let block = [0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10];
    let encrypted = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&encrypted);
    println!(" Plaintext block: {:02x?}", block);
    println!(" Encrypted block: {:02x?}", encrypted);
    assert_eq!(decrypted, block);

    // --------------------------------------------------------
    // 1) Round function demo
    // --------------------------------------------------------
    println!("\n=== Round function demo ===");
    for &word in &[0xfdb9_7531u32, 0x2a19_6f34, 0xebd9_f03a] {
        println!("  t(0x{:08x}) = 0x{:08x}", word, substitute(word));
    }
    println!("  g[0x87654321](0xfedcba98) = 0x{:08x}", g(0x8765_4321, 0xfedc_ba98));

    // --------------------------------------------------------
    // 2) Random data through every chaining mode
    // --------------------------------------------------------
    println!("\n=== Random data demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut data = vec![0u8; 1021];
    rng.fill_bytes(&mut data);

    for mode in CipherMode::ALL {
        let ctx = cipher.context_with_padding(mode, PaddingMode::PKCS7, None)?;
        let ciphertext = ctx.encrypt(&data)?;
        assert_eq!(ctx.decrypt(&ciphertext)?, data);
        println!("magma {} -> {} bytes OK", mode.to_string().to_lowercase(), ciphertext.len());
    }

    Ok(())
}
