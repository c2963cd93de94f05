use rand::SeedableRng;
use rand::{rngs::StdRng, RngCore};

use rabbit::Rabbit;

use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, StreamCipher};
use symmetric_cipher::crypto::error::CipherError;

fn main() -> Result<(), CipherError> {
    // --------------------------------------------------------
    // 0) Keystream blocks
    // --------------------------------------------------------
    println!("=== Rabbit keystream demo ===");
    let mut cipher = Rabbit::new(&[0u8; 16])?;
    for i in 0..3 {
        println!(" S{}: {:02x?}", i, cipher.next_block());
    }

    let mut with_iv = Rabbit::with_iv(&[0u8; 16], &[0u8; 8])?;
    println!(" S0 with zero IV: {:02x?}", with_iv.next_block());

    // --------------------------------------------------------
    // 1) Streaming in chunks, then rewinding
    // --------------------------------------------------------
    println!("\n=== Streaming demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let mut data = vec![0u8; 4096];
    rng.fill_bytes(&mut data);

    let mut stream = Rabbit::with_iv(&key, b"nonce-01")?;
    let ciphertext: Vec<u8> = data
        .chunks(512)
        .flat_map(|chunk| stream.apply_keystream(chunk))
        .collect();

    stream.reset();
    let plain: Vec<u8> = ciphertext
        .chunks(512)
        .flat_map(|chunk| stream.apply_keystream(chunk))
        .collect();
    assert_eq!(plain, data);
    println!(" {} bytes in 512-byte chunks OK", data.len());

    // --------------------------------------------------------
    // 2) Whole-buffer API
    // --------------------------------------------------------
    println!("\n=== Whole-buffer demo ===");
    let cipher = Rabbit::new(&key)?;
    let ciphertext = cipher.encrypt(b"attack at dawn")?;
    println!(" ciphertext: {:02x?}", ciphertext);
    assert_eq!(cipher.decrypt(&ciphertext)?, b"attack at dawn");

    Ok(())
}
