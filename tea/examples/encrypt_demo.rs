use rand::SeedableRng;
use rand::{rngs::StdRng, RngCore};

use tea::crypto::xxtea::rounds_for;
use tea::{Tea, Xtea, Xxtea};

use symmetric_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

fn main() -> Result<(), CipherError> {
    let key = *b"0123456789abcdef";

    // --------------------------------------------------------
    // 0) TEA & XTEA on a single block
    // --------------------------------------------------------
    println!("=== Single-block TEA / XTEA demo ===");
    let tea = Tea::new(&key)?;
    let (v0, v1) = tea.encrypt_words(0x0123_4567, 0x89ab_cdef);
    println!(" TEA  words: 0x{:08x} 0x{:08x}", v0, v1);

    for cycles in [8u32, 16, 32, 64] {
        let xtea = Xtea::with_cycles(&key, cycles)?;
        let encrypted = xtea.encrypt_block(b"testmsg!");
        println!(" XTEA {:>2} cycles: {:02x?}", cycles, encrypted);
        assert_eq!(xtea.decrypt_block(&encrypted), b"testmsg!");
    }

    // --------------------------------------------------------
    // 1) Chaining modes over random data
    // --------------------------------------------------------
    println!("\n=== Random data demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut data = vec![0u8; 1021];
    rng.fill_bytes(&mut data);

    let xtea = Xtea::new(&key)?;
    for mode in CipherMode::ALL {
        let ctx = tea.context(mode, PaddingMode::PKCS7, None)?;
        assert_eq!(ctx.decrypt(&ctx.encrypt(&data)?)?, data);
        let ctx = xtea.context(mode, PaddingMode::PKCS7, None)?;
        assert_eq!(ctx.decrypt(&ctx.encrypt(&data)?)?, data);
        println!("tea/xtea {} OK", mode.to_string().to_lowercase());
    }

    // --------------------------------------------------------
    // 2) XXTEA over whole messages
    // --------------------------------------------------------
    println!("\n=== XXTEA demo ===");
    let xxtea = Xxtea::new(&key)?;
    for message in [&b"hello"[..], b"hello world!", &data[..64]] {
        let ciphertext = xxtea.encrypt(message)?;
        println!(
            " {} bytes -> {} bytes, {} rounds",
            message.len(),
            ciphertext.len(),
            rounds_for(ciphertext.len() / 4)
        );
        let plain = xxtea.decrypt(&ciphertext)?;
        assert_eq!(&plain[..message.len()], message);
    }

    Ok(())
}
