use rand::SeedableRng;
use rand::{rngs::StdRng, RngCore};

use serpent::crypto::key_schedule::{pad_key, prekeys};
use serpent::crypto::linear::{inverse_transform, transform};
use serpent::crypto::sboxes::SBOX;
use serpent::Serpent;

use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherError;

fn main() -> Result<(), CipherError> {
    let key_sizes = [16usize, 24, 32];
    let paddings = [
        PaddingMode::Zeros, PaddingMode::ANSI_X923,
        PaddingMode::PKCS7, PaddingMode::ISO10126,
    ];

    // --------------------------------------------------------
    // 0) Key schedule & single-block Serpent demo
    // --------------------------------------------------------
    println!("=== Key schedule & single-block Serpent demo ===");
    let key128 = [0u8; 16];
    println!(" Padded key: {:02x?}", pad_key(&key128));
    let words = prekeys(&key128);
    println!(" First prekey: 0x{:08x}, total: {}", words[0], words.len());

    let cipher = Serpent::new(&key128)?;
    let block = [0u8; 16];
    let encrypted = cipher.encrypt_block(&block);
    println!(" Encrypted zero block: {:02x?}", encrypted);
    assert_eq!(cipher.decrypt_block(&encrypted), block);

    // --------------------------------------------------------
    // 1) S-box and linear transformation demo
    // --------------------------------------------------------
    println!("\n=== S-box & LT demo ===");
    for (i, table) in SBOX.iter().enumerate() {
        println!("  S{}: {:x?}", i, table);
    }
    let x = [0x0123_4567, 0x89ab_cdef, 0xfedc_ba98, 0x7654_3210];
    let mixed = transform(x);
    println!("  LT({:08x?}) = {:08x?}", x, mixed);
    assert_eq!(inverse_transform(mixed), x);

    // --------------------------------------------------------
    // 2) Random data: key sizes, modes, paddings
    // --------------------------------------------------------
    println!("\n=== Random data demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let mut data = vec![0u8; 1021];
    rng.fill_bytes(&mut data);

    for &ks in &key_sizes {
        let mut key = vec![0u8; ks];
        rng.fill_bytes(&mut key);
        let cipher = Serpent::new(&key)?;
        for mode in CipherMode::ALL {
            for &pad in &paddings {
                let ctx = cipher.context(mode, pad, None)?;
                let ciphertext = ctx.encrypt(&data)?;
                let plain = ctx.decrypt(&ciphertext)?;
                // zero padding cannot tell trailing zeros from padding
                assert_eq!(&plain[..], &data[..plain.len()]);
                println!(
                    "key={}b {}+{:?} OK",
                    ks * 8,
                    mode.to_string().to_lowercase(),
                    pad
                );
            }
        }
    }

    // --------------------------------------------------------
    // 3) CBC with the IV carried in front of the ciphertext
    // --------------------------------------------------------
    println!("\n=== Embedded IV demo ===");
    let ctx = Serpent::new(&[7u8; 32])?.cbc_context(None)?;
    let first = ctx.encrypt(b"same message")?;
    let second = ctx.encrypt(b"same message")?;
    println!(" IV #1: {:02x?}", &first[..16]);
    println!(" IV #2: {:02x?}", &second[..16]);
    assert_eq!(ctx.decrypt(&first)?, b"same message");

    Ok(())
}
