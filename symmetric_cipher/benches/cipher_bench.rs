use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};

struct IdentityCipher;

impl BlockCipher for IdentityCipher {
    fn block_size(&self) -> usize { 8 }
    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> { block.to_vec() }
    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> { block.to_vec() }
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = rand::rng();
    let mut group = c.benchmark_group("Chaining overhead");
    group.sample_size(20);

    for size in [64 * 1024, 8 * 1024 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));

        for mode in CipherMode::ALL {
            let ctx = CipherContext::new(Box::new(IdentityCipher), mode, PaddingMode::PKCS7, None)
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{mode} encrypt"), size),
                &data,
                |b, data| b.iter(|| ctx.encrypt(black_box(data)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
