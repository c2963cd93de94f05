use cipher_cli::registry::{build, resolve, CipherKind};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use symmetric_cipher::{CipherAlgorithm, CipherMode};

const KINDS: [CipherKind; 6] = [
    CipherKind::Magma,
    CipherKind::Serpent,
    CipherKind::Tea,
    CipherKind::Xtea,
    CipherKind::Xxtea,
    CipherKind::Rabbit,
];

fn bench_ciphers(c: &mut Criterion) {
    let data: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let mut group = c.benchmark_group("Cipher throughput");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for kind in KINDS {
        let resolved = resolve(kind, Some(CipherMode::CTR), None, &[], &[], true).unwrap();
        let cipher = build(kind, &resolved).unwrap();
        group.bench_with_input(BenchmarkId::new(format!("{kind:?}"), "64KiB"), &data, |b, data| {
            b.iter(|| cipher.encrypt(black_box(data)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ciphers);
criterion_main!(benches);
