use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mincrypt_api::SignatureScheme;
use mincrypt_sign::Ecdsa;
use mincrypt_tests::ReferenceGroup;
use rand::rngs::OsRng;

fn bench_ecdsa_p256(c: &mut Criterion) {
    let scheme = Ecdsa::new(ReferenceGroup::p256());
    let mut rng = OsRng;
    let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();
    let message = b"benchmark message";
    let signature = scheme.sign(message, &secret_key, &mut rng).unwrap();

    c.bench_function("ECDSA-P256 keypair", |b| {
        b.iter(|| black_box(scheme.keypair(&mut rng).unwrap()));
    });

    c.bench_function("ECDSA-P256 sign", |b| {
        b.iter(|| black_box(scheme.sign(black_box(message), &secret_key, &mut rng).unwrap()));
    });

    c.bench_function("ECDSA-P256 verify", |b| {
        b.iter(|| {
            black_box(
                scheme
                    .verify(black_box(message), &signature, &public_key)
                    .unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_ecdsa_p256);
criterion_main!(benches);
