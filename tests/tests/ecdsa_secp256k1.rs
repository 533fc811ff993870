//! Round-trip and tamper-sensitivity suite for ECDSA over secp256k1

use mincrypt_api::{CurveGroup, SignatureScheme};
use mincrypt_sign::Ecdsa;
use mincrypt_tests::ReferenceGroup;
use proptest::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn scheme() -> Ecdsa<ReferenceGroup> {
    Ecdsa::new(ReferenceGroup::secp256k1())
}

#[test]
fn test_round_trip_seeded() {
    let scheme = scheme();

    for seed in 0..5u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();

        assert!(scheme.group().is_on_curve(&public_key.0));
        assert!(!public_key.0.is_identity());

        let signature = scheme.sign(b"Hello world!", &secret_key, &mut rng).unwrap();
        assert!(scheme
            .verify(b"Hello world!", &signature, &public_key)
            .unwrap());
    }
}

#[test]
fn test_round_trip_os_rng() {
    let scheme = scheme();
    let mut rng = OsRng;

    let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();
    let signature = scheme.sign(b"Hello world!", &secret_key, &mut rng).unwrap();
    assert!(scheme
        .verify(b"Hello world!", &signature, &public_key)
        .unwrap());
}

#[test]
fn test_fresh_nonces_give_distinct_signatures() {
    let scheme = scheme();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();

    let first = scheme.sign(b"same message", &secret_key, &mut rng).unwrap();
    let second = scheme.sign(b"same message", &secret_key, &mut rng).unwrap();

    // Random nonces: same message, different signature, both valid.
    assert_ne!(first, second);
    assert!(scheme.verify(b"same message", &first, &public_key).unwrap());
    assert!(scheme.verify(b"same message", &second, &public_key).unwrap());
}

#[test]
fn test_tamper_sensitivity() {
    let scheme = scheme();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();
    let message = b"account=alice;amount=10";
    let signature = scheme.sign(message, &secret_key, &mut rng).unwrap();

    // Flip one bit at a time across the message.
    for byte in 0..message.len() {
        for bit in 0..8 {
            let mut tampered = message.to_vec();
            tampered[byte] ^= 1 << bit;
            assert!(!scheme.verify(&tampered, &signature, &public_key).unwrap());
        }
    }

    // Flip low bits of the signature components.
    for bit in 0..8u64 {
        let mut tampered = signature.clone();
        tampered.r.set_bit(bit, !tampered.r.bit(bit));
        assert!(!scheme.verify(message, &tampered, &public_key).unwrap());

        let mut tampered = signature.clone();
        tampered.s.set_bit(bit, !tampered.s.bit(bit));
        assert!(!scheme.verify(message, &tampered, &public_key).unwrap());
    }

    // Substitute a freshly generated public key.
    let (other_key, _) = scheme.keypair(&mut rng).unwrap();
    assert!(!scheme.verify(message, &signature, &other_key).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_sign_verify_round_trip(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        seed in any::<u64>(),
    ) {
        let scheme = scheme();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (public_key, secret_key) = scheme.keypair(&mut rng).unwrap();

        let signature = scheme.sign(&message, &secret_key, &mut rng).unwrap();
        prop_assert!(scheme.verify(&message, &signature, &public_key).unwrap());

        // Appending a byte must break the signature.
        let mut extended = message.clone();
        extended.push(0x00);
        prop_assert!(!scheme.verify(&extended, &signature, &public_key).unwrap());
    }
}
