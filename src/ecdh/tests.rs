use super::generate_secret;
use crate::ecdsa::generate_key_pair_with_rng;
use crate::error::Error;
use crate::keys::PublicKey;
use crate::params::Scheme;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x65636468)
}

#[test]
fn shared_secret_is_symmetric() {
    let mut rng = rng();
    for scheme in [Scheme::P256, Scheme::P384] {
        let (private_a, public_a) = generate_key_pair_with_rng(scheme, &mut rng).unwrap();
        let (private_b, public_b) = generate_key_pair_with_rng(scheme, &mut rng).unwrap();

        let secret_ab = generate_secret(&private_a, &public_b).unwrap();
        let secret_ba = generate_secret(&private_b, &public_a).unwrap();
        assert_eq!(secret_ab.as_slice(), secret_ba.as_slice());
        assert_eq!(secret_ab.len(), scheme.field_size());
    }
}

#[test]
fn distinct_pairs_give_distinct_secrets() {
    let mut rng = rng();
    let (private_a, _) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();
    let (_, public_b) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();
    let (_, public_c) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();

    let with_b = generate_secret(&private_a, &public_b).unwrap();
    let with_c = generate_secret(&private_a, &public_c).unwrap();
    assert_ne!(with_b.as_slice(), with_c.as_slice());
}

#[test]
fn scheme_mismatch_is_fatal() {
    let mut rng = rng();
    let (private_256, _) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();
    let (_, public_384) = generate_key_pair_with_rng(Scheme::P384, &mut rng).unwrap();

    assert!(matches!(
        generate_secret(&private_256, &public_384),
        Err(Error::SchemeMismatch { .. })
    ));
}

#[test]
fn tampered_peer_point_is_fatal() {
    let mut rng = rng();
    let (private_a, _) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();
    let (_, public_b) = generate_key_pair_with_rng(Scheme::P256, &mut rng).unwrap();

    let mut raw = public_b.to_raw_bytes();
    raw[40] ^= 0x10;
    let tampered = PublicKey::from_raw_bytes(&raw).unwrap();
    assert!(matches!(
        generate_secret(&private_a, &tampered),
        Err(Error::InvalidKey { .. })
    ));
}
