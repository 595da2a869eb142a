//! End-to-end tests across the public API, one scenario per security suite

use dlms_ecc::{ecdh, ecdsa, PrivateKey, PublicKey, Scheme};

#[test]
fn suite_1_sign_and_verify() {
    let (private, public) = ecdsa::generate_key_pair(Scheme::P256).unwrap();

    let message = b"DLMS APDU protected with security suite 1";
    let signature = ecdsa::sign(message, &private).unwrap();
    assert_eq!(signature.len(), 64);
    assert!(ecdsa::verify(&signature, message, &public).unwrap());
    assert!(!ecdsa::verify(&signature, b"different apdu", &public).unwrap());
}

#[test]
fn suite_2_sign_and_verify() {
    let (private, public) = ecdsa::generate_key_pair(Scheme::P384).unwrap();

    let message = b"DLMS APDU protected with security suite 2";
    let signature = ecdsa::sign(message, &private).unwrap();
    assert_eq!(signature.len(), 96);
    assert!(ecdsa::verify(&signature, message, &public).unwrap());
}

#[test]
fn key_agreement_between_client_and_server() {
    for scheme in [Scheme::P256, Scheme::P384] {
        let (client_private, client_public) = ecdsa::generate_key_pair(scheme).unwrap();
        let (server_private, server_public) = ecdsa::generate_key_pair(scheme).unwrap();

        let client_secret = ecdh::generate_secret(&client_private, &server_public).unwrap();
        let server_secret = ecdh::generate_secret(&server_private, &client_public).unwrap();
        assert_eq!(client_secret.as_slice(), server_secret.as_slice());
        assert_eq!(client_secret.len(), scheme.field_size());
    }
}

#[test]
fn keys_survive_interchange_formats() {
    let (private, public) = ecdsa::generate_key_pair(Scheme::P384).unwrap();

    // a signature from the original key verifies under every decoded form
    let message = b"persisted key material";
    let signature = ecdsa::sign(message, &private).unwrap();

    let from_raw = PrivateKey::from_raw_bytes(&private.to_raw_bytes()).unwrap();
    let from_der = PrivateKey::from_der(&private.to_der().unwrap()).unwrap();
    let from_pem = PrivateKey::from_pem(&private.to_pem().unwrap()).unwrap();
    for decoded in [&from_raw, &from_der, &from_pem] {
        assert_eq!(decoded.public_key().unwrap(), &public);
    }

    let peer_public = PublicKey::from_raw_bytes(&public.to_raw_bytes()).unwrap();
    ecdsa::validate(&peer_public).unwrap();
    assert!(ecdsa::verify(&signature, message, &peer_public).unwrap());
}
