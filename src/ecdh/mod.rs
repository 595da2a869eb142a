//! ECDH shared-secret derivation
//!
//! Both keys must live on the same curve, and the peer's public point is
//! checked for curve membership before any arithmetic touches it. The
//! shared secret is the X coordinate of `d · Q`, zero-padded to the field
//! width: 32 bytes on P-256, 48 on P-384.

use zeroize::Zeroizing;

use crate::ec;
use crate::ecdsa;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::params::Curve;

#[cfg(test)]
mod tests;

/// Derive the shared secret `d · Q` for a local private key and a peer's
/// public key
pub fn generate_secret(private: &PrivateKey, peer: &PublicKey) -> Result<Zeroizing<Vec<u8>>> {
    if private.scheme() != peer.scheme() {
        return Err(Error::SchemeMismatch {
            context: "key agreement",
            expected: private.scheme(),
            actual: peer.scheme(),
        });
    }
    ecdsa::validate(peer)?;

    let curve = Curve::get(private.scheme());
    let shared = ec::multiply(peer.point(), private.value(), curve)?;
    Ok(Zeroizing::new(
        shared.x().to_bytes_be_padded(private.scheme().field_size()),
    ))
}
