//! ECDSA signing and verification (FIPS 186-4)
//!
//! Each operation is a self-contained algorithm over the key types and the
//! point arithmetic engine. P-256 pairs with SHA-256 and P-384 with
//! SHA-384. Signatures are raw `r ‖ s` with both halves big-endian and
//! zero-padded to the curve's field width: 64 bytes on P-256, 96 on P-384.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::bigint::BigInt;
use crate::ec;
use crate::error::{Error, Result};
use crate::hash::{Hash, HashFunction, Sha256, Sha384};
use crate::keys::{PrivateKey, PublicKey};
use crate::params::{Curve, Scheme};


/// Hash a message with the scheme's paired digest
pub(crate) fn hash_message(scheme: Scheme, message: &[u8]) -> Hash {
    match scheme {
        Scheme::P256 => Sha256::digest(message),
        Scheme::P384 => Sha384::digest(message),
    }
}

/// Draw a uniform scalar in `[1, N-1]` by rejection sampling
pub(crate) fn random_scalar<R: CryptoRng + RngCore>(curve: &Curve, rng: &mut R) -> BigInt {
    let width = curve.scheme.field_size();
    let mut buf = Zeroizing::new(vec![0u8; width]);
    loop {
        rng.fill_bytes(&mut buf);
        let candidate = BigInt::from_bytes_be(&buf);
        if !candidate.is_zero() && candidate < curve.n {
            return candidate;
        }
    }
}

/// Generate a fresh key pair for `scheme` using the operating system CSPRNG
pub fn generate_key_pair(scheme: Scheme) -> Result<(PrivateKey, PublicKey)> {
    generate_key_pair_with_rng(scheme, &mut OsRng)
}

/// Generate a fresh key pair for `scheme` from the caller's CSPRNG
pub fn generate_key_pair_with_rng<R: CryptoRng + RngCore>(
    scheme: Scheme,
    rng: &mut R,
) -> Result<(PrivateKey, PublicKey)> {
    let curve = Curve::get(scheme);
    let key = PrivateKey::from_scalar(scheme, random_scalar(curve, rng))?;
    let public = key.public_key()?.clone();
    Ok((key, public))
}

/// Sign `message` using the operating system CSPRNG for the nonce
pub fn sign(message: &[u8], key: &PrivateKey) -> Result<Vec<u8>> {
    sign_with_rng(message, key, &mut OsRng)
}

/// Sign `message`, returning the raw `r ‖ s` signature
///
/// The ephemeral scalar `k` is drawn fresh from the caller's CSPRNG on
/// every attempt; the draw is retried in the negligible-probability case
/// that `r` or `s` lands on zero, so the returned signature is always
/// well-formed.
pub fn sign_with_rng<R: CryptoRng + RngCore>(
    message: &[u8],
    key: &PrivateKey,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let scheme = key.scheme();
    let curve = Curve::get(scheme);
    let width = scheme.field_size();
    let msg = BigInt::from_bytes_be(&hash_message(scheme, message));

    loop {
        let mut k = random_scalar(curve, rng);
        let point = ec::multiply_base(&k, curve)?;
        let r = point.x().rem_euclid(&curve.n)?;
        if r.is_zero() {
            k.zeroize();
            continue;
        }
        let k_inv = k.mod_inv(&curve.n)?;
        let s = k_inv
            .mul(&msg.add(&r.mul(key.value())))
            .rem_euclid(&curve.n)?;
        k.zeroize();
        if s.is_zero() {
            continue;
        }

        let mut signature = r.to_bytes_be_padded(width);
        signature.extend_from_slice(&s.to_bytes_be_padded(width));
        return Ok(signature);
    }
}

/// Verify a raw `r ‖ s` signature over `message`
///
/// A signature of the wrong length for the key's scheme is a fatal error;
/// every other defect (out-of-range `r` or `s`, mismatched point) verifies
/// as `false`. The final comparison runs in constant time.
pub fn verify(signature: &[u8], message: &[u8], key: &PublicKey) -> Result<bool> {
    let scheme = key.scheme();
    crate::error::validate::length("signature", signature.len(), scheme.signature_size())?;

    let curve = Curve::get(scheme);
    let width = scheme.field_size();
    let r = BigInt::from_bytes_be(&signature[..width]);
    let s = BigInt::from_bytes_be(&signature[width..]);
    if r.is_zero() || s.is_zero() || r >= curve.n || s >= curve.n {
        return Ok(false);
    }

    let msg = BigInt::from_bytes_be(&hash_message(scheme, message));
    let w = s.mod_inv(&curve.n)?;
    let u1 = msg.rem_euclid(&curve.n)?.mod_mul(&w, &curve.n)?;
    let u2 = r.mod_mul(&w, &curve.n)?;

    let sum = match ec::shamirs_trick(&u1, &u2, key.point(), curve)? {
        Some(point) => point,
        None => return Ok(false),
    };
    let v = sum.x().rem_euclid(&curve.n)?;

    let matches = v
        .to_bytes_be_padded(width)
        .ct_eq(&r.to_bytes_be_padded(width));
    Ok(matches.into())
}

/// Check that a public key's point lies on its scheme's curve
///
/// Run this before trusting any externally-supplied public key; a failure
/// signals a corrupt or maliciously-crafted point.
pub fn validate(key: &PublicKey) -> Result<()> {
    let curve = Curve::get(key.scheme());
    let point = key.point();
    if point.x().is_negative() || *point.x() >= curve.p || point.y().is_negative()
        || *point.y() >= curve.p
    {
        return Err(Error::InvalidKey {
            context: "public key validation",
            reason: "coordinate outside the field",
        });
    }
    if !ec::is_on_curve(point, curve) {
        return Err(Error::InvalidKey {
            context: "public key validation",
            reason: "point does not satisfy the curve equation",
        });
    }
    Ok(())
}
