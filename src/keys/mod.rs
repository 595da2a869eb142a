//! Private and public key types with raw, DER and PEM interchange
//!
//! Raw layouts are fixed width per scheme: a private key is the bare scalar
//! (32 or 48 bytes) and a public key is an uncompressed point
//! `0x04 ‖ X ‖ Y` (65 or 97 bytes). The scheme is inferred from the byte
//! length; any other length is rejected. Private keys interchange as
//! RFC 5915 `ECPrivateKey` DER with `EC PRIVATE KEY` PEM armor, public
//! keys as RFC 5480 `SubjectPublicKeyInfo` with `PUBLIC KEY` armor; the
//! curve is selected by OID in both.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::{Zeroize, Zeroizing};

use crate::bigint::BigInt;
use crate::ec::{self, EccPoint};
use crate::error::{validate, Error, Result};
use crate::params::{Curve, Scheme};

pub(crate) mod asn1;

#[cfg(test)]
mod tests;

use asn1::{
    oid_for_scheme, scheme_from_oid, write_tlv, DerReader, OID_EC_PUBLIC_KEY, TAG_BIT_STRING,
    TAG_CONTEXT_0, TAG_CONTEXT_1, TAG_INTEGER, TAG_OCTET_STRING, TAG_OID, TAG_SEQUENCE,
};

const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Wrap DER in PEM armor with the given label, 64 characters per line
fn pem_encode(label: &str, der: &[u8]) -> String {
    let encoded = BASE64.encode(der);
    let mut pem = String::with_capacity(encoded.len() + 2 * label.len() + 40);
    pem.push_str("-----BEGIN ");
    pem.push_str(label);
    pem.push_str("-----\n");
    for chunk in encoded.as_bytes().chunks(64) {
        // chunks of a valid base64 string are always ASCII
        pem.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        pem.push('\n');
    }
    pem.push_str("-----END ");
    pem.push_str(label);
    pem.push_str("-----\n");
    pem
}

/// Strip PEM armor with the given label and decode the base64 body
fn pem_decode(pem: &str, label: &str, context: &'static str) -> Result<Zeroizing<Vec<u8>>> {
    let header = format!("-----BEGIN {}-----", label);
    let footer = format!("-----END {}-----", label);
    let start = pem.find(&header).ok_or(Error::Encoding {
        context,
        details: "missing PEM header",
    })?;
    let end = pem.find(&footer).ok_or(Error::Encoding {
        context,
        details: "missing PEM footer",
    })?;
    if end < start {
        return Err(Error::Encoding {
            context,
            details: "PEM footer precedes header",
        });
    }
    let body: String = pem[start + header.len()..end]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let der = BASE64.decode(body.as_bytes()).map_err(|_| Error::Encoding {
        context,
        details: "invalid base64 body",
    })?;
    Ok(Zeroizing::new(der))
}

/// Read a key file as bytes, reporting failures as [`Error::Io`]
fn read_key_file(path: &Path, context: &'static str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::Io {
        context,
        details: e.to_string(),
    })
}

/// An ECDSA/ECDH private key: a scalar in `[1, N-1]` on a named curve
///
/// The matching public key is derived on first use and cached for the
/// lifetime of the key. The scalar is wiped from memory on drop.
pub struct PrivateKey {
    scheme: Scheme,
    value: BigInt,
    public: OnceLock<PublicKey>,
}

impl PrivateKey {
    /// Parse a raw scalar; 32 bytes selects P-256 and 48 bytes P-384
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        let scheme = Scheme::from_private_key_len(bytes.len()).ok_or(Error::InvalidKey {
            context: "private key",
            reason: "length matches no supported scheme",
        })?;
        Self::from_scalar(scheme, BigInt::from_bytes_be(bytes))
    }

    /// Wrap an already-reduced scalar, rejecting values outside `[1, N-1]`
    pub(crate) fn from_scalar(scheme: Scheme, value: BigInt) -> Result<Self> {
        let curve = Curve::get(scheme);
        if value.is_zero() || value >= curve.n {
            return Err(Error::InvalidKey {
                context: "private key",
                reason: "scalar outside [1, N-1]",
            });
        }
        Ok(PrivateKey {
            scheme,
            value,
            public: OnceLock::new(),
        })
    }

    /// Parse an RFC 5915 `ECPrivateKey` DER structure
    ///
    /// The optional `[1]` public-key element is accepted both as a nested
    /// BIT STRING and as raw point bytes; either way the public key is
    /// rederived from the scalar rather than trusted from the file.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        const CTX: &str = "EC private key DER";

        let mut outer = DerReader::new(der);
        let body = outer.expect(TAG_SEQUENCE, CTX)?;
        let mut seq = DerReader::new(body);

        let version = seq.expect(TAG_INTEGER, CTX)?;
        if version != [0x01].as_slice() {
            return Err(Error::Encoding {
                context: CTX,
                details: "unsupported ECPrivateKey version",
            });
        }

        let scalar = Zeroizing::new(seq.expect(TAG_OCTET_STRING, CTX)?.to_vec());

        let params = seq.expect(TAG_CONTEXT_0, CTX)?;
        let oid = DerReader::new(params).expect(TAG_OID, CTX)?;
        let scheme = scheme_from_oid(oid)?;
        validate::length(CTX, scalar.len(), scheme.field_size())?;

        if seq.peek_tag() == Some(TAG_CONTEXT_1) {
            let embedded = seq.expect(TAG_CONTEXT_1, CTX)?;
            read_embedded_public(embedded)?;
        }

        Self::from_scalar(scheme, BigInt::from_bytes_be(&scalar))
    }

    /// Parse a PEM-armored `EC PRIVATE KEY` block
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = pem_decode(pem, EC_PRIVATE_KEY_LABEL, "EC private key PEM")?;
        Self::from_der(&der)
    }

    /// Load a key file, accepting either PEM or bare DER content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = read_key_file(path.as_ref(), "private key file")?;
        if bytes.starts_with(b"-----") {
            let text = std::str::from_utf8(&bytes).map_err(|_| Error::Encoding {
                context: "private key file",
                details: "PEM content is not valid UTF-8",
            })?;
            Self::from_pem(text)
        } else {
            Self::from_der(&bytes)
        }
    }

    /// The curve scheme this key belongs to
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The raw scalar, zero-padded to the scheme's field width
    pub fn to_raw_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.value.to_bytes_be_padded(self.scheme.field_size()))
    }

    pub(crate) fn value(&self) -> &BigInt {
        &self.value
    }

    /// The matching public key `scalar · G`, computed once and cached
    pub fn public_key(&self) -> Result<&PublicKey> {
        if let Some(cached) = self.public.get() {
            return Ok(cached);
        }
        let curve = Curve::get(self.scheme);
        let point = ec::multiply_base(&self.value, curve)?;
        Ok(self
            .public
            .get_or_init(|| PublicKey::from_point(self.scheme, point)))
    }

    /// Serialize as an RFC 5915 `ECPrivateKey` DER structure
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let public = self.public_key()?.to_raw_bytes();

        let mut body = Vec::new();
        write_tlv(&mut body, TAG_INTEGER, &[0x01]);
        write_tlv(&mut body, TAG_OCTET_STRING, &self.to_raw_bytes());

        let mut params = Vec::new();
        write_tlv(&mut params, TAG_OID, oid_for_scheme(self.scheme));
        write_tlv(&mut body, TAG_CONTEXT_0, &params);

        // BIT STRING with zero unused bits
        let mut bits = Vec::with_capacity(public.len() + 1);
        bits.push(0x00);
        bits.extend_from_slice(&public);
        let mut wrapped = Vec::new();
        write_tlv(&mut wrapped, TAG_BIT_STRING, &bits);
        write_tlv(&mut body, TAG_CONTEXT_1, &wrapped);

        let mut der = Vec::new();
        write_tlv(&mut der, TAG_SEQUENCE, &body);
        Ok(der)
    }

    /// Serialize as a PEM-armored `EC PRIVATE KEY` block
    pub fn to_pem(&self) -> Result<String> {
        Ok(pem_encode(EC_PRIVATE_KEY_LABEL, &self.to_der()?))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("scheme", &self.scheme)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Check the optional embedded public key for structural validity
///
/// Both the nested BIT STRING form and bare point bytes occur in the wild;
/// the point itself is discarded in favor of rederivation.
fn read_embedded_public(content: &[u8]) -> Result<()> {
    const CTX: &str = "EC private key DER";

    let point = if content.first() == Some(&TAG_BIT_STRING) {
        let bits = DerReader::new(content).expect(TAG_BIT_STRING, CTX)?;
        if bits.first() != Some(&0x00) {
            return Err(Error::Encoding {
                context: CTX,
                details: "public key BIT STRING has unused bits",
            });
        }
        &bits[1..]
    } else {
        content
    };
    if !point.is_empty() && point[0] != 0x04 {
        return Err(Error::Encoding {
            context: CTX,
            details: "embedded public key is not an uncompressed point",
        });
    }
    Ok(())
}

/// An ECDSA/ECDH public key: an affine point on a named curve
///
/// Construction does not prove curve membership; run
/// [`crate::ecdsa::validate`] before trusting an externally-supplied key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    scheme: Scheme,
    point: EccPoint,
}

impl PublicKey {
    /// Parse an uncompressed point; 65 bytes selects P-256 and 97 P-384
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        let scheme = Scheme::from_public_key_len(bytes.len()).ok_or(Error::InvalidKey {
            context: "public key",
            reason: "length matches no supported scheme",
        })?;
        validate::parameter(
            bytes[0] == 0x04,
            "public key",
            "missing uncompressed point prefix",
        )?;
        let width = scheme.field_size();
        let x = BigInt::from_bytes_be(&bytes[1..1 + width]);
        let y = BigInt::from_bytes_be(&bytes[1 + width..]);
        Ok(PublicKey {
            scheme,
            point: EccPoint::new(x, y),
        })
    }

    pub(crate) fn from_point(scheme: Scheme, point: EccPoint) -> Self {
        PublicKey { scheme, point }
    }

    /// The curve scheme this key belongs to
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The affine point
    pub fn point(&self) -> &EccPoint {
        &self.point
    }

    /// Uncompressed point bytes `0x04 ‖ X ‖ Y` at the scheme's field width
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        let width = self.scheme.field_size();
        let mut out = Vec::with_capacity(1 + 2 * width);
        out.push(0x04);
        out.extend_from_slice(&self.point.x().to_bytes_be_padded(width));
        out.extend_from_slice(&self.point.y().to_bytes_be_padded(width));
        out
    }

    /// Parse an RFC 5480 `SubjectPublicKeyInfo` DER structure
    pub fn from_der(der: &[u8]) -> Result<Self> {
        const CTX: &str = "public key DER";

        let mut outer = DerReader::new(der);
        let body = outer.expect(TAG_SEQUENCE, CTX)?;
        let mut seq = DerReader::new(body);

        let mut alg = DerReader::new(seq.expect(TAG_SEQUENCE, CTX)?);
        if alg.expect(TAG_OID, CTX)? != OID_EC_PUBLIC_KEY {
            return Err(Error::Encoding {
                context: CTX,
                details: "algorithm is not ecPublicKey",
            });
        }
        let scheme = scheme_from_oid(alg.expect(TAG_OID, CTX)?)?;

        let bits = seq.expect(TAG_BIT_STRING, CTX)?;
        if bits.first() != Some(&0x00) {
            return Err(Error::Encoding {
                context: CTX,
                details: "subject public key BIT STRING has unused bits",
            });
        }
        let key = Self::from_raw_bytes(&bits[1..])?;
        if key.scheme != scheme {
            return Err(Error::Encoding {
                context: CTX,
                details: "curve OID disagrees with the point width",
            });
        }
        Ok(key)
    }

    /// Serialize as an RFC 5480 `SubjectPublicKeyInfo` DER structure
    pub fn to_der(&self) -> Vec<u8> {
        let mut alg = Vec::new();
        write_tlv(&mut alg, TAG_OID, OID_EC_PUBLIC_KEY);
        write_tlv(&mut alg, TAG_OID, oid_for_scheme(self.scheme));

        let point = self.to_raw_bytes();
        let mut bits = Vec::with_capacity(point.len() + 1);
        bits.push(0x00);
        bits.extend_from_slice(&point);

        let mut body = Vec::new();
        write_tlv(&mut body, TAG_SEQUENCE, &alg);
        write_tlv(&mut body, TAG_BIT_STRING, &bits);

        let mut der = Vec::new();
        write_tlv(&mut der, TAG_SEQUENCE, &body);
        der
    }

    /// Parse a PEM-armored `PUBLIC KEY` block
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = pem_decode(pem, PUBLIC_KEY_LABEL, "public key PEM")?;
        Self::from_der(&der)
    }

    /// Serialize as a PEM-armored `PUBLIC KEY` block
    pub fn to_pem(&self) -> String {
        pem_encode(PUBLIC_KEY_LABEL, &self.to_der())
    }

    /// Load a key file, accepting either PEM or bare DER content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = read_key_file(path.as_ref(), "public key file")?;
        if bytes.starts_with(b"-----") {
            let text = std::str::from_utf8(&bytes).map_err(|_| Error::Encoding {
                context: "public key file",
                details: "PEM content is not valid UTF-8",
            })?;
            Self::from_pem(text)
        } else {
            Self::from_der(&bytes)
        }
    }
}
