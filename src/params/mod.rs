//! Domain parameters for the supported NIST curves
//!
//! Two parameter sets are carried, matching the DLMS/COSEM security suites:
//! suite 1 signs and agrees on P-256, suite 2 on P-384. The tables are
//! process-wide immutable constants; the [`Curve`] form (values lifted into
//! [`BigInt`]) is built once per scheme behind a `OnceLock` and shared by
//! `&'static` reference.

use crate::bigint::BigInt;
use crate::ec::EccPoint;
use std::fmt;
use std::sync::OnceLock;

/// Supported elliptic-curve schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// NIST P-256 (secp256r1), DLMS security suite 1
    P256,
    /// NIST P-384 (secp384r1), DLMS security suite 2
    P384,
}

impl Scheme {
    /// Byte width of one field coordinate (and of a private scalar)
    pub fn field_size(self) -> usize {
        match self {
            Scheme::P256 => P256_FIELD_ELEMENT_SIZE,
            Scheme::P384 => P384_FIELD_ELEMENT_SIZE,
        }
    }

    /// Byte width of an uncompressed public point (`0x04 ‖ X ‖ Y`)
    pub fn public_key_size(self) -> usize {
        match self {
            Scheme::P256 => P256_POINT_UNCOMPRESSED_SIZE,
            Scheme::P384 => P384_POINT_UNCOMPRESSED_SIZE,
        }
    }

    /// Byte width of a raw `r ‖ s` signature
    pub fn signature_size(self) -> usize {
        2 * self.field_size()
    }

    /// Infer the scheme from a raw private-key length
    pub fn from_private_key_len(len: usize) -> Option<Self> {
        match len {
            P256_FIELD_ELEMENT_SIZE => Some(Scheme::P256),
            P384_FIELD_ELEMENT_SIZE => Some(Scheme::P384),
            _ => None,
        }
    }

    /// Infer the scheme from a raw uncompressed public-key length
    pub fn from_public_key_len(len: usize) -> Option<Self> {
        match len {
            P256_POINT_UNCOMPRESSED_SIZE => Some(Scheme::P256),
            P384_POINT_UNCOMPRESSED_SIZE => Some(Scheme::P384),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::P256 => f.write_str("P-256"),
            Scheme::P384 => f.write_str("P-384"),
        }
    }
}

/// Field coordinate width for P-256 in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;
/// Field coordinate width for P-384 in bytes
pub const P384_FIELD_ELEMENT_SIZE: usize = 48;
/// Uncompressed point width for P-256 in bytes
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 65;
/// Uncompressed point width for P-384 in bytes
pub const P384_POINT_UNCOMPRESSED_SIZE: usize = 97;

/// Short-Weierstrass domain parameters as big-endian byte tables
///
/// `W` is the field coordinate width in bytes. The curve equation is
/// `y² = x³ + a·x + b (mod p)`, `(g_x, g_y)` is the base point G, and `n`
/// is the order of G.
pub struct EccParams<const W: usize> {
    /// Field prime modulus
    pub p: [u8; W],
    /// Curve coefficient A (p − 3 for both NIST curves)
    pub a: [u8; W],
    /// Curve coefficient B
    pub b: [u8; W],
    /// Base point X coordinate
    pub g_x: [u8; W],
    /// Base point Y coordinate
    pub g_y: [u8; W],
    /// Order of the base point
    pub n: [u8; W],
}

/// NIST P-256 domain parameters (FIPS 186-4, D.1.2.3)
pub static NIST_P256: EccParams<P256_FIELD_ELEMENT_SIZE> = EccParams {
    p: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ],
    a: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfc,
    ],
    b: [
        0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86,
        0xbc, 0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2,
        0x60, 0x4b,
    ],
    g_x: [
        0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40,
        0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98,
        0xc2, 0x96,
    ],
    g_y: [
        0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e,
        0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf,
        0x51, 0xf5,
    ],
    n: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63,
        0x25, 0x51,
    ],
};

/// NIST P-384 domain parameters (FIPS 186-4, D.1.2.4)
pub static NIST_P384: EccParams<P384_FIELD_ELEMENT_SIZE> = EccParams {
    p: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
        0xff, 0xff, 0xff,
    ],
    a: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
        0xff, 0xff, 0xfc,
    ],
    b: [
        0xb3, 0x31, 0x2f, 0xa7, 0xe2, 0x3e, 0xe7, 0xe4, 0x98, 0x8e, 0x05, 0x6b, 0xe3, 0xf8, 0x2d,
        0x19, 0x18, 0x1d, 0x9c, 0x6e, 0xfe, 0x81, 0x41, 0x12, 0x03, 0x14, 0x08, 0x8f, 0x50, 0x13,
        0x87, 0x5a, 0xc6, 0x56, 0x39, 0x8d, 0x8a, 0x2e, 0xd1, 0x9d, 0x2a, 0x85, 0xc8, 0xed, 0xd3,
        0xec, 0x2a, 0xef,
    ],
    g_x: [
        0xaa, 0x87, 0xca, 0x22, 0xbe, 0x8b, 0x05, 0x37, 0x8e, 0xb1, 0xc7, 0x1e, 0xf3, 0x20, 0xad,
        0x74, 0x6e, 0x1d, 0x3b, 0x62, 0x8b, 0xa7, 0x9b, 0x98, 0x59, 0xf7, 0x41, 0xe0, 0x82, 0x54,
        0x2a, 0x38, 0x55, 0x02, 0xf2, 0x5d, 0xbf, 0x55, 0x29, 0x6c, 0x3a, 0x54, 0x5e, 0x38, 0x72,
        0x76, 0x0a, 0xb7,
    ],
    g_y: [
        0x36, 0x17, 0xde, 0x4a, 0x96, 0x26, 0x2c, 0x6f, 0x5d, 0x9e, 0x98, 0xbf, 0x92, 0x92, 0xdc,
        0x29, 0xf8, 0xf4, 0x1d, 0xbd, 0x28, 0x9a, 0x14, 0x7c, 0xe9, 0xda, 0x31, 0x13, 0xb5, 0xf0,
        0xb8, 0xc0, 0x0a, 0x60, 0xb1, 0xce, 0x1d, 0x7e, 0x81, 0x9d, 0x7a, 0x43, 0x1d, 0x7c, 0x90,
        0xea, 0x0e, 0x5f,
    ],
    n: [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc7, 0x63, 0x4d, 0x81, 0xf4, 0x37,
        0x2d, 0xdf, 0x58, 0x1a, 0x0d, 0xb2, 0x48, 0xb0, 0xa7, 0x7a, 0xec, 0xec, 0x19, 0x6a, 0xcc,
        0xc5, 0x29, 0x73,
    ],
};

/// Domain parameters in `BigInt` form, ready for the arithmetic engine
///
/// Immutable after construction; obtained through [`Curve::get`], which
/// builds each scheme's table once and hands out shared references.
pub struct Curve {
    /// The scheme these parameters belong to
    pub scheme: Scheme,
    /// Field prime modulus
    pub p: BigInt,
    /// Curve coefficient A
    pub a: BigInt,
    /// Curve coefficient B
    pub b: BigInt,
    /// Order of the base point
    pub n: BigInt,
    /// Base point G in affine coordinates
    pub g: EccPoint,
}

impl Curve {
    /// Shared parameter table for `scheme`
    pub fn get(scheme: Scheme) -> &'static Curve {
        static P256: OnceLock<Curve> = OnceLock::new();
        static P384: OnceLock<Curve> = OnceLock::new();
        match scheme {
            Scheme::P256 => P256.get_or_init(|| Curve::build(scheme, &NIST_P256)),
            Scheme::P384 => P384.get_or_init(|| Curve::build(scheme, &NIST_P384)),
        }
    }

    fn build<const W: usize>(scheme: Scheme, params: &EccParams<W>) -> Curve {
        Curve {
            scheme,
            p: BigInt::from_bytes_be(&params.p),
            a: BigInt::from_bytes_be(&params.a),
            b: BigInt::from_bytes_be(&params.b),
            n: BigInt::from_bytes_be(&params.n),
            g: EccPoint::new(
                BigInt::from_bytes_be(&params.g_x),
                BigInt::from_bytes_be(&params.g_y),
            ),
        }
    }
}
