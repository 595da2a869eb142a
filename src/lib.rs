//! # dlms-ecc
//!
//! Self-contained elliptic-curve cryptography for DLMS/COSEM security
//! suites: ECDSA signing and verification, ECDH key agreement, and key
//! interchange (raw, DER, PEM) over NIST P-256 and P-384.
//!
//! All field and curve arithmetic is carried out on an in-crate
//! arbitrary-precision integer; no platform crypto library is linked. The
//! paired hash functions (SHA-256 for P-256, SHA-384 for P-384) are
//! likewise implemented here.
//!
//! ## Example
//!
//! ```
//! use dlms_ecc::{ecdsa, Scheme};
//!
//! # fn main() -> dlms_ecc::Result<()> {
//! let (private, public) = ecdsa::generate_key_pair(Scheme::P256)?;
//! let signature = ecdsa::sign(b"apdu payload", &private)?;
//! assert!(ecdsa::verify(&signature, b"apdu payload", &public)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod bigint;
pub mod ec;
pub mod ecdh;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;

pub use bigint::BigInt;
pub use ec::EccPoint;
pub use error::{Error, Result};
pub use keys::{PrivateKey, PublicKey};
pub use params::{Curve, Scheme};
