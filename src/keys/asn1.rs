//! Minimal DER reader/writer for EC private key interchange
//!
//! Covers exactly the subset RFC 5915 and RFC 5480 key files use:
//! SEQUENCE, INTEGER,
//! OCTET STRING, BIT STRING, OBJECT IDENTIFIER and the two context tags,
//! with long-form lengths up to 32 bits.

use crate::error::{Error, Result};
use crate::params::Scheme;

/// Universal and context-specific tags used by EC key structures
pub(crate) const TAG_INTEGER: u8 = 0x02;
pub(crate) const TAG_BIT_STRING: u8 = 0x03;
pub(crate) const TAG_OCTET_STRING: u8 = 0x04;
pub(crate) const TAG_OID: u8 = 0x06;
pub(crate) const TAG_SEQUENCE: u8 = 0x30;
pub(crate) const TAG_CONTEXT_0: u8 = 0xA0;
pub(crate) const TAG_CONTEXT_1: u8 = 0xA1;

/// 1.2.840.10045.2.1 (ecPublicKey)
pub(crate) const OID_EC_PUBLIC_KEY: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];
/// 1.2.840.10045.3.1.7 (prime256v1)
const OID_PRIME256V1: &[u8] = &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07];
/// 1.3.132.0.34 (secp384r1)
const OID_SECP384R1: &[u8] = &[0x2B, 0x81, 0x04, 0x00, 0x22];

/// Map a curve OID's encoded body to a scheme; unknown OIDs are fatal
pub(crate) fn scheme_from_oid(oid: &[u8]) -> Result<Scheme> {
    match oid {
        o if o == OID_PRIME256V1 => Ok(Scheme::P256),
        o if o == OID_SECP384R1 => Ok(Scheme::P384),
        _ => Err(Error::Encoding {
            context: "curve OID",
            details: "unrecognized curve object identifier",
        }),
    }
}

/// Encoded OID body for a scheme
pub(crate) fn oid_for_scheme(scheme: Scheme) -> &'static [u8] {
    match scheme {
        Scheme::P256 => OID_PRIME256V1,
        Scheme::P384 => OID_SECP384R1,
    }
}

/// Sequential DER reader over a byte slice
pub(crate) struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        DerReader { data, pos: 0 }
    }

    /// Tag of the next element without consuming it
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take(&mut self, n: usize, context: &'static str) -> Result<&'a [u8]> {
        if self.data.len() - self.pos < n {
            return Err(Error::Encoding {
                context,
                details: "truncated DER element",
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read one tag-length-value element, returning (tag, content)
    pub fn read_tlv(&mut self, context: &'static str) -> Result<(u8, &'a [u8])> {
        let tag = self.take(1, context)?[0];
        let first = self.take(1, context)?[0];
        let len = if first & 0x80 == 0 {
            first as usize
        } else {
            let count = (first & 0x7F) as usize;
            if count == 0 || count > 4 {
                return Err(Error::Encoding {
                    context,
                    details: "unsupported DER length encoding",
                });
            }
            let mut len = 0usize;
            for byte in self.take(count, context)? {
                len = (len << 8) | *byte as usize;
            }
            len
        };
        let content = self.take(len, context)?;
        Ok((tag, content))
    }

    /// Read the next element, requiring a specific tag
    pub fn expect(&mut self, tag: u8, context: &'static str) -> Result<&'a [u8]> {
        let (got, content) = self.read_tlv(context)?;
        if got != tag {
            return Err(Error::Encoding {
                context,
                details: "unexpected DER tag",
            });
        }
        Ok(content)
    }
}

/// Append a length field in definite form
fn write_len(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = (len as u32).to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

/// Append a complete tag-length-value element
pub(crate) fn write_tlv(out: &mut Vec<u8>, tag: u8, content: &[u8]) {
    out.push(tag);
    write_len(out, content.len());
    out.extend_from_slice(content);
}
