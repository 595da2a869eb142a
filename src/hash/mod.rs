//! Hash function implementations
//!
//! ECDSA over P-256 pairs with SHA-256 and P-384 with SHA-384; both are
//! implemented here so the crate stays free of platform crypto libraries.

pub mod sha2;

// Re-exports
pub use sha2::{Sha256, Sha384};

/// Hash function result
pub type Hash = Vec<u8>;

/// Trait for cryptographic hash functions
pub trait HashFunction {
    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]);

    /// Finalizes the hash computation and returns the digest
    fn finalize(&mut self) -> Hash;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Hash
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}
