// SPDX-License-Identifier: Apache-2.0
//! Fixed-width message digests.
//!
//! Canonical messages are digested with MD5. The 128-bit width and the exact
//! bit pattern are part of the identifier contract: every producer of these
//! identifiers, in any language, must derive the same digest for the same
//! canonical message. The algorithm's internals (little-endian 32-bit word
//! schedule, end-of-message padding) stay behind [`digest`]; nothing about
//! them is observable in the canonical message itself.

use md5::{Digest as _, Md5};

/// Width of a message digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// A 128-bit message digest.
///
/// Thin newtype over `[u8; 16]`. The inner bytes are public for zero-cost
/// access; the `Display` impl renders lowercase hex for logging and error
/// messages.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// View the digest as a byte array.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Digest an arbitrary byte sequence to a fixed 16 bytes.
///
/// Deterministic on every platform; any single-bit change of input flips on
/// average half the output bits. Cannot fail on well-formed byte input.
#[must_use]
pub fn digest(bytes: &[u8]) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    Digest(hasher.finalize().into())
}
