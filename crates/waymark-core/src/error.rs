// SPDX-License-Identifier: Apache-2.0
//! Error taxonomy for canonicalization, identifier derivation, and decoding.

use thiserror::Error;

/// Convenience alias for fallible waymark-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by canonicalization, identifier generation, and the
/// Base-58 codec.
///
/// Every variant carries the offending field, character, or code so callers
/// can report precisely. All failures are synchronous and final: the
/// computations are pure, so there is nothing transient to retry against.
/// An out-of-range enumeration code is never coerced to a default category —
/// that would silently change the canonical message and break the
/// deterministic hash contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record cannot be canonicalized: empty reference chain, degenerate
    /// geometry, or a numeric field that is non-finite or out of range.
    #[error("[INVALID_RECORD] {field}: {reason}")]
    InvalidRecord {
        /// Name of the offending field.
        field: &'static str,
        /// What made the field unusable.
        reason: &'static str,
    },
    /// A Base-58 input contained a symbol outside the alphabet.
    #[error("[INVALID_CHARACTER] {character:?} at byte {index} is not a base-58 symbol")]
    InvalidCharacter {
        /// The unrecognized character.
        character: char,
        /// Byte offset of the character in the input string.
        index: usize,
    },
    /// An integer code does not map to any variant of a closed enumeration.
    #[error("[UNKNOWN_ENUM_VALUE] {name} has no variant with code {code}")]
    UnknownEnumValue {
        /// The enumeration the code was checked against.
        name: &'static str,
        /// The rejected code.
        code: u8,
    },
}
