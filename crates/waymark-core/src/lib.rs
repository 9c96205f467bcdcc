// SPDX-License-Identifier: Apache-2.0
//! Stable content-derived identifiers for street-network entities.
//!
//! `waymark-core` assigns basemap-independent identifiers to intersections,
//! street-segment geometries, and ordered location-reference chains. Two
//! producers with the same underlying data derive byte-identical identifiers
//! with no coordination: an entity record canonicalizes to a deterministic
//! UTF-8 message ([`canonical`]), the message digests to 128 bits
//! ([`digest`]), and the digest renders in a Base-58 alphabet with no
//! ambiguous glyphs ([`base58`]).
//!
//! ```
//! use waymark_core::{intersection_id, Coordinate};
//!
//! let id = intersection_id(Coordinate::new(110.0, 45.0))?;
//! assert_eq!(id.as_str(), "F585H3jn72yicbJhf4791w");
//! # Ok::<(), waymark_core::Error>(())
//! ```
//!
//! # Determinism Invariant
//!
//! Identical canonical messages always yield identical identifiers;
//! messages differing in any canonicalized field yield different identifiers
//! at digest strength. Everything in this crate is a pure, synchronous
//! computation over its arguments — no I/O, no shared mutable state — so
//! identifier derivations may run fully in parallel with no locking.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod base58;
pub mod canonical;
pub mod digest;
mod error;
mod ident;
mod record;

// Re-exports for stable public API
/// Canonical coordinate precision, re-exported for producers that pre-round.
pub use canonical::{location_reference_message, COORDINATE_PRECISION};
/// Fixed-width digest primitive.
pub use digest::{digest, Digest, DIGEST_LEN};
/// Crate error taxonomy.
pub use error::{Error, Result};
/// Identifier type and the generator surface.
pub use ident::{
    generate_hash, geometry_id, intersection_id, intersection_id_with_node, reference_id,
    Identifier,
};
/// Entity records, closed enumerations, and polyline flattening helpers.
pub use record::{
    coords_to_lonlats, lonlats_to_coords, Coordinate, FormOfWay, Geometry, Intersection,
    LocationReference, LocationReferenceOptions, Reference, RoadClass,
};
