// SPDX-License-Identifier: Apache-2.0
//! Geodesic polyline operations and segment reference derivation.
//!
//! `waymark-geom` sits above `waymark-core`: the core turns records into
//! identifiers; this crate turns raw polylines into those records. It
//! measures haversine lengths, samples points and bearings along a line, and
//! derives the forward/back location-reference chains a street segment is
//! published under.
//!
//! ```
//! use waymark_core::{Coordinate, FormOfWay};
//! use waymark_geom::forward_reference;
//!
//! let line = [
//!     Coordinate::new(-74.00482177734375, 40.741641998291016),
//!     Coordinate::new(-74.005126953125, 40.74085235595703),
//! ];
//! let reference = forward_reference(&line, FormOfWay::MultipleCarriageway)?;
//! assert_eq!(reference.location_references.len(), 2);
//! # Ok::<(), waymark_core::Error>(())
//! ```
//!
//! Everything here is pure computation; the transcendental math routes
//! through `libm` so derived identifiers are bit-identical across platforms.
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

pub mod polyline;
pub mod segment;

// Re-exports for stable public API
/// Haversine primitives.
pub use polyline::{
    bearing, bearing_to_azimuth, haversine_distance, length_meters, point_along,
    EARTH_RADIUS_METERS,
};
/// Reference derivation and the full geometry constructor.
pub use segment::{
    back_reference, distance_to_next_ref, forward_reference, geometry, inbound_bearing,
    outbound_bearing, GeometryOptions, BEARING_WINDOW_METERS, MAX_SEGMENT_LENGTH_METERS,
};
