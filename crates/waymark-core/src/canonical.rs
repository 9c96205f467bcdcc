// SPDX-License-Identifier: Apache-2.0
//! Canonical message builders.
//!
//! Every identifier is derived from a canonical UTF-8 message. Two producers
//! agree on an identifier exactly when they build byte-identical messages, so
//! the grammar below is a compatibility contract — changing any rule here is
//! a breaking change to every derived identifier:
//!
//! ```text
//! intersection-message = "Intersection" SP lon SP lat [SP node-id]
//! geometry-message     = "Geometry" 1*(SP lon SP lat)
//! lr-message           = lon SP lat [SP "o" bearing] [SP "i" bearing] [SP "d" meters]
//! reference-message    = "Reference" 1*(SP lr-message) SP fow-code
//! ```
//!
//! Numeric renderings are fixed globally: coordinates carry exactly
//! [`COORDINATE_PRECISION`] fractional digits (negative zero normalizes to
//! `0.000000`), bearings render as whole degrees, and distances render as
//! whole meters from their centimeter storage. Rounding is ties-to-even over
//! the exact binary value. Absent optional fields are omitted entirely —
//! never rendered as zero, since `0` is a valid bearing. The field delimiter
//! is a single space, which no numeric rendering, enum code, or tag can
//! produce; the one-letter tags keep an omitted field from shifting the
//! meaning of the survivors.

use crate::error::{Error, Result};
use crate::record::{Coordinate, FormOfWay, LocationReference};

/// Fractional digits carried by a canonical coordinate.
pub const COORDINATE_PRECISION: usize = 6;

fn canonical_degrees(value: f64, field: &'static str) -> Result<String> {
    if !value.is_finite() {
        return Err(Error::InvalidRecord {
            field,
            reason: "must be a finite number",
        });
    }
    // -0.0 and 0.0 must render identically.
    let value = if value == 0.0 { 0.0 } else { value };
    Ok(format!("{value:.prec$}", prec = COORDINATE_PRECISION))
}

fn canonical_bearing(value: f64, field: &'static str) -> Result<String> {
    if !value.is_finite() {
        return Err(Error::InvalidRecord {
            field,
            reason: "must be a finite number",
        });
    }
    if !(0.0..360.0).contains(&value) {
        return Err(Error::InvalidRecord {
            field,
            reason: "must lie in [0, 360)",
        });
    }
    Ok(format!("{value:.0}"))
}

fn canonical_distance_meters(centimeters: f64) -> Result<String> {
    if !centimeters.is_finite() {
        return Err(Error::InvalidRecord {
            field: "distance_to_next_ref",
            reason: "must be a finite number",
        });
    }
    if centimeters < 0.0 {
        return Err(Error::InvalidRecord {
            field: "distance_to_next_ref",
            reason: "must be non-negative",
        });
    }
    let meters = centimeters / 100.0;
    Ok(format!("{meters:.0}"))
}

/// Canonical message for an intersection at `coordinate`, with the source
/// graph's stable node id appended when one is recorded.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on non-finite coordinates.
pub fn intersection_message(coordinate: Coordinate, node_id: Option<u64>) -> Result<String> {
    let mut message = format!(
        "Intersection {} {}",
        canonical_degrees(coordinate.lon, "lon")?,
        canonical_degrees(coordinate.lat, "lat")?,
    );
    if let Some(node_id) = node_id {
        message.push(' ');
        message.push_str(&node_id.to_string());
    }
    Ok(message)
}

/// Canonical message for a polyline geometry.
///
/// All points concatenate in order with no point-count special cases: a bare
/// two-point segment and a many-point shape canonicalize identically.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on fewer than two points or non-finite
/// coordinates.
pub fn geometry_message(coordinates: &[Coordinate]) -> Result<String> {
    if coordinates.len() < 2 {
        return Err(Error::InvalidRecord {
            field: "coordinates",
            reason: "a geometry needs at least two points",
        });
    }
    let mut message = String::from("Geometry");
    for point in coordinates {
        message.push(' ');
        message.push_str(&canonical_degrees(point.lon, "lon")?);
        message.push(' ');
        message.push_str(&canonical_degrees(point.lat, "lat")?);
    }
    Ok(message)
}

/// Canonical sub-message for one location reference.
///
/// A sub-step of [`reference_message`], not an identifier source by itself.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on non-finite coordinates, a bearing outside
/// `[0, 360)`, or a negative distance.
pub fn location_reference_message(lr: &LocationReference) -> Result<String> {
    let mut message = format!(
        "{} {}",
        canonical_degrees(lr.coordinate.lon, "lon")?,
        canonical_degrees(lr.coordinate.lat, "lat")?,
    );
    if let Some(bearing) = lr.outbound_bearing {
        message.push_str(" o");
        message.push_str(&canonical_bearing(bearing, "outbound_bearing")?);
    }
    if let Some(bearing) = lr.inbound_bearing {
        message.push_str(" i");
        message.push_str(&canonical_bearing(bearing, "inbound_bearing")?);
    }
    if let Some(centimeters) = lr.distance_to_next_ref {
        message.push_str(" d");
        message.push_str(&canonical_distance_meters(centimeters)?);
    }
    Ok(message)
}

/// Canonical message for an ordered location-reference chain plus its form
/// of way.
///
/// Chain order is significant: the forward and back references of one
/// geometry are distinct entities and must hash apart. The form-of-way code
/// terminates the message.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on an empty chain or any invalid constituent
/// location reference.
pub fn reference_message(
    location_references: &[LocationReference],
    form_of_way: FormOfWay,
) -> Result<String> {
    if location_references.is_empty() {
        return Err(Error::InvalidRecord {
            field: "location_references",
            reason: "a reference needs at least one location reference",
        });
    }
    let mut message = String::from("Reference");
    for lr in location_references {
        message.push(' ');
        message.push_str(&location_reference_message(lr)?);
    }
    message.push(' ');
    message.push_str(&form_of_way.code().to_string());
    Ok(message)
}
