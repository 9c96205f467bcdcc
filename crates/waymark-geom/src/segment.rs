// SPDX-License-Identifier: Apache-2.0
//! Directional segment references derived from polylines.
//!
//! A geometry carries two references, one per direction of travel. Each
//! reference is an ordered chain of location references sampled from the
//! polyline: lines longer than [`MAX_SEGMENT_LENGTH_METERS`] split into
//! equal-length segments with one chain entry per boundary. Bearings are the
//! compass direction of the street geometry over the
//! [`BEARING_WINDOW_METERS`] adjacent to each entry, rounded to whole
//! degrees and normalized to `[0, 360)`.

use waymark_core::{
    geometry_id, Coordinate, Error, FormOfWay, Geometry, Identifier, LocationReference,
    LocationReferenceOptions, Reference, Result, RoadClass,
};

use crate::polyline;

/// Lines longer than this split into equal-length segments, meters.
pub const MAX_SEGMENT_LENGTH_METERS: f64 = 15_000.0;

/// Bearing sampling window, meters.
pub const BEARING_WINDOW_METERS: f64 = 20.0;

/// Compass bearing of the line over the window following `distance_meters`,
/// whole degrees in `[0, 360)`. Lines shorter than the window use the whole
/// line.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite input.
pub fn outbound_bearing(line: &[Coordinate], distance_meters: f64) -> Result<f64> {
    let length = polyline::length_meters(line)?;
    let (start, end) = if length > BEARING_WINDOW_METERS {
        (distance_meters, distance_meters + BEARING_WINDOW_METERS)
    } else {
        (0.0, length)
    };
    sampled_azimuth(line, start, end)
}

/// Compass bearing of the line over the window preceding `distance_meters`,
/// whole degrees in `[0, 360)`. Lines shorter than the window use the whole
/// line.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite input.
pub fn inbound_bearing(line: &[Coordinate], distance_meters: f64) -> Result<f64> {
    let length = polyline::length_meters(line)?;
    let (start, end) = if length > BEARING_WINDOW_METERS {
        (distance_meters - BEARING_WINDOW_METERS, distance_meters)
    } else {
        (0.0, length)
    };
    sampled_azimuth(line, start, end)
}

fn sampled_azimuth(line: &[Coordinate], start_meters: f64, end_meters: f64) -> Result<f64> {
    let start = polyline::point_along(line, start_meters)?;
    let end = polyline::point_along(line, end_meters)?;
    Ok(polyline::bearing_to_azimuth(libm::round(
        polyline::bearing(start, end),
    )))
}

/// Whole-line length in centimeters, rounded — the value recorded on a
/// location reference when the next reference is the end of the line.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite coordinates.
pub fn distance_to_next_ref(line: &[Coordinate]) -> Result<f64> {
    Ok(libm::round(polyline::length_meters(line)? * 100.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // count is ≥ 1 and small
fn segments_for(length_meters: f64) -> usize {
    let count = (length_meters / MAX_SEGMENT_LENGTH_METERS).ceil();
    if count < 1.0 {
        1
    } else {
        count as usize
    }
}

#[allow(clippy::cast_precision_loss)] // boundary indices are small
fn derive_chain(line: &[Coordinate]) -> Result<Vec<LocationReference>> {
    let length = polyline::length_meters(line)?;
    let segments = segments_for(length);
    let segment_length = length / segments as f64;

    let mut chain = Vec::with_capacity(segments + 1);
    for boundary in 0..=segments {
        let position = segment_length * boundary as f64;
        let mut options = LocationReferenceOptions::default();
        if boundary < segments {
            options.outbound_bearing = Some(outbound_bearing(line, position)?);
            options.distance_to_next_ref = Some(libm::round(segment_length * 100.0));
        }
        if boundary > 0 {
            options.inbound_bearing = Some(inbound_bearing(line, position)?);
        }
        let coordinate = if boundary == 0 {
            line[0]
        } else if boundary == segments {
            line[line.len() - 1]
        } else {
            polyline::point_along(line, position)?
        };
        chain.push(LocationReference::build(coordinate, options)?);
    }
    Ok(chain)
}

/// The reference describing travel along `line` in point order.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite coordinates.
pub fn forward_reference(line: &[Coordinate], form_of_way: FormOfWay) -> Result<Reference> {
    Reference::build(geometry_id(line)?, derive_chain(line)?, form_of_way)
}

/// The reference describing travel along `line` against point order.
///
/// Derived from the reversed polyline, so its chain — and therefore its
/// identifier — differs from the forward reference. Both references name the
/// same geometry.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite coordinates.
pub fn back_reference(line: &[Coordinate], form_of_way: FormOfWay) -> Result<Reference> {
    let mut reversed = line.to_vec();
    reversed.reverse();
    Reference::build(geometry_id(line)?, derive_chain(&reversed)?, form_of_way)
}

/// Optional attributes for [`geometry`].
#[derive(Clone, Copy, Default, Debug)]
pub struct GeometryOptions {
    /// Functional classification; `RoadClass::Other` when unspecified.
    pub road_class: Option<RoadClass>,
    /// Physical form of way; `FormOfWay::Undefined` when unspecified.
    pub form_of_way: Option<FormOfWay>,
}

/// Build the full geometry record for a polyline: identifier, directional
/// references, and bounding intersection identifiers taken from the chain
/// endpoints.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or non-finite coordinates.
pub fn geometry(line: &[Coordinate], options: GeometryOptions) -> Result<Geometry> {
    let form_of_way = options.form_of_way.unwrap_or(FormOfWay::Undefined);
    let road_class = options.road_class.unwrap_or(RoadClass::Other);

    let forward = forward_reference(line, form_of_way)?;
    let back = back_reference(line, form_of_way)?;
    let (from_intersection_id, to_intersection_id) = endpoint_ids(&forward)?;

    Ok(Geometry {
        id: forward.geometry_id.clone(),
        coordinates: line.to_vec(),
        road_class,
        from_intersection_id,
        to_intersection_id,
        forward_reference_id: forward.id,
        back_reference_id: back.id,
    })
}

fn endpoint_ids(reference: &Reference) -> Result<(Identifier, Identifier)> {
    let missing = Error::InvalidRecord {
        field: "location_references",
        reason: "a reference needs at least one location reference",
    };
    let first = reference
        .location_references
        .first()
        .ok_or_else(|| missing.clone())?;
    let last = reference.location_references.last().ok_or(missing)?;
    Ok((first.intersection_id.clone(), last.intersection_id.clone()))
}
