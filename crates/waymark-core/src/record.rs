// SPDX-License-Identifier: Apache-2.0
//! Street-network entity records and their closed attribute enumerations.
//!
//! Records hold the canonicalized content an identifier is derived from plus
//! the graph wiring around it. Entities refer to each other by [`Identifier`]
//! only — never by embedded pointer — so the reference graph carries no
//! structural cycles.

use crate::canonical;
use crate::error::{Error, Result};
use crate::ident::{self, Identifier};

/// A longitude/latitude pair in signed decimal degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

impl Coordinate {
    /// Build a coordinate from a longitude/latitude pair.
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

/// Functional road classification of a street segment.
///
/// Codes are stable external values shared with other producers; they appear
/// verbatim in canonical messages and interchange tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadClass {
    /// Code 0.
    Motorway,
    /// Code 1.
    Trunk,
    /// Code 2.
    Primary,
    /// Code 3.
    Secondary,
    /// Code 4.
    Tertiary,
    /// Code 5.
    Residential,
    /// Code 6.
    Unclassified,
    /// Code 7.
    Service,
    /// Code 8.
    Other,
}

impl RoadClass {
    /// The stable integer code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Motorway => 0,
            Self::Trunk => 1,
            Self::Primary => 2,
            Self::Secondary => 3,
            Self::Tertiary => 4,
            Self::Residential => 5,
            Self::Unclassified => 6,
            Self::Service => 7,
            Self::Other => 8,
        }
    }

    /// Resolve a stable integer code.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownEnumValue`] for codes outside `0..=8`. Unknown codes
    /// are never coerced to a default class.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Motorway),
            1 => Ok(Self::Trunk),
            2 => Ok(Self::Primary),
            3 => Ok(Self::Secondary),
            4 => Ok(Self::Tertiary),
            5 => Ok(Self::Residential),
            6 => Ok(Self::Unclassified),
            7 => Ok(Self::Service),
            8 => Ok(Self::Other),
            _ => Err(Error::UnknownEnumValue {
                name: "RoadClass",
                code,
            }),
        }
    }

    /// Display name, matching the interchange vocabulary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Motorway => "Motorway",
            Self::Trunk => "Trunk",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::Residential => "Residential",
            Self::Unclassified => "Unclassified",
            Self::Service => "Service",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<u8> for RoadClass {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical form of way of a street segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormOfWay {
    /// Code 0.
    Undefined,
    /// Code 1.
    Motorway,
    /// Code 2.
    MultipleCarriageway,
    /// Code 3.
    SingleCarriageway,
    /// Code 4.
    Roundabout,
    /// Code 5.
    TrafficSquare,
    /// Code 6.
    SlipRoad,
    /// Code 7.
    Other,
}

impl FormOfWay {
    /// The stable integer code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Motorway => 1,
            Self::MultipleCarriageway => 2,
            Self::SingleCarriageway => 3,
            Self::Roundabout => 4,
            Self::TrafficSquare => 5,
            Self::SlipRoad => 6,
            Self::Other => 7,
        }
    }

    /// Resolve a stable integer code.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownEnumValue`] for codes outside `0..=7`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Motorway),
            2 => Ok(Self::MultipleCarriageway),
            3 => Ok(Self::SingleCarriageway),
            4 => Ok(Self::Roundabout),
            5 => Ok(Self::TrafficSquare),
            6 => Ok(Self::SlipRoad),
            7 => Ok(Self::Other),
            _ => Err(Error::UnknownEnumValue {
                name: "FormOfWay",
                code,
            }),
        }
    }

    /// Display name, matching the interchange vocabulary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Motorway => "Motorway",
            Self::MultipleCarriageway => "MultipleCarriageway",
            Self::SingleCarriageway => "SingleCarriageway",
            Self::Roundabout => "Roundabout",
            Self::TrafficSquare => "TrafficSquare",
            Self::SlipRoad => "SlipRoad",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<u8> for FormOfWay {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for FormOfWay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One waypoint along a directional street-segment description.
///
/// Invariants
/// - `coordinate` is finite; bearings lie in `[0, 360)`;
///   `distance_to_next_ref` is non-negative centimeters.
/// - An absent bearing means "no directional constraint recorded" and is
///   never interchangeable with a bearing of `0`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReference {
    /// Identifier of the intersection at this waypoint.
    pub intersection_id: Identifier,
    /// Waypoint position.
    pub coordinate: Coordinate,
    /// Compass bearing of the street geometry leaving this waypoint.
    pub outbound_bearing: Option<f64>,
    /// Compass bearing of the street geometry arriving at this waypoint.
    pub inbound_bearing: Option<f64>,
    /// Distance to the next location reference, centimeters.
    pub distance_to_next_ref: Option<f64>,
}

/// Optional fields for [`LocationReference::build`].
#[derive(Clone, Default, Debug)]
pub struct LocationReferenceOptions {
    /// Pre-computed intersection identifier; derived from the coordinate
    /// when absent.
    pub intersection_id: Option<Identifier>,
    /// Outbound bearing, degrees in `[0, 360)`.
    pub outbound_bearing: Option<f64>,
    /// Inbound bearing, degrees in `[0, 360)`.
    pub inbound_bearing: Option<f64>,
    /// Distance to the next location reference, centimeters.
    pub distance_to_next_ref: Option<f64>,
}

impl LocationReference {
    /// Build a validated location reference, deriving the intersection
    /// identifier from the coordinate unless one is supplied.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRecord`] on non-finite coordinates, a bearing outside
    /// `[0, 360)`, or a negative distance.
    pub fn build(coordinate: Coordinate, options: LocationReferenceOptions) -> Result<Self> {
        let intersection_id = match options.intersection_id {
            Some(id) => id,
            None => ident::intersection_id(coordinate)?,
        };
        let lr = Self {
            intersection_id,
            coordinate,
            outbound_bearing: options.outbound_bearing,
            inbound_bearing: options.inbound_bearing,
            distance_to_next_ref: options.distance_to_next_ref,
        };
        // Building the sub-message once is the single source of validation.
        canonical::location_reference_message(&lr)?;
        Ok(lr)
    }
}

/// A node of the reference graph.
///
/// The identifier derives from the coordinate (and the source node id when
/// recorded). The inbound/outbound sets are graph wiring populated after
/// generation; they are not hash input.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    /// Content-derived identifier.
    pub id: Identifier,
    /// Node position.
    pub coordinate: Coordinate,
    /// Stable node id carried from the source graph, when one exists.
    pub node_id: Option<u64>,
    /// Identifiers of references arriving at this node.
    pub inbound_reference_ids: Vec<Identifier>,
    /// Identifiers of references leaving this node.
    pub outbound_reference_ids: Vec<Identifier>,
}

impl Intersection {
    /// Build an intersection record with empty graph wiring.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRecord`] on non-finite coordinates.
    pub fn build(coordinate: Coordinate, node_id: Option<u64>) -> Result<Self> {
        let id = match node_id {
            Some(node_id) => ident::intersection_id_with_node(coordinate, node_id)?,
            None => ident::intersection_id(coordinate)?,
        };
        Ok(Self {
            id,
            coordinate,
            node_id,
            inbound_reference_ids: Vec::new(),
            outbound_reference_ids: Vec::new(),
        })
    }
}

/// A street-segment polyline between two intersections.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Content-derived identifier of the polyline.
    pub id: Identifier,
    /// Ordered shape points, at least two.
    pub coordinates: Vec<Coordinate>,
    /// Functional road classification.
    pub road_class: RoadClass,
    /// Identifier of the intersection at the first point.
    pub from_intersection_id: Identifier,
    /// Identifier of the intersection at the last point.
    pub to_intersection_id: Identifier,
    /// Identifier of the reference describing travel in point order.
    pub forward_reference_id: Identifier,
    /// Identifier of the reference describing travel against point order.
    pub back_reference_id: Identifier,
}

impl Geometry {
    /// Flat `[lon0, lat0, lon1, lat1, …]` rendering of the polyline.
    #[must_use]
    pub fn lonlats(&self) -> Vec<f64> {
        coords_to_lonlats(&self.coordinates)
    }
}

/// Flatten a polyline into `[lon0, lat0, lon1, lat1, …]`.
#[must_use]
pub fn coords_to_lonlats(coordinates: &[Coordinate]) -> Vec<f64> {
    let mut lonlats = Vec::with_capacity(coordinates.len() * 2);
    for point in coordinates {
        lonlats.push(point.lon);
        lonlats.push(point.lat);
    }
    lonlats
}

/// Rebuild a polyline from its flat `[lon0, lat0, …]` rendering.
///
/// # Errors
///
/// [`Error::InvalidRecord`] when the slice holds an odd number of values.
pub fn lonlats_to_coords(lonlats: &[f64]) -> Result<Vec<Coordinate>> {
    if lonlats.len() % 2 != 0 {
        return Err(Error::InvalidRecord {
            field: "lonlats",
            reason: "must hold an even number of values",
        });
    }
    Ok(lonlats
        .chunks_exact(2)
        .map(|pair| Coordinate::new(pair[0], pair[1]))
        .collect())
}

/// An ordered location-reference chain describing one direction of travel
/// along a geometry.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// Content-derived identifier of the chain.
    pub id: Identifier,
    /// Identifier of the geometry this reference describes.
    pub geometry_id: Identifier,
    /// Physical form of way.
    pub form_of_way: FormOfWay,
    /// The chain, in travel order. Never empty.
    pub location_references: Vec<LocationReference>,
}

impl Reference {
    /// Build a reference record, deriving its identifier from the chain and
    /// form of way.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRecord`] on an empty chain or any invalid constituent
    /// location reference.
    pub fn build(
        geometry_id: Identifier,
        location_references: Vec<LocationReference>,
        form_of_way: FormOfWay,
    ) -> Result<Self> {
        let id = ident::reference_id(&location_references, form_of_way)?;
        Ok(Self {
            id,
            geometry_id,
            form_of_way,
            location_references,
        })
    }
}
