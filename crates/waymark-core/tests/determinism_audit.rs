// SPDX-License-Identifier: Apache-2.0

//! Audit tests for identifier determinism and sensitivity.
//!
//! These tests verify:
//! 1. Whether identical entity content produces identical identifiers
//!    (Repeatability).
//! 2. Whether every canonicalized field participates in the identifier
//!    (Sensitivity).
//! 3. Whether float noise below the canonical precision is absorbed
//!    (Canonicalization).

#![allow(missing_docs)]

use std::collections::HashSet;

use waymark_core::{
    geometry_id, intersection_id, intersection_id_with_node, reference_id, Coordinate, FormOfWay,
    LocationReference, LocationReferenceOptions,
};

fn chain_head(outbound: Option<f64>, distance: Option<f64>) -> LocationReference {
    LocationReference::build(
        Coordinate::new(-74.00482177734375, 40.741641998291016),
        LocationReferenceOptions {
            outbound_bearing: outbound,
            distance_to_next_ref: distance,
            ..LocationReferenceOptions::default()
        },
    )
    .expect("valid location reference")
}

fn chain_tail(inbound: Option<f64>) -> LocationReference {
    LocationReference::build(
        Coordinate::new(-74.005126953125, 40.74085235595703),
        LocationReferenceOptions {
            inbound_bearing: inbound,
            ..LocationReferenceOptions::default()
        },
    )
    .expect("valid location reference")
}

fn example_chain() -> Vec<LocationReference> {
    vec![chain_head(Some(208.0), Some(9279.0)), chain_tail(Some(188.0))]
}

#[test]
fn audit_repeatability() {
    let chain = example_chain();
    let first = reference_id(&chain, FormOfWay::MultipleCarriageway).expect("reference id");
    for _ in 0..100 {
        let again = reference_id(&chain, FormOfWay::MultipleCarriageway).expect("reference id");
        assert_eq!(again, first, "same content MUST yield the same identifier");
    }
}

#[test]
fn end_to_end_reference_example() {
    let id = reference_id(&example_chain(), FormOfWay::MultipleCarriageway)
        .expect("reference id");
    assert_eq!(id.as_str(), "Dcy2w5714EhQbfWDrZZVnq");
}

#[test]
fn form_of_way_changes_the_identifier() {
    let multi = reference_id(&example_chain(), FormOfWay::MultipleCarriageway)
        .expect("reference id");
    let single = reference_id(&example_chain(), FormOfWay::SingleCarriageway)
        .expect("reference id");
    assert_eq!(single.as_str(), "B1L1AoJtbJy5q9LmKVgZyK");
    assert_ne!(multi, single);
}

#[test]
fn chain_order_changes_the_identifier() {
    let forward = reference_id(&example_chain(), FormOfWay::MultipleCarriageway)
        .expect("reference id");
    let mut reversed = example_chain();
    reversed.reverse();
    let backward =
        reference_id(&reversed, FormOfWay::MultipleCarriageway).expect("reference id");
    assert_eq!(backward.as_str(), "H8biBSVYZdhem2vLpBdjCS");
    assert_ne!(forward, backward);
}

#[test]
fn audit_field_sensitivity() {
    // Every canonicalized field must participate in the identifier: perturb
    // one field at a time and require all results pairwise distinct.
    let baseline = reference_id(&example_chain(), FormOfWay::MultipleCarriageway)
        .expect("reference id");

    let variants = [
        reference_id(
            &[chain_head(Some(208.0), Some(9279.0)), chain_tail(Some(189.0))],
            FormOfWay::MultipleCarriageway,
        )
        .expect("inbound bearing perturbed"),
        reference_id(
            &[chain_head(Some(209.0), Some(9279.0)), chain_tail(Some(188.0))],
            FormOfWay::MultipleCarriageway,
        )
        .expect("outbound bearing perturbed"),
        reference_id(
            &[chain_head(Some(208.0), Some(9479.0)), chain_tail(Some(188.0))],
            FormOfWay::MultipleCarriageway,
        )
        .expect("distance perturbed"),
        reference_id(&example_chain(), FormOfWay::Roundabout).expect("form of way perturbed"),
    ];

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(baseline.into_string());
    for id in variants {
        assert!(
            seen.insert(id.into_string()),
            "a perturbed field failed to change the identifier"
        );
    }
}

#[test]
fn audit_precision_canonicalization() {
    // 45.0, 45 (integral), and 44.99999996 all round to the same canonical
    // coordinate, so they MUST share an identifier.
    let a = intersection_id(Coordinate::new(110.0, 45.0)).expect("intersection id");
    let b = intersection_id(Coordinate::new(110.0, f64::from(45_u8))).expect("intersection id");
    let c = intersection_id(Coordinate::new(110.0, 44.99999996)).expect("intersection id");
    assert_eq!(a, b);
    assert_eq!(a, c);

    // One step of canonical precision MUST separate identifiers.
    let d = intersection_id(Coordinate::new(110.0, 45.000001)).expect("intersection id");
    assert_ne!(a, d);
}

#[test]
fn bearing_zero_differs_from_bearing_absent() {
    let zero = reference_id(
        &[chain_head(Some(0.0), Some(9279.0)), chain_tail(None)],
        FormOfWay::MultipleCarriageway,
    )
    .expect("zero bearing");
    let absent = reference_id(
        &[chain_head(None, Some(9279.0)), chain_tail(None)],
        FormOfWay::MultipleCarriageway,
    )
    .expect("absent bearing");
    assert_ne!(zero, absent, "0 is a valid bearing, not an absent one");
}

#[test]
fn node_id_participates_in_intersection_identity() {
    let point = Coordinate::new(-74.003388, 40.634538);
    let plain = intersection_id(point).expect("intersection id");
    let with_node = intersection_id_with_node(point, 42).expect("intersection id");
    assert_eq!(plain.as_str(), "31H4rsFQijyBvkTSfoRYKP");
    assert_eq!(with_node.as_str(), "TRkATie7iogxH1UYTxfukv");
    assert_ne!(plain, with_node);
}

#[test]
fn geometry_shape_points_participate_in_identity() {
    let two = [Coordinate::new(110.0, 45.0), Coordinate::new(120.0, 55.0)];
    let three = [
        Coordinate::new(110.0, 45.0),
        Coordinate::new(115.0, 50.0),
        Coordinate::new(120.0, 55.0),
    ];
    let id_two = geometry_id(&two).expect("geometry id");
    let id_three = geometry_id(&three).expect("geometry id");
    assert_ne!(id_two, id_three);
}
