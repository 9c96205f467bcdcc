// SPDX-License-Identifier: Apache-2.0
//! Haversine polyline operations over coordinate slices.
//!
//! All transcendental math routes through `libm` so results — and every
//! identifier derived from them — are bit-identical across platforms.
//! Distances are meters on a sphere of radius [`EARTH_RADIUS_METERS`].

use waymark_core::{Coordinate, Error, Result};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

fn require_line(line: &[Coordinate]) -> Result<()> {
    if line.len() < 2 {
        return Err(Error::InvalidRecord {
            field: "coordinates",
            reason: "a polyline needs at least two points",
        });
    }
    for point in line {
        if !point.lon.is_finite() || !point.lat.is_finite() {
            return Err(Error::InvalidRecord {
                field: "coordinates",
                reason: "must be finite numbers",
            });
        }
    }
    Ok(())
}

/// Great-circle distance between two points, meters.
#[must_use]
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let half_dlat = libm::sin((to.lat - from.lat).to_radians() / 2.0);
    let half_dlon = libm::sin((to.lon - from.lon).to_radians() / 2.0);
    let a = half_dlat * half_dlat + libm::cos(phi1) * libm::cos(phi2) * half_dlon * half_dlon;
    2.0 * EARTH_RADIUS_METERS * libm::asin(libm::sqrt(a))
}

/// Total haversine length of a polyline, meters.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on fewer than two points or non-finite
/// coordinates.
pub fn length_meters(line: &[Coordinate]) -> Result<f64> {
    require_line(line)?;
    Ok(line
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum())
}

/// Initial great-circle bearing from `from` to `to`, degrees in
/// `(-180, 180]`.
#[must_use]
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();
    let y = libm::sin(delta_lambda) * libm::cos(phi2);
    let x = libm::cos(phi1) * libm::sin(phi2)
        - libm::sin(phi1) * libm::cos(phi2) * libm::cos(delta_lambda);
    libm::atan2(y, x).to_degrees()
}

/// Normalize a bearing to `[0, 360)`.
#[must_use]
pub fn bearing_to_azimuth(bearing: f64) -> f64 {
    let azimuth = bearing % 360.0;
    if azimuth < 0.0 {
        azimuth + 360.0
    } else {
        azimuth
    }
}

/// Point at `distance_meters` along the line.
///
/// Distances before the start clamp to the first point; distances past the
/// end clamp to the last.
///
/// # Errors
///
/// [`Error::InvalidRecord`] on a degenerate line or a non-finite distance.
pub fn point_along(line: &[Coordinate], distance_meters: f64) -> Result<Coordinate> {
    require_line(line)?;
    if !distance_meters.is_finite() {
        return Err(Error::InvalidRecord {
            field: "distance_meters",
            reason: "must be a finite number",
        });
    }
    let mut remaining = distance_meters.max(0.0);
    for pair in line.windows(2) {
        let leg = haversine_distance(pair[0], pair[1]);
        if remaining <= leg && leg > 0.0 {
            if remaining == 0.0 {
                return Ok(pair[0]);
            }
            return Ok(destination(pair[0], remaining, bearing(pair[0], pair[1])));
        }
        remaining -= leg;
    }
    Ok(line[line.len() - 1])
}

/// Destination point from `origin` after `distance_meters` on the initial
/// `bearing_degrees`.
fn destination(origin: Coordinate, distance_meters: f64, bearing_degrees: f64) -> Coordinate {
    let angular = distance_meters / EARTH_RADIUS_METERS;
    let theta = bearing_degrees.to_radians();
    let phi1 = origin.lat.to_radians();
    let lambda1 = origin.lon.to_radians();
    let phi2 = libm::asin(
        libm::sin(phi1) * libm::cos(angular)
            + libm::cos(phi1) * libm::sin(angular) * libm::cos(theta),
    );
    let lambda2 = lambda1
        + libm::atan2(
            libm::sin(theta) * libm::sin(angular) * libm::cos(phi1),
            libm::cos(angular) - libm::sin(phi1) * libm::sin(phi2),
        );
    Coordinate::new(lambda2.to_degrees(), phi2.to_degrees())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. distances ─────────────────────────────────────────────────────

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111_195.080_233_532_92).abs() < 1e-4, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_itself() {
        let a = Coordinate::new(-74.004822, 40.741642);
        let b = Coordinate::new(-74.005127, 40.740852);
        assert!((haversine_distance(a, b) - haversine_distance(b, a)).abs() < 1e-9);
        assert!(haversine_distance(a, a).abs() < 1e-9);
    }

    #[test]
    fn length_sums_all_legs() {
        let line = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 2.0),
        ];
        let total = length_meters(&line).unwrap();
        assert!((total - 2.0 * 111_195.080_233_532_92).abs() < 1e-3, "got {total}");
    }

    #[test]
    fn degenerate_lines_are_rejected() {
        assert!(length_meters(&[Coordinate::new(0.0, 0.0)]).is_err());
        assert!(length_meters(&[
            Coordinate::new(0.0, f64::NAN),
            Coordinate::new(0.0, 1.0)
        ])
        .is_err());
    }

    // ── 2. bearings ──────────────────────────────────────────────────────

    #[test]
    fn cardinal_bearings() {
        let origin = Coordinate::new(0.0, 0.0);
        let east = bearing(origin, Coordinate::new(1.0, 0.0));
        let north = bearing(origin, Coordinate::new(0.0, 1.0));
        assert!((east - 90.0).abs() < 1e-9, "got {east}");
        assert!(north.abs() < 1e-9, "got {north}");
    }

    #[test]
    fn azimuth_normalization() {
        assert!((bearing_to_azimuth(-90.0) - 270.0).abs() < 1e-12);
        assert!((bearing_to_azimuth(450.0) - 90.0).abs() < 1e-12);
        assert!(bearing_to_azimuth(360.0).abs() < 1e-12);
        assert!(bearing_to_azimuth(0.0).abs() < 1e-12);
    }

    // ── 3. point-along ───────────────────────────────────────────────────

    #[test]
    fn zero_distance_is_the_first_point() {
        let line = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        let p = point_along(&line, 0.0).unwrap();
        assert_eq!(p, line[0]);
    }

    #[test]
    fn past_the_end_clamps_to_the_last_point() {
        let line = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        let p = point_along(&line, 1.0e9).unwrap();
        assert_eq!(p, line[1]);
    }

    #[test]
    fn halfway_up_a_meridian() {
        let line = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        let halfway = length_meters(&line).unwrap() / 2.0;
        let p = point_along(&line, halfway).unwrap();
        assert!(p.lon.abs() < 1e-9, "got lon {}", p.lon);
        assert!((p.lat - 0.5).abs() < 1e-6, "got lat {}", p.lat);
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        let line = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
        assert!(point_along(&line, f64::NAN).is_err());
    }
}
