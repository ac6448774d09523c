// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Star polygon geometry.
//!
//! A star polygon alternates between an outer and an inner radius as
//! it walks around its center.  The first vertex always points
//! straight up (screen coordinates, so "up" is negative y), and each
//! following vertex advances by half the angle between two spikes.

use num::Complex;
use std::f64::consts::PI;

use crate::error::{FractalError, Result};

/// A location in world coordinates.  Y grows downward, as it does on
/// a screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Builds a point.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)).sqrt()
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The largest spike count whose `2 * spikes` vertices still fit a
/// `u32` index.
pub const MAX_SPIKES: u32 = std::u32::MAX / 2;

/// An ordered, implicitly closed list of vertices.
pub type Polygon = Vec<Point>;

/// Produces the `2 * spikes` vertices of a star centered on `center`.
/// Even-indexed vertices sit on `outer_radius`, odd-indexed ones on
/// `outer_radius * inner_ratio`.
pub fn star_polygon(
    center: Point,
    outer_radius: f64,
    spikes: u32,
    inner_ratio: f64,
) -> Result<Polygon> {
    if spikes < 3 || spikes > MAX_SPIKES {
        return Err(FractalError::argument(format!(
            "a star needs between 3 and {} spikes, got {}",
            MAX_SPIKES, spikes
        )));
    }
    if !(outer_radius > 0.0) || !outer_radius.is_finite() {
        return Err(FractalError::argument(format!(
            "outer radius must be positive, got {}",
            outer_radius
        )));
    }
    if !(inner_ratio > 0.0 && inner_ratio < 1.0) {
        return Err(FractalError::argument(format!(
            "inner radius ratio must lie in (0, 1), got {}",
            inner_ratio
        )));
    }
    Ok(trace_star(center, outer_radius, spikes, inner_ratio))
}

/// The unchecked half of `star_polygon`, for callers that validated
/// their parameters up front.
pub(crate) fn trace_star(center: Point, outer_radius: f64, spikes: u32, inner_ratio: f64) -> Polygon {
    let step = PI / f64::from(spikes);
    let inner_radius = outer_radius * inner_ratio;
    let origin = Complex::new(center.x, center.y);
    (0..spikes * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = f64::from(i) * step - PI / 2.0;
            let z = origin + Complex::from_polar(&radius, &angle);
            Point::new(z.re, z.im)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn vertex_count_is_twice_the_spikes() {
        for spikes in 3..20 {
            let star = star_polygon(Point::new(0.0, 0.0), 10.0, spikes, 0.5).unwrap();
            assert_eq!(star.len(), (spikes * 2) as usize);
        }
    }

    #[test]
    fn radii_alternate_between_outer_and_inner() {
        let center = Point::new(12.5, -3.0);
        let star = star_polygon(center, 100.0, 7, 0.3).unwrap();
        for (i, p) in star.iter().enumerate() {
            let expected = if i % 2 == 0 { 100.0 } else { 30.0 };
            assert!((center.distance(p) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn first_vertex_points_up() {
        let star = star_polygon(Point::new(400.0, 380.0), 220.0, 5, 0.5).unwrap();
        assert!((star[0].x - 400.0).abs() < EPSILON);
        assert!((star[0].y - 160.0).abs() < EPSILON);
    }

    #[test]
    fn vertices_advance_clockwise_on_screen() {
        // With y pointing down, the second vertex of an upright star
        // lies to the right of the first.
        let star = star_polygon(Point::new(0.0, 0.0), 1.0, 4, 0.5).unwrap();
        assert!(star[1].x > star[0].x);
        assert!(star[2].x > star[1].x);
        assert!((star[2].y).abs() < EPSILON);
    }

    #[test]
    fn rejects_too_few_spikes() {
        let e = star_polygon(Point::new(0.0, 0.0), 1.0, 2, 0.5).unwrap_err();
        match e {
            FractalError::InvalidArgument(_) => {}
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn rejects_spike_counts_whose_vertices_overflow() {
        let origin = Point::new(0.0, 0.0);
        match star_polygon(origin, 1.0, 1 << 31, 0.5) {
            Err(FractalError::InvalidArgument(_)) => {}
            other => panic!("unexpected result {:?}", other.map(|p| p.len())),
        }
        assert!(star_polygon(origin, 1.0, std::u32::MAX, 0.5).is_err());
    }

    #[test]
    fn rejects_bad_radius_and_ratio() {
        let c = Point::new(0.0, 0.0);
        assert!(star_polygon(c, 0.0, 5, 0.5).is_err());
        assert!(star_polygon(c, -4.0, 5, 0.5).is_err());
        assert!(star_polygon(c, std::f64::NAN, 5, 0.5).is_err());
        assert!(star_polygon(c, 1.0, 5, 0.0).is_err());
        assert!(star_polygon(c, 1.0, 5, 1.0).is_err());
        assert!(star_polygon(c, 1.0, 5, std::f64::NAN).is_err());
    }
}
