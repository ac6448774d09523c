// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which relates a rectangle of world
//! coordinates (where the stars live) to the integral pixel plane of
//! an image with its origin at 0,0.  Both planes have y growing
//! downward, so the mapping is a scale and a shift.

use crate::error::{FractalError, Result};
use crate::geometry::Point;

/// Width and height of an integral plane starting at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// The left-top and right-bottom corners of the world rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldPlane(pub Point, pub Point);

/// A column, row pair on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Maps points of the world plane onto the pixel plane.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// Size of the pixel plane.
    pub integral_plane: IntegralPlane,
    /// The world rectangle mapped onto it.
    pub world_plane: WorldPlane,
    // Pixels per world unit, horizontally and vertically.
    grid_factors: (f64, f64),
}

impl PlaneMapper {
    /// Takes the size of the image and two corners of the world
    /// rectangle it should show.
    pub fn new(width: u32, height: u32, lefttop: Point, rightbottom: Point) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(FractalError::argument("image must be at least one pixel in each direction"));
        }
        if !lefttop.is_finite() || !rightbottom.is_finite() {
            return Err(FractalError::argument("world corners must be finite"));
        }
        if rightbottom.x <= lefttop.x {
            return Err(FractalError::argument(
                "the left top corner is not to the left of the right bottom corner",
            ));
        }
        if rightbottom.y <= lefttop.y {
            return Err(FractalError::argument(
                "the left top corner is not above the right bottom corner",
            ));
        }

        let grid_factors = (
            f64::from(width) / (rightbottom.x - lefttop.x),
            f64::from(height) / (rightbottom.y - lefttop.y),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            world_plane: WorldPlane(lefttop, rightbottom),
            grid_factors,
        })
    }

    /// A mapper where one world unit is one pixel, with the world
    /// origin in the image's top left corner.
    pub fn identity(width: u32, height: u32) -> Result<PlaneMapper> {
        PlaneMapper::new(
            width,
            height,
            Point::new(0.0, 0.0),
            Point::new(f64::from(width), f64::from(height)),
        )
    }

    /// Maps a world point to continuous pixel coordinates, which may
    /// lie outside the image.
    pub fn to_plane(&self, point: &Point) -> (f64, f64) {
        (
            (point.x - self.world_plane.0.x) * self.grid_factors.0,
            (point.y - self.world_plane.0.y) * self.grid_factors.1,
        )
    }

    /// The pixel containing a world point, or `None` if the point falls
    /// outside the image.
    pub fn point_to_pixel(&self, point: &Point) -> Option<Pixel> {
        let (left, top) = self.to_plane(point);
        self.clip(left.floor(), top.floor())
    }

    // Continuous pixel coordinates to a pixel, `None` when off the image.
    fn clip(&self, left: f64, top: f64) -> Option<Pixel> {
        if left < 0.0
            || top < 0.0
            || left >= f64::from(self.integral_plane.0)
            || top >= f64::from(self.integral_plane.1)
        {
            return None;
        }
        Some(Pixel(left as u32, top as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Point::new(1.0, -1.0), Point::new(-1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Point::new(-1.0, 1.0), Point::new(1.0, -1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(0, 4, Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn point_to_pixel_on_identity_plane() {
        let pm = PlaneMapper::identity(800, 800).unwrap();
        assert_eq!(pm.point_to_pixel(&Point::new(0.0, 0.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Point::new(400.4, 380.9)), Some(Pixel(400, 380)));
        assert_eq!(pm.point_to_pixel(&Point::new(799.9, 799.9)), Some(Pixel(799, 799)));
    }

    #[test]
    fn point_to_pixel_on_scaled_plane() {
        let pm = PlaneMapper::new(400, 200, Point::new(0.0, 0.0), Point::new(800.0, 800.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Point::new(400.0, 400.0)), Some(Pixel(200, 100)));
        assert_eq!(pm.point_to_pixel(&Point::new(-200.0, -200.0)), None);
        assert_eq!(pm.point_to_pixel(&Point::new(800.0, 10.0)), None);
    }

    #[test]
    fn point_to_pixel_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Point::new(-2.0, -2.0), Point::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_pixel(&Point::new(0.0, 0.0)), Some(Pixel(2, 2)));
        assert_eq!(pm.point_to_pixel(&Point::new(-2.0, -2.0)), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(&Point::new(2.0, 2.0)), None);
    }
}
