// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A raster `RenderSink`.  Drawn polygons are kept as a retained
//! display list and only turned into pixels when `render` is asked
//! for an image, so stacking order can be honored no matter in which
//! order the polygons arrived.

use image::{Pixel as ImagePixel, Rgb, RgbImage};
use itertools::Itertools;

use crate::geometry::Point;
use crate::palette::DrawAttributes;
use crate::planes::PlaneMapper;
use crate::sink::RenderSink;

#[derive(Debug, Clone)]
struct Shape {
    polygon: Vec<Point>,
    attributes: DrawAttributes,
}

/// Retains drawn polygons and rasterizes them as one-pixel outlines.
#[derive(Debug, Clone)]
pub struct Canvas {
    plane: PlaneMapper,
    background: [u8; 3],
    shapes: Vec<Shape>,
}

impl Canvas {
    /// An empty, black canvas over the given plane.
    pub fn new(plane: PlaneMapper) -> Canvas {
        Canvas {
            plane,
            background: [0, 0, 0],
            shapes: vec![],
        }
    }

    /// Replaces the background color.
    pub fn with_background(mut self, background: [u8; 3]) -> Canvas {
        self.background = background;
        self
    }

    /// Number of retained polygons.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Rasterizes the display list.  Polygons are painted from the
    /// lowest stacking order to the highest; equal orders paint in the
    /// order they were drawn.  A higher order paints on top, so a root
    /// star (largest remaining depth) covers the outlines of its children.
    pub fn render(&self) -> RgbImage {
        let [r, g, b] = self.background;
        let mut image = RgbImage::from_pixel(
            self.plane.integral_plane.0,
            self.plane.integral_plane.1,
            Rgb::from_channels(r, g, b, 0),
        );

        let mut ordered: Vec<&Shape> = self.shapes.iter().collect();
        ordered.sort_by_key(|shape| shape.attributes.order);
        for shape in ordered {
            let [r, g, b] = shape.attributes.color.rgb();
            let ink = Rgb::from_channels(r, g, b, 0);
            self.stroke(&mut image, &shape.polygon, ink);
        }
        image
    }

    fn stroke(&self, image: &mut RgbImage, polygon: &[Point], ink: Rgb<u8>) {
        for (a, b) in polygon.iter().chain(polygon.first()).tuple_windows() {
            if let Some(span) = self.clip_segment(a, b) {
                self.line(image, a, b, span, ink);
            }
        }
    }

    // Steps from `a` to `b` over the visible span `(t0, t1)`, one pixel
    // at a time along the segment's major axis on the pixel plane.
    fn line(&self, image: &mut RgbImage, a: &Point, b: &Point, span: (f64, f64), ink: Rgb<u8>) {
        let (t0, t1) = span;
        let start = self.plane.to_plane(a);
        let end = self.plane.to_plane(b);
        let reach = (end.0 - start.0).abs().max((end.1 - start.1).abs()) * (t1 - t0);
        let steps = reach.ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = t0 + (t1 - t0) * f64::from(i) / f64::from(steps);
            let at = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
            if let Some(pixel) = self.plane.point_to_pixel(&at) {
                image.put_pixel(pixel.0, pixel.1, ink);
            }
        }
    }

    /// Liang-Barsky clipping of the segment `a`-`b` against the image
    /// rectangle.  Returns the visible parameter span, so that stepping
    /// never walks far outside the image.
    fn clip_segment(&self, a: &Point, b: &Point) -> Option<(f64, f64)> {
        let start = self.plane.to_plane(a);
        let end = self.plane.to_plane(b);
        let width = f64::from(self.plane.integral_plane.0);
        let height = f64::from(self.plane.integral_plane.1);
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        let edges = [
            (-dx, start.0),
            (dx, width - start.0),
            (-dy, start.1),
            (dy, height - start.1),
        ];
        for &(p, q) in &edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
            }
        }
        if t0 > t1 {
            return None;
        }
        Some((t0, t1))
    }
}

impl RenderSink for Canvas {
    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw(&mut self, polygon: &[Point], attributes: DrawAttributes) {
        self.shapes.push(Shape {
            polygon: polygon.to_vec(),
            attributes,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    fn canvas() -> Canvas {
        Canvas::new(PlaneMapper::identity(20, 20).unwrap())
    }

    fn square(left: f64, top: f64, size: f64) -> Vec<Point> {
        vec![
            Point::new(left, top),
            Point::new(left + size, top),
            Point::new(left + size, top + size),
            Point::new(left, top + size),
        ]
    }

    fn at(image: &RgbImage, x: u32, y: u32) -> Vec<u8> {
        image.get_pixel(x, y).channels().to_vec()
    }

    #[test]
    fn outlines_are_stroked_not_filled() {
        let mut c = canvas();
        c.draw(&square(2.0, 2.0, 10.0), DrawAttributes::for_depth(1));
        let image = c.render();
        let gold = PaletteColor::Primary.rgb().to_vec();
        assert_eq!(at(&image, 2, 2), gold);
        assert_eq!(at(&image, 7, 2), gold);
        assert_eq!(at(&image, 12, 7), gold);
        assert_eq!(at(&image, 2, 12), gold);
        assert_eq!(at(&image, 7, 7), vec![0, 0, 0]);
    }

    #[test]
    fn higher_order_paints_on_top() {
        let mut c = canvas();
        // Deeper (higher order) first, shallower second: the deeper
        // shape must still win where they overlap.
        c.draw(&square(2.0, 2.0, 10.0), DrawAttributes::for_depth(2));
        c.draw(&square(2.0, 2.0, 10.0), DrawAttributes::for_depth(1));
        let image = c.render();
        assert_eq!(at(&image, 2, 2), PaletteColor::Secondary.rgb().to_vec());
    }

    #[test]
    fn equal_orders_paint_in_draw_order() {
        let mut c = canvas();
        c.draw(&square(2.0, 2.0, 10.0), DrawAttributes::for_depth(1));
        c.draw(
            &square(2.0, 2.0, 10.0),
            DrawAttributes {
                color: PaletteColor::Secondary,
                order: 1,
            },
        );
        let image = c.render();
        assert_eq!(at(&image, 2, 2), PaletteColor::Secondary.rgb().to_vec());
    }

    #[test]
    fn outlines_follow_a_scaled_plane() {
        let plane = PlaneMapper::new(10, 10, Point::new(0.0, 0.0), Point::new(20.0, 20.0)).unwrap();
        let mut c = Canvas::new(plane);
        c.draw(&square(4.0, 4.0, 10.0), DrawAttributes::for_depth(1));
        let image = c.render();
        let gold = PaletteColor::Primary.rgb().to_vec();
        assert_eq!(at(&image, 2, 2), gold);
        assert_eq!(at(&image, 7, 2), gold);
        assert_eq!(at(&image, 7, 7), gold);
        assert_eq!(at(&image, 4, 4), vec![0, 0, 0]);
        assert_eq!(at(&image, 9, 9), vec![0, 0, 0]);
    }

    #[test]
    fn shapes_off_the_image_are_clipped() {
        let mut c = canvas();
        c.draw(&square(-1000.0, -1000.0, 5000.0), DrawAttributes::for_depth(1));
        c.draw(&square(100.0, 100.0, 5.0), DrawAttributes::for_depth(1));
        let image = c.render();
        assert!(image.pixels().all(|p| p.channels() == [0, 0, 0]));
    }

    #[test]
    fn clear_empties_the_display_list() {
        let mut c = canvas().with_background([9, 9, 9]);
        c.draw(&square(2.0, 2.0, 10.0), DrawAttributes::for_depth(1));
        assert_eq!(c.len(), 1);
        c.clear();
        assert!(c.is_empty());
        assert!(c.render().pixels().all(|p| p.channels() == [9, 9, 9]));
    }
}
