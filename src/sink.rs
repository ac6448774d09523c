// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The drawing surface the scheduler paints onto.

use crate::geometry::Point;
use crate::palette::DrawAttributes;

/// Accepts polygons from the scheduler and owns whatever container
/// accumulates them.  Polygons are stroked outlines, one unit wide,
/// never filled.
pub trait RenderSink {
    /// Removes everything drawn so far.
    fn clear(&mut self);

    /// Draws one closed polygon.
    fn draw(&mut self, polygon: &[Point], attributes: DrawAttributes);
}

/// A sink that remembers every draw call and how many times it was
/// cleared.  Useful for dry runs and for inspecting a run's output.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Polygons drawn since the last clear, in draw order.
    pub drawn: Vec<(Vec<Point>, DrawAttributes)>,
    /// Number of `clear` calls received.
    pub clears: usize,
}

impl RecordingSink {
    /// An empty recorder.
    pub fn new() -> Self {
        RecordingSink::default()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) {
        self.drawn.clear();
        self.clears += 1;
    }

    fn draw(&mut self, polygon: &[Point], attributes: DrawAttributes) {
        self.drawn.push((polygon.to_vec(), attributes));
    }
}
