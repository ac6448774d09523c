// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters of a single expansion run.

use crate::error::{FractalError, Result};
use crate::expansion::expected_polygons;
use crate::geometry::{Point, MAX_SPIKES};

/// Which vertices of a drawn star receive child stars.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChildPlacement {
    /// Only the outer vertices, one child per spike.
    SpikeTips,
    /// Every vertex, inner and outer, two children per spike.
    EveryVertex,
}

impl ChildPlacement {
    /// The vertices of `polygon` that become child centers.  Spike tips
    /// are the even-indexed vertices.
    pub fn anchors(self, polygon: &[Point]) -> Vec<Point> {
        match self {
            ChildPlacement::SpikeTips => polygon.iter().step_by(2).cloned().collect(),
            ChildPlacement::EveryVertex => polygon.to_vec(),
        }
    }

    /// How many children a star with `spikes` spikes spawns.
    pub fn children_per_star(self, spikes: u32) -> u32 {
        match self {
            ChildPlacement::SpikeTips => spikes,
            ChildPlacement::EveryVertex => spikes.saturating_mul(2),
        }
    }
}

/// Everything a run needs to know.  Fixed once the run starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Number of outer points of every star.
    pub spike_count: u32,
    /// Recursion depth of the root star.
    pub max_depth: u32,
    /// Center of the root star.
    pub root_center: Point,
    /// Outer radius of the root star.
    pub root_radius: f64,
    /// Inner vertex radius as a fraction of the outer radius.
    pub inner_radius_ratio: f64,
    /// Radius multiplier applied to each generation of children.
    pub shrink_factor: f64,
    /// Which vertices spawn children.
    pub placement: ChildPlacement,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            spike_count: 5,
            max_depth: 3,
            root_center: Point::new(400.0, 380.0),
            root_radius: 220.0,
            inner_radius_ratio: 0.5,
            shrink_factor: 0.35,
            placement: ChildPlacement::SpikeTips,
        }
    }
}

impl Configuration {
    /// Sets the spike count.
    pub fn with_spike_count(mut self, spike_count: u32) -> Self {
        self.spike_count = spike_count;
        self
    }

    /// Sets the recursion depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the root star's center.
    pub fn with_root_center(mut self, root_center: Point) -> Self {
        self.root_center = root_center;
        self
    }

    /// Sets the root star's outer radius.
    pub fn with_root_radius(mut self, root_radius: f64) -> Self {
        self.root_radius = root_radius;
        self
    }

    /// Sets the inner radius ratio.
    pub fn with_inner_radius_ratio(mut self, ratio: f64) -> Self {
        self.inner_radius_ratio = ratio;
        self
    }

    /// Sets the per-generation shrink factor.
    pub fn with_shrink_factor(mut self, shrink_factor: f64) -> Self {
        self.shrink_factor = shrink_factor;
        self
    }

    /// Sets where children are placed.
    pub fn with_placement(mut self, placement: ChildPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Checks every field, reporting the first one out of range.
    pub fn validate(&self) -> Result<()> {
        if self.spike_count < 3 || self.spike_count > MAX_SPIKES {
            return Err(FractalError::argument(format!(
                "spike count must be between 3 and {}, got {}",
                MAX_SPIKES, self.spike_count
            )));
        }
        if self.max_depth < 1 {
            return Err(FractalError::argument("depth must be at least 1"));
        }
        if !self.root_center.is_finite() {
            return Err(FractalError::argument("root center must be finite"));
        }
        if !(self.root_radius > 0.0) || !self.root_radius.is_finite() {
            return Err(FractalError::argument(format!(
                "root radius must be positive, got {}",
                self.root_radius
            )));
        }
        if !in_unit_interval(self.inner_radius_ratio) {
            return Err(FractalError::argument(format!(
                "inner radius ratio must lie in (0, 1), got {}",
                self.inner_radius_ratio
            )));
        }
        if !in_unit_interval(self.shrink_factor) {
            return Err(FractalError::argument(format!(
                "shrink factor must lie in (0, 1), got {}",
                self.shrink_factor
            )));
        }
        Ok(())
    }

    /// How many stars a complete run with this configuration draws, or
    /// `None` if that number does not fit in a `u64`.
    pub fn expected_polygons(&self) -> Option<u64> {
        expected_polygons(
            self.placement.children_per_star(self.spike_count),
            self.max_depth,
        )
    }
}

fn in_unit_interval(v: f64) -> bool {
    v > 0.0 && v < 1.0
}
