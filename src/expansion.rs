// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The recursion rule: every vertex of a drawn star becomes the
//! center of a smaller star one level shallower.

use crate::config::Configuration;
use crate::geometry::Point;

/// One star that still has to be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpansionTask {
    /// Center of the star.
    pub center: Point,
    /// Distance from the center to each spike tip.
    pub outer_radius: f64,
    /// Levels of recursion left, counting this star.
    pub remaining_depth: u32,
}

impl ExpansionTask {
    /// The first star of a run.
    pub fn root(config: &Configuration) -> ExpansionTask {
        ExpansionTask {
            center: config.root_center,
            outer_radius: config.root_radius,
            remaining_depth: config.max_depth,
        }
    }
}

/// Derives the children of a drawn star, one per vertex and in vertex
/// order.  Stars with one level or less remaining have no children.
pub fn expand(
    vertices: &[Point],
    parent_radius: f64,
    remaining_depth: u32,
    shrink_factor: f64,
) -> Vec<ExpansionTask> {
    if remaining_depth <= 1 {
        return vec![];
    }
    let outer_radius = parent_radius * shrink_factor;
    vertices
        .iter()
        .map(|&center| ExpansionTask {
            center,
            outer_radius,
            remaining_depth: remaining_depth - 1,
        })
        .collect()
}

/// Total number of stars a run draws: `1 + n + n^2 + ... + n^(d-1)`
/// when every star spawns `n` children and the run starts at depth
/// `d`.  Returns `None` if the sum overflows.
pub fn expected_polygons(fanout: u32, max_depth: u32) -> Option<u64> {
    let fanout = u64::from(fanout);
    let mut level: u64 = 1;
    let mut total: u64 = 0;
    for i in 0..max_depth {
        if i > 0 {
            level = level.checked_mul(fanout)?;
        }
        total = total.checked_add(level)?;
    }
    Some(total)
}
