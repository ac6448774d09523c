// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps a recursion depth to how its polygon is painted.

use num::Integer;

/// The two entries of the fractal's palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    /// Gold, used for odd depths.
    Primary,
    /// Forest green, used for even depths.
    Secondary,
}

impl PaletteColor {
    /// The color as 8-bit red, green, blue.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PaletteColor::Primary => [0xff, 0xd7, 0x00],
            PaletteColor::Secondary => [0x22, 0x8b, 0x22],
        }
    }
}

/// How a single polygon is painted: its stroke color and its place
/// in the stacking order.  A higher order paints above a lower one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawAttributes {
    /// Stroke color.
    pub color: PaletteColor,
    /// Stacking order.
    pub order: u32,
}

impl DrawAttributes {
    /// Attributes for a polygon drawn with `depth` levels of recursion
    /// still remaining.
    pub fn for_depth(depth: u32) -> DrawAttributes {
        let color = if depth.is_even() {
            PaletteColor::Secondary
        } else {
            PaletteColor::Primary
        };
        DrawAttributes {
            color,
            order: depth,
        }
    }
}
