#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Star-of-stars fractal generator
//!
//! The fractal starts with a single star polygon.  Every vertex of a
//! drawn star becomes the center of a smaller star, and so on until a
//! fixed depth is exhausted.  Because each generation is smaller than
//! the last by a constant shrink factor, the picture converges to a
//! self-similar cluster of stars around the root.
//!
//! Rather than recursing, the engine keeps a queue of stars still to
//! be drawn and is driven by a host render loop one frame at a time,
//! drawing exactly one star per frame.  The fractal visibly grows,
//! generation by generation, and a deep expansion never stalls the
//! loop that drives it.  A run can be reset at any point and restarted
//! immediately.
//!
//! The pieces, leaves first: `geometry` computes star vertices,
//! `palette` picks color and stacking order from depth, `expansion`
//! derives child stars, and `scheduler` ties them together on top of a
//! `RenderSink` and a `FrameClock`.  `canvas`, `planes`, and `frames`
//! turn a run into images; `session` is the DRAW/RESET control surface.

pub mod canvas;
pub mod config;
pub mod error;
pub mod expansion;
pub mod frames;
pub mod geometry;
pub mod palette;
pub mod planes;
pub mod scheduler;
pub mod session;
pub mod sink;
pub mod ticker;

pub use canvas::Canvas;
pub use config::{ChildPlacement, Configuration};
pub use error::{FractalError, Result};
pub use expansion::{expand, expected_polygons, ExpansionTask};
pub use geometry::{star_polygon, Point, Polygon};
pub use palette::{DrawAttributes, PaletteColor};
pub use planes::PlaneMapper;
pub use scheduler::{FractalScheduler, State, Tick};
pub use session::{Press, Session};
pub use sink::{RecordingSink, RenderSink};
pub use ticker::{FrameClock, Ticker};
