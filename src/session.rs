// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The control surface around the engine: two numeric inputs (spike
//! count and depth) and a single button that reads DRAW while idle and
//! RESET while a fractal is growing.

use tracing::debug;

use crate::config::Configuration;
use crate::error::{FractalError, Result};
use crate::scheduler::{FractalScheduler, State};
use crate::sink::RenderSink;
use crate::ticker::FrameClock;

/// What pressing the button did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Press {
    /// A new run started.
    Started,
    /// The running fractal was erased and the inputs cleared.
    Reset,
    /// Idle with an input missing; nothing happened.
    Ignored,
}

/// A scheduler plus the inputs and button that drive it.
#[derive(Debug)]
pub struct Session<S, C> {
    scheduler: FractalScheduler<S, C>,
    base: Configuration,
    spike_count: Option<u32>,
    depth: Option<u32>,
}

impl<S: RenderSink, C: FrameClock> Session<S, C> {
    /// Wraps `scheduler`.  Runs use `base` for everything except the
    /// spike count and depth, which come from the inputs.
    pub fn new(scheduler: FractalScheduler<S, C>, base: Configuration) -> Self {
        Session {
            scheduler,
            base,
            spike_count: None,
            depth: None,
        }
    }

    /// Sets the spike count from typed text.  See `parse_input`.
    pub fn enter_spike_count(&mut self, text: &str) -> Result<()> {
        self.spike_count = parse_input(text, self.spike_count, "spike count")?;
        Ok(())
    }

    /// Sets the depth from typed text.  See `parse_input`.
    pub fn enter_depth(&mut self, text: &str) -> Result<()> {
        self.depth = parse_input(text, self.depth, "depth")?;
        Ok(())
    }

    /// The current inputs.
    pub fn inputs(&self) -> (Option<u32>, Option<u32>) {
        (self.spike_count, self.depth)
    }

    /// Presses the button.
    pub fn press(&mut self) -> Result<Press> {
        if self.scheduler.state() == State::Running {
            self.scheduler.reset();
            self.spike_count = None;
            self.depth = None;
            return Ok(Press::Reset);
        }
        match (self.spike_count, self.depth) {
            (Some(spikes), Some(depth)) => {
                let config = self.base.with_spike_count(spikes).with_max_depth(depth);
                self.scheduler.start(config)?;
                Ok(Press::Started)
            }
            _ => {
                debug!("button pressed with an input missing");
                Ok(Press::Ignored)
            }
        }
    }

    /// The button's caption.
    pub fn label(&self) -> &'static str {
        match self.scheduler.state() {
            State::Running => "RESET",
            State::Idle => "DRAW",
        }
    }

    /// The wrapped scheduler.
    pub fn scheduler(&self) -> &FractalScheduler<S, C> {
        &self.scheduler
    }

    /// The wrapped scheduler, for the host loop.
    pub fn scheduler_mut(&mut self) -> &mut FractalScheduler<S, C> {
        &mut self.scheduler
    }
}

/// Reads a numeric input.  Blank text keeps `previous`, zero means
/// unset, anything that is not a non-negative integer is rejected.
pub fn parse_input(text: &str, previous: Option<u32>, name: &str) -> Result<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(previous);
    }
    match text.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(FractalError::argument(format!(
            "{} must be a whole number, got {:?}",
            name, text
        ))),
    }
}
