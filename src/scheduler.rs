// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame-driven expansion engine.
//!
//! The star-of-stars is a tree, but it is never walked recursively.
//! Instead the scheduler keeps a FIFO queue of stars still to be
//! drawn.  Each frame pops exactly one star, draws it, and appends its
//! children to the back of the queue, so the fractal grows one polygon
//! at a time and breadth first: every star of one generation is on
//! screen before the first star of the next appears.

use std::collections::VecDeque;
use tracing::{info, trace};

use crate::config::Configuration;
use crate::error::{FractalError, Result};
use crate::expansion::{expand, ExpansionTask};
use crate::geometry::trace_star;
use crate::palette::DrawAttributes;
use crate::sink::RenderSink;
use crate::ticker::FrameClock;

/// Whether a run is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// No run in progress; ticks have no effect.
    Idle,
    /// A run is in progress and subscribed to frames.
    Running,
}

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One star was drawn.
    Drew {
        /// Remaining depth of the star just drawn.
        depth: u32,
        /// Stars still queued after this one.
        pending: usize,
    },
    /// The queue was empty: the run is over and the scheduler is idle
    /// again.
    Complete {
        /// Stars drawn over the whole run.
        drawn: u64,
    },
    /// The tick arrived while idle, after a reset or completion, and
    /// was ignored.
    Idle,
}

/// Drives one fractal at a time onto a `RenderSink`, one star per
/// frame of a `FrameClock`.
#[derive(Debug)]
pub struct FractalScheduler<S, C> {
    sink: S,
    clock: C,
    config: Configuration,
    queue: VecDeque<ExpansionTask>,
    state: State,
    drawn: u64,
}

impl<S: RenderSink, C: FrameClock> FractalScheduler<S, C> {
    /// An idle scheduler painting onto `sink`, paced by `clock`.
    pub fn new(sink: S, clock: C) -> Self {
        FractalScheduler {
            sink,
            clock,
            config: Configuration::default(),
            queue: VecDeque::new(),
            state: State::Idle,
            drawn: 0,
        }
    }

    /// Begins a new run.  Fails without touching anything if a run is
    /// already in progress or if `config` is out of range.  Otherwise
    /// clears the sink, queues the root star, and subscribes to frames.
    pub fn start(&mut self, config: Configuration) -> Result<()> {
        if self.state == State::Running {
            return Err(FractalError::InvalidState(
                "a fractal is already being drawn; reset it first".to_string(),
            ));
        }
        config.validate()?;

        self.sink.clear();
        self.queue.clear();
        self.queue.push_back(ExpansionTask::root(&config));
        self.config = config;
        self.drawn = 0;
        self.state = State::Running;
        self.clock.subscribe();
        info!(
            spikes = config.spike_count,
            depth = config.max_depth,
            "expansion started"
        );
        Ok(())
    }

    /// Performs one frame of work: draws exactly one star, or, if none
    /// is left, unsubscribes and reports completion.  Ticks that arrive
    /// while idle do nothing.
    pub fn tick(&mut self) -> Tick {
        if self.state != State::Running {
            trace!("late tick ignored");
            return Tick::Idle;
        }

        let task = match self.queue.pop_front() {
            Some(task) => task,
            None => {
                self.clock.unsubscribe();
                self.state = State::Idle;
                info!(drawn = self.drawn, "expansion complete");
                return Tick::Complete { drawn: self.drawn };
            }
        };

        let polygon = trace_star(
            task.center,
            task.outer_radius,
            self.config.spike_count,
            self.config.inner_radius_ratio,
        );
        self.sink
            .draw(&polygon, DrawAttributes::for_depth(task.remaining_depth));
        self.drawn += 1;

        let anchors = self.config.placement.anchors(&polygon);
        self.queue.extend(expand(
            &anchors,
            task.outer_radius,
            task.remaining_depth,
            self.config.shrink_factor,
        ));
        trace!(
            depth = task.remaining_depth,
            pending = self.queue.len(),
            "star drawn"
        );
        Tick::Drew {
            depth: task.remaining_depth,
            pending: self.queue.len(),
        }
    }

    /// Abandons any run, erases the sink, and returns to idle.  Safe to
    /// call in any state, any number of times.
    pub fn reset(&mut self) {
        let was_running = self.state == State::Running;
        self.queue.clear();
        self.sink.clear();
        if self.clock.is_subscribed() {
            self.clock.unsubscribe();
        }
        self.state = State::Idle;
        self.drawn = 0;
        if was_running {
            info!("expansion reset");
        }
    }

    /// Stops a run part way through.  Same as `reset`; afterwards no
    /// frame is subscribed and nothing is queued, so `start` may be
    /// called straight away.
    pub fn cancel(&mut self) {
        self.reset()
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Stars queued but not yet drawn.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Stars drawn in the current or most recent run.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Configuration of the current or most recent run.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The sink being drawn on.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The frame clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub(crate) fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
