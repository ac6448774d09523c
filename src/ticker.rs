// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frame delivery.  The engine never loops on its own; a host render
//! loop calls it once per frame for as long as it is subscribed.

use tracing::debug;

use crate::scheduler::{FractalScheduler, Tick};
use crate::sink::RenderSink;

/// A per-frame callback subscription, as offered by a host render
/// loop.  The scheduler holds one and toggles it as it starts and
/// stops.
pub trait FrameClock {
    /// Starts delivering frames.
    fn subscribe(&mut self);

    /// Stops delivering frames.  No frame is delivered after this
    /// returns.
    fn unsubscribe(&mut self);

    /// Whether frames are currently being delivered.
    fn is_subscribed(&self) -> bool;
}

/// A headless render loop: delivers frames back to back, as fast as
/// the scheduler consumes them.
#[derive(Debug, Default, Clone)]
pub struct Ticker {
    subscribed: bool,
    frames: u64,
    subscriptions: u64,
}

impl Ticker {
    /// A ticker with nothing subscribed.
    pub fn new() -> Self {
        Ticker::default()
    }

    /// Frames delivered over the ticker's lifetime.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// How many times a subscription has been taken out.
    pub fn subscriptions(&self) -> u64 {
        self.subscriptions
    }

    /// Runs the host loop: while the scheduler is subscribed, deliver
    /// one tick and then hand the outcome to `on_frame`.  The callback
    /// may reset the scheduler, in which case the loop ends without
    /// delivering another tick.  `limit` caps the number of ticks
    /// delivered by this call.  Returns the number delivered.
    pub fn drive<S, F>(
        scheduler: &mut FractalScheduler<S, Ticker>,
        limit: Option<u64>,
        mut on_frame: F,
    ) -> u64
    where
        S: RenderSink,
        F: FnMut(u64, Tick, &mut FractalScheduler<S, Ticker>),
    {
        let mut delivered = 0;
        while scheduler.clock().is_subscribed() {
            if limit.map_or(false, |limit| delivered >= limit) {
                debug!(delivered, "frame limit reached");
                break;
            }
            scheduler.clock_mut().frames += 1;
            delivered += 1;
            let tick = scheduler.tick();
            on_frame(delivered, tick, scheduler);
        }
        delivered
    }
}

impl FrameClock for Ticker {
    fn subscribe(&mut self) {
        if !self.subscribed {
            self.subscribed = true;
            self.subscriptions += 1;
            debug!("ticker subscribed");
        }
    }

    fn unsubscribe(&mut self) {
        if self.subscribed {
            self.subscribed = false;
            debug!(frames = self.frames, "ticker unsubscribed");
        }
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
