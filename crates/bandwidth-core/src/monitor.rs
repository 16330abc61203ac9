//! The update/draw loop and the seams it talks through.
//!
//! One tick is strictly sequential: check-close, simulate, layout, submit,
//! wait. The close check at the top of the loop is the only cancellation
//! point, so a close request lands at most one tick period late.

use std::thread;
use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;

use crate::TICK_PERIOD;
use crate::error::Result;
use crate::frame::Frame;
use crate::layout::{CanvasGeometry, compute_layout};
use crate::simulator::Simulator;

/// The hosting platform as seen by the loop.
pub trait FrameSink {
    /// Drain pending platform events; `false` once a close was requested.
    fn should_continue(&mut self) -> bool;

    /// Paint and present one frame.
    fn submit_frame(&mut self, frame: &Frame) -> Result<()>;
}

/// Pause between ticks.
pub trait Pacer {
    fn wait(&mut self, period: Duration);
}

/// Blocks the calling thread for the whole period.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, period: Duration) {
        thread::sleep(period);
    }
}

/// Simulator plus fixed canvas, driven tick by tick.
pub struct Monitor<R = StdRng> {
    simulator: Simulator<R>,
    geometry: CanvasGeometry,
    period: Duration,
}

impl<R: Rng> Monitor<R> {
    pub fn new(simulator: Simulator<R>, geometry: CanvasGeometry) -> Self {
        Self {
            simulator,
            geometry,
            period: TICK_PERIOD,
        }
    }

    /// Override the pause between ticks.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn simulator(&self) -> &Simulator<R> {
        &self.simulator
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Simulate once and build the resulting frame.
    pub fn step(&mut self) -> Frame {
        self.simulator.tick();
        let rates = self.simulator.rates();
        let layout = compute_layout(&rates, &self.geometry);
        Frame::compose(self.simulator.ticks(), self.simulator.channels(), &layout)
    }

    /// Run until the sink reports a close. Returns the number of ticks run.
    pub fn run<S, P>(&mut self, sink: &mut S, pacer: &mut P) -> Result<u64>
    where
        S: FrameSink + ?Sized,
        P: Pacer + ?Sized,
    {
        let start = self.simulator.ticks();
        while sink.should_continue() {
            let frame = self.step();
            log::debug!(
                "tick {}: max {:.0} B/s across {} channels",
                frame.tick,
                frame.max_rate,
                frame.bars.len()
            );
            sink.submit_frame(&frame)?;
            pacer.wait(self.period);
        }
        let ran = self.simulator.ticks() - start;
        log::info!("monitor stopped after {ran} ticks");
        Ok(ran)
    }
}
