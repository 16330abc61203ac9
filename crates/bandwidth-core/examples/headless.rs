//! Headless monitor example.
//!
//! Runs a handful of ticks without a terminal UI and prints each frame's
//! labels and bar heights.
//!
//! Run: `cargo run -p bandwidth-core --example headless`

use std::time::Duration;

use bandwidth_core::{
    CanvasGeometry, Frame, FrameSink, Monitor, Result, SimulationParams, Simulator, SleepPacer,
};

struct PrintSink {
    remaining: u32,
}

impl FrameSink for PrintSink {
    fn should_continue(&mut self) -> bool {
        let go = self.remaining > 0;
        self.remaining = self.remaining.saturating_sub(1);
        go
    }

    fn submit_frame(&mut self, frame: &Frame) -> Result<()> {
        println!("tick #{}  max {:.0} B/s", frame.tick, frame.max_rate);
        for (bar, label) in frame.bars.iter().zip(&frame.labels) {
            println!("  {:<20} height {:>7.1}", label.text, bar.rect.height);
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let simulator = Simulator::new(SimulationParams::default())?;
    let mut monitor =
        Monitor::new(simulator, CanvasGeometry::default()).with_period(Duration::from_millis(200));

    let ticks = monitor.run(&mut PrintSink { remaining: 5 }, &mut SleepPacer)?;
    println!("\n{ticks} ticks");
    Ok(())
}
