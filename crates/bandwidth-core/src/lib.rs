//! # bandwidth-core
//!
//! Fabricates per-connection "bandwidth" readings and lays them out as a bar
//! chart, one frame per second.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bandwidth_core::{CanvasGeometry, Monitor, SimulationParams, Simulator};
//!
//! let simulator = Simulator::new(SimulationParams::default()).unwrap();
//! let mut monitor = Monitor::new(simulator, CanvasGeometry::default());
//!
//! let frame = monitor.step();
//! for label in &frame.labels {
//!     println!("{}", label.text);
//! }
//! ```
//!
//! ## Architecture
//!
//! Simulator → snapshot of rates → layout → frame → [`FrameSink`]
//!
//! The [`Simulator`] redraws every channel uniformly from
//! `[min_rate, max_rate]` each tick. [`compute_layout`] turns a snapshot into
//! bar rectangles normalized against that snapshot's maximum. The
//! [`Monitor`] loop hands each composed [`Frame`] to a [`FrameSink`] (the
//! terminal dashboard in `bandwidth-cli`) and then waits one tick period.

pub mod channel;
pub mod error;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod monitor;
pub mod simulator;

use std::time::Duration;

pub use channel::{Channel, SimulationParams};
pub use error::{Error, Result};
pub use font::{FontFace, FontFormat};
pub use frame::{FilledRect, Frame, Rgb, TextLabel, rate_label};
pub use geometry::{Point, Rect};
pub use layout::{BarGeometry, CanvasGeometry, FrameLayout, compute_layout, snapshot_max};
pub use monitor::{FrameSink, Monitor, Pacer, SleepPacer};
pub use simulator::Simulator;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of simulated connections in the default build.
pub const DEFAULT_CHANNEL_COUNT: usize = 5;
/// Lower rate bound in bytes/second.
pub const DEFAULT_MIN_RATE: f64 = 1000.0;
/// Upper rate bound in bytes/second.
pub const DEFAULT_MAX_RATE: f64 = 5000.0;

/// Canvas width in canvas units.
pub const CANVAS_WIDTH: f64 = 1600.0;
/// Canvas height in canvas units.
pub const CANVAS_HEIGHT: f64 = 1200.0;
/// Space reserved above the tallest bar for labels.
pub const LABEL_MARGIN: f64 = 100.0;
/// Gap between a bar's top edge and its label.
pub const LABEL_OFFSET: f64 = 20.0;
/// Label character size.
pub const LABEL_FONT_SIZE: u16 = 14;

/// Bold sans-serif font required at startup.
pub const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Pause between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
