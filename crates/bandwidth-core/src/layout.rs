//! Bar geometry for one snapshot of channel rates.
//!
//! Each channel owns a slot `2 × bar_width` wide; the bar sits centered in
//! it, so half of every slot is gap. Heights are normalized against the
//! snapshot maximum and scaled into the canvas minus the label margin.
//! Everything here is a pure function of the snapshot and the geometry.

use crate::geometry::{Point, Rect};
use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, LABEL_MARGIN, LABEL_OFFSET};

/// Fixed canvas dimensions and label spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    /// Vertical space kept free above the tallest bar for its label.
    pub label_margin: f64,
    /// Distance from a bar's top edge up to its label anchor.
    pub label_offset: f64,
}

impl CanvasGeometry {
    /// Tallest possible bar.
    pub fn drawable_height(&self) -> f64 {
        (self.height - self.label_margin).max(0.0)
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            label_margin: LABEL_MARGIN,
            label_offset: LABEL_OFFSET,
        }
    }
}

/// Placement of one channel's bar and label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub rect: Rect,
    /// Rate divided by the snapshot maximum, in `[0, 1]`.
    pub ratio: f64,
    pub label_anchor: Point,
}

/// Layout of a whole frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Normalization divisor; never below any rate of the snapshot.
    pub max_rate: f64,
    pub bar_width: f64,
    pub bars: Vec<BarGeometry>,
}

/// Largest rate in the snapshot, floored at zero.
pub fn snapshot_max(rates: &[f64]) -> f64 {
    rates.iter().copied().fold(0.0, f64::max)
}

/// Compute bar rectangles and label anchors for `rates`, in order.
///
/// A zero (or negative) maximum yields zero-height bars for every channel.
pub fn compute_layout(rates: &[f64], geometry: &CanvasGeometry) -> FrameLayout {
    let max_rate = snapshot_max(rates);
    if rates.is_empty() {
        return FrameLayout {
            max_rate,
            bar_width: 0.0,
            bars: Vec::new(),
        };
    }

    let bar_width = geometry.width / (2.0 * rates.len() as f64);
    let drawable = geometry.drawable_height();

    let bars = rates
        .iter()
        .enumerate()
        .map(|(i, &rate)| {
            let ratio = normalize(rate, max_rate);
            let height = ratio * drawable;
            let x = i as f64 * 2.0 * bar_width + bar_width / 2.0;
            let y = geometry.height - height;
            BarGeometry {
                rect: Rect::new(x, y, bar_width, height),
                ratio,
                label_anchor: Point::new(x, y - geometry.label_offset),
            }
        })
        .collect();

    FrameLayout {
        max_rate,
        bar_width,
        bars,
    }
}

fn normalize(rate: f64, max_rate: f64) -> f64 {
    if max_rate <= 0.0 {
        return 0.0;
    }
    let ratio = rate / max_rate;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
