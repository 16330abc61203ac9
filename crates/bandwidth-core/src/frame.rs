//! Draw lists handed to the render driver.

use crate::LABEL_FONT_SIZE;
use crate::channel::Channel;
use crate::geometry::{Point, Rect};
use crate::layout::FrameLayout;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);
    pub const GREEN: Self = Self(0, 255, 0);
}

/// A solid rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Rgb,
}

/// A line of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    pub color: Rgb,
    pub size: u16,
}

/// Everything the driver paints for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Tick that produced this frame (1-based).
    pub tick: u64,
    pub background: Rgb,
    pub max_rate: f64,
    pub bars: Vec<FilledRect>,
    pub labels: Vec<TextLabel>,
}

impl Frame {
    /// Pair each channel with its bar geometry.
    ///
    /// `channels` and `layout.bars` must come from the same snapshot.
    pub fn compose(tick: u64, channels: &[Channel], layout: &FrameLayout) -> Self {
        debug_assert_eq!(channels.len(), layout.bars.len());

        let mut bars = Vec::with_capacity(channels.len());
        let mut labels = Vec::with_capacity(channels.len());
        for (channel, bar) in channels.iter().zip(&layout.bars) {
            bars.push(FilledRect {
                rect: bar.rect,
                color: Rgb::GREEN,
            });
            labels.push(TextLabel {
                text: rate_label(channel),
                position: bar.label_anchor,
                color: Rgb::WHITE,
                size: LABEL_FONT_SIZE,
            });
        }

        Self {
            tick,
            background: Rgb::BLACK,
            max_rate: layout.max_rate,
            bars,
            labels,
        }
    }
}

/// `"Conn-3: 2718 B/s"`; the rate is truncated, not rounded.
pub fn rate_label(channel: &Channel) -> String {
    format!("{}: {} B/s", channel.id(), channel.rate().trunc() as i64)
}
