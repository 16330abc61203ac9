//! TUI rendering.
//!
//! ┌ 📶 Bandwidth Monitor   tick #42   max 4873 B/s   DejaVuSans-Bold ┐
//! │   Conn-1: 4873 B/s                                              │
//! │   ████        Conn-2: 2210 B/s                                  │
//! │   ████        ████                                              │
//! │   ████        ████        ████        ████        ████          │
//! └─────────────────────────────────────────────────────────────────┘
//!  q / Esc: quit   refresh 1s
//!
//! The core lays bars out on a fixed canvas with y growing downward; the
//! ratatui canvas grows upward, so every y is flipped against the canvas
//! height before drawing.

use std::time::Duration;

use bandwidth_core::{CanvasGeometry, FilledRect, Frame as ChartFrame, Rgb};
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::{prelude::*, widgets::*};

/// Everything one redraw needs.
pub struct DashboardView<'a> {
    pub frame: &'a ChartFrame,
    pub geometry: &'a CanvasGeometry,
    pub font_name: &'a str,
    pub period: Duration,
}

pub fn draw(f: &mut Frame, view: &DashboardView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // chart
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_chart(f, rows[0], view);
    draw_keys(f, rows[1], view.period);
}

fn draw_chart(f: &mut Frame, area: Rect, view: &DashboardView) {
    let frame = view.frame;
    let geometry = view.geometry;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(vec![
            Span::styled(
                " 📶 Bandwidth Monitor ",
                Style::default().bold().fg(Color::Green),
            ),
            Span::styled(
                format!("  tick #{}  max {:.0} B/s ", frame.tick, frame.max_rate),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {} ", view.font_name),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    // Half a terminal column in canvas units, so fill lines leave no gaps.
    let columns = area.width.saturating_sub(2).max(1);
    let step = geometry.width / f64::from(columns) / 2.0;

    let canvas = Canvas::default()
        .block(block)
        .background_color(to_color(frame.background))
        .marker(symbols::Marker::Block)
        .x_bounds([0.0, geometry.width])
        .y_bounds([0.0, geometry.height])
        .paint(|ctx| {
            for bar in &frame.bars {
                fill_bar(ctx, bar, geometry, step);
            }
            ctx.layer();
            for label in &frame.labels {
                ctx.print(
                    label.position.x,
                    flip_y(geometry, label.position.y),
                    Line::styled(
                        label.text.clone(),
                        Style::default().bold().fg(to_color(label.color)),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn fill_bar(ctx: &mut Context, bar: &FilledRect, geometry: &CanvasGeometry, step: f64) {
    let r = bar.rect;
    if r.height <= 0.0 || r.width <= 0.0 || step <= 0.0 {
        return;
    }
    let bottom = flip_y(geometry, r.bottom());
    let top = flip_y(geometry, r.y);
    let color = to_color(bar.color);

    let mut x = r.x;
    while x <= r.right() {
        ctx.draw(&CanvasLine::new(x, bottom, x, top, color));
        x += step;
    }
}

fn draw_keys(f: &mut Frame, area: Rect, period: Duration) {
    let bar = Paragraph::new(format!(
        " q / Esc: quit   refresh {:.1}s",
        period.as_secs_f64()
    ))
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

/// Canvas y (downward) to ratatui canvas y (upward).
pub fn flip_y(geometry: &CanvasGeometry, y: f64) -> f64 {
    geometry.height - y
}

pub fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}
