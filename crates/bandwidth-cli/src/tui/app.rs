//! Terminal host for the monitor loop.
//!
//! The dashboard is the [`FrameSink`]: it drains key events at the top of
//! every tick and repaints the whole screen on each submitted frame. The
//! loop itself, including the blocking one-second wait, lives in
//! `bandwidth_core::Monitor`.

use std::io;
use std::panic::{self, PanicHookInfo};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use bandwidth_core::{
    CanvasGeometry, FontFace, Frame as ChartFrame, FrameSink, Monitor, Result, SleepPacer,
};

use super::ui::{self, DashboardView};

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Paints frames onto a ratatui terminal and watches for close requests.
pub struct Dashboard<B: Backend> {
    terminal: Terminal<B>,
    geometry: CanvasGeometry,
    font_name: String,
    period: Duration,
    /// Set from outside (signal handler) to request a close.
    close: Arc<AtomicBool>,
    running: bool,
}

impl<B: Backend> Dashboard<B> {
    pub fn new(
        terminal: Terminal<B>,
        geometry: CanvasGeometry,
        font_name: impl Into<String>,
        period: Duration,
        close: Arc<AtomicBool>,
    ) -> Self {
        Self {
            terminal,
            geometry,
            font_name: font_name.into(),
            period,
            close,
            running: true,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn is_running(&self) -> bool {
        self.running && !self.close.load(Ordering::SeqCst)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            _ => {}
        }
    }

    /// Handle every event already queued, without blocking.
    fn drain_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }
}

impl<B: Backend> FrameSink for Dashboard<B> {
    fn should_continue(&mut self) -> bool {
        if let Err(e) = self.drain_events() {
            log::warn!("event poll failed, closing: {e}");
            self.running = false;
        }
        self.is_running()
    }

    fn submit_frame(&mut self, frame: &ChartFrame) -> Result<()> {
        let view = DashboardView {
            frame,
            geometry: &self.geometry,
            font_name: &self.font_name,
            period: self.period,
        };
        self.terminal.draw(|f| ui::draw(f, &view))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Owns the monitor and the loaded font; sets up and restores the terminal.
pub struct App {
    monitor: Monitor,
    font: FontFace,
    close: Arc<AtomicBool>,
}

impl App {
    pub fn new(monitor: Monitor, font: FontFace) -> Self {
        Self {
            monitor,
            font,
            close: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that ends the loop at the next tick boundary when set.
    pub fn close_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.close)
    }

    /// Run until closed. Returns the number of ticks drawn.
    pub fn run(&mut self) -> Result<u64> {
        let terminal = enter_terminal()?;
        let hook = PanicHookGuard::install();

        let mut dashboard = Dashboard::new(
            terminal,
            *self.monitor.geometry(),
            self.font.label(),
            self.monitor.period(),
            self.close_handle(),
        );
        let result = self.monitor.run(&mut dashboard, &mut SleepPacer);

        // Always restore terminal, even if the loop returned an error.
        drop(hook);
        disable_raw_mode()?;
        execute!(
            dashboard.terminal_mut().backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }
}

/// Raw mode plus alternate screen; undone again if any later step fails.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Run `setup`; on failure run `restore` before handing the error back.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    let result = setup();
    if result.is_err() {
        restore();
    }
    result
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// Restores the terminal before a panic message is printed. Dropping it
/// reinstalls whatever hook was active before.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        let previous = Arc::clone(&self.previous);
        let _ = panic::take_hook();
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use bandwidth_core::{Channel, compute_layout};
    use ratatui::backend::TestBackend;

    fn dashboard() -> Dashboard<TestBackend> {
        Dashboard::new(
            Terminal::new(TestBackend::new(100, 30)).unwrap(),
            CanvasGeometry::default(),
            "DejaVuSans-Bold",
            Duration::from_secs(1),
            Arc::new(AtomicBool::new(false)),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_running() {
        assert!(dashboard().is_running());
    }

    #[test]
    fn q_and_esc_close() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Char('q')));
        assert!(!d.is_running());

        let mut d = dashboard();
        d.handle_key(press(KeyCode::Esc));
        assert!(!d.is_running());
    }

    #[test]
    fn ctrl_c_closes_but_plain_c_does_not() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Char('c')));
        assert!(d.is_running());
        d.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!d.is_running());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Char('x')));
        d.handle_key(press(KeyCode::Enter));
        assert!(d.is_running());
    }

    #[test]
    fn external_close_flag_stops_dashboard() {
        let flag = Arc::new(AtomicBool::new(false));
        let d = Dashboard::new(
            Terminal::new(TestBackend::new(40, 10)).unwrap(),
            CanvasGeometry::default(),
            "font",
            Duration::from_secs(1),
            Arc::clone(&flag),
        );
        assert!(d.is_running());
        flag.store(true, Ordering::SeqCst);
        assert!(!d.is_running());
    }

    #[test]
    fn submit_frame_draws_to_backend() {
        let mut d = dashboard();
        let channels = vec![Channel::new(0, 1500.0), Channel::new(1, 3000.0)];
        let layout = compute_layout(&[1500.0, 3000.0], &CanvasGeometry::default());
        let frame = ChartFrame::compose(1, &channels, &layout);
        d.submit_frame(&frame).unwrap();

        let buffer = d.terminal_mut().backend().buffer().clone();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Conn-2: 3000 B/s"));
    }

    #[test]
    fn failed_setup_runs_restore() {
        let mut restored = false;
        let result: io::Result<()> =
            setup_or_restore(|| Err(io::Error::other("no tty")), || restored = true);
        assert!(result.is_err());
        assert!(restored);
    }

    #[test]
    fn successful_setup_skips_restore() {
        let mut restored = false;
        let result = setup_or_restore(|| Ok(7), || restored = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn dropping_hook_guard_reinstates_previous_hook() {
        use std::sync::atomic::AtomicUsize;
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        panic::set_hook(Box::new(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }));
        drop(PanicHookGuard::install());

        let caught = panic::catch_unwind(|| panic!("after guard"));
        let _ = panic::take_hook();

        assert!(caught.is_err());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
