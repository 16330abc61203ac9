//! CLI for the bandwidth monitor: simulated connections, live bar chart.

mod tui;

use std::path::Path;
use std::sync::atomic::Ordering;

use clap::Parser;

use bandwidth_core::{
    CanvasGeometry, DEFAULT_CHANNEL_COUNT, DEFAULT_MAX_RATE, DEFAULT_MIN_RATE, FONT_PATH,
    FontFace, Monitor, Result, SimulationParams, Simulator,
};

#[derive(Parser, Debug)]
#[command(name = "bandwidth-monitor")]
#[command(about = "Simulated per-connection bandwidth, redrawn as a bar chart every second")]
#[command(version = bandwidth_core::VERSION)]
struct Cli {
    /// Number of simulated connections
    #[arg(long, default_value_t = DEFAULT_CHANNEL_COUNT)]
    connections: usize,

    /// Lower bound of the simulated rate, in bytes/second
    #[arg(long, default_value_t = DEFAULT_MIN_RATE, allow_negative_numbers = true)]
    min_rate: f64,

    /// Upper bound of the simulated rate, in bytes/second
    #[arg(long, default_value_t = DEFAULT_MAX_RATE, allow_negative_numbers = true)]
    max_rate: f64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let code = exit_code(run(&cli, Path::new(FONT_PATH)));
    if code != 0 {
        std::process::exit(code);
    }
}

/// Print a failed run to stderr and map it to the process exit status.
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(cli: &Cli, font_path: &Path) -> Result<()> {
    let params = SimulationParams::new(cli.connections, cli.min_rate, cli.max_rate)?;
    let font = FontFace::load(font_path)?;
    log::info!(
        "starting: {} connections, {}..{} B/s",
        params.channel_count(),
        params.min_rate(),
        params.max_rate()
    );

    let simulator = Simulator::new(params)?;
    let mut app = tui::app::App::new(Monitor::new(simulator, CanvasGeometry::default()), font);

    // SIGINT/SIGTERM from outside the terminal count as a close request.
    let close = app.close_handle();
    if let Err(e) = ctrlc::set_handler(move || close.store(true, Ordering::SeqCst)) {
        log::warn!("could not install signal handler: {e}");
    }

    let ticks = app.run()?;
    log::info!("closed after {ticks} ticks");
    Ok(())
}
