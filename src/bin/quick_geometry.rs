//! Print the quick terminal show/hide frames for a screen and window size.
//!
//! Development aid for checking placement without launching a window:
//!
//! ```text
//! quick-geometry --position top --screen 1920x1080 --reserved-top 25 --window 800x600
//! ```
//!
//! `--screen` may be repeated; displays are laid out left to right starting
//! with the primary, and `--monitor` (or the config's `target_monitor`) picks one.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use par_term_quick::geometry::{Rect, ScreenGeometry};
use par_term_quick::quick_terminal::{QuickTerminalPosition, QuickTerminalTransition};
use par_term_quick_config::QuickTerminalConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quick-geometry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Docking position (top, bottom, left, right, center); defaults to the config value
    #[arg(long)]
    position: Option<QuickTerminalPosition>,

    /// Config file to read the position from
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen size as WIDTHxHEIGHT (repeat for additional displays)
    #[arg(long = "screen", default_value = "1920x1080", value_parser = parse_dimensions)]
    screens: Vec<(f64, f64)>,

    /// Display index to place the panel on; defaults to the config value
    #[arg(long)]
    monitor: Option<usize>,

    /// Space reserved at the top of the screen (menu bar)
    #[arg(long, default_value_t = 0.0)]
    reserved_top: f64,

    /// Space reserved at the bottom of the screen (dock)
    #[arg(long, default_value_t = 0.0)]
    reserved_bottom: f64,

    /// Current window size as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_dimensions)]
    window: (f64, f64),

    /// Current window y origin
    #[arg(long, default_value_t = 0.0)]
    window_y: f64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<log::LevelFilter>,
}

fn parse_dimensions(value: &str) -> Result<(f64, f64), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{width}': {e}"))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{height}': {e}"))?;
    if width < 0.0 || height < 0.0 {
        return Err(format!("dimensions must be non-negative, got '{value}'"));
    }
    Ok((width, height))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    par_term_quick::debug::init_log_bridge(cli.log_level);

    let mut config = match &cli.config {
        Some(path) => QuickTerminalConfig::load_from_path(path),
        None => QuickTerminalConfig::load(),
    }
    .context("Failed to load quick terminal config")?;
    if let Some(position) = cli.position {
        config.position = position;
    }
    if let Some(monitor) = cli.monitor {
        config.target_monitor = Some(monitor);
    }

    // Lay displays out left to right, bottom edges aligned
    let mut next_x = 0.0;
    let screens: Vec<ScreenGeometry> = cli
        .screens
        .iter()
        .map(|&(width, height)| {
            let screen = ScreenGeometry::full(Rect::new(next_x, 0.0, width, height))
                .with_reserved(cli.reserved_top, cli.reserved_bottom, 0.0, 0.0);
            next_x += width;
            screen
        })
        .collect();
    let screen = ScreenGeometry::select(&screens, config.target_monitor)
        .ok_or_else(|| anyhow!("no screens given"))?;

    let (window_width, window_height) = cli.window;
    let window = Rect::new(screen.frame.min_x(), cli.window_y, window_width, window_height);

    let show = QuickTerminalTransition::show_with_config(&config, &window, &screen);
    println!("position: {}", show.position);
    println!("screen:   {:?}", screen.frame);
    println!("duration: {}s", show.duration);
    println!(
        "initial:  origin=({}, {}) size={}x{} alpha={}",
        show.from.frame.origin.x,
        show.from.frame.origin.y,
        show.from.frame.size.width,
        show.from.frame.size.height,
        show.from.alpha
    );
    println!(
        "final:    origin=({}, {}) size={}x{} alpha={}",
        show.to.frame.origin.x,
        show.to.frame.origin.y,
        show.to.frame.size.width,
        show.to.frame.size.height,
        show.to.alpha
    );

    Ok(())
}
