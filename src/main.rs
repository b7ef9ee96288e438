use clap::Parser;
use std::path::PathBuf;

use tintview::cli::{show_terminal, Args};
use tintview::color::{CellColor, ColorDepth};
use tintview::config::Config;
use tintview::raster::Rotation;
use tintview::terminal::{TerminalSize, DEFAULT_CHAR_ASPECT_RATIO};
use tintview::viewer::{self, ViewOptions};

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the config file. An explicit --config must exist and parse; the
/// default file falls back to built-in settings on error.
fn load_config(path: Option<PathBuf>) -> Config {
    if let Some(path) = path {
        match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Config::default()
            }
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = load_config(args.config.clone());

    // Merge settings: CLI args > config file > built-in defaults
    let char_aspect = args
        .char_ratio
        .or_else(|| cfg.char_aspect_ratio())
        .unwrap_or(DEFAULT_CHAR_ASPECT_RATIO);
    let depth = match args.color {
        Some(choice) => choice.depth(),
        None => cfg.depth(),
    }
    .unwrap_or_else(ColorDepth::detect);
    let terminal = TerminalSize::probe();

    if args.show_terminal {
        show_terminal(terminal, depth, char_aspect);
        return;
    }

    let background = match args.bg.as_deref() {
        Some(name) => CellColor::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown background color '{}', using black", name);
            CellColor::BLACK
        }),
        None => cfg.background().unwrap_or(CellColor::BLACK),
    };

    let zoom = if args.zoom > 0.0 && args.zoom.is_finite() {
        args.zoom
    } else {
        log::warn!("Invalid zoom factor {}, using 1.0", args.zoom);
        1.0
    };

    let Some(path) = args.files.first() else {
        eprintln!("Error: no image file given");
        std::process::exit(1);
    };
    if args.files.len() > 1 {
        log::warn!(
            "Only the first file is shown; ignoring {} more",
            args.files.len() - 1
        );
    }

    let options = ViewOptions {
        width: args.width_override(),
        height: args.height_override(),
        zoom,
        offset_x: args.offset_x,
        offset_y: args.offset_y,
        flip_h: args.flip_h,
        flip_v: args.flip_v,
        rotation: Rotation::from_degrees(args.rotate),
        background,
        depth,
        char_aspect,
        terminal,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = viewer::run(path, &options, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
