// DataStream - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Headless search (--search) or eframe GUI launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use datastream::app;
pub use datastream::core;
pub use datastream::platform;
pub use datastream::ui;
pub use datastream::util;

use app::batch::{run_batch, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Data Stream Processor - load a text file and filter its lines.
///
/// Without --search the GUI opens (preloading PATH if given). With
/// --search the matching lines of PATH are printed and the program exits.
#[derive(Parser, Debug)]
#[command(name = "datastream", version, about)]
struct Cli {
    /// Text file to load.
    path: Option<PathBuf>,

    /// Print lines of PATH containing TERM instead of opening the GUI.
    #[arg(short = 's', long = "search", value_name = "TERM", requires = "path")]
    search: Option<String>,

    /// With --search, print matches as a JSON array.
    #[arg(long = "json", requires = "search")]
    json: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging exists so its level can feed the filter;
    // its own diagnostics are replayed below once tracing is up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Data Stream Processor starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    match (cli.search, cli.path) {
        (Some(term), Some(path)) => run_headless(&path, &term, cli.json),
        (_, path) => run_gui(config, config_warnings, path, cli.debug),
    }
}

fn run_headless(path: &std::path::Path, term: &str, json: bool) -> ExitCode {
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    match run_batch(path, term, format, stdout.lock()) {
        Ok(summary) => {
            if summary.matched_lines == 0 {
                eprintln!("No matches found for: {}", term.trim());
            }
            tracing::info!(
                total = summary.total_lines,
                matched = summary.matched_lines,
                "Headless search finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Headless search failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_gui(
    config: platform::config::AppConfig,
    warnings: Vec<String>,
    path: Option<PathBuf>,
    debug: bool,
) -> ExitCode {
    let mut state = app::state::AppState::new(&config, debug);
    state.warnings = warnings;

    // A path on the command line behaves like an initial "Load File".
    if let Some(ref path) = path {
        state.load_file(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([
                util::constants::DEFAULT_WINDOW_WIDTH,
                util::constants::DEFAULT_WINDOW_HEIGHT,
            ])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ]),
        centered: true,
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::DataStreamApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch {} GUI: {e}", util::constants::APP_NAME);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
