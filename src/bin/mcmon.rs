//! mcmon - terminal dashboard for a Minecraft server status snapshot.
//!
//! Usage:
//!   mcmon status.json            # show a saved snapshot
//!   fetch-status | mcmon -       # read the snapshot from stdin
//!   mcmon --no-icon status.json  # skip the server icon
//!   mcmon -vv --log-file mcmon.log status.json

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use mcmon::status::{SnapshotError, StatusSnapshot};
use mcmon::tui::{App, DashboardOptions};

/// Terminal dashboard for a Minecraft server status snapshot.
#[derive(Parser)]
#[command(name = "mcmon", about = "Minecraft server status dashboard")]
struct Args {
    /// Status snapshot (JSON). Use "-" to read from stdin.
    #[arg(value_name = "SNAPSHOT")]
    snapshot: String,

    /// Do not decode or show the server icon.
    #[arg(long)]
    no_icon: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_ref()) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    let snapshot = match load_snapshot(&args.snapshot) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading snapshot '{}': {}", args.snapshot, e);
            std::process::exit(1);
        }
    };
    debug!(host = %snapshot.address(), online = snapshot.online, "snapshot loaded");

    if !io::stdout().is_terminal() {
        eprintln!("Error: mcmon needs a terminal on stdout");
        std::process::exit(1);
    }

    let options = DashboardOptions {
        show_icon: !args.no_icon,
    };
    let app = App::new(&snapshot, &options);

    if let Err(e) = app.run() {
        eprintln!("Error running dashboard: {}", e);
        std::process::exit(1);
    }
}

fn load_snapshot(source: &str) -> Result<StatusSnapshot, SnapshotError> {
    if source == "-" {
        StatusSnapshot::from_reader(io::stdin().lock())
    } else {
        StatusSnapshot::load(source)
    }
}

/// Initializes the tracing subscriber.
///
/// The viewer owns the terminal, so the default level is WARN and anything
/// chattier is best sent to `--log-file`.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&PathBuf>) -> io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("mcmon={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}
