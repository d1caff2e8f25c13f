use anyhow::Result;
use clap::Parser;
use log::info;
use sensreg::{menu, SensorRegistry};
use std::io;

/// sensreg - An in-memory instrumentation sensor registry
#[derive(Parser, Debug)]
#[command(name = "sensreg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag.
    // Level 0 (default): warn only. Allow RUST_LOG to override.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting sensreg v{}", env!("CARGO_PKG_VERSION"));

    let mut registry = SensorRegistry::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut registry, &mut stdin.lock(), &mut stdout.lock())?;

    info!("sensreg shut down");
    Ok(())
}
