// src/main.rs

use clap::{Parser, ValueHint};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use poslog_csv_render::app::run;
use poslog_csv_render::config;
use poslog_csv_render::crate_version;

#[derive(Parser, Debug)]
#[command(
    name = "poslog_csv_render",
    version = crate_version(),
    about = "Plots elevation, X-Z trajectory and speed from the most recent positional CSV log."
)]
struct Args {
    /// Directory holding the CSV logs (default: ~/Desktop/UnityLogs, or $POSLOG_LOG_DIR)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = run(args.dir.as_deref(), config::init(), &mut std::io::stdout().lock());
    if let Err(e) = result {
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}

// src/main.rs
