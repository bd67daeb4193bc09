use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use hbnb_console::Console;

/// hbnb record console
#[derive(Parser, Debug)]
#[command(name = "hbnb")]
#[command(about = "Interactive console for a file-backed record store")]
#[command(version)]
struct Args {
    /// Path to the backing store file
    #[arg(short, long, default_value = "file.json", env = "HBNB_FILE")]
    file: PathBuf,

    /// Run a standalone persistence smoke test and exit
    #[arg(long)]
    test_persistence: bool,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so console output stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.test_persistence {
        hbnb_console::run_persistence_test();
        return Ok(());
    }

    tracing::debug!("Backing store file: {}", args.file.display());

    let mut console = Console::new(&args.file);
    console.run()?;
    Ok(())
}
