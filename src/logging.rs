use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Send tracing output to `log_file`, filtered by `RUST_LOG` (default `info`)
///
/// Logs go to a file because the terminal is owned by the UI.
pub fn init(log_file: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
