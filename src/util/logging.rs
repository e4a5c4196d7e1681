use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Terminal commands log to stderr
    Stderr,
    /// The full-screen panel owns the terminal; only a log file is allowed
    FileOnly,
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("codetasks=debug,warn")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global tracing subscriber.
///
/// With a log file, logs are appended there regardless of target. Without
/// one, `FileOnly` installs nothing.
pub fn init(verbose: bool, log_file: Option<&Path>, target: LogTarget) -> std::io::Result<()> {
    match (log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(verbose))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        (None, LogTarget::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(verbose))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        (None, LogTarget::FileOnly) => {}
    }
    Ok(())
}
