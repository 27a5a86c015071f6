use color_eyre::Result;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Where log records go. The terminal UI owns stdout and stderr, so it logs
/// to a file instead.
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn init(target: LogTarget, debug: bool) -> Result<()> {
    let default_level = match (&target, debug) {
        (_, true) => "debug",
        (LogTarget::Stderr, false) => "warn",
        (LogTarget::File(_), false) => "info",
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    if let LogTarget::File(path) = &target {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed, e.g. by a test harness.
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
    Ok(())
}
