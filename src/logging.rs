use color_eyre::{eyre::eyre, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "POKEDEX_LOG";

const LOG_FILE: &str = "pokedex.log";

/// Send tracing output to `log_dir/pokedex.log` so it never mixes with
/// command output.
///
/// The returned guard flushes pending lines on drop and must be held until
/// the program exits.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
  std::fs::create_dir_all(log_dir)
    .map_err(|e| eyre!("Failed to create log directory {}: {}", log_dir.display(), e))?;

  let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
  let (writer, guard) = tracing_appender::non_blocking(appender);

  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(writer)
    .with_ansi(false)
    .try_init()
    .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

  Ok(guard)
}

/// Like [`init`], but a missing or unwritable log directory only costs the
/// log file. The warning goes to stderr since there is no subscriber yet.
pub fn init_best_effort(log_dir: Option<&Path>) -> Option<WorkerGuard> {
  let Some(log_dir) = log_dir else {
    eprintln!("warning: no data directory, logging disabled");
    return None;
  };

  match init(log_dir) {
    Ok(guard) => Some(guard),
    Err(e) => {
      eprintln!("warning: {}, logging disabled", e);
      None
    }
  }
}
