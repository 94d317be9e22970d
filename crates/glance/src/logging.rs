//! Logging setup
//!
//! The dashboard owns stdout, so interactive mode logs to a file under the
//! state directory; non-interactive subcommands log to stderr. Filter is
//! controlled with the GLANCE_LOG env var (default: info).

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the whole process
pub fn init(interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("GLANCE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    if interactive {
        let Some(path) = discover_log_path() else {
            // No writable location; run without logging rather than
            // scribbling over the TUI
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Discover the log file path with a fallback chain
///
/// Priority:
/// 1. $GLANCE_LOG_FILE (explicit override)
/// 2. $XDG_STATE_HOME/glance/glance.log
/// 3. ~/.local/state/glance/glance.log
fn discover_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GLANCE_LOG_FILE") {
        return Some(PathBuf::from(path));
    }

    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg_state).join("glance").join("glance.log"));
    }

    dirs::home_dir().map(|home| {
        home.join(".local")
            .join("state")
            .join("glance")
            .join("glance.log")
    })
}
