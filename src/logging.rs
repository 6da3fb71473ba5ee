use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "RESUME_TUI_LOG";
const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
///
/// Returns `None`, leaving logging disabled, when there is no destination,
/// its directory cannot be created, or a subscriber is already installed.
/// The guard must live until shutdown so buffered lines get flushed.
pub fn init(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let path = log_file?;
    let file_name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_destination_disables_logging() {
        assert!(init(None).is_none());
    }

    #[test]
    fn test_path_without_file_name() {
        assert!(init(Some(Path::new("/"))).is_none());
    }
}
