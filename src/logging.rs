use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the background log writer alive; drop it last.
#[derive(Debug)]
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Where tracing output goes.
pub enum LogTarget<'a> {
    /// Human-readable lines on stderr. Used by the server.
    Stderr,
    /// Append to a file. Terminal front ends own stdout, so they log here or not at all.
    File(&'a Path),
    Disabled,
}

/// Install the global subscriber. An unparsable `log_level` is an error.
pub fn init_tracing(log_level: &str, target: LogTarget<'_>) -> io::Result<Option<FileLogGuard>> {
    let env_filter = EnvFilter::try_new(log_level).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid log filter {:?}: {}", log_level, e),
        )
    })?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log file has no name"))?;
            fs::create_dir_all(directory)?;

            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(file_writer)
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
            Ok(Some(FileLogGuard { _guard: guard }))
        }
        LogTarget::Disabled => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = init_tracing("hyakunin_quiz=loud", LogTarget::Disabled).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("hyakunin_quiz=loud"));
    }

    #[test]
    fn test_disabled_target_installs_nothing() {
        let guard = init_tracing("hyakunin_quiz=debug", LogTarget::Disabled).unwrap();
        assert!(guard.is_none());
    }
}
