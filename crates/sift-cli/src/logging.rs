//! Tracing subscriber setup.
//!
//! `SIFT_LOG` takes an `EnvFilter` directive (default: `warn`). The browser
//! owns the terminal, so it logs to `$SIFT_HOME/logs/sift.log`; other
//! commands log to stderr.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the command.
pub fn init(target: LogTarget) -> Option<WorkerGuard> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            None
        }
        LogTarget::File(dir) => {
            let appender = match RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix("sift")
                .filename_suffix("log")
                .build(&dir)
            {
                Ok(appender) => appender,
                Err(e) => {
                    eprintln!("Warning: logging disabled ({}): {e}", dir.display());
                    return None;
                }
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            Some(guard)
        }
    }
}
