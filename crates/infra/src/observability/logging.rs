//! Subscriber setup for the `salesdigest` binary
//!
//! Configuration is loaded before the configured subscriber can exist, so
//! loading runs under a scoped stderr subscriber ([`with_startup_logging`]);
//! [`init_logging`] then installs the global one.

use std::path::Path;

use salesdigest_domain::constants::DEFAULT_LOG_LEVEL;
use salesdigest_domain::{LoggingConfig, Result, SalesDigestError};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the file writer alive; dropping it flushes buffered log lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`.
///
/// # Errors
/// Returns `SalesDigestError::Config` for an invalid level or an unusable log
/// file path, `SalesDigestError::Internal` if a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard> {
    let filter = build_filter(&config.level)?;

    let (file_layer, guard) = match config.file.as_deref() {
        Some(file) => {
            let appender = file_appender(Path::new(file))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .map_err(|e| SalesDigestError::Internal(format!("Failed to install logger: {e}")))?;

    tracing::debug!(file = ?config.file, level = %config.level, "Logging initialised");
    Ok(LogGuard { _file: guard })
}

/// Run `f` with a temporary stderr subscriber.
///
/// Used for work that happens before [`init_logging`], such as loading the
/// configuration. Honors `RUST_LOG`, otherwise logs at the default level.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing::subscriber::with_default(startup_subscriber(filter, std::io::stderr), f)
}

/// Plain fmt subscriber used until the configured one is installed.
pub fn startup_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt().with_env_filter(filter).with_writer(writer).with_target(false).finish()
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| SalesDigestError::Config(format!("Invalid log level '{level}': {e}"))),
    }
}

/// Append-only appender for a single, never-rotated file.
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            SalesDigestError::Config(format!("Invalid log file path: {}", path.display()))
        })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| {
            SalesDigestError::Config(format!("Cannot open log file {}: {e}", path.display()))
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// In-memory log sink for asserting on emitted events.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    pub(crate) struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn startup_subscriber_records_warnings() {
        let sink = SharedBuffer::default();
        let subscriber = startup_subscriber(EnvFilter::new("info"), sink.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("below the level");
            tracing::warn!(path = "/srv/app/.env", "Startup warning");
        });

        let output = sink.contents();
        assert!(output.contains("Startup warning"));
        assert!(output.contains("/srv/app/.env"));
        assert!(!output.contains("below the level"));
    }

    #[test]
    fn rejects_unparseable_level() {
        std::env::remove_var("RUST_LOG");
        assert!(matches!(build_filter("salesdigest=loud"), Err(SalesDigestError::Config(_))));
    }

    #[test]
    fn file_appender_creates_log_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("salesdigest.log");

        let appender = file_appender(&path);

        assert!(appender.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn file_appender_rejects_directory_only_path() {
        assert!(file_appender(Path::new("/")).is_err());
    }
}
