//! Tracing setup for tests.

use std::io;
use std::sync::{Arc, Mutex, Once, PoisonError};

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

static INIT: Once = Once::new();

/// Install a `fmt` subscriber writing through the test harness.
///
/// Filtered by `RUST_LOG` (default `warn`).  Safe to call from every test;
/// only the first call installs anything.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Shared in-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a thread-local subscriber and return its result together
/// with every event it logged at `WARN` or above, formatted without colour.
///
/// Events are rendered by the `fmt` layer, so fields appear as `name=value`.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, captured.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::warn!("still logging after repeated init");
    }

    #[test]
    fn capture_warnings_keeps_warn_and_above() {
        let (value, logs) = capture_warnings(|| {
            tracing::info!("routine");
            tracing::warn!(code = 7, "degraded");
            tracing::error!("failed");
            3
        });
        assert_eq!(value, 3);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("degraded"));
        assert!(logs.contains("code=7"));
        assert!(logs.contains("failed"));
        assert!(!logs.contains("routine"));
    }

    #[test]
    fn capture_warnings_is_empty_when_quiet() {
        let ((), logs) = capture_warnings(|| tracing::debug!("quiet"));
        assert!(logs.is_empty());
    }
}
