//! Unified test logging initialization
//!
//! One-time guarded tracing setup that integrates with cargo/nextest output
//! capture. Safe to call from every test.
//!
//! [`capture`] records the events of a single closure so a test can assert on
//! what was logged.

use std::io;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// The logging level is controlled in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// ```bash
/// TEST_LOG=debug cargo test -p tune-domain
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time() // Stable output
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}

#[derive(Clone, Default)]
struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    fn contents(&self) -> String {
        match self.inner.lock() {
            Ok(guard) => String::from_utf8_lossy(&guard).into_owned(),
            Err(_) => String::new(),
        }
    }
}

struct LogBufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogBufferWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl io::Write for LogBufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.lock() {
            Ok(mut guard) => {
                guard.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(io::Error::other("log buffer lock poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result together with
/// everything it logged at `debug` and above, without ANSI colours or times.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let logs = LogBuffer::default();
    let subscriber = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_ansi(false)
        .without_time()
        .with_writer(logs.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
