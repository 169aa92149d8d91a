//! JSON span log for bench debugging of the kiosk.

use std::path::Path;

#[cfg(feature = "trace")]
mod enabled {
    use std::path::Path;
    use std::sync::OnceLock;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const LOG_FILE: &str = "kana-trace.jsonl";
    const DEFAULT_FILTER: &str = "kana_engine=debug,kana_core=debug,kana_session=debug";

    /// Flushes the writer thread on drop; held for the life of the process.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    pub fn init(log_dir: &Path) {
        GUARD.get_or_init(|| {
            let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

            let installed = tracing_subscriber::fmt()
                .json()
                .flatten_event(true)
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            if installed.is_err() {
                // host application already owns the global subscriber
                tracing::debug!("kiosk trace not installed");
            }
            guard
        });
    }
}

/// Route engine and session spans to `<log_dir>/kana-trace.jsonl`.
/// Only the first call has an effect.
pub fn init_tracing(log_dir: &Path) {
    #[cfg(feature = "trace")]
    enabled::init(log_dir);
    #[cfg(not(feature = "trace"))]
    let _ = log_dir;
}
