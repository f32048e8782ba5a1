//! lms-search binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use lms_search::{app, args, theme};

/// Log timestamp formatter: local time as `YYYY-MM-DDTHH:MM:SS`.
struct LmsTimer;

impl tracing_subscriber::fmt::time::FormatTime for LmsTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        w.write_str(&now.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialise tracing, writing to `<config_dir>/logs/lms-search.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("lms-search.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LmsTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LmsTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = args::apply_overrides(theme::settings(), &cli);
    tracing::info!(
        base_url = %settings.api_base_url,
        limit = settings.search_limit,
        debounce_ms = settings.debounce_ms,
        "lms-search starting"
    );
    if let Err(err) = app::run(settings, cli.query.clone()).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("lms-search: {err}");
        std::process::exit(1);
    }
    tracing::info!("lms-search exited");
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes an ISO-like timestamp without panicking.
    #[test]
    fn timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        super::LmsTimer
            .format_time(&mut writer)
            .expect("format time");
        assert_eq!(buf.len(), "2026-01-01T00:00:00".len());
        assert_eq!(buf.as_bytes()[10], b'T');
    }
}
