use std::sync::{Once, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

static INIT: Once = Once::new();
// Dropping the guard stops the file writer, so it lives for the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "tron_wallet_relay.log";

pub struct Logger;

impl Logger {
    /// Console logging at `level`
    pub fn init(level: &str) {
        Self::init_with_dir(level, None);
    }

    /// Console logging plus a daily-rolling file in `log_dir`.
    ///
    /// `RUST_LOG` overrides `level` when set. Only the first call has an
    /// effect.
    pub fn init_with_dir(level: &str, log_dir: Option<&str>) {
        INIT.call_once(|| {
            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

            let console_layer = fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_target(true)
                .with_writer(std::io::stdout);

            let file_layer = log_dir.map(|dir| {
                let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                fmt::layer()
                    .with_timer(UtcTime::rfc_3339())
                    .with_ansi(false)
                    .with_writer(writer)
            });

            let result = Registry::default()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .try_init();
            if let Err(e) = result {
                eprintln!("Logger already installed: {e}");
            }
        });
    }
}

fn default_directives(level: &str) -> String {
    let level = match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level.to_lowercase(),
        _ => "info".to_string(),
    };
    format!("tron_wallet_relay={level},tron_wallet_core={level},actix_web=info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("DEBUG"),
            "tron_wallet_relay=debug,tron_wallet_core=debug,actix_web=info"
        );
        assert!(default_directives("verbose").starts_with("tron_wallet_relay=info"));
    }

    #[test]
    fn test_init_twice() {
        Logger::init("info");
        Logger::init("debug");
    }
}
