//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered log lines are lost on exit.
pub fn init_telemetry(settings: &LogSettings) -> WorkerGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(writer))
            .init();
    }

    guard
}
