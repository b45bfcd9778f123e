use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file. When unset, logs go to stderr.
pub const LOG_FILE_ENV: &str = "BDUI_LOG";

/// Initialize tracing for the CLI.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so render output
/// on stdout stays clean. With `BDUI_LOG` set, events are appended to that
/// file without ANSI colours instead.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path);
        match file {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(err) => eprintln!("Warning: Failed to open log file {}: {}", log_path, err),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
