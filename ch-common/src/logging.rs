//! Structured logging setup, shared by anything embedding the query engine.
//!
//! Mirrors the query server's own `init_tracing`: text by default, JSON when asked
//! for, always filterable with `RUST_LOG`.

/// Initialize structured logging with tracing.
///
/// - `log_format`: "text" for human-readable, "json" for structured JSON lines.
/// - Respects `RUST_LOG` (default: `info`).
pub fn init_tracing(log_format: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(false).init();
        }
    }
}
