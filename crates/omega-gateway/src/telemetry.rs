//! Tracing subscriber setup for applications embedding Omega Gateway.
//!
//! The library only emits events (see [`crate::obs`]); nothing is printed
//! until a subscriber is installed. Only the first successful call per
//! process takes effect.

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    /// Newline-delimited JSON, for log aggregation pipelines.
    Json,
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `omega_gateway` events at `level`
/// and above are shown. Returns `false` when a global subscriber already
/// existed and this call was ignored.
pub fn init_tracing(format: LogFormat, level: Level) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("omega_gateway={}", level.as_str())));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).json())
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(false)).try_init(),
    };
    installed.is_ok()
}
