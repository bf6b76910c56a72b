/// leavebot - a Slack bot that answers mentions and runs a leave request (休暇申請) form.
///
/// # Architecture
///
/// A single axum service receives every Slack-signed request:
/// 1. `app_mention` events are answered with a greeting in the same channel
/// 2. `/open-modal` opens the leave request modal via `views.open`
/// 3. Submitting the modal relays the request to the command's `response_url`
///
/// Handlers are pure functions returning [`core::models::Outbound`] effects;
/// the [`api::executor::EffectExecutor`] performs them.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use leavebot::api::{AppContext, router};
/// use leavebot::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = AppConfig::from_env()?;
///     leavebot::setup_logging(&config.log_level, config.log_format);
///
///     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
///     let app = router(Arc::new(AppContext::new(config)));
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

use crate::core::config::LogFormat;

/// Configure structured logging.
///
/// `level` is an `EnvFilter` directive such as `debug` or `leavebot=debug,info`;
/// an unparsable directive falls back to `info`. Calling this more than once
/// keeps the first subscriber.
///
/// # Example
///
/// ```
/// leavebot::setup_logging("info", leavebot::core::config::LogFormat::Compact);
/// ```
pub fn setup_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
