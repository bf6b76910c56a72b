use std::sync::Arc;

use super::executor::EffectExecutor;
use super::middleware::RequestDumper;
use crate::core::config::AppConfig;
use crate::slack::{HttpResponseRelay, ResponseRelay, SlackApi, SlackClient};

/// Everything a request needs, built once at startup and shared read-only.
pub struct AppContext {
    pub config: AppConfig,
    pub executor: EffectExecutor,
    pub request_dumper: RequestDumper,
}

impl AppContext {
    /// Context backed by the real Slack Web API and `response_url` relay.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let slack = Arc::new(SlackClient::new(
            config.slack_bot_token.clone(),
            config.slack_api_base_url.clone(),
        ));
        Self::with_clients(config, slack, Arc::new(HttpResponseRelay::new()))
    }

    /// Context with caller-supplied outbound clients.
    #[must_use]
    pub fn with_clients(
        config: AppConfig,
        slack: Arc<dyn SlackApi>,
        relay: Arc<dyn ResponseRelay>,
    ) -> Self {
        let request_dumper = RequestDumper::new(config.request_log_enabled);
        Self {
            config,
            executor: EffectExecutor::new(slack, relay),
            request_dumper,
        }
    }
}
