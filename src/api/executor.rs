//! Runs the [`Outbound`] effects produced by handlers.

use std::sync::Arc;

use tracing::{debug, error};

use crate::core::models::Outbound;
use crate::errors::SlackError;
use crate::slack::{ResponseRelay, SlackApi};

pub struct EffectExecutor {
    slack: Arc<dyn SlackApi>,
    relay: Arc<dyn ResponseRelay>,
}

impl EffectExecutor {
    #[must_use]
    pub fn new(slack: Arc<dyn SlackApi>, relay: Arc<dyn ResponseRelay>) -> Self {
        Self { slack, relay }
    }

    /// Perform a single effect. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying Slack API or relay call.
    pub async fn execute(&self, effect: &Outbound) -> Result<(), SlackError> {
        match effect {
            Outbound::PostMessage { channel, text } => {
                self.slack.post_message(channel, text).await
            }
            Outbound::OpenView { trigger_id, view } => {
                let response = self.slack.open_view(trigger_id, view).await?;
                debug!(response = %response, "views.open response");
                Ok(())
            }
            Outbound::PostToResponseUrl {
                response_url,
                payload,
            } => self.relay.post(response_url, payload).await,
        }
    }

    /// Perform every effect in order, continuing past failures.
    ///
    /// Each failure is logged; the returned list holds one outcome per effect.
    pub async fn execute_all(&self, effects: &[Outbound]) -> Vec<Result<(), SlackError>> {
        let mut outcomes = Vec::with_capacity(effects.len());
        for effect in effects {
            let outcome = self.execute(effect).await;
            if let Err(e) = &outcome {
                error!(effect = effect.name(), "Outbound call failed: {}", e);
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}
