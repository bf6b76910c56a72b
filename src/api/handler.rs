//! HTTP receiver - thin router that delegates to the dispatcher.
//!
//! This module handles:
//! - The health-check route (`GET /`)
//! - Request validation (body encoding, signature)
//! - Payload classification and the optional request dump
//! - Handing the event to [`dispatch`] and returning its [`Ack`]

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::context::AppContext;
use super::dispatch::dispatch;
use super::helpers::{Ack, HEALTH_BODY, err_response};
use super::middleware::RequestContext;
use super::{parsing, signature};
use crate::core::config::AppConfig;

/// Build the application router: the Slack endpoint plus the health check.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let events_path = ctx.config.events_path.clone();
    Router::new()
        .route("/", get(health))
        .route(&events_path, post(slack_events))
        .with_state(ctx)
}

pub async fn health() -> &'static str {
    HEALTH_BODY
}

/// Entry point for every Slack-signed request: events, slash commands and
/// interactivity payloads all arrive here.
pub async fn slack_events(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!("slack_request", correlation_id = %correlation_id);
    handle_request(ctx, headers, body, correlation_id)
        .instrument(span)
        .await
}

async fn handle_request(
    ctx: Arc<AppContext>,
    headers: HeaderMap,
    body: Bytes,
    correlation_id: String,
) -> Response {
    let Ok(body) = std::str::from_utf8(&body) else {
        error!("Request body is not valid UTF-8");
        return err_response(400, "Invalid body encoding");
    };

    if let Err(response) = verify_signature(body, &headers, &ctx.config) {
        return response;
    }

    let event = match parsing::parse_inbound(body) {
        Ok(event) => event,
        Err(e) => {
            error!("Failed to parse Slack request: {}", e);
            return err_response(400, &format!("Parse Error: {e}"));
        }
    };
    info!(kind = event.kind().as_str(), "Slack request verified");

    if ctx.request_dumper.is_enabled() {
        match RequestContext::for_event(&correlation_id, &ctx.config.slack_bot_token, &event) {
            Ok(request_ctx) => ctx.request_dumper.dump(&request_ctx),
            Err(e) => error!("Failed to build request context for dump: {}", e),
        }
    }

    let ack: Ack = dispatch(ctx, event).await;
    ack.into_response()
}

fn verify_signature(body: &str, headers: &HeaderMap, config: &AppConfig) -> Result<(), Response> {
    let Some(sig) = parsing::get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(err_response(401, "Missing X-Slack-Signature header"));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(err_response(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, &config.slack_signing_secret) {
        return Err(err_response(401, "Invalid Slack signature"));
    }

    Ok(())
}
