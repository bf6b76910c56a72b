//! All Slack-specific functionality

pub mod client;
pub mod command_parser;
pub mod modal_builder;
pub mod relay;
pub mod response_builder;

// Re-export main types for convenience
pub use client::{SlackApi, SlackClient};
pub use relay::{HttpResponseRelay, ResponseRelay};
