//! HTTP receiver, handlers and request processing

pub mod context;
pub mod dispatch;
pub mod event_handler;
pub mod executor;
pub mod handler;
pub mod helpers;
pub mod middleware;
pub mod parsing;
pub mod signature;
pub mod slash_handler;
pub mod view_submission;

// Re-export the main entry points for convenience
pub use context::AppContext;
pub use handler::router;
