//! Contact Form Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Contact router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/contact", post(handler::submit))
}
