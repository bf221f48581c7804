//! HTTP surface of the relay.
//!
//! | Method | Path      | Handler          |
//! |--------|-----------|------------------|
//! | POST   | `/verify` | `routes::verify` |
//! | GET    | `/health` | `routes::health` |
//!
//! Other methods on either path get a 405 from the router.

pub mod error;
pub mod models;
mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{domain::repositories::receipt_repository::ReceiptRepository, util::ReceiptRelayUtil};

/// Assemble the router. Requests share the relay and nothing else.
pub fn app<R: ReceiptRepository + 'static>(relay: Arc<ReceiptRelayUtil<R>>) -> Router {
    Router::new()
        .route("/verify", post(routes::verify::<R>))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}
