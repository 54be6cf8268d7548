pub mod config;
pub mod dto;
pub mod handler;
pub mod prompt;
pub mod service;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use service::EmailGeneratorService;

pub fn app(service: Arc<EmailGeneratorService>) -> Router {
    Router::new()
        .route("/api/email/generate", post(handler::generate_email))
        .route("/", get(handler::health_check))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
