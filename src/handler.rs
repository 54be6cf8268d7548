use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{EmailRequest, ErrorResponse, ReplyResponse},
    service::EmailGeneratorService,
};

#[debug_handler]
pub async fn generate_email(
    State(service): State<Arc<EmailGeneratorService>>,
    Json(payload): Json<EmailRequest>,
) -> Response {
    match service.generate_email_reply(payload).await {
        Ok(reply) => (StatusCode::OK, Json(ReplyResponse { reply })).into_response(),
        Err(e) => {
            tracing::error!("Failed to generate email reply: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to generate email reply: {e}"),
                }),
            )
                .into_response()
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from email generator!").into_response()
}
