pub mod rooms;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use eshoku_core::LookupError;
use serde::Serialize;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(rooms::router())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
}

/// Convert anyhow errors to HTTP responses.
///
/// Lookup failures keep their classified status; anything else is a 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self
            .0
            .downcast_ref::<LookupError>()
            .and_then(|e| StatusCode::from_u16(e.status_code()).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
