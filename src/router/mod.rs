//! HTTP routes.
//!
//! Each route adapts axum types to a framework-agnostic controller.

pub mod signup;
pub mod status;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::presentation::HttpResponse;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body)).into_response()
    }
}
