//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use voxbridge_domain::protocol::ProtocolError;

/// JSON error body returned when a message cannot be handled at all.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ProtocolError`] to a `400 Bad Request`.
///
/// Directive-level failures never reach this type: they travel inside a
/// `200` response as an `ErrorResponse` event.
#[derive(Debug)]
pub struct ApiError(ProtocolError);

impl From<ProtocolError> for ApiError {
    fn from(err: ProtocolError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::info!(error = %self.0, "rejected smart home message");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn should_map_protocol_error_to_bad_request() {
        let response =
            ApiError::from(ProtocolError::UnsupportedPayloadVersion("2".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains('2'));
    }
}
