use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use tracing::error;

/// JSON error envelope: `{"error", "detail", "retryable"}`.
///
/// `retryable` marks failures where re-triggering the same action is the
/// expected recovery (store or provider hiccups); validation and
/// configuration problems are not.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    title: &'static str,
    detail: Option<String>,
    retryable: bool,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, retryable: false }
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.title, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail,
            "retryable": self.retryable,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg))
            }
            ServiceError::NotConfigured => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Email service is not configured",
                None,
            ),
            ServiceError::Gateway(err) => {
                Self::new(StatusCode::BAD_GATEWAY, "Store Unavailable", Some(err.to_string()))
                    .retryable()
            }
            ServiceError::Mailer(err) => {
                Self::new(StatusCode::BAD_GATEWAY, "Email Delivery Failed", Some(err.to_string()))
                    .retryable()
            }
        }
    }
}
