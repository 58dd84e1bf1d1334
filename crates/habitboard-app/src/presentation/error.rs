//! HTTP-facing error type.
//!
//! Domain errors carry stable numeric codes; this module maps them onto HTTP
//! status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use habitboard_domain::shared::{ErrorCode, ErrorSeverity};
use habitboard_domain::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub severity: ErrorSeverity,
    pub recoverable: bool,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            severity: code.severity(),
            recoverable: code.is_recoverable(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::HabitNotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InfrastructureError, message)
    }

    /// HTTP status for the error's code range. Not-found codes map to 404,
    /// caller mistakes to 400, everything else to 500.
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            2000..=2999 => StatusCode::NOT_FOUND,
            6000..=6999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self {
            code: error.code().code(),
            message: error.message().to_string(),
            severity: error.severity(),
            recoverable: error.is_recoverable(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self::infrastructure(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Request rejected: {}", self);
        }
        let body = Json(json!({
            "error": self.message,
            "code": self.code,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::from(DomainError::HabitNotFound("abc".to_string()));
        assert_eq!(error.code, 2001);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::from(DomainError::Validation("Invalid month: 13".to_string()));
        assert_eq!(error.code, 6001);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let error = ApiError::from(DomainError::InvalidInput("bad frequency".to_string()));
        assert_eq!(error.code, 6002);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_and_infrastructure_map_to_500() {
        let error = ApiError::from(DomainError::Repository("db down".to_string()));
        assert_eq!(error.code, 4001);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = ApiError::infrastructure("disk full");
        assert_eq!(error.code, 5001);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let error = ApiError::not_found("Habit not found: abc");
        assert_eq!(error.to_string(), "[2001] Habit not found: abc");
    }
}
