//! Error types for the users service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::user::UserId;

/// Result type for users service operations
pub type UserResult<T> = Result<T, UserError>;

/// Error types for users service operations
///
/// The store itself never fails: every variant here is produced at the
/// request boundary, either while validating input or while encoding a
/// response.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Request body could not be decoded
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Required name field was missing or empty
    #[error("name field is required")]
    MissingName,

    /// Path identifier is not an integer
    #[error("invalid user ID format: {0:?}")]
    InvalidId(String),

    /// User not found
    #[error("user with ID {0} not found")]
    NotFound(UserId),

    /// A stored user could not be encoded
    #[error("error encoding user: {0}")]
    Encode(#[source] serde_json::Error),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::InvalidBody(_) | UserError::MissingName | UserError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the machine readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            UserError::InvalidBody(_) => "BODY_INVALID",
            UserError::MissingName => "NAME_REQUIRED",
            UserError::InvalidId(_) => "ID_INVALID",
            UserError::NotFound(_) => "USER_UNKNOWN",
            UserError::Encode(_) => "UNKNOWN",
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        let body = ErrorResponse {
            errors: vec![ErrorDetail { code, message }],
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(UserError::MissingName.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            UserError::InvalidId("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::NotFound(UserId::new(7)).status_code(),
            StatusCode::NOT_FOUND
        );

        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            UserError::InvalidBody(err).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            UserError::NotFound(UserId::new(999)).to_string(),
            "user with ID 999 not found"
        );
        assert_eq!(
            UserError::InvalidId("abc".into()).to_string(),
            "invalid user ID format: \"abc\""
        );
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = UserError::NotFound(UserId::new(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["errors"][0]["code"], "USER_UNKNOWN");
        assert_eq!(body["errors"][0]["message"], "user with ID 3 not found");
    }
}
