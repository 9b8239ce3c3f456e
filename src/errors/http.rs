use crate::{
    domain::response::MessageResponse,
    errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Two-tier failure contract: expected business rejections travel as
/// 400 `{"message": ...}`, everything else collapses into
/// 500 `{"error": ...}` carrying the underlying error text.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::BadRequest("Invalid credentials".to_string())
            }

            ServiceError::AlreadyExists(msg) => HttpError::BadRequest(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::AlreadyExists(msg) => HttpError::BadRequest(msg),
                RepositoryError::Sqlx(err) => HttpError::Internal(err.to_string()),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse { message }),
            )
                .into_response(),

            HttpError::Internal(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_serializes_under_message_key() {
        let response = HttpError::BadRequest("Email already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already exists");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn internal_serializes_under_error_key() {
        let response = HttpError::Internal("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "connection refused");
        assert!(body.get("message").is_none());
    }

    #[test]
    fn invalid_credentials_maps_to_bad_request() {
        let err = HttpError::from(ServiceError::InvalidCredentials);
        match err {
            HttpError::BadRequest(msg) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_email_maps_to_bad_request() {
        let err = HttpError::from(ServiceError::AlreadyExists("Email already exists".to_string()));
        match err {
            HttpError::BadRequest(msg) => assert_eq!(msg, "Email already exists"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn store_errors_map_to_internal() {
        let repo_err = RepositoryError::Sqlx(sqlx::Error::PoolTimedOut);
        let err = HttpError::from(ServiceError::Repo(repo_err));
        assert!(matches!(err, HttpError::Internal(_)));
    }
}
