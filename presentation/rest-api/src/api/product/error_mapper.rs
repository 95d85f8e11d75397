use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.title_empty".to_string(),
            ),
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),
            // Constraint-violation detail is safe to return verbatim
            ProductError::Duplicated(detail) => {
                (StatusCode::BAD_REQUEST, "DuplicateError", detail.clone())
            }
            // Full detail was already logged at the persistence boundary
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence, check server logs".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
