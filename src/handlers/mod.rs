//! HTTP handlers for categories, reviews, comments and users.

pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;
pub use categories::*;
pub use comments::*;
pub use reviews::*;
pub use users::*;

use crate::error::{AppError, INVALID_URL, METHOD_NOT_ALLOWED};
use crate::response::error_body;
use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for any path no route matched.
pub async fn invalid_url() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, error_body(INVALID_URL))
}

/// Fallback for a known path called with a method it does not serve.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, error_body(METHOD_NOT_ALLOWED))
}

/// Extractor rejections (bad JSON, bad query string) are client input errors.
pub(crate) fn rejected<R: std::fmt::Display>(rejection: R) -> AppError {
    tracing::debug!(%rejection, "request rejected");
    AppError::bad_request(crate::error::INVALID_REQUEST)
}
