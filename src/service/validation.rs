//! Request validation for path ids and patch bodies.

use crate::error::{AppError, INVALID_REQUEST};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Parse a numeric path segment such as `:review_id`.
    pub fn path_id(raw: &str) -> Result<i32, AppError> {
        raw.parse::<i32>().map_err(|_| AppError::bad_request(INVALID_REQUEST))
    }

    /// Extract `inc_votes` from a PATCH body. Must be a JSON integer within `i32`.
    pub fn inc_votes(body: &Value) -> Result<i32, AppError> {
        body.get("inc_votes")
            .and_then(Value::as_i64)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| AppError::bad_request(INVALID_REQUEST))
    }
}
