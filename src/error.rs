//! Typed errors and HTTP mapping.
//!
//! Every failure reaching the transport boundary is an [`AppError`]. [`classify`] turns it
//! into a status and a `msg` by walking a fixed chain: store SQLSTATE codes first, then
//! domain-signalled status/message pairs, then the internal-error fallback.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

pub const INVALID_REQUEST: &str = "Invalid request";
pub const INVALID_FORMAT: &str = "Invalid format";
pub const INVALID_QUERY: &str = "Invalid query";
pub const BAD_SORT_QUERY: &str = "Bad sort query";
pub const INVALID_URL: &str = "Invalid URL";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const USER_NOT_FOUND: &str = "User not found";
pub const REVIEW_NOT_FOUND: &str = "No review found with that ID";
pub const REVIEWS_NOT_FOUND: &str = "Reviews not found";
pub const COMMENT_NOT_FOUND: &str = "No comment found with that ID";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// PostgreSQL SQLSTATE codes the classifier recognises.
pub mod sqlstate {
    pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
    pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const NOT_NULL_VIOLATION: &str = "23502";
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("config load: {0}")]
    Load(String),
}

/// Failure reported by a [`crate::store::ReviewStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid text representation: {0}")]
    InvalidTextRepresentation(String),
    /// A value, such as `votes` after a delta, left its column's range.
    #[error("numeric value out of range: {0}")]
    NumericValueOutOfRange(String),
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error("not null violation: {0}")]
    NotNullViolation(String),
    #[error("database: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_owned();
                match db_err.code().as_deref() {
                    Some(sqlstate::INVALID_TEXT_REPRESENTATION) => Some(Self::InvalidTextRepresentation(message)),
                    Some(sqlstate::NUMERIC_VALUE_OUT_OF_RANGE) => Some(Self::NumericValueOutOfRange(message)),
                    Some(sqlstate::FOREIGN_KEY_VIOLATION) => Some(Self::ForeignKeyViolation(message)),
                    Some(sqlstate::NOT_NULL_VIOLATION) => Some(Self::NotNullViolation(message)),
                    _ => None,
                }
            }
            _ => None,
        };
        classified.unwrap_or(Self::Database(err))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn bad_request(msg: &str) -> Self {
        AppError::BadRequest(msg.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(err.into())
    }
}

/// Outcome of classification: the status and message sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub status: StatusCode,
    pub msg: String,
}

impl Classified {
    fn new(status: StatusCode, msg: &str) -> Self {
        Classified {
            status,
            msg: msg.to_string(),
        }
    }
}

type Classifier = fn(&AppError) -> Option<Classified>;

/// Consulted in order; the first classifier returning `Some` wins.
const CLASSIFIERS: &[Classifier] = &[classify_store_code, classify_domain];

fn classify_store_code(err: &AppError) -> Option<Classified> {
    let AppError::Store(store_err) = err else { return None };
    match store_err {
        StoreError::InvalidTextRepresentation(_) | StoreError::NumericValueOutOfRange(_) => {
            Some(Classified::new(StatusCode::BAD_REQUEST, INVALID_REQUEST))
        }
        StoreError::ForeignKeyViolation(_) => Some(Classified::new(StatusCode::NOT_FOUND, USER_NOT_FOUND)),
        StoreError::NotNullViolation(_) => Some(Classified::new(StatusCode::BAD_REQUEST, INVALID_FORMAT)),
        StoreError::Database(_) => None,
    }
}

fn classify_domain(err: &AppError) -> Option<Classified> {
    match err {
        AppError::NotFound(msg) => Some(Classified::new(StatusCode::NOT_FOUND, msg)),
        AppError::BadRequest(msg) => Some(Classified::new(StatusCode::BAD_REQUEST, msg)),
        _ => None,
    }
}

/// Map an error to its client-facing status and message. Unclassified errors are logged.
pub fn classify(err: &AppError) -> Classified {
    if let Some(classified) = CLASSIFIERS.iter().find_map(|classifier| classifier(err)) {
        if matches!(err, AppError::Store(_)) {
            tracing::debug!(error = %err, status = %classified.status, "store error classified");
        }
        return classified;
    }
    tracing::error!(error = ?err, "unhandled error");
    Classified::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Classified { status, msg } = classify(&self);
        (status, Json(ErrorBody { msg })).into_response()
    }
}
