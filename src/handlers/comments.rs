//! Comment handlers: list and create under a review, delete by id.

use super::rejected;
use crate::error::AppError;
use crate::models::NewComment;
use crate::response::{success_created, success_many};
use crate::service::{RequestValidator, ReviewService};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list_comments(
    State(state): State<AppState>,
    review_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id.map_err(rejected)?;
    let review_id = RequestValidator::path_id(&review_id)?;
    let comments = ReviewService::comments_by_review_id(state.store.as_ref(), review_id).await?;
    Ok(success_many("comments", comments))
}

pub async fn post_comment(
    State(state): State<AppState>,
    review_id: Result<Path<String>, PathRejection>,
    body: Result<Json<NewComment>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id.map_err(rejected)?;
    let review_id = RequestValidator::path_id(&review_id)?;
    let Json(comment) = body.map_err(rejected)?;
    let created = ReviewService::create_comment(state.store.as_ref(), review_id, &comment).await?;
    Ok(success_created("comment", created))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    comment_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(comment_id) = comment_id.map_err(rejected)?;
    let comment_id = RequestValidator::path_id(&comment_id)?;
    ReviewService::delete_comment(state.store.as_ref(), comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
