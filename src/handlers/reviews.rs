//! Review handlers: list, read, vote patch.

use super::rejected;
use crate::error::AppError;
use crate::response::{success_many, success_one};
use crate::service::{RequestValidator, ReviewService};
use crate::sql::{ReviewListParams, ReviewListQuery};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list_reviews(
    State(state): State<AppState>,
    params: Result<Query<ReviewListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(rejected)?;
    let query = ReviewListQuery::from_params(&params)?;
    let reviews = ReviewService::list_reviews(state.store.as_ref(), &query).await?;
    Ok(success_many("reviews", reviews))
}

pub async fn get_review(
    State(state): State<AppState>,
    review_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id.map_err(rejected)?;
    let review_id = RequestValidator::path_id(&review_id)?;
    let review = ReviewService::review_by_id(state.store.as_ref(), review_id).await?;
    Ok(success_one("review", review))
}

pub async fn patch_review_votes(
    State(state): State<AppState>,
    review_id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(review_id) = review_id.map_err(rejected)?;
    let review_id = RequestValidator::path_id(&review_id)?;
    let Json(body) = body.map_err(rejected)?;
    let delta = RequestValidator::inc_votes(&body)?;
    let review = ReviewService::edit_review_votes(state.store.as_ref(), review_id, delta).await?;
    Ok(success_one("review", review))
}
