use crate::error::AppError;
use crate::response::success_many;
use crate::service::ReviewService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = ReviewService::users(state.store.as_ref()).await?;
    Ok(success_many("users", users))
}
