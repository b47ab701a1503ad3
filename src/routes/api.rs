//! Resource routes. Ids are taken as strings so non-numeric ids reach validation.
//! Each path answers unsupported methods with a JSON 405.

use crate::handlers::{
    delete_comment, get_review, list_categories, list_comments, list_reviews, list_users, method_not_allowed,
    patch_review_votes, post_comment,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(list_categories).fallback(method_not_allowed))
        .route("/api/reviews", get(list_reviews).fallback(method_not_allowed))
        .route(
            "/api/reviews/:review_id",
            get(get_review).patch(patch_review_votes).fallback(method_not_allowed),
        )
        .route(
            "/api/reviews/:review_id/comments",
            get(list_comments).post(post_comment).fallback(method_not_allowed),
        )
        .route("/api/comments/:comment_id", delete(delete_comment).fallback(method_not_allowed))
        .route("/api/users", get(list_users).fallback(method_not_allowed))
        .with_state(state)
}
