//! Review, comment, category and user operations.
//!
//! Operations on a review resolve it first, so a missing review always reports
//! "No review found with that ID" instead of a store constraint error.

use crate::error::{AppError, COMMENT_NOT_FOUND, REVIEWS_NOT_FOUND, REVIEW_NOT_FOUND};
use crate::models::{Category, Comment, NewComment, Review, User};
use crate::sql::ReviewListQuery;
use crate::store::ReviewStore;

pub struct ReviewService;

impl ReviewService {
    pub async fn categories(store: &dyn ReviewStore) -> Result<Vec<Category>, AppError> {
        Ok(store.categories().await?)
    }

    pub async fn users(store: &dyn ReviewStore) -> Result<Vec<User>, AppError> {
        Ok(store.users().await?)
    }

    /// A category filter that matches nothing is NotFound; an unfiltered empty list is not.
    pub async fn list_reviews(store: &dyn ReviewStore, query: &ReviewListQuery) -> Result<Vec<Review>, AppError> {
        let reviews = store.reviews(query).await?;
        if query.category.is_some() && reviews.is_empty() {
            return Err(AppError::not_found(REVIEWS_NOT_FOUND));
        }
        Ok(reviews)
    }

    pub async fn review_by_id(store: &dyn ReviewStore, review_id: i32) -> Result<Review, AppError> {
        store
            .review_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::not_found(REVIEW_NOT_FOUND))
    }

    /// Empty list when the review exists but has no comments.
    pub async fn comments_by_review_id(store: &dyn ReviewStore, review_id: i32) -> Result<Vec<Comment>, AppError> {
        Self::review_by_id(store, review_id).await?;
        Ok(store.comments_by_review_id(review_id).await?)
    }

    pub async fn create_comment(
        store: &dyn ReviewStore,
        review_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, AppError> {
        Self::review_by_id(store, review_id).await?;
        let created = store.insert_comment(review_id, comment).await?;
        tracing::info!(review_id, comment_id = created.comment_id, "comment created");
        Ok(created)
    }

    pub async fn delete_comment(store: &dyn ReviewStore, comment_id: i32) -> Result<(), AppError> {
        store
            .comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;
        store.delete_comment(comment_id).await?;
        tracing::info!(comment_id, "comment deleted");
        Ok(())
    }

    pub async fn edit_review_votes(store: &dyn ReviewStore, review_id: i32, delta: i32) -> Result<Review, AppError> {
        Self::review_by_id(store, review_id).await?;
        // The review can vanish between the check and the update.
        store
            .add_review_votes(review_id, delta)
            .await?
            .ok_or_else(|| AppError::not_found(REVIEW_NOT_FOUND))
    }
}
