//! Store access: the [`ReviewStore`] seam handlers are given, and its PostgreSQL implementation.

mod postgres;

pub use postgres::PgStore;

use crate::error::StoreError;
use crate::models::{Category, Comment, NewComment, Review, User};
use crate::sql::ReviewListQuery;
use async_trait::async_trait;

/// Every mutation is a single statement; callers never read-modify-write.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Round-trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn users(&self) -> Result<Vec<User>, StoreError>;

    /// Reviews with comment counts, filtered and ordered per `query`.
    async fn reviews(&self, query: &ReviewListQuery) -> Result<Vec<Review>, StoreError>;

    async fn review_by_id(&self, review_id: i32) -> Result<Option<Review>, StoreError>;

    /// Apply `votes += delta`. `None` when no review has that id.
    /// A result outside the column range fails with `NumericValueOutOfRange`.
    async fn add_review_votes(&self, review_id: i32, delta: i32) -> Result<Option<Review>, StoreError>;

    async fn comments_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, StoreError>;

    async fn comment_by_id(&self, comment_id: i32) -> Result<Option<Comment>, StoreError>;

    /// Insert with store-assigned id, timestamp and zero votes.
    /// Missing fields fail with `NotNullViolation`, unknown users with `ForeignKeyViolation`.
    async fn insert_comment(&self, review_id: i32, comment: &NewComment) -> Result<Comment, StoreError>;

    async fn delete_comment(&self, comment_id: i32) -> Result<(), StoreError>;
}
