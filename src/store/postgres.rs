//! [`ReviewStore`] over a `sqlx` PostgreSQL pool.

use super::ReviewStore;
use crate::error::StoreError;
use crate::models::{Category, Comment, NewComment, Review, User};
use crate::sql::{
    delete_comment, insert_comment, select_categories, select_comment_by_id, select_comments_by_review_id,
    select_review_by_id, select_reviews, select_users, update_review_votes, BindValue, QueryBuf, ReviewListQuery,
};
use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, PgPool, Postgres};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    async fn fetch_all<T>(&self, q: &QueryBuf) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_as(sqlx::query_as::<_, T>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional<T>(&self, q: &QueryBuf) -> Result<Option<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_as(sqlx::query_as::<_, T>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_one<T>(&self, q: &QueryBuf) -> Result<T, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_as(sqlx::query_as::<_, T>(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let result = bind(sqlx::query(&q.sql), &q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

fn bind_as<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    params: &'q [BindValue],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_deref()),
        };
    }
    query
}

fn bind<'q>(mut query: Query<'q, Postgres, PgArguments>, params: &'q [BindValue]) -> Query<'q, Postgres, PgArguments> {
    for p in params {
        query = match p {
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_deref()),
        };
    }
    query
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.fetch_all(&select_categories()).await
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        self.fetch_all(&select_users()).await
    }

    async fn reviews(&self, query: &ReviewListQuery) -> Result<Vec<Review>, StoreError> {
        self.fetch_all(&select_reviews(query)).await
    }

    async fn review_by_id(&self, review_id: i32) -> Result<Option<Review>, StoreError> {
        self.fetch_optional(&select_review_by_id(review_id)).await
    }

    async fn add_review_votes(&self, review_id: i32, delta: i32) -> Result<Option<Review>, StoreError> {
        self.fetch_optional(&update_review_votes(review_id, delta)).await
    }

    async fn comments_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, StoreError> {
        self.fetch_all(&select_comments_by_review_id(review_id)).await
    }

    async fn comment_by_id(&self, comment_id: i32) -> Result<Option<Comment>, StoreError> {
        self.fetch_optional(&select_comment_by_id(comment_id)).await
    }

    async fn insert_comment(&self, review_id: i32, comment: &NewComment) -> Result<Comment, StoreError> {
        self.fetch_one(&insert_comment(review_id, comment)).await
    }

    async fn delete_comment(&self, comment_id: i32) -> Result<(), StoreError> {
        let deleted = self.execute(&delete_comment(comment_id)).await?;
        tracing::debug!(comment_id, deleted, "comment delete");
        Ok(())
    }
}
