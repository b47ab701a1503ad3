//! Row types returned by the store and serialized to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// A review together with the number of comments attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    /// Computed by the store from a join on comments; never persisted.
    pub comment_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub review_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/reviews/:review_id/comments`.
///
/// Missing fields stay `None` and reach the store as NULL; unknown keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewComment {
    pub username: Option<String>,
    pub body: Option<String>,
}
