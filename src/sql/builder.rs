//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for reviews, comments, categories and users.

use crate::models::NewComment;
use crate::sql::params::{ReviewListQuery, SortColumn};

const REVIEWS: &str = "reviews";
const COMMENTS: &str = "comments";

const REVIEW_COLUMNS: &[&str] = &[
    "review_id",
    "title",
    "category",
    "designer",
    "owner",
    "review_body",
    "review_img_url",
    "votes",
    "created_at",
];

const COMMENT_COLUMNS: &[&str] = &["comment_id", "review_id", "author", "body", "votes", "created_at"];

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i32),
    /// `None` binds SQL NULL.
    Text(Option<String>),
}

/// Quote identifier for PostgreSQL (safe: only from the constants above).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn qualified(table: &str, column: &str) -> String {
    format!("{}.{}", quoted(table), quoted(column))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn column_list(table: &str, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| qualified(table, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Review columns plus the comment count aggregate.
fn review_select_list() -> String {
    format!(
        "{}, COUNT({})::INT AS {}",
        column_list(REVIEWS, REVIEW_COLUMNS),
        qualified(COMMENTS, "comment_id"),
        quoted("comment_count")
    )
}

/// `reviews LEFT JOIN comments` with an optional WHERE, grouped per review.
fn review_aggregate(where_clause: &str) -> String {
    format!(
        "SELECT {} FROM {} LEFT JOIN {} ON {} = {}{} GROUP BY {}",
        review_select_list(),
        quoted(REVIEWS),
        quoted(COMMENTS),
        qualified(COMMENTS, "review_id"),
        qualified(REVIEWS, "review_id"),
        where_clause,
        qualified(REVIEWS, "review_id")
    )
}

fn sort_expression(column: SortColumn) -> String {
    if column.is_computed() {
        quoted(column.as_str())
    } else {
        qualified(REVIEWS, column.as_str())
    }
}

/// Listing with optional category filter, whitelisted ORDER BY and `review_id` as tie-break.
pub fn select_reviews(query: &ReviewListQuery) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match &query.category {
        Some(category) => {
            let n = q.push_param(BindValue::Text(Some(category.clone())));
            format!(" WHERE {} = ${}", qualified(REVIEWS, "category"), n)
        }
        None => String::new(),
    };
    let mut order_parts = vec![format!("{} {}", sort_expression(query.sort_by), query.order.as_sql())];
    if query.sort_by != SortColumn::ReviewId {
        order_parts.push(format!("{} ASC", qualified(REVIEWS, "review_id")));
    }
    q.sql = format!("{} ORDER BY {}", review_aggregate(&where_clause), order_parts.join(", "));
    q
}

/// Single review by primary key, same shape as the listing.
pub fn select_review_by_id(review_id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(review_id));
    let where_clause = format!(" WHERE {} = ${}", qualified(REVIEWS, "review_id"), n);
    q.sql = review_aggregate(&where_clause);
    q
}

/// Atomic `votes = votes + delta`, returning the updated review with its comment count.
pub fn update_review_votes(review_id: i32, delta: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let delta_n = q.push_param(BindValue::Int(delta));
    let id_n = q.push_param(BindValue::Int(review_id));
    let returning = REVIEW_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let updated_cols = column_list("updated", REVIEW_COLUMNS);
    q.sql = format!(
        "WITH {} AS (UPDATE {} SET {} = {} + ${} WHERE {} = ${} RETURNING {}) \
         SELECT {}, (SELECT COUNT(*)::INT FROM {} WHERE {} = {}) AS {} FROM {}",
        quoted("updated"),
        quoted(REVIEWS),
        quoted("votes"),
        quoted("votes"),
        delta_n,
        quoted("review_id"),
        id_n,
        returning,
        updated_cols,
        quoted(COMMENTS),
        qualified(COMMENTS, "review_id"),
        qualified("updated", "review_id"),
        quoted("comment_count"),
        quoted("updated")
    );
    q
}

/// Comments on one review, newest first.
pub fn select_comments_by_review_id(review_id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(review_id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${} ORDER BY {} DESC, {} DESC",
        column_list(COMMENTS, COMMENT_COLUMNS),
        quoted(COMMENTS),
        quoted("review_id"),
        n,
        quoted("created_at"),
        quoted("comment_id")
    );
    q
}

pub fn select_comment_by_id(comment_id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(comment_id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(COMMENTS, COMMENT_COLUMNS),
        quoted(COMMENTS),
        quoted("comment_id"),
        n
    );
    q
}

/// INSERT: id, votes and created_at come from column defaults. Absent fields bind NULL.
pub fn insert_comment(review_id: i32, comment: &NewComment) -> QueryBuf {
    let mut q = QueryBuf::new();
    let review_n = q.push_param(BindValue::Int(review_id));
    let author_n = q.push_param(BindValue::Text(comment.username.clone()));
    let body_n = q.push_param(BindValue::Text(comment.body.clone()));
    let returning = COMMENT_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES (${}, ${}, ${}) RETURNING {}",
        quoted(COMMENTS),
        quoted("review_id"),
        quoted("author"),
        quoted("body"),
        review_n,
        author_n,
        body_n,
        returning
    );
    q
}

/// DELETE by id, unconditional.
pub fn delete_comment(comment_id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(comment_id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(COMMENTS), quoted("comment_id"), n);
    q
}

pub fn select_categories() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {}, {} FROM {} ORDER BY {}",
        quoted("slug"),
        quoted("description"),
        quoted("categories"),
        quoted("slug")
    );
    q
}

pub fn select_users() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {}, {}, {} FROM {} ORDER BY {}",
        quoted("username"),
        quoted("name"),
        quoted("avatar_url"),
        quoted("users"),
        quoted("username")
    );
    q
}
