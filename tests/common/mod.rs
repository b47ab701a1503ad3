//! Test support: an in-memory [`ReviewStore`] seeded with fixture data, and request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use board_game_reviews::models::{Category, Comment, NewComment, Review, User};
use board_game_reviews::sql::{ReviewListQuery, SortColumn, SortOrder};
use board_game_reviews::{app, AppState, ReviewStore, StoreError};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct StoredReview {
    review_id: i32,
    title: String,
    category: String,
    designer: String,
    owner: String,
    review_body: String,
    review_img_url: String,
    votes: i32,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    users: Vec<User>,
    reviews: Vec<StoredReview>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

impl Tables {
    fn comment_count(&self, review_id: i32) -> i32 {
        self.comments.iter().filter(|c| c.review_id == review_id).count() as i32
    }

    fn review(&self, r: &StoredReview) -> Review {
        Review {
            review_id: r.review_id,
            title: r.title.clone(),
            category: r.category.clone(),
            designer: r.designer.clone(),
            owner: r.owner.clone(),
            review_body: r.review_body.clone(),
            review_img_url: r.review_img_url.clone(),
            votes: r.votes,
            created_at: r.created_at,
            comment_count: self.comment_count(r.review_id),
        }
    }
}

/// Behaves like the PostgreSQL schema: FK and NOT NULL checks on insert, relative vote updates.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: bool,
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

impl MemoryStore {
    pub fn seeded() -> Self {
        let categories = [
            ("euro game", "Abstact games that involve little luck"),
            ("social deduction", "Players attempt to uncover each other's hidden role"),
            ("dexterity", "Games involving physical skill"),
            ("children's games", "Games suitable for children"),
        ]
        .into_iter()
        .map(|(slug, description)| Category {
            slug: slug.into(),
            description: description.into(),
        })
        .collect();

        let users = [
            ("mallionaire", "haz"),
            ("philippaclaire9", "philippa"),
            ("bainesface", "sarah"),
            ("dav3rid", "dave"),
        ]
        .into_iter()
        .map(|(username, name)| User {
            username: username.into(),
            name: name.into(),
            avatar_url: format!("https://avatars.example.com/{username}.png"),
        })
        .collect();

        let reviews = [
            (1, "Agricola", "euro game", "Uwe Rosenberg", "mallionaire", 1, 1_610_964_020),
            (2, "Jenga", "dexterity", "Leslie Scott", "philippaclaire9", 5, 1_610_964_101),
            (3, "Ultimate Werewolf", "social deduction", "Akihisa Okui", "bainesface", 5, 1_610_964_101),
            (4, "Dolor reprehenderit", "social deduction", "Gamey McGameface", "mallionaire", 7, 1_611_311_824),
            (5, "Proident tempor et.", "social deduction", "Seymour Buttz", "mallionaire", 5, 1_610_010_368),
            (6, "Occaecat consequat officia in quis commodo.", "social deduction", "Ollie Tabooger", "mallionaire", 8, 1_600_010_368),
            (7, "Mollit elit qui incididunt veniam occaecat cupidatat", "social deduction", "Avery Wunzboogerz", "mallionaire", 9, 1_611_311_824),
            (8, "One Night Ultimate Werewolf", "social deduction", "Akihisa Okui", "mallionaire", 5, 1_610_964_101),
            (9, "A truly Quacking Game; Quacks of Quedlinburg", "social deduction", "Wolfgang Warsch", "mallionaire", 10, 1_610_964_101),
            (10, "Build you own tour de Yorkshire", "social deduction", "Asger Harding Granerud", "mallionaire", 10, 1_610_964_101),
        ]
        .into_iter()
        .map(|(review_id, title, category, designer, owner, votes, created)| StoredReview {
            review_id,
            title: title.into(),
            category: category.into(),
            designer: designer.into(),
            owner: owner.into(),
            review_body: format!("{title}: a review"),
            review_img_url: format!("https://images.example.com/reviews/{review_id}.jpeg"),
            votes,
            created_at: at(created),
        })
        .collect();

        let comments: Vec<Comment> = [
            (1, 2, "bainesface", "I loved this game too!", 16, 1_511_354_613),
            (2, 3, "mallionaire", "My dog loved this game too!", 13, 1_610_964_545),
            (3, 3, "philippaclaire9", "I didn't know dogs could play games", 10, 1_610_964_588),
            (4, 2, "bainesface", "EPIC board game!", 16, 1_511_354_163),
            (5, 2, "mallionaire", "Now this is a story all about how, board games turned my life upside down", 13, 1_610_965_445),
            (6, 3, "philippaclaire9", "Not sure about dogs, but my cat likes to get involved with board games", 10, 1_616_874_588),
        ]
        .into_iter()
        .map(|(comment_id, review_id, author, body, votes, created)| Comment {
            comment_id,
            review_id,
            author: author.into(),
            body: body.into(),
            votes,
            created_at: at(created),
        })
        .collect();

        let next_comment_id = comments.len() as i32 + 1;
        MemoryStore {
            tables: Mutex::new(Tables {
                categories,
                users,
                reviews,
                comments,
                next_comment_id,
            }),
            offline: false,
        }
    }

    /// Every call fails as if the pool could not hand out a connection.
    pub fn offline() -> Self {
        MemoryStore {
            tables: Mutex::new(Tables::default()),
            offline: true,
        }
    }

    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        if self.offline {
            return Err(unavailable());
        }
        Ok(self.tables.lock().expect("store lock poisoned"))
    }
}

fn compare(a: &Review, b: &Review, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Category => a.category.cmp(&b.category),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Designer => a.designer.cmp(&b.designer),
        SortColumn::Owner => a.owner.cmp(&b.owner),
        SortColumn::ReviewId => a.review_id.cmp(&b.review_id),
        SortColumn::ReviewImgUrl => a.review_img_url.cmp(&b.review_img_url),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.tables().map(|_| ())
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables()?.categories.clone())
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables()?.users.clone())
    }

    async fn reviews(&self, query: &ReviewListQuery) -> Result<Vec<Review>, StoreError> {
        let tables = self.tables()?;
        let mut reviews: Vec<Review> = tables
            .reviews
            .iter()
            .filter(|r| query.category.as_deref().map_or(true, |c| r.category == c))
            .map(|r| tables.review(r))
            .collect();
        reviews.sort_by(|a, b| {
            let primary = match query.order {
                SortOrder::Asc => compare(a, b, query.sort_by),
                SortOrder::Desc => compare(b, a, query.sort_by),
            };
            primary.then(a.review_id.cmp(&b.review_id))
        });
        Ok(reviews)
    }

    async fn review_by_id(&self, review_id: i32) -> Result<Option<Review>, StoreError> {
        let tables = self.tables()?;
        Ok(tables.reviews.iter().find(|r| r.review_id == review_id).map(|r| tables.review(r)))
    }

    async fn add_review_votes(&self, review_id: i32, delta: i32) -> Result<Option<Review>, StoreError> {
        let mut tables = self.tables()?;
        let Some(stored) = tables.reviews.iter_mut().find(|r| r.review_id == review_id) else {
            return Ok(None);
        };
        stored.votes = stored
            .votes
            .checked_add(delta)
            .ok_or_else(|| StoreError::NumericValueOutOfRange("integer out of range".into()))?;
        let tables = &*tables;
        Ok(tables.reviews.iter().find(|r| r.review_id == review_id).map(|r| tables.review(r)))
    }

    async fn comments_by_review_id(&self, review_id: i32) -> Result<Vec<Comment>, StoreError> {
        let tables = self.tables()?;
        let mut comments: Vec<Comment> = tables.comments.iter().filter(|c| c.review_id == review_id).cloned().collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.comment_id.cmp(&a.comment_id)));
        Ok(comments)
    }

    async fn comment_by_id(&self, comment_id: i32) -> Result<Option<Comment>, StoreError> {
        Ok(self.tables()?.comments.iter().find(|c| c.comment_id == comment_id).cloned())
    }

    async fn insert_comment(&self, review_id: i32, comment: &NewComment) -> Result<Comment, StoreError> {
        let mut tables = self.tables()?;
        let (Some(author), Some(body)) = (comment.username.clone(), comment.body.clone()) else {
            return Err(StoreError::NotNullViolation("null value in column violates not-null constraint".into()));
        };
        if !tables.reviews.iter().any(|r| r.review_id == review_id) {
            return Err(StoreError::ForeignKeyViolation("comments_review_id_fkey".into()));
        }
        if !tables.users.iter().any(|u| u.username == author) {
            return Err(StoreError::ForeignKeyViolation("comments_author_fkey".into()));
        }
        let created = Comment {
            comment_id: tables.next_comment_id,
            review_id,
            author,
            body,
            votes: 0,
            created_at: Utc::now(),
        };
        tables.next_comment_id += 1;
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn delete_comment(&self, comment_id: i32) -> Result<(), StoreError> {
        self.tables()?.comments.retain(|c| c.comment_id != comment_id);
        Ok(())
    }
}

pub fn test_app() -> Router {
    app_with(Arc::new(MemoryStore::seeded()))
}

pub fn app_with(store: Arc<dyn ReviewStore>) -> Router {
    app(AppState::new(store), 64 * 1024)
}

/// Send one request; an empty response body comes back as `Value::Null`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
