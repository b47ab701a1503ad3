//! Schema bootstrap: create the database if missing, then the four tables.
//! Order follows foreign-key dependencies. Every statement is idempotent.

use crate::error::{AppError, ConfigError};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// `comments` rows are removed with their review.
const TABLES: &[(&str, &str)] = &[
    (
        "categories",
        r#"CREATE TABLE IF NOT EXISTS "categories" (
            "slug" VARCHAR PRIMARY KEY,
            "description" VARCHAR NOT NULL
        )"#,
    ),
    (
        "users",
        r#"CREATE TABLE IF NOT EXISTS "users" (
            "username" VARCHAR PRIMARY KEY,
            "name" VARCHAR NOT NULL,
            "avatar_url" VARCHAR NOT NULL
        )"#,
    ),
    (
        "reviews",
        r#"CREATE TABLE IF NOT EXISTS "reviews" (
            "review_id" SERIAL PRIMARY KEY,
            "title" VARCHAR NOT NULL,
            "category" VARCHAR NOT NULL REFERENCES "categories" ("slug"),
            "designer" VARCHAR NOT NULL,
            "owner" VARCHAR NOT NULL REFERENCES "users" ("username"),
            "review_body" VARCHAR NOT NULL,
            "review_img_url" VARCHAR NOT NULL DEFAULT 'https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg',
            "votes" INT NOT NULL DEFAULT 0,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )"#,
    ),
    (
        "comments",
        r#"CREATE TABLE IF NOT EXISTS "comments" (
            "comment_id" SERIAL PRIMARY KEY,
            "body" VARCHAR NOT NULL,
            "review_id" INT NOT NULL REFERENCES "reviews" ("review_id") ON DELETE CASCADE,
            "author" VARCHAR NOT NULL REFERENCES "users" ("username"),
            "votes" INT NOT NULL DEFAULT 0,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )"#,
    ),
];

/// Create categories, users, reviews and comments if they do not exist.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = name, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let path_start = url.rfind('/').ok_or_else(|| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    })? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
