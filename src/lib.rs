//! Board game reviews: REST API over categories, reviews, comments and users.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load_from_env, AppConfig};
pub use error::{classify, AppError, Classified, ConfigError, StoreError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use response::{error_body, success_created, success_many, success_one};
pub use routes::{api_routes, app, common_routes};
pub use service::ReviewService;
pub use state::AppState;
pub use store::{PgStore, ReviewStore};
