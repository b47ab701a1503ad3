//! Runtime configuration: types and environment loading.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
