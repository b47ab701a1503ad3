//! ReviewService: check-then-act operations over an injected store.

mod reviews;
mod validation;
pub use reviews::ReviewService;
pub use validation::RequestValidator;
