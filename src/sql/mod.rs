//! Safe SQL builder: identifiers from fixed whitelists only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
