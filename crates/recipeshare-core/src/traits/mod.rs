//! Core traits defined in `recipeshare-core` and implemented by other crates.

pub mod store;
pub mod token;

pub use store::KeyValueStore;
pub use token::{StaticToken, TokenSource};
