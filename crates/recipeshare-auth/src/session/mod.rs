//! Session storage and broadcast.

pub mod store;

pub use store::{LOGIN_PATH, SessionStore};
