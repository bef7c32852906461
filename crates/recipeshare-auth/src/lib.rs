//! # recipeshare-auth
//!
//! Session lifecycle for the RecipeShare client.
//!
//! ## Modules
//!
//! - `session`: the [`SessionStore`] with login/logout, the persisted token and
//!   session, and a replay-one broadcast of the current session

pub mod session;

pub use session::{LOGIN_PATH, SessionStore};
