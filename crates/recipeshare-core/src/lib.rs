//! # recipeshare-core
//!
//! Core crate for the RecipeShare client. Contains the seam traits,
//! configuration schemas, domain types (session, users, recipes), and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other RecipeShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, NormalizedError};
pub use result::AppResult;
