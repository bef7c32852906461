//! Convenience result type alias for RecipeShare.

use crate::error::AppError;

/// A specialized `Result` type for RecipeShare client operations.
pub type AppResult<T> = Result<T, AppError>;
