//! # recipeshare-service
//!
//! Client-side services for the RecipeShare API. Each service issues its
//! requests through a shared [`ApiClient`](recipeshare_http::ApiClient), so
//! every call gets the same auth injection, sanitization, and error
//! normalization.
//!
//! Services follow constructor injection: dependencies are passed in at
//! construction time, and [`ClientContext`] wires the standard set.

pub mod context;
pub mod facade;
pub mod recipe;
pub mod user;

pub use context::ClientContext;
pub use facade::ApiFacade;
pub use recipe::{
    ByCalories, ByCookTime, ByTitle, RecipeService, RecipeSorter, SortKey, SortStrategy,
};
pub use user::UserService;
