//! Recipe service and client-side sorting.

pub mod service;
pub mod sort;

pub use service::RecipeService;
pub use sort::{ByCalories, ByCookTime, ByTitle, RecipeSorter, SortKey, SortStrategy};
