//! Client-side recipe ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use recipeshare_core::error::AppError;
use recipeshare_core::types::Recipe;

/// An ordering over recipes.
///
/// Implementations must sort stably and leave the input untouched.
pub trait SortStrategy: Send + Sync {
    /// Short name of the ordering.
    fn name(&self) -> &'static str;

    /// Returns the recipes in this strategy's order.
    fn sort(&self, recipes: &[Recipe]) -> Vec<Recipe>;
}

/// Alphabetical by title, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTitle;

impl SortStrategy for ByTitle {
    fn name(&self) -> &'static str {
        "title"
    }

    fn sort(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut sorted = recipes.to_vec();
        sorted.sort_by_cached_key(|r| r.title.to_lowercase());
        sorted
    }
}

/// Shortest cook time first. Missing times count as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCookTime;

impl SortStrategy for ByCookTime {
    fn name(&self) -> &'static str {
        "cook-time"
    }

    fn sort(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut sorted = recipes.to_vec();
        sorted.sort_by_key(|r| r.cook_time_minutes.unwrap_or(0));
        sorted
    }
}

/// Fewest calories first. Missing values count as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCalories;

impl SortStrategy for ByCalories {
    fn name(&self) -> &'static str {
        "calories"
    }

    fn sort(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let mut sorted = recipes.to_vec();
        sorted.sort_by_key(|r| r.calories.unwrap_or(0));
        sorted
    }
}

/// Names of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Title,
    CookTime,
    Calories,
}

impl SortKey {
    /// The strategy this key names.
    pub fn strategy(self) -> Box<dyn SortStrategy> {
        match self {
            Self::Title => Box::new(ByTitle),
            Self::CookTime => Box::new(ByCookTime),
            Self::Calories => Box::new(ByCalories),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "cook-time" | "cook_time" | "cooktime" => Ok(Self::CookTime),
            "calories" => Ok(Self::Calories),
            other => Err(AppError::validation(format!("Unknown sort key: {other}"))),
        }
    }
}

/// Sorts recipes with a strategy that can be swapped at runtime.
pub struct RecipeSorter {
    strategy: Box<dyn SortStrategy>,
}

impl RecipeSorter {
    /// Creates a sorter using `strategy`.
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the current strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    /// Name of the current strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Sorts with the current strategy.
    pub fn sort(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        self.strategy.sort(recipes)
    }
}

impl Default for RecipeSorter {
    fn default() -> Self {
        Self::new(Box::new(ByTitle))
    }
}

impl fmt::Debug for RecipeSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeSorter")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
