//! Recipe type exchanged with `/api/recipe`.

use serde::{Deserialize, Serialize};

/// A recipe with optional nutrition facts.
///
/// `id` is `None` for a recipe that has not been created yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
}

impl Recipe {
    /// A new, unsaved recipe with the required fields.
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: None,
            title: title.into(),
            description: None,
            instructions: instructions.into(),
            cook_time_minutes: None,
            ingredients: ingredients.into(),
            calories: None,
            protein: None,
            fat: None,
            carbs: None,
        }
    }
}
