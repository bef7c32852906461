//! Recipe operations against `/api/recipe`.

use futures::future::join_all;
use tracing::{info, warn};

use recipeshare_core::error::AppError;
use recipeshare_core::result::AppResult;
use recipeshare_core::types::Recipe;
use recipeshare_http::ApiClient;

const RECIPES_PATH: &str = "/api/recipe";

/// Recipe CRUD plus bulk and per-user lookups.
#[derive(Debug, Clone)]
pub struct RecipeService {
    /// Shared API client.
    client: ApiClient,
}

impl RecipeService {
    /// Creates a new recipe service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches a single recipe.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Recipe> {
        self.client.get(&format!("{RECIPES_PATH}/{id}")).await
    }

    /// Fetches several recipes concurrently.
    ///
    /// Lookups that fail are logged and left out; the rest keep the order
    /// of `ids`.
    pub async fn get_by_ids(&self, ids: &[i64]) -> Vec<Recipe> {
        let lookups = ids.iter().map(|&id| async move { (id, self.get_by_id(id).await) });

        join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!(recipe_id = id, status = ?e.status_code(), "Skipping recipe that failed to load");
                    None
                }
            })
            .collect()
    }

    /// Creates a recipe.
    pub async fn create(&self, recipe: &Recipe) -> AppResult<Recipe> {
        validate(recipe)?;
        let created: Recipe = self.client.post(RECIPES_PATH, recipe).await?;
        info!(recipe_id = ?created.id, title = %created.title, "Recipe created");
        Ok(created)
    }

    /// Replaces a recipe.
    pub async fn update(&self, id: i64, recipe: &Recipe) -> AppResult<Recipe> {
        validate(recipe)?;
        let updated: Recipe = self
            .client
            .put(&format!("{RECIPES_PATH}/{id}"), recipe)
            .await?;
        info!(recipe_id = id, "Recipe updated");
        Ok(updated)
    }

    /// Deletes a recipe.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("{RECIPES_PATH}/{id}")).await?;
        info!(recipe_id = id, "Recipe deleted");
        Ok(())
    }

    /// All recipes owned by a user.
    pub async fn get_by_user_id(&self, user_id: i64) -> AppResult<Vec<Recipe>> {
        self.client
            .get(&format!("{RECIPES_PATH}/users/{user_id}"))
            .await
    }
}

fn validate(recipe: &Recipe) -> AppResult<()> {
    if recipe.title.trim().is_empty() {
        return Err(AppError::validation("Recipe title cannot be empty"));
    }
    Ok(())
}
