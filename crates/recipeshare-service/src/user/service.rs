//! User operations against `/api/users`.

use tracing::info;

use recipeshare_core::error::AppError;
use recipeshare_core::result::AppResult;
use recipeshare_core::types::{NewUser, User, UserUpdate, UserWithRecipes};
use recipeshare_http::ApiClient;

const USERS_PATH: &str = "/api/users";

/// Registration and profile operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Shared API client.
    client: ApiClient,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Registers a new user.
    pub async fn create(&self, user: &NewUser) -> AppResult<User> {
        if user.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if user.password.is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        let created: User = self.client.post(USERS_PATH, user).await?;
        info!(user_id = created.id, username = %created.username, "User registered");
        Ok(created)
    }

    /// Fetches a user profile.
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.client.get(&format!("{USERS_PATH}/{id}")).await
    }

    /// Applies a partial profile update.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> AppResult<User> {
        if update.is_empty() {
            return Err(AppError::validation("No profile fields to update"));
        }

        let updated: User = self.client.put(&format!("{USERS_PATH}/{id}"), update).await?;
        info!(user_id = id, "Profile updated");
        Ok(updated)
    }

    /// Deletes a user.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.client.delete(&format!("{USERS_PATH}/{id}")).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Fetches a user together with their recipes.
    pub async fn get_with_recipes(&self, id: i64) -> AppResult<UserWithRecipes> {
        self.client
            .get(&format!("{USERS_PATH}/{id}/with-recipes"))
            .await
    }
}
