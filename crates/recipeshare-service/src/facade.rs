//! Operations on "the logged-in user", resolved from the session store.

use std::sync::Arc;

use recipeshare_auth::SessionStore;
use recipeshare_core::error::AppError;
use recipeshare_core::result::AppResult;
use recipeshare_core::types::{Recipe, User, UserUpdate};

use crate::recipe::RecipeService;
use crate::user::UserService;

/// Resolves the current user id from the session store and delegates to
/// the user and recipe services.
///
/// Every operation fails with [`ErrorKind::NotLoggedIn`](recipeshare_core::ErrorKind::NotLoggedIn)
/// when no user id is stored, and with a session error when the stored
/// session is corrupted.
#[derive(Debug, Clone)]
pub struct ApiFacade {
    users: UserService,
    recipes: RecipeService,
    session: Arc<SessionStore>,
}

impl ApiFacade {
    /// Creates a new facade.
    pub fn new(users: UserService, recipes: RecipeService, session: Arc<SessionStore>) -> Self {
        Self {
            users,
            recipes,
            session,
        }
    }

    async fn require_user_id(&self) -> AppResult<i64> {
        self.session
            .current_user_id()
            .await?
            .ok_or_else(AppError::not_logged_in)
    }

    /// The logged-in user's profile.
    pub async fn current_user(&self) -> AppResult<User> {
        let id = self.require_user_id().await?;
        self.users.get_by_id(id).await
    }

    /// Updates the logged-in user's profile.
    pub async fn update_current_user(&self, update: &UserUpdate) -> AppResult<User> {
        let id = self.require_user_id().await?;
        self.users.update(id, update).await
    }

    /// Recipes owned by the logged-in user.
    pub async fn current_user_recipes(&self) -> AppResult<Vec<Recipe>> {
        let id = self.require_user_id().await?;
        self.recipes.get_by_user_id(id).await
    }

    /// Ends the session.
    pub async fn logout(&self) {
        self.session.logout().await;
    }
}
