//! Wiring of the standard client: storage, session store, pipeline, and services.

use std::sync::Arc;

use tracing::info;

use recipeshare_auth::SessionStore;
use recipeshare_core::config::ClientConfig;
use recipeshare_core::result::AppResult;
use recipeshare_core::traits::store::KeyValueStore;
use recipeshare_http::{ApiClient, Transport};
use recipeshare_storage::StoreManager;

use crate::facade::ApiFacade;
use crate::recipe::RecipeService;
use crate::user::UserService;

/// Everything a caller needs to talk to the RecipeShare API.
///
/// The session store doubles as the pipeline's token source, so every
/// request carries whatever token is persisted at the moment it is sent.
#[derive(Debug, Clone)]
pub struct ClientContext {
    /// Session lifecycle.
    pub session: Arc<SessionStore>,
    /// Typed client over the standard pipeline.
    pub client: ApiClient,
    /// User operations.
    pub users: UserService,
    /// Recipe operations.
    pub recipes: RecipeService,
    /// Current-user operations.
    pub facade: ApiFacade,
}

impl ClientContext {
    /// Build the client from configuration, using the reqwest transport and
    /// the configured storage backend.
    pub async fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let storage = StoreManager::new(&config.storage).await?;
        let session = Arc::new(SessionStore::new(Arc::new(storage), &config.storage));
        let client = ApiClient::from_config(&config.api, session.clone())?;

        info!(
            base_url = %config.api.base_url,
            storage = %config.storage.backend,
            "Client initialized"
        );

        Ok(Self::assemble(session, client))
    }

    /// Build the client over explicit storage and transport.
    pub fn with_parts(
        storage: Arc<dyn KeyValueStore>,
        transport: Arc<dyn Transport>,
        config: &ClientConfig,
    ) -> Self {
        let session = Arc::new(SessionStore::new(storage, &config.storage));
        let client = ApiClient::with_transport(transport, session.clone());
        Self::assemble(session, client)
    }

    fn assemble(session: Arc<SessionStore>, client: ApiClient) -> Self {
        let users = UserService::new(client.clone());
        let recipes = RecipeService::new(client.clone());
        let facade = ApiFacade::new(users.clone(), recipes.clone(), session.clone());

        Self {
            session,
            client,
            users,
            recipes,
            facade,
        }
    }
}
