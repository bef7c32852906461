//! # recipeshare
//!
//! Client library for the RecipeShare REST API.
//!
//! Every request goes through one [`Pipeline`](pipeline::Pipeline):
//! the bearer token from the [`SessionStore`] is attached, successful JSON
//! bodies have markup stripped from every string, and failures are reduced
//! to a [`NormalizedError`] carrying only a status code and a fixed message.
//!
//! Most callers start from [`ClientContext::from_config`].

pub use recipeshare_auth as auth;
pub use recipeshare_http as pipeline;
pub use recipeshare_service as service;
pub use recipeshare_storage as storage;

pub use recipeshare_core::{AppError, AppResult, ErrorKind, NormalizedError};
pub use recipeshare_core::{config, traits, types};

pub use recipeshare_auth::SessionStore;
pub use recipeshare_http::{ApiClient, ApiRequest, ApiResponse, ResponseBody};
pub use recipeshare_service::{ApiFacade, ClientContext, RecipeService, UserService};
