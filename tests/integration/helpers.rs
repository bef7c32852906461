//! Shared test helpers for integration tests.
//!
//! [`TestBackend`] is a small in-process RecipeShare API served by axum on an
//! ephemeral port. Its error bodies deliberately contain internal details
//! so tests can check that none of them reach the caller.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use recipeshare::ClientContext;
use recipeshare::config::ClientConfig;

pub const EMAIL: &str = "chef@example.com";
pub const PASSWORD: &str = "password123";
pub const TOKEN: &str = "token-abc";
pub const USER_ID: i64 = 1;

/// Leaked by the backend on failures; must never appear in client errors.
pub const INTERNAL_DETAIL: &str = "at com.recipeshare.UserController(UserController.java:42)";

/// Mutable state behind the fake API.
#[derive(Default)]
pub struct BackendState {
    /// Recipes by id.
    pub recipes: Mutex<BTreeMap<i64, Value>>,
    /// `Authorization` header of every request, in arrival order.
    pub auth_headers: Mutex<Vec<Option<String>>>,
}

impl BackendState {
    fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.auth_headers.lock().unwrap().push(value);
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        self.record(headers);
        let expected = format!("Bearer {TOKEN}");
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some(expected.as_str())
    }
}

/// A running fake backend.
pub struct TestBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
}

impl TestBackend {
    /// Start the backend on 127.0.0.1 with an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(BackendState::default());
        {
            let mut recipes = state.recipes.lock().unwrap();
            recipes.insert(
                1,
                json!({
                    "id": 1, "userId": USER_ID,
                    "title": "<script>alert(1)</script>Cake",
                    "ingredients": "flour &amp; sugar",
                    "instructions": "<b>Bake</b> it",
                    "cookTimeMinutes": 45, "calories": 420
                }),
            );
            recipes.insert(
                2,
                json!({
                    "id": 2, "userId": USER_ID,
                    "title": "Apple pie",
                    "ingredients": "apples",
                    "instructions": "bake",
                    "cookTimeMinutes": 30
                }),
            );
            recipes.insert(
                3,
                json!({
                    "id": 3, "userId": USER_ID,
                    "title": "banana bread",
                    "ingredients": "bananas",
                    "instructions": "bake",
                    "calories": 250
                }),
            );
        }

        let router = Router::new()
            .route("/api/users/login", post(login))
            .route("/api/users/{id}", get(get_user).put(update_user))
            .route("/api/users/{id}/with-recipes", get(user_with_recipes))
            .route("/api/recipe", post(create_recipe))
            .route("/api/recipe/{id}", get(get_recipe).delete(delete_recipe))
            .route("/api/recipe/users/{id}", get(recipes_by_user))
            .route("/api/boom", get(boom))
            .route("/api/teapot", get(teapot))
            .route("/api/text", get(text))
            .route("/api/slow", get(slow))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Test backend crashed");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config pointing at this backend with in-memory session storage.
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api.base_url = self.base_url();
        config.api.timeout_seconds = 1;
        config.storage.backend = "memory".into();
        config
    }

    /// A client context against this backend.
    pub async fn client(&self) -> ClientContext {
        ClientContext::from_config(&self.config())
            .await
            .expect("Failed to build client")
    }

    /// A client context that is already logged in.
    pub async fn logged_in_client(&self) -> ClientContext {
        let ctx = self.client().await;
        ctx.session
            .login(&ctx.client, &recipeshare::types::Credentials::new(EMAIL, PASSWORD))
            .await
            .expect("Login failed");
        ctx
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.state.auth_headers.lock().unwrap().clone()
    }
}

fn leaky_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "message": message,
            "trace": INTERNAL_DETAIL,
            "sql": "SELECT * FROM users WHERE password_hash = '...'"
        })),
    )
        .into_response()
}

async fn login(State(state): State<Arc<BackendState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record(&headers);
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Json(json!({
            "userId": USER_ID,
            "token": TOKEN,
            "username": "<b>chef</b>",
            "email": EMAIL
        }))
        .into_response()
    } else {
        leaky_error(StatusCode::UNAUTHORIZED, &format!("Bad credentials for {}", body["email"]))
    }
}

async fn get_user(State(state): State<Arc<BackendState>>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !state.authorized(&headers) {
        return leaky_error(StatusCode::UNAUTHORIZED, "JWT missing");
    }
    if id != USER_ID {
        return leaky_error(StatusCode::NOT_FOUND, &format!("No row for user {id}"));
    }
    Json(json!({
        "id": USER_ID,
        "username": "chef",
        "email": EMAIL,
        "bio": "<script>document.cookie</script>Loves &lt;i&gt;cake&lt;/i&gt;"
    }))
    .into_response()
}

async fn update_user(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return leaky_error(StatusCode::UNAUTHORIZED, "JWT missing");
    }
    if body.get("email").is_some_and(|e| e == "taken@example.com") {
        return leaky_error(StatusCode::CONFLICT, "duplicate key value violates unique constraint");
    }
    let mut user = json!({"id": id, "username": "chef", "email": EMAIL});
    if let (Some(target), Some(patch)) = (user.as_object_mut(), body.as_object()) {
        for (k, v) in patch {
            target.insert(k.clone(), v.clone());
        }
    }
    Json(user).into_response()
}

async fn user_with_recipes(State(state): State<Arc<BackendState>>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    state.record(&headers);
    let recipes: Vec<Value> = state.recipes.lock().unwrap().values().cloned().collect();
    Json(json!({"userId": id, "username": "chef", "email": EMAIL, "recipes": recipes})).into_response()
}

async fn get_recipe(State(state): State<Arc<BackendState>>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    state.record(&headers);
    match state.recipes.lock().unwrap().get(&id) {
        Some(recipe) => Json(recipe.clone()).into_response(),
        None => leaky_error(StatusCode::NOT_FOUND, &format!("Recipe {id} not in table recipes")),
    }
}

async fn create_recipe(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return leaky_error(StatusCode::UNAUTHORIZED, "JWT missing");
    }
    if body["title"] == "dup" {
        return leaky_error(StatusCode::UNPROCESSABLE_ENTITY, "constraint recipes_title_check");
    }
    let mut recipes = state.recipes.lock().unwrap();
    let id = recipes.keys().max().copied().unwrap_or(0) + 1;
    body["id"] = json!(id);
    body["userId"] = json!(USER_ID);
    recipes.insert(id, body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn delete_recipe(State(state): State<Arc<BackendState>>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !state.authorized(&headers) {
        return leaky_error(StatusCode::FORBIDDEN, "role check failed");
    }
    state.recipes.lock().unwrap().remove(&id);
    StatusCode::NO_CONTENT.into_response()
}

async fn recipes_by_user(State(state): State<Arc<BackendState>>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    state.record(&headers);
    let recipes: Vec<Value> = state
        .recipes
        .lock()
        .unwrap()
        .values()
        .filter(|r| r["userId"] == id)
        .cloned()
        .collect();
    Json(recipes).into_response()
}

async fn boom() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "text/html")],
        format!("<html><body>upstream failed {INTERNAL_DETAIL}</body></html>"),
    )
        .into_response()
}

async fn teapot() -> Response {
    leaky_error(StatusCode::IM_A_TEAPOT, "short and stout")
}

async fn text() -> Response {
    ([(header::CONTENT_TYPE, "text/plain")], "<b>not json</b>").into_response()
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"late": true})).into_response()
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    addr
}
