//! Integration tests for the request pipeline over a real HTTP connection.

mod helpers;

use recipeshare::config::ClientConfig;
use recipeshare::types::Recipe;
use recipeshare::{ApiRequest, ClientContext, ErrorKind, ResponseBody};

#[tokio::test]
async fn test_standard_stage_order() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    assert_eq!(
        ctx.client.pipeline().stages(),
        vec!["auth-injector", "response-sanitizer", "error-normalizer"]
    );
}

#[tokio::test]
async fn test_success_body_is_sanitized() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let recipe: Recipe = ctx.client.get("/api/recipe/1").await.unwrap();

    assert_eq!(recipe.title, "Cake");
    assert_eq!(recipe.ingredients, "flour & sugar");
    assert_eq!(recipe.instructions, "Bake it");
    assert_eq!(recipe.cook_time_minutes, Some(45));
    assert_eq!(recipe.calories, Some(420));
}

#[tokio::test]
async fn test_not_found_is_normalized_without_leaking() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.client.get::<Recipe>("/api/recipe/999").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Http);
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.user_message(), "The requested resource was not found.");
    let rendered = format!("{err} {err:?}");
    assert!(!rendered.contains("recipes"), "leaked: {rendered}");
    assert!(!rendered.contains(helpers::INTERNAL_DETAIL));
}

#[tokio::test]
async fn test_server_error_html_body_is_dropped() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.client.send(ApiRequest::get("/api/boom")).await.unwrap_err();

    assert_eq!(err.status_code(), Some(502));
    assert_eq!(err.user_message(), "A server error occurred. Please try again later.");
    assert!(!format!("{err:?}").contains("upstream"));
}

#[tokio::test]
async fn test_unlisted_status_gets_generic_message() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.client.send(ApiRequest::get("/api/teapot")).await.unwrap_err();

    assert_eq!(err.status_code(), Some(418));
    assert_eq!(err.user_message(), "An unexpected error occurred. Please try again.");
}

#[tokio::test]
async fn test_connection_refused_is_status_zero() {
    let mut config = ClientConfig::default();
    config.api.base_url = format!("http://{}", helpers::unused_addr().await);
    config.storage.backend = "memory".into();
    let ctx = ClientContext::from_config(&config).await.unwrap();

    let err = ctx.client.send(ApiRequest::get("/api/recipe/1")).await.unwrap_err();

    let normalized = err.normalized().unwrap();
    assert_eq!(normalized.status_code, 0);
    assert!(normalized.is_transport());
    assert_eq!(normalized.safe_message, "An unexpected error occurred. Please try again.");
}

#[tokio::test]
async fn test_timeout_is_status_zero() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.client.send(ApiRequest::get("/api/slow")).await.unwrap_err();

    assert_eq!(err.status_code(), Some(0));
}

#[tokio::test]
async fn test_non_json_success_passes_through() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let response = ctx.client.send(ApiRequest::get("/api/text")).await.unwrap();

    match response.body {
        ResponseBody::Raw(bytes) => assert_eq!(&bytes[..], b"<b>not json</b>"),
        other => panic!("expected raw body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_token_means_no_header() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.client.get::<serde_json::Value>("/api/users/1").await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.user_message(), "Authentication required. Please log in.");
    assert_eq!(backend.auth_headers(), vec![None]);
}
