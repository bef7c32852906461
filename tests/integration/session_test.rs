//! Integration tests for the session lifecycle.

mod helpers;

use recipeshare::traits::store::KeyValueStore;
use recipeshare::types::Credentials;
use recipeshare::{ClientContext, ErrorKind};

#[tokio::test]
async fn test_login_persists_and_authorizes_later_requests() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;
    let mut rx = ctx.session.subscribe();
    assert!(rx.borrow_and_update().is_none());

    let session = ctx
        .session
        .login(&ctx.client, &Credentials::new(helpers::EMAIL, helpers::PASSWORD))
        .await
        .unwrap();

    assert_eq!(session.user_id, helpers::USER_ID);
    assert_eq!(session.username, "chef");
    assert_eq!(ctx.session.token().await.unwrap().as_deref(), Some(helpers::TOKEN));
    assert_eq!(ctx.session.current_user_id().await.unwrap(), Some(helpers::USER_ID));
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().as_ref(), Some(&session));

    let me = ctx.facade.current_user().await.unwrap();
    assert_eq!(me.id, helpers::USER_ID);

    let headers = backend.auth_headers();
    assert_eq!(headers[0], None);
    assert_eq!(headers[1].as_deref(), Some("Bearer token-abc"));
}

#[tokio::test]
async fn test_failed_login_leaves_no_state() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;
    let rx = ctx.session.subscribe();

    let err = ctx
        .session
        .login(&ctx.client, &Credentials::new(helpers::EMAIL, "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.user_message(), "Authentication required. Please log in.");
    assert!(!format!("{err:?}").contains(helpers::EMAIL));
    assert!(!ctx.session.is_logged_in().await);
    assert_eq!(ctx.session.current_user_id().await.unwrap(), None);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_logout_stops_sending_token() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;
    ctx.facade.current_user().await.unwrap();

    ctx.facade.logout().await;

    assert!(ctx.session.current().is_none());
    let err = ctx.users.get_by_id(helpers::USER_ID).await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(backend.auth_headers().last().cloned().flatten(), None);

    let err = ctx.facade.current_user().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotLoggedIn);
}

#[tokio::test]
async fn test_file_session_survives_restart() {
    let backend = helpers::TestBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = backend.config();
    config.storage.backend = "file".into();
    config.storage.path = dir.path().join("session.json").to_string_lossy().into_owned();

    {
        let ctx = ClientContext::from_config(&config).await.unwrap();
        ctx.session
            .login(&ctx.client, &Credentials::new(helpers::EMAIL, helpers::PASSWORD))
            .await
            .unwrap();
    }

    let restarted = ClientContext::from_config(&config).await.unwrap();
    assert!(restarted.session.current().is_none());

    let restored = restarted.session.restore().await.unwrap().unwrap();
    assert_eq!(restored.user_id, helpers::USER_ID);
    assert_eq!(restarted.session.current(), Some(restored));

    let me = restarted.facade.current_user().await.unwrap();
    assert_eq!(me.email, helpers::EMAIL);
}

#[tokio::test]
async fn test_corrupt_persisted_session_fails_loudly() {
    let backend = helpers::TestBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut config = backend.config();
    config.storage.backend = "file".into();
    config.storage.path = dir.path().join("session.json").to_string_lossy().into_owned();

    let store = recipeshare::storage::FileStore::new(&config.storage.path)
        .await
        .unwrap();
    store.set("current_user", "invalid{json").await.unwrap();

    let ctx = ClientContext::from_config(&config).await.unwrap();
    let err = ctx.session.current_user_id().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Session);

    let err = ctx.facade.current_user_recipes().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Session);
}
