//! Integration tests for the user and recipe services.

mod helpers;

use recipeshare::ErrorKind;
use recipeshare::service::{RecipeSorter, SortKey};
use recipeshare::types::{Recipe, UserUpdate};

#[tokio::test]
async fn test_current_user_profile_is_sanitized() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;

    let me = ctx.facade.current_user().await.unwrap();

    assert_eq!(me.bio.as_deref(), Some("Loves cake"));
}

#[tokio::test]
async fn test_facade_requires_login() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let err = ctx.facade.current_user_recipes().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotLoggedIn);
    assert!(backend.auth_headers().is_empty());
}

#[tokio::test]
async fn test_get_by_ids_skips_missing() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.client().await;

    let recipes = ctx.recipes.get_by_ids(&[2, 404, 1]).await;

    let ids: Vec<_> = recipes.iter().filter_map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_create_and_delete_recipe() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;

    let created = ctx
        .recipes
        .create(&Recipe::new("Soup <i>deluxe</i>", "water", "boil"))
        .await
        .unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.title, "Soup deluxe");
    assert_eq!(created.user_id, Some(helpers::USER_ID));

    ctx.recipes.delete(id).await.unwrap();
    let err = ctx.recipes.get_by_id(id).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_create_rejected_by_backend() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;

    let err = ctx
        .recipes
        .create(&Recipe::new("dup", "x", "y"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(422));
    assert_eq!(
        err.user_message(),
        "The request could not be processed. Please check your input."
    );
}

#[tokio::test]
async fn test_update_current_user_conflict() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;

    let update = UserUpdate {
        email: Some("taken@example.com".into()),
        ..Default::default()
    };
    let err = ctx.facade.update_current_user(&update).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));

    let update = UserUpdate {
        bio: Some("Bakes daily".into()),
        ..Default::default()
    };
    let me = ctx.facade.update_current_user(&update).await.unwrap();
    assert_eq!(me.bio.as_deref(), Some("Bakes daily"));
}

#[tokio::test]
async fn test_user_with_recipes() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;

    let found = ctx.users.get_with_recipes(helpers::USER_ID).await.unwrap();

    assert_eq!(found.user_id, helpers::USER_ID);
    assert_eq!(found.recipes.len(), 3);
    assert!(found.recipes.iter().all(|r| !r.title.contains('<')));
}

#[tokio::test]
async fn test_sort_current_user_recipes() {
    let backend = helpers::TestBackend::start().await;
    let ctx = backend.logged_in_client().await;
    let recipes = ctx.facade.current_user_recipes().await.unwrap();

    let mut sorter = RecipeSorter::new(SortKey::Calories.strategy());
    let ids = |rs: Vec<Recipe>| rs.iter().filter_map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids(sorter.sort(&recipes)), vec![2, 3, 1]);

    sorter.set_strategy(SortKey::Title.strategy());
    assert_eq!(ids(sorter.sort(&recipes)), vec![2, 3, 1]);

    sorter.set_strategy(SortKey::CookTime.strategy());
    assert_eq!(ids(sorter.sort(&recipes)), vec![3, 2, 1]);
}
