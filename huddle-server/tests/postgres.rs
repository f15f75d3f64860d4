//! PostgreSQL store tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p huddle-server -- --ignored

use huddle_server::models::{Age, Email, NewPost, NewUser, PersonName, PostText, UserPatch};
use huddle_server::{DbError, PgStore, Store};
use uuid::Uuid;

async fn store() -> PgStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let store = PgStore::connect(&url, 2).await.expect("pool creation failed");
    store.migrate().await.expect("migration failed");
    store
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: PersonName::first("Pat").unwrap(),
        last_name: PersonName::last("Quinn").unwrap(),
        age: Age::new(33).unwrap(),
        email: Email::new(email).unwrap(),
        is_admin: false,
    }
}

fn unique_email() -> String {
    format!("pat.{}@example.com", Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires database"]
async fn migrate_is_idempotent() {
    let store = store().await;
    store.migrate().await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn unique_email_maps_to_duplicate() {
    let store = store().await;
    let email = unique_email();
    let user = store.create_user(new_user(&email)).await.unwrap();

    let err = store.create_user(new_user(&email)).await.unwrap_err();
    assert!(matches!(err, DbError::Duplicate { field: "email" }));

    store.delete_user(user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn partial_update_keeps_other_columns() {
    let store = store().await;
    let user = store.create_user(new_user(&unique_email())).await.unwrap();

    let patch = UserPatch {
        age: Some(Age::new(34).unwrap()),
        ..Default::default()
    };
    let updated = store.update_user(user.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.age, 34);
    assert_eq!(updated.first_name, user.first_name);
    assert_eq!(updated.email, user.email);

    store.delete_user(user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn orphaned_post_has_no_owner() {
    let store = store().await;
    let user = store.create_user(new_user(&unique_email())).await.unwrap();
    let post = store
        .create_post(NewPost {
            title: PostText::title("Regatta").unwrap(),
            content: PostText::content("Harbour, 9am").unwrap(),
            user_id: user.id,
        })
        .await
        .unwrap();

    let joined = store.get_post(post.id).await.unwrap().unwrap();
    assert_eq!(joined.owner_name(), "Pat Quinn");

    store.delete_user(user.id).await.unwrap();
    let joined = store.get_post(post.id).await.unwrap().unwrap();
    assert!(joined.user.is_none());

    store.delete_post(post.id).await.unwrap();
}
