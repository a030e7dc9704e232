//! Integration tests against a live MySQL server.
//!
//! Run with the same environment the service uses, e.g.:
//! DB_HOST=127.0.0.1 cargo test -p userbase-server -- --ignored

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use sqlx::Connection;
use tower::ServiceExt;

use userbase_server::db::schema::{self, SEED_USER_NAME};
use userbase_server::db::UserRepo;
use userbase_server::http::{build_router, AppState};
use userbase_server::{Connector, DbConfig, DbError, MySqlStore, User, UserStore};

fn connector() -> Connector {
    Connector::new(DbConfig::from_env())
}

#[tokio::test]
#[ignore = "requires database"]
async fn connect_returns_usable_connection() {
    let mut conn = connector().connect().await.expect("connect failed");

    let result: (i32,) = sqlx::query_as("SELECT 1")
        .fetch_one(&mut conn)
        .await
        .expect("query failed");
    assert_eq!(result.0, 1);

    conn.close().await.expect("close failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn initialize_is_repeatable() {
    let store = MySqlStore::new(connector());

    let first = store.initialize().await.expect("first init failed");
    let second = store.initialize().await.expect("second init failed");
    assert!(first.table_ensured && first.seed_attempted);
    assert_eq!(first, second);

    // No unique key on `name`, so duplicates are allowed here.
    let seeds = store
        .list_users()
        .await
        .expect("list failed")
        .into_iter()
        .filter(|u| u.name == SEED_USER_NAME)
        .count();
    assert!(seeds >= 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn scoped_connection_runs_schema_and_repo() {
    let users = connector()
        .with_connection(|conn| {
            Box::pin(async move {
                schema::initialize(&mut *conn).await?;
                UserRepo::new(conn).list().await
            })
        })
        .await
        .expect("scoped operation failed");

    assert!(users.iter().any(|u| u.name == SEED_USER_NAME));
}

#[tokio::test]
#[ignore = "requires database"]
async fn scoped_connection_returns_body_error() {
    let result = connector()
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query("SELECT * FROM no_such_table")
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, DbError>(())
            })
        })
        .await;

    // The statement error comes back as-is, not swapped for a close error.
    match result {
        Err(DbError::Sqlx(sqlx::Error::Database(e))) => {
            assert!(e.to_string().contains("no_such_table"), "{e}")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_on_empty_table_is_empty() {
    let mut conn = connector().connect().await.expect("connect failed");
    schema::initialize(&mut conn).await.expect("init failed");

    // A temporary table shadows `users` for this session only, so other
    // tests keep their rows.
    sqlx::query(
        "CREATE TEMPORARY TABLE users (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(64) NOT NULL
        )",
    )
    .execute(&mut conn)
    .await
    .expect("temporary table failed");

    let users = UserRepo::new(&mut conn).list().await.expect("list failed");
    assert!(users.is_empty(), "{users:?}");

    conn.close().await.expect("close failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn users_route_after_init() {
    let store = Arc::new(MySqlStore::new(connector()));
    let app = build_router(AppState::new(store));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/init").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let users: Vec<User> = serde_json::from_slice(&bytes).unwrap();
    assert!(users.iter().any(|u| u.name == SEED_USER_NAME && u.id > 0));
}
