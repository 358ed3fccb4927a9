#![allow(dead_code)]

use axum_test::TestServer;
use quotes_api::api::routes::routes;
use quotes_api::state::AppState;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::with_sqlite(pool)
}

/// Test server over the full API route table.
pub fn make_server(pool: SqlitePool) -> TestServer {
    let app = routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn create_test_author(pool: &SqlitePool, name: &str, surname: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO authors (name, surname) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(surname)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_deleted_author(pool: &SqlitePool, name: &str, surname: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO authors (name, surname, deleted) VALUES (?1, ?2, TRUE) RETURNING id",
    )
    .bind(name)
    .bind(surname)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_quote(pool: &SqlitePool, author_id: i64, text: &str, rating: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO quotes (author_id, text, rating) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(author_id)
    .bind(text)
    .bind(rating)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn quote_is_deleted(pool: &SqlitePool, quote_id: i64) -> bool {
    sqlx::query_scalar("SELECT deleted FROM quotes WHERE id = ?1")
        .bind(quote_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn author_is_deleted(pool: &SqlitePool, author_id: i64) -> bool {
    sqlx::query_scalar("SELECT deleted FROM authors WHERE id = ?1")
        .bind(author_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
