mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_author_success(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Mark", "surname": "Twain" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["name"], "Mark");
    assert_eq!(json["surname"], "Twain");
    assert!(json.get("deleted").is_none());
}

#[sqlx::test]
async fn test_create_author_without_surname(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Homer" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["surname"], "");
}

#[sqlx::test]
async fn test_create_author_non_ascii(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Лев", "surname": "Толстой" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Лев");
    assert_eq!(json["surname"], "Толстой");
}

#[sqlx::test]
async fn test_create_author_missing_name(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "surname": "Twain" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}

#[sqlx::test]
async fn test_create_author_empty_name(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.post("/authors").json(&json!({ "name": "" })).await;

    response.assert_status_bad_request();
    let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.contains("name"));
}

#[sqlx::test]
async fn test_create_author_name_too_long(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "x".repeat(33) }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_author_unknown_fields(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Mark", "likes": 3, "color": "red" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "Unknown fields: color, likes"
    );
}

#[sqlx::test]
async fn test_create_author_duplicate(pool: SqlitePool) {
    common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .json(&json!({ "name": "Mark", "surname": "Twain" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_author_malformed_json(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server
        .post("/authors")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_authors_excludes_deleted(pool: SqlitePool) {
    common::create_test_author(&pool, "Mark", "Twain").await;
    common::create_deleted_author(&pool, "Oscar", "Wilde").await;
    let server = common::make_server(pool);

    let response = server.get("/authors").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let authors = json.as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "Mark");
}

#[sqlx::test]
async fn test_list_authors_empty(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/authors").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_list_deleted_authors(pool: SqlitePool) {
    common::create_test_author(&pool, "Mark", "Twain").await;
    common::create_deleted_author(&pool, "Oscar", "Wilde").await;
    let server = common::make_server(pool);

    let response = server.get("/authors/deleted").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let authors = json.as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["surname"], "Wilde");
}

#[sqlx::test]
async fn test_list_authors_sorted(pool: SqlitePool) {
    common::create_test_author(&pool, "Oscar", "Austen").await;
    common::create_test_author(&pool, "Ann", "Wilde").await;
    common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let by_name = server.get("/authors/name").await.json::<Value>();
    let names: Vec<&str> = by_name
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Mark", "Oscar"]);

    let by_surname = server.get("/authors/surname").await.json::<Value>();
    let surnames: Vec<&str> = by_surname
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["surname"].as_str().unwrap())
        .collect();
    assert_eq!(surnames, vec!["Austen", "Twain", "Wilde"]);
}

#[sqlx::test]
async fn test_get_author(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/authors/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": id, "name": "Mark", "surname": "Twain" }));
}

#[sqlx::test]
async fn test_get_author_not_found(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/authors/999").await;

    response.assert_status_not_found();
    assert!(response.json::<Value>()["message"].is_string());
}

#[sqlx::test]
async fn test_get_deleted_author_not_found(pool: SqlitePool) {
    let id = common::create_deleted_author(&pool, "Oscar", "Wilde").await;
    let server = common::make_server(pool);

    server
        .get(&format!("/authors/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_get_author_invalid_id(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/authors/abc").await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}

#[sqlx::test]
async fn test_author_with_quotes(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    common::create_test_quote(&pool, id, "Quote A", 3).await;
    common::create_test_quote(&pool, id, "Quote B", 1).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/authors/{id}/quotes")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Mark");
    let quotes = json["quotes"].as_array().unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0]["text"], "Quote A");
    assert_eq!(quotes[0]["rating"], 3);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_author_partial(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/authors/{id}"))
        .json(&json!({ "surname": "Clemens" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": id, "name": "Mark", "surname": "Clemens" }));
}

#[sqlx::test]
async fn test_update_author_empty_body_returns_current(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server.put(&format!("/authors/{id}")).json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["surname"], "Twain");
}

#[sqlx::test]
async fn test_update_author_unknown_field(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/authors/{id}"))
        .json(&json!({ "deleted": false }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Unknown fields: deleted");
}

#[sqlx::test]
async fn test_update_author_not_found(pool: SqlitePool) {
    let server = common::make_server(pool);

    server
        .put("/authors/42")
        .json(&json!({ "name": "Nobody" }))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_update_author_conflict(pool: SqlitePool) {
    common::create_test_author(&pool, "Mark", "Twain").await;
    let id = common::create_test_author(&pool, "Mark", "Clemens").await;
    let server = common::make_server(pool);

    server
        .put(&format!("/authors/{id}"))
        .json(&json!({ "surname": "Twain" }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

// ─── DELETE / RESTORE ────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_author_cascades_to_quotes(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let q1 = common::create_test_quote(&pool, id, "Quote A", 2).await;
    let q2 = common::create_test_quote(&pool, id, "Quote B", 4).await;
    let server = common::make_server(pool.clone());

    let response = server.delete(&format!("/authors/{id}")).await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["message"].is_string());

    assert!(common::author_is_deleted(&pool, id).await);
    assert!(common::quote_is_deleted(&pool, q1).await);
    assert!(common::quote_is_deleted(&pool, q2).await);

    server
        .get(&format!("/quotes/{q1}"))
        .await
        .assert_status_not_found();
    server.get("/quotes").await.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_delete_author_twice(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/authors/{id}"))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/authors/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_restore_author_restores_quotes(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let quote_id = common::create_test_quote(&pool, id, "Quote A", 5).await;
    let server = common::make_server(pool.clone());

    server
        .delete(&format!("/authors/{id}"))
        .await
        .assert_status_ok();

    let response = server.put(&format!("/authors/restore/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": id, "name": "Mark", "surname": "Twain" }));
    assert!(!common::quote_is_deleted(&pool, quote_id).await);

    let quote = server.get(&format!("/quotes/{quote_id}")).await;
    quote.assert_status_ok();
    assert_eq!(quote.json::<Value>()["rating"], 5);
}

#[sqlx::test]
async fn test_restore_live_author_not_found(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    server
        .put(&format!("/authors/restore/{id}"))
        .await
        .assert_status_not_found();
}

// ─── QUOTE CREATION UNDER AUTHOR ─────────────────────────────────────────────

#[sqlx::test]
async fn test_create_quote_default_rating(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .post(&format!("/authors/{id}/quotes"))
        .json(&json!({ "text": "Quote A" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["author_id"], id);
    assert_eq!(json["text"], "Quote A");
    assert_eq!(json["rating"], 1);
}

#[sqlx::test]
async fn test_create_quote_out_of_range_rating_uses_default(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .post(&format!("/authors/{id}/quotes"))
        .json(&json!({ "text": "Quote A", "rating": 9 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["rating"], 1);
}

#[sqlx::test]
async fn test_create_quote_for_missing_author(pool: SqlitePool) {
    let server = common::make_server(pool);

    server
        .post("/authors/77/quotes")
        .json(&json!({ "text": "Quote A" }))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_create_quote_for_deleted_author(pool: SqlitePool) {
    let id = common::create_deleted_author(&pool, "Oscar", "Wilde").await;
    let server = common::make_server(pool);

    server
        .post(&format!("/authors/{id}/quotes"))
        .json(&json!({ "text": "Quote A" }))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_create_quote_missing_text(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    server
        .post(&format!("/authors/{id}/quotes"))
        .json(&json!({ "rating": 3 }))
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_quote_unknown_field(pool: SqlitePool) {
    let id = common::create_test_author(&pool, "Mark", "Twain").await;
    let server = common::make_server(pool);

    let response = server
        .post(&format!("/authors/{id}/quotes"))
        .json(&json!({ "text": "Quote A", "author_id": 5 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Unknown fields: author_id");
}
