use axum::http::StatusCode;
use axum_test::TestServer;
use quotes_api::api::routes::routes;
use quotes_api::state::AppState;
use serde_json::{Value, json};

fn make_server() -> TestServer {
    TestServer::new(routes().with_state(AppState::in_memory())).unwrap()
}

#[tokio::test]
async fn test_memory_backend_lifecycle() {
    let server = make_server();

    let author = server
        .post("/authors")
        .json(&json!({ "name": "Mark", "surname": "Twain" }))
        .await;
    author.assert_status(StatusCode::CREATED);
    let author_id = author.json::<Value>()["id"].as_i64().unwrap();

    server
        .post("/authors")
        .json(&json!({ "name": "Mark", "surname": "Twain" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let quote = server
        .post(&format!("/authors/{author_id}/quotes"))
        .json(&json!({ "text": "Quote A", "rating": 5 }))
        .await;
    quote.assert_status(StatusCode::CREATED);
    let quote_id = quote.json::<Value>()["id"].as_i64().unwrap();

    let up = server.put(&format!("/quotes/{quote_id}/up")).await;
    up.assert_status_ok();
    assert_eq!(up.json::<Value>()["rating"], 5);

    server
        .get("/quotes/filter")
        .add_query_param("surname", "Twain")
        .await
        .assert_json(&json!([
            { "id": quote_id, "author_id": author_id, "text": "Quote A", "rating": 5 }
        ]));

    server
        .delete(&format!("/authors/{author_id}"))
        .await
        .assert_status_ok();
    server.get("/quotes/random").await.assert_status_not_found();
    server.get("/authors/deleted").await.assert_json(&json!([
        { "id": author_id, "name": "Mark", "surname": "Twain" }
    ]));

    server
        .put(&format!("/authors/restore/{author_id}"))
        .await
        .assert_status_ok();
    server.get("/quotes/count").await.assert_json(&json!({ "count": 1 }));
}
