//! API integration tests
//!
//! These run against a live server + database.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Generates an isbn that is unique across test runs
fn fresh_isbn() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    format!("isbn-{}", nanos)
}

async fn create_book(client: &Client, title: &str, author: &str, isbn: &str) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title, "author": author, "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book() {
    let client = Client::new();
    let isbn = fresh_isbn();

    let body = create_book(&client, "As aventuras", "Jaderson", &isbn).await;

    assert!(body["id"].is_number());
    assert_eq!(body["title"], "As aventuras");
    assert_eq!(body["author"], "Jaderson");
    assert_eq!(body["isbn"], isbn.as_str());
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_duplicated_isbn() {
    let client = Client::new();
    let isbn = fresh_isbn();

    create_book(&client, "As aventuras", "Jaderson", &isbn).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Outro", "author": "Fulano", "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0], "Isbn já cadastrado.");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "", "author": "", "isbn": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"].as_array().expect("errors array").len(), 3);
}

#[tokio::test]
#[ignore]
async fn test_get_book_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_crud_roundtrip() {
    let client = Client::new();
    let isbn = fresh_isbn();

    let created = create_book(&client, "As aventuras", "Jaderson", &isbn).await;
    let id = created["id"].as_i64().expect("book id");

    // Read back
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "As aventuras");

    // Update
    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "title": "some title", "author": "some author", "isbn": isbn }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "some title");

    // Delete
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books_filtered() {
    let client = Client::new();
    let isbn = fresh_isbn();

    // Title unique enough to filter on
    let title = format!("As aventuras {}", isbn);
    create_book(&client, &title, "Jaderson", &isbn).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .query(&[
            ("title", title.as_str()),
            ("author", "Jaderson"),
            ("page", "0"),
            ("size", "100"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["items"].as_array().expect("items array").len(), 1);
    assert_eq!(body["total"], 1);
    assert_eq!(body["page_number"], 0);
    assert_eq!(body["page_size"], 100);
}

#[tokio::test]
#[ignore]
async fn test_create_loan() {
    let client = Client::new();
    let isbn = fresh_isbn();

    create_book(&client, "As aventuras", "Jaderson", &isbn).await;

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "isbn": isbn, "customer": "Jaderson" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_loan_for_unknown_isbn() {
    let client = Client::new();

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({ "isbn": "nonexistent", "customer": "Jaderson" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"][0], "Book not found for passed isbn");
}
