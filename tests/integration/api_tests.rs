//! API integration tests

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_local_search() {
    let client = Client::new();

    let response = client
        .get(format!("{}/papers?query=machine+learning", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["papers"].is_array());
    assert!(body["total"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_search_rejects_empty_query() {
    let client = Client::new();

    let response = client
        .get(format!("{}/papers?query=", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
#[ignore]
async fn test_search_rejects_oversized_limit() {
    let client = Client::new();

    let response = client
        .get(format!("{}/papers?query=test&limit=1000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_paper_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/papers/999999999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_external_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/papers/external-id/no-such-sha", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_sync_search_then_read_back() {
    let client = Client::new();

    // Live search against the remote catalog
    let response = client
        .get(format!(
            "{}/papers/search?query=machine+learning&limit=3",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let papers = body["papers"].as_array().expect("No papers array");
    assert!(!papers.is_empty());
    let corpus_id = papers[0]["corpus_id"].as_i64().expect("No corpus id");
    let title = papers[0]["title"].as_str().expect("No title").to_string();

    // Everything returned must now be readable from the local store
    let response = client
        .get(format!("{}/papers/{}", BASE_URL, corpus_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let stored: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(stored["corpus_id"].as_i64(), Some(corpus_id));
    assert_eq!(stored["title"].as_str(), Some(title.as_str()));

    let response = client
        .get(format!("{}/papers/{}/authors", BASE_URL, corpus_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let authors: Value = response.json().await.expect("Failed to parse response");
    assert!(authors.is_array());

    let response = client
        .get(format!("{}/papers/{}/external-ids", BASE_URL, corpus_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let ids: Value = response.json().await.expect("Failed to parse response");
    assert!(ids.is_array());
}
