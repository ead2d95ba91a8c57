//! Integration tests for the storefront catalog endpoints.
//!
//! These tests require:
//! - The storefront running (cargo run -p wavecrest-storefront)
//! - A reachable backend project
//!
//! Run with: cargo test -p wavecrest-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Base URL for the storefront API (configurable via environment).
fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore = "Requires running storefront and backend credentials"]
async fn test_health() {
    let resp = reqwest::get(format!("{}/health", storefront_base_url()))
        .await
        .expect("Failed to reach storefront");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and backend credentials"]
async fn test_featured_is_capped_at_ten() {
    let resp = reqwest::get(format!("{}/api/products/featured", storefront_base_url()))
        .await
        .expect("Failed to get featured products");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(products.len() <= 10);
    for product in &products {
        assert_eq!(product["is_featured"], true);
    }
}

#[tokio::test]
#[ignore = "Requires running storefront and backend credentials"]
async fn test_search_no_match_is_empty_ok() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/api/search", storefront_base_url()))
        .query(&[("q", "zzzz-no-such-product-zzzz")])
        .send()
        .await
        .expect("Failed to search");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(products.is_empty());
}

#[tokio::test]
#[ignore = "Requires running storefront and backend credentials"]
async fn test_unknown_slug_is_not_found() {
    let resp = reqwest::get(format!(
        "{}/api/products/no-such-slug-ever",
        storefront_base_url()
    ))
    .await
    .expect("Failed to get product");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront and backend credentials"]
async fn test_categories_are_sorted_by_name() {
    let resp = reqwest::get(format!("{}/api/categories", storefront_base_url()))
        .await
        .expect("Failed to get categories");

    assert_eq!(resp.status(), StatusCode::OK);
    let categories: Vec<Value> = resp.json().await.expect("Failed to parse response");
    let names: Vec<&str> = categories
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}
