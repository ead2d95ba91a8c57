//! Integration tests for the admin login gate.
//!
//! These tests require:
//! - The admin server running (cargo run -p wavecrest-admin)
//! - A seeded admin account in `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD`
//!
//! Run with: cargo test -p wavecrest-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_api_requires_login() {
    let client = session_client();
    let resp = client
        .get(format!("{}/api/products", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and backend credentials"]
async fn test_bad_credentials_are_rejected_without_detail() {
    let client = session_client();
    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong-password",
        }))
        .send()
        .await
        .expect("Failed to reach admin");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body, "Invalid credentials");
}

#[tokio::test]
#[ignore = "Requires running admin server and a seeded admin account"]
async fn test_login_grants_api_access() {
    let email = std::env::var("ADMIN_TEST_EMAIL").expect("ADMIN_TEST_EMAIL not set");
    let password = std::env::var("ADMIN_TEST_PASSWORD").expect("ADMIN_TEST_PASSWORD not set");

    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: Value = resp.json().await.expect("Failed to parse profile");
    assert_eq!(profile["email"], email.as_str());
    assert!(profile.get("access_token").is_none());

    let resp = client
        .get(format!("{base_url}/api/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert_eq!(resp.status(), StatusCode::OK);

    // Logout drops access again.
    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/api/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
