//! Integration tests for Wavecrest.
//!
//! The tests in `tests/` exercise the running storefront and admin binaries
//! over HTTP. They are `#[ignore]`d by default because they need:
//!
//! - The storefront running (`cargo run -p wavecrest-storefront`)
//! - The admin server running (`cargo run -p wavecrest-admin`)
//! - A reachable backend project and, for the admin flow, a seeded admin
//!   account in `ADMIN_TEST_EMAIL` / `ADMIN_TEST_PASSWORD`
//!
//! Run with: `cargo test -p wavecrest-integration-tests -- --ignored`
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Catalog read endpoints
//! - `storefront_cart` - Session cart and inquiry flow
//! - `admin_auth` - Admin login gate
