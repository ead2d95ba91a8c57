//! Wavecrest Core - Shared types library.
//!
//! This crate provides common types used across all Wavecrest components:
//! - `backend` - Client for the hosted backend (PostgREST + GoTrue)
//! - `storefront` - Public-facing catalog, cart, and inquiry API
//! - `admin` - Internal administration panel
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Currency codes, the tri-currency price set, and the
//!   product/category/cart/inquiry records shared with the backend schema

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
