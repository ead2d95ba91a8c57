//! Wavecrest backend client.
//!
//! All persistence, search, and authentication in Wavecrest is delegated to
//! a hosted backend-as-a-service exposing a PostgREST query API and a GoTrue
//! authentication API. This crate is the single place that speaks that
//! contract; everything above it works with plain domain types from
//! `wavecrest-core`.
//!
//! The catalog reads and inquiry operations are expressed as repository
//! traits ([`Catalog`], [`InquiryStore`]) so tests can substitute in-memory
//! fixtures for the hosted service.
//!
//! No retries, timeouts, or backoff are implemented anywhere: a failed call
//! surfaces immediately and a hung backend call hangs its caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod admin;
mod auth;
mod catalog;
mod client;
mod error;
mod inquiries;

pub use auth::{AuthSession, AuthUser};
pub use catalog::{Catalog, SEARCH_RESULT_CAP};
pub use client::{BackendConfig, SupabaseClient};
pub use error::BackendError;
pub use inquiries::InquiryStore;
