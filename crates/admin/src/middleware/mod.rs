//! Admin middleware.

pub mod auth;
