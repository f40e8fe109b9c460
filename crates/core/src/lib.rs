//! Tradepost Core - Shared domain types.
//!
//! This crate provides common types used across the Tradepost client
//! workspace:
//! - `client` - The marketplace API client SDK
//! - `integration-tests` - Live-server integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! entity here is owned by the remote marketplace API; these types are the
//! client's short-lived, advisory copies of that data.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, ratings, and
//!   role/status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
