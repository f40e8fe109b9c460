//! Tradepost client SDK.
//!
//! A typed client for the Tradepost marketplace REST API: product
//! browsing, cart, wishlist, reviews, seller listings, order tracking,
//! and the staff/admin moderation queues.
//!
//! The server owns every entity; this crate holds short-lived advisory
//! copies and keeps them consistent with server state:
//!
//! - [`session`] - bearer-token session lifecycle with a stale-response
//!   guard
//! - [`guard`] - synchronous role-based gating for navigation
//! - [`api`] - per-resource fetchers over HTTP (all mutations require the
//!   session token)
//! - [`reconcile`] - post-confirmation local list updates, so a mutation
//!   does not force a full re-fetch
//! - [`filter`] - pure filter/sort derivation over fetched listings
//! - [`checkout`] - the checkout form state machine
//!
//! # Example
//!
//! ```rust,ignore
//! use tradepost_client::{ApiClient, ClientConfig, Credentials};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config);
//!
//! client.login(&Credentials::new("alice@example.com", "hunter2!A1")).await?;
//! let listings = client.listings_with_images(99).await?;
//! client.add_to_cart(listings.content[0].id).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod reconcile;
pub mod session;
pub mod types;

pub use api::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use session::{AuthError, Credentials, Session, SessionStore};
