//! # Users Service
//!
//! A small HTTP service holding user records in memory, keyed by
//! identifiers the service assigns.
//!
//! ## Features
//!
//! - Create, fetch and delete users over a JSON API
//! - Identifiers are positive, increasing, and never reused
//! - Concurrent lookups share a readers-writer lock; writes are exclusive
//! - Builder pattern for configuration
//!
//! ## Example
//!
//! ```
//! use users::{UserStore, UsersBuilder};
//!
//! let store = UserStore::new();
//! let app = UsersBuilder::new().store(store.clone()).build();
//!
//! // Serve `app` with axum or any tower-compatible server; `store` remains
//! // a handle onto the same users.
//! # let _ = app;
//! ```

mod api;
mod config;
mod error;
mod store;
mod user;
mod users;

pub use api::UsersBuilder;
pub use config::{ConfigError, ServerConfig};
pub use error::{UserError, UserResult};
pub use store::UserStore;
pub use user::{User, UserId};
