//! Session state and storage for the catalogue viewer.
//!
//! This crate provides the collaborators around the catalogue itself:
//! - A string key-value `Storage` trait with in-memory and JSON-file backends
//! - `Session`: token pair and guest flag persisted in that storage
//! - The refresh-once rule for requests made with a bearer token
//!
//! No HTTP client lives here. Callers plug their transport into
//! [`auth::send_with_refresh`] as a closure and their token endpoint in as a
//! [`auth::TokenRefresher`].

pub mod auth;
pub mod error;
pub mod session;
pub mod storage;

pub use auth::{TokenRefresher, send_with_refresh};
pub use error::{AuthError, Result, StorageError};
pub use session::{GUEST_KEY, REFRESH_TOKEN_KEY, Session, TOKEN_KEY, TokenPair};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
