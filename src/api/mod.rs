//! # API Module
//!
//! HTTP handlers served by the local listener while the YouTube login is in
//! progress.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives Google's OAuth redirect. On `code` it completes the
//!   PKCE exchange and stores the token in the shared [`PendingLogin`] state; on
//!   `error` (the user declined consent) it records the refusal so the login
//!   flow can stop waiting.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use playlist_sync::api::callback;
//!
//! let app = Router::new().route("/callback", get(callback).layer(Extension(state)));
//! ```
//!
//! [`PendingLogin`]: crate::types::PendingLogin

mod callback;

pub use callback::callback;
