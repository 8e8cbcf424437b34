//! # YouTube Integration Module
//!
//! Read-only access to the signed-in user's YouTube playlists.
//!
//! ## Core Modules
//!
//! [`auth`] - Produces a [`Session`] for the YouTube Data API:
//! - **Pre-provisioned Token**: `YOUTUBE_ACCESS_TOKEN` skips the browser
//! - **Installed-app OAuth**: Client-secret file, PKCE, local redirect listener
//! - **Read-only Scope**: `youtube.readonly` only
//!
//! [`playlists`] - [`SourcePlaylistReader`] resolving a playlist by title and
//! listing its videos, one page of `PAGE_SIZE` entries each.
//!
//! ## API Coverage
//!
//! - `GET /playlists?part=snippet,contentDetails&mine=true` - Caller's playlists
//! - `GET /playlistItems?part=snippet&playlistId=...` - Videos of one playlist
//!
//! Neither call follows `nextPageToken`: a playlist larger than the page bound
//! is truncated.

pub mod auth;
pub mod playlists;

pub use auth::Session;
pub use playlists::SourcePlaylistReader;
