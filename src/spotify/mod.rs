//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API the synchroniser needs.
//! Every request carries `Authorization: Bearer <token>` and
//! `Content-Type: application/json`, built once in [`SpotifyClient`].
//!
//! ## Core Modules
//!
//! [`search`] - [`TrackMatcher`]: one track search per normalised
//! song/artist pair, first result wins.
//!
//! [`playlist`] - [`PlaylistManager`]: create a playlist and bulk-add tracks,
//! or resolve an existing playlist and replace its track list.
//!
//! ## API Coverage
//!
//! - `GET /search?q=track:{song} artist:{artist}&type=track&limit=20&offset=0`
//! - `POST /users/{user_id}/playlists` - Create a public playlist
//! - `GET /users/{user_id}/playlists` - First page of the user's playlists
//! - `POST /playlists/{id}/tracks` - Append tracks (JSON array of URIs)
//! - `PUT /playlists/{id}/tracks?uris=...` - Replace all tracks
//!
//! ## Error Handling
//!
//! Non-success statuses are turned into [`Error::Upstream`] through
//! `error_for_status()`. Nothing is retried and nothing is rolled back: a
//! playlist created just before a failing add stays behind, empty.
//!
//! [`Error::Upstream`]: crate::Error::Upstream

pub mod playlist;
pub mod search;

use reqwest::{Client, Method, RequestBuilder, header::CONTENT_TYPE};

use crate::Config;

pub use playlist::PlaylistManager;
pub use search::TrackMatcher;

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
    user_id: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.spotify_api_url.clone(),
            token: config.spotify_token.clone(),
            user_id: config.spotify_user_id.clone(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Starts an authenticated request against `{api_url}{path}`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
    }
}
