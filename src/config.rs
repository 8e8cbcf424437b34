//! Configuration management for the playlist synchroniser.
//!
//! This module loads configuration values from a `.env` file and the process
//! environment and turns them into an explicit [`Config`] value that is handed
//! to the orchestrator. Nothing else in the crate reads the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Res};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_CLIENT_SECRET_FILE: &str = "client_secret.json";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_YTDLP_PATH: &str = "yt-dlp";
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page the YouTube Data API hands out.
const MAX_PAGE_SIZE: u32 = 50;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables from
/// `playlist-sync/.env` below the platform-specific local data directory.
/// Variables already present in the process environment are not overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playlist-sync/.env`
/// - macOS: `~/Library/Application Support/playlist-sync/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-sync/.env`
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be created and
/// [`Error::Config`] if an existing `.env` file cannot be parsed. A missing
/// file is not an error: the environment alone may carry the configuration.
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Config(format!(
            "cannot read {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-sync/.env");
    path
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token attached to every Spotify request.
    pub spotify_token: String,
    /// Spotify account that owns the destination playlists.
    pub spotify_user_id: String,
    pub spotify_api_url: String,
    pub youtube_api_url: String,
    /// Google OAuth client secrets used for the interactive login.
    pub client_secret_file: PathBuf,
    /// Pre-provisioned YouTube access token; skips the interactive login.
    pub youtube_access_token: Option<String>,
    /// Loopback address the OAuth redirect listener binds to.
    pub server_address: String,
    /// Executable used to resolve track and artist tags of a video.
    pub ytdlp_path: String,
    /// Number of entries fetched from any YouTube listing.
    pub page_size: u32,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the variable when `SPOTIFY_TOKEN` or
    /// `SPOTIFY_USER_ID` is missing, or when `PAGE_SIZE` is not a number.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{key} must be set")))
        };
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let page_size = match lookup("PAGE_SIZE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| Error::Config(format!("PAGE_SIZE is not a number: {e}")))?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            spotify_token: required("SPOTIFY_TOKEN")?,
            spotify_user_id: required("SPOTIFY_USER_ID")?,
            spotify_api_url: trim_slash(or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            youtube_api_url: trim_slash(or_default("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL)),
            client_secret_file: PathBuf::from(or_default(
                "YOUTUBE_CLIENT_SECRET_FILE",
                DEFAULT_CLIENT_SECRET_FILE,
            )),
            youtube_access_token: lookup("YOUTUBE_ACCESS_TOKEN").filter(|v| !v.trim().is_empty()),
            server_address: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            ytdlp_path: or_default("YTDLP_PATH", DEFAULT_YTDLP_PATH),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    /// Redirect URI registered with the OAuth callback listener.
    pub fn redirect_uri(&self) -> String {
        format!("http://{}/callback", self.server_address)
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secrets_are_set() {
        let config = Config::from_lookup(lookup_from(&[
            ("SPOTIFY_TOKEN", "tok"),
            ("SPOTIFY_USER_ID", "me"),
        ]))
        .unwrap();

        assert_eq!(config.spotify_api_url, DEFAULT_SPOTIFY_API_URL);
        assert_eq!(config.youtube_api_url, DEFAULT_YOUTUBE_API_URL);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.ytdlp_path, "yt-dlp");
        assert!(config.youtube_access_token.is_none());
        assert_eq!(config.redirect_uri(), "http://127.0.0.1:8080/callback");
    }

    #[test]
    fn missing_token_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("SPOTIFY_USER_ID", "me")])).unwrap_err();
        assert!(err.to_string().contains("SPOTIFY_TOKEN"));
    }

    #[test]
    fn page_size_is_clamped_and_urls_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("SPOTIFY_TOKEN", "tok"),
            ("SPOTIFY_USER_ID", "me"),
            ("SPOTIFY_API_URL", "http://localhost:1234/v1/"),
            ("PAGE_SIZE", "500"),
        ]))
        .unwrap();

        assert_eq!(config.spotify_api_url, "http://localhost:1234/v1");
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn blank_page_size_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("SPOTIFY_TOKEN", "tok"),
            ("SPOTIFY_USER_ID", "me"),
            ("PAGE_SIZE", "  "),
        ]))
        .unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("SPOTIFY_TOKEN", "tok"),
            ("SPOTIFY_USER_ID", "me"),
            ("PAGE_SIZE", "many"),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
