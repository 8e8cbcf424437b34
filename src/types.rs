use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "music discoveries from youtube";

// ---- domain ----

/// One entry of the source playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    pub raw_title: String,
    pub canonical_url: String,
}

/// A resolved source playlist together with its declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlaylist {
    pub id: String,
    pub title: String,
    pub item_count: u64,
}

/// Track and artist tags exposed by the metadata resolver for one video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractedMetadata {
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub song: String,
    pub artist: String,
}

/// A source item that found a destination track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedTrack {
    pub source_title: String,
    pub source_url: String,
    pub song: String,
    pub artist: String,
    pub track_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSpec {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl PlaylistSpec {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: description
                .unwrap_or_else(|| DEFAULT_PLAYLIST_DESCRIPTION.to_string()),
            public: true,
        }
    }
}

#[derive(Tabled)]
pub struct MatchTableRow {
    pub title: String,
    pub song: String,
    pub artist: String,
    pub uri: String,
}

impl From<&MatchedTrack> for MatchTableRow {
    fn from(m: &MatchedTrack) -> Self {
        Self {
            title: m.source_title.clone(),
            song: m.song.clone(),
            artist: m.artist.clone(),
            uri: m.track_uri.clone(),
        }
    }
}

// ---- google oauth ----

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The `installed` (or `web`) section of a Google client-secret file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecretFile {
    pub installed: Option<ClientSecret>,
    pub web: Option<ClientSecret>,
}

/// Shared between the login flow and the callback handler while the user is
/// in the browser.
#[derive(Debug, Clone)]
pub struct PendingLogin {
    pub code_verifier: String,
    pub client: ClientSecret,
    pub redirect_uri: String,
    pub token: Option<Token>,
    pub denied: Option<String>,
}

// ---- youtube data api ----

#[derive(Debug, Clone, Deserialize)]
pub struct YtPlaylistListResponse {
    #[serde(default)]
    pub items: Vec<YtPlaylist>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtPlaylist {
    pub id: String,
    pub snippet: YtPlaylistSnippet,
    #[serde(default)]
    pub content_details: Option<YtContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtPlaylistSnippet {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtContentDetails {
    #[serde(default)]
    pub item_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtPlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<YtPlaylistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YtPlaylistItem {
    pub snippet: YtPlaylistItemSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtPlaylistItemSnippet {
    pub title: String,
    pub resource_id: YtResourceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

// ---- spotify web api ----

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl From<&PlaylistSpec> for CreatePlaylistRequest {
    fn from(spec: &PlaylistSpec) -> Self {
        Self {
            name: spec.name.clone(),
            description: spec.description.clone(),
            public: spec.public,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Tracks,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}
