use reqwest::Method;

use crate::{
    Error, Res,
    errors::Platform,
    spotify::SpotifyClient,
    types::{CreatePlaylistRequest, CreatePlaylistResponse, GetUserPlaylistsResponse, PlaylistSpec},
};

/// Creates Spotify playlists and writes their track lists.
#[derive(Debug, Clone)]
pub struct PlaylistManager {
    client: SpotifyClient,
}

impl PlaylistManager {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }

    /// Creates a playlist under the configured account and returns its id.
    pub async fn create_playlist(&self, spec: &PlaylistSpec) -> Res<String> {
        let path = format!("/users/{}/playlists", self.client.user_id());
        let response = self
            .client
            .request(Method::POST, &path)
            .json(&CreatePlaylistRequest::from(spec))
            .send()
            .await?
            .error_for_status()?;

        let created = response.json::<CreatePlaylistResponse>().await?;
        Ok(created.id)
    }

    /// Adds `uris` to the end of the playlist in one request, keeping their
    /// order.
    pub async fn append_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        let path = format!("/playlists/{}/tracks", playlist_id);
        self.client
            .request(Method::POST, &path)
            .json(uris)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Finds the account's playlist named exactly `name` on the first page of
    /// the listing.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no playlist has that exact name
    /// - [`Error::Upstream`] on a non-success status
    pub async fn resolve_existing_playlist_id(&self, name: &str) -> Res<String> {
        let path = format!("/users/{}/playlists", self.client.user_id());
        let response = self
            .client
            .request(Method::GET, &path)
            .send()
            .await?
            .error_for_status()?;

        let listing = response.json::<GetUserPlaylistsResponse>().await?;
        listing
            .items
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
            .ok_or_else(|| Error::not_found(Platform::Spotify, name))
    }

    /// Replaces the whole track list with `uris`. Previous tracks are dropped
    /// by Spotify in the same request.
    pub async fn replace_tracks(&self, playlist_id: &str, uris: &[String]) -> Res<()> {
        let path = format!("/playlists/{}/tracks", playlist_id);
        self.client
            .request(Method::PUT, &path)
            .query(&[("uris", uris.join(","))])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
