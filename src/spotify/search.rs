use reqwest::Method;

use crate::{Res, spotify::SpotifyClient, types::SearchResponse};

/// Maximum number of candidates requested per search.
pub const SEARCH_LIMIT: u32 = 20;

#[derive(Debug, Clone)]
pub struct TrackMatcher {
    client: SpotifyClient,
}

impl TrackMatcher {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }

    /// Looks up a track by normalised song and artist.
    ///
    /// Issues a single track-type search capped at [`SEARCH_LIMIT`] results
    /// from offset zero and returns the URI of the first result in Spotify's
    /// own order, or `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// [`Error::Upstream`](crate::Error::Upstream) on a non-success status.
    pub async fn search(&self, song: &str, artist: &str) -> Res<Option<String>> {
        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .client
            .request(Method::GET, "/search")
            .query(&[
                ("q", search_query(song, artist).as_str()),
                ("type", "track"),
                ("limit", limit.as_str()),
                ("offset", "0"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let result = response.json::<SearchResponse>().await?;
        Ok(result.tracks.items.into_iter().next().map(|t| t.uri))
    }
}

/// Field-filtered query expression for the search endpoint.
pub fn search_query(song: &str, artist: &str) -> String {
    format!("track:{} artist:{}", song, artist)
}
