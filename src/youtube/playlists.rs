use reqwest::Client;

use crate::{
    Config, Error, Res,
    errors::Platform,
    types::{SourceItem, SourcePlaylist, YtPlaylist, YtPlaylistItemListResponse, YtPlaylistListResponse},
    utils,
    youtube::Session,
};

/// Reads playlists of the signed-in YouTube user.
#[derive(Debug, Clone)]
pub struct SourcePlaylistReader {
    http: Client,
    api_url: String,
    page_size: u32,
}

impl SourcePlaylistReader {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_url: config.youtube_api_url.clone(),
            page_size: config.page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Finds the caller's playlist whose title is exactly `name`.
    ///
    /// Only the first page of the listing is searched. The returned
    /// [`SourcePlaylist`] carries the declared item count so callers can tell
    /// whether [`list_items`](Self::list_items) will truncate.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no playlist on that page has the exact title
    /// - [`Error::Upstream`] on a non-success status or transport failure
    pub async fn resolve_playlist_id(&self, session: &Session, name: &str) -> Res<SourcePlaylist> {
        let max_results = self.page_size.to_string();
        let response = self
            .http
            .get(format!("{}/playlists", self.api_url))
            .bearer_auth(session.access_token())
            .query(&[
                ("part", "snippet,contentDetails"),
                ("maxResults", max_results.as_str()),
                ("mine", "true"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let listing = response.json::<YtPlaylistListResponse>().await?;
        find_by_title(listing.items, name).ok_or_else(|| Error::not_found(Platform::YouTube, name))
    }

    /// Fetches one page of the playlist's entries in playlist order.
    ///
    /// Entries without a video id are left out.
    pub async fn list_items(&self, session: &Session, playlist_id: &str) -> Res<Vec<SourceItem>> {
        let max_results = self.page_size.to_string();
        let response = self
            .http
            .get(format!("{}/playlistItems", self.api_url))
            .bearer_auth(session.access_token())
            .query(&[
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let listing = response.json::<YtPlaylistItemListResponse>().await?;
        let items = listing
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.snippet.resource_id.video_id?;
                Some(SourceItem {
                    raw_title: item.snippet.title,
                    canonical_url: utils::watch_url(&video_id),
                })
            })
            .collect();

        Ok(items)
    }
}

fn find_by_title(playlists: Vec<YtPlaylist>, title: &str) -> Option<SourcePlaylist> {
    playlists
        .into_iter()
        .find(|p| p.snippet.title == title)
        .map(|p| SourcePlaylist {
            item_count: p.content_details.map(|d| d.item_count).unwrap_or(0),
            title: p.snippet.title,
            id: p.id,
        })
}
