//! # Synchronisation
//!
//! [`Orchestrator`] drives one run: for each video of the source playlist, in
//! playlist order and one at a time, it resolves the music tags, normalises
//! song and artist, searches Spotify and keeps the first hit. Videos without
//! both tags, without a hit or whose metadata cannot be resolved are skipped.
//! Once every video is processed the matches go to Spotify through either the
//! create or the update path.
//!
//! ## Failure Model
//!
//! | Error                | Effect                      |
//! |----------------------|-----------------------------|
//! | `Metadata`           | video skipped, run goes on  |
//! | `Auth`, `NotFound`   | run aborted                 |
//! | `Upstream`           | run aborted, no rollback    |

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Config, Res,
    metadata::MetadataExtractor,
    spotify::{PlaylistManager, SpotifyClient, TrackMatcher},
    text::normalize,
    types::{MatchedTrack, NormalizedQuery, PlaylistSpec, SourceItem},
    warning,
    youtube::{Session, SourcePlaylistReader},
};

/// What to do with the matched tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a new playlist and fill it.
    Create(PlaylistSpec),
    /// Replace the tracks of the existing playlist with this name.
    Update { destination: String },
}

/// Matched tracks of a source playlist, in source order.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    pub tracks: Vec<MatchedTrack>,
    pub skipped: usize,
}

impl MatchSet {
    pub fn uris(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.track_uri.clone()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub playlist_id: String,
    pub matches: MatchSet,
}

pub struct Orchestrator<E: MetadataExtractor> {
    session: Session,
    reader: SourcePlaylistReader,
    extractor: E,
    matcher: TrackMatcher,
    playlists: PlaylistManager,
}

impl<E: MetadataExtractor> Orchestrator<E> {
    pub fn new(config: &Config, session: Session, extractor: E) -> Self {
        let spotify = SpotifyClient::new(config);
        Self {
            session,
            reader: SourcePlaylistReader::new(config),
            extractor,
            matcher: TrackMatcher::new(spotify.clone()),
            playlists: PlaylistManager::new(spotify),
        }
    }

    pub async fn run(&self, source_name: &str, action: &Action) -> Res<SyncReport> {
        match action {
            Action::Create(spec) => self.create(source_name, spec).await,
            Action::Update { destination } => self.update(source_name, destination).await,
        }
    }

    /// Creates a playlist from `spec` holding exactly the matched tracks.
    pub async fn create(&self, source_name: &str, spec: &PlaylistSpec) -> Res<SyncReport> {
        let matches = self.collect_matches(source_name).await?;

        let playlist_id = self.playlists.create_playlist(spec).await?;
        if !matches.tracks.is_empty() {
            self.playlists
                .append_tracks(&playlist_id, &matches.uris())
                .await?;
        }

        Ok(SyncReport {
            playlist_id,
            matches,
        })
    }

    /// Replaces the tracks of the playlist named `destination` with the
    /// matched tracks.
    pub async fn update(&self, source_name: &str, destination: &str) -> Res<SyncReport> {
        let matches = self.collect_matches(source_name).await?;

        let playlist_id = self
            .playlists
            .resolve_existing_playlist_id(destination)
            .await?;
        self.playlists
            .replace_tracks(&playlist_id, &matches.uris())
            .await?;

        Ok(SyncReport {
            playlist_id,
            matches,
        })
    }

    /// Reads the source playlist and matches every video against Spotify.
    pub async fn collect_matches(&self, source_name: &str) -> Res<MatchSet> {
        let playlist = self
            .reader
            .resolve_playlist_id(&self.session, source_name)
            .await?;
        if playlist.item_count > u64::from(self.reader.page_size()) {
            warning!(
                "Playlist {} has {} videos, only the first {} are synchronised.",
                playlist.title,
                playlist.item_count,
                self.reader.page_size()
            );
        }

        let items = self.reader.list_items(&self.session, &playlist.id).await?;

        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        let mut matches = MatchSet::default();
        for item in &items {
            pb.set_message(item.raw_title.clone());
            match self.match_item(item).await {
                Ok(Some(matched)) => matches.tracks.push(matched),
                Ok(None) => matches.skipped += 1,
                Err(e) if e.is_recoverable() => {
                    pb.suspend(|| warning!("Skipping {}: {}", item.raw_title, e));
                    matches.skipped += 1;
                }
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(matches)
    }

    async fn match_item(&self, item: &SourceItem) -> Res<Option<MatchedTrack>> {
        let metadata = self.extractor.extract(&item.canonical_url).await?;
        let (Some(track), Some(artist)) = (metadata.track, metadata.artist) else {
            return Ok(None);
        };

        let query = NormalizedQuery {
            song: normalize(&track),
            artist: normalize(&artist),
        };
        // Tags without any Latin word would search on the other field alone.
        if query.song.is_empty() || query.artist.is_empty() {
            return Ok(None);
        }
        let uri = self.matcher.search(&query.song, &query.artist).await?;

        Ok(uri.map(|track_uri| MatchedTrack {
            source_title: item.raw_title.clone(),
            source_url: item.canonical_url.clone(),
            song: query.song,
            artist: query.artist,
            track_uri,
        }))
    }
}
