//! Track and artist resolution for a video URL.
//!
//! YouTube exposes the music tags of a video ("Song" / "Artist" in the
//! description panel) only through the watch page, so resolution is delegated
//! to `yt-dlp`, which parses the page and reports the tags as `track` and
//! `artist` in its JSON dump.

use std::process::Stdio;

use tokio::process::Command;

use crate::{Error, Res, types::ExtractedMetadata};

/// Resolves the music tags of one video.
#[allow(async_fn_in_trait)]
pub trait MetadataExtractor {
    /// Returns whatever track/artist tags are known for `canonical_url`;
    /// fields are `None` when the video carries no such tag.
    ///
    /// # Errors
    ///
    /// [`Error::Metadata`] when the resolver fails. Callers skip the item.
    async fn extract(&self, canonical_url: &str) -> Res<ExtractedMetadata>;
}

/// [`MetadataExtractor`] backed by the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    binary: String,
}

impl YtDlpExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl MetadataExtractor for YtDlpExtractor {
    async fn extract(&self, canonical_url: &str) -> Res<ExtractedMetadata> {
        let output = Command::new(&self.binary)
            .args([
                "--dump-single-json",
                "--skip-download",
                "--no-playlist",
                "--no-warnings",
                canonical_url,
            ])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::metadata(canonical_url, format!("cannot run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::metadata(canonical_url, stderr.trim()));
        }

        parse_dump(&output.stdout).map_err(|e| Error::metadata(canonical_url, e))
    }
}

/// Pulls `track` and `artist` out of a `yt-dlp` JSON dump. Blank tags count
/// as absent.
pub fn parse_dump(json: &[u8]) -> Result<ExtractedMetadata, serde_json::Error> {
    let raw: ExtractedMetadata = serde_json::from_slice(json)?;
    Ok(ExtractedMetadata {
        track: raw.track.filter(|t| !t.trim().is_empty()),
        artist: raw.artist.filter(|a| !a.trim().is_empty()),
    })
}
