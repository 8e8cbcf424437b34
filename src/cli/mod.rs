//! # CLI Module
//!
//! User-facing command flows for `playlist <DESTINATION> <SOURCE> <ACTION>`.
//!
//! ## Commands
//!
//! - [`playlist`] - Signs in to YouTube, matches the source playlist against
//!   Spotify and runs the create or update path, printing the matched tracks
//!   and "Creation done!" / "Update done!" on success.
//! - [`prompt_description`] - The interactive description question asked
//!   before a create run.
//!
//! ## Data Flow
//!
//! ```text
//! CLI Layer (prompts, tables, messages)
//!     ↓
//! Orchestrator (sync)
//!     ↓
//! YouTube reader · yt-dlp · Spotify matcher · Spotify playlists
//! ```
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

mod playlist;

pub use playlist::playlist;
pub use playlist::print_matches;
pub use playlist::prompt_description;
