//! YouTube to Spotify playlist synchronisation library
//!
//! This library reads the videos of a YouTube playlist, resolves the song and
//! artist behind every video, looks up the matching Spotify track and either
//! creates a new Spotify playlist from the matches or replaces the contents of
//! an existing one.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local OAuth callback listener
//! - `cli` - Command flows, prompts and console reporting
//! - `config` - Configuration loading from `.env` and the environment
//! - `errors` - Error taxonomy shared by every component
//! - `metadata` - Track/artist resolution for a video URL
//! - `server` - Local HTTP listener used during the YouTube login
//! - `spotify` - Spotify Web API track search and playlist writes
//! - `sync` - The orchestrator wiring all components together
//! - `text` - Normalisation of titles and artist names for searching
//! - `types` - Data structures and wire types
//! - `utils` - PKCE helpers
//! - `youtube` - YouTube login and playlist reading
//!
//! # Example
//!
//! ```
//! use playlist_sync::{config, Config};
//!
//! #[tokio::main]
//! async fn main() -> playlist_sync::Res<()> {
//!     config::load_env().await?;
//!     let config = Config::from_env()?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod server;
pub mod spotify;
pub mod sync;
pub mod text;
pub mod types;
pub mod utils;
pub mod youtube;

pub use config::Config;
pub use errors::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the library reports one of the [`Error`]
/// variants, so callers can tell fatal failures (authentication, missing
/// playlists, upstream HTTP errors) from per-item metadata failures.
///
/// # Example
///
/// ```
/// use playlist_sync::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for status updates while a run
/// progresses.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Creation done!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the program with exit code 1 right after printing. Only the
/// binary uses it, for errors that abort the run.
///
/// # Example
///
/// ```
/// error!("could not find the spotify playlist named {}", name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a video whose metadata could not be
/// resolved.
///
/// # Example
///
/// ```
/// warning!("Skipping {}: {}", title, reason);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
