use std::io;

use clap::{
    CommandFactory, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playlist_sync::{
    Config, cli, config, error,
    sync::Action,
    types::PlaylistSpec,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = "playlist",
  bin_name = "playlist",
  author = env!("CARGO_PKG_AUTHORS"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Name of the Spotify playlist to create or update
    #[clap(required_unless_present = "completions")]
    destination: Option<String>,

    /// Name of the YouTube playlist to read the songs from
    #[clap(required_unless_present = "completions")]
    source: Option<String>,

    /// Create a new Spotify playlist or replace the tracks of an existing one
    #[clap(value_enum, required_unless_present = "completions")]
    action: Option<ActionKind>,

    /// Description of the new playlist; skips the interactive question
    #[clap(long)]
    description: Option<String>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    Create,
    Update,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    let (Some(destination), Some(source), Some(kind)) = (cli.destination, cli.source, cli.action)
    else {
        error!("Expected three arguments: destination playlist, source playlist, create|update");
    };

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let action = match kind {
        ActionKind::Create => {
            let description = match cli.description {
                Some(d) => Some(d),
                None => match cli::prompt_description(&mut io::stdin().lock(), &mut io::stdout()) {
                    Ok(d) => d,
                    Err(e) => error!("{}", e),
                },
            };
            Action::Create(PlaylistSpec::new(destination, description))
        }
        ActionKind::Update => Action::Update { destination },
    };

    if let Err(e) = cli::playlist(&config, &source, action).await {
        error!("{}", e);
    }
}
