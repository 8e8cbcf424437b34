use std::io::{BufRead, Write};

use tabled::Table;

use crate::{
    Config, Error, Res, info,
    metadata::YtDlpExtractor,
    success,
    sync::{Action, MatchSet, Orchestrator},
    types::MatchTableRow,
    youtube::auth,
};

pub async fn playlist(config: &Config, source: &str, action: Action) -> Res<()> {
    info!("Signing in to YouTube...");
    let session = auth::authenticate(config).await?;

    let orchestrator = Orchestrator::new(config, session, YtDlpExtractor::new(&config.ytdlp_path));

    info!("Matching videos of {} against Spotify...", source);
    let report = orchestrator.run(source, &action).await?;

    info!(
        "Matched {} videos, skipped {}.",
        report.matches.tracks.len(),
        report.matches.skipped
    );
    print_matches(&report.matches);

    match action {
        Action::Create(_) => success!("Creation done!"),
        Action::Update { .. } => success!("Update done!"),
    }
    Ok(())
}

pub fn print_matches(matches: &MatchSet) {
    if matches.tracks.is_empty() {
        return;
    }

    let rows: Vec<MatchTableRow> = matches.tracks.iter().map(MatchTableRow::from).collect();
    println!("{}", Table::new(rows));
}

/// Asks whether the new playlist gets a custom description.
///
/// Returns `None` on "n" so the default description applies, or the typed
/// text on "y".
///
/// # Errors
///
/// [`Error::Input`] for any answer other than `y` or `n`.
pub fn prompt_description<R, W>(input: &mut R, output: &mut W) -> Res<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "would you like to add a description for the new playlist? [y/n]"
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim() {
        "n" => Ok(None),
        "y" => {
            write!(output, "your description: ")?;
            output.flush()?;

            let mut description = String::new();
            input.read_line(&mut description)?;
            Ok(Some(description.trim_end_matches(['\r', '\n']).to_string()))
        }
        _ => Err(Error::Input("enter 'y' or 'n'".to_string())),
    }
}
