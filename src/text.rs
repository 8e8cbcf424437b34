//! Normalisation of video titles and artist names.
//!
//! Video tags often carry decorations that make a catalogue search miss:
//! Hangul or other non-Latin titles next to the Latin one, quotes, brackets
//! and "feat." credits. [`normalize`] keeps only the Latin alphanumeric words
//! up to the first featuring marker.
//!
//! ```text
//! 작은 것들을 위한 시 (Boy With Luv) (ft. Halsey)  ->  Boy With Luv
//! Winter Flower (Feat. RM of BTS)                  ->  Winter Flower
//! ```

/// Replaces every run of characters outside `[A-Za-z0-9]` with one space and
/// trims the result. Non-Latin scripts are dropped entirely.
pub fn strip_non_alphanumeric(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Keeps the words before the first `feat`/`ft` token (compared
/// case-insensitively), joined with single spaces. Case is preserved.
pub fn strip_featuring_suffix(text: &str) -> String {
    text.split_whitespace()
        .take_while(|word| !is_featuring_marker(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_featuring_marker(word: &str) -> bool {
    word.eq_ignore_ascii_case("feat") || word.eq_ignore_ascii_case("ft")
}

/// Search-ready form of a title or artist name.
pub fn normalize(text: &str) -> String {
    strip_featuring_suffix(&strip_non_alphanumeric(text))
}
