use playlist_sync::text::*;

// Titles as they show up in music video playlists
const SAMPLES: &[&str] = &[
    "작은 것들을 위한 시 (Boy With Luv) (ft. Halsey)",
    "Winter Flower (Feat. RM of BTS)",
    "\"You Were Beautiful(예뻤어)\"",
    "내가 처음 만져본 강아지 (Love me)",
    "BLACKPINK - 'How You Like That' M/V",
    "Stay (feat. Justin Bieber) [Official Video]",
    "  Dynamite  ",
    "ft",
    "FEAT",
    "",
    "---",
    "Ünïcödé Çharacters",
    "Song Ft. A Feat. B",
    "tab\tseparated\nlines",
];

#[test]
fn test_normalize_boy_with_luv() {
    // Hangul, brackets and the "ft." credit are dropped, case is kept
    assert_eq!(
        normalize("작은 것들을 위한 시 (Boy With Luv) (ft. Halsey)"),
        "Boy With Luv"
    );
}

#[test]
fn test_normalize_winter_flower() {
    assert_eq!(normalize("Winter Flower (Feat. RM of BTS)"), "Winter Flower");
}

#[test]
fn test_normalize_you_were_beautiful() {
    assert_eq!(normalize("\"You Were Beautiful(예뻤어)\""), "You Were Beautiful");
}

#[test]
fn test_normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_normalize_output_charset() {
    for sample in SAMPLES {
        let out = normalize(sample);

        // Only ASCII letters, digits and single inner spaces
        assert!(
            out.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
            "unexpected character in {:?}",
            out
        );
        assert_eq!(out.trim(), out);
        assert!(!out.contains("  "));
    }
}

#[test]
fn test_normalize_drops_non_latin_letters() {
    // Accented letters are outside [A-Za-z] and split words
    assert_eq!(normalize("Ünïcödé Çharacters"), "n c d haracters");
}

#[test]
fn test_strip_non_alphanumeric_keeps_digits() {
    assert_eq!(strip_non_alphanumeric("24K Magic (2016)"), "24K Magic 2016");
}

#[test]
fn test_strip_featuring_suffix_without_marker() {
    assert_eq!(
        strip_featuring_suffix("Boy   With Luv"),
        "Boy With Luv"
    );
}

#[test]
fn test_bare_marker_yields_empty() {
    assert_eq!(normalize("ft"), "");
    assert_eq!(normalize("FEAT"), "");
}
