// Integration tests for the wordpulse application
// These tests verify that all modules work together correctly

use wordpulse::cli::{find_constraints, parse_letter, parse_pattern};
use wordpulse::session::{BASE_DISPLAY_LIMIT, SHOW_MORE_INCREMENT, TextField};
use wordpulse::*;

fn corpus_json(all: &[&str], common: &[&str]) -> String {
    format!(
        r#"{{"allWords": [{}], "commonWords": [{}]}}"#,
        all.iter()
            .map(|w| format!("\"{w}\""))
            .collect::<Vec<_>>()
            .join(", "),
        common
            .iter()
            .map(|w| format!("\"{w}\""))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[test]
fn test_end_to_end_load_and_filter() {
    // The complete pipeline: JSON corpus -> word data -> engine
    let data = load_words_from_str(&corpus_json(
        &["crane", "candy", "crate", "brisk", "crock"],
        &["crane"],
    ))
    .unwrap();

    let mut constraints = Constraints::default();
    constraints.positions[0] = Some('c');
    constraints.include = parse_letter_list("r");
    constraints.exclude = parse_letter_list("b");

    let matches = filter_words(&data.all_words, &constraints);
    assert_eq!(matches, ["crane", "crate", "crock"]);
}

#[test]
fn test_filter_preserves_dictionary_order() {
    let data =
        load_words_from_str(&corpus_json(&["zonal", "apple", "maple", "amble"], &[])).unwrap();

    let mut constraints = Constraints::default();
    constraints.include = parse_letter_list("l");

    // No re-sorting: matches come back in corpus order
    let matches = filter_words(&data.all_words, &constraints);
    assert_eq!(matches, ["zonal", "apple", "maple", "amble"]);
}

#[test]
fn test_empty_constraints_return_whole_corpus() {
    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let matches = filter_words(&words.common_words, &Constraints::default());
    assert_eq!(matches, words.common_words);
}

#[test]
fn test_session_drives_engine_on_every_change() {
    let data = load_words_from_str(&corpus_json(
        &["crane", "candy", "crate", "brisk", "crock"],
        &["crane", "candy", "crate", "brisk", "crock"],
    ))
    .unwrap();
    let mut session = FinderSession::new(data);

    session.set_position(0, Some('c'));
    assert_eq!(session.results(), ["crane", "candy", "crate", "crock"]);

    session.push_field(TextField::Include, 'r');
    assert_eq!(session.results(), ["crane", "crate", "crock"]);

    session.push_field(TextField::Exclude, 'k');
    assert_eq!(session.results(), ["crane", "crate"]);

    session.reset_all();
    assert_eq!(session.match_count(), 5);
}

#[test]
fn test_display_window_grows_and_resets() {
    let all: Vec<String> = ["ba", "ca", "da", "fa", "ga", "ha", "ja", "ka", "la", "ma"]
        .iter()
        .flat_map(|prefix| ["bel", "ker", "lon"].map(|tail| format!("{prefix}{tail}")))
        .collect();
    let all_refs: Vec<&str> = all.iter().map(String::as_str).collect();
    let data = load_words_from_str(&corpus_json(&all_refs, &all_refs)).unwrap();

    let mut session = FinderSession::with_base_limit(data, 10);
    assert_eq!(session.visible().len(), 10);
    assert!(session.has_more());

    session.show_more();
    assert_eq!(session.visible().len(), 30);

    // Any constraint change snaps the window back to its base value
    session.push_field(TextField::Search, 'b');
    assert_eq!(session.display_limit(), 10);
}

#[test]
fn test_default_window_constants() {
    assert_eq!(BASE_DISPLAY_LIMIT, 25);
    assert_eq!(SHOW_MORE_INCREMENT, 100);
}

#[test]
fn test_per_letter_listing_surface() {
    // The listing pages are a thin consumer of the engine's
    // starts-with query over the full dictionary
    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let letter = parse_letter("A").unwrap();
    let matches = filter_words(&words.all_words, &Constraints::starting_with(letter));

    assert!(!matches.is_empty());
    assert!(matches.iter().all(|w| w.starts_with('a')));

    // Every word in the dictionary appears in exactly one listing
    let total: usize = ('a'..='z')
        .map(|c| filter_words(&words.all_words, &Constraints::starting_with(c)).len())
        .sum();
    assert_eq!(total, words.all_words.len());
}

#[test]
fn test_find_command_constraint_assembly() {
    let data = load_words_from_str(&corpus_json(
        &["crane", "candy", "crate", "brisk", "crock"],
        &[],
    ))
    .unwrap();

    let constraints = find_constraints(Some("c...."), Some("r"), Some("b"), None).unwrap();
    let matches = filter_words(&data.all_words, &constraints);
    assert_eq!(matches, ["crane", "crate", "crock"]);
}

#[test]
fn test_pattern_equivalent_to_position_slots() {
    let positions = parse_pattern("..a.e").unwrap();
    let mut from_pattern = Constraints::default();
    from_pattern.positions = positions;

    let mut manual = Constraints::default();
    manual.positions[2] = Some('a');
    manual.positions[4] = Some('e');

    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    assert_eq!(
        filter_words(&words.common_words, &from_pattern),
        filter_words(&words.common_words, &manual)
    );
}

#[test]
fn test_custom_words_file_to_session() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("test_wordpulse_words.json");
    {
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            "{}",
            corpus_json(&["apple", "grape", "lemon", "melon", "peach"], &["apple"])
        )
        .unwrap();
    }

    let data = load_words_from_file(&path).unwrap();
    assert_eq!(data.all_words.len(), 5);
    assert_eq!(data.common_words, ["apple"]);

    let mut session = FinderSession::new(data);
    assert_eq!(session.results(), ["apple"]);
    session.toggle_common_only();
    session.push_field(TextField::Search, 'e');
    assert_eq!(
        session.results(),
        ["apple", "grape", "lemon", "melon", "peach"]
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_corpus_yields_zero_matches_not_errors() {
    let data = load_words_from_str("{}").unwrap();
    let matches = filter_words(data.source(true), &Constraints::starting_with('a'));
    assert!(matches.is_empty());

    let session = FinderSession::new(data);
    assert_eq!(session.match_count(), 0);
}

#[test]
fn test_malformed_filter_input_never_errors() {
    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let mut constraints = Constraints::default();
    constraints.include = parse_letter_list(" ,, A  e ,,, ");
    constraints.exclude = parse_letter_list("!!!");

    // Stray delimiters and punctuation normalize away; exclude is a no-op here
    let matches = filter_words(&words.common_words, &constraints);
    let expected: Vec<&String> = words
        .common_words
        .iter()
        .filter(|w| w.contains('a') && w.contains('e'))
        .collect();
    assert_eq!(matches.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_embedded_corpus_invariants() {
    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    assert!(words.all_words.len() > words.common_words.len());
    assert!(
        words
            .all_words
            .iter()
            .all(|w| w.len() == WORD_LENGTH && w.chars().all(|c| c.is_ascii_lowercase()))
    );
    assert!(
        words
            .common_words
            .iter()
            .all(|w| words.all_words.contains(w))
    );
}

#[test]
fn test_filtering_scales_to_full_corpus() {
    // Full recomputation per keystroke must stay trivially fast for a
    // corpus in the low thousands; exercise the whole dictionary once
    let words = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let mut constraints = Constraints::default();
    constraints.include = parse_letter_list("a,r");

    let matches = filter_words(&words.all_words, &constraints);
    assert!(matches.iter().all(|w| w.contains('a') && w.contains('r')));
    assert!(!matches.is_empty());
}
