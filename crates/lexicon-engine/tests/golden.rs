//! Golden tests: run the engine against a fixed fixture dictionary and
//! compare with recorded expectations.
//!
//! Fixtures live in `tests/golden/`:
//! - `dictionary.txt` -- the word list (mixed case, loaded lowercased)
//! - `suggestions.json`, `completions.json`, `documents.json` -- cases
//!
//! Run: cargo test -p lexicon-engine --test golden

use std::collections::BTreeSet;
use std::path::PathBuf;

use lexicon_engine::handle::{HandleOptions, LexiconHandle};
use lexicon_engine::suggestion::Alphabet;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

fn load_golden<T: for<'de> Deserialize<'de>>(filename: &str) -> T {
    let path = golden_dir().join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn fixture_handle(options: HandleOptions) -> LexiconHandle {
    let path = golden_dir().join("dictionary.txt");
    LexiconHandle::from_path(&path, options)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

#[derive(Debug, Deserialize)]
struct SuggestionFile {
    alphabet: String,
    cases: Vec<SuggestionCase>,
}

#[derive(Debug, Deserialize)]
struct SuggestionCase {
    word: String,
    expected: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionFile {
    cases: Vec<CompletionCase>,
}

#[derive(Debug, Deserialize)]
struct CompletionCase {
    prefix: String,
    expected: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentFile {
    cases: Vec<DocumentCase>,
}

#[derive(Debug, Deserialize)]
struct DocumentCase {
    text: String,
    word_tokens: usize,
    unknown: Vec<UnknownWord>,
}

#[derive(Debug, Deserialize)]
struct UnknownWord {
    word: String,
    suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fixture_dictionary_loads_lowercased() {
    let handle = fixture_handle(HandleOptions::default());
    assert_eq!(handle.word_count(), 43);
    assert!(handle.dictionary().contains("paris"));
    assert!(handle.dictionary().contains("i"));
    assert!(!handle.dictionary().contains("Paris"));
}

#[test]
fn suggestions_match_golden() {
    let golden: SuggestionFile = load_golden("suggestions.json");
    let options = HandleOptions {
        alphabet: golden.alphabet.parse::<Alphabet>().unwrap(),
        ..HandleOptions::default()
    };
    let handle = fixture_handle(options);

    let mut mismatches = Vec::new();
    for case in &golden.cases {
        let actual = handle.suggestions_for(&case.word);
        let expected: BTreeSet<String> = case.expected.iter().cloned().collect();
        if actual != expected {
            mismatches.push(format!(
                "  {:?}: expected {:?}, got {:?}",
                case.word, expected, actual
            ));
        }
    }
    assert!(
        mismatches.is_empty(),
        "{} suggestion mismatches:\n{}",
        mismatches.len(),
        mismatches.join("\n")
    );
}

#[test]
fn completions_match_golden() {
    let golden: CompletionFile = load_golden("completions.json");
    let handle = fixture_handle(HandleOptions::default());

    for case in &golden.cases {
        assert_eq!(
            handle.completions(&case.prefix),
            case.expected,
            "completions for prefix {:?}",
            case.prefix
        );
    }
}

#[test]
fn documents_match_golden() {
    let golden: DocumentFile = load_golden("documents.json");
    let handle = fixture_handle(HandleOptions::default());

    for case in &golden.cases {
        let report = handle.check_document(&case.text);
        assert_eq!(report.word_tokens(), case.word_tokens, "tokens in {:?}", case.text);

        let actual: Vec<(String, Vec<String>)> = report
            .iter()
            .map(|m| (m.word.clone(), m.suggestions.iter().cloned().collect()))
            .collect();
        let expected: Vec<(String, Vec<String>)> = case
            .unknown
            .iter()
            .map(|u| (u.word.clone(), u.suggestions.clone()))
            .collect();
        assert_eq!(actual, expected, "report for {:?}", case.text);
    }
}
