// LexiconHandle: top-level integration point for editor hosts.
//
// Owns the dictionary trie and the suggestion strategy, and exposes the four
// host-facing operations: single-word lookup, prefix completion, fuzzy
// suggestion and whole-document checking.
//
// Design notes:
// - The trie is built exactly once, in a constructor, and only handed out
//   as `&Trie` afterwards. There is no global dictionary state.
// - Lightweight views (PrefixCompleter, SpellChecker) are created on the fly
//   in each method call instead of being stored, so the handle holds no
//   self-references.
// - Nothing inside uses interior mutability. The handle is `Send + Sync`;
//   wrap it in an `Arc` to run suggestions on worker threads.

use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use lexicon_core::character::fold_case;
use lexicon_core::enums::TraversalOrder;
use lexicon_core::token::Token;
use lexicon_trie::Trie;
use tracing::{debug, info};

use crate::checker::{DocumentReport, SpellChecker};
use crate::completion::PrefixCompleter;
use crate::dictionary::{self, DictionaryError, LoadOptions};
use crate::suggestion::{Alphabet, SuggestionStrategy, single_edit_strategy};
use crate::tokenizer;

/// Error type for LexiconHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// None of the candidate dictionary locations exists.
    #[error("no dictionary found; searched:\n{}", format_paths(searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleOptions {
    /// How the word list is loaded.
    pub load: LoadOptions,
    /// Letters tried by substitution and insertion.
    pub alphabet: Alphabet,
}

/// Top-level handle owning an immutable dictionary.
pub struct LexiconHandle {
    trie: Trie,
    strategy: SuggestionStrategy,
    options: HandleOptions,
}

impl LexiconHandle {
    /// Load the dictionary from a word-list file.
    pub fn from_path(path: impl AsRef<Path>, options: HandleOptions) -> Result<Self, LexiconError> {
        let trie = dictionary::build_dictionary(path, &options.load)?;
        Ok(Self::from_trie(trie, options))
    }

    /// Load the dictionary from the first candidate path that is a file.
    ///
    /// Returns [`LexiconError::NotFound`] listing every candidate if none
    /// exists. A candidate that exists but cannot be read is reported as a
    /// dictionary error rather than skipped.
    pub fn discover(candidates: &[PathBuf], options: HandleOptions) -> Result<Self, LexiconError> {
        for path in candidates {
            if path.is_file() {
                debug!(path = %path.display(), "dictionary candidate found");
                return Self::from_path(path, options);
            }
            debug!(path = %path.display(), "dictionary candidate missing");
        }
        Err(LexiconError::NotFound {
            searched: candidates.to_vec(),
        })
    }

    /// Load the dictionary from a line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R, options: HandleOptions) -> Result<Self, LexiconError> {
        let trie = dictionary::load_from_reader(reader, &options.load)?;
        Ok(Self::from_trie(trie, options))
    }

    /// Build the dictionary from an in-memory word list, applying the
    /// configured case mode to each entry.
    pub fn from_words<I, S>(words: I, options: HandleOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let case_mode = options.load.case_mode;
        let trie: Trie = words
            .into_iter()
            .map(|w| case_mode.apply(w.as_ref()).into_owned())
            .collect();
        Self::from_trie(trie, options)
    }

    /// Wrap an already built trie.
    pub fn from_trie(trie: Trie, options: HandleOptions) -> Self {
        let strategy = single_edit_strategy(options.alphabet.clone());
        info!(
            words = trie.len(),
            alphabet = options.alphabet.len(),
            "lexicon handle ready"
        );
        Self {
            trie,
            strategy,
            options,
        }
    }

    // =========================================================================
    // Host-facing operations
    // =========================================================================

    /// Check whether a single word is in the dictionary.
    ///
    /// The word is lowercased before lookup.
    pub fn is_known(&self, word: &str) -> bool {
        self.trie.contains(&fold_case(word))
    }

    /// All dictionary words starting with `prefix` (lowercased), in
    /// lexicographic order. Never truncated.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        PrefixCompleter::new(&self.trie).complete(prefix)
    }

    /// Like [`completions`](Self::completions) with an explicit order.
    pub fn completions_with(&self, prefix: &str, order: TraversalOrder) -> Vec<String> {
        PrefixCompleter::new(&self.trie).complete_with(prefix, order)
    }

    /// Dictionary words exactly one substitution, deletion or insertion
    /// away from `word` (lowercased).
    ///
    /// Meant for unknown words. For a known word the word itself is part of
    /// the result, since substituting any letter by itself reaches it.
    pub fn suggestions_for(&self, word: &str) -> BTreeSet<String> {
        self.strategy.suggest(&self.trie, &fold_case(word))
    }

    /// Check a whole document: every distinct unknown word mapped to its
    /// suggestions.
    pub fn check_document(&self, text: &str) -> DocumentReport {
        SpellChecker::new(&self.trie, &self.strategy).check(text)
    }

    /// Tokenize text into a list of tokens.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The dictionary trie.
    pub fn dictionary(&self) -> &Trie {
        &self.trie
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// The options this handle was built with.
    pub fn options(&self) -> &HandleOptions {
        &self.options
    }

    /// Return the crate version (from Cargo.toml).
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl std::fmt::Debug for LexiconHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconHandle")
            .field("words", &self.trie.len())
            .field("nodes", &self.trie.node_count())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::Arc;

    fn handle(words: &[&str]) -> LexiconHandle {
        LexiconHandle::from_words(words, HandleOptions::default())
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn handle_is_send_and_sync() {
        assert_send_sync::<LexiconHandle>();
    }

    #[test]
    fn is_known_lowercases() {
        let h = handle(&["dog"]);
        assert!(h.is_known("dog"));
        assert!(h.is_known("Dog"));
        assert!(h.is_known("DOG"));
        assert!(!h.is_known("dg"));
        assert!(!h.is_known(""));
    }

    #[test]
    fn from_words_folds_entries() {
        let h = handle(&["Paris"]);
        assert!(h.is_known("paris"));
        assert!(h.dictionary().contains("paris"));
    }

    #[test]
    fn preserved_entries_need_exact_trie_lookup() {
        let options = HandleOptions {
            load: LoadOptions::preserve_case(),
            ..HandleOptions::default()
        };
        let h = LexiconHandle::from_words(["Paris"], options);
        assert_eq!(h.options().load, LoadOptions::preserve_case());
        assert!(!h.is_known("Paris"));
        assert!(h.dictionary().contains("Paris"));
    }

    #[test]
    fn completions_and_order() {
        let h = handle(&["cat", "cats", "can", "bat"]);
        assert_eq!(h.completions("Ca"), vec!["can", "cat", "cats"]);
        assert_eq!(
            h.completions_with("c", TraversalOrder::BreadthFirst),
            vec!["can", "cat", "cats"]
        );
    }

    #[test]
    fn suggestions_lowercase_input() {
        let h = handle(&["cat"]);
        let s = h.suggestions_for("COT");
        assert_eq!(s.into_iter().collect::<Vec<_>>(), vec!["cat"]);
    }

    #[test]
    fn suggestions_for_known_word_include_itself() {
        let h = handle(&["cat"]);
        assert!(h.suggestions_for("cat").contains("cat"));
    }

    #[test]
    fn check_document_delegates() {
        let h = handle(&["dog"]);
        let report = h.check_document("dog dg");
        assert_eq!(report.len(), 1);
        assert!(report.get("dg").unwrap().contains("dog"));
    }

    #[test]
    fn from_reader_and_from_path() {
        let h = LexiconHandle::from_reader(Cursor::new("cat\ncats\n"), HandleOptions::default()).unwrap();
        assert_eq!(h.word_count(), 2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Dog").unwrap();
        let h = LexiconHandle::from_path(file.path(), HandleOptions::default()).unwrap();
        assert!(h.is_known("dog"));
    }

    #[test]
    fn missing_path_is_dictionary_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexiconHandle::from_path(dir.path().join("missing.txt"), HandleOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Dictionary(DictionaryError::SourceMissing { .. })
        ));
    }

    #[test]
    fn discover_picks_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = dir.path().join("dictionary.txt");
        std::fs::write(&present, "cat\n").unwrap();
        let h = LexiconHandle::discover(&[missing, present], HandleOptions::default()).unwrap();
        assert!(h.is_known("cat"));
    }

    #[test]
    fn discover_reports_all_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().join("a.txt"), dir.path().join("b.txt")];
        match LexiconHandle::discover(&candidates, HandleOptions::default()) {
            Err(LexiconError::NotFound { searched }) => assert_eq!(searched, candidates),
            Err(other) => panic!("expected NotFound, got: {other}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn custom_alphabet_is_used() {
        let options = HandleOptions {
            alphabet: Alphabet::new(['ä', 'a']),
            ..HandleOptions::default()
        };
        let h = LexiconHandle::from_words(["äes"], options);
        assert!(h.suggestions_for("aes").contains("äes"));
    }

    #[test]
    fn shared_across_threads() {
        let h = Arc::new(handle(&["cat", "dog", "bird"]));
        let workers: Vec<_> = ["cot", "dg", "bard"]
            .into_iter()
            .map(|word| {
                let h = Arc::clone(&h);
                std::thread::spawn(move || h.suggestions_for(word))
            })
            .collect();
        let results: Vec<BTreeSet<String>> =
            workers.into_iter().map(|w| w.join().unwrap()).collect();
        assert!(results[0].contains("cat"));
        assert!(results[1].contains("dog"));
        assert!(results[2].contains("bird"));
    }

    #[test]
    fn tokens_passthrough() {
        let h = handle(&[]);
        assert_eq!(h.tokens("a b").len(), 3);
    }

    #[test]
    fn version_is_cargo_version() {
        assert_eq!(LexiconHandle::version(), env!("CARGO_PKG_VERSION"));
    }
}
