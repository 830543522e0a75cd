// Document spell checking: tokenize, look up each distinct word once,
// collect suggestions for the unknown ones.

use std::collections::{BTreeMap, BTreeSet};

use hashbrown::{HashMap, HashSet};
use lexicon_core::character::fold_case;
use tracing::debug;

use crate::speller::Speller;
use crate::suggestion::SuggestionStrategy;
use crate::tokenizer;

/// One unknown word and its suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// The unknown word, lowercased.
    pub word: String,
    /// Dictionary words one edit away (possibly empty).
    pub suggestions: BTreeSet<String>,
}

/// Result of checking a document: unknown word -> suggestion set.
///
/// Each distinct unknown word appears once, in order of first occurrence.
/// Positions are not tracked; locating the words in the original text is
/// up to the caller.
#[derive(Debug, Clone, Default)]
pub struct DocumentReport {
    entries: Vec<Misspelling>,
    index: HashMap<String, usize>,
    word_tokens: usize,
    distinct_words: usize,
}

impl DocumentReport {
    fn push(&mut self, word: String, suggestions: BTreeSet<String>) {
        self.index.insert(word.clone(), self.entries.len());
        self.entries.push(Misspelling { word, suggestions });
    }

    /// Suggestions for an unknown word, or `None` if the word was not flagged.
    pub fn get(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.index.get(word).map(|&i| &self.entries[i].suggestions)
    }

    /// Whether `word` (lowercased form) was flagged as unknown.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct unknown words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unknown words in order of first occurrence.
    pub fn iter(&self) -> std::slice::Iter<'_, Misspelling> {
        self.entries.iter()
    }

    /// Total number of word tokens in the document.
    pub fn word_tokens(&self) -> usize {
        self.word_tokens
    }

    /// Number of distinct (lowercased) words in the document.
    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    /// Convert into a plain sorted map.
    pub fn into_map(self) -> BTreeMap<String, BTreeSet<String>> {
        self.entries
            .into_iter()
            .map(|m| (m.word, m.suggestions))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DocumentReport {
    type Item = &'a Misspelling;
    type IntoIter = std::slice::Iter<'a, Misspelling>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Checks whole documents against a speller.
pub struct SpellChecker<'a> {
    speller: &'a dyn Speller,
    strategy: &'a SuggestionStrategy,
}

impl<'a> SpellChecker<'a> {
    pub fn new(speller: &'a dyn Speller, strategy: &'a SuggestionStrategy) -> Self {
        Self { speller, strategy }
    }

    /// Check `text` and report every distinct unknown word.
    ///
    /// Words are lowercased for lookup. A word occurring many times is
    /// looked up, and if unknown given suggestions, only once.
    pub fn check(&self, text: &str) -> DocumentReport {
        let mut report = DocumentReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for token in tokenizer::word_tokens(text) {
            report.word_tokens += 1;
            let word = fold_case(&token.text);
            if !seen.insert(word.clone()) {
                continue;
            }

            let word_chars: Vec<char> = word.chars().collect();
            if self.speller.spell(&word_chars) {
                continue;
            }
            let suggestions = self.strategy.suggest(self.speller, &word);
            report.push(word, suggestions);
        }
        report.distinct_words = seen.len();

        debug!(
            tokens = report.word_tokens,
            distinct = report.distinct_words,
            unknown = report.len(),
            "document checked"
        );
        report
    }
}
