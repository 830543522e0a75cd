// Suggestion status tracking: candidate set and probe accounting

use std::collections::BTreeSet;

/// Tracks the state of suggestion generation for one input word.
///
/// Collects accepted candidates as a set (duplicates found by different
/// edit classes collapse) and counts every dictionary probe made on the
/// word's behalf. There is no budget: the whole single-edit neighborhood
/// is always explored.
pub struct SuggestionStatus<'a> {
    /// The word for which suggestions are being generated (char slice).
    word: &'a [char],
    /// Number of dictionary probes performed so far.
    probes: usize,
    /// Accepted candidates.
    suggestions: BTreeSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    /// Create a new suggestion status for the given word.
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            probes: 0,
            suggestions: BTreeSet::new(),
        }
    }

    /// Record one dictionary probe.
    pub fn charge(&mut self) {
        self.probes += 1;
    }

    /// Number of probes recorded.
    pub fn probe_count(&self) -> usize {
        self.probes
    }

    /// Add a candidate. Returns `false` if it was already present.
    pub fn add_suggestion(&mut self, suggestion: String) -> bool {
        self.suggestions.insert(suggestion)
    }

    /// Return the current suggestion count.
    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Return the word being checked.
    pub fn word(&self) -> &[char] {
        self.word
    }

    /// Return the word length in characters.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Return a reference to the collected suggestions.
    pub fn suggestions(&self) -> &BTreeSet<String> {
        &self.suggestions
    }

    /// Consume the status and return the collected suggestions.
    pub fn into_suggestions(self) -> BTreeSet<String> {
        self.suggestions
    }
}
