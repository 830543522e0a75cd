// Suggestion strategy orchestration: runs generators over one word

use std::collections::BTreeSet;

use tracing::debug;

use super::alphabet::Alphabet;
use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Speller;

// =========================================================================
// SuggestionStrategy
// =========================================================================

/// An ordered list of generators whose results are unioned.
///
/// Every generator always runs to completion: the result is the exact set
/// of dictionary words the generators can reach, not a budgeted sample.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    /// Build a strategy from an explicit generator list.
    pub fn new(generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator against the word tracked by `status`.
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            generator.generate(speller, status);
        }
    }

    /// Convenience wrapper: suggestions for a word given as a string.
    ///
    /// The word is used exactly as given; callers normalize case first.
    pub fn suggest(&self, speller: &dyn Speller, word: &str) -> BTreeSet<String> {
        let word_chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&word_chars);
        self.generate(speller, &mut status);
        debug!(
            word,
            probes = status.probe_count(),
            found = status.suggestion_count(),
            "generated suggestions"
        );
        status.into_suggestions()
    }

    /// Number of generators in this strategy.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }
}

impl std::fmt::Debug for SuggestionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionStrategy")
            .field("generators", &self.generators.len())
            .finish()
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// The single-edit strategy: substitution, deletion and insertion over
/// `alphabet`.
///
/// This is exactly the edit-distance-1 neighborhood without transposition.
/// For a word of length L it costs `L * |alphabet|` substitution probes,
/// `L` deletion probes and `(L + 1) * |alphabet|` insertion probes.
pub fn single_edit_strategy(alphabet: Alphabet) -> SuggestionStrategy {
    SuggestionStrategy::new(vec![
        Box::new(Substitution {
            alphabet: alphabet.clone(),
        }),
        Box::new(Deletion),
        Box::new(Insertion { alphabet }),
    ])
}

/// Single-edit strategy over the ASCII lowercase alphabet.
pub fn default_single_edit_strategy() -> SuggestionStrategy {
    single_edit_strategy(Alphabet::ascii_lowercase())
}
