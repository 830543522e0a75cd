// Individual suggestion generators: each applies one class of single-character
// edit to produce candidate words, then validates them via the speller.

use super::alphabet::Alphabet;
use super::status::SuggestionStatus;
use crate::speller::Speller;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual suggestion generators.
///
/// Each generator produces candidate words by applying one class of edit
/// operation to the input word, then validates each candidate through the
/// speller. Generators are shared by every thread using a handle, hence
/// the `Send + Sync` bound.
pub trait SuggestionGenerator: Send + Sync {
    /// Generate suggestions for the word tracked by `status`, using `speller`
    /// to validate candidates.
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Check a candidate buffer against the speller and, if it is a dictionary
/// word, add it to the suggestion status.
///
/// Candidates are never compared against the input word: if an edit maps
/// the word onto itself (substituting a letter by the same letter) and the
/// word is in the dictionary, it is reported like any other candidate.
pub fn suggest_for_buffer(speller: &dyn Speller, status: &mut SuggestionStatus<'_>, buffer: &[char]) {
    status.charge();
    if speller.spell(buffer) {
        status.add_suggestion(buffer.iter().collect());
    }
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Try replacing the character at every position with every alphabet letter.
pub struct Substitution {
    pub alphabet: Alphabet,
}

impl SuggestionGenerator for Substitution {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = word.clone();

        for i in 0..word.len() {
            for &c in self.alphabet.letters() {
                buffer[i] = c;
                suggest_for_buffer(speller, status, &buffer);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
///
/// Deleting either letter of a doubled pair yields the same candidate; the
/// status collapses the duplicate.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let wlen = word.len();
        let mut buffer = Vec::with_capacity(wlen.saturating_sub(1));

        for i in 0..wlen {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(speller, status, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Try inserting every alphabet letter before every position, including
/// after the last character. An empty word gets each letter on its own.
pub struct Insertion {
    pub alphabet: Alphabet,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let wlen = word.len();
        let mut buffer = vec!['\0'; wlen + 1];

        for i in 0..=wlen {
            buffer[..i].copy_from_slice(&word[..i]);
            buffer[i + 1..].copy_from_slice(&word[i..]);
            for &c in self.alphabet.letters() {
                buffer[i] = c;
                suggest_for_buffer(speller, status, &buffer);
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
