// Suggestion generation module
//
// Produces "did you mean" candidates for a word by applying every
// single-character edit (substitution, deletion, insertion) and keeping
// the results the speller accepts.
//
// Architecture:
//   - `alphabet`: the letter set used by substitution and insertion
//   - `generators`: one generator per edit class (SuggestionGenerator trait)
//   - `status`: candidate set and probe counter for one word
//   - `strategy`: runs a generator list and unions the results

pub mod alphabet;
pub mod generators;
pub mod status;
pub mod strategy;

pub use alphabet::Alphabet;
pub use generators::SuggestionGenerator;
pub use status::SuggestionStatus;
pub use strategy::{SuggestionStrategy, default_single_edit_strategy, single_edit_strategy};
