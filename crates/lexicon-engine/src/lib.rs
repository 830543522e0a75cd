//! Dictionary-backed spelling engine.
//!
//! Loads a word list into a [`lexicon_trie::Trie`] and answers the questions
//! a text editor asks while the user types: is this word known, which words
//! start with this prefix, which known words are one edit away, and which
//! words in this document are unknown.
//!
//! # Modules
//!
//! - [`dictionary`] -- word-list loading (file, reader, string)
//! - [`speller`] -- the `Speller` lookup trait
//! - [`completion`] -- prefix completion
//! - [`suggestion`] -- single-edit suggestion generators and strategies
//! - [`tokenizer`] -- word/whitespace/punctuation tokenizer
//! - [`checker`] -- whole-document spell checking
//! - [`handle`] -- `LexiconHandle`, the façade owning everything above
//!
//! # Example
//!
//! ```
//! use lexicon_engine::handle::{HandleOptions, LexiconHandle};
//!
//! let handle = LexiconHandle::from_words(["cat", "cats", "can"], HandleOptions::default());
//! assert!(handle.is_known("Cat"));
//! assert_eq!(handle.completions("ca"), vec!["can", "cat", "cats"]);
//! assert!(handle.suggestions_for("cot").contains("cat"));
//! ```

pub mod checker;
pub mod completion;
pub mod dictionary;
pub mod handle;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;

pub use checker::{DocumentReport, Misspelling, SpellChecker};
pub use dictionary::{DictionaryError, LoadOptions};
pub use handle::{HandleOptions, LexiconError, LexiconHandle};
