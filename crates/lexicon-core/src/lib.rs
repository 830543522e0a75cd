//! Shared types for the lexicon word index.
//!
//! - [`character`] -- character classes and case folding
//! - [`enums`] -- token types, traversal order, case mode
//! - [`token`] -- the [`Token`](token::Token) produced by the tokenizer

pub mod character;
pub mod enums;
pub mod token;
