// Shared enums: TokenType, TraversalOrder, CaseMode

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Run of word characters (letters, digits, `_`).
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Any other character.
    Unknown,
}

/// Order in which prefix completions are reported.
///
/// Both orders report the same set of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Lexicographic depth-first order.
    #[default]
    DepthFirst,
    /// Level order: shorter completions come first, ties in
    /// lexicographic order.
    BreadthFirst,
}

/// How dictionary entries are cased when they are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseMode {
    /// Fold every entry to lowercase, matching lowercase queries.
    #[default]
    Lowercase,
    /// Insert entries verbatim.
    Preserve,
}

impl CaseMode {
    /// Apply this mode to a dictionary entry.
    pub fn apply<'a>(self, word: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            CaseMode::Lowercase if !crate::character::is_folded(word) => {
                std::borrow::Cow::Owned(crate::character::fold_case(word))
            }
            _ => std::borrow::Cow::Borrowed(word),
        }
    }
}
