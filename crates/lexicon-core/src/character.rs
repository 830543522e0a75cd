// Character classification and case folding

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    /// The underscore, which joins word characters like a letter does.
    Connector,
    Whitespace,
    Punctuation,
}

impl CharType {
    /// Whether characters of this type belong inside a word token.
    pub fn is_word(self) -> bool {
        matches!(self, CharType::Letter | CharType::Digit | CharType::Connector)
    }
}

/// Returns the character type for a given character.
///
/// Letters and digits follow the Unicode alphabetic and numeric properties,
/// so "naïve", "ß" and "٣" are all word material.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c == '_' {
        return CharType::Connector;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_ascii_punctuation() {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

// ---------------------------------------------------------------------------
// Case folding
//
// Normalization is plain Unicode lowercasing. No locale rules, no
// diacritic stripping.
// ---------------------------------------------------------------------------

/// Lowercase a whole word.
///
/// Uses the full Unicode mapping of `str::to_lowercase`, which is what
/// both dictionary loading and query normalization go through.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Returns `true` if lowercasing would leave the word unchanged.
pub fn is_folded(word: &str) -> bool {
    word.chars().all(|c| c.to_lowercase().eq(std::iter::once(c)))
}
