// Token public API type

use crate::enums::TokenType;

/// A text token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Whether this is a word token.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    /// Character offset one past the end of this token.
    pub fn end(&self) -> usize {
        self.pos + self.token_len
    }
}

/// An empty `None` token at position 0, signaling end-of-text.
impl Default for Token {
    fn default() -> Self {
        Self {
            token_type: TokenType::None,
            text: String::new(),
            token_len: 0,
            pos: 0,
        }
    }
}
