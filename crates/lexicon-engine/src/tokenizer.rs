// Tokenizer: splits text into word, whitespace, punctuation and unknown tokens
//
// A word is a maximal run of word characters (letters, digits and `_`).
// Everything between words is reported too, so concatenating the token
// texts reproduces the input exactly.

use lexicon_core::character::{CharType, get_char_type};
use lexicon_core::enums::TokenType;
use lexicon_core::token::Token;

/// Find the next token starting at position `pos`.
///
/// Returns the token type and its length in characters, or
/// `(TokenType::None, 0)` at end of text.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    let Some(slice) = text.get(pos..).filter(|s| !s.is_empty()) else {
        return (TokenType::None, 0);
    };

    match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit | CharType::Connector => {
            let len = run_length(slice, CharType::is_word);
            (TokenType::Word, len)
        }
        CharType::Whitespace => {
            let len = run_length(slice, |t| t == CharType::Whitespace);
            (TokenType::Whitespace, len)
        }
        CharType::Punctuation => (TokenType::Punctuation, 1),
        CharType::Unknown => (TokenType::Unknown, 1),
    }
}

/// Length of the leading run of characters whose type satisfies `keep`.
fn run_length(slice: &[char], keep: impl Fn(CharType) -> bool) -> usize {
    slice
        .iter()
        .position(|&c| !keep(get_char_type(c)))
        .unwrap_or(slice.len())
}

/// Tokenize a whole text.
pub fn tokenize(text: &str) -> Vec<Token> {
    let text_chars: Vec<char> = text.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;
    while pos < text_chars.len() {
        let (token_type, token_len) = next_token(&text_chars, pos);
        if token_type == TokenType::None || token_len == 0 {
            break;
        }
        let token_text: String = text_chars[pos..pos + token_len].iter().collect();
        result.push(Token::new(token_type, token_text, pos));
        pos += token_len;
    }
    result
}

/// Word tokens only, in text order.
pub fn word_tokens(text: &str) -> Vec<Token> {
    tokenize(text).into_iter().filter(Token::is_word).collect()
}
