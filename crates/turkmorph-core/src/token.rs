// Tokenizer output.

use crate::enums::TokenType;

/// A text token.
///
/// Positions are in code points, matching what the tokenizer sees; the
/// stemmer driver converts them to byte offsets in a single forward scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in code points.
    pub token_len: usize,

    /// Code point offset of the first character of the token.
    pub pos: usize,
}

impl Token {
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

    /// Code point offset one past the last character.
    pub fn end(&self) -> usize {
        self.pos + self.token_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let tok = Token::new(TokenType::Word, "kitap", 0);
        assert_eq!(tok.token_type, TokenType::Word);
        assert_eq!(tok.text, "kitap");
        assert_eq!(tok.token_len, 5);
        assert_eq!(tok.end(), 5);
    }

    #[test]
    fn token_length_counts_code_points() {
        // "ışık" is 4 code points, 7 bytes
        let tok = Token::new(TokenType::Word, "ışık", 3);
        assert_eq!(tok.token_len, 4);
        assert_eq!(tok.end(), 7);
    }
}
