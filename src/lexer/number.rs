//! Hex literal rule.
//!
//! The only numeric literal in this grammar: `0x` followed by one or more
//! hex digits. Decimal integers are out of scope and fail the pass.

use crate::classify;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Hex literal rule. The dispatcher has already verified `0x` plus at
    /// least one hex digit, so this cannot fail.
    pub(crate) fn lex_hex(&mut self) -> Token {
        self.cursor.advance(); // '0'
        self.cursor.advance(); // 'x'

        let start = self.cursor.position();
        while classify::is_xdigit(self.cursor.current_char()) {
            self.cursor.advance();
        }

        Token::HexLiteral(self.cursor.slice_from(start).to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::lexer::tokenize;
    use crate::token::Token;

    #[test]
    fn test_hex_literal() {
        assert_eq!(
            tokenize("0x1f").unwrap(),
            vec![Token::HexLiteral("1f".into())]
        );
    }

    #[test]
    fn test_hex_digits_lower_cased() {
        assert_eq!(
            tokenize("0xDEADbeef").unwrap(),
            vec![Token::HexLiteral("deadbeef".into())]
        );
    }

    #[test]
    fn test_hex_stops_at_non_digit() {
        let tokens = tokenize("0x1g").unwrap();
        assert_eq!(tokens[0], Token::HexLiteral("1".into()));
        assert_eq!(tokens[1], Token::LowerWord("g".into()));
    }

    #[test]
    fn test_hex_prefix_without_digits_fails() {
        // "0x" with no digit falls through every rule and fails at '0'.
        assert!(matches!(
            tokenize("0x").unwrap_err(),
            LexError::UnrecognizedCharacter { ch: '0', .. }
        ));
        assert!(matches!(
            tokenize("0").unwrap_err(),
            LexError::UnrecognizedCharacter { ch: '0', .. }
        ));
    }
}
