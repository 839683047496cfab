//! Identifier rules.
//!
//! Lowercase-led words are atoms; everything else starting with `csymf`
//! (uppercase or underscore) is a variable-style word.

use crate::classify;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Word rule. The dispatcher has classified the first character;
    /// `lower` records whether the lowercase-led rule matched.
    pub(crate) fn lex_word(&mut self, lower: bool) -> Token {
        self.cursor.advance();
        while classify::is_csym(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start).to_string();
        if lower {
            Token::LowerWord(text)
        } else {
            Token::Word(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::token::Token;

    #[test]
    fn test_case_split() {
        assert_eq!(
            tokenize("foo").unwrap(),
            vec![Token::LowerWord("foo".into())]
        );
        assert_eq!(tokenize("Foo").unwrap(), vec![Token::Word("Foo".into())]);
        assert_eq!(tokenize("_foo").unwrap(), vec![Token::Word("_foo".into())]);
        assert_eq!(tokenize("_").unwrap(), vec![Token::Word("_".into())]);
    }

    #[test]
    fn test_continuation_characters() {
        assert_eq!(
            tokenize("foo_Bar2").unwrap(),
            vec![Token::LowerWord("foo_Bar2".into())]
        );
    }

    #[test]
    fn test_digits_do_not_start_words() {
        let tokens = tokenize("f2 X9").unwrap();
        assert_eq!(tokens[0], Token::LowerWord("f2".into()));
        assert_eq!(tokens[1], Token::Word("X9".into()));
    }

    #[test]
    fn test_alphabetic_operators_are_words() {
        // `is` and `mod` sit in the operator table, but dispatch reaches
        // them through the word rules.
        let tokens = tokenize("X is Y mod 0x2").unwrap();
        assert_eq!(tokens[1], Token::LowerWord("is".into()));
        assert_eq!(tokens[3], Token::LowerWord("mod".into()));
    }

    #[test]
    fn test_word_stops_at_punctuation() {
        let tokens = tokenize("foo(X)").unwrap();
        assert_eq!(tokens[0], Token::LowerWord("foo".into()));
        assert_eq!(tokens[1], Token::Mark('('));
    }
}
