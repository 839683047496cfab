//! Operator recognition: greedy longest-match over symbolic runs, with a
//! single-character mark as the fallback.

use crate::classify;
use crate::ops;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Operator rule over a maximal run of symbolic characters.
    ///
    /// The whole run is tried against the operator table first, then
    /// shrunk by one trailing character at a time. The first length that
    /// names an operator commits; the rest of the run is left for the next
    /// dispatch. If no prefix matches, the first character becomes a mark.
    /// Either way this rule always produces a token.
    pub(crate) fn lex_symbol_run(&mut self) -> Token {
        let snapshot = self.cursor.snapshot();
        let start = self.cursor.position();
        while classify::is_symbolic(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let run = self.cursor.slice_from(start);

        // Symbolic characters are all ASCII, so byte lengths are character
        // counts and prefix slicing is safe.
        for len in (1..=run.len()).rev() {
            if let Some(entry) = ops::lookup(&run[..len]) {
                self.cursor.restore(snapshot);
                self.cursor.advance_n(len);
                return Token::Operator(entry.name, entry.assoc);
            }
        }

        self.cursor.restore(snapshot);
        let c = self.cursor.current_char();
        self.cursor.advance();
        Token::Mark(c)
    }

    /// Solo mark rule: one of `()[]{},|;!`. Those the table names (`,`,
    /// `;`, `|`) are operators; the rest are marks.
    pub(crate) fn lex_solo(&mut self) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();

        let mut buf = [0u8; 4];
        match ops::lookup(c.encode_utf8(&mut buf)) {
            Some(entry) => Token::Operator(entry.name, entry.assoc),
            None => Token::Mark(c),
        }
    }
}
