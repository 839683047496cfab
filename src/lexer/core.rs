//! Core lexer implementation: the per-position rule dispatcher.

use crate::classify;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::LexError;
use crate::token::Token;

/// Tokenizes a complete Prolog source text.
///
/// Returns the full token sequence, or the first fatal failure. There is no
/// partial output: a pass either completes or fails.
///
/// # Example
///
/// ```
/// use prolog_lex::{tokenize, Token};
///
/// let tokens = tokenize("foo :- bar.").unwrap();
/// assert_eq!(tokens[0], Token::LowerWord("foo".into()));
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Single-pass tokenizer over one source buffer.
///
/// At each position the rules are tried in a fixed priority order: line
/// comment, block comment, quoted literals, hex literal, operator, mark,
/// lowercase-led word, other word. The first rule that matches commits.
pub struct Lexer<'a> {
    /// Character cursor; owned exclusively for the duration of the pass.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Set once a pass has failed; the iterator then fuses.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            failed: false,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input, or the fatal
    /// error that ends the pass.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        match self.cursor.current_char() {
            '%' => {
                if let Some(token) = self.lex_line_comment() {
                    return Ok(Some(token));
                }
                // No terminating newline: the rule fails, and nothing
                // further down accepts '%'.
                Err(self.err_unrecognized('%'))
            },
            '/' if self.cursor.peek_char(1) == '*' => self.lex_block_comment().map(Some),
            c @ ('`' | '"' | '\'') => self.lex_quoted(c).map(Some),
            '0' if self.cursor.peek_char(1) == 'x'
                && classify::is_xdigit(self.cursor.peek_char(2)) =>
            {
                Ok(Some(self.lex_hex()))
            },
            c if classify::is_symbolic(c) => Ok(Some(self.lex_symbol_run())),
            c if classify::is_solo(c) => Ok(Some(self.lex_solo())),
            c if classify::is_lower(c) => Ok(Some(self.lex_word(true))),
            c if classify::is_csymf(c) => Ok(Some(self.lex_word(false))),
            c => Err(self.err_unrecognized(c)),
        }
    }

    /// Skips whitespace between tokens. Whitespace is never emitted; its
    /// presence only delimits tokens.
    fn skip_whitespace(&mut self) {
        while classify::is_space(self.cursor.current_char()) && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    pub(crate) fn err_unrecognized(&self, ch: char) -> LexError {
        LexError::UnrecognizedCharacter {
            ch,
            offset: self.token_start,
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    /// Unterminated-literal error pointing at the opening delimiter.
    pub(crate) fn err_unterminated(&self, construct: &'static str) -> LexError {
        LexError::UnterminatedLiteral {
            construct,
            offset: self.token_start,
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }

    /// Malformed-escape error pointing at the backslash.
    pub(crate) fn err_malformed(&self, reason: &'static str, at: CursorSnapshot) -> LexError {
        LexError::MalformedEscape {
            reason,
            offset: at.position,
            line: at.line,
            column: at.column,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}
