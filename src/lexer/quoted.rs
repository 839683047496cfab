//! Quoted literal rules and the escape decoder.
//!
//! Back-, double- and single-quoted literals share one body scanner, keyed
//! by the quote character. The decoder expands hex, unicode and octal
//! escapes into characters; every other `\<char>` pair is retained as-is
//! for a later stage, as is a doubled quote.

use crate::classify;
use crate::cursor::CursorSnapshot;
use crate::error::LexError;
use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Quoted literal rule for the quote character `quote`.
    pub(crate) fn lex_quoted(&mut self, quote: char) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote
        let content = self.quoted_body(quote)?;
        Ok(match quote {
            '`' => Token::BackQuotedString(content),
            '"' => Token::DoubleQuotedString(content),
            _ => Token::SingleQuotedString(content),
        })
    }

    /// Scans the body of a quoted literal up to and including the closing
    /// quote, which is not part of the output.
    fn quoted_body(&mut self, quote: char) -> Result<String, LexError> {
        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.err_unterminated("quoted literal"));
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                if self.cursor.current_char() == quote {
                    // Doubled quote: one literal quote. Both characters are
                    // retained; collapsing the pair is left to the caller.
                    content.push(quote);
                    content.push(quote);
                    self.cursor.advance();
                    continue;
                }
                return Ok(content);
            }
            if c == '\\' {
                self.decode_escape(&mut content)?;
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }
    }

    /// Decodes one backslash escape, appending the result to `content`.
    /// The cursor is on the backslash.
    ///
    /// Recognized shapes:
    /// - `\x<hex-digits>\` - code point by hex, closing backslash required
    /// - `\u<4 hex>` / `\U<8 hex>` - fixed-width, no closing backslash
    /// - `\<1-8 octal digits>` - code point by octal; no closing backslash
    ///   is consumed (the hex form requires one, this form does not -
    ///   the asymmetry is inherited from the grammar this implements)
    /// - `\<anything else>` - the two-character pair retained verbatim
    fn decode_escape(&mut self, content: &mut String) -> Result<(), LexError> {
        let at = self.cursor.snapshot();
        self.cursor.advance(); // '\\'

        if self.cursor.is_at_end() {
            return Err(self.err_malformed("escape cut short by end of input", at));
        }

        let c = self.cursor.current_char();
        match c {
            'x' => {
                self.cursor.advance();
                let mut digits = String::new();
                while classify::is_xdigit(self.cursor.current_char()) {
                    digits.push(self.cursor.current_char().to_ascii_lowercase());
                    self.cursor.advance();
                }
                if digits.is_empty() {
                    return Err(self.err_malformed("hex escape with no digits", at));
                }
                if self.cursor.current_char() != '\\' {
                    return Err(self.err_malformed("hex escape missing closing backslash", at));
                }
                self.cursor.advance();
                content.push(self.code_point(&digits, 16, at)?);
            },
            'u' => {
                self.cursor.advance();
                let digits = self.fixed_hex_digits(4, at)?;
                content.push(self.code_point(&digits, 16, at)?);
            },
            'U' => {
                self.cursor.advance();
                let digits = self.fixed_hex_digits(8, at)?;
                content.push(self.code_point(&digits, 16, at)?);
            },
            '0'..='7' => {
                let mut digits = String::new();
                while digits.len() < 8 && ('0'..='7').contains(&self.cursor.current_char()) {
                    digits.push(self.cursor.current_char());
                    self.cursor.advance();
                }
                content.push(self.code_point(&digits, 8, at)?);
            },
            _ => {
                // Two-character escape like \n or \t: the shape is
                // recognized, interpretation is deferred downstream.
                content.push('\\');
                content.push(c);
                self.cursor.advance();
            },
        }
        Ok(())
    }

    /// Consumes exactly `count` hex digits, lower-cased.
    fn fixed_hex_digits(
        &mut self,
        count: usize,
        at: CursorSnapshot,
    ) -> Result<String, LexError> {
        let mut digits = String::new();
        for _ in 0..count {
            let c = self.cursor.current_char();
            if !classify::is_xdigit(c) {
                return Err(self.err_malformed("truncated unicode escape", at));
            }
            digits.push(c.to_ascii_lowercase());
            self.cursor.advance();
        }
        Ok(digits)
    }

    /// Converts escape digits to a character.
    fn code_point(
        &self,
        digits: &str,
        radix: u32,
        at: CursorSnapshot,
    ) -> Result<char, LexError> {
        let value = u32::from_str_radix(digits, radix)
            .map_err(|_| self.err_malformed("escape value out of range", at))?;
        char::from_u32(value).ok_or_else(|| self.err_malformed("escape denotes an invalid code point", at))
    }
}
