//! Token definitions for the Prolog tokenizer.
//!
//! Tokens are value types: every variant owns its decoded text, so a token
//! stream stays valid after the source buffer is gone.

use std::fmt;

/// Operator associativity code, as used by the standard Prolog operator
/// table and consumed by a downstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assoc {
    /// Infix, neither argument may have equal priority.
    Xfx,
    /// Infix, right-associative.
    Xfy,
    /// Infix, left-associative.
    Yfx,
    /// Prefix, argument may have equal priority.
    Fy,
    /// Prefix.
    Fx,
    /// Postfix.
    Xf,
    /// Postfix, argument may have equal priority.
    Yf,
}

impl Assoc {
    /// The lowercase associativity code, e.g. `"xfy"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Assoc::Xfx => "xfx",
            Assoc::Xfy => "xfy",
            Assoc::Yfx => "yfx",
            Assoc::Fy => "fy",
            Assoc::Fx => "fx",
            Assoc::Xf => "xf",
            Assoc::Yf => "yf",
        }
    }
}

impl fmt::Display for Assoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified lexical unit of Prolog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `%` comment text, newline excluded.
    LineComment(String),
    /// `/* ... */` comment body, markers excluded.
    BlockComment(String),
    /// Back-quoted literal, escapes decoded.
    BackQuotedString(String),
    /// Double-quoted literal, escapes decoded.
    DoubleQuotedString(String),
    /// Single-quoted literal, escapes decoded.
    SingleQuotedString(String),
    /// `0x` literal; the digits only, lower-cased.
    HexLiteral(String),
    /// A declared operator and its associativity. The name is borrowed from
    /// the static operator table.
    Operator(&'static str, Assoc),
    /// A single punctuation character that names no operator.
    Mark(char),
    /// Lowercase-initial identifier (an atom).
    LowerWord(String),
    /// Any other identifier: variables and `_`-prefixed names.
    Word(String),
}

/// Renders a canonical source form of the token: comments get their
/// delimiters back, quoted literals are re-quoted, hex literals regain the
/// `0x` prefix. Joining rendered tokens with single spaces re-tokenizes to
/// the same sequence.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LineComment(text) => writeln!(f, "%{}", text),
            Token::BlockComment(text) => write!(f, "/*{}*/", text),
            Token::BackQuotedString(text) => write_quoted(f, '`', text),
            Token::DoubleQuotedString(text) => write_quoted(f, '"', text),
            Token::SingleQuotedString(text) => write_quoted(f, '\'', text),
            Token::HexLiteral(digits) => write!(f, "0x{}", digits),
            Token::Operator(name, _) => f.write_str(name),
            Token::Mark(c) => write!(f, "{}", c),
            Token::LowerWord(text) | Token::Word(text) => f.write_str(text),
        }
    }
}

/// Writes a decoded literal body back between its quotes.
///
/// Most content is verbatim, but two shapes would change meaning if copied
/// raw and are re-escaped with the `\x..\` form:
/// - a quote character that is not part of a retained doubled pair (it came
///   from a numeric escape, and raw it would terminate the literal);
/// - a backslash followed by `x`, `u`, `U`, an octal digit, or nothing (the
///   decoder never retains such pairs, so the backslash came from a numeric
///   escape, and raw it would start one on re-tokenization).
///
/// A backslash followed by anything else is a retained two-character pair
/// and is emitted as a unit, so the character after it is never mistaken
/// for a terminator.
fn write_quoted(f: &mut fmt::Formatter<'_>, quote: char, text: &str) -> fmt::Result {
    write!(f, "{}", quote)?;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        if c == quote {
            if next == Some(quote) {
                chars.next();
                write!(f, "{}{}", quote, quote)?;
            } else {
                write!(f, "\\x{:x}\\", c as u32)?;
            }
        } else if c == '\\' {
            match next {
                None | Some('x' | 'u' | 'U' | '0'..='7') => write!(f, "\\x5c\\")?,
                Some(n) => {
                    chars.next();
                    write!(f, "\\{}", n)?;
                },
            }
        } else {
            write!(f, "{}", c)?;
        }
    }
    write!(f, "{}", quote)
}
