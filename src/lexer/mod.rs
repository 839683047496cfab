//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - Lexer struct, whitespace skipping, and rule dispatch
//! - `comment` - line and block comment rules
//! - `quoted` - quoted literal rules and the escape decoder
//! - `number` - hex literal rule
//! - `symbol` - longest-match operator recognizer and mark fallback
//! - `word` - identifier rules

mod comment;
mod core;
mod number;
mod quoted;
mod symbol;
mod word;

pub use self::core::{tokenize, Lexer};
