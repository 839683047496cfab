//! prolog-lex - A tokenizer for Prolog source text.
//!
//! This crate converts raw Prolog source into a flat sequence of classified
//! tokens: comments, quoted literals (with escape decoding), hex literals,
//! operators tagged with their associativity, punctuation marks, and
//! identifiers. The stream is faithful enough for a formatter: comments are
//! tokens, and rendering the sequence back out re-tokenizes identically.
//!
//! It is a single-pass batch tokenizer. There is no parser here, no
//! precedence resolution and no I/O; callers hand in the full source text
//! and get back either the complete token sequence or the first fatal
//! error.
//!
//! # Example Usage
//!
//! ```
//! use prolog_lex::{tokenize, Assoc, Token};
//!
//! let tokens = tokenize("X is 0x2a.").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Word("X".into()),
//!         Token::LowerWord("is".into()),
//!         Token::HexLiteral("2a".into()),
//!         Token::Operator(".", Assoc::Yfx),
//!     ]
//! );
//! ```
//!
//! Token-at-a-time consumption mirrors the same API:
//!
//! ```
//! use prolog_lex::Lexer;
//!
//! let mut lexer = Lexer::new("foo :- bar.");
//! while let Some(token) = lexer.next_token().unwrap() {
//!     println!("{token:?}");
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and associativity types
//! - [`lexer`] - The rule dispatcher and token rules
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classification predicates
//! - [`ops`] - The static operator table
//! - [`error`] - Fatal lexical errors
//!
//! # Token Rules
//!
//! At each position the rules are tried in priority order; the first match
//! commits:
//!
//! 1. Line comment `% ...` (requires a terminating newline)
//! 2. Block comment `/* ... */`
//! 3. Back-, double-, single-quoted literals
//! 4. Hex literal `0x...`
//! 5. Operator (longest-match over a symbolic run)
//! 6. Mark (single punctuation character)
//! 7. Lowercase-led word (atom)
//! 8. Other word (variables, `_`-prefixed names)
//!
//! Whitespace between tokens is skipped, never emitted. Any other character
//! fails the pass with [`LexError::UnrecognizedCharacter`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod ops;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use ops::{is_operator, lookup, OperatorEntry, OPERATORS};
pub use token::{Assoc, Token};
