//! The standard Prolog operator table.
//!
//! Process-wide static data, loaded once and never mutated. The tokenizer
//! queries it by exact name from the symbol recognizer; a downstream parser
//! can walk [`OPERATORS`] directly for precedence information.
//!
//! Alphabetic operators (`is`, `mod`, `dynamic`, ...) are listed too: the
//! tokenizer emits them as words, but the table is the single authority on
//! what is an operator.

use crate::token::Assoc;

/// One operator declaration: precedence, associativity, name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorEntry {
    /// Operator priority, 1..=1200.
    pub precedence: u16,
    /// Associativity code.
    pub assoc: Assoc,
    /// The operator name.
    pub name: &'static str,
}

const fn op(precedence: u16, assoc: Assoc, name: &'static str) -> OperatorEntry {
    OperatorEntry {
        precedence,
        assoc,
        name,
    }
}

/// The operator table, in declaration order. Names may repeat (`:-`, `+`,
/// `-`, `\`); [`lookup`] resolves duplicates to the first entry.
pub static OPERATORS: &[OperatorEntry] = &[
    op(1200, Assoc::Xfx, "-->"),
    op(1200, Assoc::Xfx, ":-"),
    op(1200, Assoc::Fx, ":-"),
    op(1200, Assoc::Fx, "?-"),
    op(1150, Assoc::Fx, "dynamic"),
    op(1150, Assoc::Fx, "discontiguous"),
    op(1150, Assoc::Fx, "initialization"),
    op(1150, Assoc::Fx, "meta_predicate"),
    op(1150, Assoc::Fx, "module_transparent"),
    op(1150, Assoc::Fx, "multifile"),
    op(1150, Assoc::Fx, "public"),
    op(1150, Assoc::Fx, "thread_local"),
    op(1150, Assoc::Fx, "thread_initialization"),
    op(1150, Assoc::Fx, "volatile"),
    op(1105, Assoc::Xfy, "|"),
    op(1100, Assoc::Xfy, ";"),
    op(1050, Assoc::Xfy, "->"),
    op(1050, Assoc::Xfy, "*->"),
    op(1000, Assoc::Xfy, ","),
    op(990, Assoc::Xfx, ":="),
    op(900, Assoc::Fy, "\\+"),
    op(700, Assoc::Xfx, "<"),
    op(700, Assoc::Xfx, "="),
    op(700, Assoc::Xfx, "=.."),
    op(700, Assoc::Xfx, "=@="),
    op(700, Assoc::Xfx, "\\=@="),
    op(700, Assoc::Xfx, "=:="),
    op(700, Assoc::Xfx, "=<"),
    op(700, Assoc::Xfx, "=="),
    op(700, Assoc::Xfx, "=\\="),
    op(700, Assoc::Xfx, ">"),
    op(700, Assoc::Xfx, ">="),
    op(700, Assoc::Xfx, "@<"),
    op(700, Assoc::Xfx, "@=<"),
    op(700, Assoc::Xfx, "@>"),
    op(700, Assoc::Xfx, "@>="),
    op(700, Assoc::Xfx, "\\="),
    op(700, Assoc::Xfx, "\\=="),
    op(700, Assoc::Xfx, "as"),
    op(700, Assoc::Xfx, "is"),
    op(700, Assoc::Xfx, ">:<"),
    op(700, Assoc::Xfx, ":<"),
    op(600, Assoc::Xfy, ":"),
    op(500, Assoc::Yfx, "+"),
    op(500, Assoc::Yfx, "-"),
    op(500, Assoc::Yfx, "/\\"),
    op(500, Assoc::Yfx, "\\/"),
    op(500, Assoc::Yfx, "xor"),
    op(500, Assoc::Fx, "?"),
    op(400, Assoc::Yfx, "*"),
    op(400, Assoc::Yfx, "/"),
    op(400, Assoc::Yfx, "//"),
    op(400, Assoc::Yfx, "div"),
    op(400, Assoc::Yfx, "rdiv"),
    op(400, Assoc::Yfx, "<<"),
    op(400, Assoc::Yfx, ">>"),
    op(400, Assoc::Yfx, "mod"),
    op(400, Assoc::Yfx, "rem"),
    op(200, Assoc::Xfx, "**"),
    op(200, Assoc::Xfy, "^"),
    op(200, Assoc::Fy, "+"),
    op(200, Assoc::Fy, "-"),
    op(200, Assoc::Fy, "\\"),
    op(100, Assoc::Yfx, "."),
    op(1, Assoc::Fx, "$"),
];

/// Looks up an operator by exact name, returning the first entry in table
/// order.
///
/// # Example
///
/// ```
/// use prolog_lex::ops;
/// use prolog_lex::Assoc;
///
/// let entry = ops::lookup("-->").unwrap();
/// assert_eq!(entry.precedence, 1200);
/// assert_eq!(entry.assoc, Assoc::Xfx);
/// assert!(ops::lookup("~").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static OperatorEntry> {
    OPERATORS.iter().find(|entry| entry.name == name)
}

/// Returns true if `name` is a declared operator.
pub fn is_operator(name: &str) -> bool {
    lookup(name).is_some()
}
