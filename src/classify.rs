//! Character classification for the Prolog tokenizer.
//!
//! Each predicate is pure and total over `char`. A character may satisfy
//! several classes (`a` is both a hex digit and a lowercase letter); most
//! control characters satisfy none, which makes them fail every token rule.

/// The symbolic-operator characters. Maximal runs of these feed the
/// longest-match operator recognizer.
pub const SYMBOLIC_CHARS: &str = "#$&*+-./:<=>?@^~\\";

/// The solo punctuation marks. These never join runs; each one is a token
/// of its own (an operator if the table names it, otherwise a mark).
pub const SOLO_CHARS: &str = "()[]{},|;!";

/// Whitespace between tokens. Skipped, never emitted.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// End-of-line characters, which terminate line comments.
#[inline]
pub fn is_end_of_line(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Returns the 0-9 weight of a decimal digit, or `None`.
///
/// # Example
///
/// ```
/// use prolog_lex::classify::digit_weight;
///
/// assert_eq!(digit_weight('7'), Some(7));
/// assert_eq!(digit_weight('x'), None);
/// ```
#[inline]
pub fn digit_weight(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// Hex digit, case-insensitive.
#[inline]
pub fn is_xdigit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Lowercase letter; the first character of an atom.
#[inline]
pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Valid first character of a plain identifier: a letter of either case,
/// or underscore.
///
/// # Example
///
/// ```
/// use prolog_lex::classify::is_csymf;
///
/// assert!(is_csymf('a'));
/// assert!(is_csymf('X'));
/// assert!(is_csymf('_'));
/// assert!(!is_csymf('1'));
/// ```
#[inline]
pub fn is_csymf(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Valid identifier continuation: `csymf` or a decimal digit.
#[inline]
pub fn is_csym(c: char) -> bool {
    is_csymf(c) || digit_weight(c).is_some()
}

/// One of the symbolic-operator characters.
#[inline]
pub fn is_symbolic(c: char) -> bool {
    SYMBOLIC_CHARS.contains(c)
}

/// One of the solo punctuation marks.
#[inline]
pub fn is_solo(c: char) -> bool {
    SOLO_CHARS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\n'));
        assert!(!is_space('a'));
    }

    #[test]
    fn test_end_of_line() {
        assert!(is_end_of_line('\n'));
        assert!(is_end_of_line('\r'));
        assert!(!is_end_of_line(' '));
    }

    #[test]
    fn test_digit_weight() {
        assert_eq!(digit_weight('0'), Some(0));
        assert_eq!(digit_weight('9'), Some(9));
        assert_eq!(digit_weight('a'), None);
    }

    #[test]
    fn test_xdigit() {
        assert!(is_xdigit('0'));
        assert!(is_xdigit('a'));
        assert!(is_xdigit('F'));
        assert!(!is_xdigit('g'));
    }

    #[test]
    fn test_lower() {
        assert!(is_lower('a'));
        assert!(!is_lower('A'));
        assert!(!is_lower('_'));
    }

    #[test]
    fn test_csymf_csym() {
        assert!(is_csymf('z'));
        assert!(is_csymf('Z'));
        assert!(is_csymf('_'));
        assert!(!is_csymf('3'));
        assert!(is_csym('3'));
        assert!(is_csym('_'));
        assert!(!is_csym('-'));
    }

    #[test]
    fn test_symbolic_vs_solo() {
        for c in SYMBOLIC_CHARS.chars() {
            assert!(is_symbolic(c), "{c} should be symbolic");
            assert!(!is_solo(c), "{c} should not be solo");
        }
        for c in SOLO_CHARS.chars() {
            assert!(is_solo(c), "{c} should be solo");
            assert!(!is_symbolic(c), "{c} should not be symbolic");
        }
    }

    #[test]
    fn test_control_chars_unclassified() {
        assert!(!is_symbolic('\x01'));
        assert!(!is_solo('\x01'));
        assert!(!is_csymf('\x01'));
        assert!(!is_space('\x01'));
    }
}
