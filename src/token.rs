/// Lexical class of a raw token. Only the distinctions the renderer cares
/// about are kept: punctuation is glued to its neighbours, comments are
/// dropped, everything else is followed by a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
    Comment,
    Other,
}

/// A token as produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub kind: TokenKind,
    /// 1-based logical line of the token: backslash-newlines do not start a new one.
    pub line: usize,
}

impl RawToken {
    pub fn new(text: impl Into<String>, kind: TokenKind, line: usize) -> Self {
        RawToken { text: text.into(), kind, line }
    }
}

/// A directive token, always rendered on a line of its own.
pub fn is_directive(token: &str) -> bool {
    token.starts_with('#')
}

/// A quoted token: either a single character exploded out of a string
/// literal or a string literal that was kept whole.
pub fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

/// Display width of a placement token, in grid characters.
pub fn width(token: &str) -> usize {
    token.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_shapes() {
        assert!(is_directive("#include<stdio.h>"));
        assert!(!is_directive("x "));
        assert!(is_quoted("\"a\""));
        assert!(is_quoted("\"\\n\""));
        assert!(!is_quoted("\""));
        assert!(!is_quoted("printf "));
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert_eq!(width("int "), 4);
        assert_eq!(width("\"é\""), 3);
    }
}
