//! Turn raw lexer output into placement-ready tokens.
//!
//! Directives (`#include`, `#define`, ...) are folded into a single token per
//! source line and collected separately, string literals are exploded into
//! one quoted literal per character so the layout can scatter them, and
//! every other token carries its own spacing: words get a trailing space,
//! punctuation does not.

use tracing::trace;

use crate::token::{RawToken, TokenKind, is_quoted};

/// Result of normalization, in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// One entry per directive, without a trailing newline.
    pub directives: Vec<String>,
    /// Tokens the layout places into inked cells.
    pub placement: Vec<String>,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.placement.is_empty()
    }
}

#[derive(Debug)]
enum State {
    Idle,
    /// An open directive and the source line it started on.
    Directive { text: String, line: usize },
}

pub fn normalize(raw: &[RawToken]) -> Normalized {
    let mut out = Normalized::default();
    let mut state = State::Idle;
    for token in raw {
        state = step(state, token, &mut out);
    }
    // A file ending in a directive still gets it.
    if let State::Directive { text, .. } = state {
        close_directive(text, &mut out);
    }
    out
}

fn step(state: State, token: &RawToken, out: &mut Normalized) -> State {
    let text = token.text.as_str();
    match state {
        State::Idle if is_string_literal(text) => {
            explode_string(text, &mut out.placement);
            State::Idle
        }
        State::Idle if text.starts_with('#') => open_directive(token.line),
        State::Directive { text: directive, line } if text.starts_with('#') && line != token.line => {
            close_directive(directive, out);
            open_directive(token.line)
        }
        State::Directive { text: mut directive, line } if line == token.line => {
            directive.push_str(text);
            State::Directive { text: directive, line }
        }
        State::Directive { text: directive, .. } => {
            close_directive(directive, out);
            place(token, out);
            State::Idle
        }
        State::Idle => {
            place(token, out);
            State::Idle
        }
    }
}

fn open_directive(line: usize) -> State {
    State::Directive { text: String::from("#"), line }
}

fn close_directive(text: String, out: &mut Normalized) {
    trace!(directive = %text, "directive closed");
    out.directives.push(text);
}

fn place(token: &RawToken, out: &mut Normalized) {
    match token.kind {
        TokenKind::Comment => {}
        TokenKind::Punctuation => out.placement.push(token.text.clone()),
        TokenKind::Word | TokenKind::Other => out.placement.push(format!("{} ", token.text)),
    }
}

/// Plain `"..."` literal with at least one character between the quotes.
fn is_string_literal(text: &str) -> bool {
    is_quoted(text) && text.len() > 2
}

/// Emit one quoted literal per character; an escape pair stays together.
fn explode_string(literal: &str, placement: &mut Vec<String>) {
    let inner = &literal[1..literal.len() - 1];
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(escaped) = chars.next()
        {
            placement.push(format!("\"\\{}\"", escaped));
        } else {
            placement.push(format!("\"{}\"", ch));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(items: &[(&str, TokenKind, usize)]) -> Vec<RawToken> {
        items.iter().map(|&(text, kind, line)| RawToken::new(text, kind, line)).collect()
    }

    #[test]
    fn ordinary_tokens_get_spacing() {
        let tokens = raw(&[
            ("int", TokenKind::Word, 1),
            ("x", TokenKind::Word, 1),
            ("=", TokenKind::Punctuation, 1),
            ("1", TokenKind::Other, 1),
            ("// note", TokenKind::Comment, 1),
            (";", TokenKind::Punctuation, 1),
        ]);
        let out = normalize(&tokens);
        assert!(out.directives.is_empty());
        assert_eq!(out.placement, vec!["int ", "x ", "=", "1 ", ";"]);
    }

    #[test]
    fn directive_on_one_line_is_concatenated() {
        let tokens = raw(&[
            ("#", TokenKind::Punctuation, 3),
            ("define", TokenKind::Word, 3),
            ("X", TokenKind::Word, 3),
            ("1", TokenKind::Other, 3),
        ]);
        let out = normalize(&tokens);
        assert_eq!(out.directives, vec!["#defineX1"]);
        assert!(out.placement.is_empty());
    }

    #[test]
    fn directive_closes_on_next_line() {
        let tokens = raw(&[
            ("#", TokenKind::Punctuation, 1),
            ("include", TokenKind::Word, 1),
            ("<", TokenKind::Punctuation, 1),
            ("stdio", TokenKind::Word, 1),
            (".", TokenKind::Punctuation, 1),
            ("h", TokenKind::Word, 1),
            (">", TokenKind::Punctuation, 1),
            ("int", TokenKind::Word, 2),
        ]);
        let out = normalize(&tokens);
        assert_eq!(out.directives, vec!["#include<stdio.h>"]);
        assert_eq!(out.placement, vec!["int "]);
    }

    #[test]
    fn consecutive_directives() {
        let tokens = raw(&[
            ("#", TokenKind::Punctuation, 1),
            ("pragma", TokenKind::Word, 1),
            ("once", TokenKind::Word, 1),
            ("#", TokenKind::Punctuation, 2),
            ("define", TokenKind::Word, 2),
            ("A", TokenKind::Word, 2),
            ("main", TokenKind::Word, 3),
        ]);
        let out = normalize(&tokens);
        assert_eq!(out.directives, vec!["#pragmaonce", "#defineA"]);
        assert_eq!(out.placement, vec!["main "]);
    }

    #[test]
    fn hash_inside_directive_line_is_appended() {
        let tokens = raw(&[
            ("#", TokenKind::Punctuation, 1),
            ("define", TokenKind::Word, 1),
            ("S", TokenKind::Word, 1),
            ("(", TokenKind::Punctuation, 1),
            ("x", TokenKind::Word, 1),
            (")", TokenKind::Punctuation, 1),
            ("#", TokenKind::Punctuation, 1),
            ("x", TokenKind::Word, 1),
        ]);
        assert_eq!(normalize(&tokens).directives, vec!["#defineS(x)#x"]);
    }

    #[test]
    fn string_inside_directive_is_not_exploded() {
        let tokens = raw(&[
            ("#", TokenKind::Punctuation, 1),
            ("include", TokenKind::Word, 1),
            ("\"a.h\"", TokenKind::Other, 1),
        ]);
        assert_eq!(normalize(&tokens).directives, vec!["#include\"a.h\""]);
    }

    #[test]
    fn string_explodes_into_characters() {
        let out = normalize(&raw(&[("\"ab\"", TokenKind::Other, 1)]));
        assert_eq!(out.placement, vec!["\"a\"", "\"b\""]);
    }

    #[test]
    fn escape_pair_is_kept_whole() {
        let out = normalize(&raw(&[("\"a\\nb\"", TokenKind::Other, 1)]));
        assert_eq!(out.placement, vec!["\"a\"", "\"\\n\"", "\"b\""]);
    }

    #[test]
    fn empty_string_is_an_ordinary_token() {
        let out = normalize(&raw(&[("\"\"", TokenKind::Other, 1)]));
        assert_eq!(out.placement, vec!["\"\" "]);
    }

    #[test]
    fn continued_directive_stays_whole() {
        let src = "#define MAX(a, b) \\\n    ((a) > (b))\nint x;\n";
        let tokens = crate::lexer::Lexer::new(src).tokenize().unwrap();
        let out = normalize(&tokens);
        assert_eq!(out.directives, vec!["#defineMAX(a,b)((a)>(b))"]);
        assert_eq!(out.placement, vec!["int ", "x ", ";"]);
    }

    #[test]
    fn comments_only_normalize_to_nothing() {
        let out = normalize(&raw(&[("/* a */", TokenKind::Comment, 1), ("// b", TokenKind::Comment, 2)]));
        assert!(out.is_empty());
    }
}
