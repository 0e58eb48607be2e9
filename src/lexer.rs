use crate::error::{LexError, Span};
use crate::token::{RawToken, TokenKind};

/// Multi-character punctuators, longest first so the first match wins.
const PUNCTUATORS: &[&str] = &[
    "...", "<<=", ">>=", "->*",
    "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||",
    "*=", "/=", "%=", "+=", "-=", "&=", "^=", "|=", "##", "::", ".*",
];

/// Encoding prefixes allowed in front of string and character literals.
const LITERAL_PREFIXES: &[&str] = &["L", "u", "U", "u8"];

/// Raw-mode C/C++ lexer: no preprocessing, no keyword table. Directives come
/// out as a `#` punctuator followed by ordinary tokens on the same line.
pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    /// Backslash-newlines consumed so far; token lines are physical minus this.
    spliced: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            spliced: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<RawToken>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };
            let start = Span::new(self.line, self.col);

            let (text, kind) = match ch {
                '/' if self.peek_at(1) == Some('/') => (self.read_line_comment(), TokenKind::Comment),
                '/' if self.peek_at(1) == Some('*') => (self.read_block_comment(start)?, TokenKind::Comment),
                '"' | '\'' => (self.read_quoted(String::new(), start)?, TokenKind::Other),
                '.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                    (self.read_number(), TokenKind::Other)
                }
                _ if ch.is_ascii_digit() => (self.read_number(), TokenKind::Other),
                _ if is_ident_start(ch) => self.read_word(start)?,
                _ => (self.read_punctuator(), TokenKind::Punctuation),
            };

            tokens.push(RawToken::new(text, kind, start.line - self.spliced));
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c' => {
                    self.bump();
                }
                // Line continuation outside of a literal.
                '\\' if self.peek_at(1) == Some('\n') => {
                    self.bump();
                    self.bump();
                    self.spliced += 1;
                }
                '\\' if self.peek_at(1) == Some('\r') && self.peek_at(2) == Some('\n') => {
                    self.bump();
                    self.bump();
                    self.bump();
                    self.spliced += 1;
                }
                _ => break,
            }
        }
    }

    fn read_line_comment(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.bump();
        }
        text
    }

    fn read_block_comment(&mut self, start: Span) -> Result<String, LexError> {
        let mut text = String::from("/*");
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => return Err(LexError::new(start, "unterminated block comment")),
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    text.push_str("*/");
                    return Ok(text);
                }
                Some(ch) => text.push(ch),
            }
        }
    }

    /// Read a string or character literal starting at the opening quote.
    /// Escapes are kept verbatim; the normalizer relies on seeing them.
    fn read_quoted(&mut self, prefix: String, start: Span) -> Result<String, LexError> {
        let mut text = prefix;
        let Some(quote) = self.bump() else {
            return Err(LexError::new(start, "expected literal"));
        };
        text.push(quote);
        let what = if quote == '"' { "string" } else { "character" };
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexError::new(start, format!("unterminated {} literal", what)));
                }
                Some('\\') => {
                    text.push('\\');
                    self.bump();
                    if let Some(escaped) = self.bump() {
                        text.push(escaped);
                    }
                }
                Some(ch) => {
                    text.push(ch);
                    self.bump();
                    if ch == quote {
                        return Ok(text);
                    }
                }
            }
        }
    }

    /// Preprocessing number: digits, letters, `.`, digit separators and signed exponents.
    fn read_number(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if matches!(ch, 'e' | 'E' | 'p' | 'P') && matches!(self.peek_at(1), Some('+' | '-')) {
                text.push(ch);
                self.bump();
                if let Some(sign) = self.bump() {
                    text.push(sign);
                }
            } else if ch == '\'' && self.peek_at(1).is_some_and(|c| c.is_ascii_alphanumeric()) {
                text.push(ch);
                self.bump();
            } else if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
                text.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    fn read_word(&mut self, start: Span) -> Result<(String, TokenKind), LexError> {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !is_ident_continue(ch) {
                break;
            }
            text.push(ch);
            self.bump();
        }
        if LITERAL_PREFIXES.contains(&text.as_str()) && matches!(self.peek(), Some('"' | '\'')) {
            return Ok((self.read_quoted(text, start)?, TokenKind::Other));
        }
        Ok((text, TokenKind::Word))
    }

    fn read_punctuator(&mut self) -> String {
        for punct in PUNCTUATORS {
            let matched = punct
                .chars()
                .enumerate()
                .all(|(i, c)| self.peek_at(i) == Some(c));
            if matched {
                for _ in 0..punct.chars().count() {
                    self.bump();
                }
                return (*punct).to_string();
            }
        }
        self.bump().map(String::from).unwrap_or_default()
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || (!ch.is_ascii() && ch.is_alphabetic())
}

fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}
