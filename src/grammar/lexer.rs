//! Lexer: splits a naming string into words, bracket groups and markers.
//!
//! The lexer is context-free. Whether a bracket group is an entity
//! identifier (`AHU[1]`) or a relationship tag (`[feeds]`) is decided by the
//! parser from its position.

use super::error::{GrammarError, GrammarResult};

/// Byte-level source span for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn join(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Kind of a lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of word characters: a class name outside brackets.
    Word(String),
    /// Text between `[` and `]`, trimmed.
    Bracket(String),
    /// `/`, the bare structural separator.
    Slash,
    /// `>`, the feeds arrow.
    Arrow,
    /// `;`, the clause delimiter.
    Semicolon,
}

impl TokenKind {
    /// Short human description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Word(w) => format!("word `{w}`"),
            TokenKind::Bracket(b) => format!("`[{b}]`"),
            TokenKind::Slash => "`/`".into(),
            TokenKind::Arrow => "`>`".into(),
            TokenKind::Semicolon => "`;`".into(),
        }
    }
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Characters allowed in words and bracket contents.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Tokenize a naming string.
pub fn tokenize(input: &str) -> GrammarResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let single = match c {
            '/' => Some(TokenKind::Slash),
            '>' => Some(TokenKind::Arrow),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        };
        if let Some(kind) = single {
            chars.next();
            tokens.push(Token {
                kind,
                span: Span::new(start, start + 1),
            });
            continue;
        }

        if c == '[' {
            chars.next();
            let mut end = None;
            for (i, ch) in chars.by_ref() {
                if ch == ']' {
                    end = Some(i);
                    break;
                }
                if ch == '[' {
                    break;
                }
            }
            let Some(close) = end else {
                return Err(GrammarError::UnterminatedBracket {
                    src: input.to_string(),
                    span: Span::new(start, input.len()).into(),
                });
            };
            tokens.push(Token {
                kind: TokenKind::Bracket(input[start + 1..close].trim().to_string()),
                span: Span::new(start, close + 1),
            });
            continue;
        }

        if is_word_char(c) {
            let mut end = start;
            while let Some(&(i, ch)) = chars.peek() {
                if !is_word_char(ch) {
                    break;
                }
                end = i + ch.len_utf8();
                chars.next();
            }
            tokens.push(Token {
                kind: TokenKind::Word(input[start..end].to_string()),
                span: Span::new(start, end),
            });
            continue;
        }

        return Err(GrammarError::UnexpectedCharacter {
            ch: c,
            src: input.to_string(),
            span: Span::new(start, start + c.len_utf8()).into(),
        });
    }

    Ok(tokens)
}
