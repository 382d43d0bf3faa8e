//! Recursive descent parser: naming string → [`NameGroup`].
//!
//! ```text
//! line    := name ( ';' marker name )*
//! name    := entity ( marker entity )*
//! entity  := CLASS '[' IDENT ']'
//! marker  := '/' | '>' | '[' TAG ']'
//! ```
//!
//! The parser only checks shape. Class names are not looked up and markers
//! are not resolved to relationships here.

use super::ast::{Clause, EntityRef, Link, Marker, MarkerToken, NameGroup, ParsedName};
use super::error::{GrammarError, GrammarResult};
use super::lexer::{self, Span, Token, TokenKind};

/// Parse one naming string.
pub fn parse(input: &str) -> GrammarResult<NameGroup> {
    let tokens = lexer::tokenize(input)?;
    if tokens.is_empty() {
        return Err(GrammarError::EmptyInput);
    }
    Parser::new(input, tokens).parse_group()
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn end_span(&self) -> Span {
        Span::new(self.src.len(), self.src.len())
    }

    fn parse_group(&mut self) -> GrammarResult<NameGroup> {
        let primary = self.parse_name()?;
        let mut clauses = Vec::new();

        while let Some(token) = self.next() {
            if token.kind != TokenKind::Semicolon {
                // parse_name stops only at `;` or end of input.
                return Err(self.expected_marker(&token));
            }
            if self.peek().is_none() {
                return Err(GrammarError::ExpectedEntity {
                    found: "end of name".into(),
                    src: self.src.to_string(),
                    span: token.span.into(),
                });
            }
            let marker = self.parse_marker()?;
            let name = self.parse_entity_after(marker).and_then(|head| self.parse_links(head))?;
            clauses.push(Clause { marker, name });
        }

        Ok(NameGroup { primary, clauses })
    }

    fn parse_name(&mut self) -> GrammarResult<ParsedName> {
        let head = self.parse_entity()?;
        self.parse_links(head)
    }

    fn parse_links(&mut self, head: EntityRef) -> GrammarResult<ParsedName> {
        let mut links = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some(t) if t.kind == TokenKind::Semicolon => break,
                Some(_) => {}
            }
            let marker = self.parse_marker()?;
            let entity = self.parse_entity_after(marker)?;
            links.push(Link { marker, entity });
        }
        Ok(ParsedName { head, links })
    }

    /// Parse the entity that must follow `marker`, with marker-specific errors.
    fn parse_entity_after(&mut self, marker: MarkerToken) -> GrammarResult<EntityRef> {
        let next = self
            .peek()
            .map(|t| (t.span, self.is_marker_token(t), t.kind == TokenKind::Semicolon));
        match next {
            None | Some((_, _, true)) => Err(GrammarError::TrailingMarker {
                src: self.src.to_string(),
                span: marker.span.into(),
            }),
            Some((span, true, _)) => Err(GrammarError::ConsecutiveMarkers {
                src: self.src.to_string(),
                span: span.into(),
            }),
            Some(_) => self.parse_entity(),
        }
    }

    fn is_marker_token(&self, token: &Token) -> bool {
        match &token.kind {
            TokenKind::Slash | TokenKind::Arrow => true,
            TokenKind::Bracket(tag) => Marker::from_tag(tag).is_some(),
            _ => false,
        }
    }

    fn parse_marker(&mut self) -> GrammarResult<MarkerToken> {
        let Some(token) = self.next() else {
            return Err(GrammarError::ExpectedEntity {
                found: "end of name".into(),
                src: self.src.to_string(),
                span: self.end_span().into(),
            });
        };
        let marker = match &token.kind {
            TokenKind::Slash => Marker::Separator,
            TokenKind::Arrow => Marker::Arrow,
            TokenKind::Bracket(tag) => {
                Marker::from_tag(tag).ok_or_else(|| GrammarError::UnknownMarker {
                    tag: tag.clone(),
                    src: self.src.to_string(),
                    span: token.span.into(),
                })?
            }
            _ => return Err(self.expected_marker(&token)),
        };
        Ok(MarkerToken {
            marker,
            span: token.span,
        })
    }

    fn parse_entity(&mut self) -> GrammarResult<EntityRef> {
        let Some(token) = self.next() else {
            return Err(GrammarError::ExpectedEntity {
                found: "end of name".into(),
                src: self.src.to_string(),
                span: self.end_span().into(),
            });
        };
        let class = match token.kind {
            TokenKind::Word(class) => class,
            other => {
                return Err(GrammarError::ExpectedEntity {
                    found: other.describe(),
                    src: self.src.to_string(),
                    span: token.span.into(),
                });
            }
        };
        if !is_class_name(&class) {
            return Err(GrammarError::InvalidClassName {
                class,
                src: self.src.to_string(),
                span: token.span.into(),
            });
        }

        let identifier = match self.peek() {
            Some(Token {
                kind: TokenKind::Bracket(id),
                span,
            }) => (id.clone(), *span),
            other => {
                let span = other.map_or(Span::new(token.span.end, token.span.end), |t| t.span);
                return Err(GrammarError::MissingIdentifier {
                    class,
                    src: self.src.to_string(),
                    span: span.into(),
                });
            }
        };
        self.pos += 1;

        let (identifier, id_span) = identifier;
        if identifier.is_empty() {
            return Err(GrammarError::MissingIdentifier {
                class,
                src: self.src.to_string(),
                span: id_span.into(),
            });
        }
        if !identifier.chars().all(lexer::is_word_char) {
            return Err(GrammarError::InvalidIdentifier {
                identifier,
                src: self.src.to_string(),
                span: id_span.into(),
            });
        }

        Ok(EntityRef {
            class,
            identifier,
            span: token.span.join(id_span),
        })
    }

    fn expected_marker(&self, token: &Token) -> GrammarError {
        GrammarError::ExpectedMarker {
            found: token.kind.describe(),
            src: self.src.to_string(),
            span: token.span.into(),
        }
    }
}

fn is_class_name(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
