//! Rich diagnostic error types for the naming grammar.
//!
//! Every variant carries the offending line and a labelled span so the
//! operator sees exactly which part of the name to correct.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors produced while tokenizing or parsing a naming string.
#[derive(Debug, Error, Diagnostic)]
pub enum GrammarError {
    #[error("empty name")]
    #[diagnostic(
        code(brick::grammar::empty),
        help("A name needs at least one entity, e.g. `Equipment[AHU1]`.")
    )]
    EmptyInput,

    #[error("unexpected character '{ch}'")]
    #[diagnostic(
        code(brick::grammar::unexpected_char),
        help(
            "Names are built from `Class[Identifier]` entities joined by `/`, `>` \
             or a bracketed tag such as `[hasPoint]`. Clauses are separated by `;`."
        )
    )]
    UnexpectedCharacter {
        ch: char,
        #[source_code]
        src: String,
        #[label("not allowed here")]
        span: SourceSpan,
    },

    #[error("unterminated bracket")]
    #[diagnostic(
        code(brick::grammar::unterminated_bracket),
        help("Close the bracket with `]` before starting another one.")
    )]
    UnterminatedBracket {
        #[source_code]
        src: String,
        #[label("this `[` is never closed")]
        span: SourceSpan,
    },

    #[error("missing identifier for class `{class}`")]
    #[diagnostic(
        code(brick::grammar::missing_identifier),
        help("Every entity needs an identifier in brackets: `{class}[<identifier>]`.")
    )]
    MissingIdentifier {
        class: String,
        #[source_code]
        src: String,
        #[label("expected `[identifier]` here")]
        span: SourceSpan,
    },

    #[error("invalid class name `{class}`")]
    #[diagnostic(
        code(brick::grammar::invalid_class),
        help(
            "Class names are Brick class local names: letters, digits and `_`, \
             not starting with a digit (e.g. `Supply_Air_Temperature_Sensor`)."
        )
    )]
    InvalidClassName {
        class: String,
        #[source_code]
        src: String,
        #[label("class name")]
        span: SourceSpan,
    },

    #[error("invalid identifier `{identifier}`")]
    #[diagnostic(
        code(brick::grammar::invalid_identifier),
        help("Identifiers may only contain letters, digits, `_`, `-` and `.`.")
    )]
    InvalidIdentifier {
        identifier: String,
        #[source_code]
        src: String,
        #[label("identifier")]
        span: SourceSpan,
    },

    #[error("unknown relationship tag `[{tag}]`")]
    #[diagnostic(
        code(brick::grammar::unknown_marker),
        help(
            "Supported tags are `[hasPart]`, `[hasPoint]`, `[isLocationOf]` and `[feeds]`. \
             Use `/` to let the relationship be inferred from the entity classes."
        )
    )]
    UnknownMarker {
        tag: String,
        #[source_code]
        src: String,
        #[label("unknown tag")]
        span: SourceSpan,
    },

    #[error("expected a relationship marker, found {found}")]
    #[diagnostic(
        code(brick::grammar::expected_marker),
        help("Join entities with `/`, `>` or a tag such as `[hasPart]`.")
    )]
    ExpectedMarker {
        found: String,
        #[source_code]
        src: String,
        #[label("marker expected before this")]
        span: SourceSpan,
    },

    #[error("expected an entity, found {found}")]
    #[diagnostic(
        code(brick::grammar::expected_entity),
        help("Entities are written `Class[Identifier]`.")
    )]
    ExpectedEntity {
        found: String,
        #[source_code]
        src: String,
        #[label("entity expected here")]
        span: SourceSpan,
    },

    #[error("two relationship markers with no entity between them")]
    #[diagnostic(
        code(brick::grammar::consecutive_markers),
        help("Remove one of the markers or put an entity between them.")
    )]
    ConsecutiveMarkers {
        #[source_code]
        src: String,
        #[label("second marker")]
        span: SourceSpan,
    },

    #[error("relationship marker at end of name")]
    #[diagnostic(
        code(brick::grammar::trailing_marker),
        help("A marker must be followed by the entity it points to.")
    )]
    TrailingMarker {
        #[source_code]
        src: String,
        #[label("nothing follows this marker")]
        span: SourceSpan,
    },
}

/// Result type for grammar operations.
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
