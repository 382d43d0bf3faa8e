//! Rich diagnostic error types for brickname.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so the operator knows
//! which name to correct and how.

use miette::Diagnostic;
use thiserror::Error;

use crate::grammar::GrammarError;
use crate::ontology::Category;

/// Top-level error type for brickname.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum BrickError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ontology(#[from] OntologyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),
}

// ---------------------------------------------------------------------------
// Relationship resolution errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error(
        "cannot infer relationship for {left_class}[{left_id}] ({left_category}) \
         {marker} {right_class}[{right_id}] ({right_category})"
    )]
    #[diagnostic(
        code(brick::resolve::unresolvable),
        help(
            "A bare `/` is only defined between Location, Equipment and Point classes \
             (and never Point / Point). Check that both class names are Brick classes \
             known to the loaded ontology, or state the relationship explicitly with \
             `[hasPart]`, `[hasPoint]`, `[isLocationOf]`, `[feeds]` or `>`."
        )
    )]
    UnresolvableRelationship {
        left_id: String,
        left_class: String,
        left_category: Category,
        right_id: String,
        right_class: String,
        right_category: Category,
        marker: String,
    },

    #[error("unknown class `{class}` for entity `{identifier}`")]
    #[diagnostic(
        code(brick::resolve::unknown_class),
        help(
            "`{class}` is not a Location, Point or Equipment class in the loaded ontology. \
             Fix the spelling, load a newer ontology with `--ontology`, or run without \
             `--strict-classes`."
        )
    )]
    UnknownClass { identifier: String, class: String },
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("invalid IRI `{iri}`: {message}")]
    #[diagnostic(
        code(brick::graph::invalid_iri),
        help(
            "The namespace and identifier do not form a valid IRI. \
             Check the `--namespace` value; namespaces usually end in `#` or `/`."
        )
    )]
    InvalidIri { iri: String, message: String },

    #[error("serialization failed: {message}")]
    #[diagnostic(
        code(brick::graph::serialize),
        help("Writing the graph failed. Check that the output path is writable.")
    )]
    Serialize { message: String },
}

// ---------------------------------------------------------------------------
// Ontology errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OntologyError {
    #[error("failed to read {path}")]
    #[diagnostic(
        code(brick::ontology::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load ontology: {message}")]
    #[diagnostic(
        code(brick::ontology::load),
        help(
            "The ontology must be a Turtle file, e.g. Brick.ttl from \
             https://github.com/BrickSchema/Brick/releases."
        )
    )]
    Load { message: String },

    #[error("ontology query failed: {message}")]
    #[diagnostic(
        code(brick::ontology::query),
        help("The subclass query against the loaded ontology failed. This is a bug; please report it.")
    )]
    Query { message: String },

    #[error("invalid category table {path}: {message}")]
    #[diagnostic(
        code(brick::ontology::membership),
        help(
            "A category table is a TOML file with `location`, `point` and `equipment` \
             arrays of class names."
        )
    )]
    Membership { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    #[diagnostic(
        code(brick::config::read),
        help("Check that the configuration file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    #[diagnostic(
        code(brick::config::parse),
        help(
            "Check the TOML syntax. Accepted keys: `on_error`, `strict_classes`, \
             `ontology`, `categories` and `[[namespace]]` tables."
        )
    )]
    Parse { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Conversion errors
// ---------------------------------------------------------------------------

/// Failure while turning a parsed line into triples.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),
}

/// Failure of a single input line.
#[derive(Debug, Error, Diagnostic)]
pub enum LineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("line {line_no}: `{line}`")]
    #[diagnostic(code(brick::convert::line))]
    Line {
        line_no: usize,
        line: String,
        #[source]
        #[diagnostic_source]
        source: LineError,
    },

    #[error("{} of {total} line(s) failed", .failures.len())]
    #[diagnostic(
        code(brick::convert::batch),
        help("Correct the names listed below and run again.")
    )]
    Batch {
        total: usize,
        #[related]
        failures: Vec<ConvertError>,
    },

    #[error("failed to read input {path}")]
    #[diagnostic(
        code(brick::convert::io),
        help("Check that the input file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning brickname results.
pub type BrickResult<T> = std::result::Result<T, BrickError>;
