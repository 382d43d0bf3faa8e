//! Naming grammar: tokenizes and parses building point names.
//!
//! ```text
//! "Room[R101]/AHU[AHU1]; [feeds] VAV[V1]"
//!        │
//!      lexer ──→ tokens ──→ parser ──→ NameGroup
//!                                        ├─ primary: Room[R101] / AHU[AHU1]
//!                                        └─ clauses: [feeds] VAV[V1]
//! ```
//!
//! The grammar only validates shape. Turning markers into Brick relationships
//! is the job of [`crate::relation`].
//!
//! ## Usage
//!
//! ```rust
//! use brickname::grammar;
//!
//! let group = grammar::parse("Equipment[AHU1]/Point[SAT]").unwrap();
//! assert_eq!(group.primary_entity().identifier, "SAT");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Clause, EntityRef, Link, Marker, MarkerToken, NameGroup, ParsedName};
pub use error::{GrammarError, GrammarResult};
pub use lexer::Span;
pub use parser::parse;
