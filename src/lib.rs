// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # brickname
//!
//! Translates building-automation point names such as
//! `Room[R101]/AHU[AHU1]/Supply_Air_Temperature_Sensor[SAT]` into a Brick
//! schema graph of typed entities and relationships.
//!
//! ## Architecture
//!
//! - **Grammar** (`grammar`): lexer and recursive descent parser into a typed AST
//! - **Ontology** (`ontology`): Location / Point / Equipment classification,
//!   from `Brick.ttl` via oxigraph SPARQL or a bundled class list
//! - **Relationships** (`relation`): tagged markers and the `/` disambiguation table
//! - **Graph** (`graph`): builder, append-only triple set, Turtle / N-Triples / JSON output
//! - **Converter** (`converter`): batch facade with a configurable error policy
//!
//! ## Library usage
//!
//! ```no_run
//! use brickname::converter::{Converter, ConverterConfig};
//! use brickname::graph::{OutputFormat, write_graph};
//! use brickname::ontology::CategoryTable;
//!
//! let mut converter = Converter::new(CategoryTable::seeded(), ConverterConfig::default());
//! converter.convert_str("Equipment[AHU1]/Point[SAT]\n").unwrap();
//! let ttl = write_graph(
//!     converter.graph(),
//!     converter.namespaces(),
//!     OutputFormat::Turtle,
//!     Vec::new(),
//! )
//! .unwrap();
//! println!("{}", String::from_utf8_lossy(&ttl));
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod grammar;
pub mod graph;
pub mod namespace;
pub mod ontology;
pub mod relation;
