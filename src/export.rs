//! Export types for serializing a graph as JSON.
//!
//! These types carry full IRIs plus the Brick-local names of the predicate
//! and (for type triples) the class, for consumers that do not speak RDF.

use oxigraph::model::vocab::rdf;
use serde::{Deserialize, Serialize};

use crate::graph::{BrickGraph, Triple};
use crate::namespace::BRICK_NS;

/// Exported triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleExport {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object IRI.
    pub object: String,
    /// Triple kind: `"type"` for class assertions, `"relationship"` otherwise.
    pub kind: String,
    /// Brick local name of the class or relationship, when it is in the Brick namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brick_term: Option<String>,
}

impl From<&Triple> for TripleExport {
    fn from(t: &Triple) -> Self {
        let is_type = t.predicate.as_ref() == rdf::TYPE;
        let term = if is_type { &t.object } else { &t.predicate };
        Self {
            subject: t.subject.as_str().to_string(),
            predicate: t.predicate.as_str().to_string(),
            object: t.object.as_str().to_string(),
            kind: if is_type { "type" } else { "relationship" }.to_string(),
            brick_term: term.as_str().strip_prefix(BRICK_NS).map(String::from),
        }
    }
}

/// Export every triple in insertion order.
pub fn export_triples(graph: &BrickGraph) -> Vec<TripleExport> {
    graph.iter().map(TripleExport::from).collect()
}
