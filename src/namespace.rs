//! IRI namespaces for entities and the Brick vocabulary.

use oxigraph::model::NamedNode;

use crate::error::GraphError;

/// Brick schema namespace.
pub const BRICK_NS: &str = "https://brickschema.org/schema/1.1/Brick#";
/// RDF namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// Default namespace for building entities.
pub const DEFAULT_ENTITY_NS: &str = "https://example.com/building/#";

/// Entity namespace plus the prefixes registered for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    entity: String,
    prefixes: Vec<(String, String)>,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            entity: DEFAULT_ENTITY_NS.to_string(),
            prefixes: vec![
                ("brick".into(), BRICK_NS.into()),
                ("rdf".into(), RDF_NS.into()),
                ("ex".into(), DEFAULT_ENTITY_NS.into()),
            ],
        }
    }
}

impl Namespaces {
    /// Apply user `(prefix, namespace)` pairs on top of the defaults.
    ///
    /// The first pair becomes the entity namespace. Every pair is registered
    /// as a prefix; reusing a prefix replaces its namespace.
    pub fn from_pairs<I, P, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, N)>,
        P: Into<String>,
        N: Into<String>,
    {
        let mut ns = Self::default();
        for (i, (prefix, iri)) in pairs.into_iter().enumerate() {
            let (prefix, iri) = (prefix.into(), iri.into());
            if i == 0 {
                ns.entity = iri.clone();
            }
            ns.register(prefix, iri);
        }
        ns
    }

    fn register(&mut self, prefix: String, iri: String) {
        match self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = iri,
            None => self.prefixes.push((prefix, iri)),
        }
    }

    /// Namespace used for entity identifiers.
    pub fn entity_ns(&self) -> &str {
        &self.entity
    }

    /// Registered `(prefix, namespace)` pairs in registration order.
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// IRI of a building entity.
    pub fn entity(&self, identifier: &str) -> Result<NamedNode, GraphError> {
        named_node(format!("{}{identifier}", self.entity))
    }

    /// IRI of a Brick class or property.
    pub fn brick(&self, local: &str) -> Result<NamedNode, GraphError> {
        named_node(format!("{BRICK_NS}{local}"))
    }
}

fn named_node(iri: String) -> Result<NamedNode, GraphError> {
    NamedNode::new(iri.as_str()).map_err(|e| GraphError::InvalidIri {
        iri,
        message: e.to_string(),
    })
}
