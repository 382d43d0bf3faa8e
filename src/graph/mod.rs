//! Output graph: the triples produced from building names.
//!
//! - [`Triple`]: a `(subject, predicate, object)` of IRIs
//! - [`TripleSink`]: anything the [`builder::GraphBuilder`] can write into
//! - [`BrickGraph`]: the append-only, insertion-ordered triple set of a run
//!
//! Serialization lives in [`serialize`].

pub mod builder;
pub mod serialize;

use std::collections::HashSet;

use oxigraph::model::{NamedNode, TripleRef};

pub use builder::GraphBuilder;
pub use serialize::{OutputFormat, write_graph};

/// A triple of IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: NamedNode,
}

impl Triple {
    pub fn new(subject: NamedNode, predicate: NamedNode, object: NamedNode) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Borrowed oxigraph view for serialization.
    pub fn as_ref(&self) -> TripleRef<'_> {
        TripleRef::new(
            self.subject.as_ref(),
            self.predicate.as_ref(),
            self.object.as_ref(),
        )
    }
}

/// Destination for emitted triples.
pub trait TripleSink {
    /// Add a triple. Returns `false` if the sink already held it.
    fn insert(&mut self, triple: Triple) -> bool;
}

impl TripleSink for Vec<Triple> {
    fn insert(&mut self, triple: Triple) -> bool {
        self.push(triple);
        true
    }
}

/// Append-only triple set. Duplicates collapse; insertion order is kept.
#[derive(Debug, Clone, Default)]
pub struct BrickGraph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl BrickGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    /// Triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Add every triple of `other`.
    pub fn extend_from(&mut self, other: &BrickGraph) -> usize {
        other
            .iter()
            .filter(|t| self.insert((*t).clone()))
            .count()
    }
}

impl TripleSink for BrickGraph {
    fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }
}

impl<'a> IntoIterator for &'a BrickGraph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
