//! Typed syntax tree for a parsed naming string.
//!
//! A line is a [`NameGroup`]: one primary [`ParsedName`] and any number of
//! secondary [`Clause`]s. Each name is a non-empty chain of [`EntityRef`]s
//! joined by [`Marker`]s.

use std::fmt;

use super::lexer::Span;

/// A `Class[Identifier]` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    /// Ontology class local name, verbatim from the source.
    pub class: String,
    /// Instance identifier, verbatim from the source.
    pub identifier: String,
    pub span: Span,
}

impl EntityRef {
    pub fn new(class: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            identifier: identifier.into(),
            span: Span::default(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.class, self.identifier)
    }
}

/// Relationship marker between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `/`: meaning inferred from the categories of both sides.
    Separator,
    /// `>`: feeds.
    Arrow,
    /// `[hasPart]`
    HasPart,
    /// `[hasPoint]`
    HasPoint,
    /// `[isLocationOf]`
    IsLocationOf,
    /// `[feeds]`
    Feeds,
}

impl Marker {
    /// Match a bracketed tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "haspart" => Some(Marker::HasPart),
            "haspoint" => Some(Marker::HasPoint),
            "islocationof" => Some(Marker::IsLocationOf),
            "feeds" => Some(Marker::Feeds),
            _ => None,
        }
    }

    /// Whether the marker's meaning depends on the entities it joins.
    pub fn is_contextual(self) -> bool {
        self == Marker::Separator
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Marker::Separator => "/",
            Marker::Arrow => ">",
            Marker::HasPart => "[hasPart]",
            Marker::HasPoint => "[hasPoint]",
            Marker::IsLocationOf => "[isLocationOf]",
            Marker::Feeds => "[feeds]",
        };
        f.write_str(s)
    }
}

/// A marker together with its position in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerToken {
    pub marker: Marker,
    pub span: Span,
}

/// A marker and the entity that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub marker: MarkerToken,
    pub entity: EntityRef,
}

/// `entity (marker entity)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub head: EntityRef,
    pub links: Vec<Link>,
}

impl ParsedName {
    pub fn single(head: EntityRef) -> Self {
        Self {
            head,
            links: Vec::new(),
        }
    }

    /// Every entity in source order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityRef> {
        std::iter::once(&self.head).chain(self.links.iter().map(|l| &l.entity))
    }

    /// Every adjacent `(left, marker, right)` triple in source order.
    pub fn edges(&self) -> impl Iterator<Item = (&EntityRef, MarkerToken, &EntityRef)> {
        self.entities()
            .zip(self.links.iter())
            .map(|(left, link)| (left, link.marker, &link.entity))
    }

    /// The last entity of the chain.
    pub fn target(&self) -> &EntityRef {
        self.links.last().map_or(&self.head, |l| &l.entity)
    }

    pub fn len(&self) -> usize {
        1 + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A secondary clause: `; marker name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Marker joining the line's primary entity to this clause's target.
    pub marker: MarkerToken,
    pub name: ParsedName,
}

/// A full input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGroup {
    pub primary: ParsedName,
    pub clauses: Vec<Clause>,
}

impl NameGroup {
    /// Anchor of every secondary clause: the last entity of the primary name.
    pub fn primary_entity(&self) -> &EntityRef {
        self.primary.target()
    }

    /// Number of entity references on the whole line.
    pub fn entity_count(&self) -> usize {
        self.primary.len() + self.clauses.iter().map(|c| c.name.len()).sum::<usize>()
    }

    /// Number of markers on the whole line.
    pub fn marker_count(&self) -> usize {
        self.primary.links.len()
            + self
                .clauses
                .iter()
                .map(|c| 1 + c.name.links.len())
                .sum::<usize>()
    }
}
