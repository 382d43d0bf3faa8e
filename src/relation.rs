//! Relationship resolution: marker + entity classes → Brick relationship.
//!
//! Tagged markers (`[hasPart]`, `[hasPoint]`, `[isLocationOf]`, `[feeds]`, `>`)
//! always mean the same relationship. The bare `/` is disambiguated from the
//! categories of the two classes it joins:
//!
//! | left \ right | Location     | Equipment    | Point        |
//! |--------------|--------------|--------------|--------------|
//! | Location     | hasPart      | isLocationOf | isLocationOf |
//! | Equipment    | hasLocation  | hasPart      | hasPoint     |
//! | Point        | hasLocation  | isPointOf    |              |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::grammar::{EntityRef, Marker};
use crate::ontology::{Category, CategoryTable};

/// Brick relationships emitted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    HasPart,
    HasPoint,
    HasLocation,
    IsLocationOf,
    IsPointOf,
    Feeds,
}

impl Relationship {
    /// Local name in the Brick namespace.
    pub fn local_name(self) -> &'static str {
        match self {
            Relationship::HasPart => "hasPart",
            Relationship::HasPoint => "hasPoint",
            Relationship::HasLocation => "hasLocation",
            Relationship::IsLocationOf => "isLocationOf",
            Relationship::IsPointOf => "isPointOf",
            Relationship::Feeds => "feeds",
        }
    }

    /// Fixed meaning of a tagged marker; `None` for the bare separator.
    pub fn for_marker(marker: Marker) -> Option<Self> {
        match marker {
            Marker::HasPart => Some(Relationship::HasPart),
            Marker::HasPoint => Some(Relationship::HasPoint),
            Marker::IsLocationOf => Some(Relationship::IsLocationOf),
            Marker::Feeds | Marker::Arrow => Some(Relationship::Feeds),
            Marker::Separator => None,
        }
    }

    /// Disambiguation table for the bare separator.
    pub fn for_categories(left: Category, right: Category) -> Option<Self> {
        use Category::{Equipment, Location, Point};
        match (left, right) {
            (Location, Location) => Some(Relationship::HasPart),
            (Location, Equipment) | (Location, Point) => Some(Relationship::IsLocationOf),
            (Equipment, Location) | (Point, Location) => Some(Relationship::HasLocation),
            (Equipment, Equipment) => Some(Relationship::HasPart),
            (Equipment, Point) => Some(Relationship::HasPoint),
            (Point, Equipment) => Some(Relationship::IsPointOf),
            _ => None,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brick:{}", self.local_name())
    }
}

/// Resolves markers against an immutable [`CategoryTable`].
#[derive(Debug, Clone)]
pub struct RelationshipResolver {
    categories: CategoryTable,
    strict_classes: bool,
}

impl RelationshipResolver {
    pub fn new(categories: CategoryTable) -> Self {
        Self {
            categories,
            strict_classes: false,
        }
    }

    /// Reject entities whose class is not a Location, Point or Equipment.
    pub fn with_strict_classes(mut self, strict: bool) -> Self {
        self.strict_classes = strict;
        self
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Classify an entity's class token.
    pub fn classify(&self, entity: &EntityRef) -> Category {
        let category = self.categories.classify(&entity.class);
        if category == Category::None {
            tracing::debug!(
                identifier = %entity.identifier,
                class = %entity.class,
                "class is not a location, point or equipment"
            );
        }
        category
    }

    /// In strict mode, fail for an entity whose class is unknown.
    pub fn check_class(&self, entity: &EntityRef) -> Result<(), ResolveError> {
        if self.strict_classes && self.classify(entity) == Category::None {
            return Err(ResolveError::UnknownClass {
                identifier: entity.identifier.clone(),
                class: entity.class.clone(),
            });
        }
        Ok(())
    }

    /// Relationship for `left marker right`.
    pub fn resolve(
        &self,
        left: &EntityRef,
        marker: Marker,
        right: &EntityRef,
    ) -> Result<Relationship, ResolveError> {
        if let Some(rel) = Relationship::for_marker(marker) {
            return Ok(rel);
        }

        let left_category = self.classify(left);
        let right_category = self.classify(right);
        Relationship::for_categories(left_category, right_category).ok_or_else(|| {
            ResolveError::UnresolvableRelationship {
                left_id: left.identifier.clone(),
                left_class: left.class.clone(),
                left_category,
                right_id: right.identifier.clone(),
                right_class: right.class.clone(),
                right_category,
                marker: marker.to_string(),
            }
        })
    }
}
