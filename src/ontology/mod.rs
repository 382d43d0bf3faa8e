//! Category resolution: which Brick classes are Locations, Points or Equipment.
//!
//! A [`CategoryTable`] is built once per run, from the Brick ontology
//! ([`sparql::OntologyStore`]), from a TOML [`Membership`] file, or from the
//! built-in [`seeds`], and is read-only afterwards.

pub mod seeds;
pub mod sparql;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OntologyError;

pub use sparql::OntologyStore;

/// Result type for ontology operations.
pub type OntologyResult<T> = std::result::Result<T, OntologyError>;

/// Coarse classification of a Brick class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Location,
    Point,
    Equipment,
    /// Not a (transitive) subclass of any of the three root terms.
    None,
}

impl Category {
    /// The Brick root class local name, if any.
    pub fn root_term(self) -> Option<&'static str> {
        match self {
            Category::Location => Some("Location"),
            Category::Point => Some("Point"),
            Category::Equipment => Some("Equipment"),
            Category::None => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Location => "location",
            Category::Point => "point",
            Category::Equipment => "equipment",
            Category::None => "none",
        };
        f.write_str(s)
    }
}

/// Class names per category: each root term and all its transitive subclasses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub point: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl Membership {
    /// Load a membership table from a TOML file.
    pub fn load(path: &Path) -> OntologyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OntologyError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| OntologyError::Membership {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Immutable class → [`Category`] lookup.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    location: HashSet<String>,
    point: HashSet<String>,
    equipment: HashSet<String>,
}

impl CategoryTable {
    /// Build from explicit lists. Root terms are always included and all
    /// names are compared case-insensitively.
    pub fn from_membership(membership: Membership) -> Self {
        fn normalize(root: &str, names: Vec<String>) -> HashSet<String> {
            std::iter::once(root.to_lowercase())
                .chain(names.into_iter().map(|n| n.trim().to_lowercase()))
                .filter(|n| !n.is_empty())
                .collect()
        }

        let table = Self {
            location: normalize("Location", membership.location),
            point: normalize("Point", membership.point),
            equipment: normalize("Equipment", membership.equipment),
        };
        tracing::info!(
            locations = table.location.len(),
            points = table.point.len(),
            equipment = table.equipment.len(),
            "category table ready"
        );
        table
    }

    /// Table built from the bundled Brick 1.1 class lists.
    pub fn seeded() -> Self {
        Self::from_membership(seeds::brick_membership())
    }

    /// Table computed from a loaded Brick ontology.
    pub fn from_ontology(store: &OntologyStore) -> OntologyResult<Self> {
        Ok(Self::from_membership(store.membership()?))
    }

    /// Classify a class name. Location wins over Point, Point over Equipment.
    pub fn classify(&self, class: &str) -> Category {
        let key = class.to_lowercase();
        if self.location.contains(&key) {
            Category::Location
        } else if self.point.contains(&key) {
            Category::Point
        } else if self.equipment.contains(&key) {
            Category::Equipment
        } else {
            Category::None
        }
    }

    /// Number of classes known per category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Location => self.location.len(),
            Category::Point => self.point.len(),
            Category::Equipment => self.equipment.len(),
            Category::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::from_membership(Membership {
            location: vec!["Room".into(), "Floor".into()],
            point: vec!["Temperature_Sensor".into()],
            equipment: vec!["AHU".into(), "VAV".into()],
        })
    }

    #[test]
    fn root_terms_are_always_present() {
        let t = CategoryTable::from_membership(Membership::default());
        assert_eq!(t.classify("Location"), Category::Location);
        assert_eq!(t.classify("Point"), Category::Point);
        assert_eq!(t.classify("Equipment"), Category::Equipment);
    }

    #[test]
    fn classify_is_case_insensitive() {
        let t = table();
        assert_eq!(t.classify("room"), Category::Location);
        assert_eq!(t.classify("TEMPERATURE_SENSOR"), Category::Point);
        assert_eq!(t.classify("Ahu"), Category::Equipment);
    }

    #[test]
    fn unknown_class_is_none() {
        assert_eq!(table().classify("Widget"), Category::None);
    }

    #[test]
    fn overlap_prefers_location_then_point() {
        let t = CategoryTable::from_membership(Membership {
            location: vec!["Shared".into()],
            point: vec!["Shared".into(), "Both".into()],
            equipment: vec!["Shared".into(), "Both".into()],
        });
        assert_eq!(t.classify("Shared"), Category::Location);
        assert_eq!(t.classify("Both"), Category::Point);
    }

    #[test]
    fn counts_include_root_terms() {
        let t = table();
        assert_eq!(t.count(Category::Location), 3);
        assert_eq!(t.count(Category::Point), 2);
        assert_eq!(t.count(Category::None), 0);
    }

    #[test]
    fn membership_loads_from_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("classes.toml");
        std::fs::write(
            &path,
            "location = [\"Room\"]\npoint = [\"Sensor\"]\nequipment = [\"Fan\"]\n",
        )
        .unwrap();
        let t = CategoryTable::from_membership(Membership::load(&path).unwrap());
        assert_eq!(t.classify("fan"), Category::Equipment);
        assert_eq!(t.classify("sensor"), Category::Point);
    }

    #[test]
    fn malformed_membership_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "location = 3\n").unwrap();
        assert!(matches!(
            Membership::load(&path),
            Err(OntologyError::Membership { .. })
        ));
    }

    #[test]
    fn category_displays_lowercase() {
        assert_eq!(Category::Equipment.to_string(), "equipment");
        assert_eq!(Category::None.to_string(), "none");
    }
}
