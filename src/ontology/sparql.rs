//! Brick ontology loaded into an oxigraph store.
//!
//! The category table is derived with one `rdfs:subClassOf+` SPARQL query
//! per root term.

use std::io::BufReader;
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::Term;
use oxigraph::model::vocab::rdfs;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::error::OntologyError;
use crate::namespace::BRICK_NS;

use super::{Category, Membership, OntologyResult};

/// In-memory RDF store holding the Brick ontology.
pub struct OntologyStore {
    store: Store,
}

impl OntologyStore {
    /// Create an empty in-memory store.
    pub fn in_memory() -> OntologyResult<Self> {
        let store = Store::new().map_err(|e| OntologyError::Load {
            message: format!("failed to create oxigraph store: {e}"),
        })?;
        Ok(Self { store })
    }

    /// Load a Turtle file (e.g. `Brick.ttl`).
    pub fn load_turtle(path: &Path) -> OntologyResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| OntologyError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let ontology = Self::in_memory()?;
        ontology
            .store
            .load_from_reader(RdfFormat::Turtle, BufReader::new(file))
            .map_err(|e| OntologyError::Load {
                message: format!("{}: {e}", path.display()),
            })?;
        tracing::info!(
            path = %path.display(),
            triples = ontology.len().unwrap_or(0),
            "loaded ontology"
        );
        Ok(ontology)
    }

    /// Load Turtle from a string.
    pub fn from_turtle_str(turtle: &str) -> OntologyResult<Self> {
        let ontology = Self::in_memory()?;
        ontology
            .store
            .load_from_reader(RdfFormat::Turtle, turtle.as_bytes())
            .map_err(|e| OntologyError::Load {
                message: e.to_string(),
            })?;
        Ok(ontology)
    }

    /// Number of triples in the store.
    pub fn len(&self) -> OntologyResult<usize> {
        self.store.len().map_err(|e| OntologyError::Query {
            message: format!("failed to count triples: {e}"),
        })
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> OntologyResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// Lower-cased local names of every transitive subclass of `brick:<root>`.
    pub fn subclasses_of(&self, root: &str) -> OntologyResult<Vec<String>> {
        let sparql = format!(
            "SELECT DISTINCT ?e WHERE {{ ?e <{}>+ <{BRICK_NS}{root}> . }}",
            rdfs::SUB_CLASS_OF.as_str()
        );
        let results = self.store.query(sparql.as_str()).map_err(|e| OntologyError::Query {
            message: format!("subclass query for {root} failed: {e}"),
        })?;

        let QueryResults::Solutions(solutions) = results else {
            return Err(OntologyError::Query {
                message: "unexpected result type from subclass query".into(),
            });
        };

        let mut classes = Vec::new();
        for solution in solutions {
            let solution = solution.map_err(|e| OntologyError::Query {
                message: format!("solution error: {e}"),
            })?;
            if let Some(Term::NamedNode(node)) = solution.get("e") {
                let iri = node.as_str();
                let local = iri.rsplit_once('#').map_or(iri, |(_, local)| local);
                classes.push(local.to_lowercase());
            }
        }
        Ok(classes)
    }

    /// Membership lists for the three root terms, root term first.
    pub fn membership(&self) -> OntologyResult<Membership> {
        let collect = |category: Category| -> OntologyResult<Vec<String>> {
            let root = category.root_term().unwrap_or_default();
            let mut classes = vec![root.to_lowercase()];
            classes.extend(self.subclasses_of(root)?);
            tracing::debug!(%category, count = classes.len(), "collected subclasses");
            Ok(classes)
        };
        Ok(Membership {
            location: collect(Category::Location)?,
            point: collect(Category::Point)?,
            equipment: collect(Category::Equipment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::CategoryTable;

    const MINI_BRICK: &str = r#"
@prefix brick: <https://brickschema.org/schema/1.1/Brick#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .

brick:Location a owl:Class .
brick:Space rdfs:subClassOf brick:Location .
brick:Room rdfs:subClassOf brick:Space .
brick:Point a owl:Class .
brick:Sensor rdfs:subClassOf brick:Point .
brick:Temperature_Sensor rdfs:subClassOf brick:Sensor .
brick:Equipment a owl:Class .
brick:HVAC rdfs:subClassOf brick:Equipment .
brick:AHU rdfs:subClassOf brick:HVAC .
"#;

    #[test]
    fn loads_turtle_from_string() {
        let store = OntologyStore::from_turtle_str(MINI_BRICK).unwrap();
        assert_eq!(store.len().unwrap(), 9);
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn subclasses_are_transitive() {
        let store = OntologyStore::from_turtle_str(MINI_BRICK).unwrap();
        let mut classes = store.subclasses_of("Location").unwrap();
        classes.sort();
        assert_eq!(classes, vec!["room".to_string(), "space".to_string()]);
    }

    #[test]
    fn membership_includes_root_terms() {
        let store = OntologyStore::from_turtle_str(MINI_BRICK).unwrap();
        let m = store.membership().unwrap();
        assert_eq!(m.location[0], "location");
        assert_eq!(m.point[0], "point");
        assert!(m.equipment.contains(&"ahu".to_string()));
    }

    #[test]
    fn table_from_ontology_classifies() {
        let store = OntologyStore::from_turtle_str(MINI_BRICK).unwrap();
        let table = CategoryTable::from_ontology(&store).unwrap();
        assert_eq!(table.classify("Temperature_Sensor"), Category::Point);
        assert_eq!(table.classify("Room"), Category::Location);
        assert_eq!(table.classify("AHU"), Category::Equipment);
        assert_eq!(table.classify("Chiller"), Category::None);
    }

    #[test]
    fn malformed_turtle_is_a_load_error() {
        let err = OntologyStore::from_turtle_str("brick:AHU rdfs:subClassOf").err();
        assert!(matches!(err, Some(OntologyError::Load { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = OntologyStore::load_turtle(Path::new("/nonexistent/Brick.ttl")).err();
        assert!(matches!(err, Some(OntologyError::Io { .. })));
    }

    #[test]
    fn loads_turtle_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Brick.ttl");
        std::fs::write(&path, MINI_BRICK).unwrap();
        let store = OntologyStore::load_turtle(&path).unwrap();
        assert_eq!(store.subclasses_of("Equipment").unwrap().len(), 2);
    }
}
