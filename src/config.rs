//! Run configuration, persisted as TOML.
//!
//! ```toml
//! on_error = "collect"
//! strict_classes = false
//! ontology = "Brick.ttl"
//!
//! [[namespace]]
//! prefix = "bldg"
//! iri = "https://example.org/bldg#"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::converter::{ConverterConfig, ErrorPolicy};
use crate::error::ConfigError;
use crate::namespace::Namespaces;
use crate::ontology::{CategoryTable, Membership, OntologyResult, OntologyStore};

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// A `(prefix, namespace)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceEntry {
    pub prefix: String,
    pub iri: String,
}

/// Settings for a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
    #[serde(default)]
    pub strict_classes: bool,
    /// Brick ontology in Turtle. Takes precedence over `categories`.
    #[serde(default)]
    pub ontology: Option<PathBuf>,
    /// TOML category table.
    #[serde(default)]
    pub categories: Option<PathBuf>,
    /// The first entry becomes the entity namespace.
    #[serde(default, rename = "namespace")]
    pub namespaces: Vec<NamespaceEntry>,
}

impl ConvertConfig {
    /// Load from a TOML file. Relative paths are taken relative to the file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if let Some(base) = path.parent() {
            for p in [&mut config.ontology, &mut config.categories].into_iter().flatten() {
                if p.is_relative() {
                    *p = base.join(&*p);
                }
            }
        }
        Ok(config)
    }

    /// Namespaces with the configured pairs applied.
    pub fn namespaces(&self) -> Namespaces {
        Namespaces::from_pairs(
            self.namespaces
                .iter()
                .map(|e| (e.prefix.clone(), e.iri.clone())),
        )
    }

    /// Category table from the ontology, the category file, or the bundled seed.
    pub fn category_table(&self) -> OntologyResult<CategoryTable> {
        if let Some(ontology) = &self.ontology {
            let store = OntologyStore::load_turtle(ontology)?;
            return CategoryTable::from_ontology(&store);
        }
        if let Some(categories) = &self.categories {
            return Ok(CategoryTable::from_membership(Membership::load(categories)?));
        }
        tracing::info!("no ontology given, using bundled Brick class list");
        Ok(CategoryTable::seeded())
    }

    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            namespaces: self.namespaces(),
            on_error: self.on_error,
            strict_classes: self.strict_classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::Category;

    #[test]
    fn defaults_are_abort_and_seeded() {
        let config = ConvertConfig::default();
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert!(!config.strict_classes);
        let table = config.category_table().unwrap();
        assert_eq!(table.classify("AHU"), Category::Equipment);
    }

    #[test]
    fn load_parses_all_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("brickname.toml");
        std::fs::write(
            &path,
            r#"
on_error = "skip"
strict_classes = true
categories = "classes.toml"

[[namespace]]
prefix = "bldg"
iri = "https://example.org/bldg#"
"#,
        )
        .unwrap();
        let config = ConvertConfig::load(&path).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert!(config.strict_classes);
        assert_eq!(config.categories, Some(dir.path().join("classes.toml")));
        assert_eq!(config.namespaces().entity_ns(), "https://example.org/bldg#");

        let cc = config.converter_config();
        assert!(cc.strict_classes);
        assert_eq!(cc.on_error, ErrorPolicy::Skip);
    }

    #[test]
    fn categories_file_is_used() {
        let dir = tempfile::TempDir::new().unwrap();
        let classes = dir.path().join("classes.toml");
        std::fs::write(&classes, "equipment = [\"Widget\"]\n").unwrap();
        let config = ConvertConfig {
            categories: Some(classes),
            ..Default::default()
        };
        let table = config.category_table().unwrap();
        assert_eq!(table.classify("widget"), Category::Equipment);
        assert_eq!(table.classify("AHU"), Category::None);
    }

    #[test]
    fn invalid_policy_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "on_error = \"retry\"\n").unwrap();
        assert!(matches!(
            ConvertConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_config_is_a_read_error() {
        assert!(matches!(
            ConvertConfig::load(Path::new("/nonexistent/brickname.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
