//! Graph serialization through `oxigraph::io`, plus the JSON export.

use std::io::Write;

use oxigraph::io::{RdfFormat, RdfSerializer};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::export;
use crate::namespace::Namespaces;

use super::BrickGraph;

/// Output formats supported by [`write_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Turtle,
    NTriples,
    Json,
}

/// Write `graph` to `writer`. Turtle output declares every registered prefix.
pub fn write_graph<W: Write>(
    graph: &BrickGraph,
    namespaces: &Namespaces,
    format: OutputFormat,
    writer: W,
) -> Result<W, GraphError> {
    let rdf_format = match format {
        OutputFormat::Turtle => RdfFormat::Turtle,
        OutputFormat::NTriples => RdfFormat::NTriples,
        OutputFormat::Json => return write_json(graph, writer),
    };

    let mut serializer = RdfSerializer::from_format(rdf_format);
    if format == OutputFormat::Turtle {
        for (prefix, iri) in namespaces.prefixes() {
            serializer = serializer
                .with_prefix(prefix.as_str(), iri.as_str())
                .map_err(|e| GraphError::InvalidIri {
                    iri: iri.clone(),
                    message: e.to_string(),
                })?;
        }
    }

    let mut out = serializer.for_writer(writer);
    for triple in graph {
        out.serialize_triple(triple.as_ref()).map_err(serialize_error)?;
    }
    out.finish().map_err(serialize_error)
}

fn write_json<W: Write>(graph: &BrickGraph, mut writer: W) -> Result<W, GraphError> {
    let export = export::export_triples(graph);
    serde_json::to_writer_pretty(&mut writer, &export).map_err(|e| GraphError::Serialize {
        message: e.to_string(),
    })?;
    writer.write_all(b"\n").map_err(serialize_error)?;
    Ok(writer)
}

fn serialize_error(e: std::io::Error) -> GraphError {
    GraphError::Serialize {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;
    use crate::graph::GraphBuilder;
    use crate::ontology::CategoryTable;
    use crate::relation::RelationshipResolver;

    fn graph(lines: &[&str], ns: &Namespaces) -> BrickGraph {
        let builder = GraphBuilder::new(
            RelationshipResolver::new(CategoryTable::seeded()),
            ns.clone(),
        );
        let mut g = BrickGraph::new();
        for line in lines {
            builder.build_from_line(&parse(line).unwrap(), &mut g).unwrap();
        }
        g
    }

    fn render(g: &BrickGraph, ns: &Namespaces, format: OutputFormat) -> String {
        let bytes = write_graph(g, ns, format, Vec::new()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn turtle_declares_prefixes() {
        let ns = Namespaces::default();
        let g = graph(&["Equipment[AHU1]/Point[SAT]"], &ns);
        let ttl = render(&g, &ns, OutputFormat::Turtle);
        assert!(ttl.contains("@prefix brick: <https://brickschema.org/schema/1.1/Brick#>"));
        assert!(ttl.contains("@prefix ex: <https://example.com/building/#>"));
        assert!(ttl.contains("brick:hasPoint"));
    }

    #[test]
    fn ntriples_has_one_line_per_triple() {
        let ns = Namespaces::default();
        let g = graph(&["Equipment[AHU1]/Point[SAT]"], &ns);
        let nt = render(&g, &ns, OutputFormat::NTriples);
        assert_eq!(nt.lines().count(), 3);
        assert!(nt.contains(
            "<https://example.com/building/#AHU1> \
             <https://brickschema.org/schema/1.1/Brick#hasPoint> \
             <https://example.com/building/#SAT> ."
        ));
    }

    #[test]
    fn json_lists_every_triple() {
        let ns = Namespaces::default();
        let g = graph(&["Room[R1]/AHU[A1]"], &ns);
        let json = render(&g, &ns, OutputFormat::Json);
        let parsed: Vec<export::TripleExport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(
            parsed[2].predicate,
            "https://brickschema.org/schema/1.1/Brick#isLocationOf"
        );
    }

    #[test]
    fn empty_graph_serializes() {
        let ns = Namespaces::default();
        let nt = render(&BrickGraph::new(), &ns, OutputFormat::NTriples);
        assert!(nt.trim().is_empty());
    }
}
