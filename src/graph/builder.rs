//! Graph builder: [`NameGroup`] → type triples and relationship edges.
//!
//! Every entity on a line yields one `rdf:type` triple and every marker one
//! relationship edge. Secondary clauses attach to the line's primary entity
//! (the last entity of the primary name), not to whatever precedes them.
//! A line's triples are staged and only reach the sink if the whole line
//! resolves.

use oxigraph::model::vocab::rdf;

use crate::error::BuildError;
use crate::grammar::{EntityRef, Marker, NameGroup, ParsedName};
use crate::namespace::Namespaces;
use crate::relation::RelationshipResolver;

use super::{Triple, TripleSink};

/// Stateless translator from parsed names to triples.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    resolver: RelationshipResolver,
    namespaces: Namespaces,
}

impl GraphBuilder {
    pub fn new(resolver: RelationshipResolver, namespaces: Namespaces) -> Self {
        Self {
            resolver,
            namespaces,
        }
    }

    pub fn resolver(&self) -> &RelationshipResolver {
        &self.resolver
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Emit all triples for `group` into `sink`. Returns how many triples
    /// were emitted, duplicates included.
    pub fn build_from_line<S>(&self, group: &NameGroup, sink: &mut S) -> Result<usize, BuildError>
    where
        S: TripleSink + ?Sized,
    {
        let staged = self.triples_for(group)?;
        let count = staged.len();
        for triple in staged {
            sink.insert(triple);
        }
        Ok(count)
    }

    /// All triples for `group`, in emission order, without touching any sink.
    pub fn triples_for(&self, group: &NameGroup) -> Result<Vec<Triple>, BuildError> {
        let mut staged = Vec::with_capacity(group.entity_count() + group.marker_count());

        self.emit_name(&group.primary, &mut staged)?;

        let anchor = group.primary_entity();
        for clause in &group.clauses {
            self.emit_name(&clause.name, &mut staged)?;
            self.emit_edge(anchor, clause.marker.marker, clause.name.target(), &mut staged)?;
        }

        Ok(staged)
    }

    fn emit_name(&self, name: &ParsedName, out: &mut Vec<Triple>) -> Result<(), BuildError> {
        for entity in name.entities() {
            self.resolver.check_class(entity)?;
            out.push(Triple::new(
                self.namespaces.entity(&entity.identifier)?,
                rdf::TYPE.into_owned(),
                self.namespaces.brick(&entity.class)?,
            ));
        }
        for (left, marker, right) in name.edges() {
            self.emit_edge(left, marker.marker, right, out)?;
        }
        Ok(())
    }

    fn emit_edge(
        &self,
        left: &EntityRef,
        marker: Marker,
        right: &EntityRef,
        out: &mut Vec<Triple>,
    ) -> Result<(), BuildError> {
        let rel = self.resolver.resolve(left, marker, right)?;
        out.push(Triple::new(
            self.namespaces.entity(&left.identifier)?,
            self.namespaces.brick(rel.local_name())?,
            self.namespaces.entity(&right.identifier)?,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::grammar::parse;
    use crate::graph::BrickGraph;
    use crate::namespace::{BRICK_NS, DEFAULT_ENTITY_NS};
    use crate::ontology::CategoryTable;

    fn builder() -> GraphBuilder {
        GraphBuilder::new(
            RelationshipResolver::new(CategoryTable::seeded()),
            Namespaces::default(),
        )
    }

    /// Render triples as `(s, p, o)` local names for compact assertions.
    fn short(triples: &[Triple]) -> Vec<(String, String, String)> {
        let strip = |iri: &str| {
            iri.strip_prefix(DEFAULT_ENTITY_NS)
                .map(|s| format!("ex:{s}"))
                .or_else(|| iri.strip_prefix(BRICK_NS).map(|s| format!("brick:{s}")))
                .unwrap_or_else(|| {
                    if iri == rdf::TYPE.as_str() {
                        "a".to_string()
                    } else {
                        iri.to_string()
                    }
                })
        };
        triples
            .iter()
            .map(|t| {
                (
                    strip(t.subject.as_str()),
                    strip(t.predicate.as_str()),
                    strip(t.object.as_str()),
                )
            })
            .collect()
    }

    fn s(a: &str, b: &str, c: &str) -> (String, String, String) {
        (a.into(), b.into(), c.into())
    }

    fn build(line: &str) -> Vec<Triple> {
        builder().triples_for(&parse(line).unwrap()).unwrap()
    }

    #[test]
    fn single_entity_yields_one_type_triple() {
        let triples = build("Equipment[AHU1]");
        assert_eq!(short(&triples), vec![s("ex:AHU1", "a", "brick:Equipment")]);
    }

    #[test]
    fn equipment_point_separator() {
        let triples = build("Equipment[AHU1]/Point[SAT]");
        assert_eq!(
            short(&triples),
            vec![
                s("ex:AHU1", "a", "brick:Equipment"),
                s("ex:SAT", "a", "brick:Point"),
                s("ex:AHU1", "brick:hasPoint", "ex:SAT"),
            ]
        );
    }

    #[test]
    fn tagged_feeds_ignores_categories() {
        let triples = build("Equipment[AHU1][feeds]Equipment[VAV1]");
        assert_eq!(triples.len(), 3);
        assert_eq!(short(&triples)[2], s("ex:AHU1", "brick:feeds", "ex:VAV1"));
    }

    #[test]
    fn tag_overrides_table() {
        let triples = build("Location[A][hasPart]Point[B]");
        assert_eq!(short(&triples)[2], s("ex:A", "brick:hasPart", "ex:B"));
    }

    #[test]
    fn chain_resolves_each_adjacent_pair() {
        let triples = build("Building[B1]/Room[R1]/AHU[A1]/Supply_Air_Temperature_Sensor[SAT]");
        let edges: Vec<_> = short(&triples).into_iter().skip(4).collect();
        assert_eq!(
            edges,
            vec![
                s("ex:B1", "brick:hasPart", "ex:R1"),
                s("ex:R1", "brick:isLocationOf", "ex:A1"),
                s("ex:A1", "brick:hasPoint", "ex:SAT"),
            ]
        );
    }

    #[test]
    fn clauses_attach_to_primary_entity() {
        let triples = build("Room[R1]/AHU[A1]; [feeds] Room[R2]/VAV[V1]; /Fan[F1]");
        let edges: Vec<_> = short(&triples)
            .into_iter()
            .filter(|(_, p, _)| p != "a")
            .collect();
        assert_eq!(
            edges,
            vec![
                s("ex:R1", "brick:isLocationOf", "ex:A1"),
                s("ex:R2", "brick:isLocationOf", "ex:V1"),
                s("ex:A1", "brick:feeds", "ex:V1"),
                s("ex:A1", "brick:hasPart", "ex:F1"),
            ]
        );
    }

    #[test]
    fn one_type_triple_per_entity_and_one_edge_per_marker() {
        let group = parse("Room[R1]/AHU[A1]>VAV[V1]; /Fan[F1]; [hasPoint]Point[P]").unwrap();
        let triples = builder().triples_for(&group).unwrap();
        assert_eq!(triples.len(), group.entity_count() + group.marker_count());
    }

    #[test]
    fn point_point_fails_and_sink_is_untouched() {
        let mut graph = BrickGraph::new();
        let group = parse("Equipment[AHU1]/Point[SAT]/Point[RAT]").unwrap();
        let err = builder().build_from_line(&group, &mut graph).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Resolve(ResolveError::UnresolvableRelationship { .. })
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn unknown_class_with_tag_still_builds() {
        let triples = build("Widget[W1][feeds]AHU[A1]");
        assert_eq!(short(&triples)[0], s("ex:W1", "a", "brick:Widget"));
    }

    #[test]
    fn strict_classes_rejects_unknown_class() {
        let strict = GraphBuilder::new(
            RelationshipResolver::new(CategoryTable::seeded()).with_strict_classes(true),
            Namespaces::default(),
        );
        let err = strict
            .triples_for(&parse("Widget[W1][feeds]AHU[A1]").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Resolve(ResolveError::UnknownClass { .. })
        ));
    }

    #[test]
    fn builder_has_no_memory_across_lines() {
        let b = builder();
        let group = parse("Room[R1]/AHU[A1]").unwrap();
        let mut first = Vec::new();
        let mut second = Vec::new();
        b.build_from_line(&group, &mut first).unwrap();
        b.build_from_line(&group, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_namespace_is_used_for_entities() {
        let b = GraphBuilder::new(
            RelationshipResolver::new(CategoryTable::seeded()),
            Namespaces::from_pairs([("bldg", "urn:bldg:")]),
        );
        let triples = b.triples_for(&parse("AHU[A1]").unwrap()).unwrap();
        assert_eq!(triples[0].subject.as_str(), "urn:bldg:A1");
        assert_eq!(triples[0].object.as_str(), format!("{BRICK_NS}AHU"));
    }
}
