//! Converter facade: batch translation of naming files into a Brick graph.
//!
//! The `Converter` owns the graph builder and the output graph for one run
//! and applies the configured [`ErrorPolicy`] to failing lines.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, LineError};
use crate::grammar;
use crate::graph::{BrickGraph, GraphBuilder};
use crate::namespace::Namespaces;
use crate::ontology::CategoryTable;
use crate::relation::RelationshipResolver;

/// What to do when a line fails to parse or resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing line.
    #[default]
    Abort,
    /// Log the failure and continue with the next line.
    Skip,
    /// Continue, then fail with every failing line reported together.
    Collect,
}

/// Configuration for a [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    pub namespaces: Namespaces,
    pub on_error: ErrorPolicy,
    /// Reject entities whose class is not a Location, Point or Equipment.
    pub strict_classes: bool,
}

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Lines converted successfully.
    pub converted: usize,
    /// Empty lines that were skipped.
    pub blank: usize,
    /// Lines that failed (only non-zero under `Skip`).
    pub failed: usize,
    /// Triples emitted, duplicates included.
    pub emitted: usize,
    /// Size of the graph after the run.
    pub graph_len: usize,
}

/// One-shot batch converter.
pub struct Converter {
    builder: GraphBuilder,
    graph: BrickGraph,
    on_error: ErrorPolicy,
}

impl Converter {
    pub fn new(categories: CategoryTable, config: ConverterConfig) -> Self {
        let resolver =
            RelationshipResolver::new(categories).with_strict_classes(config.strict_classes);
        tracing::info!(
            entity_ns = config.namespaces.entity_ns(),
            on_error = ?config.on_error,
            strict_classes = config.strict_classes,
            "initializing converter"
        );
        Self {
            builder: GraphBuilder::new(resolver, config.namespaces),
            graph: BrickGraph::new(),
            on_error: config.on_error,
        }
    }

    /// Parse and build one line. On failure nothing from the line is kept.
    pub fn convert_line(&mut self, line_no: usize, line: &str) -> Result<usize, ConvertError> {
        let wrap = |source: LineError| ConvertError::Line {
            line_no,
            line: line.to_string(),
            source,
        };
        let group = grammar::parse(line).map_err(|e| wrap(e.into()))?;
        self.builder
            .build_from_line(&group, &mut self.graph)
            .map_err(|e| wrap(e.into()))
    }

    /// Convert newline-separated names. Blank lines are ignored.
    pub fn convert_str(&mut self, input: &str) -> Result<ConversionReport, ConvertError> {
        let mut report = ConversionReport::default();
        let mut failures = Vec::new();

        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end();
            if line.trim_start().is_empty() {
                report.blank += 1;
                continue;
            }
            tracing::debug!(line_no, line, "converting");

            match self.convert_line(line_no, line) {
                Ok(emitted) => {
                    report.converted += 1;
                    report.emitted += emitted;
                }
                Err(e) => match self.on_error {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => {
                        tracing::warn!(line_no, line, error = %e, "skipping line");
                        report.failed += 1;
                    }
                    ErrorPolicy::Collect => failures.push(e),
                },
            }
        }

        if !failures.is_empty() {
            return Err(ConvertError::Batch {
                total: report.converted + failures.len(),
                failures,
            });
        }

        report.graph_len = self.graph.len();
        tracing::info!(
            converted = report.converted,
            failed = report.failed,
            emitted = report.emitted,
            triples = report.graph_len,
            "conversion complete"
        );
        Ok(report)
    }

    /// Convert a file with one name per line.
    pub fn convert_file(&mut self, path: &Path) -> Result<ConversionReport, ConvertError> {
        let input = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), "reading names");
        self.convert_str(&input)
    }

    pub fn graph(&self) -> &BrickGraph {
        &self.graph
    }

    pub fn into_graph(self) -> BrickGraph {
        self.graph
    }

    pub fn namespaces(&self) -> &Namespaces {
        self.builder.namespaces()
    }

    pub fn builder(&self) -> &GraphBuilder {
        &self.builder
    }
}
