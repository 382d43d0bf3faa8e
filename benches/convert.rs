//! Benchmarks for parsing and conversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use brickname::converter::{Converter, ConverterConfig};
use brickname::grammar;
use brickname::graph::{OutputFormat, write_graph};
use brickname::ontology::CategoryTable;

const LINE: &str =
    "Building[B1]/Floor[F2]/Room[R201]/VAV[VAV201]/Zone_Air_Temperature_Sensor[ZAT201]; [feeds] AHU[AHU1]";

fn names(n: usize) -> String {
    (0..n)
        .map(|i| format!("Room[R{i}]/AHU[AHU{i}]/Supply_Air_Temperature_Sensor[SAT{i}]; >VAV[VAV{i}]\n"))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_line", |bench| {
        bench.iter(|| black_box(grammar::parse(black_box(LINE)).unwrap()))
    });
}

fn bench_convert(c: &mut Criterion) {
    let table = CategoryTable::seeded();
    let input = names(1_000);

    c.bench_function("convert_1k_lines", |bench| {
        bench.iter(|| {
            let mut converter = Converter::new(table.clone(), ConverterConfig::default());
            black_box(converter.convert_str(&input).unwrap())
        })
    });
}

fn bench_turtle(c: &mut Criterion) {
    let mut converter = Converter::new(CategoryTable::seeded(), ConverterConfig::default());
    converter.convert_str(&names(1_000)).unwrap();

    c.bench_function("turtle_1k_lines", |bench| {
        bench.iter(|| {
            black_box(
                write_graph(
                    converter.graph(),
                    converter.namespaces(),
                    OutputFormat::Turtle,
                    Vec::new(),
                )
                .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_parse, bench_convert, bench_turtle);
criterion_main!(benches);
