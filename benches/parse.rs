//! Tokenizer and full conversion throughput on a synthetic drawing.
//!
//! Run with: cargo bench --bench parse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxf_features::io::dxf::tokenize;
use dxf_features::{parse_dxf, DxfReaderConfiguration};
use std::fmt::Write;

/// Drawing with one block of a bulged outline and `count` entities that
/// alternate between lines, circles, polylines and inserts.
fn synthetic_drawing(count: usize) -> String {
    let mut dxf = String::from("0\nSECTION\n2\nBLOCKS\n0\nBLOCK\n2\nTILE\n10\n0\n20\n0\n");
    dxf.push_str("0\nLWPOLYLINE\n8\n0\n90\n4\n70\n1\n");
    dxf.push_str("10\n0\n20\n0\n42\n0.5\n10\n1\n20\n0\n10\n1\n20\n1\n42\n-0.5\n10\n0\n20\n1\n");
    dxf.push_str("0\nENDBLK\n0\nENDSEC\n0\nSECTION\n2\nENTITIES\n");

    for i in 0..count {
        let x = (i % 100) as f64 * 10.0;
        let y = (i / 100) as f64 * 10.0;
        let _ = match i % 4 {
            0 => write!(dxf, "0\nLINE\n8\nL\n10\n{x}\n20\n{y}\n11\n{}\n21\n{}\n", x + 5.0, y + 5.0),
            1 => write!(dxf, "0\nCIRCLE\n8\nC\n10\n{x}\n20\n{y}\n40\n2.5\n"),
            2 => write!(
                dxf,
                "0\nLWPOLYLINE\n8\nP\n90\n3\n70\n0\n10\n{x}\n20\n{y}\n42\n1\n10\n{}\n20\n{y}\n10\n{}\n20\n{}\n",
                x + 4.0,
                x + 4.0,
                y + 4.0
            ),
            _ => write!(dxf, "0\nINSERT\n8\nI\n2\nTILE\n10\n{x}\n20\n{y}\n50\n30\n"),
        };
    }

    dxf.push_str("0\nENDSEC\n0\nEOF\n");
    dxf
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for count in [100, 1_000, 10_000] {
        let dxf = synthetic_drawing(count);
        group.throughput(Throughput::Bytes(dxf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &dxf, |b, dxf| {
            b.iter(|| tokenize(black_box(dxf)))
        });
    }
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dxf");
    let config = DxfReaderConfiguration::default();
    for count in [100, 1_000, 10_000] {
        let dxf = synthetic_drawing(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &dxf, |b, dxf| {
            b.iter(|| parse_dxf(black_box(dxf), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_convert);
criterion_main!(benches);
