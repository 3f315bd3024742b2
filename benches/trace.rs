//! Criterion benchmarks for graph construction and face tracing.
//! Focus sizes: n×n lattices for n in {8, 16, 32}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use facegraph::PlanarGraph;
use geo::Coord;

/// An n×n lattice with all unit edges; point `r * n + c` sits at (c, r).
fn lattice(n: usize) -> (Vec<Coord<f64>>, Vec<(usize, usize)>) {
    let mut points = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            points.push(Coord { x: c as f64, y: r as f64 });
        }
    }
    let mut pairs = Vec::with_capacity(2 * n * (n - 1));
    for r in 0..n {
        for c in 0..n {
            let id = r * n + c;
            if c < n - 1 {
                pairs.push((id, id + 1));
            }
            if r < n - 1 {
                pairs.push((id, id + n));
            }
        }
    }
    (points, pairs)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[8usize, 16, 32] {
        let (points, pairs) = lattice(n);
        group.bench_with_input(BenchmarkId::new("lattice", n), &n, |b, _| {
            b.iter(|| PlanarGraph::new(&points, &pairs).unwrap());
        });
    }
    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    for &n in &[8usize, 16, 32] {
        let (points, pairs) = lattice(n);
        let graph = PlanarGraph::new(&points, &pairs).unwrap();
        group.bench_with_input(BenchmarkId::new("lattice", n), &n, |b, _| {
            b.iter(|| graph.trace().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_trace);
criterion_main!(benches);
