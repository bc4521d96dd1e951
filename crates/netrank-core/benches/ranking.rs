use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use netrank_core::graph::DirectedGraph;
use netrank_core::metrics::hits::{HitsConfig, hits};
use netrank_core::metrics::pagerank::{PageRankConfig, pagerank};

/// (name, node count, edges per node)
const TIERS: [(&str, u32, u32); 3] = [("small", 100, 4), ("medium", 2_000, 8), ("large", 20_000, 8)];

/// Deterministic pseudo-random edge list (xorshift64).
fn synthetic_edges(nodes: u32, per_node: u32, seed: u64) -> Vec<(u32, u32)> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut edges = Vec::with_capacity((nodes * per_node) as usize);
    for source in 0..nodes {
        for _ in 0..per_node {
            let target = (next() % u64::from(nodes)) as u32;
            edges.push((source, target));
        }
    }
    edges
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph.build");

    for (name, nodes, per_node) in TIERS {
        let edges = synthetic_edges(nodes, per_node, 0xC0FFEE + u64::from(nodes));
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &edges, |b, edges| {
            b.iter(|| black_box(DirectedGraph::build(edges.iter().copied())))
        });
    }

    group.finish();
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let pr_config = PageRankConfig::default();
    let hits_config = HitsConfig {
        max_iter: 100,
        ..HitsConfig::default()
    };

    for (name, nodes, per_node) in TIERS {
        let edges = synthetic_edges(nodes, per_node, 0xC0FFEE + u64::from(nodes));
        let Ok(graph) = DirectedGraph::build(edges) else {
            continue;
        };
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("pagerank", name), &graph, |b, g| {
            b.iter(|| black_box(pagerank(g, &pr_config)))
        });
        group.bench_with_input(BenchmarkId::new("hits", name), &graph, |b, g| {
            b.iter(|| black_box(hits(g, &hits_config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_solvers);
criterion_main!(benches);
