use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::num::NonZeroUsize;
use tree_grower::grow::Grower;

fn bench_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow");
    let template = vec![
        json!({"id": "root", "name": "r"}),
        json!({"id": "a", "parentId": "root"}),
        json!({"id": "b", "parentId": "root"}),
        json!({"id": "c", "parentId": "a"}),
    ];

    // Growth cost is quadratic in iterations: every step rescans the whole tree
    for iterations in [10usize, 100, 500] {
        group.bench_function(BenchmarkId::new("run", iterations), |b| {
            b.iter(|| {
                let mut grower = Grower::new(template.clone(), StdRng::seed_from_u64(1));
                let (nodes, _) =
                    grower.run(NonZeroUsize::new(iterations).expect("non-zero"), |_| {});
                black_box(nodes.len())
            })
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_grow);
criterion_main!(benches);
