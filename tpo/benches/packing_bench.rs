use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

use tpo::config::TPOConfig;
use tpo::opt::{Strategy, run_packing};
use treepack::entities::{Layout, Packing, Placement};

criterion_main!(benches);
criterion_group!(benches, collision_bench, greedy_bench, random_bench);

fn reference_packing(n: usize) -> Packing {
    let config = TPOConfig::default();
    run_packing(n, Strategy::Greedy, &config, SmallRng::seed_from_u64(0))
        .expect("reference packing failed")
}

/// Admissibility checks of candidates against a layout of 40 trees
fn collision_bench(c: &mut Criterion) {
    let reference = reference_packing(40);
    let template = reference.template().clone();
    let mut layout = Layout::new(template.clone());
    for ps in reference.placed_shapes() {
        layout.place(ps.placement());
    }

    let candidates = (0..64)
        .map(|i| {
            let x = (i % 8) as f64 * 20.0 - 70.0;
            let y = (i / 8) as f64 * 20.0 - 70.0;
            template.materialize(&Placement::new(0, 45.0 * (i % 8) as f64, (x, y)).d_transf)
        })
        .collect::<Vec<_>>();

    c.bench_function("is_admissible", |b| {
        b.iter(|| {
            candidates
                .iter()
                .filter(|s| layout.is_admissible(black_box(s)))
                .count()
        })
    });
}

fn greedy_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for n in [10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| reference_packing(n))
        });
    }
    group.finish();
}

fn random_bench(c: &mut Criterion) {
    let config = TPOConfig::default();
    c.bench_function("random_50", |b| {
        b.iter(|| run_packing(50, Strategy::Random, &config, SmallRng::seed_from_u64(0)))
    });
}
