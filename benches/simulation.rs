use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{simulate, PageId, Policy, SimulationConfig};

/// Deterministic trace with a skewed id distribution.
fn skewed_trace(len: usize, pages: u32) -> Vec<PageId> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let r = (state % pages as u64) as u32;
            PageId::new(r * r % pages)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let trace = skewed_trace(10_000, 64);
    let mut group = c.benchmark_group("simulate");

    for policy in [Policy::Fifo, Policy::Frequency] {
        for capacity in [4usize, 16, 64] {
            let config = SimulationConfig::new(policy, capacity).unwrap();
            group.bench_with_input(
                BenchmarkId::new(policy.label(), capacity),
                &trace,
                |b, trace| b.iter(|| simulate(config, black_box(trace.iter().copied())).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
