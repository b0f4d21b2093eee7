use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lcs_dp_bench::{BottomUp, Instance, InstanceKind, LcsSolver, TopDown};

fn bench_kind(c: &mut Criterion, kind: InstanceKind) {
    let mut group = c.benchmark_group(format!("lcs_{}", kind.label()));
    for &len in &[100usize, 200, 400, 800] {
        let inst = Instance::generate(len, len, kind);
        group.bench_with_input(BenchmarkId::new(TopDown::NAME, len), &inst, |b, inst| {
            b.iter(|| TopDown.solve(black_box(&inst.s1), black_box(&inst.s2)))
        });
        group.bench_with_input(BenchmarkId::new(BottomUp::NAME, len), &inst, |b, inst| {
            b.iter(|| BottomUp.solve(black_box(&inst.s1), black_box(&inst.s2)))
        });
    }
    group.finish();
}

fn bench_worst(c: &mut Criterion) {
    bench_kind(c, InstanceKind::WorstCase);
}

fn bench_best(c: &mut Criterion) {
    bench_kind(c, InstanceKind::BestCase);
}

criterion_group!(benches, bench_worst, bench_best);
criterion_main!(benches);
