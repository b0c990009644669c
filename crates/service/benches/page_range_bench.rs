use criterion::{black_box, criterion_group, criterion_main, Criterion};

use service::pagination::compute;
use service::steps::{derive_statuses, StepStatus};

fn bench_page_range(c: &mut Criterion) {
    c.bench_function("page_range_middle_window", |b| {
        b.iter(|| compute(black_box(1_000_000), black_box(25), black_box(20_000)).unwrap());
    });
    c.bench_function("page_range_full_listing", |b| {
        b.iter(|| compute(black_box(70), black_box(10), black_box(4)).unwrap());
    });
}

fn bench_steps(c: &mut Criterion) {
    c.bench_function("steps_derive_ten", |b| {
        b.iter(|| derive_statuses(black_box(10), black_box(6), StepStatus::Process));
    });
}

criterion_group!(benches, bench_page_range, bench_steps);
criterion_main!(benches);
