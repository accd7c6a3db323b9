use criterion::{black_box, Criterion};
use optr::{copy, to, value, value_or};

#[allow(dead_code)]
#[derive(Clone, Default)]
struct Record {
    id: u64,
    name: String,
    tags: Vec<u32>,
}

fn record() -> Record {
    Record {
        id: 7,
        name: "record".repeat(4),
        tags: (0..16).collect(),
    }
}

pub fn run(c: &mut Criterion) {
    bench_to(c);
    bench_reads(c);
    bench_copy(c);
}

fn bench_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_to");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    group.bench_function("to_u128", |b| {
        b.iter(|| {
            black_box(to(black_box(10u128)));
        })
    });

    group.bench_function("to_record", |b| {
        let source = record();
        b.iter(|| {
            black_box(to(black_box(&source).clone()));
        })
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_read");

    let present = Some(to(42u64));
    let absent: Option<Box<u64>> = None;

    group.bench_function("value_present", |b| {
        b.iter(|| black_box(value(black_box(&present))))
    });

    group.bench_function("value_absent", |b| {
        b.iter(|| black_box(value(black_box(&absent))))
    });

    group.bench_function("value_or_absent", |b| {
        b.iter(|| black_box(value_or(black_box(&absent), 7)))
    });

    let present_record = Some(to(record()));
    group.bench_function("value_record", |b| {
        b.iter(|| black_box(value(black_box(&present_record))))
    });

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("micro_copy");

    let present = Some(to(record()));
    let absent: Option<Box<Record>> = None;

    group.bench_function("copy_present", |b| {
        b.iter(|| black_box(copy(black_box(&present))))
    });

    // Absent input must not touch the allocator.
    group.bench_function("copy_absent", |b| {
        b.iter(|| black_box(copy(black_box(&absent))))
    });

    group.bench_function("copy_batch_1000", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(1000);
            for i in 0..1000u64 {
                v.push(copy(Some(&i)));
            }
            black_box(v);
        })
    });

    group.finish();
}
