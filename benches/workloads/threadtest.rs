use criterion::{black_box, Criterion, Throughput};
use optr::{copy, to, value};
use std::sync::mpsc;
use std::thread;

const OPS: usize = 50_000;

pub fn run(c: &mut Criterion) {
    bench_prod_cons(c);
    bench_shared_reads(c);
}

fn bench_prod_cons(c: &mut Criterion) {
    let mut group = c.benchmark_group("threadtest_prod_cons");

    // Only even numbers of threads (pairs)
    for t in [2, 4, 8] {
        let pairs = t / 2;
        group.throughput(Throughput::Elements((OPS * pairs) as u64));

        group.bench_function(format!("threadtest_{}_threads", t), |b| {
            b.iter(|| {
                let mut handles = Vec::with_capacity(t);

                for _ in 0..pairs {
                    let (tx, rx) = mpsc::channel();

                    // Producer
                    handles.push(thread::spawn(move || {
                        for i in 0..OPS {
                            if tx.send(to(i)).is_err() {
                                break;
                            }
                        }
                    }));

                    // Consumer: reads, copies, then frees remotely allocated boxes.
                    handles.push(thread::spawn(move || {
                        while let Ok(boxed) = rx.recv() {
                            black_box(value(&boxed));
                            black_box(copy(&boxed));
                        }
                    }));
                }

                for h in handles {
                    h.join().unwrap();
                }
            })
        });
    }
    group.finish();
}

fn bench_shared_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("threadtest_shared_reads");
    let shared = Some(to(String::from("shared")));

    for t in [1, 4, 8] {
        group.throughput(Throughput::Elements((OPS * t) as u64));

        group.bench_function(format!("shared_reads_{}_threads", t), |b| {
            b.iter(|| {
                thread::scope(|s| {
                    for _ in 0..t {
                        s.spawn(|| {
                            for _ in 0..OPS {
                                black_box(value(black_box(&shared)));
                            }
                        });
                    }
                });
            })
        });
    }
    group.finish();
}
