use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use looksay_rs::{digits, LengthPrinter, Picker, Strategy};
use std::io;

fn bench_length(c: &mut Criterion) {
    let terms = [20, 30, 40];
    let mut group = c.benchmark_group("length");

    for n in terms.iter() {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.label(), n), n, |b, &n| {
                b.iter(|| {
                    let sink = LengthPrinter::new(io::sink());
                    let (sink, stats) = strategy.execute(black_box(n), sink).unwrap();
                    black_box((sink.count(), stats))
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("Iterator", n), n, |b, &n| {
            b.iter(|| black_box(digits(black_box(n)).unwrap().count()));
        });
    }

    group.finish();
}

fn bench_deep_prefix(c: &mut Criterion) {
    let terms = [1_000, 5_000];
    let mut group = c.benchmark_group("deep_prefix");

    for n in terms.iter() {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.label(), n), n, |b, &n| {
                b.iter(|| {
                    let picker = Picker::new(io::sink(), [1, 2, 3]).unwrap();
                    black_box(strategy.execute(black_box(n), picker).unwrap().1)
                });
            });
        }
    }

    group.finish();
}

fn bench_queue_only(c: &mut Criterion) {
    let terms = [100_000, 1_000_000];
    let mut group = c.benchmark_group("queue_deep_prefix");
    group.sample_size(10);

    for n in terms.iter() {
        group.bench_with_input(BenchmarkId::new("Queue", n), n, |b, &n| {
            b.iter(|| {
                let picker = Picker::new(io::sink(), [1, 2, 3]).unwrap();
                black_box(Strategy::Queue.execute(black_box(n), picker).unwrap().1)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_length, bench_deep_prefix, bench_queue_only);
criterion_main!(benches);
