use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringspsc_rs::channel;
use std::thread;

const MESSAGES: u64 = 1_000_000;
const ROUND_TRIPS: u64 = 100_000;

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_throughput");
    group.throughput(Throughput::Elements(MESSAGES));

    for capacity in [256usize, 4096, 65_536] {
        group.bench_with_input(
            BenchmarkId::new("blocking_push_pop", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let (mut tx, mut rx) = channel::<u64>(capacity).unwrap();

                    let producer = thread::spawn(move || {
                        for i in 0..MESSAGES {
                            tx.push(i);
                        }
                    });

                    for _ in 0..MESSAGES {
                        black_box(rx.pop());
                    }
                    producer.join().unwrap();
                });
            },
        );
    }

    group.bench_function("try_push_try_pop_spin", |b| {
        b.iter(|| {
            let (mut tx, mut rx) = channel::<u64>(4096).unwrap();

            let producer = thread::spawn(move || {
                for i in 0..MESSAGES {
                    let mut value = i;
                    while let Err(rejected) = tx.try_push(value) {
                        value = rejected;
                        std::hint::spin_loop();
                    }
                }
            });

            let mut received = 0u64;
            while received < MESSAGES {
                if let Some(v) = rx.try_pop() {
                    black_box(v);
                    received += 1;
                } else {
                    std::hint::spin_loop();
                }
            }
            producer.join().unwrap();
        });
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_round_trip");
    group.throughput(Throughput::Elements(ROUND_TRIPS));

    // One value in flight per direction: the classic latency shape.
    group.bench_function("ping_pong_capacity_1", |b| {
        b.iter(|| {
            let (mut req_tx, mut req_rx) = channel::<u64>(1).unwrap();
            let (mut resp_tx, mut resp_rx) = channel::<u64>(1).unwrap();

            let echo = thread::spawn(move || {
                for _ in 0..ROUND_TRIPS {
                    let v = req_rx.pop();
                    resp_tx.push(v);
                }
            });

            for i in 0..ROUND_TRIPS {
                req_tx.push(i);
                black_box(resp_rx.pop());
            }
            echo.join().unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_round_trip);
criterion_main!(benches);
