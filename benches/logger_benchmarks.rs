//! Criterion benchmarks for rust_sync_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_sync_logger::core::{render_arguments, timestamp_now, LineOptions, LogRecord};
use rust_sync_logger::{log_to, LogLevel, Logger};
use std::io;
use std::sync::Arc;

fn sink_logger(min_level: LogLevel) -> Logger {
    Logger::builder()
        .min_level(min_level)
        .use_colours(false)
        .sink(io::sink())
        .build()
}

// ============================================================================
// Level Gate Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warn);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            log_to!(logger, LogLevel::Debug, "filtered ", black_box(42), " ", black_box(1.5));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            log_to!(logger, LogLevel::Error, "written ", black_box(42), " ", black_box(1.5));
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("render_arguments", |b| {
        b.iter(|| render_arguments(&[&"User: ", &black_box("alice"), &" ID: ", &black_box(123)]));
    });

    group.bench_function("timestamp_now", |b| {
        b.iter(timestamp_now);
    });

    let options = LineOptions {
        include_location: true,
        include_thread_id: true,
        use_colours: true,
    };
    let record = LogRecord::capture(
        LogLevel::Info as u8,
        "User: alice ID: 123".into(),
        "main.rs",
        1,
        &options,
    );
    group.bench_function("render_line", |b| {
        b.iter(|| black_box(&record).render_line(&options));
    });

    group.finish();
}

// ============================================================================
// Concurrent Emission Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(sink_logger(LogLevel::Info));

    group.bench_function("single_thread", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            logger.info(black_box("Concurrent message"));
        });
    });

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            log_to!(logger, LogLevel::Info, "Concurrent message ", i);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_level_filtering,
    bench_formatting,
    bench_concurrent_logging
);

criterion_main!(benches);
