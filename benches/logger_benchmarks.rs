//! Criterion benchmarks for advanced_logging

use advanced_logging::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let record = LogRecord::new(Severity::Info, "bench", "Request processed");
    let default_format = Formatter::default();
    let request_format = Formatter::new(REQUEST_FORMAT).unwrap();

    group.bench_function("default_format", |b| {
        b.iter(|| black_box(default_format.format(black_box(&record))));
    });

    group.bench_function("request_format", |b| {
        let record = record.clone().with_request_id("0f8fad5b-d9cb-469f-a165-70867728950e");
        b.iter(|| black_box(request_format.format(black_box(&record))));
    });

    group.bench_function("parse_template", |b| {
        b.iter(|| black_box(Formatter::new(black_box(REQUEST_FORMAT))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new("bench");
    for severity in Severity::ALL {
        logger.install_handler(Handler::custom(severity, Box::new(MemorySink::new())));
    }

    group.bench_function("debug_one_handler", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("critical_all_handlers", |b| {
        b.iter(|| logger.critical(black_box("Critical message")));
    });

    logger.set_min_level(Severity::Error);
    group.bench_function("filtered_by_min_level", |b| {
        b.iter(|| logger.info(black_box("Filtered message")));
    });

    group.finish();
}

// ============================================================================
// Lookup Benchmarks
// ============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let logger = Logger::new("bench");
    logger.install_handler(Handler::custom(Severity::Warning, Box::new(MemorySink::new())));

    group.bench_function("by_severity", |b| {
        b.iter(|| handler_exists_for_severity(&logger, black_box(Severity::Warning)));
    });

    group.bench_function("by_name", |b| {
        b.iter(|| handler_exists_for_severity(&logger, black_box("warning")));
    });

    group.bench_function("by_ordinal", |b| {
        b.iter(|| get_handler_for_severity(&logger, black_box(30u32)));
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_lookup);
criterion_main!(benches);
