//! Performance benchmarks for the date shifter.
//!
//! This suite measures the per-request cost of each arithmetic path:
//! - Standard month shift
//! - Fiscal year and month shifts (period resolution dominates)
//! - Business-day walks of increasing length over the sample holidays
//! - A batch of mixed requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use date_shifter::calculation::DateShifter;
use date_shifter::config::ConfigLoader;
use date_shifter::models::{CalendarModel, HolidayCalendar, ShiftRequest};

/// Creates a shifter over the sample configuration.
fn create_shifter() -> DateShifter<HolidayCalendar> {
    ConfigLoader::load("./config/sample")
        .expect("Failed to load config")
        .into_shifter()
}

fn request(interval: &str, date: &str, increment: i64, alignment: &str) -> ShiftRequest {
    ShiftRequest::parse(interval, date, increment, alignment).expect("Invalid request")
}

/// Benchmark: standard calendar month shift.
fn bench_standard_month(c: &mut Criterion) {
    let shifter = create_shifter();
    let req = request("MONTH", "2024-01-31", 13, "S");

    c.bench_function("standard_month", |b| {
        b.iter(|| shifter.compute_date(black_box(&req)))
    });
}

/// Benchmark: fiscal shifts, which resolve the reference date's period first.
fn bench_fiscal(c: &mut Criterion) {
    let shifter = create_shifter();
    let year = request("YEAR", "2024-12-31", 1, "S").with_calendar_model(CalendarModel::Fiscal);
    let month = request("MONTH", "2024-06-15", -13, "E").with_calendar_model(CalendarModel::Fiscal);

    let mut group = c.benchmark_group("fiscal");
    group.bench_function("fiscal_year", |b| {
        b.iter(|| shifter.compute_date(black_box(&year)))
    });
    group.bench_function("fiscal_month", |b| {
        b.iter(|| shifter.compute_date(black_box(&month)))
    });
    group.finish();
}

/// Benchmark: business-day walks of 1, 20 and 200 days.
fn bench_business_days(c: &mut Criterion) {
    let shifter = create_shifter();

    let mut group = c.benchmark_group("business_days");
    for increment in [1i64, 20, 200] {
        let req = request("BDAY", "2024-01-02", increment, "S").with_jurisdiction("BR", Some("SP"));
        group.bench_with_input(BenchmarkId::from_parameter(increment), &req, |b, req| {
            b.iter(|| shifter.compute_date(black_box(req)))
        });
    }
    group.finish();
}

/// Benchmark: 100 mixed requests.
fn bench_batch_100(c: &mut Criterion) {
    let shifter = create_shifter();

    let requests: Vec<ShiftRequest> = (0..100)
        .map(|i| match i % 4 {
            0 => request("YEAR", "2024-02-29", i, "S"),
            1 => request("MONTH", "2024-03-31", i, "E"),
            2 => request("MONTH", "2024-03-31", -i, "B").with_calendar_model(CalendarModel::Fiscal),
            _ => request("BDAY", "2024-01-02", i, "S").with_jurisdiction("US", Some("NY")),
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            for req in &requests {
                let _ = black_box(shifter.compute_date(req));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_standard_month,
    bench_fiscal,
    bench_business_days,
    bench_batch_100,
);
criterion_main!(benches);
