//! Performance benchmarks for PayStream.
//!
//! The ticker calls `tick` five times a second and the renderer formats two
//! amounts and three rates per frame, so these paths must stay far below the
//! tick period:
//! - `evaluate`: < 1μs mean
//! - `tick`: < 1μs mean
//! - formatting one frame: < 20μs mean
//! - `GET /earnings`: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use paystream::api::{AppState, EarningsResponse, create_router};
use paystream::calculation::{EarningsCalculator, RateUnit, evaluate};
use paystream::format::{NumberLocale, format_amount, format_rate, significant_decimals};
use paystream::models::{Currency, SalaryConfiguration};
use paystream::rates::{ExchangeQuote, QuoteFuture, RateSource};
use paystream::scheduler::{Frame, ManualClock, Scheduler};
use paystream::settings::SettingsStore;

use axum::{body::Body, http::Request};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;

struct NoQuote;

impl RateSource for NoQuote {
    fn fetch(&self) -> QuoteFuture<'_> {
        Box::pin(async { ExchangeQuote::unavailable() })
    }
}

fn mid_month() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 16, 9, 30, 0).unwrap()
}

/// Benchmark: Pure accrual evaluation.
///
/// Target: < 1μs mean
fn bench_evaluate(c: &mut Criterion) {
    let config = SalaryConfiguration::new(1_200_000.0, Currency::Ars, 1375.0);
    let now = mid_month();

    c.bench_function("evaluate", |b| {
        b.iter(|| black_box(evaluate(black_box(&config), black_box(&now))))
    });
}

/// Benchmark: One tick, evaluation plus the chase step.
///
/// Target: < 1μs mean
fn bench_tick(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    let mut calculator =
        EarningsCalculator::new(SalaryConfiguration::new(1200.0, Currency::Usd, 1375.0), &start);
    let now = mid_month();

    c.bench_function("tick", |b| b.iter(|| black_box(calculator.tick(black_box(&now)))));
}

/// Benchmark: Formatting a full frame in each locale.
///
/// Target: < 20μs mean
fn bench_format_frame(c: &mut Criterion) {
    let now = mid_month();
    let calculator =
        EarningsCalculator::new(SalaryConfiguration::new(1_200_000.0, Currency::Ars, 1375.0), &now);
    let frame = Frame::capture(&calculator, &now);

    let mut group = c.benchmark_group("format_frame");
    for locale in [NumberLocale::En, NumberLocale::EsAr] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", locale)), &locale, |b, &locale| {
            b.iter(|| black_box(EarningsResponse::from_frame(black_box(frame), locale)))
        });
    }
    group.finish();
}

/// Benchmark: Amount and rate formatting in isolation.
fn bench_format_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_values");

    group.bench_function("format_amount", |b| {
        b.iter(|| black_box(format_amount(black_box(612_345.678), Currency::Ars, NumberLocale::EsAr)))
    });

    for value in [27.78, 0.0046, 0.000463] {
        group.bench_with_input(BenchmarkId::new("format_rate", value), &value, |b, &value| {
            b.iter(|| {
                black_box(format_rate(
                    black_box(value),
                    Currency::Usd,
                    RateUnit::Second,
                    NumberLocale::En,
                ))
            })
        });
    }

    group.bench_function("significant_decimals", |b| {
        b.iter(|| black_box(significant_decimals(black_box(0.000463))))
    });

    group.finish();
}

/// Benchmark: `GET /earnings` through the router.
///
/// Target: < 100μs mean
fn bench_earnings_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::TempDir::new().unwrap();

    let _runtime = rt.enter();
    let mut scheduler = Scheduler::new(ManualClock::new(mid_month()), Duration::from_millis(200));
    let controller = scheduler.start(SalaryConfiguration::default()).unwrap();
    let router = create_router(AppState::new(
        controller,
        SettingsStore::in_dir(dir.path()),
        Arc::new(NoQuote),
        NumberLocale::En,
    ));

    c.bench_function("get_earnings", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(Request::builder().uri("/earnings").body(Body::empty()).unwrap())
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_tick,
    bench_format_frame,
    bench_format_values,
    bench_earnings_endpoint
);
criterion_main!(benches);
