use criterion::{Criterion, black_box, criterion_group, criterion_main};
use navrisk::{
    calculator::RiskReturnCalculator,
    frame::PriceTable,
    statistic::{algorithm::Moments, rolling::RollingWindow},
    test_utils::{consecutive_series, date, synthetic_navs},
};

/// 约十年的交易日。
const TRADING_DAYS: usize = 2_520;

criterion_main!(benches);
criterion_group!(
    benches,
    bench_daily_returns,
    bench_rolling_beta,
    bench_summary,
    bench_moments
);

fn prices(calculator: &RiskReturnCalculator) -> PriceTable {
    let start = date(2010, 1, 4);
    let series = [
        ("SOROS", 1.0, 0.0001, 0.45, 0.3),
        ("PAULSON", 1.0, -0.0002, 0.35, 1.9),
        ("TIGER", 1.0, 0.0, 0.25, 4.1),
        ("BERKSHIRE", 1.0, 0.0003, 0.85, 2.7),
        ("S&P 500", 1_100.0, 0.0003, 1.0, 0.0),
    ]
    .map(|(asset, nav, drift, beta, phase)| {
        consecutive_series(asset, start, synthetic_navs(TRADING_DAYS, nav, drift, beta, phase))
    });

    calculator.align(series).unwrap()
}

fn bench_daily_returns(c: &mut Criterion) {
    let calculator = RiskReturnCalculator::default();
    let prices = prices(&calculator);

    c.bench_function("daily_returns_10yr", |b| {
        b.iter(|| black_box(calculator.daily_returns(black_box(&prices)).unwrap()))
    });
}

fn bench_rolling_beta(c: &mut Criterion) {
    let calculator = RiskReturnCalculator::default();
    let returns = calculator.daily_returns(&prices(&calculator)).unwrap();

    c.bench_function("rolling_beta_10yr", |b| {
        b.iter(|| black_box(calculator.rolling_beta(black_box(&returns)).unwrap()))
    });
}

fn bench_summary(c: &mut Criterion) {
    let calculator = RiskReturnCalculator::default();
    let prices = prices(&calculator);

    c.bench_function("summary_10yr", |b| {
        b.iter(|| black_box(calculator.summary(black_box(&prices)).unwrap()))
    });
}

fn bench_moments(c: &mut Criterion) {
    let calculator = RiskReturnCalculator::default();
    let returns = calculator.daily_returns(&prices(&calculator)).unwrap();
    let column = returns.frame().columns().next().map(|(_, column)| column.to_vec()).unwrap();

    let mut group = c.benchmark_group("moments");
    group.bench_function("full_series_variance", |b| {
        b.iter(|| {
            black_box(Moments::from_values(black_box(&column)).and_then(|m| m.sample_variance()))
        })
    });
    group.bench_function("rolling_std_dev_21", |b| {
        b.iter(|| black_box(RollingWindow::new(21).std_dev(black_box(&column))))
    });
    group.finish();
}
