use chrono::{FixedOffset, NaiveDate, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oracle_core::chart::{BirthData, NatalChartBuilder};
use oracle_core::ephemeris::{Ephemeris, SyntheticEphemeris};
use oracle_core::numerology::{first_name_vibration, oracle_personal};

fn bench_synthetic_positions(c: &mut Criterion) {
    let ephemeris = SyntheticEphemeris::new();

    c.bench_function("synthetic_positions", |b| {
        b.iter(|| ephemeris.calc_positions(black_box(2_448_058.0)))
    });
}

fn bench_natal_chart(c: &mut Criterion) {
    let dt = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(1990, 6, 15, 14, 0, 0)
        .unwrap();
    let birth = BirthData::new("Marie", dt, 48.8566, 2.3522);
    let builder = NatalChartBuilder::new();

    c.bench_function("natal_chart", |b| b.iter(|| builder.build(black_box(&birth))));
}

fn bench_numerology(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("first_name_vibration", |b| {
        b.iter(|| first_name_vibration(black_box("Jean-François")))
    });
    c.bench_function("oracle_personal", |b| {
        b.iter(|| oracle_personal(black_box(&today), black_box("15/06/1990")))
    });
}

criterion_group!(benches, bench_synthetic_positions, bench_natal_chart, bench_numerology);
criterion_main!(benches);
