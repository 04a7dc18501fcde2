//! Benchmarks for input parsing on the quick-start path.
//!
//! ZIP validation and route parsing run on every submission and launch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailmyballot::resolution::ZipCode;
use mailmyballot::state::Route;

fn bench_zip_parse_valid(c: &mut Criterion) {
    c.bench_function("zip_parse_valid", |b| {
        b.iter(|| ZipCode::parse(black_box("33401")))
    });
}

fn bench_zip_parse_invalid(c: &mut Criterion) {
    c.bench_function("zip_parse_invalid", |b| {
        b.iter(|| ZipCode::parse(black_box("3340a")))
    });
}

fn bench_route_parse(c: &mut Criterion) {
    c.bench_function("route_parse_address", |b| {
        b.iter(|| black_box("/address/New%20York/10001").parse::<Route>())
    });
}

criterion_group!(
    benches,
    bench_zip_parse_valid,
    bench_zip_parse_invalid,
    bench_route_parse
);
criterion_main!(benches);
