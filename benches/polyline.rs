use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geojson_codec::geometry::LineString;
use geojson_codec::io::polyline::{decode_polyline, encode_polyline};

fn spiral(n: usize) -> LineString {
    LineString::try_new((0..n).map(|i| {
        let t = i as f64 / 100.0;
        [13.4 + t.cos() * t / 50.0, 52.5 + t.sin() * t / 50.0]
    }))
    .unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let line = spiral(10_000);
    let encoded = encode_polyline(&line);

    c.bench_function("decode polyline", |b| {
        b.iter(|| decode_polyline(black_box(&encoded)).unwrap())
    });
    c.bench_function("encode polyline", |b| {
        b.iter(|| encode_polyline(black_box(&line)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
