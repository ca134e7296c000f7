use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geofuzz_core::fuzz::Scorer;
use geofuzz_core::prelude::*;
use std::hint::black_box;

const SYLLABLES: &[&str] = &[
    "ka", "zan", "mos", "kov", "pe", "ter", "burg", "no", "vo", "si", "birsk", "ros", "tov", "ya",
    "rsk", "ust", "ilim", "sar", "an", "sk",
];

/// Deterministic synthetic catalog of `n` places.
fn synthetic_catalog(n: usize) -> Vec<PlaceRecord> {
    (0..n)
        .map(|i| {
            let a = SYLLABLES[i % SYLLABLES.len()];
            let b = SYLLABLES[(i / SYLLABLES.len()) % SYLLABLES.len()];
            let c = SYLLABLES[(i * 7 + 3) % SYLLABLES.len()];
            let name = format!("{a}{b}{c}");
            PlaceRecord::new(i as u64 + 1, name.clone(), if i % 3 == 0 { "RU" } else { "KZ" })
                .with_alternate_names([format!("{name} {i}")])
                .with_population((i as u64 * 7919) % 100_000)
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for &size in &[1_000usize, 10_000] {
        let records = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(Geocoder::new(records.clone())));
        });
    }
    group.finish();
}

fn bench_scorer(c: &mut Criterion) {
    let scorer = Scorer::new("sankt petirburg");
    c.bench_function("scorer/similarity", |b| {
        b.iter(|| black_box(scorer.score(black_box("sankt peterburg"))));
    });
}

fn bench_geocode(c: &mut Criterion) {
    let geo = Geocoder::new(synthetic_catalog(10_000));
    let opts = GeocodeOptions::default();

    c.bench_function("geocode/exact", |b| {
        b.iter(|| black_box(geo.geocode(black_box("kazanmos"), &opts)));
    });
    c.bench_function("geocode/fuzzy", |b| {
        b.iter(|| black_box(geo.geocode(black_box("kasanmoss"), &opts)));
    });
    let filtered = opts.clone().with_country("RU");
    c.bench_function("geocode/fuzzy_country", |b| {
        b.iter(|| black_box(geo.geocode(black_box("kasanmoss"), &filtered)));
    });

    let queries: Vec<String> = (0..200).map(|i| format!("{}x", SYLLABLES[i % SYLLABLES.len()])).collect();
    c.bench_function("geocode/batch_200", |b| {
        b.iter(|| black_box(geo.geocode_batch(&queries, None, DEFAULT_THRESHOLD)));
    });
}

criterion_group!(benches, bench_index_build, bench_scorer, bench_geocode);
criterion_main!(benches);
