//! Benchmarks for recommendation generation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog so the benchmark needs no data files.

use catalog::{MediaCatalog, MediaRecord};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{RecommendationEngine, RecommendationFilters, build_user_context};
use profile::User;

const GENRES: [&str; 6] = ["Drama", "Sci-Fi", "Comedy", "Crime", "Nature", "History"];

fn synthetic_catalog(size: usize) -> MediaCatalog {
    (0..size)
        .map(|i| {
            let genre = GENRES[i % GENRES.len()];
            let rating = (i % 101) as f64 / 10.0;
            let duration = 30 + (i % 180) as i32;
            match i % 3 {
                0 => MediaRecord::movie(format!("M{i}"), format!("Movie {i}"), genre, rating, duration, "Director"),
                1 => MediaRecord::series(format!("S{i}"), format!("Series {i}"), genre, rating, duration, 3),
                _ => MediaRecord::documentary(format!("D{i}"), format!("Doc {i}"), genre, rating, duration, "Oceans"),
            }
            .expect("synthetic rating is in range")
        })
        .collect()
}

fn watcher(catalog: &MediaCatalog, watched: usize) -> User {
    let history = catalog.get_all_media().iter().take(watched).cloned().collect();
    User::restore("User1", "bench", history)
}

fn bench_cold_start(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let user = watcher(&catalog, 0);
    let filters = RecommendationFilters::new(7.0, 150);

    c.bench_function("cold_start_recommendations", |b| {
        let mut engine = RecommendationEngine::new();
        b.iter(|| {
            let recs = engine.generate_recommendations(Some(&user), Some(black_box(&catalog)), filters);
            black_box(recs)
        })
    });
}

fn bench_warm_path(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let user = watcher(&catalog, 50);
    let filters = RecommendationFilters::new(7.0, 150);

    c.bench_function("warm_recommendations", |b| {
        let mut engine = RecommendationEngine::new();
        b.iter(|| {
            let recs = engine.generate_recommendations(Some(&user), Some(black_box(&catalog)), filters);
            black_box(recs)
        })
    });
}

fn bench_build_user_context(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    let user = watcher(&catalog, 500);

    c.bench_function("build_user_context", |b| {
        b.iter(|| black_box(build_user_context(black_box(&user))))
    });
}

criterion_group!(
    benches,
    bench_cold_start,
    bench_warm_path,
    bench_build_user_context
);
criterion_main!(benches);
