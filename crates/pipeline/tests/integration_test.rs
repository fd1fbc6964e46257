//! Integration tests for the pipeline.
//!
//! These tests load a catalog from disk, build a watch history and check
//! that filters and ranking work together in a realistic scenario.

use catalog::{MediaCatalog, MediaRecord};
use pipeline::filters::*;
use pipeline::{
    FilterPipeline, RecommendationEngine, RecommendationFilters, analyze_user_genre_preferences,
    build_user_context, tally_genres,
};
use profile::{User, UserIdGenerator};
use std::fs;

const CATALOG: &str = "\
Movie,M001,Inception,Sci-Fi,8.8,148,Christopher Nolan
Movie,M002,Interstellar,Sci-Fi,8.6,169,Christopher Nolan
Movie,M003,The Godfather,Crime,9.2,175,Francis Ford Coppola
Series,S001,Breaking Bad,Crime,9.5,47,5
Series,S002,Dark,Sci-Fi,8.7,60,3

Documentary,D001,Planet Earth,Nature,9.4,50,Wildlife
Documentary,D002,Cosmos,Sci-Fi,9.3,45,Astronomy
Movie,M004,Arrival,Sci-Fi,7.9,116,Denis Villeneuve
";

fn create_test_setup() -> (tempfile::TempDir, MediaCatalog) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("media_data.txt");
    fs::write(&path, CATALOG).unwrap();

    let mut catalog = MediaCatalog::new();
    let loaded = catalog.load_from_file(&path).unwrap();
    assert_eq!(loaded, 8, "blank lines are skipped");

    (dir, catalog)
}

fn watch(user: &mut User, catalog: &MediaCatalog, id: &str) {
    let item = catalog.get_by_id(id).cloned().unwrap();
    user.watch_media(item);
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let (_dir, catalog) = create_test_setup();
    let mut ids = UserIdGenerator::new();
    let mut user = User::new("alice", &mut ids);
    watch(&mut user, &catalog, "M001");

    let context = build_user_context(&user);
    let pipeline = FilterPipeline::new()
        .add_filter(AlreadyWatchedFilter)
        .add_filter(MinimumRatingFilter::new(8.5))
        .add_filter(MaximumDurationFilter::new(150))
        .add_filter(GenrePreferenceFilter);

    let filtered = pipeline.apply(catalog.get_all_media().iter().collect(), &context);
    let filtered_ids: Vec<&str> = filtered.iter().map(|m| m.id()).collect();

    // M001 watched, M002 too long, M004 too low, Crime and Nature never watched
    assert_eq!(filtered_ids, vec!["S002", "D002"]);
}

#[test]
fn test_cold_start_then_warm_path() {
    let (_dir, catalog) = create_test_setup();
    let mut ids = UserIdGenerator::new();
    let mut user = User::new("bob", &mut ids);
    let mut engine = RecommendationEngine::new();
    let filters = RecommendationFilters::new(0.0, 200);

    let cold = engine.generate_recommendations(Some(&user), Some(&catalog), filters);
    let cold_ids: Vec<&str> = cold.iter().map(|m| m.id()).collect();
    assert_eq!(cold_ids, vec!["S001", "D001", "D002", "M003", "M001"]);
    assert_eq!(engine.total_recommendations_generated(), 0);

    watch(&mut user, &catalog, "S001");
    let warm = engine.generate_recommendations(Some(&user), Some(&catalog), filters);
    let warm_ids: Vec<&str> = warm.iter().map(|m| m.id()).collect();
    assert_eq!(warm_ids, vec!["M003"]);
    assert_eq!(engine.total_recommendations_generated(), 1);
}

#[test]
fn test_recommendations_never_include_watched_items() {
    let (_dir, catalog) = create_test_setup();
    let mut user = User::restore("User7", "carol", Vec::new());
    for id in ["M001", "S002", "D002"] {
        watch(&mut user, &catalog, id);
    }

    let mut engine = RecommendationEngine::new();
    let recs = engine.generate_recommendations(
        Some(&user),
        Some(&catalog),
        RecommendationFilters::new(0.0, 200),
    );

    assert!(!recs.is_empty());
    for rec in &recs {
        assert!(!user.watch_history().contains(rec), "{} was already watched", rec.id());
        assert_eq!(rec.genre(), "Sci-Fi");
    }
    assert!(recs.windows(2).all(|w| w[0].rating() >= w[1].rating()));
}

#[test]
fn test_genre_preferences_from_history() {
    let (_dir, catalog) = create_test_setup();
    let mut user = User::restore("User2", "dave", Vec::new());
    for id in ["M001", "S001", "M002", "M001"] {
        watch(&mut user, &catalog, id);
    }

    let genres = analyze_user_genre_preferences(&user);
    assert_eq!(genres, vec!["Sci-Fi", "Crime", "Sci-Fi", "Sci-Fi"]);

    let tally = tally_genres(&genres);
    assert_eq!(tally, vec![("Sci-Fi".to_string(), 3), ("Crime".to_string(), 1)]);
}

#[test]
fn test_sorted_catalog_still_ranks_by_rating() {
    let (_dir, mut catalog) = create_test_setup();
    catalog.sort_media();
    catalog.add_media(MediaRecord::movie("M100", "Zodiac", "Crime", 9.5, 157, "David Fincher").unwrap());

    let mut engine = RecommendationEngine::new();
    let user = User::restore("User3", "erin", Vec::new());
    let recs = engine.generate_recommendations(
        Some(&user),
        Some(&catalog),
        RecommendationFilters::new(9.0, 200),
    );

    // Breaking Bad sorts before Zodiac by title, so it keeps first place on the tie
    let rec_ids: Vec<&str> = recs.iter().map(|m| m.id()).collect();
    assert_eq!(rec_ids, vec!["S001", "M100", "D001", "D002", "M003"]);
}
