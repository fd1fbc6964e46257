//! Recommendation pipeline: filters, the engine that drives them, and genre
//! preference analysis.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - RecommendationEngine for the cold-start and warm-path policies
//!
//! ## Architecture
//! A recommendation request runs in stages:
//! 1. Build a UserContext (watched ids, watched genres) from the history
//! 2. Filters remove unwanted candidates (already watched, too low rated,
//!    too long, wrong genre)
//! 3. Survivors are ranked by rating, highest first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{RecommendationEngine, RecommendationFilters};
//!
//! let mut engine = RecommendationEngine::new();
//! let recommendations = engine.generate_recommendations(
//!     Some(&user),
//!     Some(&catalog),
//!     RecommendationFilters::new(8.0, 150),
//! );
//! ```

pub mod context;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod preferences;
pub mod traits;

// Re-export main types
pub use context::{UserContext, build_user_context};
pub use engine::{DEFAULT_COLD_START_LIMIT, RecommendationEngine, RecommendationFilters};
pub use filter_pipeline::FilterPipeline;
pub use preferences::{analyze_user_genre_preferences, tally_genres};
pub use traits::Filter;
