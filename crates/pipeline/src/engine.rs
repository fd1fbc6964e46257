//! # Recommendation Engine
//!
//! Turns a user's watch history and the catalog into a ranked list.
//!
//! Two policies:
//! - **Cold start** (empty history): top-rated catalog items passing the
//!   rating and duration filters, capped at `cold_start_limit` (5 by default).
//! - **Warm path**: unwatched items passing the rating and duration filters
//!   whose genre the user has watched before. Not capped.
//!
//! Both rank by rating, highest first; ties keep catalog order.
//!
//! The engine counts the recommendations it hands out on the warm path only.
//! Cold-start results are not counted.

use crate::context::{UserContext, build_user_context};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    AlreadyWatchedFilter, GenrePreferenceFilter, MaximumDurationFilter, MinimumRatingFilter,
};
use catalog::{MediaCatalog, MediaRecord};
use profile::User;
use tracing::{debug, info};

/// How many items a user with no history is offered
pub const DEFAULT_COLD_START_LIMIT: usize = 5;

/// The rating and duration bounds of a recommendation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationFilters {
    /// Inclusive lower bound on rating
    pub min_rating: f64,
    /// Inclusive upper bound on duration, in minutes
    pub max_duration: i32,
}

impl RecommendationFilters {
    pub fn new(min_rating: f64, max_duration: i32) -> Self {
        Self {
            min_rating,
            max_duration,
        }
    }

    /// Build filters from optional user input.
    ///
    /// Missing values take the default. So do ratings outside `0.0..=10.0`
    /// (including NaN) and negative durations.
    pub fn from_input(
        min_rating: Option<f64>,
        max_duration: Option<i64>,
        defaults: RecommendationFilters,
    ) -> Self {
        let min_rating = min_rating
            .filter(|r| (0.0..=10.0).contains(r))
            .unwrap_or(defaults.min_rating);
        let max_duration = max_duration
            .filter(|d| *d >= 0)
            .and_then(|d| i32::try_from(d).ok())
            .unwrap_or(defaults.max_duration);

        Self {
            min_rating,
            max_duration,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    total_generated: usize,
    cold_start_limit: usize,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            total_generated: 0,
            cold_start_limit: DEFAULT_COLD_START_LIMIT,
        }
    }

    /// Change how many items the cold-start policy returns.
    pub fn with_cold_start_limit(mut self, limit: usize) -> Self {
        self.cold_start_limit = limit;
        self
    }

    /// Main entry point: rank catalog items for a user.
    ///
    /// A missing user or catalog yields an empty list rather than an error.
    pub fn generate_recommendations(
        &mut self,
        user: Option<&User>,
        catalog: Option<&MediaCatalog>,
        filters: RecommendationFilters,
    ) -> Vec<MediaRecord> {
        let (Some(user), Some(catalog)) = (user, catalog) else {
            return Vec::new();
        };

        let context = build_user_context(user);
        let candidates: Vec<&MediaRecord> = catalog.get_all_media().iter().collect();

        if context.is_cold_start() {
            let recommendations = self.cold_start(candidates, &context, filters);
            info!(
                "Cold start: {} top-rated recommendations for {}",
                recommendations.len(),
                context.user_id
            );
            return recommendations;
        }

        let pipeline = FilterPipeline::new()
            .add_filter(AlreadyWatchedFilter)
            .add_filter(MinimumRatingFilter::new(filters.min_rating))
            .add_filter(MaximumDurationFilter::new(filters.max_duration))
            .add_filter(GenrePreferenceFilter);

        let mut ranked = pipeline.apply(candidates, &context);
        rank_by_rating(&mut ranked);

        let recommendations: Vec<MediaRecord> = ranked.into_iter().cloned().collect();
        self.total_generated += recommendations.len();

        info!(
            "Generated {} recommendations for {} from {} watched genres",
            recommendations.len(),
            context.user_id,
            context.watched_genres.len()
        );
        recommendations
    }

    fn cold_start(
        &self,
        candidates: Vec<&MediaRecord>,
        context: &UserContext,
        filters: RecommendationFilters,
    ) -> Vec<MediaRecord> {
        let pipeline = FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(filters.min_rating))
            .add_filter(MaximumDurationFilter::new(filters.max_duration));

        let mut ranked = pipeline.apply(candidates, context);
        rank_by_rating(&mut ranked);
        debug!(
            "Cold start: {} candidates pass the filters, keeping {}",
            ranked.len(),
            self.cold_start_limit
        );

        ranked
            .into_iter()
            .take(self.cold_start_limit)
            .cloned()
            .collect()
    }

    /// Cumulative number of warm-path recommendations returned
    pub fn total_recommendations_generated(&self) -> usize {
        self.total_generated
    }

    pub fn reset_recommendation_counter(&mut self) {
        self.total_generated = 0;
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest rating first. `sort_by` is stable, so equal ratings keep catalog order.
fn rank_by_rating(items: &mut [&MediaRecord]) {
    items.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
}
