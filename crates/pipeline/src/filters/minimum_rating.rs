//! Rating floor for recommendations.

use crate::context::UserContext;
use crate::traits::Filter;
use catalog::MediaRecord;

/// Keeps candidates with `rating >= min_rating` (inclusive).
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// `min_rating` is on the 0-10 scale
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        _context: &UserContext,
    ) -> Vec<&'a MediaRecord> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.rating() >= self.min_rating)
            .collect()
    }
}
