//! Filter for the user's available viewing time.

use crate::context::UserContext;
use crate::traits::Filter;
use catalog::MediaRecord;

/// Keeps candidates with `duration <= max_duration` minutes (inclusive).
pub struct MaximumDurationFilter {
    max_duration: i32,
}

impl MaximumDurationFilter {
    pub fn new(max_duration: i32) -> Self {
        Self { max_duration }
    }
}

impl Filter for MaximumDurationFilter {
    fn name(&self) -> &str {
        "MaximumDurationFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        _context: &UserContext,
    ) -> Vec<&'a MediaRecord> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.duration() <= self.max_duration)
            .collect()
    }
}
