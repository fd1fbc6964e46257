//! Keeps media in genres the user has watched before.

use crate::context::UserContext;
use crate::traits::Filter;
use catalog::MediaRecord;

/// Keeps candidates whose genre appears in the user's watch history.
///
/// Genre comparison is exact and case-sensitive: "Sci-Fi" does not match
/// "sci-fi". With no watched genres nothing passes.
pub struct GenrePreferenceFilter;

impl Filter for GenrePreferenceFilter {
    fn name(&self) -> &str {
        "GenrePreferenceFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        context: &UserContext,
    ) -> Vec<&'a MediaRecord> {
        candidates
            .into_iter()
            .filter(|candidate| context.has_watched_genre(candidate.genre()))
            .collect()
    }
}
