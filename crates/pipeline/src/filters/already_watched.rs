//! Drops media the user has already watched.

use crate::context::UserContext;
use crate::traits::Filter;
use catalog::MediaRecord;

/// Removes candidates whose id appears in the watch history.
///
/// Matching is by id alone, so a rewatch of a duplicate-id entry is caught too.
pub struct AlreadyWatchedFilter;

impl Filter for AlreadyWatchedFilter {
    fn name(&self) -> &str {
        "AlreadyWatchedFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MediaRecord>,
        context: &UserContext,
    ) -> Vec<&'a MediaRecord> {
        candidates
            .into_iter()
            .filter(|candidate| !context.watched_ids.contains(candidate.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_watched_filter() {
        let mut context = UserContext::new("User1");
        context.watched_ids.insert("M1".to_string());
        context.watched_ids.insert("S1".to_string());

        let records = vec![
            MediaRecord::movie("M1", "Inception", "Sci-Fi", 8.8, 148, "Nolan").unwrap(),
            MediaRecord::movie("M2", "Heat", "Crime", 8.3, 170, "Mann").unwrap(),
            MediaRecord::series("S1", "Dark", "Thriller", 9.0, 60, 3).unwrap(),
            MediaRecord::documentary("D1", "Our Planet", "Nature", 9.3, 50, "Wildlife").unwrap(),
        ];

        let filter = AlreadyWatchedFilter;
        let filtered = filter.apply(records.iter().collect(), &context);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id(), "M2");
        assert_eq!(filtered[1].id(), "D1");
    }
}
