//! The recommendation criteria, one filter per file.

pub mod already_watched;
pub mod genre_preference;
pub mod maximum_duration;
pub mod minimum_rating;

// Re-export for convenience
pub use already_watched::AlreadyWatchedFilter;
pub use genre_preference::GenrePreferenceFilter;
pub use maximum_duration::MaximumDurationFilter;
pub use minimum_rating::MinimumRatingFilter;
