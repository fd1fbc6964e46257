//! Core domain types for the media catalog.
//!
//! A [`MediaRecord`] is a closed tagged variant: shared fields live on the
//! record, the kind-specific payload lives in [`MediaDetails`]. Behaviour that
//! differs per kind (`display_details`, `play`, the persisted extra field) is a
//! single exhaustive `match`, so adding a kind is a compile error until every
//! behaviour handles it.

use crate::error::ValidationError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lowest rating a record may carry
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a record may carry
pub const MAX_RATING: f64 = 10.0;

// =============================================================================
// Media kind
// =============================================================================

/// The discriminant of a media record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Series,
    Documentary,
}

impl MediaKind {
    /// Every kind, in the order the catalog format documents them
    pub const ALL: [MediaKind; 3] = [MediaKind::Movie, MediaKind::Series, MediaKind::Documentary];

    /// The exact tag used in catalog and user data files
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Series => "Series",
            MediaKind::Documentary => "Documentary",
        }
    }

    /// Field layout of a full record line for this kind
    pub fn field_layout(&self) -> &'static str {
        match self {
            MediaKind::Movie => "Type,ID,Title,Genre,Rating,Duration,Director",
            MediaKind::Series => "Type,ID,Title,Genre,Rating,Duration,Seasons",
            MediaKind::Documentary => "Type,ID,Title,Genre,Rating,Duration,Subject",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of a media record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDetails {
    Movie { director: String },
    Series { season_count: i32 },
    Documentary { subject: String },
}

impl MediaDetails {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDetails::Movie { .. } => MediaKind::Movie,
            MediaDetails::Series { .. } => MediaKind::Series,
            MediaDetails::Documentary { .. } => MediaKind::Documentary,
        }
    }
}

// =============================================================================
// MediaRecord
// =============================================================================

/// A single catalog entry: a movie, series or documentary.
///
/// Equality is by `id` within the same kind; hashing uses the id alone so it
/// stays consistent with equality. The natural order (by title) is offered as
/// [`MediaRecord::cmp_by_title`] rather than `Ord`, because it does not agree
/// with equality.
#[derive(Debug, Clone)]
pub struct MediaRecord {
    id: String,
    title: String,
    genre: String,
    rating: f64,
    /// Running time in minutes
    duration: i32,
    details: MediaDetails,
}

impl MediaRecord {
    /// Build a record, rejecting ratings outside `0.0..=10.0`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        duration: i32,
        details: MediaDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
            rating: validate_rating(rating)?,
            duration,
            details,
        })
    }

    pub fn movie(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        duration: i32,
        director: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let details = MediaDetails::Movie {
            director: director.into(),
        };
        Self::new(id, title, genre, rating, duration, details)
    }

    pub fn series(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        duration: i32,
        season_count: i32,
    ) -> Result<Self, ValidationError> {
        Self::new(id, title, genre, rating, duration, MediaDetails::Series { season_count })
    }

    pub fn documentary(
        id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        duration: i32,
        subject: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let details = MediaDetails::Documentary {
            subject: subject.into(),
        };
        Self::new(id, title, genre, rating, duration, details)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn details(&self) -> &MediaDetails {
        &self.details
    }

    pub fn kind(&self) -> MediaKind {
        self.details.kind()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_duration(&mut self, duration: i32) {
        self.duration = duration;
    }

    /// Change the rating; the old value is kept if the new one is invalid.
    pub fn set_rating(&mut self, rating: f64) -> Result<(), ValidationError> {
        self.rating = validate_rating(rating)?;
        Ok(())
    }

    /// The seventh field of a record line: director, season count or subject.
    pub fn extra_field(&self) -> String {
        match &self.details {
            MediaDetails::Movie { director } => director.clone(),
            MediaDetails::Series { season_count } => season_count.to_string(),
            MediaDetails::Documentary { subject } => subject.clone(),
        }
    }

    /// Full human-readable description, including the kind-specific field.
    ///
    /// Example: `Inception [ID: M1, Genre: Sci-Fi, Rating: 8.8, Duration: 148 min], Director: Christopher Nolan`
    pub fn display_details(&self) -> String {
        match &self.details {
            MediaDetails::Movie { director } => format!("{self}, Director: {director}"),
            MediaDetails::Series { season_count } => format!("{self}, Seasons: {season_count}"),
            MediaDetails::Documentary { subject } => format!("{self}, Subject: {subject}"),
        }
    }

    /// Message shown when the record is played.
    pub fn play(&self) -> String {
        match self.kind() {
            MediaKind::Movie => format!("Playing movie: {}", self.title),
            MediaKind::Series => format!("Playing series: {}", self.title),
            MediaKind::Documentary => format!("Playing documentary: {}", self.title),
        }
    }

    /// Natural order: plain lexicographic comparison of titles.
    pub fn cmp_by_title(&self, other: &MediaRecord) -> Ordering {
        self.title.cmp(&other.title)
    }
}

/// Short summary without the kind-specific field.
impl fmt::Display for MediaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ID: {}, Genre: {}, Rating: {:.1}, Duration: {} min]",
            self.title, self.id, self.genre, self.rating, self.duration
        )
    }
}

impl PartialEq for MediaRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind() == other.kind()
    }
}

impl Eq for MediaRecord {}

impl Hash for MediaRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_rating(rating: f64) -> Result<f64, ValidationError> {
    // NaN fails the range check too
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}
