//! # Catalog Crate
//!
//! Media records and the in-memory catalog they live in.
//!
//! ## Main Components
//!
//! - **types**: `MediaRecord`, its `MediaKind` discriminant and per-kind `MediaDetails`
//! - **parser**: the `Type,ID,Title,Genre,Rating,Duration,Extra` line format
//! - **catalog**: `MediaCatalog` (load, search, genre filter, sort)
//! - **error**: validation and load errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MediaCatalog;
//!
//! let mut catalog = MediaCatalog::new();
//! catalog.load_from_file("media_data.txt")?;
//!
//! for media in catalog.search_by_title("star") {
//!     println!("{}", media.display_details());
//! }
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::MediaCatalog;
pub use error::{InvalidMediaDataError, NumberFormatError, RecordParseError, Result, ValidationError};
pub use types::{MAX_RATING, MIN_RATING, MediaDetails, MediaKind, MediaRecord};
