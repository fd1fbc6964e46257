//! The in-memory media catalog.
//!
//! `MediaCatalog` is an ordered list of records. Insertion order is preserved
//! until [`MediaCatalog::sort_media`] is called. Duplicate ids are allowed.
//! Queries are linear scans; catalogs are small.

use crate::error::Result;
use crate::parser;
use crate::types::MediaRecord;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct MediaCatalog {
    media: Vec<MediaRecord>,
}

impl MediaCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self { media: Vec::new() }
    }

    /// Load records from a catalog file and append them.
    ///
    /// All-or-nothing: every line is parsed before anything is added, so a
    /// failure leaves the catalog exactly as it was. Can be called repeatedly
    /// to merge several files.
    ///
    /// Returns the number of records added.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let records = parser::read_catalog_file(path)?;
        let added = records.len();

        self.media.extend(records);
        info!(
            "Loaded {} media records from {} ({} total)",
            added,
            path.display(),
            self.media.len()
        );
        Ok(added)
    }

    /// Append a record. No uniqueness check is made.
    pub fn add_media(&mut self, media: MediaRecord) {
        self.media.push(media);
    }

    /// Remove the first record equal to `media` (same id and kind).
    ///
    /// Returns whether anything was removed; removing an absent record is not
    /// an error.
    pub fn remove_media(&mut self, media: &MediaRecord) -> bool {
        match self.media.iter().position(|m| m == media) {
            Some(pos) => {
                self.media.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on titles, in catalog order.
    /// An empty query matches everything.
    pub fn search_by_title(&self, query: &str) -> Vec<&MediaRecord> {
        let query = query.to_lowercase();
        self.media
            .iter()
            .filter(|m| m.title().to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive exact match on genre.
    pub fn get_media_by_genre(&self, genre: &str) -> Vec<&MediaRecord> {
        let genre = genre.to_lowercase();
        self.media
            .iter()
            .filter(|m| m.genre().to_lowercase() == genre)
            .collect()
    }

    /// Sort in place by title (stable, byte-wise lexicographic).
    pub fn sort_media(&mut self) {
        self.media.sort_by(MediaRecord::cmp_by_title);
    }

    /// Display strings for every record, in catalog order
    pub fn display_all(&self) -> Vec<String> {
        self.media.iter().map(MediaRecord::display_details).collect()
    }

    pub fn get_all_media(&self) -> &[MediaRecord] {
        &self.media
    }

    /// First record with the given id
    pub fn get_by_id(&self, id: &str) -> Option<&MediaRecord> {
        self.media.iter().find(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }
}

impl FromIterator<MediaRecord> for MediaCatalog {
    fn from_iter<I: IntoIterator<Item = MediaRecord>>(iter: I) -> Self {
        Self {
            media: iter.into_iter().collect(),
        }
    }
}
