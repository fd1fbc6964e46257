//! Parser for the line-oriented media record format.
//!
//! Format (catalog files and the watch-history section of user files):
//! - `Type,ID,Title,Genre,Rating,Duration,Extra`
//! - `Type` is one of `Movie`, `Series`, `Documentary` (exact match)
//! - `Extra` is the director, season count or subject respectively
//!
//! Fields are trimmed before use. There is no escaping, so titles cannot
//! contain commas.

use crate::error::{InvalidMediaDataError, NumberFormatError, RecordParseError, Result};
use crate::types::*;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Fields every line must have before the type is even looked at
pub const MIN_FIELDS: usize = 6;

/// Fields a complete record line has
pub const RECORD_FIELDS: usize = 7;

/// Read and parse a whole catalog file.
///
/// Fail-fast: the first bad line aborts with its line number, and nothing
/// parsed so far is returned.
pub fn read_catalog_file(path: &Path) -> Result<Vec<MediaRecord>> {
    let file = path.display().to_string();
    let content = read_text_lossy(path).map_err(|source| InvalidMediaDataError::Io {
        path: file.clone(),
        source,
    })?;

    parse_catalog(&content, &file)
}

/// Read a text file, replacing byte sequences that are not valid UTF-8 with
/// U+FFFD instead of failing.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, undecodable bytes were replaced",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Parse catalog content. `file` is only used to label errors.
pub fn parse_catalog(content: &str, file: &str) -> Result<Vec<MediaRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue; // Skip empty lines
        }

        let record = parse_record_line(line).map_err(|source| InvalidMediaDataError::Line {
            file: file.to_string(),
            line: line_no,
            source,
        })?;
        records.push(record);
    }

    debug!("Parsed {} records from {}", records.len(), file);
    Ok(records)
}

/// Parse one `Type,ID,Title,Genre,Rating,Duration,Extra` line.
///
/// Checks run in a fixed order: field count, type tag, per-type field count,
/// numbers, rating range. Fields past the seventh are ignored, and so are
/// empty trailing fields: `Movie,M1,Heat,Crime,8.3,170,` has six fields.
pub fn parse_record_line(line: &str) -> std::result::Result<MediaRecord, RecordParseError> {
    let mut raw: Vec<&str> = line.split(',').collect();
    while raw.last().is_some_and(|field| field.is_empty()) {
        raw.pop();
    }
    let fields: Vec<&str> = raw.into_iter().map(str::trim).collect();

    if fields.len() < MIN_FIELDS {
        return Err(RecordParseError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let kind = parse_media_kind(fields[0])?;
    if fields.len() < RECORD_FIELDS {
        return Err(RecordParseError::MissingExtraField {
            kind,
            expected: RECORD_FIELDS,
        });
    }

    let id = fields[1];
    let title = fields[2];
    let genre = fields[3];
    let rating: f64 = parse_number("rating", fields[4])?;
    let duration: i32 = parse_number("duration", fields[5])?;

    let details = match kind {
        MediaKind::Movie => MediaDetails::Movie {
            director: fields[6].to_string(),
        },
        MediaKind::Series => MediaDetails::Series {
            season_count: parse_number("season count", fields[6])?,
        },
        MediaKind::Documentary => MediaDetails::Documentary {
            subject: fields[6].to_string(),
        },
    };

    Ok(MediaRecord::new(id, title, genre, rating, duration, details)?)
}

/// Render a record back into its line form (inverse of [`parse_record_line`]).
pub fn to_record_line(record: &MediaRecord) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        record.kind(),
        record.id(),
        record.title(),
        record.genre(),
        format_rating(record.rating()),
        record.duration(),
        record.extra_field()
    )
}

/// Format a rating the way existing data files store it: whole numbers keep
/// one decimal (`8.0`), anything else uses the shortest exact form (`8.25`).
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// Parse a media type tag
///
/// Example: "Movie" -> Ok(MediaKind::Movie)
///          "movie" -> Err(UnknownMediaType)
pub fn parse_media_kind(s: &str) -> std::result::Result<MediaKind, RecordParseError> {
    match s {
        "Movie" => Ok(MediaKind::Movie),
        "Series" => Ok(MediaKind::Series),
        "Documentary" => Ok(MediaKind::Documentary),
        _ => Err(RecordParseError::UnknownMediaType(s.to_string())),
    }
}

fn parse_number<T>(field: &'static str, value: &str) -> std::result::Result<T, RecordParseError>
where
    T: std::str::FromStr,
    T::Err: Into<NumberFormatError>,
{
    value.parse().map_err(|e: T::Err| RecordParseError::InvalidNumber {
        field,
        value: value.to_string(),
        source: e.into(),
    })
}
