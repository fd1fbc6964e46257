//! Human-readable reports of a user's watch history and recommendations.
//!
//! Rendering is kept apart from writing so the text can be checked without
//! touching the filesystem. Writes go through [`write_atomically`], so a failed
//! export never leaves a partial report behind.

use crate::atomic::write_atomically;
use crate::error::ExportError;
use crate::user::User;
use catalog::MediaRecord;
use catalog::parser::format_rating;
use chrono::{Local, NaiveDateTime};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 51;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the watch-history report for `user` to `path`.
pub fn export_watch_history(user: &User, path: &Path) -> Result<(), ExportError> {
    let report = render_watch_history(user, Local::now().naive_local());
    write_report(path, &report)?;
    info!(
        "Exported {} watch history entries for {} to {}",
        user.watch_history().len(),
        user.username(),
        path.display()
    );
    Ok(())
}

/// Write a recommendations report, recording the filters that produced it.
pub fn export_recommendations(
    user: &User,
    recommendations: &[MediaRecord],
    path: &Path,
    min_rating: f64,
    max_duration: i32,
) -> Result<(), ExportError> {
    let report = render_recommendations(
        user,
        recommendations,
        min_rating,
        max_duration,
        Local::now().naive_local(),
    );
    write_report(path, &report)?;
    info!(
        "Exported {} recommendations for {} to {}",
        recommendations.len(),
        user.username(),
        path.display()
    );
    Ok(())
}

pub fn render_watch_history(user: &User, exported_at: NaiveDateTime) -> String {
    let history = user.watch_history();
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Watch History for: {} (ID: {})", user.username(), user.user_id());
    let _ = writeln!(out, "Export Date: {}", exported_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "Total Items Watched: {}", history.len());
    let _ = writeln!(out, "{rule}");

    if history.is_empty() {
        let _ = writeln!(out, "No items in watch history.");
    } else {
        write_numbered(&mut out, history);
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "End of Watch History");
    out
}

pub fn render_recommendations(
    user: &User,
    recommendations: &[MediaRecord],
    min_rating: f64,
    max_duration: i32,
    generated_at: NaiveDateTime,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Personalized Recommendations for: {} (ID: {})",
        user.username(),
        user.user_id()
    );
    let _ = writeln!(out, "Generated Date: {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(
        out,
        "Filter Criteria - Min Rating: {}, Max Duration: {} mins",
        format_rating(min_rating),
        max_duration
    );
    let _ = writeln!(out, "Total Recommendations: {}", recommendations.len());
    let _ = writeln!(out, "{rule}");

    if recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations found matching your criteria.");
        let _ = writeln!(
            out,
            "Try adjusting your filters or watching more content to improve recommendations."
        );
    } else {
        let _ = writeln!(out, "Based on your viewing history, we recommend:");
        let _ = writeln!(out);
        write_numbered(&mut out, recommendations);
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "End of Recommendations");
    out
}

/// Console view of the watch history.
pub fn format_watch_history(user: &User) -> String {
    let history = user.watch_history();
    if history.is_empty() {
        return format!("{}'s watch history is empty.", user.username());
    }

    let mut out = format!("{}'s Watch History:", user.username());
    for item in history {
        let _ = write!(out, "\n- {}", item.display_details());
    }
    out
}

fn write_numbered(out: &mut String, items: &[MediaRecord]) {
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item.display_details());
    }
}

fn write_report(path: &Path, report: &str) -> Result<(), ExportError> {
    write_atomically(path, report).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
