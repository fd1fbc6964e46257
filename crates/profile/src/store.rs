//! Persistence of users to `userdata_<username>.txt`.
//!
//! File layout (kept byte-compatible with existing data files):
//!
//! ```text
//! USER_DATA
//! Username:<username>
//! UserId:<userId>
//! WatchHistory:
//! <Type>,<id>,<title>,<genre>,<rating>,<duration>,<extra>
//! ...
//! ```
//!
//! Loading is best-effort: a history line that does not parse is logged and
//! skipped, the rest of the file is still restored.

use crate::atomic::write_atomically;
use crate::error::StoreError;
use crate::user::User;
use catalog::parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// First line of every user data file
pub const USER_DATA_HEADER: &str = "USER_DATA";

const USERNAME_PREFIX: &str = "Username:";
const USER_ID_PREFIX: &str = "UserId:";
const HISTORY_MARKER: &str = "WatchHistory:";

/// Directory holding the per-user data files.
#[derive(Debug, Clone)]
pub struct UserStore {
    dir: PathBuf,
}

impl UserStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the data file for `username`
    pub fn path_for(&self, username: &str) -> PathBuf {
        self.dir.join(format!("userdata_{username}.txt"))
    }

    /// Write the user's data file, replacing any previous one.
    pub fn save(&self, user: &User) -> Result<PathBuf, StoreError> {
        let path = self.path_for(user.username());
        write_atomically(&path, &render_user_data(user)).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(
            "Saved {} watch history entries for {} to {}",
            user.watch_history().len(),
            user.username(),
            path.display()
        );
        Ok(path)
    }

    /// Restore a previously saved user.
    ///
    /// Returns `None` when there is no usable saved user: the file is missing,
    /// unreadable, does not start with `USER_DATA`, or lacks the username or id.
    pub fn load_user_data(&self, username: &str) -> Option<User> {
        let path = self.path_for(username);
        let content = match parser::read_text_lossy(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(source) => {
                warn!("{}", StoreError::Read { path, source });
                return None;
            }
        };

        let user = parse_user_data(&content, &path.display().to_string())?;
        info!(
            "Restored user {} ({}) with {} watch history entries",
            user.username(),
            user.user_id(),
            user.watch_history().len()
        );
        Some(user)
    }
}

impl User {
    /// Persist the watch history on the way out.
    ///
    /// A failed save is logged as a warning and never propagated; the return
    /// value only says whether the data made it to disk.
    pub fn logout(&self, store: &UserStore) -> bool {
        match store.save(self) {
            Ok(_) => true,
            Err(e) => {
                warn!("Could not save watch history: {}", e);
                false
            }
        }
    }
}

/// Render the full contents of a user data file.
pub fn render_user_data(user: &User) -> String {
    let mut out = String::new();
    out.push_str(USER_DATA_HEADER);
    out.push('\n');
    out.push_str(&format!("{USERNAME_PREFIX}{}\n", user.username()));
    out.push_str(&format!("{USER_ID_PREFIX}{}\n", user.user_id()));
    out.push_str(HISTORY_MARKER);
    out.push('\n');

    for item in user.watch_history() {
        out.push_str(&parser::to_record_line(item));
        out.push('\n');
    }
    out
}

/// Parse the contents of a user data file. `source` only labels log output.
pub fn parse_user_data(content: &str, source: &str) -> Option<User> {
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, USER_DATA_HEADER)) => {}
        _ => {
            debug!("{} is not a user data file", source);
            return None;
        }
    }

    let mut username = None;
    let mut user_id = None;
    let mut history = Vec::new();

    while let Some((_, line)) = lines.next() {
        if let Some(rest) = line.strip_prefix(USERNAME_PREFIX) {
            username = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(USER_ID_PREFIX) {
            user_id = Some(rest.to_string());
        } else if line == HISTORY_MARKER {
            // Everything after the marker is history
            for (idx, entry) in lines.by_ref() {
                if entry.trim().is_empty() {
                    continue;
                }
                match parser::parse_record_line(entry) {
                    Ok(record) => history.push(record),
                    Err(e) => warn!(
                        "Skipping invalid watch history entry at {}:{}: {} ({})",
                        source,
                        idx + 1,
                        entry,
                        e
                    ),
                }
            }
        }
    }

    match (user_id, username) {
        (Some(user_id), Some(username)) => Some(User::restore(user_id, username, history)),
        _ => {
            debug!("{} is missing the username or user id", source);
            None
        }
    }
}
