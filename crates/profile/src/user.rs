//! Users and their watch history.

use catalog::MediaRecord;
use std::fmt;

/// Hands out user ids of the form `User1`, `User2`, ...
///
/// Each session owns its generator, so tests can start from a clean counter.
#[derive(Debug, Clone)]
pub struct UserIdGenerator {
    next: u32,
}

impl UserIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("User{}", self.next);
        self.next += 1;
        id
    }
}

impl Default for UserIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A user and the media they have watched, oldest first.
///
/// Users compare equal when their ids match.
#[derive(Debug, Clone)]
pub struct User {
    user_id: String,
    username: String,
    watch_history: Vec<MediaRecord>,
}

impl User {
    /// Create a new user with a freshly generated id and no history.
    pub fn new(username: impl Into<String>, ids: &mut UserIdGenerator) -> Self {
        Self {
            user_id: ids.next_id(),
            username: username.into(),
            watch_history: Vec::new(),
        }
    }

    /// Rebuild a user from stored data.
    pub fn restore(
        user_id: impl Into<String>,
        username: impl Into<String>,
        watch_history: Vec<MediaRecord>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            watch_history,
        }
    }

    /// Append to the watch history. Rewatches are recorded again.
    pub fn watch_media(&mut self, item: MediaRecord) {
        self.watch_history.push(item);
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Read-only view of the history in watch order
    pub fn watch_history(&self) -> &[MediaRecord] {
        &self.watch_history
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User [ID: {}, Username: {}, Watched Items: {}]",
            self.user_id,
            self.username,
            self.watch_history.len()
        )
    }
}
