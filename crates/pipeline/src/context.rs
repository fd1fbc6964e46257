//! Build a UserContext from a user's watch history
//!
//! The context is gathered once per recommendation request so filters can
//! answer "already watched?" and "liked genre?" without rescanning history.

use profile::User;
use std::collections::HashSet;

/// What the filters need to know about the user.
#[derive(Debug, Clone, Default)]
pub struct UserContext {
    pub user_id: String,
    /// Ids of every watched item
    pub watched_ids: HashSet<String>,
    /// Distinct watched genres in order of first appearance
    pub watched_genres: Vec<String>,
}

impl UserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// True when the user has not watched anything yet
    pub fn is_cold_start(&self) -> bool {
        self.watched_ids.is_empty()
    }

    /// Exact, case-sensitive genre membership
    pub fn has_watched_genre(&self, genre: &str) -> bool {
        self.watched_genres.iter().any(|g| g == genre)
    }
}

/// Collect watched ids and genres from the user's history.
pub fn build_user_context(user: &User) -> UserContext {
    let mut context = UserContext::new(user.user_id());

    for item in user.watch_history() {
        context.watched_ids.insert(item.id().to_string());
        if !context.has_watched_genre(item.genre()) {
            context.watched_genres.push(item.genre().to_string());
        }
    }

    context
}
