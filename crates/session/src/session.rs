//! # Session
//!
//! Everything one run of the application holds: settings, the catalog, the
//! recommendation engine, the user store and the signed-in user.
//!
//! The front end only talks to this type; it never reaches into the catalog
//! or the store directly.

use crate::error::SessionError;
use crate::settings::Settings;
use catalog::{MediaCatalog, MediaRecord};
use pipeline::{
    RecommendationEngine, RecommendationFilters, analyze_user_genre_preferences, tally_genres,
};
use profile::{User, UserIdGenerator, UserStore};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How the user got into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Saved data was found and the watch history restored
    Restored,
    /// No usable saved data; a new user with a fresh id
    Created,
}

/// A snapshot for the statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatistics {
    pub user_summary: String,
    pub catalog_size: usize,
    pub total_recommendations: usize,
    /// Genre and count, most watched first
    pub genre_tally: Vec<(String, usize)>,
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current User: {}", self.user_summary)?;
        writeln!(f, "Total Media in Library: {}", self.catalog_size)?;
        write!(
            f,
            "Total Recommendations Generated: {}",
            self.total_recommendations
        )?;
        if !self.genre_tally.is_empty() {
            write!(f, "\n\nYour Genre Preferences:")?;
            for (genre, count) in &self.genre_tally {
                write!(f, "\n- {genre}: {count} items")?;
            }
        }
        Ok(())
    }
}

pub struct Session {
    settings: Settings,
    catalog: MediaCatalog,
    engine: RecommendationEngine,
    store: UserStore,
    user: User,
}

impl Session {
    /// Sign `username` in, restoring their saved history when there is one.
    pub fn start(settings: Settings, username: &str) -> (Self, StartOutcome) {
        let store = UserStore::new(settings.data_dir.clone());
        let mut ids = UserIdGenerator::new();

        let (user, outcome) = match store.load_user_data(username) {
            Some(user) => (user, StartOutcome::Restored),
            None => {
                let user = User::new(username, &mut ids);
                info!("Created new user {} ({})", user.username(), user.user_id());
                (user, StartOutcome::Created)
            }
        };

        let engine = RecommendationEngine::new().with_cold_start_limit(settings.cold_start_limit);
        let session = Self {
            settings,
            catalog: MediaCatalog::new(),
            engine,
            store,
            user,
        };
        (session, outcome)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Load a catalog file into the session, adding to what is already there.
    ///
    /// `None` loads `settings.catalog_path`. Returns the path that was loaded
    /// and how many records it added.
    pub fn load_catalog(&mut self, path: Option<&Path>) -> Result<(PathBuf, usize), SessionError> {
        let path = path.map_or_else(|| self.settings.catalog_path.clone(), Path::to_path_buf);
        let added = self.catalog.load_from_file(&path)?;
        Ok((path, added))
    }

    pub fn search(&self, query: &str) -> Vec<&MediaRecord> {
        self.catalog.search_by_title(query)
    }

    /// Play every title matching `title_query` and add each to the history.
    ///
    /// The user file is saved after each item. Returns the playback messages,
    /// empty when nothing matched.
    pub fn watch(&mut self, title_query: &str) -> Vec<String> {
        let matches: Vec<MediaRecord> = self
            .catalog
            .search_by_title(title_query)
            .into_iter()
            .cloned()
            .collect();

        let mut played = Vec::with_capacity(matches.len());
        for item in matches {
            played.push(item.play());
            self.user.watch_media(item);
            if !self.user.logout(&self.store) {
                warn!("Watch history for {} was not saved", self.user.username());
            }
        }
        played
    }

    /// Filters built from the configured defaults
    pub fn default_filters(&self) -> RecommendationFilters {
        RecommendationFilters::new(
            self.settings.default_min_rating,
            i32::try_from(self.settings.default_max_duration).unwrap_or(i32::MAX),
        )
    }

    pub fn recommendations(&mut self, filters: RecommendationFilters) -> Vec<MediaRecord> {
        self.engine
            .generate_recommendations(Some(&self.user), Some(&self.catalog), filters)
    }

    /// Write the watch-history report. Returns where it went.
    ///
    /// `None` writes `watchhistory_<userId>.txt` in `settings.export_dir`.
    pub fn export_watch_history(&self, path: Option<&Path>) -> Result<PathBuf, SessionError> {
        let path = self.export_path(path, "watchhistory");
        profile::export_watch_history(&self.user, &path)?;
        Ok(path)
    }

    /// Generate recommendations and write them as a report.
    ///
    /// `None` writes `recommendations_<userId>.txt` in `settings.export_dir`.
    /// Returns the path and the number of recommendations written.
    pub fn export_recommendations(
        &mut self,
        filters: RecommendationFilters,
        path: Option<&Path>,
    ) -> Result<(PathBuf, usize), SessionError> {
        let recommendations = self.recommendations(filters);
        let path = self.export_path(path, "recommendations");
        profile::export_recommendations(
            &self.user,
            &recommendations,
            &path,
            filters.min_rating,
            filters.max_duration,
        )?;
        Ok((path, recommendations.len()))
    }

    /// Default report location: `<export_dir>/<prefix>_<userId>.txt`
    pub fn default_export_path(&self, prefix: &str) -> PathBuf {
        self.settings
            .export_dir
            .join(format!("{}_{}.txt", prefix, self.user.user_id()))
    }

    fn export_path(&self, path: Option<&Path>, prefix: &str) -> PathBuf {
        path.map_or_else(|| self.default_export_path(prefix), Path::to_path_buf)
    }

    pub fn statistics(&self) -> SessionStatistics {
        let genres = analyze_user_genre_preferences(&self.user);
        SessionStatistics {
            user_summary: self.user.to_string(),
            catalog_size: self.catalog.len(),
            total_recommendations: self.engine.total_recommendations_generated(),
            genre_tally: tally_genres(&genres),
        }
    }

    /// Save the user's data. Returns whether it reached disk.
    pub fn logout(&self) -> bool {
        self.user.logout(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG: &str = "\
Movie,M001,Inception,Sci-Fi,8.8,148,Christopher Nolan
Movie,M002,Interstellar,Sci-Fi,8.6,169,Christopher Nolan
Series,S001,Breaking Bad,Crime,9.5,47,5
Documentary,D001,Cosmos,Sci-Fi,9.3,45,Astronomy
";

    fn settings_in(dir: &Path) -> Settings {
        let catalog_path = dir.join("media_data.txt");
        fs::write(&catalog_path, CATALOG).unwrap();
        Settings {
            catalog_path,
            data_dir: dir.to_path_buf(),
            export_dir: dir.to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_start_creates_then_restores() {
        let dir = tempfile::tempdir().unwrap();

        let (mut session, outcome) = Session::start(settings_in(dir.path()), "alice");
        assert_eq!(outcome, StartOutcome::Created);
        assert_eq!(session.user().user_id(), "User1");

        session.load_catalog(None).unwrap();
        session.watch("inception");
        assert!(session.logout());

        let (session, outcome) = Session::start(settings_in(dir.path()), "alice");
        assert_eq!(outcome, StartOutcome::Restored);
        assert_eq!(session.user().user_id(), "User1");
        assert_eq!(session.user().watch_history().len(), 1);
    }

    #[test]
    fn test_load_catalog_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = Session::start(settings_in(dir.path()), "bob");

        let (path, added) = session.load_catalog(None).unwrap();
        assert_eq!(path, dir.path().join("media_data.txt"));
        assert_eq!(added, 4);
        assert_eq!(session.catalog().len(), 4);
    }

    #[test]
    fn test_load_catalog_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = Session::start(settings_in(dir.path()), "bob");

        let missing = dir.path().join("missing.txt");
        let err = session.load_catalog(Some(&missing)).unwrap_err();
        assert!(matches!(err, SessionError::Catalog(_)));
        assert!(session.catalog().is_empty());
    }

    #[test]
    fn test_watch_plays_every_match_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = Session::start(settings_in(dir.path()), "carol");
        session.load_catalog(None).unwrap();

        let played = session.watch("in");
        assert_eq!(
            played,
            vec![
                "Playing movie: Inception",
                "Playing movie: Interstellar",
                "Playing series: Breaking Bad",
            ]
        );
        assert_eq!(session.user().watch_history().len(), 3);
        assert!(session.store().path_for("carol").exists());

        assert!(session.watch("nothing like this").is_empty());
        assert_eq!(session.user().watch_history().len(), 3);
    }

    #[test]
    fn test_recommendations_and_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = Session::start(settings_in(dir.path()), "dave");
        session.load_catalog(None).unwrap();
        session.watch("Inception");

        let recs = session.recommendations(session.default_filters());
        let ids: Vec<&str> = recs.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["D001", "M002"]);

        let stats = session.statistics();
        assert_eq!(stats.catalog_size, 4);
        assert_eq!(stats.total_recommendations, 2);
        assert_eq!(stats.genre_tally, vec![("Sci-Fi".to_string(), 1)]);
        assert_eq!(
            stats.user_summary,
            "User [ID: User1, Username: dave, Watched Items: 1]"
        );
        assert!(stats.to_string().contains("- Sci-Fi: 1 items"));
    }

    #[test]
    fn test_exports_default_to_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = Session::start(settings_in(dir.path()), "erin");
        session.load_catalog(None).unwrap();
        session.watch("Cosmos");

        let history = session.export_watch_history(None).unwrap();
        assert_eq!(history, dir.path().join("watchhistory_User1.txt"));
        assert!(history.exists());

        let filters = RecommendationFilters::new(0.0, 200);
        let (recs, count) = session.export_recommendations(filters, None).unwrap();
        assert_eq!(recs, dir.path().join("recommendations_User1.txt"));
        assert_eq!(count, 2);
        assert!(recs.exists());
    }

    #[test]
    fn test_export_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = Session::start(settings_in(dir.path()), "frank");

        let target = dir.path().join("mine.txt");
        let written = session.export_watch_history(Some(&target)).unwrap();
        assert_eq!(written, target);
        assert!(fs::read_to_string(&target).unwrap().contains("frank"));
    }

    #[test]
    fn test_failed_export_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = Session::start(settings_in(dir.path()), "gina");

        let target = dir.path().join("no_such_dir").join("history.txt");
        let err = session.export_watch_history(Some(&target)).unwrap_err();
        assert!(matches!(err, SessionError::Export(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_cold_start_limit_comes_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            cold_start_limit: 2,
            ..settings_in(dir.path())
        };
        let (mut session, _) = Session::start(settings, "hank");
        session.load_catalog(None).unwrap();

        let recs = session.recommendations(session.default_filters());
        let ids: Vec<&str> = recs.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["S001", "D001"]);
        assert_eq!(session.statistics().total_recommendations, 0);
    }
}
