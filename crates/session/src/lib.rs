//! # Session Crate
//!
//! Application state for one run: settings, the catalog, the recommendation
//! engine and the signed-in user.
//!
//! ## Example Usage
//!
//! ```ignore
//! use session::{Session, Settings, StartOutcome};
//!
//! let settings = Settings::load(None)?;
//! let (mut session, outcome) = Session::start(settings, "alice");
//! session.load_catalog(None)?;
//!
//! for message in session.watch("inception") {
//!     println!("{message}");
//! }
//! let recommendations = session.recommendations(session.default_filters());
//! session.logout();
//! ```

pub mod error;
pub mod session;
pub mod settings;

pub use error::{SessionError, SettingsError};
pub use session::{Session, SessionStatistics, StartOutcome};
pub use settings::{DEFAULT_CONFIG_FILE, Settings};
