//! # Profile Crate
//!
//! Users, their watch history, and everything that touches disk for them.
//!
//! ## Components
//!
//! - **user**: `User` and the `UserIdGenerator` that names new users
//! - **store**: `UserStore`, reading and writing `userdata_<username>.txt`
//! - **export**: watch-history and recommendation reports
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{User, UserIdGenerator, UserStore};
//!
//! let store = UserStore::new(".");
//! let mut ids = UserIdGenerator::new();
//! let mut user = store
//!     .load_user_data("alice")
//!     .unwrap_or_else(|| User::new("alice", &mut ids));
//!
//! user.watch_media(record);
//! user.logout(&store);
//! ```

mod atomic;
pub mod error;
pub mod export;
pub mod store;
pub mod user;

// Re-export commonly used types
pub use error::{ExportError, StoreError};
pub use export::{export_recommendations, export_watch_history, format_watch_history};
pub use store::UserStore;
pub use user::{User, UserIdGenerator};
