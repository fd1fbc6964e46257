//! Error types for the profile crate.

use std::path::PathBuf;
use thiserror::Error;

/// Writing a report failed. Nothing is left at `path` when this is returned.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to export to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reading or writing a `userdata_<username>.txt` file failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not save user data to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read user data from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
