//! Write-then-rename file output.
//!
//! Content goes to a temporary file next to the target, which is renamed over
//! the target only once everything is flushed. A failure at any step drops the
//! temporary file, so a half-written target never appears.
//!
//! The result has the permissions a plain write would leave: an existing
//! target keeps its mode, a new file gets `0o666` minus the umask.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

pub(crate) fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
