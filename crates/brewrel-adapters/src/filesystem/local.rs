//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

use brewrel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BrewrelError, BrewrelResult},
};

/// Mode given to persisted files on Unix.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Production filesystem implementation using `std::fs`.
///
/// Writes go to a temporary file next to the destination which is then
/// renamed over it, so readers see the old content or the new content and
/// never a partial file.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn write_atomic(&self, path: &Path, content: &str) -> BrewrelResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.is_dir() {
            return Err(map_io_error(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                "write file",
            ));
        }

        let mut temp_file =
            NamedTempFile::new_in(dir).map_err(|e| map_io_error(path, e, "create temp file"))?;

        debug!(
            "Atomically writing {} bytes to {} via temp file {}",
            content.len(),
            path.display(),
            temp_file.path().display()
        );

        // The temp file is deleted on drop if any step below fails.
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        temp_file
            .flush()
            .map_err(|e| map_io_error(path, e, "flush file"))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| map_io_error(path, e, "sync file"))?;

        temp_file.persist(path).map_err(|e| {
            error!(
                "Failed to persist temporary file over {}: {}",
                path.display(),
                e.error
            );
            map_io_error(path, e.error, "replace file")
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(FILE_MODE);
            if let Err(e) = std::fs::set_permissions(path, perms) {
                warn!("Failed to set permissions on {}: {}", path.display(), e);
            }
        }

        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BrewrelError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
