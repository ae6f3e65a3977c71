use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};

/// Single writer guarantee for one output artifact.
///
/// Held on a sidecar `<artifact>.lock` file so the artifact itself can be
/// replaced by rename while the lock is held. The sidecar is left behind on drop.
pub struct FileLock {
    pub file: File,
    pub path: PathBuf,
}

impl FileLock {
    pub fn lock_path(artifact: &Path) -> Result<PathBuf> {
        let name = artifact.file_name().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidArgument,
                format!("output path {} has no file name", artifact.display()),
            )
        })?;

        let mut lock_name = name.to_os_string();
        lock_name.push(".lock");
        Ok(artifact.with_file_name(lock_name))
    }

    pub fn acquire(artifact: &Path) -> Result<Self> {
        let lock_path = Self::lock_path(artifact)?;

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| Error::output_unwritable(&lock_path, e))?;

        // Platform-specific locking
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            use libc::{flock, LOCK_EX, LOCK_NB};

            let fd = file.as_raw_fd();

            unsafe {
                if flock(fd, LOCK_EX | LOCK_NB) != 0 {
                    return Err(Error {
                        kind: ErrorKind::Locked,
                        context: format!(
                            "another run holds {}",
                            lock_path.display()
                        ),
                    })
                }
            }
        }

        debug!(lock = %lock_path.display(), "output lock acquired");
        Ok(FileLock { file, path: lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            use libc::{flock, LOCK_UN};

            let fd = self.file.as_raw_fd();
            unsafe {
                flock(fd, LOCK_UN);
            }
        }
    }
}
