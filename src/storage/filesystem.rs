//! File system operations
//!
//! Writes a fetched payload into the download directory without ever
//! replacing an existing file.

use log::{debug, info};
use rand::Rng;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::naming::{Candidates, NamingPolicy};

/// Persist `payload` under the first free candidate name for `filename`.
///
/// Files are opened with `create_new`, so a name that appears between the
/// existence check and the create is skipped rather than overwritten.
pub fn persist_payload<R: Rng>(
    dir: &Path,
    filename: &str,
    payload: &[u8],
    policy: NamingPolicy,
    max_attempts: usize,
    rng: &mut R,
) -> Result<PathBuf, StorageError> {
    for name in Candidates::new(filename, policy, rng).take(max_attempts) {
        let path = dir.join(&name);
        if path.exists() {
            debug!("{} exists, trying another name", path.display());
            continue;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} appeared before create, trying another name", path.display());
                continue;
            }
            Err(e) => return Err(StorageError::CreateFailed(path, e)),
        };

        file.write_all(payload)
            .and_then(|_| file.flush())
            .map_err(|e| StorageError::WriteFailed(path.clone(), e))?;

        info!("Saved {} bytes to {}", payload.len(), path.display());
        return Ok(path);
    }

    Err(StorageError::NameSpaceExhausted {
        filename: filename.to_string(),
        attempts: max_attempts,
    })
}
