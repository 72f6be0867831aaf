//! File-backed storage slot

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::store::{self, WorkoutStore};
use crate::types::WorkoutCollection;
use crate::{JournalError, Result};

/// Default file name for the journal slot.
pub const DEFAULT_SLOT: &str = "workouts.json";

/// Durable slot backed by a single JSON file.
///
/// Construction does no I/O; the file appears on the first save. A missing
/// file on load is the normal first-run state.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given slot path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The slot path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkoutStore for FileStore {
    fn save(&mut self, workouts: &WorkoutCollection) -> Result<()> {
        let encoded = store::encode_collection(workouts)?;
        fs::write(&self.path, encoded).map_err(|err| {
            JournalError::storage_with_source(
                format!("writing {}", self.path.display()),
                Box::new(err),
            )
        })?;
        debug!(slot = %self.path.display(), records = workouts.len(), "saved journal");
        Ok(())
    }

    fn load(&mut self) -> Result<WorkoutCollection> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(slot = %self.path.display(), "no journal slot yet, starting empty");
                return Ok(WorkoutCollection::new());
            }
            Err(err) => {
                return Err(JournalError::storage_with_source(
                    format!("reading {}", self.path.display()),
                    Box::new(err),
                ));
            }
        };

        let workouts = store::decode_collection(&raw)?;
        info!(slot = %self.path.display(), records = workouts.len(), "loaded journal");
        Ok(workouts)
    }
}
