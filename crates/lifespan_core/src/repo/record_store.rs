//! Record store contract and flat-file JSON implementation.
//!
//! # Responsibility
//! - Load and save the full person record list.
//! - Keep file format details inside the persistence boundary.
//!
//! # Invariants
//! - A missing or blank store file loads as an empty list.
//! - Saves replace the whole file with an indented JSON array.
//! - Record order on disk is insertion order.

use crate::model::person::RawPersonRecord;
use log::{error, info};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record load/save.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "record store I/O failed at `{}`: {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "record store `{}` is not a JSON record list: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode records: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Storage capability injected into the timeline service.
pub trait RecordStore {
    fn load(&self) -> StoreResult<Vec<RawPersonRecord>>;
    fn save(&self, records: &[RawPersonRecord]) -> StoreResult<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load(&self) -> StoreResult<Vec<RawPersonRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[RawPersonRecord]) -> StoreResult<()> {
        (**self).save(records)
    }
}

/// Single JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<RawPersonRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=repo status=ok source=absent records=0");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        if content.trim().is_empty() {
            info!("event=store_load module=repo status=ok source=blank records=0");
            return Ok(Vec::new());
        }

        let records: Vec<RawPersonRecord> =
            serde_json::from_str(&content).map_err(|source| {
                error!(
                    "event=store_load module=repo status=error error_code=corrupt_store error={}",
                    source
                );
                StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }
            })?;

        info!(
            "event=store_load module=repo status=ok source=file records={}",
            records.len()
        );
        Ok(records)
    }

    fn save(&self, records: &[RawPersonRecord]) -> StoreResult<()> {
        let started_at = Instant::now();
        let encoded = serde_json::to_string_pretty(records).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, encoded).map_err(|err| {
            error!(
                "event=store_save module=repo status=error error_code=write_failed error={}",
                err
            );
            self.io_error(err)
        })?;

        info!(
            "event=store_save module=repo status=ok records={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RefCell<Vec<RawPersonRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<RawPersonRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    pub fn snapshot(&self) -> Vec<RawPersonRecord> {
        self.records.borrow().clone()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> StoreResult<Vec<RawPersonRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[RawPersonRecord]) -> StoreResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
