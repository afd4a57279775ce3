//! The record store: the full symptom history under one fixed key.
//!
//! The value is a compact JSON array of `{"date": "YYYY-MM-DD", "level": n}`
//! objects. Every save overwrites the whole array.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::SymptomRecord;
use crate::storage::KeyValueStore;

/// Key the record list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "symptomRecords";

/// Reads and writes the record list through a [`KeyValueStore`].
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Wrap `backend`, storing records under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Wrap `backend`, storing records under `key`.
    #[must_use]
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying key/value store.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every stored record.
    ///
    /// A missing key is an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the stored value is not a valid record
    /// list, or a storage error if the backend cannot be read.
    pub fn load(&self) -> Result<Vec<SymptomRecord>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            debug!(key = %self.key, "No stored records");
            return Ok(Vec::new());
        };
        let records = decode_records(&self.key, &raw)?;
        debug!(key = %self.key, count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Overwrite the stored list with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&mut self, records: &[SymptomRecord]) -> Result<()> {
        let raw = encode_records(records)?;
        self.backend.set(&self.key, &raw)?;
        info!(key = %self.key, count = records.len(), "Saved records");
        Ok(())
    }

    /// The raw stored value, exactly as persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn raw(&self) -> Result<Option<String>> {
        self.backend.get(&self.key)
    }
}

/// Serialize a record list to its stored form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_records(records: &[SymptomRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Decode the stored form of a record list.
///
/// # Errors
///
/// Returns [`Error::Decode`] naming `key` if `raw` is not a JSON array of
/// valid records.
pub fn decode_records(key: &str, raw: &str) -> Result<Vec<SymptomRecord>> {
    serde_json::from_str(raw).map_err(|source| Error::decode(key, source))
}
