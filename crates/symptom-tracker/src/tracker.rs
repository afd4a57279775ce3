//! The entry form and the in-memory record history it feeds.
//!
//! A [`Tracker`] is mounted once: it loads the stored history, then every
//! [`Tracker::save`] runs compute, persist, update, acknowledge in that order.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::labels::{Labels, Language};
use crate::record::{merge_record, Level, SymptomRecord};
use crate::storage::KeyValueStore;
use crate::store::RecordStore;
use crate::view::{project, HistoryView};

/// Today's date in UTC.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Transient input for the next record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryForm {
    date: NaiveDate,
    level: Level,
}

impl EntryForm {
    /// A form preset to `date` and `level`.
    #[must_use]
    pub fn new(date: NaiveDate, level: Level) -> Self {
        Self { date, level }
    }

    /// A fresh form: today's UTC date and the default level.
    #[must_use]
    pub fn today() -> Self {
        Self::new(today_utc(), Level::DEFAULT)
    }

    /// Candidate date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Candidate level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Replace the candidate date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Replace the candidate level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Move the level like a slider: out-of-range input sticks to the nearest
    /// bound. Returns the level actually set.
    pub fn set_level_clamped(&mut self, value: i64) -> Level {
        self.level = Level::clamped(value);
        self.level
    }

    /// The record the form currently describes.
    #[must_use]
    pub fn record(&self) -> SymptomRecord {
        SymptomRecord::new(self.date, self.level)
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::today()
    }
}

/// Acknowledgment returned by a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAck {
    /// The record that was added.
    pub record: SymptomRecord,
    /// History length after the save.
    pub total: usize,
    /// Message to show the user.
    pub message: &'static str,
}

/// In-memory history plus the entry form, backed by a [`RecordStore`].
#[derive(Debug)]
pub struct Tracker<S> {
    store: RecordStore<S>,
    records: Vec<SymptomRecord>,
    form: EntryForm,
    labels: &'static Labels,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load the stored history and attach `form`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored history cannot be read or decoded.
    pub fn mount(store: RecordStore<S>, form: EntryForm) -> Result<Self> {
        let records = store.load()?;
        debug!(count = records.len(), "Mounted tracker");
        Ok(Self {
            store,
            records,
            form,
            labels: Labels::for_language(Language::default()),
        })
    }

    /// Use `labels` for acknowledgments and views.
    #[must_use]
    pub fn with_labels(mut self, labels: &'static Labels) -> Self {
        self.labels = labels;
        self
    }

    /// The in-memory history, ascending by date.
    #[must_use]
    pub fn records(&self) -> &[SymptomRecord] {
        &self.records
    }

    /// The entry form.
    #[must_use]
    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// The entry form, for editing.
    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    /// The labels in use.
    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// The backing record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Add the form's record to the history.
    ///
    /// The merged list is persisted before in-memory state changes, so a
    /// failed write leaves the tracker exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn save(&mut self) -> Result<SaveAck> {
        let record = self.form.record();
        let updated = merge_record(&self.records, record);

        self.store.save(&updated)?;
        self.records = updated;

        info!(
            date = %record.date,
            level = record.level.get(),
            total = self.records.len(),
            "Saved symptom record"
        );

        Ok(SaveAck {
            record,
            total: self.records.len(),
            message: self.labels.saved,
        })
    }

    /// Project the current history into list and chart views.
    #[must_use]
    pub fn view(&self) -> HistoryView {
        project(&self.records, self.labels)
    }
}
