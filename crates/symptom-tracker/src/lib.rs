//! `symptom-tracker` - A personal log of daily symptom severity
//!
//! This library provides the record model, the key/value persistence layer,
//! the entry form and history state, and the list and chart views used by
//! the `symtrack` command-line tool.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod logging;
pub mod record;
pub mod render;
pub mod storage;
pub mod store;
pub mod tracker;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use labels::{Labels, Language};
pub use logging::init_logging;
pub use record::{Level, SymptomRecord};
pub use storage::{KeyValueStore, MemoryStore, Storage, StorageStats};
pub use store::RecordStore;
pub use tracker::{today_utc, EntryForm, SaveAck, Tracker};
pub use view::{project, ChartView, HistoryView, ListView};
