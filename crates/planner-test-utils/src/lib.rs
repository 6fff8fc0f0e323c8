//! Shared test utilities for planner integration tests.
//!
//! Provides canned strategy inputs, a store that always fails, a temporary
//! on-disk store, and sinks that record what they were handed.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use planner_core::export::{ExportError, ExportSink, ExportTable};
use planner_core::input::{StrategyInput, Tone};
use planner_store::{FileStore, KeyValueStore, StoreError};

/// Fixed start date used across tests (a Monday).
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid date")
}

/// The yoga studio strategy: 3 posts/week, two pillars, one keyword.
pub fn yoga_input() -> StrategyInput {
    StrategyInput {
        niche: "Yoga".to_owned(),
        audience: "Beginners".to_owned(),
        tone: Tone::Friendly,
        posts_per_week: 3,
        pillars: "Education, Inspiration".to_owned(),
        brand_keywords: "mindful".to_owned(),
        offers: "Free class".to_owned(),
        ctas: "Book now".to_owned(),
    }
}

/// A fully filled-in input with several keywords and offers.
pub fn coffee_input() -> StrategyInput {
    StrategyInput {
        niche: "Specialty Coffee".to_owned(),
        audience: "Home Baristas".to_owned(),
        tone: Tone::Professional,
        posts_per_week: 5,
        pillars: "Brewing, Beans, Gear".to_owned(),
        brand_keywords: "pour over, latte art, #espresso".to_owned(),
        offers: "10% off beans, Free shipping".to_owned(),
        ctas: "Save for later, Tag a friend".to_owned(),
    }
}

/// Store whose reads and writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read {
            path: PathBuf::from(key),
            source: io::Error::other("store unavailable"),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            path: PathBuf::from(key),
            source: io::Error::other("store unavailable"),
        })
    }
}

/// A [`FileStore`] rooted in a fresh temporary directory.
///
/// Keep the returned [`TempDir`] alive for as long as the store is used.
pub fn temp_file_store() -> (FileStore, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    (FileStore::new(dir.path()), dir)
}

/// Export sink that keeps every table and filename it receives.
#[derive(Debug, Default)]
pub struct RecordingExportSink {
    pub exports: Vec<(String, ExportTable)>,
}

impl RecordingExportSink {
    pub fn last(&self) -> Option<&(String, ExportTable)> {
        self.exports.last()
    }
}

impl ExportSink for RecordingExportSink {
    fn export_table(&mut self, table: &ExportTable, filename: &str) -> Result<(), ExportError> {
        self.exports.push((filename.to_owned(), table.clone()));
        Ok(())
    }
}
