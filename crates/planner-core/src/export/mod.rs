//! Export and clipboard bridges.
//!
//! The plan is rendered to a six-column table (`date, format, pillar, idea,
//! caption, hashtags`) and handed to an [`ExportSink`]; a single caption plus
//! its hashtags is handed to a [`ClipboardSink`]. Both sinks are supplied by
//! the caller.

pub mod clipboard;

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::plan::PlanCollection;

pub use clipboard::{ClipboardSink, MemoryClipboard, copy_item, copy_text};

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILENAME: &str = "plan.csv";

/// Column headers, in order.
pub const EXPORT_HEADER: [&str; 6] = ["date", "format", "pillar", "idea", "caption", "hashtags"];

/// Errors from writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export to {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write export stream: {0}")]
    Stream(#[from] std::io::Error),
}

/// A plan flattened into rows of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_plan(plan: &PlanCollection) -> Self {
        let rows = plan
            .iter()
            .map(|item| {
                vec![
                    item.date.format("%Y-%m-%d").to_string(),
                    item.format.to_string(),
                    item.pillar.clone(),
                    item.idea.replace('\n', " "),
                    item.caption.as_deref().unwrap_or_default().replace('\n', " "),
                    item.hashtag_line(),
                ]
            })
            .collect();
        Self {
            header: EXPORT_HEADER.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV: bare header line, then one line per row with every
    /// field double-quoted and embedded quotes doubled. Lines are joined with
    /// `\n`; there is no trailing newline.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header.join(","));
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| quote(v)).collect();
            lines.push(cells.join(","));
        }
        lines.join("\n")
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Destination for an exported table.
pub trait ExportSink {
    fn export_table(&mut self, table: &ExportTable, filename: &str) -> Result<(), ExportError>;
}

/// Writes `<dir>/<filename>`.
#[derive(Debug, Clone)]
pub struct DirExportSink {
    dir: PathBuf,
}

impl DirExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirExportSink {
    fn export_table(&mut self, table: &ExportTable, filename: &str) -> Result<(), ExportError> {
        let path = self.dir.join(filename);
        std::fs::write(&path, table.to_csv()).map_err(|source| ExportError::File {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), rows = table.rows.len(), "exported plan");
        Ok(())
    }
}

/// Writes the CSV (plus a final newline) to any writer, ignoring the
/// filename. Used for stdout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn export_table(&mut self, table: &ExportTable, _filename: &str) -> Result<(), ExportError> {
        writeln!(self.writer, "{}", table.to_csv())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Export `plan` through `sink`. Returns `Ok(false)` without calling the
/// sink when the plan is empty.
pub fn export_plan(
    plan: &PlanCollection,
    sink: &mut dyn ExportSink,
    filename: &str,
) -> Result<bool, ExportError> {
    if plan.is_empty() {
        return Ok(false);
    }
    sink.export_table(&ExportTable::from_plan(plan), filename)?;
    Ok(true)
}
