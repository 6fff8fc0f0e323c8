//! `planner export` and `planner copy`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use planner_core::export::{ClipboardSink, DirExportSink, WriterSink};
use planner_core::Session;
use planner_store::KeyValueStore;

use crate::plan_cmds::resolve_item;

/// Where `planner export` writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` means stdout; no path means the configured default filename.
    pub fn parse(output: Option<&str>, default_filename: &str) -> Self {
        match output {
            Some("-") => Self::Stdout,
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::File(PathBuf::from(default_filename)),
        }
    }
}

pub fn run_export<S: KeyValueStore>(
    session: &Session<S>,
    target: &ExportTarget,
    out: &mut dyn Write,
) -> Result<()> {
    let count = session.plan().len();
    match target {
        ExportTarget::Stdout => {
            let mut sink = WriterSink::new(&mut *out);
            if !session.export(&mut sink, "-")? {
                eprintln!("Nothing to export: the plan is empty.");
            }
        }
        ExportTarget::File(path) => {
            let (dir, filename) = split_path(path)?;
            let mut sink = DirExportSink::new(dir);
            let exported = session
                .export(&mut sink, &filename)
                .with_context(|| format!("failed to export plan to {}", path.display()))?;
            if exported {
                writeln!(out, "Exported {count} posts to {}", path.display())?;
            } else {
                writeln!(out, "Nothing to export: the plan is empty.")?;
            }
        }
    }
    Ok(())
}

fn split_path(path: &Path) -> Result<(PathBuf, String)> {
    let filename = path
        .file_name()
        .with_context(|| format!("export path {} has no file name", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, filename))
}

/// Clipboard stand-in that prints the copied text.
pub struct WriterClipboard<'a> {
    out: &'a mut dyn Write,
    error: Option<io::Error>,
}

impl<'a> WriterClipboard<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ClipboardSink for WriterClipboard<'_> {
    fn write_text(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error.get_or_insert(e);
        }
    }
}

pub fn run_copy<S: KeyValueStore>(
    session: &Session<S>,
    id: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(item) = resolve_item(session, id)? else {
        eprintln!("Nothing to copy: no post selected.");
        return Ok(());
    };
    let mut clipboard = WriterClipboard::new(out);
    let copied = session.copy(Some(&item.id), &mut clipboard);
    clipboard.finish()?;
    if !copied {
        eprintln!(
            "Nothing to copy: {} has no caption yet. Run `planner enrich` first.",
            item.id
        );
    }
    Ok(())
}
