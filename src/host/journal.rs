//! Event journal
//!
//! Append-only JSON-lines record of every change the board reported.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::component::ChangeEvent;

use super::SessionResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub at: DateTime<Local>,
    #[serde(flatten)]
    pub event: ChangeEvent,
}

pub struct EventJournal {
    path: PathBuf,
    file: File,
}

impl EventJournal {
    pub fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&mut self, event: &ChangeEvent) -> SessionResult<()> {
        let entry = JournalEntry { at: Local::now(), event: event.clone() };
        let line = serde_json::to_string(&entry)?;
        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        Ok(())
    }
}

/// Read back every entry in a journal file
#[cfg(test)]
pub fn read_entries(path: impl AsRef<Path>) -> SessionResult<Vec<JournalEntry>> {
    use std::io::{BufRead, BufReader};

    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(serde_json::from_str(&line)?);
    }
    Ok(entries)
}
