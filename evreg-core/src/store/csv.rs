//! CSV-file-backed event store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::EventStore;
use crate::csv::{self, format_row, parse_event, split_records};
use crate::error::{EvRegError, EvRegResult};
use crate::event::Event;

/// Event store over a flat CSV file with a fixed header row.
///
/// Every mutation is a full read-modify-rewrite of the file — O(n) per
/// operation, no random access, no locking. Rows that no longer parse are
/// skipped with a warning rather than failing the whole read; a rewrite
/// drops them.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw data records (header excluded, blank lines dropped).
    fn read_data_records(&self) -> EvRegResult<Vec<String>> {
        self.ensure_initialized()?;
        let content = fs::read_to_string(&self.path)?;
        Ok(split_records(&content)
            .into_iter()
            .skip(1)
            .filter(|record| !record.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn rewrite(&self, events: &[Event]) -> EvRegResult<()> {
        let mut content = String::from(csv::HEADER);
        content.push('\n');
        for event in events {
            content.push_str(&format_row(event));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl EventStore for CsvStore {
    fn ensure_initialized(&self) -> EvRegResult<()> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };
        if needs_header {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&self.path, format!("{}\n", csv::HEADER))?;
        }
        Ok(())
    }

    fn list_all(&self) -> EvRegResult<Vec<Event>> {
        let mut events = Vec::new();
        for (i, record) in self.read_data_records()?.iter().enumerate() {
            match parse_event(record) {
                Ok(event) => events.push(event),
                // i is 0-based and the header occupies line 1
                Err(reason) => log::warn!("Skipping malformed row at line {}: {}", i + 2, reason),
            }
        }
        Ok(events)
    }

    fn append(&self, event: &Event) -> EvRegResult<()> {
        self.ensure_initialized()?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", format_row(event))?;
        Ok(())
    }

    fn replace_by_id(&self, id: Uuid, new_event: &Event) -> EvRegResult<()> {
        let mut events = self.list_all()?;
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EvRegError::NotFound(id))?;
        *slot = new_event.clone();
        self.rewrite(&events)
    }

    fn remove_by_id(&self, id: Uuid) -> EvRegResult<()> {
        let events = self.list_all()?;
        let before = events.len();
        let remaining: Vec<Event> = events.into_iter().filter(|event| event.id != id).collect();
        if remaining.len() == before {
            return Err(EvRegError::NotFound(id));
        }
        self.rewrite(&remaining)
    }

    fn count(&self) -> EvRegResult<usize> {
        Ok(self.read_data_records()?.len())
    }
}
