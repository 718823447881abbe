use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{Config, MAX_HISTORY_LIMIT};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to create history dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write history {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Previously submitted commands, most recent first. Never holds duplicates
/// and never grows past `limit`, which itself never exceeds 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<String>,
    limit: usize,
}

impl HistoryList {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.clamp(1, MAX_HISTORY_LIMIT),
        }
    }

    /// Builds a list the way a loaded file is read: entries are trimmed,
    /// blanks dropped, and only the first occurrence of a repeat is kept.
    pub fn from_entries<I, S>(entries: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(limit);
        let mut seen = HashSet::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() || !seen.insert(entry.to_string()) {
                continue;
            }
            list.entries.push(entry.to_string());
        }
        list.entries.truncate(list.limit);
        list
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|existing| existing == entry)
    }

    /// Moves `entry` to the front, dropping the oldest entries past the cap.
    /// Returns false for a blank entry, which is not recorded.
    pub fn push_front(&mut self, entry: &str) -> bool {
        let entry = entry.trim();
        if entry.is_empty() {
            return false;
        }

        self.entries.retain(|existing| existing != entry);
        self.entries.insert(0, entry.to_string());
        self.entries.truncate(self.limit);
        true
    }

    fn encode(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }
}

/// Backing text file for [`HistoryList`], one entry per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.history_path.clone(), cfg.history_limit)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the history file. A missing or unreadable file is an empty
    /// history; bytes that are not UTF-8 are replaced, never dropped with the
    /// rest of the file.
    pub fn load(&self) -> HistoryList {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return HistoryList::new(self.limit);
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "history unreadable, starting empty: {err}"
                );
                return HistoryList::new(self.limit);
            }
        };

        HistoryList::from_entries(String::from_utf8_lossy(&raw).lines(), self.limit)
    }

    /// Moves `entry` to the front of `list` and rewrites the file. The
    /// in-memory list is updated even when the write fails.
    pub fn record(&self, list: &mut HistoryList, entry: &str) -> Result<(), HistoryError> {
        if !list.push_front(entry) {
            return Ok(());
        }
        self.persist(list)
    }

    pub fn persist(&self, list: &HistoryList) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| HistoryError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(&self.path, list.encode()).map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
