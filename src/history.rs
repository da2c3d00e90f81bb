use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::filetype::valid_extension;

/// Played-files history: an ordered, append-only set of filenames relative
/// to the scan root, mirrored by a plain text state file with one name per
/// line. Entries are only ever appended or wholesale cleared.
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Reads the state file. A missing file is a first run, not an error.
    /// Lines that do not look like a media filename are dropped silently so
    /// a corrupted file cannot poison the selection.
    pub fn load(path: &Path) -> Result<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(raw) => raw
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| valid_extension(line))
                .map(str::to_owned)
                .collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read history at {}", path.display()));
            }
        };
        Ok(Self { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// The most recently played file, i.e. the last line of the state file.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Durably records a selection before it is handed to the player.
    pub fn record(&mut self, path: &Path, name: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open history at {} for append", path.display()))?;
        writeln!(file, "{name}")
            .with_context(|| format!("failed to record selection in {}", path.display()))?;
        self.entries.push(name.to_owned());
        Ok(())
    }

    /// Truncates the state file and clears the in-memory set, starting a new
    /// cycle in which every file is eligible again.
    pub fn reset(&mut self, path: &Path) -> Result<()> {
        fs::write(path, b"")
            .with_context(|| format!("failed to reset history at {}", path.display()))?;
        self.entries.clear();
        Ok(())
    }
}
