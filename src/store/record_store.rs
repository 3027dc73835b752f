//! Record Store
//!
//! Add, list, search and delete over the backing file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{Config, SyncStrategy};
use crate::error::{Result, RosterError};
use crate::record::{decode_record, encode_record, StudentRecord};

use super::RecordIter;

/// Handle to the backing file
///
/// Holds no open file between calls; every operation opens, scans and
/// closes the file again, so the caller only owns the handle's lifetime.
pub struct RecordStore {
    config: Config,
}

impl RecordStore {
    /// Open a store described by `config`
    ///
    /// The backing file is not created here. It appears on the first `add`.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        info!(
            path = %config.store_path.display(),
            exists = config.store_path.exists(),
            "Opened record store"
        );

        Ok(Self { config })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified backing file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().store_path(path).build();
        Self::open(config)
    }

    /// Append a record, creating the backing file if absent
    ///
    /// No duplicate check: a second record with the same roll is appended
    /// like any other.
    pub fn add(&self, record: &StudentRecord) -> Result<()> {
        let line = encode_record(record)?;
        let path = &self.config.store_path;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;

        // A last line without its terminator is still a valid record
        if Self::missing_final_newline(&mut file)? {
            debug!("Terminating unterminated last line before append");
            writeln!(file)?;
        }
        writeln!(file, "{line}")?;

        if self.config.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }

        debug!(roll = %record.roll, "Appended record");
        Ok(())
    }

    /// Iterate all records in file order
    ///
    /// An absent backing file yields an empty iterator.
    pub fn list(&self) -> Result<RecordIter> {
        Ok(RecordIter::new(self.open_existing()?))
    }

    /// Collect every record into memory
    pub fn records(&self) -> Result<Vec<StudentRecord>> {
        self.list()?.collect()
    }

    /// Find the first record whose roll equals `roll`
    ///
    /// Scanning stops at the first match, so later duplicates are never read.
    /// Unlike `list`, an absent backing file is reported as `StoreMissing`.
    pub fn search(&self, roll: &str) -> Result<Option<StudentRecord>> {
        let file = self.open_existing()?.ok_or_else(|| self.missing())?;

        for record in RecordIter::new(Some(file)) {
            let record = record?;
            if record.roll == roll {
                debug!(roll, "Search hit");
                return Ok(Some(record));
            }
        }

        debug!(roll, "Search miss");
        Ok(None)
    }

    /// Remove every record whose roll equals `roll`
    ///
    /// Returns how many records were removed; zero means not found. The file
    /// is only rewritten when something was removed, and every line is parsed
    /// before the rewrite starts, so a malformed line leaves the file intact.
    /// An absent backing file is reported as `StoreMissing` and not created.
    pub fn delete(&self, roll: &str) -> Result<usize> {
        let path = &self.config.store_path;

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(roll, path = %path.display(), "Delete on absent store");
                return Err(self.missing());
            }
            Err(e) => return Err(e.into()),
        };

        let mut kept: Vec<&str> = Vec::new();
        let mut removed = 0;

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = decode_record(line, index + 1)?;
            if record.roll == roll {
                removed += 1;
            } else {
                kept.push(line);
            }
        }

        if removed == 0 {
            debug!(roll, "Delete miss");
            return Ok(0);
        }

        // Non-atomic: a crash past this point can leave the file truncated
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in &kept {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        if self.config.sync_strategy == SyncStrategy::EveryWrite {
            writer.get_ref().sync_all()?;
        }

        debug!(roll, removed, remaining = kept.len(), "Deleted records");
        Ok(removed)
    }

    /// Close the store
    pub fn close(self) -> Result<()> {
        info!(path = %self.config.store_path.display(), "Closed record store");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.config.store_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Open the backing file for reading, or `None` if it does not exist
    fn open_existing(&self) -> Result<Option<File>> {
        match File::open(&self.config.store_path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn missing(&self) -> RosterError {
        RosterError::StoreMissing(self.config.store_path.clone())
    }

    /// True when a non-empty file does not end in `\n`
    fn missing_final_newline(file: &mut File) -> Result<bool> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}
