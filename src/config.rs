//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a record store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding one `roll,name,marks` line per record
    pub store_path: PathBuf,

    /// How hard to push writes to disk
    pub sync_strategy: SyncStrategy,
}

/// Sync strategy for store writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Leave flushing to the OS page cache
    OsBuffered,

    /// fsync after every add and every delete rewrite
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("students.txt"),
            sync_strategy: SyncStrategy::OsBuffered,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject paths the store could never write to
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(RosterError::Config("store path is empty".to_string()));
        }

        if self.store_path.is_dir() {
            return Err(RosterError::Config(format!(
                "store path {} is a directory",
                self.store_path.display()
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
