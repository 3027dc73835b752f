//! # Roster
//!
//! A single-user student record manager with:
//! - One delimited text file as the whole store (`roll,name,marks` per line)
//! - Add, list, search and delete by linear scan
//! - An interactive five-option menu over any reader/writer pair
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     roster binary                           │
//! │          (clap args, tracing, one-shot subcommands)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Menu                                  │
//! │           (prompt → Action → execute → render)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   RecordStore                               │
//! │     (append / scan / first-match / filtered rewrite)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ students.txt  │
//!               │ (line codec)  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::StudentRecord;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
