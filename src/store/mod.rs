//! Store Module
//!
//! The record store: a single delimited text file, read in full on every
//! operation and rewritten in full on delete.
//!
//! ## Responsibilities
//! - Append records (no duplicate check)
//! - Lazily iterate records in file order
//! - First-match lookup by roll
//! - Remove every record sharing a roll in one rewrite
//!
//! ## Guarantees
//! - A missing backing file lists as empty; search and delete report it
//!   as `StoreMissing`
//! - Single process only: nothing is locked, and a crash during a delete
//!   rewrite can leave the file truncated

mod iterator;
mod record_store;

pub use iterator::RecordIter;
pub use record_store::RecordStore;
