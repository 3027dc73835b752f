//! Record Module
//!
//! The student record and its on-disk line format.
//!
//! ## Line Format
//! ```text
//! ┌────────┬───┬────────┬───┬────────┬────┐
//! │  roll  │ , │  name  │ , │ marks  │ \n │
//! └────────┴───┴────────┴───┴────────┴────┘
//! ```
//!
//! Fields are not escaped. A field holding the delimiter or a line break is
//! refused on encode instead of being written.

mod student;
mod codec;

pub use student::StudentRecord;
pub use codec::{decode_record, encode_record, format_row, DELIMITER};
