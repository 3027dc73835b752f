//! Menu Module
//!
//! The interactive front end: a five-option menu read from any `BufRead`
//! and rendered to any `Write`, dispatching to a `RecordStore`.
//!
//! ```text
//! --- Student Management System ---
//! 1. Add Student
//! 2. View Students
//! 3. Search Student
//! 4. Delete Student
//! 5. Exit
//! Enter choice:
//! ```

mod choice;
mod session;

pub use choice::MenuChoice;
pub use session::{messages, Action, Menu};
