//! Record Iterator
//!
//! Sequential iteration over every record in the backing file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};

use crate::error::Result;
use crate::record::{decode_record, StudentRecord};

/// Lazy iterator over store records in file order
///
/// Holds no cursor beyond its own lifetime; call `RecordStore::list` again
/// to start over.
pub struct RecordIter {
    /// `None` when the backing file does not exist
    lines: Option<Lines<BufReader<File>>>,
    /// 1-based number of the last line read
    line_number: usize,
}

impl RecordIter {
    pub(super) fn new(file: Option<File>) -> Self {
        Self {
            lines: file.map(|f| BufReader::new(f).lines()),
            line_number: 0,
        }
    }
}

impl Iterator for RecordIter {
    type Item = Result<StudentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;

        loop {
            let line = match lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            // Blank lines carry no record
            if line.trim().is_empty() {
                continue;
            }

            return Some(decode_record(&line, self.line_number));
        }
    }
}
