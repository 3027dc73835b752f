//! Record codec
//!
//! Encoding and decoding of a single store line, plus the display row used
//! by the menu.

use crate::error::{Result, RosterError};
use super::StudentRecord;

/// Field separator within a line
pub const DELIMITER: char = ',';

/// Number of fields in every line
const FIELD_COUNT: usize = 3;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record as `roll,name,marks` (no line terminator)
///
/// Fields are written exactly as given, surrounding whitespace included.
/// There is no quoting or escaping, so a field holding `,` or a line break is
/// refused with `InvalidField` rather than written as a line that would not
/// read back.
pub fn encode_record(record: &StudentRecord) -> Result<String> {
    check_field("roll", &record.roll)?;
    check_field("name", &record.name)?;
    check_field("marks", &record.marks)?;

    Ok(format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        record.roll, record.name, record.marks
    ))
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains([DELIMITER, '\n', '\r']) {
        return Err(RosterError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one stored line
///
/// `line_number` is 1-based and only used for error reporting. Only the line
/// terminator (`\n` or `\r\n`) is stripped; field whitespace is kept.
pub fn decode_record(line: &str, line_number: usize) -> Result<StudentRecord> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = trimmed.split(DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(RosterError::MalformedRecord {
            line: line_number,
            content: trimmed.to_string(),
        });
    }

    Ok(StudentRecord::new(fields[0], fields[1], fields[2]))
}

// =============================================================================
// Display
// =============================================================================

/// Render a record as a table row: `roll | name | marks`
pub fn format_row(record: &StudentRecord) -> String {
    format!("{} | {} | {}", record.roll, record.name, record.marks)
}
