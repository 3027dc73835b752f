//! Student record definition

/// One student's roll/name/marks triple
///
/// `marks` is kept as text; it is never parsed to a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Nominal identifier (uniqueness is not enforced)
    pub roll: String,

    pub name: String,

    pub marks: String,
}

impl StudentRecord {
    /// Create a new record
    pub fn new(roll: impl Into<String>, name: impl Into<String>, marks: impl Into<String>) -> Self {
        Self {
            roll: roll.into(),
            name: name.into(),
            marks: marks.into(),
        }
    }
}
