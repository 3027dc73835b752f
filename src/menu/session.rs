//! Menu session
//!
//! Prompts, dispatch and rendering for one run of the interactive menu.

use std::io::{BufRead, Write};
use std::iter::Peekable;

use tracing::{debug, error};

use crate::error::{Result, RosterError};
use crate::record::{format_row, StudentRecord};
use crate::store::{RecordIter, RecordStore};

use super::MenuChoice;

/// User-facing text printed by the menu
pub mod messages {
    pub const BANNER: &str = "--- Student Management System ---";
    pub const CHOICE_PROMPT: &str = "Enter choice: ";
    pub const ROLL_PROMPT: &str = "Enter Roll No: ";
    pub const NAME_PROMPT: &str = "Enter Name: ";
    pub const MARKS_PROMPT: &str = "Enter Marks: ";
    pub const SEARCH_PROMPT: &str = "Enter Roll No to search: ";
    pub const DELETE_PROMPT: &str = "Enter Roll No to delete: ";

    pub const ADDED: &str = "Student added successfully!";
    pub const LIST_HEADER: &str = "Roll | Name | Marks";
    pub const LIST_RULE: &str = "-------------------";
    pub const NO_RECORDS: &str = "No records found.";
    pub const FOUND_PREFIX: &str = "Found: ";
    pub const NOT_FOUND: &str = "Student not found.";
    pub const DELETED: &str = "Student deleted successfully.";
    pub const INVALID_CHOICE: &str = "Invalid choice!";
}

/// A fully-specified store operation, independent of how it was gathered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(StudentRecord),
    View,
    Search { roll: String },
    Delete { roll: String },
}

/// Interactive menu bound to a store and an input/output pair
pub struct Menu<'a, R, W> {
    store: &'a RecordStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input ends
    ///
    /// A failing operation is reported as `Error: ...` and the menu is shown
    /// again. Only a failure to read input or write output ends the loop
    /// with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(line) = self.prompt(messages::CHOICE_PROMPT)? else {
                debug!("Input closed at menu prompt");
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "{}", messages::INVALID_CHOICE)?;
                    continue;
                }
            };

            let Some(action) = self.gather(choice)? else {
                debug!(?choice, "Input closed mid-operation");
                break;
            };

            if let Err(e) = self.execute(action) {
                self.report(&e)?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Perform one action against the store and render its outcome
    pub fn execute(&mut self, action: Action) -> Result<()> {
        debug!(?action, "Executing");

        match action {
            Action::Add(record) => {
                self.store.add(&record)?;
                writeln!(self.output, "{}", messages::ADDED)?;
            }
            Action::View => {
                let records = self.store.list()?.peekable();
                self.render_listing(records)?;
            }
            Action::Search { roll } => match self.store.search(&roll)? {
                Some(record) => writeln!(
                    self.output,
                    "{}{}",
                    messages::FOUND_PREFIX,
                    format_row(&record)
                )?,
                None => writeln!(self.output, "{}", messages::NOT_FOUND)?,
            },
            Action::Delete { roll } => {
                if self.store.delete(&roll)? > 0 {
                    writeln!(self.output, "{}", messages::DELETED)?;
                } else {
                    writeln!(self.output, "{}", messages::NOT_FOUND)?;
                }
            }
        }

        Ok(())
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", messages::BANNER)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice as u8, choice.label())?;
        }
        Ok(())
    }

    /// Ask for whatever the chosen operation needs
    ///
    /// `None` when input ends before every field is read.
    fn gather(&mut self, choice: MenuChoice) -> Result<Option<Action>> {
        let action = match choice {
            MenuChoice::Add => {
                let Some(roll) = self.prompt(messages::ROLL_PROMPT)? else {
                    return Ok(None);
                };
                let Some(name) = self.prompt(messages::NAME_PROMPT)? else {
                    return Ok(None);
                };
                let Some(marks) = self.prompt(messages::MARKS_PROMPT)? else {
                    return Ok(None);
                };
                Action::Add(StudentRecord::new(roll, name, marks))
            }
            MenuChoice::View => Action::View,
            MenuChoice::Search => match self.prompt(messages::SEARCH_PROMPT)? {
                Some(roll) => Action::Search { roll },
                None => return Ok(None),
            },
            MenuChoice::Delete => match self.prompt(messages::DELETE_PROMPT)? {
                Some(roll) => Action::Delete { roll },
                None => return Ok(None),
            },
            MenuChoice::Exit => return Ok(None),
        };

        Ok(Some(action))
    }

    fn render_listing(&mut self, mut records: Peekable<RecordIter>) -> Result<()> {
        if records.peek().is_none() {
            writeln!(self.output, "{}", messages::NO_RECORDS)?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", messages::LIST_HEADER)?;
        writeln!(self.output, "{}", messages::LIST_RULE)?;
        for record in records {
            writeln!(self.output, "{}", format_row(&record?))?;
        }
        Ok(())
    }

    /// Print a prompt and read one line, without its line terminator
    ///
    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn report(&mut self, err: &RosterError) -> Result<()> {
        error!(error = %err, "Operation failed");
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }
}
