//! Menu choice definitions

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    View = 2,
    Search = 3,
    Delete = 4,
    Exit = 5,
}

impl MenuChoice {
    /// All choices in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse a typed choice; anything but `1`..`5` is `None`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Text shown next to the number in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::View => "View Students",
            MenuChoice::Search => "Search Student",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::Exit => "Exit",
        }
    }
}
