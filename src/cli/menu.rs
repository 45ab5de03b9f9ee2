//! Main menu choices.

/// Rule line framing the menu.
pub const RULE: &str = "===================================";

/// Menu body, one option per line.
pub const MENU_OPTIONS: &[&str] = &[
    "1: Add Contact",
    "2: Show All Contacts",
    "3: Show Contact Details",
    "4: Update Contact",
    "5: Delete Contact",
    "0: Exit",
];

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ShowAll,
    ShowDetails,
    Update,
    Delete,
    Exit,
    /// An integer that names no option
    Unknown(i64),
}

impl MenuChoice {
    /// Parse a menu answer. Returns `None` when the answer is not an integer.
    pub fn parse(answer: &str) -> Option<Self> {
        let choice = match answer.trim().parse::<i64>().ok()? {
            1 => Self::Add,
            2 => Self::ShowAll,
            3 => Self::ShowDetails,
            4 => Self::Update,
            5 => Self::Delete,
            0 => Self::Exit,
            other => Self::Unknown(other),
        };
        Some(choice)
    }
}
