//! Main menu selections.

/// One of the five menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    ViewInventory,
    SearchItem,
    TotalValue,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddItem,
        MenuChoice::ViewInventory,
        MenuChoice::SearchItem,
        MenuChoice::TotalValue,
        MenuChoice::Exit,
    ];

    /// Map a numeric selection to an operation; `None` when out of range.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(MenuChoice::AddItem),
            2 => Some(MenuChoice::ViewInventory),
            3 => Some(MenuChoice::SearchItem),
            4 => Some(MenuChoice::TotalValue),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn selection(self) -> i64 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::ViewInventory => 2,
            MenuChoice::SearchItem => 3,
            MenuChoice::TotalValue => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Add Item",
            MenuChoice::ViewInventory => "View Inventory",
            MenuChoice::SearchItem => "Search Item",
            MenuChoice::TotalValue => "Calculate Total Value",
            MenuChoice::Exit => "Exit",
        }
    }
}
