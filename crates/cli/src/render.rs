//! Console rendering.
//!
//! Money is always shown with two decimals.

use std::io::{self, Write};

use stocktrack_inventory::Item;

use crate::input::Field;
use crate::menu::MenuChoice;

pub const TITLE: &str = "=== Inventory System ===";
pub const ITEM_ADDED: &str = "Item added.";
pub const INVENTORY_FULL: &str = "Inventory full.";
pub const INVENTORY_EMPTY: &str = "Inventory is empty.";
pub const ITEM_NOT_FOUND: &str = "Item not found.";
pub const OUT_OF_RANGE: &str = "Choose an option between 1 and 5.";
pub const EXITING: &str = "Exiting...";

/// Title, numbered options and the selection prompt (no trailing newline).
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{TITLE}")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.selection(), choice.label())?;
    }
    prompt(out, Field::MenuChoice)
}

pub fn prompt(out: &mut impl Write, field: Field) -> io::Result<()> {
    write!(out, "{}", field.prompt())?;
    out.flush()
}

pub fn line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")
}

/// Header plus one tab-separated row per record, in the given order.
pub fn item_table(out: &mut impl Write, items: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "ID\tQty\tPrice\tName")?;
    for item in items {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            item.id, item.quantity, item.price, item.name
        )?;
    }
    Ok(())
}

pub fn found(out: &mut impl Write, item: &Item) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Found: {} (Qty: {}, Price: ${})",
        item.name, item.quantity, item.price
    )
}

pub fn total_value(out: &mut impl Write, total: f64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Inventory Value: ${total:.2}")
}
