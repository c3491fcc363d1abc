//! Parsing of operator input lines.
//!
//! A numeric field is the whole line, trimmed; it must parse completely.

use core::str::FromStr;

use stocktrack_inventory::{ItemId, ItemName, Quantity, UnitPrice};

use crate::error::InputError;

/// A value the session asks the operator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MenuChoice,
    ItemId,
    ItemName,
    Quantity,
    Price,
    SearchId,
}

impl Field {
    /// Prompt printed before reading the field.
    pub fn prompt(self) -> &'static str {
        match self {
            Field::MenuChoice => "Select option: ",
            Field::ItemId => "Enter Item ID (number): ",
            Field::ItemName => "Enter Item Name: ",
            Field::Quantity => "Enter Quantity: ",
            Field::Price => "Enter Price per unit: ",
            Field::SearchId => "Enter Item ID to search: ",
        }
    }

    /// Message shown when the field's input is refused.
    ///
    /// `None` for free-text fields, which accept any line.
    pub fn rejection_message(self) -> Option<&'static str> {
        match self {
            Field::MenuChoice => Some("Invalid input. Enter a number."),
            Field::ItemId => Some("Invalid ID."),
            Field::ItemName => None,
            Field::Quantity => Some("Invalid quantity."),
            Field::Price => Some("Invalid price."),
            Field::SearchId => Some("Invalid input."),
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Field::MenuChoice => "menu choice",
            Field::ItemId => "item id",
            Field::ItemName => "item name",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::SearchId => "search id",
        };
        f.write_str(name)
    }
}

fn parse_number<T: FromStr>(field: Field, line: &str) -> Result<T, InputError> {
    line.trim()
        .parse::<T>()
        .map_err(|_| InputError::malformed(field, line.trim_end_matches(['\r', '\n'])))
}

/// Raw menu selection; range checking happens in [`crate::menu`].
pub fn parse_selection(line: &str) -> Result<i64, InputError> {
    parse_number(Field::MenuChoice, line)
}

pub fn parse_item_id(field: Field, line: &str) -> Result<ItemId, InputError> {
    line.parse::<ItemId>().map_err(|e| {
        tracing::debug!(%field, error = %e, "item id refused");
        InputError::malformed(field, line.trim_end_matches(['\r', '\n']))
    })
}

pub fn parse_name(line: &str) -> ItemName {
    ItemName::new(line)
}

pub fn parse_quantity(line: &str) -> Result<Quantity, InputError> {
    let units = parse_number::<i64>(Field::Quantity, line)?;
    Quantity::from_signed(units).map_err(|e| InputError::rejected(Field::Quantity, e))
}

pub fn parse_price(line: &str) -> Result<UnitPrice, InputError> {
    let amount = parse_number::<f64>(Field::Price, line)?;
    UnitPrice::new(amount).map_err(|e| InputError::rejected(Field::Price, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::DomainError;

    #[test]
    fn numbers_are_trimmed_and_parsed_whole() {
        assert_eq!(parse_selection(" 3 \n").unwrap(), 3);
        assert_eq!(parse_item_id(Field::ItemId, "42\r\n").unwrap(), ItemId::new(42));
        assert_eq!(parse_quantity("10\n").unwrap(), Quantity::new(10));
        assert_eq!(parse_price("2.50\n").unwrap().get(), 2.5);
    }

    #[test]
    fn malformed_lines_name_their_field() {
        let err = parse_selection("abc\n").unwrap_err();
        assert_eq!(err, InputError::malformed(Field::MenuChoice, "abc"));

        for line in ["", "\n", "12abc\n", "1.5\n"] {
            let err = parse_item_id(Field::SearchId, line).unwrap_err();
            assert_eq!(err.field(), Field::SearchId, "line {line:?}");
        }
    }

    #[test]
    fn negative_quantity_is_rejected_by_domain() {
        match parse_quantity("-5\n").unwrap_err() {
            InputError::Rejected {
                field: Field::Quantity,
                source: DomainError::Validation(_),
            } => {}
            other => panic!("Expected rejected quantity, got {other:?}"),
        }
    }

    #[test]
    fn price_rejects_negative_and_nan() {
        assert_eq!(parse_price("-1\n").unwrap_err().field(), Field::Price);
        assert!(matches!(
            parse_price("NaN\n").unwrap_err(),
            InputError::Rejected { .. }
        ));
        assert!(matches!(
            parse_price("cheap\n").unwrap_err(),
            InputError::Malformed { .. }
        ));
    }

    #[test]
    fn item_id_goes_through_domain_parser() {
        assert_eq!(parse_item_id(Field::ItemId, "  -3 \n").unwrap(), ItemId::new(-3));

        let err = parse_item_id(Field::ItemId, "2147483648\n").unwrap_err();
        assert_eq!(err, InputError::malformed(Field::ItemId, "2147483648"));
    }

    #[test]
    fn rejection_messages_match_console_texts() {
        assert_eq!(Field::ItemId.rejection_message(), Some("Invalid ID."));
        assert_eq!(Field::Quantity.rejection_message(), Some("Invalid quantity."));
        assert_eq!(Field::Price.rejection_message(), Some("Invalid price."));
        assert_eq!(Field::SearchId.rejection_message(), Some("Invalid input."));
    }

    #[test]
    fn free_text_name_has_no_rejection_message() {
        assert_eq!(Field::ItemName.rejection_message(), None);
    }
}
