use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocktrack_core::{DomainError, DomainResult, Entity, ValueObject};

/// Maximum number of characters kept from an item name.
pub const NAME_MAX_CHARS: usize = 49;

/// Item identifier as typed by the operator. Not unique across the inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl ItemId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(value))
    }
}

/// Item name, truncated to [`NAME_MAX_CHARS`] characters. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Build a name from raw operator text.
    ///
    /// Only a trailing line terminator is stripped; other whitespace is kept.
    pub fn new(raw: &str) -> Self {
        let line = raw
            .strip_suffix('\n')
            .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
            .unwrap_or(raw);
        Self(line.chars().take(NAME_MAX_CHARS).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ItemName {}

/// Units on hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(units: u32) -> Self {
        Self(units)
    }

    /// Validate a signed operator entry.
    pub fn from_signed(units: i64) -> DomainResult<Self> {
        if units < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        u32::try_from(units)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity cannot exceed {}", u32::MAX)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}

/// Price of a single unit.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // -0.0 would otherwise render as "-0.00".
        Ok(Self(if amount == 0.0 { 0.0 } else { amount }))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl ValueObject for UnitPrice {}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub quantity: Quantity,
    pub price: UnitPrice,
}

impl Item {
    pub fn new(id: ItemId, name: ItemName, quantity: Quantity, price: UnitPrice) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
        }
    }

    /// Stock value of this record: quantity × unit price.
    pub fn value(&self) -> f64 {
        f64::from(self.quantity.get()) * self.price.get()
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
