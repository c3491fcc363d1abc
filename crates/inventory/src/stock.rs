//! The bounded, append-only inventory aggregate.

use serde::{Deserialize, Serialize};

use stocktrack_core::{Aggregate, DomainError, Event};

use crate::item::{Item, ItemId};

/// Number of records an inventory holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// Aggregate: the session's inventory.
///
/// Records keep insertion order, which is also display order. Nothing is ever
/// removed or edited; the only transition is appending one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
    version: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Empty inventory with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            version: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// First record (in insertion order) carrying `id`.
    ///
    /// Later records with the same id are never returned.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sum of quantity × unit price over all records. `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }

    /// Append a record, rejecting it when the inventory is full.
    pub fn add(&mut self, item: Item) -> Result<&Item, DomainError> {
        self.execute(&InventoryCommand::AddItem(AddItem { item }))?;
        self.items
            .last()
            .ok_or_else(|| DomainError::invariant("appended record missing"))
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub item: Item,
    /// Zero-based position of the record after the append.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.items.push(e.item.clone());
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.is_full() {
            return Err(DomainError::capacity_exceeded(self.capacity));
        }
        if !(self.total_value() + cmd.item.value()).is_finite() {
            return Err(DomainError::validation("stock value would overflow"));
        }

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            item: cmd.item.clone(),
            position: self.items.len(),
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemName, Quantity, UnitPrice};
    use proptest::prelude::*;

    fn test_item(id: i32, name: &str, quantity: u32, price: f64) -> Item {
        Item::new(
            ItemId::new(id),
            ItemName::new(name),
            Quantity::new(quantity),
            UnitPrice::new(price).unwrap(),
        )
    }

    #[test]
    fn new_inventory_is_empty_with_default_capacity() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.capacity(), DEFAULT_CAPACITY);
        assert_eq!(inventory.remaining(), DEFAULT_CAPACITY);
        assert_eq!(inventory.version(), 0);
        assert_eq!(inventory.total_value(), 0.0);
    }

    #[test]
    fn add_item_emits_item_added_event() {
        let inventory = Inventory::new();
        let item = test_item(1, "Widget", 10, 2.5);
        let cmd = InventoryCommand::AddItem(AddItem { item: item.clone() });

        let events = inventory.handle(&cmd).unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            InventoryEvent::ItemAdded(e) => {
                assert_eq!(e.item, item);
                assert_eq!(e.position, 0);
            }
        }
        assert_eq!(events[0].event_type(), "inventory.item.added");
        // handle() decides only.
        assert!(inventory.is_empty());
    }

    #[test]
    fn add_appends_and_bumps_version() {
        let mut inventory = Inventory::new();
        let added = inventory.add(test_item(1, "Widget", 10, 2.5)).unwrap().clone();

        assert_eq!(added, test_item(1, "Widget", 10, 2.5));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.version(), 1);
        assert_eq!(inventory.total_value(), 25.0);
    }

    #[test]
    fn add_when_full_is_rejected_without_mutation() {
        let mut inventory = Inventory::with_capacity(2);
        inventory.add(test_item(1, "a", 1, 1.0)).unwrap();
        inventory.add(test_item(2, "b", 1, 1.0)).unwrap();
        let before = inventory.clone();

        let err = inventory.add(test_item(3, "c", 1, 1.0)).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 2 });
        assert_eq!(inventory, before);
        assert!(inventory.is_full());
        assert_eq!(inventory.remaining(), 0);
    }

    #[test]
    fn add_rejects_record_whose_value_overflows() {
        let mut inventory = Inventory::new();
        inventory.add(test_item(1, "Big", 1, 1e308)).unwrap();

        let err = inventory.add(test_item(2, "Bigger", 2, 1e308)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("overflow")));

        // Each record alone is finite, but the running total would not be.
        let err = inventory.add(test_item(3, "Big again", 1, 1e308)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert_eq!(inventory.len(), 1);
        assert!(inventory.total_value().is_finite());
    }

    #[test]
    fn zero_capacity_inventory_rejects_everything() {
        let mut inventory = Inventory::with_capacity(0);
        assert!(inventory.is_full());
        assert!(inventory.add(test_item(1, "a", 1, 1.0)).is_err());
    }

    #[test]
    fn find_returns_first_match_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(test_item(7, "first", 1, 1.0)).unwrap();
        inventory.add(test_item(8, "other", 1, 1.0)).unwrap();
        inventory.add(test_item(7, "second", 2, 2.0)).unwrap();

        assert_eq!(inventory.find(ItemId::new(7)).unwrap().name.as_str(), "first");
        assert_eq!(inventory.find(ItemId::new(8)).unwrap().name.as_str(), "other");
        assert!(inventory.find(ItemId::new(9)).is_none());
    }

    #[test]
    fn events_serialize_with_plain_field_values() {
        let event = InventoryEvent::ItemAdded(ItemAdded {
            item: test_item(1, "Widget", 10, 2.5),
            position: 0,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["ItemAdded"]["item"]["id"], 1);
        assert_eq!(json["ItemAdded"]["item"]["name"], "Widget");
        assert_eq!(json["ItemAdded"]["item"]["quantity"], 10);
        assert_eq!(json["ItemAdded"]["item"]["price"], 2.5);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (-5i32..5, "[a-z]{0,8}", 0u32..1_000, 0u32..100_000).prop_map(|(id, name, qty, cents)| {
            test_item(id, &name, qty, f64::from(cents) / 100.0)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the record count never exceeds capacity, and every accepted
        /// add grows the inventory by exactly one.
        #[test]
        fn count_is_bounded_by_capacity(
            capacity in 0usize..8,
            items in proptest::collection::vec(arb_item(), 0..16),
        ) {
            let mut inventory = Inventory::with_capacity(capacity);
            for item in items {
                let before = inventory.len();
                match inventory.add(item.clone()) {
                    Ok(added) => {
                        prop_assert_eq!(added, &item);
                        prop_assert_eq!(inventory.len(), before + 1);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, DomainError::CapacityExceeded { capacity });
                        prop_assert_eq!(inventory.len(), before);
                    }
                }
                prop_assert!(inventory.len() <= inventory.capacity());
            }
            prop_assert_eq!(inventory.version(), inventory.len() as u64);
        }

        /// Property: search yields the earliest record with the requested id.
        #[test]
        fn find_matches_first_position(
            items in proptest::collection::vec(arb_item(), 0..20),
            needle in -5i32..5,
        ) {
            let mut inventory = Inventory::new();
            for item in &items {
                inventory.add(item.clone()).unwrap();
            }
            let expected = items.iter().find(|item| item.id.get() == needle);
            prop_assert_eq!(inventory.find(ItemId::new(needle)), expected);
        }

        /// Property: total value equals the sum of quantity × price (to the cent).
        #[test]
        fn total_value_is_sum_of_record_values(
            items in proptest::collection::vec(arb_item(), 0..20),
        ) {
            let mut inventory = Inventory::new();
            let mut expected_cents: u128 = 0;
            for item in &items {
                inventory.add(item.clone()).unwrap();
                let cents = (item.price.get() * 100.0).round() as u128;
                expected_cents += u128::from(item.quantity.get()) * cents;
            }
            let total_cents = (inventory.total_value() * 100.0).round() as u128;
            prop_assert_eq!(total_cents, expected_cents);
        }
    }
}
