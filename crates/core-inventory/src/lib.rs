//! Inventory and stats collaborators consumed by the UI.
//!
//! The UI only reads through `Inventory` / `Stats`, apart from the two
//! mutating calls `equip` and `dequip` made in response to user action.
//! `Backpack` and `PlayerStats` are in-memory implementations used by the
//! binary and tests. Values handed to the UI are trusted as already valid.

pub mod backpack;
pub mod item;
pub mod stats;

pub use backpack::Backpack;
pub use item::{EquipSlot, Item, ItemCategory, ItemId, WearSlot};
pub use stats::{PlayerClass, PlayerStats};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("item weighs {weight} but only {free} capacity remains")]
    OverCapacity { weight: u32, free: u32 },
    #[error("no free slot for item {0:?}")]
    NoFreeSlot(ItemId),
    #[error("unknown item {0:?}")]
    UnknownItem(ItemId),
    #[error("item {0:?} is not equipped")]
    NotEquipped(ItemId),
}

pub trait Inventory {
    /// All items in insertion order.
    fn items(&self) -> &[Item];

    fn items_in(&self, category: ItemCategory) -> Vec<&Item> {
        self.items()
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items().iter().find(|i| i.id == id)
    }

    fn equipped(&self, slot: EquipSlot) -> Option<&Item>;
    fn is_equipped(&self, id: ItemId) -> bool;
    fn equip(&mut self, id: ItemId) -> Result<EquipSlot, InventoryError>;
    fn dequip(&mut self, id: ItemId) -> Result<EquipSlot, InventoryError>;

    fn weight(&self) -> u32;
    fn capacity(&self) -> u32;
    fn money(&self) -> u64;
}

pub trait Stats {
    fn health(&self) -> i32;
    fn max_health(&self) -> i32;
    fn attack(&self) -> i32;
    fn defence(&self) -> i32;
    fn speed(&self) -> i32;
    fn satiety(&self) -> i32;
}
