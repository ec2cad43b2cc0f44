//! In-memory `Inventory`: weight-capped item list with eight equip slots.

use tracing::debug;

use crate::item::{EquipSlot, Item, ItemCategory, ItemId};
use crate::{Inventory, InventoryError};

#[derive(Debug, Clone, Default)]
pub struct Backpack {
    items: Vec<Item>,
    slots: [Option<ItemId>; 8],
    capacity: u32,
    money: u64,
    next_id: u32,
}

fn slot_index(slot: EquipSlot) -> usize {
    slot as usize
}

impl Backpack {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Add an item if it fits under the weight cap. The stored copy gets a
    /// fresh id, which is returned.
    pub fn add_item(&mut self, mut item: Item) -> Result<ItemId, InventoryError> {
        let free = self.capacity.saturating_sub(self.weight());
        if item.weight > free {
            return Err(InventoryError::OverCapacity {
                weight: item.weight,
                free,
            });
        }
        self.next_id += 1;
        item.id = ItemId(self.next_id);
        debug!(target: "inventory", id = self.next_id, weight = item.weight, "item_added");
        self.items.push(item);
        Ok(ItemId(self.next_id))
    }

    pub fn add_capacity(&mut self, amount: u32) {
        self.capacity = self.capacity.saturating_add(amount);
    }

    pub fn add_money(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    fn slot_of(&self, id: ItemId) -> Option<EquipSlot> {
        EquipSlot::ALL
            .into_iter()
            .find(|s| self.slots[slot_index(*s)] == Some(id))
    }

    fn candidate_slots(item: &Item) -> &'static [EquipSlot] {
        match item.category {
            ItemCategory::Accessory => &[EquipSlot::Accessory1, EquipSlot::Accessory2],
            ItemCategory::Armour => match item.slot {
                Some(crate::WearSlot::Head) => &[EquipSlot::Head],
                Some(crate::WearSlot::Body) => &[EquipSlot::Body],
                Some(crate::WearSlot::Legs) => &[EquipSlot::Legs],
                Some(crate::WearSlot::Feet) => &[EquipSlot::Feet],
                None => &[],
            },
            _ => &[EquipSlot::MainHand, EquipSlot::OffHand],
        }
    }
}

impl Inventory for Backpack {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn equipped(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots[slot_index(slot)].and_then(|id| self.item(id))
    }

    fn is_equipped(&self, id: ItemId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Accessories take the first free accessory slot, armour its wear slot,
    /// everything else the main hand then the off hand. Equipping an item
    /// that is already worn reports its current slot.
    fn equip(&mut self, id: ItemId) -> Result<EquipSlot, InventoryError> {
        if let Some(slot) = self.slot_of(id) {
            return Ok(slot);
        }
        let item = self.item(id).ok_or(InventoryError::UnknownItem(id))?;
        let slot = Self::candidate_slots(item)
            .iter()
            .copied()
            .find(|s| self.slots[slot_index(*s)].is_none())
            .ok_or(InventoryError::NoFreeSlot(id))?;
        self.slots[slot_index(slot)] = Some(id);
        debug!(target: "inventory", id = id.0, ?slot, "equipped");
        Ok(slot)
    }

    fn dequip(&mut self, id: ItemId) -> Result<EquipSlot, InventoryError> {
        let slot = self.slot_of(id).ok_or(InventoryError::NotEquipped(id))?;
        self.slots[slot_index(slot)] = None;
        debug!(target: "inventory", id = id.0, ?slot, "dequipped");
        Ok(slot)
    }

    fn weight(&self) -> u32 {
        self.items.iter().map(|i| i.weight).sum()
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn money(&self) -> u64 {
        self.money
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WearSlot;

    fn sword() -> Item {
        Item::new("Sword", ItemCategory::Weapon, '/').with_weight(5)
    }

    #[test]
    fn add_item_respects_weight_cap() {
        let mut b = Backpack::new(12);
        b.add_item(sword()).unwrap();
        b.add_item(sword()).unwrap();
        let err = b.add_item(sword()).unwrap_err();
        assert_eq!(err, InventoryError::OverCapacity { weight: 5, free: 2 });
        assert_eq!(b.weight(), 10);
    }

    #[test]
    fn hands_fill_main_then_off() {
        let mut b = Backpack::new(100);
        let a = b.add_item(sword()).unwrap();
        let c = b.add_item(sword()).unwrap();
        let d = b.add_item(sword()).unwrap();
        assert_eq!(b.equip(a), Ok(EquipSlot::MainHand));
        assert_eq!(b.equip(c), Ok(EquipSlot::OffHand));
        assert_eq!(b.equip(d), Err(InventoryError::NoFreeSlot(d)));
        assert_eq!(b.equip(a), Ok(EquipSlot::MainHand), "already worn");
    }

    #[test]
    fn armour_uses_its_wear_slot() {
        let mut b = Backpack::new(100);
        let helm = b
            .add_item(Item::new("Helm", ItemCategory::Armour, '^').with_slot(WearSlot::Head))
            .unwrap();
        let loose = b
            .add_item(Item::new("Scrap", ItemCategory::Armour, '%'))
            .unwrap();
        assert_eq!(b.equip(helm), Ok(EquipSlot::Head));
        assert_eq!(b.equipped(EquipSlot::Head).map(|i| i.id), Some(helm));
        assert!(b.equip(loose).is_err());
    }

    #[test]
    fn dequip_clears_matching_slot() {
        let mut b = Backpack::new(100);
        let ring = b
            .add_item(Item::new("Ring", ItemCategory::Accessory, 'o'))
            .unwrap();
        assert_eq!(b.equip(ring), Ok(EquipSlot::Accessory1));
        assert!(b.is_equipped(ring));
        assert_eq!(b.dequip(ring), Ok(EquipSlot::Accessory1));
        assert!(!b.is_equipped(ring));
        assert_eq!(b.dequip(ring), Err(InventoryError::NotEquipped(ring)));
    }
}
