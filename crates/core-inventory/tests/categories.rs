use core_inventory::{Backpack, Inventory, Item, ItemCategory};
use pretty_assertions::assert_eq;

#[test]
fn items_in_keeps_insertion_order_per_category() {
    let mut b = Backpack::new(1000);
    for (name, cat) in [
        ("Apple", ItemCategory::Food),
        ("Dagger", ItemCategory::Weapon),
        ("Bread", ItemCategory::Food),
        ("Key", ItemCategory::Key),
        ("Cheese", ItemCategory::Food),
    ] {
        b.add_item(Item::new(name, cat, '*')).unwrap();
    }
    let food: Vec<&str> = b
        .items_in(ItemCategory::Food)
        .into_iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(food, vec!["Apple", "Bread", "Cheese"]);
    assert!(b.items_in(ItemCategory::Scroll).is_empty());
}

#[test]
fn ids_are_unique_and_resolvable() {
    let mut b = Backpack::new(1000);
    let a = b.add_item(Item::new("A", ItemCategory::Potion, '!')).unwrap();
    let c = b.add_item(Item::new("A", ItemCategory::Potion, '!')).unwrap();
    assert_ne!(a, c);
    assert_eq!(b.item(c).map(|i| i.id), Some(c));
}
