//! Demo player: a fighter carrying a small code-defined item catalog.

use anyhow::Result;
use core_inventory::{Backpack, Inventory, Item, ItemCategory, PlayerClass, PlayerStats, WearSlot};
use tracing::info;

pub const PLAYER_NAME: &str = "Wanderer";
const STARTING_MONEY: u64 = 363_899_345_745;
const STARTING_DAMAGE: i32 = 60;

pub struct Player {
    pub stats: PlayerStats,
    pub backpack: Backpack,
}

impl Player {
    pub fn demo() -> Result<Self> {
        let mut stats = PlayerStats::new(PlayerClass::Fighter);
        let mut backpack = Backpack::new(stats.carry_capacity());
        for item in catalog() {
            backpack.add_item(item)?;
        }
        backpack.add_money(STARTING_MONEY);
        stats.damage(STARTING_DAMAGE);
        info!(
            target: "runtime",
            items = backpack.items().len(),
            capacity = stats.carry_capacity(),
            "player_ready"
        );
        Ok(Self { stats, backpack })
    }
}

fn catalog() -> Vec<Item> {
    use ItemCategory::*;
    vec![
        Item::new("Copper Ring", Accessory, 'o')
            .with_description("A plain band, green at the edges.")
            .with_image("items/accessories/ring.txt")
            .with_value(40)
            .with_weight(1)
            .with_defence(1),
        Item::new("Bone Amulet", Accessory, '§')
            .with_description("Carved from something large. It hums at night.")
            .with_image("items/accessories/amulet.txt")
            .with_value(1_250)
            .with_weight(1)
            .with_speed(2),
        Item::new("Iron Helm", Armour, '∩')
            .with_description("Dented, but the dents face outward.")
            .with_image("items/armour/head/head.txt")
            .with_slot(WearSlot::Head)
            .with_value(300)
            .with_weight(40)
            .with_defence(4),
        Item::new("Leather Jerkin", Armour, 'Ŧ')
            .with_description("Supple hide stitched with waxed thread.")
            .with_image("items/armour/body/body.txt")
            .with_slot(WearSlot::Body)
            .with_value(220)
            .with_weight(60)
            .with_defence(3),
        Item::new("Chain Leggings", Armour, 'Π')
            .with_description("Rings upon rings. Loud on stairs.")
            .with_image("items/armour/legs/legs.txt")
            .with_slot(WearSlot::Legs)
            .with_value(450)
            .with_weight(80)
            .with_defence(5)
            .with_speed(-1),
        Item::new("Worn Boots", Armour, 'ʟ')
            .with_description("Someone else broke them in.")
            .with_image("items/armour/feet/feet.txt")
            .with_slot(WearSlot::Feet)
            .with_value(35)
            .with_weight(20)
            .with_defence(1),
        Item::new("Bread Loaf", Food, '●')
            .with_description("Yesterday's, but only just.")
            .with_image("items/food/bread.txt")
            .with_value(3)
            .with_weight(2)
            .with_sustenance(25),
        Item::new("Dried Apple", Food, '•')
            .with_value(1)
            .with_weight(1)
            .with_sustenance(5),
        Item::new("Smoked Fish", Food, '∝')
            .with_description("Smells stronger than it tastes.")
            .with_value(6)
            .with_weight(3)
            .with_sustenance(30),
        Item::new("Cellar Key", Key, 'ⱡ')
            .with_description("Opens a door you have not found yet.")
            .with_image("items/keys/key.txt"),
        Item::new("Iron Ore", Material, '▪')
            .with_description("Heavy, rough and full of promise.")
            .with_value(12)
            .with_weight(25),
        Item::new("Oak Plank", Material, '▬').with_value(4).with_weight(15),
        Item::new("Healing Draught", Potion, '!')
            .with_description("Bitter red liquid in a stoppered vial.")
            .with_image("items/potions/potion.txt")
            .with_value(75_000)
            .with_weight(2),
        Item::new("Scroll of Mending", Scroll, '≈')
            .with_description("The ink shifts when you are not reading it.")
            .with_image("items/scrolls/scroll.txt")
            .with_value(2_400_000)
            .with_weight(1),
        Item::new("Short Sword", Weapon, '†')
            .with_description("Balanced for a quick thrust.")
            .with_image("items/weapons/sword.txt")
            .with_value(150)
            .with_weight(30)
            .with_damage(6)
            .with_attack(2),
        Item::new("Buckler", Weapon, 'Ѳ')
            .with_description("Small round shield, good for parrying.")
            .with_image("items/weapons/shield.txt")
            .with_value(90)
            .with_weight(25)
            .with_defence(3),
        Item::new("Hand Axe", Weapon, 'ґ')
            .with_description("Chops wood and the occasional goblin.")
            .with_image("items/weapons/axe.txt")
            .with_value(110)
            .with_weight(35)
            .with_damage(8),
        Item::new("Walking Staff", Weapon, '/')
            .with_value(8)
            .with_weight(20)
            .with_damage(3)
            .with_speed(1),
        Item::new("Rusty Dagger", Weapon, '‡')
            .with_description("Better than nothing. Barely.")
            .with_image("items/weapons/dagger.txt")
            .with_value(12)
            .with_weight(8)
            .with_damage(3)
            .with_speed(1),
    ]
}
