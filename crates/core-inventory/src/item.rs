//! Item records and their classification enums.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Item categories in list order; the UI shows one tab per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Accessory,
    Armour,
    Food,
    Key,
    Material,
    Potion,
    Scroll,
    Weapon,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 8] = [
        ItemCategory::Accessory,
        ItemCategory::Armour,
        ItemCategory::Food,
        ItemCategory::Key,
        ItemCategory::Material,
        ItemCategory::Potion,
        ItemCategory::Scroll,
        ItemCategory::Weapon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Accessory => "Accessories",
            ItemCategory::Armour => "Armour",
            ItemCategory::Food => "Food",
            ItemCategory::Key => "Keys",
            ItemCategory::Material => "Materials",
            ItemCategory::Potion => "Potions",
            ItemCategory::Scroll => "Scrolls",
            ItemCategory::Weapon => "Weapons",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WearSlot {
    Head,
    Body,
    Legs,
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    Head,
    Body,
    Legs,
    Feet,
    MainHand,
    OffHand,
    Accessory1,
    Accessory2,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 8] = [
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Legs,
        EquipSlot::Feet,
        EquipSlot::MainHand,
        EquipSlot::OffHand,
        EquipSlot::Accessory1,
        EquipSlot::Accessory2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::MainHand => "Main hand",
            EquipSlot::OffHand => "Off hand",
            EquipSlot::Accessory1 => "Accessory",
            EquipSlot::Accessory2 => "Accessory",
        }
    }
}

impl From<WearSlot> for EquipSlot {
    fn from(w: WearSlot) -> Self {
        match w {
            WearSlot::Head => EquipSlot::Head,
            WearSlot::Body => EquipSlot::Body,
            WearSlot::Legs => EquipSlot::Legs,
            WearSlot::Feet => EquipSlot::Feet,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Image asset name, resolved by the UI's asset store.
    pub image: String,
    pub sprite: char,
    pub category: ItemCategory,
    /// Wear slot for armour; ignored for other categories.
    pub slot: Option<WearSlot>,
    pub value: u64,
    pub weight: u32,
    pub damage: Option<i32>,
    pub attack: Option<i32>,
    pub defence: Option<i32>,
    pub speed: Option<i32>,
    pub sustenance: Option<i32>,
}

impl Item {
    /// A bare item; the id is assigned when it enters a `Backpack`.
    pub fn new(name: impl Into<String>, category: ItemCategory, sprite: char) -> Self {
        Self {
            id: ItemId(0),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            sprite,
            category,
            slot: None,
            value: 0,
            weight: 0,
            damage: None,
            attack: None,
            defence: None,
            speed: None,
            sustenance: None,
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_image(mut self, name: impl Into<String>) -> Self {
        self.image = name.into();
        self
    }

    pub fn with_slot(mut self, slot: WearSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_damage(mut self, v: i32) -> Self {
        self.damage = Some(v);
        self
    }

    pub fn with_attack(mut self, v: i32) -> Self {
        self.attack = Some(v);
        self
    }

    pub fn with_defence(mut self, v: i32) -> Self {
        self.defence = Some(v);
        self
    }

    pub fn with_speed(mut self, v: i32) -> Self {
        self.speed = Some(v);
        self
    }

    pub fn with_sustenance(mut self, v: i32) -> Self {
        self.sustenance = Some(v);
        self
    }
}
