//! Demo screen: the element tree, per-frame stat refresh and key handling.

use core_grid::BorderStyle;
use core_input::NavKey;
use core_inventory::{EquipSlot, Inventory, ItemCategory, Stats};
use core_ui::{
    Anchor, AssetStore, ImageData, NodeId, Placement, Size, TextAlign, TextPolicy, Ui, UiError,
    format_money, health_bar,
};
use tracing::{debug, warn};

use crate::demo::{PLAYER_NAME, Player};

const HEALTH_WIDTH: usize = 39;
/// Largest image an equipment slot frame (9x5) can show.
const SLOT_IMAGE_MAX: Size = Size::new(7, 3);

/// Equipment slots on the statistics tab: slot, caption, frame offset
/// inside the equipment box, image shown while the slot is empty.
const SLOT_LAYOUT: [(EquipSlot, &str, i32, i32, &str); 8] = [
    (EquipSlot::Head, "Head:", 5, 6, "items/armour/head/head.txt"),
    (EquipSlot::Body, "Body:", 15, 6, "items/armour/body/body.txt"),
    (EquipSlot::Legs, "Legs:", 25, 6, "items/armour/legs/legs.txt"),
    (EquipSlot::Feet, "Feet:", 35, 6, "items/armour/feet/feet.txt"),
    (EquipSlot::MainHand, "Main:", 5, 13, "items/weapons/leftHand.txt"),
    (EquipSlot::OffHand, "Off-:", 15, 13, "items/weapons/rightHand.txt"),
    (EquipSlot::Accessory1, "Acc1:", 25, 13, "items/blankItem.txt"),
    (EquipSlot::Accessory2, "Acc2:", 35, 13, "items/blankItem.txt"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

struct StatLabels {
    attack: NodeId,
    defence: NodeId,
    speed: NodeId,
    satiety: NodeId,
    weight: NodeId,
    money: NodeId,
    bar: NodeId,
    health: NodeId,
}

struct SlotView {
    slot: EquipSlot,
    frame: NodeId,
    image: NodeId,
    empty_image: &'static str,
    shown: String,
}

pub struct Screen {
    pub ui: Ui,
    pub window: NodeId,
    pub items: NodeId,
    pub settings: NodeId,
    labels: StatLabels,
    slots: Vec<SlotView>,
}

fn label(
    ui: &mut Ui,
    owner: NodeId,
    text: &str,
    width: i32,
    align: TextAlign,
    placement: Placement,
) -> Result<NodeId, UiError> {
    ui.add_label(owner, text, width, align, TextPolicy::Truncate, placement)
}

impl Screen {
    pub fn build(width: u16, height: u16, player: &Player, assets: &AssetStore) -> Result<Self, UiError> {
        let mut ui = Ui::new(width, height);
        let root = ui.root();
        let window = ui.add_window(
            root,
            BorderStyle::SingleRound,
            Size::new(58, 11),
            14,
            Placement::new(Anchor::TopCenter, 0, 10).z(1),
        )?;

        let screen = ui.add_box(
            root,
            BorderStyle::SingleSharp,
            Size::new(120, 31),
            Placement::new(Anchor::TopLeft, 3, 1),
        )?;
        let left = ui.add_box(screen, BorderStyle::SingleSharp, Size::new(13, 27), Placement::at(Anchor::TopLeft))?;
        let right = ui.add_box(screen, BorderStyle::SingleSharp, Size::new(13, 27), Placement::at(Anchor::TopRight))?;
        let bottom = ui.add_box(
            screen,
            BorderStyle::SingleSharp,
            Size::new(120, 5),
            Placement::at(Anchor::BottomCenter),
        )?;
        ui.add_image(left, assets.load("UI/LeftTitle.txt"), Placement::new(Anchor::TopCenter, 0, 1))?;
        ui.add_image(right, assets.load("UI/RightTitle.txt"), Placement::new(Anchor::TopCenter, 0, 1))?;
        label(
            &mut ui,
            bottom,
            "This will be a console someday",
            116,
            TextAlign::Center,
            Placement::at(Anchor::Center),
        )?;

        let main = ui.add_tab(window, "Main", Size::new(58, 11))?;
        for (text, anchor) in [("Back", Anchor::TopCenter), ("Quit", Anchor::BottomCenter)] {
            let button = ui.add_button(main, BorderStyle::DoubleSharp, Size::new(16, 3), Placement::new(anchor, 0, 2))?;
            label(&mut ui, button, text, 14, TextAlign::Center, Placement::at(Anchor::Center))?;
        }

        let backpack = ui.add_tab(window, "Backpack", Size::new(70, 17))?;
        let items = ui.add_item_list(
            backpack,
            BorderStyle::SingleRound,
            Size::new(26, 17),
            Size::new(17, 3),
            Placement::new(Anchor::CenterLeft, 16, 0),
            &player.backpack,
            assets,
        )?;
        for category in ItemCategory::ALL {
            ui.add_item_tab(items, category.label())?;
        }

        let stats_tab = ui.add_tab(window, "Statistics", Size::new(70, 19))?;
        let (labels, equip) = build_stats(&mut ui, stats_tab)?;
        let mut slots = Vec::with_capacity(SLOT_LAYOUT.len());
        for (slot, caption, x, y, empty_image) in SLOT_LAYOUT {
            label(&mut ui, equip, caption, 5, TextAlign::Center, Placement::new(Anchor::TopLeft, x + 2, y - 1))?;
            let frame = ui.add_box(equip, BorderStyle::SingleRound, Size::new(9, 5), Placement::new(Anchor::TopLeft, x, y))?;
            let image = ui.add_image(frame, slot_image(assets, empty_image), Placement::at(Anchor::Center))?;
            slots.push(SlotView {
                slot,
                frame,
                image,
                empty_image,
                shown: empty_image.to_string(),
            });
        }

        let settings_tab = ui.add_tab(window, "Settings", Size::new(68, 17))?;
        let settings = ui.add_settings_list(
            settings_tab,
            BorderStyle::SingleRound,
            Size::new(52, 17),
            Size::new(17, 5),
            Placement::at(Anchor::CenterRight).z(-1),
        )?;
        ui.add_settings_tab(settings, "General")?;
        let video = ui.add_settings_tab(settings, "Video")?;
        ui.add_label(
            video,
            "Window Mode",
            11,
            TextAlign::Center,
            TextPolicy::Fixed,
            Placement::new(Anchor::TopCenter, 0, 2),
        )?;
        ui.add_selection_box(
            video,
            "Borderless Windowed",
            BorderStyle::SingleSharp,
            Size::new(36, 3),
            Placement::new(Anchor::TopCenter, 0, 3),
        )?;
        if cfg!(windows) {
            ui.add_label(
                video,
                "Font Size",
                11,
                TextAlign::Center,
                TextPolicy::Fixed,
                Placement::new(Anchor::TopCenter, 0, 7),
            )?;
            ui.add_selection_box(
                video,
                "32pt",
                BorderStyle::SingleSharp,
                Size::new(28, 3),
                Placement::new(Anchor::TopCenter, 0, 8),
            )?;
        }
        ui.add_settings_tab(settings, "Audio")?;
        ui.add_settings_tab(settings, "Input")?;

        ui.init_tabs(window)?;
        ui.init_tabs(settings)?;
        debug!(target: "runtime", nodes = ui.len(), "screen_built");

        let mut screen = Self {
            ui,
            window,
            items,
            settings,
            labels,
            slots,
        };
        screen.refresh(player, assets)?;
        Ok(screen)
    }

    /// Rewrite every collaborator-derived label and swap slot images to
    /// match what is equipped.
    pub fn refresh(&mut self, player: &Player, assets: &AssetStore) -> Result<(), UiError> {
        let stats = &player.stats;
        let inv = &player.backpack;
        let l = &self.labels;
        let texts = [
            (l.attack, format!("- Attack: {}", stats.attack())),
            (l.defence, format!("- Defence: {}", stats.defence())),
            (l.speed, format!("- Speed: {}", stats.speed())),
            (l.satiety, format!("- Satiety: {}/100", stats.satiety())),
            (l.weight, format!("- Weight: {}/{}", inv.weight(), inv.capacity())),
            (l.money, format!("{}☼", format_money(inv.money()))),
            (l.bar, health_bar(stats.health(), stats.max_health(), HEALTH_WIDTH)),
            (l.health, format!("{}/{}", stats.health(), stats.max_health())),
        ];
        for (id, text) in texts {
            self.ui.set_label_text(id, &text)?;
        }

        for view in &mut self.slots {
            let wanted = inv
                .equipped(view.slot)
                .map(|item| item.image.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(view.empty_image);
            if wanted == view.shown {
                continue;
            }
            self.ui.destroy(view.image)?;
            view.image = self
                .ui
                .add_image(view.frame, slot_image(assets, wanted), Placement::at(Anchor::Center))?;
            view.shown = wanted.to_string();
            debug!(target: "runtime", slot = ?view.slot, image = wanted, "slot_image_changed");
        }
        Ok(())
    }

    pub fn handle(&mut self, key: NavKey, player: &mut Player, assets: &AssetStore) -> Result<Flow, UiError> {
        match key {
            NavKey::Left => self.ui.prev_tab(self.window)?,
            NavKey::Right => self.ui.next_tab(self.window)?,
            NavKey::Up => self.ui.prev_category(self.items, &player.backpack, assets)?,
            NavKey::Down => self.ui.next_category(self.items, &player.backpack, assets)?,
            NavKey::Prev => self.ui.prev_item(self.items, assets)?,
            NavKey::Next => self.ui.next_item(self.items, assets)?,
            NavKey::Confirm => match self.ui.toggle_equip(self.items, &mut player.backpack) {
                Ok(_) => {}
                Err(UiError::Inventory(e)) => {
                    warn!(target: "runtime", error = %e, "equip_refused");
                }
                Err(e) => return Err(e),
            },
            NavKey::SectionPrev => self.ui.prev_tab(self.settings)?,
            NavKey::SectionNext => self.ui.next_tab(self.settings)?,
            NavKey::Cancel => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

/// Player summary box and equipment box of the statistics tab. Returns the
/// refreshable labels and the equipment box.
fn build_stats(ui: &mut Ui, tab: NodeId) -> Result<(StatLabels, NodeId), UiError> {
    let stats = ui.add_box(tab, BorderStyle::SingleRound, Size::new(22, 19), Placement::at(Anchor::CenterLeft))?;
    label(ui, stats, PLAYER_NAME, 18, TextAlign::Center, Placement::new(Anchor::TopCenter, 0, 1))?;
    let mut line = |anchor, y| label(ui, stats, "", 18, TextAlign::Left, Placement::new(anchor, 2, y));
    let attack = line(Anchor::TopLeft, 3)?;
    let defence = line(Anchor::TopLeft, 5)?;
    let speed = line(Anchor::TopLeft, 7)?;
    let satiety = line(Anchor::BottomLeft, 2)?;
    let weight = line(Anchor::BottomLeft, 1)?;

    let equip = ui.add_box(
        tab,
        BorderStyle::SingleRound,
        Size::new(49, 19),
        Placement::at(Anchor::CenterRight).z(-1),
    )?;
    let money = label(ui, equip, "", 20, TextAlign::Right, Placement::new(Anchor::TopRight, 2, 1))?;
    ui.add_label(
        equip,
        "Health:",
        7,
        TextAlign::Center,
        TextPolicy::Fixed,
        Placement::new(Anchor::TopCenter, 0, 1),
    )?;
    let health_box = ui.add_box(equip, BorderStyle::SingleRound, Size::new(41, 3), Placement::new(Anchor::TopCenter, 0, 2))?;
    let bar = label(ui, health_box, "", HEALTH_WIDTH as i32, TextAlign::Center, Placement::at(Anchor::Center))?;
    // Drawn over the bar.
    let health = label(
        ui,
        health_box,
        "",
        HEALTH_WIDTH as i32,
        TextAlign::Center,
        Placement::at(Anchor::Center).z(1),
    )?;
    let labels = StatLabels {
        attack,
        defence,
        speed,
        satiety,
        weight,
        money,
        bar,
        health,
    };
    Ok((labels, equip))
}

/// Load a slot image, substituting the empty-slot fallback chain when the
/// asset is too large for the frame.
fn slot_image(assets: &AssetStore, name: &str) -> ImageData {
    let image = assets.load(name);
    if image.width() as i32 > SLOT_IMAGE_MAX.width || image.height() as i32 > SLOT_IMAGE_MAX.height {
        warn!(target: "assets", name, width = image.width(), height = image.height(), "slot_image_too_large");
        return ImageData::builtin_fallback();
    }
    image
}
