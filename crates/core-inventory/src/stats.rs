//! Player statistics derived from a class's base attributes.

use crate::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerClass {
    Fighter,
    Thief,
    Mage,
    Acrobat,
}

/// Base attribute with additive and multiplicative modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    base: f32,
    pub add: f32,
    pub mult: f32,
}

impl Attribute {
    pub fn new(base: f32) -> Self {
        Self {
            base,
            add: 0.0,
            mult: 1.0,
        }
    }

    pub fn net(&self) -> f32 {
        self.base * self.mult + self.add
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub constitution: Attribute,
    pub strength: Attribute,
    pub dexterity: Attribute,
    pub agility: Attribute,
}

impl Attributes {
    fn of(class: PlayerClass) -> Self {
        let (con, strength, dex, agi) = match class {
            PlayerClass::Fighter => (15.0, 13.0, 8.0, 8.0),
            PlayerClass::Thief => (8.0, 6.0, 13.0, 10.0),
            PlayerClass::Mage => (12.0, 8.0, 6.0, 10.0),
            PlayerClass::Acrobat => (12.0, 13.0, 12.0, 15.0),
        };
        Self {
            constitution: Attribute::new(con),
            strength: Attribute::new(strength),
            dexterity: Attribute::new(dex),
            agility: Attribute::new(agi),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub attributes: Attributes,
    health: i32,
    max_health: i32,
    attack: i32,
    defence: i32,
    speed: i32,
    satiety: i32,
}

impl PlayerStats {
    pub fn new(class: PlayerClass) -> Self {
        let a = Attributes::of(class);
        let con = a.constitution.net();
        let strength = a.strength.net();
        let agi = a.agility.net();
        let max_health = con as i32 * 10;
        Self {
            attributes: a,
            health: max_health,
            max_health,
            attack: strength.max(agi) as i32,
            defence: strength.max(con) as i32,
            speed: agi as i32,
            satiety: 100,
        }
    }

    /// Carry capacity for a backpack: two thirds of 100x strength, rounded.
    pub fn carry_capacity(&self) -> u32 {
        (100.0 * self.attributes.strength.net() * (2.0 / 3.0)).round() as u32
    }

    /// Reduce health, never below zero.
    pub fn damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount.max(0)).min(self.max_health);
    }
}

impl Stats for PlayerStats {
    fn health(&self) -> i32 {
        self.health
    }
    fn max_health(&self) -> i32 {
        self.max_health
    }
    fn attack(&self) -> i32 {
        self.attack
    }
    fn defence(&self) -> i32 {
        self.defence
    }
    fn speed(&self) -> i32 {
        self.speed
    }
    fn satiety(&self) -> i32 {
        self.satiety
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_derivation() {
        let s = PlayerStats::new(PlayerClass::Fighter);
        assert_eq!(s.max_health(), 150);
        assert_eq!(s.attack(), 13);
        assert_eq!(s.defence(), 15);
        assert_eq!(s.speed(), 8);
        assert_eq!(s.carry_capacity(), 867);
    }

    #[test]
    fn damage_and_heal_clamp() {
        let mut s = PlayerStats::new(PlayerClass::Thief);
        s.damage(500);
        assert_eq!(s.health(), 0);
        s.heal(1000);
        assert_eq!(s.health(), s.max_health());
    }
}
