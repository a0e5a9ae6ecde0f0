//! Contestant record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stance::Stance;
use super::vitals::{Injuries, Vitals};
use crate::catalog::{Item, ItemKind};
use crate::core::types::{Attribute, ContestantId, Gender, CAREER_DISTRICTS};

pub const TRAIT_BLOODTHIRSTY: &str = "Bloodthirsty";
pub const TRAIT_PACIFIST: &str = "Pacifist";
pub const TRAIT_HYDROPHILIC: &str = "Hydrophilic";
pub const TRAIT_INSOMNIAC: &str = "Insomniac";
pub const TRAIT_IRON_STOMACH: &str = "Iron Stomach";

/// Attribute ceiling
pub const ATTRIBUTE_MAX: i32 = 10;
/// Health ceiling
pub const HEALTH_MAX: i32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub stealth: i32,
}

impl Attributes {
    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Charisma => self.charisma,
            Attribute::Stealth => self.stealth,
        }
    }

    /// Raise an attribute, clamped to [0, 10]
    pub fn boost(&mut self, attr: Attribute, amount: i32) {
        let slot = match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Charisma => &mut self.charisma,
            Attribute::Stealth => &mut self.stealth,
        };
        *slot = (*slot + amount).clamp(0, ATTRIBUTE_MAX);
    }

    pub fn total(&self) -> i32 {
        Attribute::ALL.iter().map(|a| self.get(*a)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Alive,
    Dead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    pub id: ContestantId,
    pub district: u8,
    pub gender: Gender,
    pub name: String,
    pub is_career: bool,
    pub attributes: Attributes,
    pub traits: Vec<String>,
    pub vitals: Vitals,
    pub injuries: Injuries,
    pub health: i32,
    pub status: Status,
    /// Acquisition order
    pub inventory: Vec<Item>,
    pub stance: Stance,
    /// Affinity toward other contestants; absent means 0
    pub relationships: BTreeMap<ContestantId, i32>,
    pub excitement_rating: i32,
    pub sponsor_trust: i32,
    pub training_score: i32,
    pub kills: u32,
    pub cause_of_death: Option<String>,
    pub day_of_death: Option<u32>,
    pub zone: String,
}

impl Contestant {
    /// A fresh, unrolled contestant standing in `zone`
    pub fn new(id: ContestantId, zone: &str) -> Self {
        Self {
            id,
            district: id.district,
            gender: id.gender,
            name: format!("District {} {}", id.district, id.gender),
            is_career: CAREER_DISTRICTS.contains(&id.district),
            attributes: Attributes::default(),
            traits: Vec::new(),
            vitals: Vitals::default(),
            injuries: Injuries::default(),
            health: HEALTH_MAX,
            status: Status::Alive,
            inventory: Vec::new(),
            stance: Stance::Defensive,
            relationships: BTreeMap::new(),
            excitement_rating: 0,
            sponsor_trust: 50,
            training_score: 0,
            kills: 0,
            cause_of_death: None,
            day_of_death: None,
            zone: zone.to_string(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t == name)
    }

    pub fn relationship(&self, other: ContestantId) -> i32 {
        self.relationships.get(&other).copied().unwrap_or(0)
    }

    pub fn adjust_relationship(&mut self, other: ContestantId, delta: i32) {
        *self.relationships.entry(other).or_insert(0) += delta;
    }

    /// Lose health, never dropping below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(HEALTH_MAX);
    }

    /// Mark dead exactly once; later calls leave the record untouched.
    ///
    /// Returns true when this call caused the death.
    pub fn mark_dead(&mut self, cause: String, day: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.status = Status::Dead;
        self.health = 0;
        self.cause_of_death = Some(cause);
        self.day_of_death = Some(day);
        true
    }

    /// Index of the wielded weapon: highest value, earliest on ties
    fn equipped_index(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (idx, item) in self.inventory.iter().enumerate() {
            if item.kind != ItemKind::Weapon {
                continue;
            }
            if best.map_or(true, |(_, value)| item.value > value) {
                best = Some((idx, item.value));
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.equipped_index().map(|idx| &self.inventory[idx])
    }

    pub fn equipped_weapon_mut(&mut self) -> Option<&mut Item> {
        let idx = self.equipped_index()?;
        Some(&mut self.inventory[idx])
    }

    pub fn is_armed(&self) -> bool {
        self.inventory.iter().any(|i| i.kind == ItemKind::Weapon)
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.inventory.iter().any(|i| i.id == id)
    }

    pub fn has_warmth(&self) -> bool {
        self.inventory.iter().any(|i| i.warmth)
    }

    /// Remove the earliest-acquired item of `kind`
    pub fn take_first(&mut self, kind: ItemKind) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.kind == kind)?;
        Some(self.inventory.remove(idx))
    }

    /// Remove the earliest-acquired item with `id`
    pub fn take_item(&mut self, id: &str) -> Option<Item> {
        let idx = self.inventory.iter().position(|i| i.id == id)?;
        Some(self.inventory.remove(idx))
    }

    /// Drop weapons whose durability ran out
    pub fn purge_broken(&mut self) -> Vec<Item> {
        let (broken, kept): (Vec<Item>, Vec<Item>) = self.inventory.drain(..).partition(Item::is_broken);
        self.inventory = kept;
        broken
    }

    /// Drop food that has rotted
    pub fn purge_spoiled(&mut self) -> Vec<Item> {
        let (spoiled, kept): (Vec<Item>, Vec<Item>) = self.inventory.drain(..).partition(Item::is_spoiled);
        self.inventory = kept;
        spoiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn contestant() -> Contestant {
        Contestant::new(ContestantId::new(3, Gender::Female), "Cornucopia")
    }

    #[test]
    fn test_new_contestant_defaults() {
        let c = contestant();
        assert_eq!(c.name, "District 3 Female");
        assert!(!c.is_career);
        assert_eq!(c.health, 100);
        assert_eq!(c.vitals.sanity, 100);
        assert_eq!(c.stance, Stance::Defensive);
        assert!(Contestant::new(ContestantId::new(4, Gender::Male), "Cornucopia").is_career);
    }

    #[test]
    fn test_boost_clamps_at_ten() {
        let mut attrs = Attributes {
            strength: 9,
            ..Attributes::default()
        };
        attrs.boost(Attribute::Strength, 3);
        assert_eq!(attrs.strength, 10);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut c = contestant();
        c.take_damage(150);
        assert_eq!(c.health, 0);
        assert!(c.is_alive());
    }

    #[test]
    fn test_death_is_stamped_once() {
        let mut c = contestant();
        assert!(c.mark_dead("Killed by District 1 Male".into(), 2));
        assert!(!c.mark_dead("Died to environment".into(), 3));
        assert_eq!(c.status, Status::Dead);
        assert_eq!(c.health, 0);
        assert_eq!(c.cause_of_death.as_deref(), Some("Killed by District 1 Male"));
        assert_eq!(c.day_of_death, Some(2));
    }

    #[test]
    fn test_missing_relationship_is_zero() {
        let mut c = contestant();
        let other = ContestantId::new(9, Gender::Male);
        assert_eq!(c.relationship(other), 0);
        c.adjust_relationship(other, -20);
        assert_eq!(c.relationship(other), -20);
    }

    #[test]
    fn test_equipped_weapon_prefers_value() {
        let catalog = Catalog::standard();
        let mut c = contestant();
        c.inventory.push(catalog.item("knife").unwrap().clone());
        c.inventory.push(catalog.item("bread").unwrap().clone());
        c.inventory.push(catalog.item("bow").unwrap().clone());
        assert_eq!(c.equipped_weapon().map(|i| i.id.as_str()), Some("bow"));
    }

    #[test]
    fn test_purge_broken_keeps_order() {
        let catalog = Catalog::standard();
        let mut c = contestant();
        let mut knife = catalog.item("knife").unwrap().clone();
        knife.durability = Some(0);
        c.inventory.push(catalog.item("rope").unwrap().clone());
        c.inventory.push(knife);
        c.inventory.push(catalog.item("water").unwrap().clone());
        let broken = c.purge_broken();
        assert_eq!(broken.len(), 1);
        let ids: Vec<_> = c.inventory.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["rope", "water"]);
    }
}
