//! Item catalog
//!
//! Weapons carry a durability and a weapon class (used to pick kill
//! narration); food carries spoilage counted in day/night ticks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Food,
    Water,
    Medical,
    Utility,
}

/// Narration category for kills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeaponClass {
    Blade,
    Ranged,
    Blunt,
    Polearm,
    /// Fallback for bare hands and unclassified weapons
    #[default]
    Unarmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Sponsor and loot weight; weapons add value/10 to combat power
    pub value: i32,
    /// Weapons only; removed from inventory at <= 0
    #[serde(default)]
    pub durability: Option<i32>,
    /// Food only; ticks until the item rots
    #[serde(default)]
    pub spoilage: Option<i32>,
    #[serde(default)]
    pub weapon_class: Option<WeaponClass>,
    /// Protects against cold-arena exposure
    #[serde(default)]
    pub warmth: bool,
}

impl Item {
    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }

    pub fn is_broken(&self) -> bool {
        self.kind == ItemKind::Weapon && self.durability.is_some_and(|d| d <= 0)
    }

    pub fn is_spoiled(&self) -> bool {
        self.kind == ItemKind::Food && self.spoilage.is_some_and(|s| s <= 0)
    }

    /// Combat power contributed when wielded
    pub fn combat_bonus(&self) -> i32 {
        if self.kind == ItemKind::Weapon {
            self.value / 10
        } else {
            0
        }
    }

    pub fn class(&self) -> WeaponClass {
        self.weapon_class.unwrap_or_default()
    }
}

fn weapon(id: &str, name: &str, value: i32, durability: i32, class: WeaponClass) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Weapon,
        value,
        durability: Some(durability),
        spoilage: None,
        weapon_class: Some(class),
        warmth: false,
    }
}

fn supply(id: &str, name: &str, kind: ItemKind, value: i32) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        value,
        durability: None,
        spoilage: None,
        weapon_class: None,
        warmth: false,
    }
}

pub fn standard_items() -> Vec<Item> {
    vec![
        weapon("sword", "Sword", 50, 60, WeaponClass::Blade),
        weapon("bow", "Bow and Arrows", 60, 50, WeaponClass::Ranged),
        weapon("axe", "Axe", 45, 70, WeaponClass::Blade),
        weapon("knife", "Throwing Knives", 30, 40, WeaponClass::Blade),
        weapon("spear", "Spear", 40, 50, WeaponClass::Polearm),
        weapon("mace", "Mace", 45, 80, WeaponClass::Blunt),
        supply("water", "Water Bottle", ItemKind::Water, 20),
        Item {
            spoilage: Some(6),
            ..supply("bread", "Loaf of Bread", ItemKind::Food, 15)
        },
        Item {
            spoilage: Some(3),
            ..supply("berries", "Foraged Berries", ItemKind::Food, 5)
        },
        supply("medkit", "First Aid Kit", ItemKind::Medical, 80),
        supply("ointment", "Burn Ointment", ItemKind::Medical, 40),
        supply("rope", "Rope", ItemKind::Utility, 10),
        supply("wire", "Wire", ItemKind::Utility, 15),
        Item {
            warmth: true,
            ..supply("matches", "Matches", ItemKind::Utility, 25)
        },
        supply("backpack", "Backpack", ItemKind::Utility, 30),
        Item {
            warmth: true,
            ..supply("sleeping_bag", "Sleeping Bag", ItemKind::Utility, 35)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_bonus_is_tenth_of_value() {
        let items = standard_items();
        let bow = items.iter().find(|i| i.id == "bow").unwrap();
        assert_eq!(bow.combat_bonus(), 6);
        let bread = items.iter().find(|i| i.id == "bread").unwrap();
        assert_eq!(bread.combat_bonus(), 0);
    }

    #[test]
    fn test_broken_and_spoiled() {
        let mut knife = weapon("knife", "Knife", 30, 10, WeaponClass::Blade);
        assert!(!knife.is_broken());
        knife.durability = Some(0);
        assert!(knife.is_broken());

        let mut berries = Item {
            spoilage: Some(1),
            ..supply("berries", "Berries", ItemKind::Food, 5)
        };
        assert!(!berries.is_spoiled());
        berries.spoilage = Some(0);
        assert!(berries.is_spoiled());
    }

    #[test]
    fn test_only_weapons_have_durability() {
        for item in standard_items() {
            assert_eq!(item.durability.is_some(), item.kind == ItemKind::Weapon, "{}", item.id);
            if item.spoilage.is_some() {
                assert_eq!(item.kind, ItemKind::Food);
            }
        }
    }
}
