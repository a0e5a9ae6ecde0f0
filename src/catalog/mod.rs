//! Static catalogs consumed by the generator and the engine
//!
//! A [`Catalog`] is built once (the standard data or a TOML file) and
//! injected into the generator and engine as immutable configuration.
//! Validation guarantees every list the engine draws from is non-empty.

pub mod arena;
pub mod items;
pub mod narration;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};
use crate::simulation::constants::SPONSOR_MIN_ITEM_VALUE;

pub use arena::{Arena, Climate, STAGING_ZONE};
pub use items::{Item, ItemKind, WeaponClass};
pub use narration::{render, InterviewScenario, KillNarration};

pub fn standard_traits() -> Vec<String> {
    [
        "Hydrophilic",
        "Insomniac",
        "Paranoid",
        "Charismatic",
        "Clumsy",
        "Eagle-Eyed",
        "Iron Stomach",
        "Light Sleeper",
        "Bloodthirsty",
        "Pacifist",
        "Pyromaniac",
        "Nimble",
        "Brute",
        "Strategist",
        "Tracker",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Read-only tables of arenas, traits, items and narrative templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub arenas: Vec<Arena>,
    pub traits: Vec<String>,
    pub items: Vec<Item>,
    #[serde(default = "KillNarration::standard")]
    pub kill_narration: KillNarration,
    #[serde(default = "narration::standard_interviews")]
    pub interviews: Vec<InterviewScenario>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            arenas: arena::standard_arenas(),
            traits: standard_traits(),
            items: items::standard_items(),
            kill_narration: KillNarration::standard(),
            interviews: narration::standard_interviews(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject catalogs the engine could draw an empty selection from
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ArenaError::InvalidCatalog(msg));

        if self.arenas.is_empty() {
            return invalid("no arenas".into());
        }
        if self.traits.len() < 3 {
            return invalid("at least 3 traits are required".into());
        }
        for arena in &self.arenas {
            arena.validate()?;
        }
        for kind in [ItemKind::Weapon, ItemKind::Food, ItemKind::Water] {
            if !self.items.iter().any(|i| i.is(kind)) {
                return invalid(format!("no {:?} items", kind));
            }
        }
        if self.sponsor_items().is_empty() {
            return invalid(format!("no items worth at least {}", SPONSOR_MIN_ITEM_VALUE));
        }
        if self.kill_narration.fallback().is_empty() {
            return invalid("kill narration needs unarmed phrases".into());
        }
        if self.interviews.is_empty() {
            return invalid("no interview scenarios".into());
        }
        Ok(())
    }

    pub fn arena(&self, id: &str) -> Result<&Arena> {
        self.arenas
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ArenaError::UnknownArena(id.to_string()))
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Food and water items, the forage pool
    pub fn provisions(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| i.is(ItemKind::Food) || i.is(ItemKind::Water))
            .cloned()
            .collect()
    }

    /// Items valuable enough to arrive as sponsor gifts
    pub fn sponsor_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| i.value >= SPONSOR_MIN_ITEM_VALUE)
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
