//! Arena definitions
//!
//! An arena is immutable for the duration of a tournament. Its climate
//! drives the vitals modifiers applied on every day/night tick.

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};

/// Staging zone every contestant starts in
pub const STAGING_ZONE: &str = "Cornucopia";

/// Environmental character of an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    #[default]
    Temperate,
    /// Fatigue and health drain without a warmth item
    Cold,
    /// Chance of sanity loss every tick
    Toxic,
    /// Thirst drain is doubled
    Desert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub climate: Climate,
    pub mutts: Vec<String>,
    pub events: Vec<String>,
    pub zones: Vec<String>,
    #[serde(default = "default_staging_zone")]
    pub staging_zone: String,
}

fn default_staging_zone() -> String {
    STAGING_ZONE.to_string()
}

impl Arena {
    pub fn has_zone(&self, zone: &str) -> bool {
        self.zones.iter().any(|z| z == zone)
    }

    /// Every list the engine draws from must be non-empty and the staging
    /// zone must be one of the zones
    pub fn validate(&self) -> Result<()> {
        if self.mutts.is_empty() || self.events.is_empty() || self.zones.is_empty() {
            return Err(ArenaError::InvalidCatalog(format!(
                "arena '{}' needs mutts, events and zones",
                self.id
            )));
        }
        if !self.has_zone(&self.staging_zone) {
            return Err(ArenaError::InvalidCatalog(format!(
                "arena '{}' staging zone '{}' is not one of its zones",
                self.id, self.staging_zone
            )));
        }
        Ok(())
    }
}

fn arena(
    id: &str,
    name: &str,
    description: &str,
    climate: Climate,
    mutts: [&str; 3],
    events: [&str; 3],
    zones: [&str; 5],
) -> Arena {
    Arena {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        climate,
        mutts: mutts.iter().map(|s| s.to_string()).collect(),
        events: events.iter().map(|s| s.to_string()).collect(),
        zones: zones.iter().map(|s| s.to_string()).collect(),
        staging_zone: STAGING_ZONE.to_string(),
    }
}

/// The five standard arenas
pub fn standard_arenas() -> Vec<Arena> {
    vec![
        arena(
            "clockwork",
            "The Clockwork Island",
            "A shifting map divided into sectors, each unleashing a different horror at a specific hour.",
            Climate::Temperate,
            ["Tick-Tock Monkeys", "Lightning Birds", "Acid Fog"],
            ["Sector Shift", "Blood Rain", "Tidal Wave"],
            [STAGING_ZONE, "Lightning Tree", "Jungle Sector", "Tidal Beach", "Fog Bank"],
        ),
        arena(
            "frozen",
            "The Frozen Wasteland",
            "Lethal cold and blizzards. Finding shelter and warmth is as important as fighting.",
            Climate::Cold,
            ["Ice Wolves", "Snow Camouflage Snakes", "Frostbite Beetles"],
            ["Blizzard", "Avalanche", "Thin Ice Collapse"],
            [STAGING_ZONE, "Glacier Field", "Ice Caves", "Pine Ridge", "Frozen Lake"],
        ),
        arena(
            "concrete",
            "The Concrete Jungle",
            "An abandoned, decaying metropolis. Verticality and structural collapses are constant threats.",
            Climate::Temperate,
            ["Steel-jawed Rats", "Glass-winged Bats", "Feral Tracker Jackers"],
            ["Building Collapse", "Sewer Flooding", "Live Wire Trap"],
            [STAGING_ZONE, "Collapsed Tower", "Subway Tunnels", "Rooftops", "Flooded Plaza"],
        ),
        arena(
            "toxic",
            "The Toxic Swamps",
            "Hallucinogenic gas and poison risk. The water is mostly undrinkable without purification.",
            Climate::Toxic,
            ["Venomous Toads", "Leech Swarms", "Camouflaged Crocodiles"],
            ["Hallucinogenic Spores", "Methane Explosion", "Quicksand Sinkhole"],
            [STAGING_ZONE, "Mangrove Maze", "Spore Fields", "Black Bog", "Sunken Village"],
        ),
        arena(
            "solar",
            "The Solar Desert",
            "Extreme heat, severe water scarcity, and deadly solar flares. Shade is a premium.",
            Climate::Desert,
            ["Sand Vipers", "Mirage Scorpions", "Burrowing Centipedes"],
            ["Solar Flare", "Sandstorm", "Oasis Mirage"],
            [STAGING_ZONE, "Dune Sea", "Salt Flats", "Red Canyon", "Hidden Oasis"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_arenas_stage_at_cornucopia() {
        for arena in standard_arenas() {
            assert!(arena.has_zone(&arena.staging_zone), "{} lacks staging zone", arena.id);
            assert_eq!(arena.staging_zone, STAGING_ZONE);
        }
    }

    #[test]
    fn test_validate_rejects_foreign_staging_zone() {
        let mut arena = standard_arenas().remove(0);
        assert!(arena.validate().is_ok());
        arena.staging_zone = "Nowhere".to_string();
        assert!(arena.validate().is_err());
    }

    #[test]
    fn test_climates() {
        let arenas = standard_arenas();
        let climate = |id: &str| arenas.iter().find(|a| a.id == id).map(|a| a.climate);
        assert_eq!(climate("frozen"), Some(Climate::Cold));
        assert_eq!(climate("toxic"), Some(Climate::Toxic));
        assert_eq!(climate("solar"), Some(Climate::Desert));
        assert_eq!(climate("clockwork"), Some(Climate::Temperate));
    }
}
