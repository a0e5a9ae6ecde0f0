//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ArenaError;

/// Number of origin groups (districts) sending contestants
pub const DISTRICT_COUNT: u8 = 12;

/// Origin groups whose contestants are trained careers
pub const CAREER_DISTRICTS: [u8; 3] = [1, 2, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Generation order within a district
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Unique identifier for a contestant: one per (district, gender) slot.
///
/// Serialized as the slug form `d{district}-{gender}` so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContestantId {
    pub district: u8,
    pub gender: Gender,
}

impl ContestantId {
    pub fn new(district: u8, gender: Gender) -> Self {
        Self { district, gender }
    }
}

impl fmt::Display for ContestantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}-{}", self.district, self.gender.slug())
    }
}

impl From<ContestantId> for String {
    fn from(id: ContestantId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ContestantId {
    type Error = ArenaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for ContestantId {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ArenaError::UnknownContestant(s.to_string());
        let rest = s.strip_prefix('d').ok_or_else(unknown)?;
        let (district, gender) = rest.split_once('-').ok_or_else(unknown)?;
        let district: u8 = district.parse().map_err(|_| unknown())?;
        if !(1..=DISTRICT_COUNT).contains(&district) {
            return Err(unknown());
        }
        let gender = match gender {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => return Err(unknown()),
        };
        Ok(Self { district, gender })
    }
}

/// The five trainable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    Stealth,
    Charisma,
}

impl Attribute {
    /// Training draw order
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::Stealth,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Intelligence => "intelligence",
            Self::Stealth => "stealth",
            Self::Charisma => "charisma",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_slug_round_trip() {
        let id = ContestantId::new(1, Gender::Male);
        assert_eq!(id.to_string(), "d1-male");
        assert_eq!("d12-female".parse::<ContestantId>().unwrap(), ContestantId::new(12, Gender::Female));
    }

    #[test]
    fn test_id_rejects_bad_slugs() {
        assert!("d13-male".parse::<ContestantId>().is_err());
        assert!("d0-female".parse::<ContestantId>().is_err());
        assert!("x1-male".parse::<ContestantId>().is_err());
        assert!("d1-other".parse::<ContestantId>().is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = ContestantId::new(7, Gender::Female);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"d7-female\"");
        let back: ContestantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
