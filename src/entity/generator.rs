//! Roster generation
//!
//! Contestants are rolled district by district, male before female, from a
//! single RNG stream. The iteration order is part of the contract: it fixes
//! which draws land on which contestant.

use tracing::debug;

use super::contestant::Contestant;
use crate::core::rng::DeterministicRng;
use crate::core::types::{Attribute, ContestantId, Gender, DISTRICT_COUNT};

/// Number of contestants in every tournament
pub const ROSTER_SIZE: usize = DISTRICT_COUNT as usize * Gender::ALL.len();

/// Build the 24-contestant roster for `seed`.
///
/// `traits` must hold at least three entries (guaranteed by catalog
/// validation); every contestant starts in `staging_zone`.
pub fn generate(seed: &str, traits: &[String], staging_zone: &str) -> Vec<Contestant> {
    let mut rng = DeterministicRng::new(seed);
    let mut roster = Vec::with_capacity(ROSTER_SIZE);

    for district in 1..=DISTRICT_COUNT {
        for gender in Gender::ALL {
            let mut contestant = Contestant::new(ContestantId::new(district, gender), staging_zone);
            roll_attributes(&mut contestant, &mut rng);
            contestant.traits = roll_traits(traits, &mut rng);
            roster.push(contestant);
        }
    }

    debug!(seed, contestants = roster.len(), "generated roster");
    roster
}

fn roll_attributes(contestant: &mut Contestant, rng: &mut DeterministicRng) {
    let attrs = &mut contestant.attributes;
    attrs.strength = rng.next_int(3, 7);
    attrs.agility = rng.next_int(3, 7);
    attrs.intelligence = rng.next_int(3, 7);
    attrs.charisma = rng.next_int(3, 7);
    attrs.stealth = rng.next_int(3, 7);

    // District bonuses; boost() applies the cap of 10
    if contestant.is_career {
        attrs.boost(Attribute::Strength, rng.next_int(1, 3));
        attrs.boost(Attribute::Agility, rng.next_int(1, 3));
    }
    match contestant.district {
        3 => attrs.boost(Attribute::Intelligence, rng.next_int(2, 4)),
        7 => attrs.boost(Attribute::Strength, rng.next_int(1, 3)),
        11 | 12 => {
            attrs.boost(Attribute::Stealth, rng.next_int(2, 4));
            attrs.boost(Attribute::Agility, rng.next_int(1, 2));
        }
        _ => {}
    }
}

/// Draw 1-3 distinct traits without replacement
fn roll_traits(catalog: &[String], rng: &mut DeterministicRng) -> Vec<String> {
    let count = rng.next_int(1, 3) as usize;
    let mut traits: Vec<String> = Vec::with_capacity(count);
    while traits.len() < count {
        let candidate = rng.pick(catalog);
        if !traits.contains(candidate) {
            traits.push(candidate.clone());
        }
    }
    traits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_traits, STAGING_ZONE};
    use crate::entity::contestant::Attributes;

    fn roster(seed: &str) -> Vec<Contestant> {
        generate(seed, &standard_traits(), STAGING_ZONE)
    }

    #[test]
    fn test_roster_order_and_size() {
        let roster = roster("order");
        assert_eq!(roster.len(), ROSTER_SIZE);
        assert_eq!(roster[0].id.to_string(), "d1-male");
        assert_eq!(roster[1].id.to_string(), "d1-female");
        assert_eq!(roster[23].id.to_string(), "d12-female");
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(roster("TEST01"), roster("TEST01"));
        assert_ne!(roster("TEST01"), roster("TEST02"));
    }

    #[test]
    fn test_reference_attributes() {
        let roster = roster("TEST01");
        let first = &roster[0];
        assert_eq!(first.id.to_string(), "d1-male");
        assert_eq!(
            first.attributes,
            Attributes {
                strength: 7,
                agility: 5,
                intelligence: 4,
                charisma: 4,
                stealth: 3,
            }
        );
    }

    #[test]
    fn test_attributes_and_traits_in_range() {
        for contestant in roster("ranges") {
            for attr in Attribute::ALL {
                let value = contestant.attributes.get(attr);
                assert!((3..=10).contains(&value), "{} {:?}={}", contestant.id, attr, value);
            }
            assert!((1..=3).contains(&contestant.traits.len()));
            let mut unique = contestant.traits.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), contestant.traits.len());
        }
    }

    #[test]
    fn test_initial_state() {
        for contestant in roster("initial") {
            assert_eq!(contestant.zone, STAGING_ZONE);
            assert!(contestant.inventory.is_empty());
            assert_eq!(contestant.kills, 0);
            assert_eq!(contestant.vitals.hunger, 0);
            assert_eq!(contestant.vitals.sanity, 100);
            assert!(contestant.relationships.is_empty());
            assert_eq!(contestant.is_career, [1, 2, 4].contains(&contestant.district));
        }
    }
}
