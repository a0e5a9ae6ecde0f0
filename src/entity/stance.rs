//! Arena stance
//!
//! Every living contestant is in exactly one stance, recomputed on each
//! day/night tick from health, injuries and armament. Stance decides
//! movement, encounter aggression and the default action.

use serde::{Deserialize, Serialize};

use super::contestant::{Contestant, TRAIT_BLOODTHIRSTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stance {
    /// Armed, healthy and willing: hunts other contestants
    Aggressive,
    /// Forages and rests
    #[default]
    Defensive,
    /// Wounded or bleeding: always on the move, hides
    Evasive,
}

impl Stance {
    pub fn assess(contestant: &Contestant) -> Stance {
        if contestant.health < 40 || contestant.injuries.bleeding {
            return Stance::Evasive;
        }

        let eager = contestant.is_career || contestant.has_trait(TRAIT_BLOODTHIRSTY);
        if contestant.is_armed() && contestant.health > 70 && eager {
            Stance::Aggressive
        } else {
            Stance::Defensive
        }
    }

    /// Evasive contestants keep moving every tick
    pub fn always_moves(&self) -> bool {
        matches!(self, Stance::Evasive)
    }
}
