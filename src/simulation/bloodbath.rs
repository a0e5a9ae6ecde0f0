//! The opening scramble at the Cornucopia

use tracing::debug;

use super::constants::{
    FIGHT_CHANCE_BASE, FIGHT_CHANCE_BLOODTHIRSTY, FIGHT_CHANCE_CAREER, FIGHT_CHANCE_PACIFIST,
    FIGHT_CHANCE_STRONG, RUNNER_FLEE_EMPTY, STRONG_THRESHOLD,
};
use super::engine::Engine;
use super::state::Phase;
use super::text;
use crate::catalog::render;
use crate::entity::contestant::{TRAIT_BLOODTHIRSTY, TRAIT_PACIFIST};
use crate::entity::Contestant;

/// Probability that `contestant` stays to fight at the Cornucopia.
///
/// Not clamped: a career Bloodthirsty brute scores 1.2 and always fights, a
/// Pacifist with nothing else going for them scores 0.0 and always runs.
pub fn fight_chance(contestant: &Contestant) -> f64 {
    let mut chance = FIGHT_CHANCE_BASE;
    if contestant.is_career {
        chance += FIGHT_CHANCE_CAREER;
    }
    if contestant.attributes.strength > STRONG_THRESHOLD {
        chance += FIGHT_CHANCE_STRONG;
    }
    if contestant.has_trait(TRAIT_BLOODTHIRSTY) {
        chance += FIGHT_CHANCE_BLOODTHIRSTY;
    }
    if contestant.has_trait(TRAIT_PACIFIST) {
        chance += FIGHT_CHANCE_PACIFIST;
    }
    chance
}

impl Engine {
    pub(super) fn start_bloodbath(&mut self) {
        self.state.phase = Phase::Bloodbath;
        self.state.day = 1;
        debug!("games started");
    }

    pub(super) fn resolve_bloodbath(&mut self) {
        self.state.phase = Phase::Bloodbath;
        self.reseed("bloodbath");

        let mut order = self.alive_indices();
        self.rng.shuffle(&mut order);

        let mut fighters = Vec::new();
        let mut runners = Vec::new();
        for idx in order {
            if self.rng.chance(fight_chance(&self.state.contestants[idx])) {
                fighters.push(idx);
            } else {
                runners.push(idx);
            }
        }
        debug!(fighters = fighters.len(), runners = runners.len(), "bloodbath");

        for idx in runners {
            let (name, id) = (self.name(idx), self.id(idx));
            if self.rng.chance(RUNNER_FLEE_EMPTY) {
                self.log(render(text::BLOODBATH_FLEE, &[("contestant", &name)]), vec![id], false);
            } else {
                let item = self.rng.pick(&self.catalog.items).clone();
                let line = render(text::BLOODBATH_GRAB, &[("contestant", &name), ("item", &item.name)]);
                self.state.contestants[idx].inventory.push(item);
                self.log(line, vec![id], false);
            }
        }

        while fighters.len() > 1 {
            let (Some(a), Some(b)) = (self.rng.take(&mut fighters), self.rng.take(&mut fighters)) else {
                break;
            };
            self.resolve_combat(a, b, true);
        }

        if let [survivor] = fighters.as_slice() {
            self.claim_spoils(*survivor, text::BLOODBATH_SURVIVOR, false);
        }

        self.state.phase = Phase::Day;
    }

    /// The last one standing takes two random catalog items
    pub(super) fn claim_spoils(&mut self, idx: usize, template: &str, important: bool) {
        let first = self.rng.pick(&self.catalog.items).clone();
        let second = self.rng.pick(&self.catalog.items).clone();
        let line = render(
            template,
            &[("contestant", &self.name(idx)), ("item", &first.name), ("second", &second.name)],
        );
        self.state.contestants[idx].inventory.extend([first, second]);
        let id = self.id(idx);
        self.log(line, vec![id], important);
    }
}
