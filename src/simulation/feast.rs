//! The feast at the Cornucopia, entered only through a gamemaker trigger

use tracing::debug;

use super::constants::{FEAST_ATTEND_CHANCE, FEAST_DESPERATION};
use super::engine::Engine;
use super::text;
use crate::catalog::render;
use crate::entity::contestant::HEALTH_MAX;
use crate::entity::Vital;

impl Engine {
    pub(super) fn run_feast(&mut self) {
        self.reseed(&format!("{}-feast", self.state.day));

        let mut attendees = Vec::new();
        for idx in self.alive_indices() {
            let keen = self.rng.chance(FEAST_ATTEND_CHANCE);
            let vitals = &self.state.contestants[idx].vitals;
            let desperate = vitals.hunger > FEAST_DESPERATION || vitals.thirst > FEAST_DESPERATION;
            if keen || desperate {
                attendees.push(idx);
            } else {
                let (name, id) = (self.name(idx), self.id(idx));
                self.log(render(text::FEAST_SKIP, &[("contestant", &name)]), vec![id], false);
            }
        }
        debug!(day = self.state.day, attendees = attendees.len(), "feast");

        if attendees.is_empty() {
            self.log(text::FEAST_EMPTY.to_string(), Vec::new(), false);
            return;
        }

        self.rng.shuffle(&mut attendees);
        while attendees.len() > 1 {
            let (Some(a), Some(b)) = (self.rng.take(&mut attendees), self.rng.take(&mut attendees)) else {
                break;
            };
            self.resolve_combat(a, b, false);
        }

        if let [survivor] = attendees.as_slice() {
            let survivor = *survivor;
            let c = &mut self.state.contestants[survivor];
            c.health = HEALTH_MAX;
            c.vitals.set(Vital::Hunger, 0);
            c.vitals.set(Vital::Thirst, 0);
            self.claim_spoils(survivor, text::FEAST_SURVIVOR, true);
        }
    }
}
