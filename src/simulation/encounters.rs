//! Per-contestant encounters and the sponsor pass
//!
//! Contestants act in shuffled order and at most once per tick: a hazard,
//! a mutt, a meeting with someone in the same zone, or the default action
//! for their stance. A meeting or a successful hunt uses up the other
//! contestant's turn as well.

use ahash::AHashSet;
use tracing::{debug, trace};

use super::constants::{
    ALLY_THRESHOLD, BOND_AMOUNT, CAREER_PACK_THRESHOLD, ENCOUNTER_CHANCE, FORAGE_CHANCE,
    HAZARD_CHANCE, HAZARD_DAMAGE, HAZARD_SEVERE_CHANCE, HUNT_CHANCE, MUTT_CHANCE, MUTT_DAMAGE,
    MUTT_EVASION_AGILITY, MUTT_EVASION_CHANCE, PASS_BY_CHANCE, REST_RECOVERY, RIVAL_THRESHOLD,
    SHARE_BONUS, SPONSOR_GIFT_CHANCE, SPONSOR_GIFT_COST, SPONSOR_SCORE_THRESHOLD,
};
use super::engine::Engine;
use super::text;
use crate::catalog::{render, ItemKind};
use crate::entity::{Stance, Vital};

impl Engine {
    pub(super) fn run_encounters(&mut self) {
        let mut order = self.alive_indices();
        self.rng.shuffle(&mut order);
        let mut acted: AHashSet<usize> = AHashSet::with_capacity(order.len());

        for &idx in &order {
            if acted.contains(&idx) || !self.is_alive(idx) {
                continue;
            }
            acted.insert(idx);

            if self.rng.chance(HAZARD_CHANCE) {
                self.hazard(idx);
                continue;
            }
            if self.rng.chance(MUTT_CHANCE) {
                self.mutt_attack(idx);
                continue;
            }

            let zone = &self.state.contestants[idx].zone;
            let partner = order.iter().copied().find(|&other| {
                !acted.contains(&other) && self.is_alive(other) && &self.state.contestants[other].zone == zone
            });
            if let Some(other) = partner {
                if self.rng.chance(ENCOUNTER_CHANCE) {
                    acted.insert(other);
                    self.meet(idx, other);
                    continue;
                }
            }

            self.default_action(idx, &order, &mut acted);
        }
    }

    fn hazard(&mut self, idx: usize) {
        let event = self.rng.pick(&self.state.arena.events).clone();
        let (name, id) = (self.name(idx), self.id(idx));
        let vars = [("contestant", name.as_str()), ("event", event.as_str())];

        if self.rng.chance(HAZARD_SEVERE_CHANCE) {
            self.state.contestants[idx].take_damage(HAZARD_DAMAGE);
            self.log(render(text::HAZARD_SEVERE, &vars), vec![id], true);
        } else {
            self.log(render(text::HAZARD_MISS, &vars), vec![id], false);
        }
        self.check_death(idx, &render(text::CAUSE_HAZARD, &vars));
    }

    fn mutt_attack(&mut self, idx: usize) {
        let mutt = self.rng.pick(&self.state.arena.mutts).clone();
        let (name, id) = (self.name(idx), self.id(idx));
        let vars = [("contestant", name.as_str()), ("mutt", mutt.as_str())];

        let nimble = self.state.contestants[idx].attributes.agility > MUTT_EVASION_AGILITY;
        if nimble && self.rng.chance(MUTT_EVASION_CHANCE) {
            self.log(render(text::MUTT_EVADE, &vars), vec![id], false);
        } else {
            let c = &mut self.state.contestants[idx];
            c.take_damage(MUTT_DAMAGE);
            c.injuries.bleeding = true;
            self.log(render(text::MUTT_HIT, &vars), vec![id], true);
        }
        self.check_death(idx, &render(text::CAUSE_MUTT, &vars));
    }

    /// Two contestants in the same zone run into each other
    fn meet(&mut self, a: usize, b: usize) {
        let (ca, cb) = (&self.state.contestants[a], &self.state.contestants[b]);
        let pack = ca.is_career && cb.is_career && self.state.alive_count() > CAREER_PACK_THRESHOLD;
        let (affinity, returned) = (ca.relationship(cb.id), cb.relationship(ca.id));
        let hostile = ca.stance == Stance::Aggressive
            || cb.stance == Stance::Aggressive
            || affinity < RIVAL_THRESHOLD
            || returned < RIVAL_THRESHOLD;
        trace!(a = %ca.id, b = %cb.id, pack, affinity, returned, hostile, "encounter");

        let (name_a, name_b) = (self.name(a), self.name(b));
        let involved = vec![self.id(a), self.id(b)];
        let vars = [("contestant", name_a.as_str()), ("other", name_b.as_str())];

        if pack {
            self.log(render(text::CAREER_PACK, &vars), involved, false);
        } else if affinity > ALLY_THRESHOLD {
            self.share(a, b);
        } else if returned > ALLY_THRESHOLD {
            self.share(b, a);
        } else if hostile {
            self.resolve_combat(a, b, false);
        } else if self.rng.chance(PASS_BY_CHANCE) {
            self.log(render(text::PASS_BY, &vars), involved, false);
        } else {
            self.bond(a, b, BOND_AMOUNT);
            self.state.contestants[a].vitals.adjust(Vital::Sanity, BOND_AMOUNT);
            self.state.contestants[b].vitals.adjust(Vital::Sanity, BOND_AMOUNT);
            self.log(render(text::BOND, &vars), involved, false);
        }
    }

    fn bond(&mut self, a: usize, b: usize, amount: i32) {
        let (id_a, id_b) = (self.id(a), self.id(b));
        self.state.contestants[a].adjust_relationship(id_b, amount);
        self.state.contestants[b].adjust_relationship(id_a, amount);
    }

    /// Allies split supplies: the one who likes the other hands over their
    /// first food, else water
    fn share(&mut self, a: usize, b: usize) {
        let (name_a, name_b) = (self.name(a), self.name(b));
        let involved = vec![self.id(a), self.id(b)];

        let giver = &mut self.state.contestants[a];
        let gift = giver.take_first(ItemKind::Food).or_else(|| giver.take_first(ItemKind::Water));
        let line = match gift {
            Some(item) => {
                let line = render(
                    text::SHARE,
                    &[("contestant", &name_a), ("item", &item.name), ("other", &name_b)],
                );
                self.state.contestants[b].inventory.push(item);
                line
            }
            None => render(text::SHARE_NOTHING, &[("contestant", &name_a), ("other", &name_b)]),
        };
        self.bond(a, b, SHARE_BONUS);
        self.log(line, involved, false);
    }

    fn default_action(&mut self, idx: usize, order: &[usize], acted: &mut AHashSet<usize>) {
        let (name, id) = (self.name(idx), self.id(idx));
        match self.state.contestants[idx].stance {
            Stance::Evasive => {
                self.log(render(text::HIDE, &[("contestant", &name)]), vec![id], false);
            }
            Stance::Defensive => {
                if self.rng.chance(FORAGE_CHANCE) {
                    let provisions = self.catalog.provisions();
                    let found = self.rng.pick(&provisions).clone();
                    let line = render(text::FORAGE, &[("contestant", &name), ("item", &found.name)]);
                    self.state.contestants[idx].inventory.push(found);
                    self.log(line, vec![id], false);
                } else {
                    self.state.contestants[idx]
                        .vitals
                        .adjust(Vital::Fatigue, -REST_RECOVERY);
                    self.log(render(text::REST, &[("contestant", &name)]), vec![id], false);
                }
            }
            Stance::Aggressive => self.hunt(idx, order, acted),
        }
    }

    /// Track down a random contestant who has not acted yet and fight them
    /// where they stand.
    fn hunt(&mut self, idx: usize, order: &[usize], acted: &mut AHashSet<usize>) {
        let (name, id) = (self.name(idx), self.id(idx));
        let prey: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&other| !acted.contains(&other) && self.is_alive(other))
            .collect();

        if prey.is_empty() || !self.rng.chance(HUNT_CHANCE) {
            self.log(render(text::HUNT_FAIL, &[("contestant", &name)]), vec![id], false);
            return;
        }

        let target = *self.rng.pick(&prey);
        acted.insert(target);
        let zone = self.state.contestants[target].zone.clone();
        let (other, target_id) = (self.name(target), self.id(target));
        let line = render(text::HUNT_FOUND, &[("contestant", &name), ("other", &other), ("zone", &zone)]);
        self.state.contestants[idx].zone = zone;
        self.log(line, vec![id, target_id], true);
        self.resolve_combat(idx, target, false);
    }

    /// Crowd-pleasers with enough trust may receive a parachute gift
    pub(super) fn run_sponsors(&mut self) {
        let gifts = self.catalog.sponsor_items();
        for idx in self.alive_indices() {
            let c = &self.state.contestants[idx];
            if c.excitement_rating + c.sponsor_trust <= SPONSOR_SCORE_THRESHOLD
                || !self.rng.chance(SPONSOR_GIFT_CHANCE)
            {
                continue;
            }

            let gift = self.rng.pick(&gifts).clone();
            let c = &mut self.state.contestants[idx];
            c.excitement_rating = (c.excitement_rating - SPONSOR_GIFT_COST).max(0);
            let line = render(text::SPONSOR_GIFT, &[("contestant", &c.name), ("item", &gift.name)]);
            let id = c.id;
            c.inventory.push(gift);
            debug!(contestant = %id, "sponsor gift");
            self.log(line, vec![id], true);
        }
    }
}
