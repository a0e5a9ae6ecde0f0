//! Survival attrition applied at the start of every day/night tick
//!
//! Covers item expiry, vitals drift with climate and trait modifiers, health
//! penalties, infection, first aid, eating and drinking, the post-vitals
//! death check, movement and crafting.

use tracing::trace;

use super::constants::*;
use super::engine::Engine;
use super::text;
use super::tick::TimeOfDay;
use crate::catalog::{render, Climate, ItemKind};
use crate::entity::contestant::{TRAIT_HYDROPHILIC, TRAIT_INSOMNIAC, TRAIT_IRON_STOMACH};
use crate::entity::{Contestant, Stance, Vital};

/// Per-tick drift for one contestant, before climate exposure
fn vitals_drift(c: &Contestant, climate: Climate, time: TimeOfDay) -> (i32, i32, i32) {
    let mut hunger = HUNGER_GAIN;
    if c.has_trait(TRAIT_IRON_STOMACH) {
        hunger -= IRON_STOMACH_HUNGER_RELIEF;
    }

    let mut thirst = THIRST_GAIN;
    if climate == Climate::Desert {
        thirst *= 2;
    }
    if c.has_trait(TRAIT_HYDROPHILIC) {
        thirst -= HYDROPHILIC_THIRST_RELIEF;
    }

    let fatigue = match time {
        TimeOfDay::Day => DAY_FATIGUE_GAIN,
        TimeOfDay::Night if c.has_trait(TRAIT_INSOMNIAC) => INSOMNIAC_NIGHT_FATIGUE,
        TimeOfDay::Night => -NIGHT_FATIGUE_RECOVERY,
    };

    (hunger, thirst, fatigue)
}

/// Most pressing drain on a contestant whose health ran out
fn attrition_cause(c: &Contestant, climate: Climate) -> &'static str {
    if c.injuries.infected {
        text::CAUSE_INFECTION
    } else if c.injuries.bleeding {
        text::CAUSE_BLED_OUT
    } else if c.vitals.thirst > STARVATION_THRESHOLD {
        text::CAUSE_DEHYDRATION
    } else if c.vitals.hunger > STARVATION_THRESHOLD {
        text::CAUSE_STARVATION
    } else if climate == Climate::Cold && !c.has_warmth() {
        text::CAUSE_EXPOSURE
    } else {
        text::CAUSE_ENVIRONMENT
    }
}

impl Engine {
    /// Age food and drop anything rotten or broken
    pub(super) fn expire_items(&mut self, idx: usize) {
        let c = &mut self.state.contestants[idx];
        for item in c.inventory.iter_mut().filter(|i| i.kind == ItemKind::Food) {
            if let Some(spoilage) = item.spoilage.as_mut() {
                *spoilage -= 1;
            }
        }
        let spoiled = c.purge_spoiled();

        let (name, id) = (self.name(idx), self.id(idx));
        for item in spoiled {
            self.log(render(text::SPOILED, &[("contestant", &name), ("item", &item.name)]), vec![id], false);
        }
        self.purge_broken_weapons(idx);
    }

    pub(super) fn resolve_vitals(&mut self, idx: usize, time: TimeOfDay) {
        let climate = self.state.arena.climate;
        let c = &mut self.state.contestants[idx];
        let (name, id) = (c.name.clone(), c.id);
        let mut lines = Vec::new();

        let (hunger, thirst, fatigue) = vitals_drift(c, climate, time);
        c.vitals.adjust(Vital::Hunger, hunger);
        c.vitals.adjust(Vital::Thirst, thirst);
        c.vitals.adjust(Vital::Fatigue, fatigue);

        match climate {
            Climate::Cold if !c.has_warmth() => {
                c.vitals.adjust(Vital::Fatigue, COLD_EXPOSURE_FATIGUE);
                c.take_damage(COLD_EXPOSURE_DAMAGE);
            }
            Climate::Toxic if self.rng.chance(TOXIC_SANITY_CHANCE) => {
                c.vitals.adjust(Vital::Sanity, -TOXIC_SANITY_LOSS);
            }
            _ => {}
        }

        if c.vitals.hunger > STARVATION_THRESHOLD {
            c.take_damage(STARVATION_DAMAGE);
        }
        if c.vitals.thirst > STARVATION_THRESHOLD {
            c.take_damage(DEHYDRATION_DAMAGE);
        }
        if c.injuries.bleeding {
            c.take_damage(BLEEDING_DAMAGE);
        }
        if c.injuries.infected {
            c.take_damage(INFECTION_DAMAGE);
        }

        if c.injuries.bleeding && !c.injuries.infected && self.rng.chance(INFECTION_CHANCE) {
            c.injuries.infected = true;
            lines.push(render(text::INFECTED, &[("contestant", &name)]));
        }

        if c.injuries.needs_treatment() {
            if let Some(kit) = c.take_first(ItemKind::Medical) {
                c.injuries.treat();
                c.heal(MEDICAL_HEAL);
                lines.push(render(text::TREAT, &[("contestant", &name), ("item", &kit.name)]));
            }
        }

        if c.vitals.hunger > CONSUME_THRESHOLD && c.take_first(ItemKind::Food).is_some() {
            c.vitals.adjust(Vital::Hunger, -FOOD_RESTORE);
            lines.push(render(text::EAT, &[("contestant", &name)]));
        }
        if c.vitals.thirst > CONSUME_THRESHOLD && c.take_first(ItemKind::Water).is_some() {
            c.vitals.adjust(Vital::Thirst, -WATER_RESTORE);
            lines.push(render(text::DRINK, &[("contestant", &name)]));
        }

        trace!(contestant = %id, health = c.health, hunger = c.vitals.hunger, thirst = c.vitals.thirst, "vitals");
        let cause = attrition_cause(c, climate);
        for line in lines {
            self.log(line, vec![id], false);
        }
        self.check_death(idx, cause);
    }

    pub(super) fn recompute_stance(&mut self, idx: usize) {
        let c = &mut self.state.contestants[idx];
        c.stance = Stance::assess(c);
    }

    /// Evasive contestants always relocate and do so unseen; the rest roam
    /// half the time. A move always lands in a different zone.
    pub(super) fn wander(&mut self, idx: usize) {
        let stance = self.state.contestants[idx].stance;
        if !stance.always_moves() && !self.rng.chance(MOVE_CHANCE) {
            return;
        }

        let current = &self.state.contestants[idx].zone;
        let destinations: Vec<&String> = self.state.arena.zones.iter().filter(|z| *z != current).collect();
        if destinations.is_empty() {
            return;
        }
        let zone = (*self.rng.pick(&destinations)).clone();
        let c = &mut self.state.contestants[idx];
        c.zone = zone;
        if stance.always_moves() {
            return;
        }
        let line = render(text::MOVE, &[("contestant", &c.name), ("zone", &c.zone)]);
        let id = c.id;
        self.log(line, vec![id], false);
    }

    /// Rope plus knife makes a spear, unless one is already carried
    pub(super) fn craft(&mut self, idx: usize) {
        let Some(spear) = self.catalog.item("spear").cloned() else {
            return;
        };
        let c = &mut self.state.contestants[idx];
        if !c.has_item("rope") || !c.has_item("knife") || c.has_item("spear") {
            return;
        }
        c.take_item("rope");
        c.take_item("knife");
        c.inventory.push(spear);

        let line = render(text::CRAFT_SPEAR, &[("contestant", &c.name)]);
        let id = c.id;
        self.log(line, vec![id], false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Status;
    use crate::simulation::engine::tests::{engine, engine_in_day};
    use crate::simulation::{Advance, Phase};

    fn item(engine: &Engine, id: &str) -> crate::catalog::Item {
        engine.catalog.item(id).cloned().expect("standard item")
    }

    /// First living contestant with its traits and inventory cleared
    fn blank_survivor(engine: &mut Engine) -> usize {
        let idx = engine.alive_indices()[0];
        let c = &mut engine.state.contestants[idx];
        c.traits.clear();
        c.inventory.clear();
        c.injuries = Default::default();
        c.health = 100;
        idx
    }

    #[test]
    fn test_hungry_contestant_eats() {
        let mut engine = engine_in_day("hungry", "clockwork");
        let idx = blank_survivor(&mut engine);
        let bread = item(&engine, "bread");
        let c = &mut engine.state.contestants[idx];
        c.vitals.hunger = 90;
        c.inventory.push(bread);

        engine.expire_items(idx);
        engine.resolve_vitals(idx, TimeOfDay::Day);

        let c = &engine.state.contestants[idx];
        assert_eq!(c.vitals.hunger, 60);
        assert!(c.inventory.is_empty());
        let last = engine.state.log.last().expect("eat entry");
        assert_eq!(last.text, format!("{} eats some food.", c.name));
        assert_eq!(last.involved, vec![c.id]);
    }

    #[test]
    fn test_hungry_contestant_eats_during_tick() {
        let mut engine = engine_in_day("hungry-tick", "concrete");
        let idx = blank_survivor(&mut engine);
        let bread = item(&engine, "bread");
        let c = &mut engine.state.contestants[idx];
        c.vitals.hunger = 90;
        c.inventory.push(bread);
        let id = c.id;

        assert!(engine.advance(Advance::Tick).applied());
        assert_eq!(engine.state.contestants[idx].vitals.hunger, 60);
        assert!(engine
            .state
            .log
            .for_contestant(id)
            .any(|e| e.phase == Phase::Day && e.text.ends_with("eats some food.")));
    }

    #[test]
    fn test_desert_doubles_thirst() {
        let mut engine = engine("desert", "solar");
        let idx = blank_survivor(&mut engine);
        engine.resolve_vitals(idx, TimeOfDay::Day);
        let c = &engine.state.contestants[idx];
        assert_eq!(c.vitals.thirst, 30);
        assert_eq!(c.vitals.hunger, 10);
        assert_eq!(c.vitals.fatigue, 10);
    }

    #[test]
    fn test_trait_modifiers() {
        let mut engine = engine("traits", "clockwork");
        let idx = blank_survivor(&mut engine);
        let c = &mut engine.state.contestants[idx];
        c.traits = vec![
            TRAIT_HYDROPHILIC.to_string(),
            TRAIT_IRON_STOMACH.to_string(),
            TRAIT_INSOMNIAC.to_string(),
        ];
        engine.resolve_vitals(idx, TimeOfDay::Night);
        let c = &engine.state.contestants[idx];
        assert_eq!(c.vitals.hunger, 5);
        assert_eq!(c.vitals.thirst, 10);
        assert_eq!(c.vitals.fatigue, 5);
    }

    #[test]
    fn test_cold_without_warmth_drains_health() {
        let mut engine = engine("cold", "frozen");
        let warm = blank_survivor(&mut engine);
        let cold = engine.alive_indices()[1];
        {
            let c = &mut engine.state.contestants[cold];
            c.traits.clear();
            c.inventory.clear();
        }
        let bag = item(&engine, "sleeping_bag");
        engine.state.contestants[warm].inventory.push(bag);

        engine.resolve_vitals(warm, TimeOfDay::Day);
        engine.resolve_vitals(cold, TimeOfDay::Day);
        assert_eq!(engine.state.contestants[warm].health, 100);
        assert_eq!(engine.state.contestants[warm].vitals.fatigue, 10);
        assert_eq!(engine.state.contestants[cold].health, 95);
        assert_eq!(engine.state.contestants[cold].vitals.fatigue, 15);
    }

    #[test]
    fn test_medkit_stops_bleeding() {
        let mut engine = engine("medkit", "concrete");
        let idx = blank_survivor(&mut engine);
        let kit = item(&engine, "medkit");
        let c = &mut engine.state.contestants[idx];
        c.injuries.bleeding = true;
        c.health = 50;
        c.inventory.push(kit);

        engine.resolve_vitals(idx, TimeOfDay::Day);
        let c = &engine.state.contestants[idx];
        assert!(!c.injuries.bleeding);
        assert!(!c.injuries.infected);
        assert_eq!(c.health, 55);
        assert!(!c.has_item("medkit"));
    }

    #[test]
    fn test_attrition_death_is_stamped() {
        let mut engine = engine_in_day("attrition", "clockwork");
        let idx = blank_survivor(&mut engine);
        let c = &mut engine.state.contestants[idx];
        c.health = 10;
        c.injuries.bleeding = true;

        engine.resolve_vitals(idx, TimeOfDay::Day);
        let c = &engine.state.contestants[idx];
        assert_eq!(c.status, Status::Dead);
        assert_eq!(c.health, 0);
        assert_eq!(c.day_of_death, Some(1));
        assert!(matches!(c.cause_of_death.as_deref(), Some("Bled out" | "Succumbed to infection")));
    }

    #[test]
    fn test_food_spoils() {
        let mut engine = engine("spoil", "clockwork");
        let idx = blank_survivor(&mut engine);
        let berries = item(&engine, "berries");
        engine.state.contestants[idx].inventory.push(berries);
        for _ in 0..3 {
            engine.expire_items(idx);
        }
        assert!(!engine.state.contestants[idx].has_item("berries"));
        assert!(engine.state.log.last().is_some_and(|e| e.text.ends_with("has spoiled.")));
    }

    #[test]
    fn test_rope_and_knife_make_spear() {
        let mut engine = engine("craft", "clockwork");
        let idx = blank_survivor(&mut engine);
        let (rope, knife) = (item(&engine, "rope"), item(&engine, "knife"));
        engine.state.contestants[idx].inventory.extend([rope, knife]);

        engine.craft(idx);
        let ids: Vec<_> = engine.state.contestants[idx].inventory.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["spear"]);
    }

    #[test]
    fn test_evasive_moves_silently() {
        let mut engine = engine("evasive", "toxic");
        let idx = blank_survivor(&mut engine);
        engine.state.contestants[idx].stance = Stance::Evasive;
        let log_len = engine.state.log.len();
        for _ in 0..25 {
            let before = engine.state.contestants[idx].zone.clone();
            engine.wander(idx);
            let after = &engine.state.contestants[idx].zone;
            assert_ne!(after, &before);
            assert!(engine.state.arena.has_zone(after));
        }
        assert_eq!(engine.state.log.len(), log_len);
    }

    #[test]
    fn test_defensive_moves_are_logged() {
        let mut engine = engine("roamer", "clockwork");
        let idx = blank_survivor(&mut engine);
        engine.state.contestants[idx].stance = Stance::Defensive;

        let mut moves = 0;
        for _ in 0..20 {
            let before = engine.state.contestants[idx].zone.clone();
            let log_len = engine.state.log.len();
            engine.wander(idx);

            let c = &engine.state.contestants[idx];
            if c.zone == before {
                assert_eq!(engine.state.log.len(), log_len);
                continue;
            }
            moves += 1;
            let last = engine.state.log.last().expect("move entry");
            assert_eq!(last.text, format!("{} moves to the {}.", c.name, c.zone));
            assert_eq!(last.involved, vec![c.id]);
            assert!(!last.important);
        }
        assert!(moves > 0);
    }

    #[test]
    fn test_toxic_air_erodes_sanity() {
        let mut engine = engine("fumes", "toxic");
        let idx = blank_survivor(&mut engine);
        let (mut hit, mut spared) = (false, false);
        for n in 0..60 {
            engine.rng.reseed(&format!("fumes-{n}"));
            let c = &mut engine.state.contestants[idx];
            c.vitals = Default::default();
            c.vitals.sanity = 50;

            engine.resolve_vitals(idx, TimeOfDay::Day);
            match engine.state.contestants[idx].vitals.sanity {
                40 => hit = true,
                50 => spared = true,
                other => panic!("unexpected sanity {other}"),
            }
        }
        assert!(hit && spared);
    }

    #[test]
    fn test_untreated_bleeding_can_fester() {
        let mut engine = engine("festering", "clockwork");
        let idx = blank_survivor(&mut engine);
        let (mut infected, mut clean) = (0, 0);
        for n in 0..80 {
            engine.rng.reseed(&format!("festering-{n}"));
            let c = &mut engine.state.contestants[idx];
            c.vitals = Default::default();
            c.health = 100;
            c.injuries = Default::default();
            c.injuries.bleeding = true;
            let log_len = engine.state.log.len();

            engine.resolve_vitals(idx, TimeOfDay::Day);
            let c = &engine.state.contestants[idx];
            // Infection damage starts on the following tick
            assert_eq!(c.health, 85);
            if c.injuries.infected {
                infected += 1;
                let entry = &engine.state.log.entries()[log_len];
                assert_eq!(entry.text, format!("{}'s wound becomes infected.", c.name));
            } else {
                clean += 1;
                assert_eq!(engine.state.log.len(), log_len);
            }
        }
        assert!(infected > 0 && clean > infected);
    }
}
