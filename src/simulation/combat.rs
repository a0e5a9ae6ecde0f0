//! Combat resolution shared by the bloodbath, the feast and arena encounters
//!
//! Power = strength + agility + wielded weapon bonus - limb penalty + a roll
//! in [0, 5]. A margin above 3 is a kill; anything closer is a standoff in
//! which both sides bleed.

use tracing::{debug, trace};

use super::constants::{
    COMBAT_ROLL_MAX, KILL_EXCITEMENT, KILL_MARGIN, STANDOFF_DAMAGE, STANDOFF_DURABILITY_LOSS,
    STANDOFF_INJURY_CHANCE, STANDOFF_RELATIONSHIP_PENALTY,
};
use super::engine::Engine;
use super::text;
use crate::catalog::{render, WeaponClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Kill { winner: usize, loser: usize },
    Standoff,
    /// One side was already dead; nothing was drawn
    Skipped,
}

impl Engine {
    fn combat_power(&mut self, idx: usize) -> i32 {
        let c = &self.state.contestants[idx];
        let weapon = c.equipped_weapon().map_or(0, |w| w.combat_bonus());
        let base = c.attributes.strength + c.attributes.agility + weapon - c.injuries.limb_penalty();
        base + self.rng.next_int(0, COMBAT_ROLL_MAX)
    }

    pub(super) fn resolve_combat(&mut self, a: usize, b: usize, bloodbath: bool) -> CombatOutcome {
        if a == b || !self.is_alive(a) || !self.is_alive(b) {
            return CombatOutcome::Skipped;
        }

        let power_a = self.combat_power(a);
        let power_b = self.combat_power(b);
        trace!(a = %self.id(a), b = %self.id(b), power_a, power_b, "combat roll");

        let outcome = if power_a > power_b + KILL_MARGIN {
            self.kill(a, b, bloodbath);
            CombatOutcome::Kill { winner: a, loser: b }
        } else if power_b > power_a + KILL_MARGIN {
            self.kill(b, a, bloodbath);
            CombatOutcome::Kill { winner: b, loser: a }
        } else {
            self.standoff(a, b);
            CombatOutcome::Standoff
        };

        self.purge_broken_weapons(a);
        self.purge_broken_weapons(b);
        outcome
    }

    fn kill(&mut self, winner: usize, loser: usize, bloodbath: bool) {
        let killer_name = self.name(winner);
        let victim_name = self.name(loser);
        let (weapon, class) = self.state.contestants[winner]
            .equipped_weapon()
            .map_or_else(|| ("bare hands".to_string(), WeaponClass::Unarmed), |w| (w.name.clone(), w.class()));

        let template = self.rng.pick(self.catalog.kill_narration.phrases_for(class)).clone();
        let mut narration = render(
            &template,
            &[("killer", &killer_name), ("victim", &victim_name), ("weapon", &weapon)],
        );

        let cause_template = if bloodbath {
            text::CAUSE_KILLED_BLOODBATH
        } else {
            text::CAUSE_KILLED
        };
        let cause = render(cause_template, &[("killer", &killer_name)]);
        let day = self.state.day;

        let victim = &mut self.state.contestants[loser];
        victim.mark_dead(cause, day);
        let loot = if victim.inventory.is_empty() {
            None
        } else {
            Some(victim.inventory.remove(0))
        };

        let killer = &mut self.state.contestants[winner];
        killer.kills += 1;
        killer.excitement_rating += KILL_EXCITEMENT;
        if let Some(item) = loot {
            narration.push(' ');
            narration.push_str(&render(text::KILL_LOOT, &[("contestant", &killer_name), ("item", &item.name)]));
            killer.inventory.push(item);
        }

        let (killer_id, victim_id) = (self.id(winner), self.id(loser));
        debug!(killer = %killer_id, victim = %victim_id, bloodbath, "kill");
        self.log(narration, vec![killer_id, victim_id], true);
    }

    fn standoff(&mut self, a: usize, b: usize) {
        for idx in [a, b] {
            let c = &mut self.state.contestants[idx];
            c.take_damage(STANDOFF_DAMAGE);
            c.injuries.bleeding = true;
        }
        if self.rng.chance(STANDOFF_INJURY_CHANCE) {
            self.state.contestants[a].injuries.arms = true;
        }
        if self.rng.chance(STANDOFF_INJURY_CHANCE) {
            self.state.contestants[b].injuries.legs = true;
        }

        let (id_a, id_b) = (self.id(a), self.id(b));
        self.state.contestants[a].adjust_relationship(id_b, -STANDOFF_RELATIONSHIP_PENALTY);
        self.state.contestants[b].adjust_relationship(id_a, -STANDOFF_RELATIONSHIP_PENALTY);

        for idx in [a, b] {
            let durability = self.state.contestants[idx]
                .equipped_weapon_mut()
                .and_then(|w| w.durability.as_mut());
            if let Some(durability) = durability {
                *durability -= STANDOFF_DURABILITY_LOSS;
            }
        }

        let (name_a, name_b) = (self.name(a), self.name(b));
        self.log(
            render(text::STANDOFF, &[("contestant", &name_a), ("other", &name_b)]),
            vec![id_a, id_b],
            false,
        );
        self.check_death(a, &render(text::CAUSE_WOUNDS, &[("killer", &name_b)]));
        self.check_death(b, &render(text::CAUSE_WOUNDS, &[("killer", &name_a)]));
    }

    /// Drop worn-out weapons from a living contestant, logging each
    pub(super) fn purge_broken_weapons(&mut self, idx: usize) {
        if !self.is_alive(idx) {
            return;
        }
        let broken = self.state.contestants[idx].purge_broken();
        if broken.is_empty() {
            return;
        }
        let (name, id) = (self.name(idx), self.id(idx));
        for item in broken {
            self.log(render(text::BROKEN, &[("contestant", &name), ("item", &item.name)]), vec![id], false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Status;
    use crate::simulation::engine::tests::engine;

    fn prepare_duel(engine: &mut Engine) {
        let sword = engine.catalog.item("sword").cloned();
        let bread = engine.catalog.item("bread").cloned();

        let strong = &mut engine.state.contestants[0];
        strong.attributes.strength = 10;
        strong.attributes.agility = 10;
        strong.inventory.extend(sword);

        let weak = &mut engine.state.contestants[1];
        weak.attributes.strength = 0;
        weak.attributes.agility = 0;
        weak.injuries.arms = true;
        weak.injuries.legs = true;
        weak.inventory.extend(bread);
    }

    #[test]
    fn test_dominant_fighter_always_kills() {
        for n in 0..25 {
            let mut engine = engine(&format!("duel-{n}"), "clockwork");
            prepare_duel(&mut engine);
            let kills_before = engine.state.contestants[0].kills;

            let outcome = engine.resolve_combat(0, 1, false);
            assert_eq!(outcome, CombatOutcome::Kill { winner: 0, loser: 1 });

            let (winner, loser) = (&engine.state.contestants[0], &engine.state.contestants[1]);
            assert_eq!(winner.kills, kills_before + 1);
            assert_eq!(loser.status, Status::Dead);
            assert_eq!(loser.health, 0);
            assert_eq!(loser.cause_of_death.as_deref(), Some("Killed by District 1 Male"));
            assert!(winner.has_item("bread"));
            assert!(loser.inventory.is_empty());
        }
    }

    #[test]
    fn test_bloodbath_kill_cause() {
        let mut engine = engine("bloodbath-kill", "frozen");
        prepare_duel(&mut engine);
        engine.resolve_combat(1, 0, true);
        let cause = engine.state.contestants[1].cause_of_death.clone();
        assert_eq!(cause.as_deref(), Some("Killed by District 1 Male in the bloodbath"));
    }

    #[test]
    fn test_dead_participant_is_skipped() {
        let mut engine = engine("skip", "clockwork");
        engine.state.contestants[1].mark_dead("test".into(), 0);
        let log_len = engine.state.log.len();
        assert_eq!(engine.resolve_combat(0, 1, false), CombatOutcome::Skipped);
        assert_eq!(engine.state.log.len(), log_len);
    }

    #[test]
    fn test_standoff_wounds_both_sides() {
        let mut seen = 0;
        for n in 0..200 {
            let mut engine = engine(&format!("standoff-{n}"), "concrete");
            let sword = engine.catalog.item("sword").cloned();
            for idx in [0, 1] {
                let c = &mut engine.state.contestants[idx];
                c.attributes.strength = 5;
                c.attributes.agility = 5;
                c.inventory.extend(sword.clone());
            }

            if engine.resolve_combat(0, 1, false) != CombatOutcome::Standoff {
                continue;
            }
            seen += 1;
            let (id_a, id_b) = (engine.id(0), engine.id(1));
            for idx in [0, 1] {
                let c = &engine.state.contestants[idx];
                assert_eq!(c.health, 80);
                assert!(c.injuries.bleeding);
                assert_eq!(c.equipped_weapon().and_then(|w| w.durability), Some(50));
            }
            assert_eq!(engine.state.contestants[0].relationship(id_b), -20);
            assert_eq!(engine.state.contestants[1].relationship(id_a), -20);
        }
        assert!(seen > 0, "no standoff across 200 seeds");
    }

    #[test]
    fn test_worn_weapon_breaks_after_standoff() {
        let mut engine = engine("worn", "toxic");
        let mut knife = engine.catalog.item("knife").cloned().expect("knife");
        knife.durability = Some(5);
        engine.state.contestants[0].inventory.push(knife);

        engine.standoff(0, 1);
        engine.purge_broken_weapons(0);
        assert!(!engine.state.contestants[0].has_item("knife"));
        let last = engine.state.log.last().map(|e| e.text.as_str());
        assert_eq!(last, Some("District 1 Male's Throwing Knives breaks."));
    }
}
