//! Manual gamemaker interventions
//!
//! Triggers are only honoured in gamemaker mode and never once the games
//! have ended. They draw from the current phase stream without reseeding.

use tracing::{info, warn};

use super::constants::{
    GAMEMAKER_RELEASE_CHANCE, GAMEMAKER_RELEASE_DAMAGE, GAMEMAKER_TARGETED_MUTT_DAMAGE,
    GAMEMAKER_WEATHER_FATIGUE, GAMEMAKER_WEATHER_SANITY,
};
use super::engine::{Engine, Transition};
use super::state::Phase;
use super::text;
use crate::catalog::render;
use crate::core::types::ContestantId;
use crate::entity::Vital;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManualEvent {
    /// A targeted strike on one contestant, or a release across the arena
    Mutt(Option<ContestantId>),
    /// Fatigue up, sanity down for everyone alive
    Weather,
    /// Divert the next tick into a feast. Only honoured during day or
    /// night; from any other phase the trigger is ignored.
    Feast,
}

impl Engine {
    pub fn trigger(&mut self, event: ManualEvent) -> Transition {
        if !self.state.gamemaker_mode {
            warn!(?event, "gamemaker mode is off, trigger ignored");
            return Transition::Ignored;
        }
        if self.state.phase == Phase::Ended {
            warn!(?event, "games have ended, trigger ignored");
            return Transition::Ignored;
        }

        info!(?event, phase = %self.state.phase, day = self.state.day, "gamemaker trigger");
        match event {
            ManualEvent::Mutt(Some(target)) => self.targeted_mutt(target),
            ManualEvent::Mutt(None) => {
                self.release_mutts();
                Transition::Applied
            }
            ManualEvent::Weather => {
                self.shift_weather();
                Transition::Applied
            }
            ManualEvent::Feast => self.announce_feast(),
        }
    }

    fn targeted_mutt(&mut self, target: ContestantId) -> Transition {
        let Some(idx) = self.index_of(target).filter(|&idx| self.is_alive(idx)) else {
            warn!(%target, "no living contestant to target");
            return Transition::Ignored;
        };

        let mutt = self.rng.pick(&self.state.arena.mutts).clone();
        let c = &mut self.state.contestants[idx];
        c.take_damage(GAMEMAKER_TARGETED_MUTT_DAMAGE);
        c.injuries.bleeding = true;

        let name = self.name(idx);
        let vars = [("contestant", name.as_str()), ("mutt", mutt.as_str())];
        self.log(render(text::GAMEMAKER_MUTT_TARGET, &vars), vec![target], true);
        self.check_death(idx, &render(text::CAUSE_MUTT, &vars));
        Transition::Applied
    }

    fn release_mutts(&mut self) {
        let mutt = self.rng.pick(&self.state.arena.mutts).clone();
        let vars = [("mutt", mutt.as_str())];
        self.log(render(text::GAMEMAKER_MUTT_RELEASE, &vars), Vec::new(), true);

        let cause = render(text::CAUSE_MUTT, &vars);
        for idx in self.alive_indices() {
            if self.rng.chance(GAMEMAKER_RELEASE_CHANCE) {
                self.state.contestants[idx].take_damage(GAMEMAKER_RELEASE_DAMAGE);
                self.check_death(idx, &cause);
            }
        }
    }

    fn shift_weather(&mut self) {
        let event = self.rng.pick(&self.state.arena.events).clone();
        self.log(render(text::GAMEMAKER_WEATHER, &[("event", &event)]), Vec::new(), true);
        for idx in self.alive_indices() {
            let vitals = &mut self.state.contestants[idx].vitals;
            vitals.adjust(Vital::Fatigue, GAMEMAKER_WEATHER_FATIGUE);
            vitals.adjust(Vital::Sanity, -GAMEMAKER_WEATHER_SANITY);
        }
    }

    fn announce_feast(&mut self) -> Transition {
        if !matches!(self.state.phase, Phase::Day | Phase::Night) {
            warn!(phase = %self.state.phase, "a feast can only interrupt the day/night cycle");
            return Transition::Ignored;
        }
        self.log(text::GAMEMAKER_FEAST.to_string(), Vec::new(), true);
        self.state.phase = Phase::Feast;
        Transition::Applied
    }
}
