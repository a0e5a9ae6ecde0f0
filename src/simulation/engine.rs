//! Phase state machine
//!
//! The engine owns the simulation state, the injected catalog and the only
//! RNG. Each advance runs to completion; a phase reseeds the RNG from a
//! phase-qualified seed before its first draw, so the outcome of a phase
//! depends only on (seed, arena, roster state) and never on call history.
//!
//! Phase order: setup -> training -> interviews -> bloodbath ->
//! {day <-> night, optionally diverted to feast} -> ended.

use tracing::{debug, info};

use super::state::{EventLog, Phase, SimulationState};
use super::text;
use crate::catalog::{render, Catalog};
use crate::core::error::{ArenaError, Result};
use crate::core::rng::DeterministicRng;
use crate::core::types::ContestantId;
use crate::entity::{generate, ROSTER_SIZE};

/// One phase-advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advance {
    /// Reroll the roster from the seed (setup only, before any event)
    Setup,
    Training,
    Interviews,
    StartBloodbath,
    ResolveBloodbath,
    /// One day, night or feast resolution
    Tick,
}

/// Whether a request changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Not valid from the current phase or mode; state untouched
    Ignored,
}

impl Transition {
    pub fn applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

pub struct Engine {
    pub(super) state: SimulationState,
    pub(super) catalog: Catalog,
    pub(super) rng: DeterministicRng,
}

impl Engine {
    /// Wrap an existing state. Fails on an invalid catalog, an arena the
    /// engine cannot draw from, or a roster that is not the full 24.
    pub fn new(state: SimulationState, catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        state.arena.validate()?;
        if state.contestants.len() != ROSTER_SIZE {
            return Err(ArenaError::InvalidConfig(format!(
                "roster must hold {} contestants, got {}",
                ROSTER_SIZE,
                state.contestants.len()
            )));
        }

        let rng = DeterministicRng::new(&format!("{}-{}-{}", state.seed, state.phase, state.day));
        Ok(Self { state, catalog, rng })
    }

    /// Generate a roster for `seed` in arena `arena_id` and start in setup
    pub fn setup(seed: &str, arena_id: &str, catalog: Catalog, gamemaker_mode: bool) -> Result<Self> {
        let arena = catalog.arena(arena_id)?.clone();
        let roster = generate(seed, &catalog.traits, &arena.staging_zone);
        let state = SimulationState::new(seed, arena, roster, gamemaker_mode);
        Self::new(state, catalog)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> SimulationState {
        self.state.clone()
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_gamemaker_mode(&mut self, enabled: bool) {
        self.state.gamemaker_mode = enabled;
    }

    /// The advance the current phase naturally expects, if any
    pub fn expected_advance(&self) -> Option<Advance> {
        match self.state.phase {
            Phase::Setup => Some(Advance::Training),
            Phase::Training => Some(Advance::Interviews),
            Phase::Interviews => Some(Advance::StartBloodbath),
            Phase::Bloodbath => Some(Advance::ResolveBloodbath),
            Phase::Day | Phase::Night | Phase::Feast => Some(Advance::Tick),
            Phase::Ended => None,
        }
    }

    /// Perform whichever advance the current phase expects
    pub fn advance_next(&mut self) -> Transition {
        match self.expected_advance() {
            Some(step) => self.advance(step),
            None => Transition::Ignored,
        }
    }

    pub fn advance(&mut self, step: Advance) -> Transition {
        let phase = self.state.phase;
        let valid = match step {
            Advance::Setup => phase == Phase::Setup && self.state.log.is_empty(),
            Advance::Training => phase == Phase::Setup,
            Advance::Interviews => phase == Phase::Training,
            Advance::StartBloodbath => phase == Phase::Interviews,
            Advance::ResolveBloodbath => phase == Phase::Bloodbath,
            Advance::Tick => matches!(phase, Phase::Day | Phase::Night | Phase::Feast),
        };
        if !valid {
            debug!(?step, %phase, "ignored advance");
            return Transition::Ignored;
        }

        match step {
            Advance::Setup => self.reroll_roster(),
            Advance::Training => self.run_training(),
            Advance::Interviews => self.run_interviews(),
            Advance::StartBloodbath => self.start_bloodbath(),
            Advance::ResolveBloodbath => self.resolve_bloodbath(),
            Advance::Tick => self.run_tick(),
        }
        Transition::Applied
    }

    fn reroll_roster(&mut self) {
        self.state.contestants = generate(&self.state.seed, &self.catalog.traits, &self.state.arena.staging_zone);
        self.state.log = EventLog::new();
    }

    fn run_tick(&mut self) {
        match self.state.phase {
            Phase::Day => {
                self.run_day_night(super::tick::TimeOfDay::Day);
                self.state.phase = Phase::Night;
            }
            Phase::Night => {
                self.run_day_night(super::tick::TimeOfDay::Night);
                self.state.day += 1;
                self.state.phase = Phase::Day;
            }
            Phase::Feast => {
                self.run_feast();
                self.state.phase = Phase::Day;
            }
            _ => return,
        }
        self.check_termination();
    }

    /// Restart the RNG stream for the phase identified by `suffix`
    pub(super) fn reseed(&mut self, suffix: &str) {
        let seed = format!("{}-{}", self.state.seed, suffix);
        debug!(seed = %seed, "reseeding");
        self.rng.reseed(&seed);
    }

    pub(super) fn log(&mut self, text: String, involved: Vec<ContestantId>, important: bool) {
        self.state
            .log
            .append(self.state.day, self.state.phase, text, involved, important);
    }

    pub(super) fn alive_indices(&self) -> Vec<usize> {
        self.state
            .contestants
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub(super) fn is_alive(&self, idx: usize) -> bool {
        self.state.contestants[idx].is_alive()
    }

    pub(super) fn name(&self, idx: usize) -> String {
        self.state.contestants[idx].name.clone()
    }

    pub(super) fn id(&self, idx: usize) -> ContestantId {
        self.state.contestants[idx].id
    }

    pub(super) fn index_of(&self, id: ContestantId) -> Option<usize> {
        self.state.contestants.iter().position(|c| c.id == id)
    }

    /// Kill a living contestant whose health ran out; happens at most once
    pub(super) fn check_death(&mut self, idx: usize, cause: &str) {
        let day = self.state.day;
        let contestant = &mut self.state.contestants[idx];
        if !contestant.is_alive() || contestant.health > 0 {
            return;
        }
        contestant.mark_dead(cause.to_string(), day);
        let text = render(text::DEATH_ENVIRONMENT, &[("contestant", &contestant.name)]);
        let id = contestant.id;
        debug!(contestant = %id, cause, "death");
        self.log(text, vec![id], true);
    }

    fn check_termination(&mut self) {
        if self.state.alive_count() > 1 {
            return;
        }
        self.state.phase = Phase::Ended;

        let winner = self.state.alive().next().map(|c| (c.id, c.name.clone()));
        match winner {
            Some((id, name)) => {
                info!(victor = %name, day = self.state.day, "tournament over");
                self.log(render(text::VICTOR, &[("contestant", &name)]), vec![id], true);
            }
            None => {
                info!(day = self.state.day, "tournament over without survivors");
                self.log(text::NO_SURVIVORS.to_string(), Vec::new(), true);
            }
        }
    }
}
