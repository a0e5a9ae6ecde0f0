//! Day/night tick
//!
//! One tick runs, in order: item expiry and vitals for every living
//! contestant, stance recompute, movement, crafting, encounters in shuffled
//! order, then the sponsor pass. The RNG is reseeded from the day number and
//! time of day before the first draw.

use std::fmt;

use tracing::debug;

use super::engine::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Engine {
    pub(super) fn run_day_night(&mut self, time: TimeOfDay) {
        self.reseed(&format!("{}-{}", self.state.day, time));
        debug!(day = self.state.day, %time, alive = self.state.alive_count(), "tick");

        for idx in self.alive_indices() {
            self.expire_items(idx);
            self.resolve_vitals(idx, time);
        }

        let alive = self.alive_indices();
        for &idx in &alive {
            self.recompute_stance(idx);
        }
        for &idx in &alive {
            self.wander(idx);
        }
        for &idx in &alive {
            self.craft(idx);
        }

        self.run_encounters();
        self.run_sponsors();
    }
}
