//! Hall of fame: one record per tournament that produced a victor

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::simulation::SimulationState;

pub use store::{JsonFileRecordStore, MemoryRecordStore, RecordStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    pub id: Uuid,
    pub seed: String,
    pub arena_name: String,
    pub winner_name: String,
    /// Origin district of the winner
    pub winner_origin: u8,
    pub kills: u32,
    pub date: DateTime<Utc>,
}

impl HallOfFameEntry {
    /// Record for an ended tournament; `None` while running or when nobody
    /// survived.
    pub fn from_state(state: &SimulationState) -> Option<Self> {
        let winner = state.victor()?;
        Some(Self {
            id: Uuid::new_v4(),
            seed: state.seed.clone(),
            arena_name: state.arena.name.clone(),
            winner_name: winner.name.clone(),
            winner_origin: winner.district,
            kills: winner.kills,
            date: Utc::now(),
        })
    }
}
