//! Simulation state and the narrative event log

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Arena;
use crate::core::types::ContestantId;
use crate::entity::Contestant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Training,
    Interviews,
    Bloodbath,
    Day,
    Night,
    Feast,
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Training => "training",
            Self::Interviews => "interviews",
            Self::Bloodbath => "bloodbath",
            Self::Day => "day",
            Self::Night => "night",
            Self::Feast => "feast",
            Self::Ended => "ended",
        }
    }

    /// Phases inside the arena proper (after the games start)
    pub fn in_arena(&self) -> bool {
        matches!(self, Self::Bloodbath | Self::Day | Self::Night | Self::Feast)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One narrative event; never modified once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub day: u32,
    pub phase: Phase,
    pub text: String,
    pub involved: Vec<ContestantId>,
    pub important: bool,
}

/// Append-only event log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        day: u32,
        phase: Phase,
        text: String,
        involved: Vec<ContestantId>,
        important: bool,
    ) -> u32 {
        let id = self.entries.len() as u32;
        self.entries.push(LogEntry {
            id,
            day,
            phase,
            text,
            involved,
            important,
        });
        id
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn important(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| e.important)
    }

    pub fn for_contestant(&self, id: ContestantId) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.involved.contains(&id))
    }

    pub fn for_day(&self, day: u32) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }
}

/// Complete state of one tournament; cloning yields an independent snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub seed: String,
    pub arena: Arena,
    pub contestants: Vec<Contestant>,
    pub phase: Phase,
    pub day: u32,
    pub log: EventLog,
    pub gamemaker_mode: bool,
}

/// Headline numbers for a finished or running tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub day: u32,
    pub phase: Phase,
    pub alive: usize,
    pub dead: usize,
    pub victor: Option<String>,
    /// (name, kills), most kills first
    pub top_killers: Vec<(String, u32)>,
}

impl SimulationState {
    pub fn new(seed: &str, arena: Arena, contestants: Vec<Contestant>, gamemaker_mode: bool) -> Self {
        Self {
            seed: seed.to_string(),
            arena,
            contestants,
            phase: Phase::Setup,
            day: 0,
            log: EventLog::new(),
            gamemaker_mode,
        }
    }

    pub fn alive(&self) -> impl Iterator<Item = &Contestant> {
        self.contestants.iter().filter(|c| c.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn dead_count(&self) -> usize {
        self.contestants.len() - self.alive_count()
    }

    pub fn contestant(&self, id: ContestantId) -> Option<&Contestant> {
        self.contestants.iter().find(|c| c.id == id)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// The sole survivor of an ended tournament
    pub fn victor(&self) -> Option<&Contestant> {
        if !self.is_over() {
            return None;
        }
        let mut alive = self.alive();
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    pub fn summary(&self) -> Summary {
        let mut killers: Vec<(String, u32)> = self
            .contestants
            .iter()
            .filter(|c| c.kills > 0)
            .map(|c| (c.name.clone(), c.kills))
            .collect();
        // Stable sort keeps roster order among equal kill counts
        killers.sort_by(|a, b| b.1.cmp(&a.1));
        killers.truncate(5);

        Summary {
            day: self.day,
            phase: self.phase,
            alive: self.alive_count(),
            dead: self.dead_count(),
            victor: self.victor().map(|c| c.name.clone()),
            top_killers: killers,
        }
    }
}
