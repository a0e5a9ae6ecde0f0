//! Tournament simulation: state, event log and the phase engine

pub mod bloodbath;
pub mod combat;
pub mod constants;
pub mod encounters;
pub mod engine;
pub mod feast;
pub mod gamemaker;
pub mod pregame;
pub mod state;
pub mod survival;
pub mod text;
pub mod tick;

pub use bloodbath::fight_chance;
pub use combat::CombatOutcome;
pub use engine::{Advance, Engine, Transition};
pub use gamemaker::ManualEvent;
pub use state::{EventLog, LogEntry, Phase, SimulationState, Summary};
pub use tick::TimeOfDay;
