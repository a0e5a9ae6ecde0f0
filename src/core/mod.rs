pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::RunConfig;
pub use error::{ArenaError, Result};
pub use rng::DeterministicRng;
pub use types::{Attribute, ContestantId, Gender};
