pub mod contestant;
pub mod generator;
pub mod stance;
pub mod vitals;

pub use contestant::{Attributes, Contestant, Status};
pub use generator::{generate, ROSTER_SIZE};
pub use stance::Stance;
pub use vitals::{Injuries, Vital, Vitals};
