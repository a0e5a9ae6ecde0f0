//! Arena Sim - deterministic elimination tournament simulation
//!
//! Twenty-four contestants from twelve districts go through training,
//! interviews and a bloodbath, then day/night ticks until at most one is
//! left alive. Every outcome is reproducible from a seed string.

pub mod catalog;
pub mod core;
pub mod entity;
pub mod records;
pub mod simulation;
