//! Integration tests for recording victors
//!
//! Tournaments are run to the end and their victors appended to a JSON
//! record file in a temporary directory.

use arena_sim::catalog::Catalog;
use arena_sim::records::{HallOfFameEntry, JsonFileRecordStore, RecordStore};
use arena_sim::simulation::{Engine, SimulationState};

fn finished(seed: &str, arena: &str) -> SimulationState {
    let mut engine = Engine::setup(seed, arena, Catalog::standard(), false).expect("setup");
    for _ in 0..2000 {
        if engine.state().is_over() {
            break;
        }
        engine.advance_next();
    }
    assert!(engine.state().is_over());
    engine.into_state()
}

#[test]
fn test_victors_are_recorded_newest_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("records").join("hall_of_fame.json");
    let mut store = JsonFileRecordStore::new(&path);

    let mut recorded = Vec::new();
    for (seed, arena) in [("ONE", "clockwork"), ("TWO", "frozen"), ("THREE", "solar"), ("FOUR", "toxic")] {
        let state = finished(seed, arena);
        match HallOfFameEntry::from_state(&state) {
            Some(entry) => {
                let victor = state.victor().expect("victor");
                assert_eq!(entry.winner_name, victor.name);
                assert_eq!(entry.winner_origin, victor.district);
                assert_eq!(entry.kills, victor.kills);
                assert_eq!(entry.arena_name, state.arena.name);
                store.append(entry.clone()).expect("append");
                recorded.push(entry);
            }
            None => assert_eq!(state.alive_count(), 0),
        }
    }

    let loaded = JsonFileRecordStore::new(&path).load_all().expect("load");
    recorded.reverse();
    assert_eq!(loaded, recorded);
}

#[test]
fn test_no_survivor_run_is_not_recorded() {
    let mut state = finished("EMPTY", "concrete");
    for c in state.contestants.iter_mut() {
        c.mark_dead("test".into(), state.day);
    }
    assert!(HallOfFameEntry::from_state(&state).is_none());
}
