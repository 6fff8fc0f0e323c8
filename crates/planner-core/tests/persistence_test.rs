//! Integration tests for saving and restoring planner state through the
//! store backends.

use std::fs;

use planner_core::{FixedPicker, PlannerState, STATE_KEY, Session, load_state, save_state};
use planner_store::{KeyValueStore, MemoryStore};
use planner_test_utils::{FailingStore, start_date, temp_file_store, yoga_input};

#[test]
fn file_store_round_trips_session() {
    let (store, dir) = temp_file_store();
    let mut session = Session::with_state(store, PlannerState::new(yoga_input()));
    session.generate(start_date(), &mut FixedPicker(2));
    let target = session.plan().items[5].id.clone();
    session.select(&target);
    session.enrich_selected();
    let (_, saved) = session.into_parts();

    assert!(dir.path().join(format!("{STATE_KEY}.json")).is_file());

    let reopened = Session::open(planner_store::FileStore::new(dir.path()));
    assert_eq!(reopened.state(), &saved);
    assert_eq!(reopened.plan().selected_id.as_deref(), Some(target.as_str()));
}

#[test]
fn corrupt_state_file_falls_back_to_defaults() {
    let (store, dir) = temp_file_store();
    fs::write(dir.path().join(format!("{STATE_KEY}.json")), "{\"plan\": [").unwrap();
    let session = Session::open(store);
    assert_eq!(session.state(), &PlannerState::default());
}

#[test]
fn failing_store_never_blocks_commands() {
    let mut session = Session::open(FailingStore);
    assert_eq!(session.state(), &PlannerState::default());
    assert!(session.generate(start_date(), &mut FixedPicker(0)));
    assert!(session.enrich_all());
    assert_eq!(session.plan().len(), 30);
}

#[test]
fn partial_blob_fills_missing_fields_with_defaults() {
    let mut store = MemoryStore::new();
    store
        .set(STATE_KEY, r#"{"input": {"niche": "Pottery", "postsPerWeek": "2.9"}}"#)
        .unwrap();
    let state = load_state(&store);
    assert_eq!(state.input.niche, "Pottery");
    assert_eq!(state.input.posts_per_week, 2);
    assert_eq!(state.input.ctas, PlannerState::default().input.ctas);
    assert!(state.plan.is_empty());
}

#[test]
fn stale_selection_is_cleared_on_load() {
    let mut store = MemoryStore::new();
    let mut session = Session::with_state(MemoryStore::new(), PlannerState::new(yoga_input()));
    session.generate(start_date(), &mut FixedPicker(0));
    let mut state = session.state().clone();
    state.plan.selected_id = Some("2000-01-01-0".to_owned());
    save_state(&mut store, &state);

    let loaded = load_state(&store);
    assert_eq!(loaded.plan.len(), 17);
    assert!(loaded.plan.selected_id.is_none());
}
