//! Persistence bridge: the whole [`PlannerState`] as one JSON blob under
//! [`STATE_KEY`].
//!
//! Loading never fails: a missing or malformed blob yields the default state.
//! Saving never fails either; store errors are logged and swallowed so the
//! in-memory transition always stands.

pub mod session;

use planner_store::KeyValueStore;
use thiserror::Error;
use tracing::{debug, warn};

use crate::plan::PlanError;
use crate::state::PlannerState;

pub use session::Session;

/// Fixed storage key for the planner state.
pub const STATE_KEY: &str = "planner_state_v1";

/// Serialize a state to its JSON blob.
pub fn encode_state(state: &PlannerState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}

/// Why a persisted blob was rejected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid planner state JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("inconsistent plan: {0}")]
    Plan(#[from] PlanError),
}

/// Parse a JSON blob into a state, clearing a selection that names no item.
///
/// Plans with duplicate ids, dates out of order, or half-enriched items are
/// rejected.
pub fn decode_state(blob: &str) -> Result<PlannerState, DecodeError> {
    let mut state: PlannerState = serde_json::from_str(blob)?;
    state.plan.validate()?;
    if state.plan.repair_selection() {
        warn!("persisted selection did not match any plan item; cleared");
    }
    Ok(state)
}

/// Load the planner state, falling back to defaults.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> PlannerState {
    match store.get(STATE_KEY) {
        Ok(Some(blob)) => match decode_state(&blob) {
            Ok(state) => {
                debug!(items = state.plan.len(), "loaded planner state");
                state
            }
            Err(e) => {
                warn!(error = %e, "discarding malformed planner state");
                PlannerState::default()
            }
        },
        Ok(None) => {
            debug!("no saved planner state; using defaults");
            PlannerState::default()
        }
        Err(e) => {
            warn!(error = %e, "failed to read planner state; using defaults");
            PlannerState::default()
        }
    }
}

/// Save the planner state. Failures are logged, never returned.
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, state: &PlannerState) {
    let blob = match encode_state(state) {
        Ok(blob) => blob,
        Err(e) => {
            warn!(error = %e, "failed to serialize planner state; not saved");
            return;
        }
    };
    if let Err(e) = store.set(STATE_KEY, &blob) {
        warn!(error = %e, "failed to save planner state");
    }
}

#[cfg(test)]
mod tests {
    use planner_store::MemoryStore;

    use super::*;
    use crate::input::Tone;

    #[test]
    fn missing_blob_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_state(&store), PlannerState::default());
    }

    #[test]
    fn malformed_blob_yields_defaults() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, "{not json").unwrap();
        assert_eq!(load_state(&store), PlannerState::default());

        store.set(STATE_KEY, r#"{"input": 5}"#).unwrap();
        assert_eq!(load_state(&store), PlannerState::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let mut state = PlannerState::default();
        state.input.niche = "Coffee".to_owned();
        state.input.tone = Tone::Humorous;
        save_state(&mut store, &state);
        assert_eq!(load_state(&store), state);
    }

    #[test]
    fn blob_uses_camel_case_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&encode_state(&PlannerState::default()).unwrap()).unwrap();
        assert_eq!(json["input"]["postsPerWeek"], 4);
        assert_eq!(json["input"]["tone"], "friendly");
        assert!(json["plan"]["items"].as_array().unwrap().is_empty());
        assert!(json["plan"]["selectedId"].is_null());
    }

    fn item_json(id: &str, date: &str, extra: &str) -> String {
        format!(
            r#"{{"id": "{id}", "date": "{date}", "pillar": "Sales", "format": "Reel", "idea": "x"{extra}}}"#
        )
    }

    fn blob_with_items(items: &[String]) -> String {
        format!(
            r#"{{"input": {{}}, "plan": {{"items": [{}], "selectedId": null}}}}"#,
            items.join(",")
        )
    }

    #[test]
    fn decode_accepts_consistent_plan() {
        let blob = blob_with_items(&[
            item_json("2025-01-01-0", "2025-01-01", r#", "caption": "c", "hashtags": ["a"]"#),
            item_json("2025-01-02-1", "2025-01-02", ""),
        ]);
        let state = decode_state(&blob).unwrap();
        assert_eq!(state.plan.len(), 2);
        assert_eq!(state.plan.enriched_count(), 1);
    }

    #[test]
    fn decode_rejects_caption_without_hashtags() {
        let blob = blob_with_items(&[item_json(
            "2025-01-01-0",
            "2025-01-01",
            r#", "caption": "hello""#,
        )]);
        assert!(matches!(
            decode_state(&blob),
            Err(DecodeError::Plan(PlanError::HalfEnriched(_)))
        ));
    }

    #[test]
    fn decode_rejects_duplicate_ids_and_backward_dates() {
        let duplicate = blob_with_items(&[
            item_json("2025-01-01-0", "2025-01-01", ""),
            item_json("2025-01-01-0", "2025-01-03", ""),
        ]);
        assert!(matches!(
            decode_state(&duplicate),
            Err(DecodeError::Plan(PlanError::DuplicateId(_)))
        ));

        let backwards = blob_with_items(&[
            item_json("2025-01-05-0", "2025-01-05", ""),
            item_json("2025-01-02-1", "2025-01-02", ""),
        ]);
        assert!(matches!(
            decode_state(&backwards),
            Err(DecodeError::Plan(PlanError::OutOfOrder { .. }))
        ));
    }

    #[test]
    fn inconsistent_blob_loads_as_defaults() {
        let mut store = MemoryStore::new();
        let blob = blob_with_items(&[
            item_json("2025-01-03-0", "2025-01-03", r#", "caption": "hello""#),
            item_json("2025-01-03-0", "2025-01-01", ""),
        ]);
        store.set(STATE_KEY, &blob).unwrap();
        assert_eq!(load_state(&store), PlannerState::default());
    }

    #[test]
    fn decode_clears_stale_selection() {
        let blob = r#"{"input": {}, "plan": {"items": [], "selectedId": "2025-01-01-0"}}"#;
        let state = decode_state(blob).unwrap();
        assert!(state.plan.selected_id.is_none());
    }
}
