//! A planner session: state plus the store it is persisted to.

use chrono::NaiveDate;
use planner_store::KeyValueStore;

use crate::content::HookPicker;
use crate::export::{ClipboardSink, ExportError, ExportSink, copy_item, export_plan};
use crate::input::{InputEdit, StrategyInput};
use crate::kpi::Kpis;
use crate::plan::PlanCollection;
use crate::state::{self, PlanPhase, PlannerState};

use super::{load_state, save_state};

/// Owns the current [`PlannerState`] and saves it after every command.
///
/// Command methods return whether they changed anything; a `false` result
/// corresponds to the no-op conditions (no selection, empty plan, unknown id).
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    state: PlannerState,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the saved state from `store` (defaults if missing or malformed).
    pub fn open(store: S) -> Self {
        let state = load_state(&store);
        Self { store, state }
    }

    /// Start from an explicit state without reading the store.
    pub fn with_state(store: S, state: PlannerState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn input(&self) -> &StrategyInput {
        &self.state.input
    }

    pub fn plan(&self) -> &PlanCollection {
        &self.state.plan
    }

    pub fn phase(&self) -> PlanPhase {
        self.state.phase()
    }

    pub fn kpis(&self) -> Kpis {
        Kpis::from_state(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, PlannerState) {
        (self.store, self.state)
    }

    /// Persist the current state (best-effort).
    pub fn save(&mut self) {
        save_state(&mut self.store, &self.state);
    }

    fn apply(&mut self, command: impl FnOnce(PlannerState) -> PlannerState) -> bool {
        let before = self.state.clone();
        self.state = command(std::mem::take(&mut self.state));
        let changed = self.state != before;
        if changed {
            self.save();
        }
        changed
    }

    pub fn update_input(&mut self, edit: InputEdit) -> bool {
        self.apply(|s| state::update_input(s, edit))
    }

    pub fn generate(&mut self, start: NaiveDate, picker: &mut dyn HookPicker) -> bool {
        self.apply(|s| state::generate(s, start, picker))
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.apply(|s| state::select(s, id))
    }

    pub fn enrich_selected(&mut self) -> bool {
        self.apply(state::enrich_selected)
    }

    pub fn enrich_all(&mut self) -> bool {
        self.apply(state::enrich_all)
    }

    /// Export the plan. `Ok(false)` when there is nothing to export.
    pub fn export(&self, sink: &mut dyn ExportSink, filename: &str) -> Result<bool, ExportError> {
        export_plan(&self.state.plan, sink, filename)
    }

    /// Copy the caption and hashtags of item `id`, or of the selected item
    /// when `id` is `None`. `false` when there is no such enriched item.
    pub fn copy(&self, id: Option<&str>, sink: &mut dyn ClipboardSink) -> bool {
        let item = match id {
            Some(id) => self.state.plan.get(id),
            None => self.state.plan.selected(),
        };
        item.is_some_and(|item| copy_item(item, sink))
    }
}
