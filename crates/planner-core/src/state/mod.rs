//! Planner state and the commands that move it between phases.
//!
//! Commands take a [`PlannerState`] by value and return the next one; they
//! never reach into storage or I/O. [`crate::persist::Session`] wraps them
//! with best-effort persistence.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::content::{CaptionOptions, HookPicker, generate_caption, generate_hashtags};
use crate::input::{InputEdit, StrategyInput};
use crate::plan::{PlanCollection, PlanItem, build_plan};

/// Everything the planner persists: the strategy inputs and the plan store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerState {
    #[serde(default)]
    pub input: StrategyInput,
    #[serde(default)]
    pub plan: PlanCollection,
}

impl PlannerState {
    pub fn new(input: StrategyInput) -> Self {
        Self {
            input,
            plan: PlanCollection::default(),
        }
    }

    pub fn phase(&self) -> PlanPhase {
        PlanPhase::of(&self.plan)
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Phase of the plan store, derived from its items.
///
/// Valid transitions:
///
/// ```text
/// any                -> empty               (regenerate, defensive)
/// any                -> generated           (regenerate)
/// generated          -> partially_enriched  (enrich one item)
/// partially_enriched -> partially_enriched  (enrich another item)
/// generated          -> fully_enriched      (enrich all / last item)
/// partially_enriched -> fully_enriched
/// fully_enriched     -> fully_enriched      (re-enrich)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanPhase {
    Empty,
    Generated,
    PartiallyEnriched,
    FullyEnriched,
}

impl PlanPhase {
    pub fn of(plan: &PlanCollection) -> Self {
        let enriched = plan.enriched_count();
        match (plan.len(), enriched) {
            (0, _) => Self::Empty,
            (_, 0) => Self::Generated,
            (n, e) if e == n => Self::FullyEnriched,
            _ => Self::PartiallyEnriched,
        }
    }

    /// Check whether `from -> to` is an edge of the phase graph.
    pub fn is_valid_transition(from: PlanPhase, to: PlanPhase) -> bool {
        use PlanPhase::*;
        matches!(
            (from, to),
            (_, Empty)
                | (_, Generated)
                | (Generated | PartiallyEnriched, PartiallyEnriched)
                | (Generated | PartiallyEnriched | FullyEnriched, FullyEnriched)
        )
    }
}

impl fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Generated => "generated",
            Self::PartiallyEnriched => "partially_enriched",
            Self::FullyEnriched => "fully_enriched",
        };
        f.write_str(s)
    }
}

fn log_transition(command: &str, from: PlanPhase, to: PlanPhase) {
    debug_assert!(
        PlanPhase::is_valid_transition(from, to),
        "{command} produced invalid transition {from} -> {to}"
    );
    if from != to {
        info!(command, %from, %to, "plan phase changed");
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Regenerate the plan from the current input, replacing it entirely and
/// selecting the first item.
pub fn generate(
    mut state: PlannerState,
    start: NaiveDate,
    picker: &mut dyn HookPicker,
) -> PlannerState {
    let before = state.phase();
    let items = build_plan(&state.input, start, picker);
    state.plan.replace(items);
    log_transition("generate", before, state.phase());
    state
}

/// Select the item with `id`. Unknown ids leave the state unchanged.
pub fn select(mut state: PlannerState, id: &str) -> PlannerState {
    if !state.plan.select(id) {
        debug!(id, "ignoring selection of unknown plan item");
    }
    state
}

/// Replace inputs with an edit applied. The plan is left as-is until the
/// next regeneration or enrichment.
pub fn update_input(mut state: PlannerState, edit: InputEdit) -> PlannerState {
    edit.apply(&mut state.input);
    state
}

/// Generate hashtags and a caption for the selected item only.
///
/// No-op when nothing is selected.
pub fn enrich_selected(mut state: PlannerState) -> PlannerState {
    let Some(id) = state.plan.selected_id.clone() else {
        debug!("enrich_selected with no selection; nothing to do");
        return state;
    };
    let before = state.phase();
    let enricher = Enricher::new(&state.input);
    let hashtags = enricher.hashtags();
    match state.plan.get_mut(&id) {
        Some(item) => enricher.apply(item, hashtags),
        None => {
            debug!(id, "selected item no longer exists; nothing to do");
            return state;
        }
    }
    log_transition("enrich_selected", before, state.phase());
    state
}

/// Generate one shared hashtag set and a per-item caption for every item,
/// overwriting any earlier enrichment. No-op on an empty plan.
pub fn enrich_all(mut state: PlannerState) -> PlannerState {
    if state.plan.is_empty() {
        debug!("enrich_all on empty plan; nothing to do");
        return state;
    }
    let before = state.phase();
    let enricher = Enricher::new(&state.input);
    let hashtags = enricher.hashtags();
    for item in &mut state.plan.items {
        enricher.apply(item, hashtags.clone());
    }
    info!(items = state.plan.len(), hashtags = hashtags.len(), "enriched every plan item");
    log_transition("enrich_all", before, state.phase());
    state
}

/// Normalized input lists, computed once per enrichment command.
struct Enricher<'a> {
    input: &'a StrategyInput,
    keywords: Vec<String>,
    offers: Vec<String>,
    ctas: Vec<String>,
}

impl<'a> Enricher<'a> {
    fn new(input: &'a StrategyInput) -> Self {
        Self {
            input,
            keywords: input.keyword_list(),
            offers: input.offer_list(),
            ctas: input.cta_list(),
        }
    }

    fn hashtags(&self) -> Vec<String> {
        generate_hashtags(&self.input.niche, &self.input.audience, &self.keywords)
    }

    fn apply(&self, item: &mut PlanItem, hashtags: Vec<String>) {
        let caption = generate_caption(&CaptionOptions {
            niche: &self.input.niche,
            audience: &self.input.audience,
            tone: self.input.tone,
            pillar: &item.pillar,
            idea: &item.idea,
            brand_keywords: &self.keywords,
            offers: &self.offers,
            ctas: &self.ctas,
            hashtags: &hashtags,
        });
        item.enrich(caption, hashtags);
    }
}
