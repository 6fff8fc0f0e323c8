//! Summary figures shown alongside the plan.

use serde::Serialize;

use crate::input::Tone;
use crate::state::{PlanPhase, PlannerState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    /// Cadence as entered (not clamped).
    pub posts_per_week: i64,
    /// Number of planned posts.
    pub ideas: usize,
    /// Number of configured pillars after normalization.
    pub pillars: usize,
    pub tone: Tone,
    pub enriched: usize,
    pub phase: PlanPhase,
}

impl Kpis {
    pub fn from_state(state: &PlannerState) -> Self {
        Self {
            posts_per_week: state.input.posts_per_week,
            ideas: state.plan.len(),
            pillars: state.input.pillar_list().len(),
            tone: state.input.tone,
            enriched: state.plan.enriched_count(),
            phase: state.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::content::FixedPicker;
    use crate::state::{enrich_all, generate};

    #[test]
    fn kpis_for_default_state() {
        let kpis = Kpis::from_state(&PlannerState::default());
        assert_eq!(kpis.posts_per_week, 4);
        assert_eq!(kpis.ideas, 0);
        assert_eq!(kpis.pillars, 4);
        assert_eq!(kpis.tone, Tone::Friendly);
        assert_eq!(kpis.phase, PlanPhase::Empty);
    }

    #[test]
    fn kpis_track_plan() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let state = enrich_all(generate(PlannerState::default(), start, &mut FixedPicker(0)));
        let kpis = Kpis::from_state(&state);
        assert_eq!(kpis.ideas, 30);
        assert_eq!(kpis.enriched, 30);
        assert_eq!(kpis.phase, PlanPhase::FullyEnriched);
    }
}
