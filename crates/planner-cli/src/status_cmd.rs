//! `planner status` command: plan phase and summary figures.

use std::io::Write;

use anyhow::Result;

use planner_core::{STATE_KEY, Session};
use planner_store::KeyValueStore;

use crate::config::PlannerConfig;

pub fn run_status<S: KeyValueStore>(
    session: &Session<S>,
    config: &PlannerConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let kpis = session.kpis();
    let plan = session.plan();

    writeln!(out, "State: {}", config.store.file_for_key(STATE_KEY).display())?;
    writeln!(out, "Phase: {}", kpis.phase)?;
    if let (Some(first), Some(last)) = (plan.items.first(), plan.items.last()) {
        writeln!(out, "Range: {} .. {}", first.date, last.date)?;
    }
    writeln!(out)?;
    writeln!(out, "Posts/week: {}", kpis.posts_per_week)?;
    writeln!(out, "Ideas:      {}", kpis.ideas)?;
    writeln!(out, "Pillars:    {}", kpis.pillars)?;
    writeln!(out, "Tone:       {}", kpis.tone)?;
    writeln!(out, "Enriched:   {}/{}", kpis.enriched, kpis.ideas)?;
    match plan.selected() {
        Some(item) => writeln!(out, "Selected:   {}", item.id)?,
        None => writeln!(out, "Selected:   -")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use planner_core::FixedPicker;
    use planner_store::{MemoryStore, StoreConfig};

    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig {
            store: StoreConfig::new("/var/lib/planner"),
            export_filename: "plan.csv".to_owned(),
            seed: None,
        }
    }

    fn render(session: &Session<MemoryStore>) -> String {
        let mut buf = Vec::new();
        run_status(session, &config(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn status_of_empty_state() {
        let text = render(&Session::open(MemoryStore::new()));
        assert!(text.starts_with("State: /var/lib/planner/planner_state_v1.json\n"));
        assert!(text.contains("Phase: empty\n"));
        assert!(text.contains("Ideas:      0\n"));
        assert!(text.contains("Pillars:    4\n"));
        assert!(text.contains("Selected:   -\n"));
    }

    #[test]
    fn status_tracks_enrichment() {
        let mut s = Session::open(MemoryStore::new());
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        s.generate(start, &mut FixedPicker(0));
        s.enrich_selected();
        let text = render(&s);
        assert!(text.contains("Phase: partially_enriched\n"));
        assert!(text.contains("Range: 2025-01-01 .. 2025-01-30\n"));
        assert!(text.contains("Enriched:   1/30\n"));
        assert!(text.contains("Selected:   2025-01-01-0\n"));
    }
}
