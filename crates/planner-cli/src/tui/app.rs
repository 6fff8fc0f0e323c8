//! TUI application state and actions.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use planner_core::export::{DirExportSink, MemoryClipboard};
use planner_core::{HookPicker, Kpis, PlanItem, Session};
use planner_store::KeyValueStore;

use crate::config::PlannerConfig;
use crate::plan_cmds::picker_for;

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Plan,
    Help,
}

/// Application state for the TUI.
pub struct App<S: KeyValueStore> {
    pub session: Session<S>,
    pub current_view: View,
    pub selected: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Text copied during the session, printed after the terminal is restored.
    pub clipboard: MemoryClipboard,
    export_dir: PathBuf,
    export_filename: String,
    picker: Box<dyn HookPicker>,
    today: fn() -> NaiveDate,
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

impl<S: KeyValueStore> App<S> {
    /// The highlighted row always mirrors the session selection; a loaded
    /// plan without one gets its first item selected.
    pub fn new(mut session: Session<S>, config: &PlannerConfig) -> Self {
        if session.plan().selected_index().is_none() {
            if let Some(id) = session.plan().items.first().map(|i| i.id.clone()) {
                session.select(&id);
            }
        }
        let selected = session.plan().selected_index().unwrap_or(0);
        Self {
            session,
            current_view: View::Plan,
            selected,
            should_quit: false,
            status_message: None,
            clipboard: MemoryClipboard::default(),
            export_dir: PathBuf::from("."),
            export_filename: config.export_filename.clone(),
            picker: picker_for(config.seed),
            today: today_utc,
        }
    }

    pub fn kpis(&self) -> Kpis {
        self.session.kpis()
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.session.plan().items
    }

    pub fn selected_item(&self) -> Option<&PlanItem> {
        self.session.plan().selected()
    }

    // -- Navigation --

    pub fn navigate_back(&mut self) {
        match self.current_view {
            View::Plan => self.should_quit = true,
            View::Help => self.current_view = View::Plan,
        }
    }

    pub fn show_help(&mut self) {
        self.current_view = View::Help;
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.sync_selection();
        }
    }

    pub fn move_down(&mut self) {
        let len = self.items().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
            self.sync_selection();
        }
    }

    fn sync_selection(&mut self) {
        if let Some(id) = self.items().get(self.selected).map(|i| i.id.clone()) {
            self.session.select(&id);
        }
    }

    // -- Actions --

    pub fn generate(&mut self) {
        let start = (self.today)();
        self.session.generate(start, self.picker.as_mut());
        self.selected = 0;
        self.status_message = Some(format!("Generated {} posts from {start}", self.items().len()));
    }

    pub fn enrich_selected(&mut self) {
        let message = match self.selected_item().map(|i| i.id.clone()) {
            Some(id) => {
                self.session.enrich_selected();
                format!("Enriched {id}")
            }
            None => "Nothing selected".to_owned(),
        };
        self.status_message = Some(message);
    }

    pub fn enrich_all(&mut self) {
        let message = if self.items().is_empty() {
            "Nothing to enrich: press g to generate".to_owned()
        } else {
            self.session.enrich_all();
            format!("Enriched {} posts", self.items().len())
        };
        self.status_message = Some(message);
    }

    pub fn export(&mut self) {
        let mut sink = DirExportSink::new(&self.export_dir);
        let message = match self.session.export(&mut sink, &self.export_filename) {
            Ok(true) => format!(
                "Exported to {}",
                self.export_dir.join(&self.export_filename).display()
            ),
            Ok(false) => "Nothing to export".to_owned(),
            Err(e) => format!("Export failed: {e}"),
        };
        self.status_message = Some(message);
    }

    pub fn copy_selected(&mut self) {
        let message = if self.session.copy(None, &mut self.clipboard) {
            "Copied caption; it will be printed on exit".to_owned()
        } else {
            "Nothing to copy: enrich the post first (e)".to_owned()
        };
        self.status_message = Some(message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use planner_core::FixedPicker;
    use planner_store::{MemoryStore, StoreConfig};

    use super::*;

    fn config() -> PlannerConfig {
        PlannerConfig {
            store: StoreConfig::new("/unused"),
            export_filename: "plan.csv".to_owned(),
            seed: Some(5),
        }
    }

    fn app() -> App<MemoryStore> {
        let mut app = App::new(Session::open(MemoryStore::new()), &config());
        app.today = || NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        app
    }

    fn unselected_plan_session() -> Session<MemoryStore> {
        let mut session = Session::open(MemoryStore::new());
        let start = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        session.generate(start, &mut FixedPicker(0));
        let (store, mut state) = session.into_parts();
        state.plan.selected_id = None;
        Session::with_state(store, state)
    }

    #[test]
    fn loaded_plan_without_selection_selects_first_row() {
        let mut app = App::new(unselected_plan_session(), &config());
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_item().unwrap().id, "2025-05-05-0");

        app.enrich_selected();
        assert_eq!(app.status_message.as_deref(), Some("Enriched 2025-05-05-0"));

        app.move_down();
        assert_eq!(app.selected, 1);
        assert_eq!(app.selected_item().unwrap().id, "2025-05-06-1");
    }

    #[test]
    fn existing_selection_sets_highlighted_row() {
        let mut session = unselected_plan_session();
        session.select("2025-05-08-3");
        let app = App::new(session, &config());
        assert_eq!(app.selected, 3);
        assert_eq!(app.selected_item().unwrap().id, "2025-05-08-3");
    }

    #[test]
    fn view_navigation() {
        let mut app = app();
        app.show_help();
        assert_eq!(app.current_view, View::Help);
        app.navigate_back();
        assert_eq!(app.current_view, View::Plan);
        assert!(!app.should_quit);
        app.navigate_back();
        assert!(app.should_quit);
    }

    #[test]
    fn movement_moves_selection() {
        let mut app = app();
        app.move_down();
        assert_eq!(app.selected, 0);

        app.generate();
        assert_eq!(app.items().len(), 30);
        assert_eq!(app.selected_item().unwrap().id, "2025-05-05-0");

        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 2);
        assert_eq!(app.selected_item().unwrap().id, "2025-05-07-2");

        app.move_up();
        assert_eq!(app.selected_item().unwrap().id, "2025-05-06-1");
        app.move_up();
        app.move_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn enrich_and_copy() {
        let mut app = app();
        app.copy_selected();
        assert!(app.clipboard.last().is_none());

        app.generate();
        app.copy_selected();
        assert!(app.clipboard.last().is_none());

        app.enrich_selected();
        assert_eq!(app.session.plan().enriched_count(), 1);
        app.copy_selected();
        assert!(app.clipboard.last().is_some());

        app.enrich_all();
        assert_eq!(app.session.plan().enriched_count(), 30);
    }

    #[test]
    fn export_writes_into_export_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app();
        app.export_dir = tmp.path().to_path_buf();
        app.export();
        assert_eq!(app.status_message.as_deref(), Some("Nothing to export"));

        app.generate();
        app.export();
        assert!(tmp.path().join("plan.csv").is_file());
    }
}
