//! Interactive TUI dashboard for browsing and enriching the plan.

pub mod app;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use planner_core::Session;
use planner_store::KeyValueStore;

use crate::config::PlannerConfig;

use app::App;

/// Launch the interactive TUI dashboard.
pub fn run_dashboard<S: KeyValueStore>(session: Session<S>, config: &PlannerConfig) -> Result<()> {
    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, config);

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(text) = app.clipboard.last() {
        println!("{text}");
    }

    result
}

fn run_event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Every action is a keypress; nothing changes between them.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Clear status message on any keypress.
        app.status_message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.navigate_back(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.move_up(),
            KeyCode::Char('g') => app.generate(),
            KeyCode::Char('e') => app.enrich_selected(),
            KeyCode::Char('E') => app.enrich_all(),
            KeyCode::Char('x') => app.export(),
            KeyCode::Char('c') => app.copy_selected(),
            KeyCode::Char('?') => app.show_help(),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
