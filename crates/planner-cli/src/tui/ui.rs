//! TUI rendering using ratatui.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use planner_core::{PlanPhase, PostFormat};
use planner_store::KeyValueStore;

use super::app::{App, View};

/// Render the current view.
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // KPIs
            Constraint::Min(5),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_kpis(f, app, chunks[0]);
    match app.current_view {
        View::Plan => render_plan(f, app, chunks[1]),
        View::Help => render_help(f, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_kpis<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let kpis = app.kpis();
    let label = Style::default().fg(Color::Yellow);
    let line = Line::from(vec![
        Span::styled(" Posts/week ", label),
        Span::raw(kpis.posts_per_week.to_string()),
        Span::styled("   Ideas ", label),
        Span::raw(kpis.ideas.to_string()),
        Span::styled("   Pillars ", label),
        Span::raw(kpis.pillars.to_string()),
        Span::styled("   Tone ", label),
        Span::raw(kpis.tone.to_string()),
        Span::styled("   Enriched ", label),
        Span::raw(format!("{}/{}", kpis.enriched, kpis.ideas)),
        Span::raw("   "),
        phase_colored(kpis.phase),
    ]);

    let title = match app.session.input().niche.trim() {
        "" => " Content plan ".to_owned(),
        niche => format!(" Content plan: {niche} "),
    };
    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(bar, area);
}

fn render_plan<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_item_table(f, app, chunks[0]);
    render_item_detail(f, app, chunks[1]);
}

fn render_item_table<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Posts ");
    if app.items().is_empty() {
        let empty = Paragraph::new("No plan yet. Press g to generate one.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let header_cells = ["Date", "Format", "Pillar", "", "Idea"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    // Keep the selected row on screen: borders and header take three lines.
    let visible = usize::from(area.height.saturating_sub(3)).max(1);
    let offset = app.selected.saturating_sub(visible - 1);

    let rows = app
        .items()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, item)| {
            let style = if i == app.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let enriched = if item.is_enriched() {
                Span::styled("✓", Style::default().fg(Color::Green))
            } else {
                Span::raw(" ")
            };

            Row::new(vec![
                Cell::from(item.date.format("%a %m-%d").to_string()),
                Cell::from(format_colored(item.format)),
                Cell::from(item.pillar.clone()),
                Cell::from(enriched),
                Cell::from(item.headline().to_owned()),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(18),
            Constraint::Length(1),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

fn render_item_detail<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Detail ");
    let Some(item) = app.selected_item() else {
        f.render_widget(Paragraph::new("Nothing selected.").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::Yellow);
    let mut text = vec![
        Line::from(vec![Span::styled("Date: ", label), Span::raw(item.date.to_string())]),
        Line::from(vec![Span::styled("Format: ", label), Span::raw(item.format.to_string())]),
        Line::from(vec![Span::styled("Pillar: ", label), Span::raw(item.pillar.clone())]),
        Line::from(vec![Span::styled("Idea: ", label), Span::raw(item.idea.clone())]),
        Line::from(""),
    ];
    match &item.caption {
        Some(caption) => {
            text.push(Line::from(Span::styled("Caption", label)));
            text.extend(caption.lines().map(|l| Line::from(l.to_owned())));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                item.hashtag_line(),
                Style::default().fg(Color::Cyan),
            )));
        }
        None => text.push(Line::from(Span::styled(
            "Not enriched yet. Press e to write a caption.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let detail = Paragraph::new(text).wrap(Wrap { trim: false }).block(block);
    f.render_widget(detail, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", heading)),
        Line::from("    j/Down    Select next post"),
        Line::from("    k/Up      Select previous post"),
        Line::from("    Esc/q     Back / Quit"),
        Line::from(""),
        Line::from(Span::styled("  Actions", heading)),
        Line::from("    g         Generate a new plan starting today"),
        Line::from("    e         Enrich selected post"),
        Line::from("    E         Enrich all posts"),
        Line::from("    x         Export plan as CSV"),
        Line::from("    c         Copy caption and hashtags"),
        Line::from(""),
        Line::from(Span::styled("  Other", heading)),
        Line::from("    ?         Show this help"),
        Line::from(""),
    ];

    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(help, area);
}

fn render_status_bar<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let view_name = match app.current_view {
        View::Plan => "Plan",
        View::Help => "Help",
    };
    let status_msg = app.status_message.as_deref().unwrap_or("");

    let bar = Line::from(vec![
        Span::styled(
            format!(" {view_name} "),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(status_msg, Style::default().fg(Color::Green)),
        Span::raw("  q:quit  ?:help  g:generate  e/E:enrich  x:export  c:copy"),
    ]);

    f.render_widget(Paragraph::new(bar), area);
}

// -- Helpers --

fn phase_colored(phase: PlanPhase) -> Span<'static> {
    let color = match phase {
        PlanPhase::Empty => Color::DarkGray,
        PlanPhase::Generated => Color::Cyan,
        PlanPhase::PartiallyEnriched => Color::Yellow,
        PlanPhase::FullyEnriched => Color::Green,
    };
    Span::styled(phase.to_string(), Style::default().fg(color))
}

fn format_colored(format: PostFormat) -> Span<'static> {
    let color = match format {
        PostFormat::Reel => Color::Magenta,
        PostFormat::Carousel => Color::Blue,
        PostFormat::Single => Color::White,
        PostFormat::Story => Color::Cyan,
    };
    Span::styled(format.as_str(), Style::default().fg(color))
}
