//! Operator CLI handlers for the plan commands.
//!
//! Implements:
//! - `planner generate [--start DATE] [--seed N]` -- lay out a fresh plan
//! - `planner list`                               -- table of planned posts
//! - `planner show [ID]`                          -- one post in full
//! - `planner select ID`                          -- move the selection
//! - `planner enrich [--all]`                     -- captions and hashtags

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{NaiveDate, Utc};

use planner_core::{HookPicker, PlanItem, RandomPicker, Session};
use planner_store::KeyValueStore;

/// Hook picker for a run: seeded when a seed is configured.
pub fn picker_for(seed: Option<u64>) -> Box<dyn HookPicker> {
    match seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::thread()),
    }
}

// -----------------------------------------------------------------------
// planner generate
// -----------------------------------------------------------------------

pub fn run_generate<S: KeyValueStore>(
    session: &mut Session<S>,
    start: Option<NaiveDate>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<()> {
    let start = start.unwrap_or_else(|| Utc::now().date_naive());
    let mut picker = picker_for(seed);
    session.generate(start, picker.as_mut());

    let plan = session.plan();
    match (plan.items.first(), plan.items.last()) {
        (Some(first), Some(last)) => writeln!(
            out,
            "Generated {} posts from {} to {}.",
            plan.len(),
            first.date,
            last.date
        )?,
        _ => writeln!(out, "Generated an empty plan.")?,
    }
    Ok(())
}

// -----------------------------------------------------------------------
// planner list
// -----------------------------------------------------------------------

pub fn run_list<S: KeyValueStore>(session: &Session<S>, out: &mut dyn Write) -> Result<()> {
    let plan = session.plan();
    if plan.is_empty() {
        writeln!(out, "No plan yet. Use `planner generate` to create one.")?;
        return Ok(());
    }

    let id_w = plan.iter().map(|i| i.id.len()).max().unwrap_or(2).max(2);
    let pillar_w = plan.iter().map(|i| i.pillar.len()).max().unwrap_or(6).max(6);

    writeln!(
        out,
        "  {:<id_w$}  {:<10}  {:<8}  {:<pillar_w$}  {:<3}  IDEA",
        "ID", "DATE", "FORMAT", "PILLAR", "ENR"
    )?;
    writeln!(out, "{}", "-".repeat(id_w + pillar_w + 40))?;
    for item in plan {
        let marker = if plan.selected_id.as_deref() == Some(item.id.as_str()) {
            '*'
        } else {
            ' '
        };
        let enriched = if item.is_enriched() { "yes" } else { "-" };
        writeln!(
            out,
            "{marker} {:<id_w$}  {:<10}  {:<8}  {:<pillar_w$}  {:<3}  {}",
            item.id,
            item.date,
            item.format,
            item.pillar,
            enriched,
            item.headline()
        )?;
    }
    Ok(())
}

// -----------------------------------------------------------------------
// planner show
// -----------------------------------------------------------------------

/// Find `id`, or the selected item when `id` is `None`.
pub fn resolve_item<'a, S: KeyValueStore>(
    session: &'a Session<S>,
    id: Option<&str>,
) -> Result<Option<&'a PlanItem>> {
    let plan = session.plan();
    match id {
        Some(id) => match plan.get(id) {
            Some(item) => Ok(Some(item)),
            None => bail!("no planned post with ID {id}"),
        },
        None => Ok(plan.selected()),
    }
}

pub fn run_show<S: KeyValueStore>(
    session: &Session<S>,
    id: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(item) = resolve_item(session, id)? else {
        writeln!(out, "No post selected. Use `planner select <ID>` first.")?;
        return Ok(());
    };

    writeln!(out, "Post:    {}", item.id)?;
    writeln!(out, "Date:    {}", item.date.format("%a %Y-%m-%d"))?;
    writeln!(out, "Format:  {}", item.format)?;
    writeln!(out, "Pillar:  {}", item.pillar)?;
    writeln!(out, "Idea:    {}", item.idea)?;
    writeln!(out)?;
    match &item.caption {
        Some(caption) => {
            writeln!(out, "Caption:")?;
            for line in caption.lines() {
                writeln!(out, "  {line}")?;
            }
            writeln!(out)?;
            writeln!(out, "Hashtags: {}", item.hashtag_line())?;
        }
        None => writeln!(out, "Not enriched yet. Use `planner enrich` to write a caption.")?,
    }
    Ok(())
}

// -----------------------------------------------------------------------
// planner select
// -----------------------------------------------------------------------

pub fn run_select<S: KeyValueStore>(
    session: &mut Session<S>,
    id: &str,
    out: &mut dyn Write,
) -> Result<()> {
    if session.plan().get(id).is_none() {
        bail!("no planned post with ID {id}");
    }
    session.select(id);
    writeln!(out, "Selected {id}.")?;
    Ok(())
}

// -----------------------------------------------------------------------
// planner enrich
// -----------------------------------------------------------------------

pub fn run_enrich<S: KeyValueStore>(
    session: &mut Session<S>,
    all: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if all {
        if session.enrich_all() {
            writeln!(out, "Enriched {} posts.", session.plan().len())?;
        } else if session.plan().is_empty() {
            writeln!(out, "Nothing to enrich: the plan is empty.")?;
        } else {
            writeln!(out, "All {} posts already up to date.", session.plan().len())?;
        }
        return Ok(());
    }

    let Some(id) = session.plan().selected_id.clone() else {
        writeln!(out, "Nothing to enrich: no post selected.")?;
        return Ok(());
    };
    session.enrich_selected();
    writeln!(out, "Enriched {id}.")?;
    Ok(())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
