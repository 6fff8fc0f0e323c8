//! Cadence: which of the 30 days get a post, and what each post is.
//!
//! A day `d` (0-based offset from the start date) is scheduled when
//! `(d % 7) % every_n_days == 0`, with `every_n_days = max(1, 7 / posts)`.
//! Cadences that do not divide 7 therefore produce an uneven weekly rhythm:
//! three posts per week schedules days 0, 2, 4 and 6 of every week.

use chrono::{Days, NaiveDate};
use tracing::info;

use crate::content::{HookPicker, generate_idea};
use crate::input::StrategyInput;

use super::item::{PlanItem, PostFormat};

/// Number of calendar days a plan covers.
pub const PLAN_HORIZON_DAYS: u32 = 30;

/// Pillar used when the input lists none.
pub const DEFAULT_PILLAR: &str = "General";

/// Niche substituted into ideas when the input leaves it blank.
pub const DEFAULT_NICHE: &str = "your niche";

/// Day stride for a requested cadence (clamped to 1..=7 posts per week).
pub fn every_n_days(posts_per_week: i64) -> u32 {
    let posts = posts_per_week.clamp(1, 7) as u32;
    (7 / posts).max(1)
}

/// Whether the day at `day_offset` receives a post under `every` stride.
pub fn is_scheduled(day_offset: u32, every: u32) -> bool {
    (day_offset % 7) % every.max(1) == 0
}

/// Day offsets within the horizon that receive a post.
pub fn scheduled_offsets(posts_per_week: i64) -> Vec<u32> {
    let every = every_n_days(posts_per_week);
    (0..PLAN_HORIZON_DAYS)
        .filter(|d| is_scheduled(*d, every))
        .collect()
}

/// Lay out a fresh 30-day plan starting at `start`.
///
/// Pillars and formats rotate round-robin over scheduled days only; ideas
/// come from [`generate_idea`] through `picker`. The result is sorted by date
/// and replaces any prior plan wholesale.
pub fn build_plan(
    input: &StrategyInput,
    start: NaiveDate,
    picker: &mut dyn HookPicker,
) -> Vec<PlanItem> {
    let pillars = input.pillar_list();
    let niche = match input.niche.trim() {
        "" => DEFAULT_NICHE,
        n => n,
    };
    let every = every_n_days(input.posts_per_week);

    let mut items = Vec::new();
    for offset in (0..PLAN_HORIZON_DAYS).filter(|d| is_scheduled(*d, every)) {
        let Some(date) = start.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        let seq = items.len();
        let pillar = if pillars.is_empty() {
            DEFAULT_PILLAR
        } else {
            pillars[seq % pillars.len()].as_str()
        };
        let format = PostFormat::for_sequence(seq);
        let idea = generate_idea(picker, niche, pillar, format);
        items.push(PlanItem::new(date, seq, pillar, format, idea));
    }

    info!(
        start = %start,
        posts_per_week = input.clamped_posts_per_week(),
        every_n_days = every,
        items = items.len(),
        "built content plan"
    );
    items
}
