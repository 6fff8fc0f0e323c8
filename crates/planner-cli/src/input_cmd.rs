//! `planner input` commands: print and edit the strategy inputs.

use std::io::Write;

use anyhow::{Result, bail};

use planner_core::input::parse_posts_per_week;
use planner_core::{InputEdit, Session, StrategyInput};
use planner_store::KeyValueStore;

use crate::{InputCommands, InputSetArgs};

pub fn run_input_command<S: KeyValueStore>(
    command: InputCommands,
    session: &mut Session<S>,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        InputCommands::Show => print_input(session.input(), out),
        InputCommands::Set(args) => {
            let edit = edit_from_args(args);
            if edit.is_empty() {
                bail!("nothing to update; pass at least one field (see `planner input set --help`)");
            }
            session.update_input(edit);
            writeln!(out, "Inputs updated.")?;
            writeln!(out)?;
            print_input(session.input(), out)
        }
    }
}

/// Map CLI flags onto a partial input edit.
fn edit_from_args(args: InputSetArgs) -> InputEdit {
    InputEdit {
        niche: args.niche,
        audience: args.audience,
        tone: args.tone,
        posts_per_week: args.posts_per_week.as_deref().map(parse_posts_per_week),
        pillars: args.pillars,
        brand_keywords: args.keywords,
        offers: args.offers,
        ctas: args.ctas,
    }
}

fn print_input(input: &StrategyInput, out: &mut dyn Write) -> Result<()> {
    let clamped = input.clamped_posts_per_week();
    let cadence = if i64::from(clamped) == input.posts_per_week {
        input.posts_per_week.to_string()
    } else {
        format!("{} (generates {clamped})", input.posts_per_week)
    };

    writeln!(out, "Niche:          {}", or_dash(&input.niche))?;
    writeln!(out, "Audience:       {}", or_dash(&input.audience))?;
    writeln!(out, "Tone:           {}", input.tone)?;
    writeln!(out, "Posts/week:     {cadence}")?;
    writeln!(out, "Pillars:        {}", or_dash(&input.pillar_list().join(", ")))?;
    writeln!(out, "Brand keywords: {}", or_dash(&input.keyword_list().join(", ")))?;
    writeln!(out, "Offers:         {}", or_dash(&input.offer_list().join(", ")))?;
    writeln!(out, "CTAs:           {}", or_dash(&input.cta_list().join(", ")))?;
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}

#[cfg(test)]
mod tests {
    use planner_core::Tone;
    use planner_store::MemoryStore;

    use super::*;

    fn run(session: &mut Session<MemoryStore>, command: InputCommands) -> Result<String> {
        let mut buf = Vec::new();
        run_input_command(command, session, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn show_defaults() {
        let mut s = Session::open(MemoryStore::new());
        let text = run(&mut s, InputCommands::Show).unwrap();
        assert!(text.contains("Niche:          -\n"));
        assert!(text.contains("Tone:           friendly\n"));
        assert!(text.contains("Posts/week:     4\n"));
        assert!(text.contains("Pillars:        Education, Inspiration, Behind the scenes, Sales\n"));
    }

    #[test]
    fn set_applies_partial_edit() {
        let mut s = Session::open(MemoryStore::new());
        let args = InputSetArgs {
            niche: Some("Yoga".to_owned()),
            tone: Some(Tone::Inspirational),
            posts_per_week: Some("12".to_owned()),
            ..Default::default()
        };
        let text = run(&mut s, InputCommands::Set(args)).unwrap();
        assert!(text.starts_with("Inputs updated.\n"));
        assert!(text.contains("Posts/week:     12 (generates 7)\n"));
        assert_eq!(s.input().niche, "Yoga");
        assert_eq!(s.input().tone, Tone::Inspirational);
        assert_eq!(s.input().posts_per_week, 12);
        assert_eq!(s.input().audience, "");
    }

    #[test]
    fn non_numeric_cadence_becomes_one() {
        let mut s = Session::open(MemoryStore::new());
        let args = InputSetArgs {
            posts_per_week: Some("lots".to_owned()),
            ..Default::default()
        };
        run(&mut s, InputCommands::Set(args)).unwrap();
        assert_eq!(s.input().posts_per_week, 1);
    }

    #[test]
    fn empty_set_is_rejected() {
        let mut s = Session::open(MemoryStore::new());
        assert!(run(&mut s, InputCommands::Set(InputSetArgs::default())).is_err());
    }
}
