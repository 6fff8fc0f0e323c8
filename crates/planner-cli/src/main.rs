mod config;
mod export_cmd;
mod input_cmd;
mod plan_cmds;
mod status_cmd;
#[cfg(test)]
mod test_util;
mod tui;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::bail;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use planner_core::Session;
use planner_store::FileStore;

use config::PlannerConfig;

#[derive(Parser)]
#[command(name = "planner", version, about = "Offline 30-day social content planner")]
struct Cli {
    /// Directory holding planner state (overrides PLANNER_STATE_DIR env var)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a planner config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show or edit the strategy inputs
    Input {
        #[command(subcommand)]
        command: InputCommands,
    },
    /// Generate a fresh 30-day plan from the current inputs
    Generate {
        /// First day of the plan (YYYY-MM-DD, default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Seed for hook selection (overrides generation.seed in config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the planned posts
    List,
    /// Show one post in full (default: the selected post)
    Show {
        /// Post ID (e.g. 2025-01-06-0)
        id: Option<String>,
    },
    /// Select a post
    Select {
        /// Post ID to select
        id: String,
    },
    /// Generate caption and hashtags for the selected post
    Enrich {
        /// Enrich every post instead of just the selected one
        #[arg(long)]
        all: bool,
    },
    /// Export the plan as CSV
    Export {
        /// Output file path (`-` for stdout; default from config or plan.csv)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Print a post's caption and hashtags, ready to paste
    Copy {
        /// Post ID (default: the selected post)
        id: Option<String>,
    },
    /// Show plan phase and summary figures
    Status,
    /// Launch interactive TUI dashboard
    Dashboard,
    /// Print shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum InputCommands {
    /// Print the current strategy inputs
    Show,
    /// Update one or more strategy inputs
    Set(InputSetArgs),
}

#[derive(Args, Debug, Default)]
pub struct InputSetArgs {
    /// Business niche (e.g. "Yoga studio")
    #[arg(long)]
    pub niche: Option<String>,
    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,
    /// Caption tone: friendly, professional, humorous, inspirational
    #[arg(long)]
    pub tone: Option<planner_core::Tone>,
    /// Posts per week (clamped to 1..=7 when generating)
    #[arg(long, allow_hyphen_values = true)]
    pub posts_per_week: Option<String>,
    /// Comma-separated content pillars
    #[arg(long)]
    pub pillars: Option<String>,
    /// Comma-separated brand keywords
    #[arg(long)]
    pub keywords: Option<String>,
    /// Comma-separated offers
    #[arg(long)]
    pub offers: Option<String>,
    /// Comma-separated calls to action
    #[arg(long)]
    pub ctas: Option<String>,
}

/// Execute the `planner init` command: write config file.
fn cmd_init(cli_state_dir: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let state_dir = cli_state_dir.unwrap_or_else(planner_store::StoreConfig::default_state_dir);
    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            state_dir: Some(state_dir.clone()),
        },
        export: config::ExportSection {
            filename: Some(planner_core::export::DEFAULT_EXPORT_FILENAME.to_owned()),
        },
        generation: config::GenerationSection::default(),
    };
    let path = config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  storage.state_dir = {}", state_dir.display());
    println!();
    println!("Next: run `planner input set --niche ...` and then `planner generate`.");

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Commands that never touch the planner state.
    match cli.command {
        Commands::Init { force } => return cmd_init(cli.state_dir, force),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "planner", &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let resolved = PlannerConfig::resolve(cli.state_dir.as_deref())?;
    tracing::debug!(state_dir = %resolved.store.state_dir.display(), "resolved configuration");
    let mut session = Session::open(FileStore::from_config(&resolved.store));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Input { command } => {
            input_cmd::run_input_command(command, &mut session, &mut out)?;
        }
        Commands::Generate { start, seed } => {
            let seed = seed.or(resolved.seed);
            plan_cmds::run_generate(&mut session, start, seed, &mut out)?;
        }
        Commands::List => plan_cmds::run_list(&session, &mut out)?,
        Commands::Show { id } => plan_cmds::run_show(&session, id.as_deref(), &mut out)?,
        Commands::Select { id } => plan_cmds::run_select(&mut session, &id, &mut out)?,
        Commands::Enrich { all } => plan_cmds::run_enrich(&mut session, all, &mut out)?,
        Commands::Export { output } => {
            let target =
                export_cmd::ExportTarget::parse(output.as_deref(), &resolved.export_filename);
            export_cmd::run_export(&session, &target, &mut out)?;
        }
        Commands::Copy { id } => export_cmd::run_copy(&session, id.as_deref(), &mut out)?,
        Commands::Status => status_cmd::run_status(&session, &resolved, &mut out)?,
        Commands::Dashboard => {
            drop(out);
            tui::run_dashboard(session, &resolved)?;
            return Ok(());
        }
        Commands::Init { .. } | Commands::Completions { .. } => {}
    }

    out.flush()?;
    Ok(())
}
