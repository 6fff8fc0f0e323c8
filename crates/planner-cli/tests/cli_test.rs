//! Integration tests for the `planner` binary.
//!
//! Each test runs the real executable against its own temporary state and
//! config directories.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    state: TempDir,
    config: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            state: TempDir::new().expect("state dir"),
            config: TempDir::new().expect("config dir"),
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_planner"))
            .arg("--state-dir")
            .arg(self.state.path())
            .args(args)
            .current_dir(self.state.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("PLANNER_STATE_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run planner")
    }

    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "planner {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf-8 stdout")
    }

    fn state_file(&self) -> PathBuf {
        self.state.path().join("planner_state_v1.json")
    }
}

fn setup_yoga(sandbox: &Sandbox) {
    sandbox.ok(&[
        "input",
        "set",
        "--niche",
        "Yoga",
        "--audience",
        "Beginners",
        "--posts-per-week",
        "3",
        "--pillars",
        "Education, Inspiration",
        "--keywords",
        "mindful",
    ]);
}

#[test]
fn yoga_walkthrough() {
    let sandbox = Sandbox::new();
    setup_yoga(&sandbox);

    let out = sandbox.ok(&["generate", "--start", "2025-01-06", "--seed", "1"]);
    assert_eq!(out, "Generated 17 posts from 2025-01-06 to 2025-02-03.\n");
    assert!(sandbox.state_file().is_file());

    let list = sandbox.ok(&["list"]);
    assert_eq!(list.lines().count(), 19);
    assert!(list.lines().nth(2).unwrap().starts_with("* 2025-01-06-0"));

    sandbox.ok(&["select", "2025-01-08-1"]);
    assert_eq!(sandbox.ok(&["enrich"]), "Enriched 2025-01-08-1.\n");

    let copy = sandbox.ok(&["copy"]);
    assert!(copy.starts_with("Friendly and clear tone\n\nHook: "));
    assert!(copy.contains("#yoga #beginners #mindful"));

    let status = sandbox.ok(&["status"]);
    assert!(status.contains("Phase: partially_enriched"));
    assert!(status.contains("Enriched:   1/17"));
}

#[test]
fn export_to_stdout_and_file() {
    let sandbox = Sandbox::new();
    setup_yoga(&sandbox);
    sandbox.ok(&["generate", "--start", "2025-01-06", "--seed", "1"]);
    sandbox.ok(&["enrich", "--all"]);

    let csv = sandbox.ok(&["export", "--output", "-"]);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,format,pillar,idea,caption,hashtags"));
    assert!(lines.next().unwrap().starts_with(r#""2025-01-06","Reel","Education","#));
    assert_eq!(csv.lines().count(), 18);

    let out = sandbox.ok(&["export"]);
    assert!(out.starts_with("Exported 17 posts to plan.csv"));
    let written = std::fs::read_to_string(sandbox.state.path().join("plan.csv")).unwrap();
    assert_eq!(written.trim_end(), csv.trim_end());
}

#[test]
fn malformed_state_falls_back_to_defaults() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.state_file(), "definitely not json").unwrap();
    let out = sandbox.ok(&["input", "show"]);
    assert!(out.contains("Posts/week:     4"));
    assert!(out.contains("Tone:           friendly"));
}

#[test]
fn unknown_id_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox.ok(&["generate", "--start", "2025-01-06"]);
    let output = sandbox.run(&["select", "1999-01-01-0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1999-01-01-0"));
}

#[test]
fn init_writes_config_once() {
    let sandbox = Sandbox::new();
    let out = sandbox.ok(&["init"]);
    assert!(out.starts_with("Config written to "));
    let config_file = sandbox.config.path().join("planner").join("config.toml");
    let contents = std::fs::read_to_string(&config_file).unwrap();
    assert!(contents.contains("[storage]"));
    assert!(contents.contains(&sandbox.state.path().display().to_string()));

    assert!(!sandbox.run(&["init"]).status.success());
    sandbox.ok(&["init", "--force"]);
}

#[test]
fn config_seed_makes_generation_repeatable() {
    let a = Sandbox::new();
    let b = Sandbox::new();
    for sandbox in [&a, &b] {
        let dir = sandbox.config.path().join("planner");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[generation]\nseed = 42\n").unwrap();
        sandbox.ok(&["generate", "--start", "2025-01-06"]);
    }
    assert_eq!(a.ok(&["list"]), b.ok(&["list"]));
}

#[test]
fn completions_are_printed() {
    let sandbox = Sandbox::new();
    let out = sandbox.ok(&["completions", "bash"]);
    assert!(out.contains("planner"));
}
