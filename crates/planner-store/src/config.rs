use std::env;
use std::path::{Path, PathBuf};

/// Store configuration.
///
/// Reads from the `PLANNER_STATE_DIR` environment variable, falling back to
/// the platform data directory (`~/.local/share/planner` on Linux) when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per stored key.
    pub state_dir: PathBuf,
}

impl StoreConfig {
    /// Environment variable that overrides the state directory.
    pub const ENV_VAR: &str = "PLANNER_STATE_DIR";

    /// Build a config from the environment.
    ///
    /// Priority: `PLANNER_STATE_DIR` env var, then [`Self::default_state_dir`].
    pub fn from_env() -> Self {
        let state_dir = env::var_os(Self::ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_state_dir);
        Self { state_dir }
    }

    /// Build a config from an explicit directory (useful for tests and CLI flags).
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// The platform data directory joined with `planner`, or `./.planner`
    /// when no data directory can be determined.
    pub fn default_state_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("planner"))
            .unwrap_or_else(|| PathBuf::from(".planner"))
    }

    /// Path of the file backing `key`.
    pub fn file_for_key(&self, key: &str) -> PathBuf {
        file_for_key(&self.state_dir, key)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub(crate) fn file_for_key(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_new() {
        let cfg = StoreConfig::new("/tmp/planner-state");
        assert_eq!(cfg.state_dir, PathBuf::from("/tmp/planner-state"));
    }

    #[test]
    fn file_for_key_appends_json() {
        let cfg = StoreConfig::new("/tmp/planner-state");
        assert_eq!(
            cfg.file_for_key("planner_state_v1"),
            PathBuf::from("/tmp/planner-state/planner_state_v1.json")
        );
    }

    #[test]
    fn default_dir_ends_with_planner() {
        let dir = StoreConfig::default_state_dir();
        assert!(
            dir.ends_with("planner") || dir.ends_with(".planner"),
            "unexpected default dir: {}",
            dir.display()
        );
    }
}
