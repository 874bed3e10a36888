//! Scaffolder configuration
//!
//! Every tool the scaffolder shells out to is named here explicitly
//! rather than discovered ad hoc at the call site. Defaults are
//! compiled in, a user-level `scaffold/config.toml` overrides them, and
//! CLI flags override the file (applied by the binary after `load`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default package manager binary.
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

/// Default editor binary opened on the finished project.
pub const DEFAULT_EDITOR: &str = "code";

#[derive(Debug, Clone)]
pub struct Config {
    /// Package manager binary (also drives `create` and `dlx`).
    pub package_manager: String,
    /// Editor binary to open on the generated tree.
    pub editor: String,
    /// Whether to open the editor at all.
    pub launch_editor: bool,
    /// Directory the project is created under. Defaults to the current
    /// working directory; tilde paths are expanded.
    pub projects_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            editor: DEFAULT_EDITOR.to_string(),
            launch_editor: true,
            projects_dir: None,
        }
    }
}

/// On-disk shape of `<config_dir>/scaffold/config.toml`. All fields
/// optional so a partial file only overrides what it names.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    package_manager: Option<String>,
    editor: Option<String>,
    launch_editor: Option<bool>,
    projects_dir: Option<String>,
}

impl Config {
    /// Load configuration: compiled-in defaults merged with the user
    /// config file, if one exists.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = user_config_path() {
            if path.exists() {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let file: ConfigFile = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                config.apply_file(file);
            }
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(pm) = file.package_manager {
            self.package_manager = pm;
        }
        if let Some(editor) = file.editor {
            self.editor = editor;
        }
        if let Some(launch) = file.launch_editor {
            self.launch_editor = launch;
        }
        if let Some(dir) = file.projects_dir {
            self.projects_dir = Some(expand_path(&dir));
        }
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scaffold").join("config.toml"))
}
