use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{CategoriesConfig, CategoryClassifier, CategoryStore};
use crate::error::{FolioError, Result};
use crate::shell::Mode;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# folio configuration file
# Location: ~/.folio/config.toml

[shell]
# Start mode: "cli" (type commands) or "touch" (pick numbered entries)
mode = "cli"

# Colored output
color = true

[content]
# Replace the builtin portfolio with your own TOML document
# path = "/home/me/portfolio.toml"

# Extra or replacement sub-directory rules.
# Patterns are globs matched against lowercased "<name> <stack>" (projects)
# or "<name> <issuer> <skills>" (certifications). Higher priority wins.
#
# [categories.projects.devops]
# description = "Infrastructure as code"
# patterns = ["*terraform*", "*kubernetes*"]
# priority = 350
#
# [categories.certifications]
# default = "software-engineering"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub categories: CategoryOverrides,
}

/// Shell-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    /// Initial mode
    #[serde(default)]
    pub mode: Mode,

    /// Colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            color: default_color(),
        }
    }
}

/// Content source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentConfig {
    /// Content document replacing the builtin one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Rule overrides per grouped directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryOverrides {
    #[serde(default, skip_serializing_if = "CategoriesConfig::is_empty")]
    pub projects: CategoriesConfig,

    #[serde(default, skip_serializing_if = "CategoriesConfig::is_empty")]
    pub certifications: CategoriesConfig,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| FolioError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "shell.mode" => Some(self.shell.mode.as_str().to_string()),
            "shell.color" => Some(self.shell.color.to_string()),
            "content.path" => Some(
                self.content
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key. An empty `content.path` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || FolioError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "shell.mode" => {
                self.shell.mode = value.trim().parse().map_err(|_| invalid())?;
                Ok(())
            }
            "shell.color" => {
                self.shell.color = value.trim().parse().map_err(|_| invalid())?;
                Ok(())
            }
            "content.path" => {
                let value = value.trim();
                self.content.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(FolioError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["shell.mode", "shell.color", "content.path"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Project and certification classifiers with overrides applied
    pub fn classifiers(&self) -> Result<(CategoryClassifier, CategoryClassifier)> {
        let projects =
            CategoryClassifier::new(CategoryStore::projects().with_config(&self.categories.projects))?;
        let certifications = CategoryClassifier::new(
            CategoryStore::certifications().with_config(&self.categories.certifications),
        )?;
        Ok((projects, certifications))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.shell.color);
    }

    #[test]
    fn test_init_template_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert!(path.exists());

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.shell.mode, Mode::Cli);
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("shell.mode", "touch").unwrap();
        assert_eq!(config.get("shell.mode").as_deref(), Some("touch"));

        config.set("content.path", "/tmp/me.toml").unwrap();
        assert_eq!(config.get("content.path").as_deref(), Some("/tmp/me.toml"));

        config.set("content.path", "").unwrap();
        assert!(config.content.path.is_none());
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("shell.mode", "mouse"),
            Err(FolioError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("shell.color", "maybe"),
            Err(FolioError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("nope", "1"),
            Err(FolioError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_save_and_reload_with_categories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            Config::path(dir.path()),
            r#"
[shell]
mode = "touch"

[categories.projects.devops]
patterns = ["*terraform*"]
priority = 350
"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert_eq!(config.shell.mode, Mode::Touch);
        assert_eq!(config.categories.projects.categories.len(), 1);

        config.set("shell.color", "false").unwrap();
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded, config);

        let (projects, _) = reloaded.classifiers().unwrap();
        assert_eq!(projects.classify("Infra Terraform, AWS"), "devops");
    }

    #[test]
    fn test_config_parse_error_has_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Config::path(dir.path()), "[shell\nmode=").unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse { .. }));
    }
}
