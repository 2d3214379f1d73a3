//! Analyzer configuration support
//!
//! Loads configuration from `docscore.toml` or `.docscorerc.json` in the
//! working directory, falling back to `~/.config/docscore/config.toml`.
//!
//! # Configuration Format
//!
//! ```toml
//! # docscore.toml
//! unknown_model = "Unknown Model"
//!
//! # Registry order is the match order: first key found wins.
//! [[models]]
//! key = "model1"
//! name = "Model A"
//!
//! [[spelling.mistakes]]
//! wrong = "teh"
//! correct = "the"
//!
//! [history]
//! max_entries = 1000
//!
//! [defaults]
//! format = "text"
//! fail_under = 50.0
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Project config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "docscore.toml";

/// JSON alternative to `docscore.toml`
const JSON_CONFIG_FILE_NAME: &str = ".docscorerc.json";

/// Model match result when no registry key appears in the text
pub const UNKNOWN_MODEL: &str = "Unknown Model";

/// Example written by `docscore init`
pub const EXAMPLE_CONFIG: &str = r#"# docscore configuration

# Returned when no model key appears in the document
unknown_model = "Unknown Model"

# Model registry. Keys are matched case-insensitively as substrings of the
# document text, in the order listed here. The first match wins.
[[models]]
key = "model1"
name = "Model A"

[[models]]
key = "model2"
name = "Model B"

[[models]]
key = "model3"
name = "Model C"

# Known misspellings. Only the presence of `wrong` is checked.
[[spelling.mistakes]]
wrong = "teh"
correct = "the"

[[spelling.mistakes]]
wrong = "adn"
correct = "and"

[[spelling.mistakes]]
wrong = "thier"
correct = "their"

[history]
# Keep at most this many scores per scorer (omit for unbounded)
# max_entries = 1000

[defaults]
# Default output format (text, json, markdown)
format = "text"

# Exit with code 1 when any score falls below this percentage
# fail_under = 50.0
"#;

/// One Model Registry entry: a keyword and the display name it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub key: String,
    pub name: String,
}

impl ModelEntry {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// One Known-Mistakes Dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeEntry {
    pub wrong: String,
    pub correct: String,
}

impl MistakeEntry {
    pub fn new(wrong: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            correct: correct.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingConfig {
    #[serde(default = "default_mistakes")]
    pub mistakes: Vec<MistakeEntry>,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            mistakes: default_mistakes(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum scores kept per scorer; `None` keeps everything
    #[serde(default)]
    pub max_entries: Option<usize>,
}

/// Default CLI flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliDefaults {
    #[serde(default)]
    pub format: Option<String>,

    /// Percentage threshold for a failing exit code
    #[serde(default)]
    pub fail_under: Option<f64>,
}

/// Immutable analyzer configuration, handed to the pipeline at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_models")]
    pub models: Vec<ModelEntry>,

    #[serde(default = "default_unknown_model")]
    pub unknown_model: String,

    #[serde(default)]
    pub spelling: SpellingConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub defaults: CliDefaults,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            models: default_models(),
            unknown_model: default_unknown_model(),
            spelling: SpellingConfig::default(),
            history: HistoryConfig::default(),
            defaults: CliDefaults::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Replace the Model Registry
    pub fn with_models(mut self, models: Vec<ModelEntry>) -> Self {
        self.models = models;
        self
    }

    /// Replace the Known-Mistakes Dictionary
    pub fn with_mistakes(mut self, mistakes: Vec<MistakeEntry>) -> Self {
        self.spelling.mistakes = mistakes;
        self
    }

    /// Cap the learning history
    pub fn with_history_limit(mut self, max_entries: usize) -> Self {
        self.history.max_entries = Some(max_entries);
        self
    }

    /// Reject entries that would match every document
    ///
    /// An empty key or misspelling is a substring of every text.
    pub fn validate(&self) -> Result<()> {
        if let Some(entry) = self.models.iter().find(|m| m.key.trim().is_empty()) {
            anyhow::bail!("Model '{}' has an empty key", entry.name);
        }
        if let Some(entry) = self
            .spelling
            .mistakes
            .iter()
            .find(|m| m.wrong.is_empty())
        {
            anyhow::bail!(
                "Spelling entry for '{}' has an empty misspelling",
                entry.correct
            );
        }
        if self.history.max_entries == Some(0) {
            anyhow::bail!("history.max_entries must be at least 1");
        }
        if let Some(pct) = self.defaults.fail_under {
            if !(0.0..=100.0).contains(&pct) {
                anyhow::bail!("defaults.fail_under must be between 0 and 100, got {}", pct);
            }
        }
        Ok(())
    }
}

fn default_models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new("model1", "Model A"),
        ModelEntry::new("model2", "Model B"),
        ModelEntry::new("model3", "Model C"),
    ]
}

fn default_mistakes() -> Vec<MistakeEntry> {
    vec![
        MistakeEntry::new("teh", "the"),
        MistakeEntry::new("adn", "and"),
        MistakeEntry::new("thier", "their"),
    ]
}

fn default_unknown_model() -> String {
    UNKNOWN_MODEL.to_string()
}

/// Get the user config file path (~/.config/docscore/config.toml)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("docscore").join("config.toml"))
}

/// Discover and load configuration for a working directory
///
/// Lookup order: `docscore.toml`, `.docscorerc.json`, then the user config.
/// A file that fails to load is skipped with a warning.
pub fn load_config(dir: &Path) -> AnalyzerConfig {
    let candidates = [
        dir.join(CONFIG_FILE_NAME),
        dir.join(JSON_CONFIG_FILE_NAME),
    ];

    for path in candidates.iter().cloned().chain(user_config_path()) {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    AnalyzerConfig::default()
}

/// Load and validate a specific config file (TOML, or JSON by extension)
pub fn load_config_file(path: &Path) -> Result<AnalyzerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let config: AnalyzerConfig = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    } else {
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))?
    };

    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_registry_order() {
        let config = AnalyzerConfig::default();
        let keys: Vec<&str> = config.models.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["model1", "model2", "model3"]);
        assert_eq!(config.spelling.mistakes.len(), 3);
        assert_eq!(config.unknown_model, UNKNOWN_MODEL);
        assert!(config.history.max_entries.is_none());
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: AnalyzerConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        let defaults = AnalyzerConfig::default();
        assert_eq!(config.models, defaults.models);
        assert_eq!(config.spelling, defaults.spelling);
        assert_eq!(config.defaults.format.as_deref(), Some("text"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_preserves_model_order() {
        let toml_str = r#"
[[models]]
key = "zeta"
name = "Zeta"

[[models]]
key = "alpha"
name = "Alpha"
"#;
        let config: AnalyzerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models[0].key, "zeta");
        assert_eq!(config.models[1].key, "alpha");
        // Untouched sections keep their defaults
        assert_eq!(config.spelling.mistakes.len(), 3);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AnalyzerConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = AnalyzerConfig::default().with_models(vec![ModelEntry::new("", "Anything")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_misspelling() {
        let config = AnalyzerConfig::default().with_mistakes(vec![MistakeEntry::new("", "x")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_history_cap() {
        let config = AnalyzerConfig::default().with_history_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_prefers_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "unknown_model = \"from toml\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(JSON_CONFIG_FILE_NAME),
            r#"{"unknown_model": "from json"}"#,
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.unknown_model, "from toml");
    }

    #[test]
    fn test_load_config_reads_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(JSON_CONFIG_FILE_NAME),
            r#"{"models": [{"key": "x1", "name": "X One"}]}"#,
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.models, vec![ModelEntry::new("x1", "X One")]);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "this is [[ not valid toml {{{}}}",
        )
        .unwrap();

        let config = load_config(dir.path());
        assert_eq!(config.models, AnalyzerConfig::default().models);
    }

    #[test]
    fn test_load_config_file_reports_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[models]]\nkey = \"\"\nname = \"Empty\"\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("empty key"));
        assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
    }
}
