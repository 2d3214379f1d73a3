//! Configuration module for docscore
//!
//! This module handles:
//! - The Model Registry used for model matching
//! - The Known-Mistakes Dictionary used by the spelling scorer
//! - Learning history limits
//! - CLI defaults

mod analyzer_config;

pub use analyzer_config::{
    AnalyzerConfig, CliDefaults, HistoryConfig, MistakeEntry, ModelEntry, SpellingConfig,
    load_config, load_config_file, user_config_path, CONFIG_FILE_NAME, EXAMPLE_CONFIG,
    UNKNOWN_MODEL,
};
