use serde::Deserialize;
use std::path::{Path, PathBuf};

use fb_sequence::DEFAULT_MAX;

use crate::style::ColorMode;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sequence: SequenceConfig,
    pub output: OutputConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Inclusive upper bound of the printed range.
    pub max: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { max: DEFAULT_MAX }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: ColorMode,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct JournalConfig {
    /// Append a JSONL record of each run.
    pub enabled: bool,
    /// Custom journal path. Defaults to ~/.local/share/fizzbuzz/runs.jsonl.
    pub path: Option<String>,
}

impl JournalConfig {
    /// Resolve the journal path, using the configured path or the XDG default.
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(ref custom) = self.path {
            return PathBuf::from(custom);
        }

        let base = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".local").join("share")
            });
        base.join("fizzbuzz").join("runs.jsonl")
    }
}

impl Config {
    pub fn load_or_default() -> Self {
        Self::load_from_path(&config_path())
    }

    /// Load from `path`. A missing file means defaults; a broken one warns.
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!(
                    "[fb:config] warning: failed to parse {}: {e}",
                    path.display()
                );
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }
}

fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("fizzbuzz").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.sequence.max, 100);
        assert_eq!(cfg.output.color, ColorMode::Auto);
        assert!(!cfg.journal.enabled);
        assert!(cfg.journal.path.is_none());
    }

    #[test]
    fn parse_empty_toml() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[sequence]
max = 30

[output]
color = "never"

[journal]
enabled = true
path = "/tmp/runs.jsonl"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.sequence.max, 30);
        assert_eq!(cfg.output.color, ColorMode::Never);
        assert!(cfg.journal.enabled);
        assert_eq!(cfg.journal.path.as_deref(), Some("/tmp/runs.jsonl"));
    }

    #[test]
    fn partial_sections_use_defaults() {
        let toml_str = r#"
[output]
color = "always"
"#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.sequence.max, 100);
        assert_eq!(cfg.output.color, ColorMode::Always);
        assert!(!cfg.journal.enabled);
    }

    #[test]
    fn rejects_unknown_color() {
        let toml_str = r#"
[output]
color = "rainbow"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from_path(&dir.path().join("nope.toml"));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_broken_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sequence\nmax = ").unwrap();
        assert_eq!(Config::load_from_path(&path), Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sequence]\nmax = 15\n").unwrap();
        assert_eq!(Config::load_from_path(&path).sequence.max, 15);
    }

    #[test]
    fn resolve_journal_path_custom() {
        let cfg = JournalConfig {
            path: Some("/custom/runs.jsonl".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_path(), PathBuf::from("/custom/runs.jsonl"));
    }

    #[test]
    fn resolve_journal_path_default() {
        let cfg = JournalConfig::default();
        let path = cfg.resolve_path();
        assert!(path.to_string_lossy().ends_with("fizzbuzz/runs.jsonl"));
    }
}
