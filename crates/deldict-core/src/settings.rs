//! Dictionary settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates a TOML string
//! - `load_settings(path)` does the same for a file
//! - `Settings::default()` uses the values embedded from `default_settings.toml`
//!
//! Settings are owned by each `DeletionDictionary`. The only process-wide
//! state is the parsed copy of the embedded defaults.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::subsequence::CharUnit;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchingSettings {
    #[serde(default)]
    pub unit: CharUnit,
}

impl Default for Settings {
    /// The embedded `default_settings.toml`, parsed once per process.
    fn default() -> Self {
        static DEFAULTS: OnceLock<Settings> = OnceLock::new();
        DEFAULTS
            .get_or_init(|| {
                parse_settings_toml(DEFAULT_SETTINGS_TOML)
                    .expect("embedded default settings TOML must be valid")
            })
            .clone()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| {
        let msg = e.to_string();
        // An unknown `unit` string surfaces as a serde variant error.
        if msg.contains("unknown variant") {
            SettingsError::InvalidValue {
                field: "matching.unit".to_string(),
                reason: "must be \"char\" or \"utf16\"".to_string(),
            }
        } else {
            SettingsError::Parse(msg)
        }
    })
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings_toml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.matching.unit, CharUnit::Char);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn default_toml_is_embedded_text() {
        assert!(default_toml().contains("[matching]"));
    }

    #[test]
    fn parse_utf16_unit() {
        let toml = r#"
[matching]
unit = "utf16"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.matching.unit, CharUnit::Utf16);
    }

    #[test]
    fn unit_omitted_defaults_to_char() {
        let s = parse_settings_toml("[matching]\n").unwrap();
        assert_eq!(s.matching.unit, CharUnit::Char);
    }

    #[test]
    fn error_unknown_unit() {
        let toml = r#"
[matching]
unit = "bytes"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("matching.unit"));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_unknown_field() {
        let toml = r#"
[matching]
unit = "char"
case_fold = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().contains("case_fold"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deldict.toml");
        fs::write(&path, "[matching]\nunit = \"utf16\"\n").unwrap();

        let s = load_settings(&path).unwrap();
        assert_eq!(s.matching.unit, CharUnit::Utf16);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
