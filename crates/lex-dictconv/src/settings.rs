//! Converter settings loaded from TOML.
//!
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(toml)` parses and validates a custom file
//!
//! Settings are plain values handed to the converter; there is no global
//! instance.

use serde::Deserialize;

use crate::convert::Profile;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile: Profile,
    pub cost: CostSettings,
    pub input: InputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

/// Affine cost rescale: `base + clamp(cost, 0, max_source_cost) / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CostSettings {
    pub base: i64,
    pub max_source_cost: i64,
    pub divisor: i64,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            base: 6000,
            max_source_cost: 19999,
            divisor: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub existing_prefix: String,
    pub existing_suffix: String,
    pub source_files: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        };
    }

    check_non_negative!(cost.base);
    check_non_negative!(cost.max_source_cost);
    if s.cost.divisor <= 0 {
        return Err(SettingsError::InvalidValue {
            field: "cost.divisor".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    let max_target = s.cost.base + s.cost.max_source_cost / s.cost.divisor;
    if max_target > i64::from(i16::MAX) {
        return Err(SettingsError::InvalidValue {
            field: "cost".to_string(),
            reason: format!("maximum target cost {max_target} exceeds {}", i16::MAX),
        });
    }

    if s.input.source_files.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "input.source_files".to_string(),
            reason: "must list at least one file".to_string(),
        });
    }
    if s.input.source_files.iter().any(|f| f.trim().is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "input.source_files".to_string(),
            reason: "file names must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.profile, Profile::Strict);
        assert_eq!(s.cost, CostSettings::default());
        assert_eq!(s.input.existing_prefix, "dictionary");
        assert_eq!(s.input.existing_suffix, ".txt");
        assert_eq!(s.input.source_files, vec!["core_lex.csv", "notcore_lex.csv"]);
    }

    #[test]
    fn default_matches_embedded_toml() {
        let s = Settings::default();
        assert_eq!(s.cost.base, 6000);
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }

    #[test]
    fn parse_relaxed_profile() {
        let toml = r#"
profile = "relaxed"

[cost]
base = 5000
max_source_cost = 9999
divisor = 5

[input]
existing_prefix = "dictionary"
existing_suffix = ".txt"
source_files = ["small_lex.csv"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.profile, Profile::Relaxed);
        assert_eq!(s.cost.divisor, 5);
        assert_eq!(s.input.source_files, vec!["small_lex.csv"]);
    }

    #[test]
    fn missing_profile_defaults_to_strict() {
        let toml = r#"
[cost]
base = 6000
max_source_cost = 19999
divisor = 10

[input]
existing_prefix = "dictionary"
existing_suffix = ".txt"
source_files = ["core_lex.csv"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.profile, Profile::Strict);
    }

    #[test]
    fn reject_zero_divisor() {
        let toml = DEFAULT_SETTINGS_TOML.replace("divisor = 10", "divisor = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("cost.divisor"), "{err}");
    }

    #[test]
    fn reject_negative_base() {
        let toml = DEFAULT_SETTINGS_TOML.replace("base = 6000", "base = -1");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("cost.base"), "{err}");
    }

    #[test]
    fn reject_cost_overflowing_i16() {
        let toml = DEFAULT_SETTINGS_TOML.replace("base = 6000", "base = 32000");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn reject_empty_source_list() {
        let toml = DEFAULT_SETTINGS_TOML.replace(
            r#"source_files = ["core_lex.csv", "notcore_lex.csv"]"#,
            "source_files = []",
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("input.source_files"), "{err}");
    }

    #[test]
    fn reject_unknown_profile() {
        let toml = DEFAULT_SETTINGS_TOML.replace(r#"profile = "strict""#, r#"profile = "lenient""#);
        assert!(matches!(
            parse_settings_toml(&toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn reject_malformed_toml() {
        assert!(matches!(
            parse_settings_toml("profile = "),
            Err(SettingsError::Parse(_))
        ));
    }
}
