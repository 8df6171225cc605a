use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const LAW_ENV_VAR: &str = "PANTRY_MATCH_LAW";
pub const THRESHOLD_ENV_VAR: &str = "PANTRY_MATCH_THRESHOLD";
pub const TAG_BONUS_ENV_VAR: &str = "PANTRY_MATCH_TAG_BONUS";

/// How a recipe's match percentage is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringLaw {
    /// Mean of ingredient and cookware coverage, plus a bonus per tag category hit.
    #[default]
    Weighted,
    /// Share of the recipe's protein/veggie/herb tags hit by the selection. No bonus.
    TagOverlap,
}

impl fmt::Display for ScoringLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringLaw::Weighted => write!(f, "weighted"),
            ScoringLaw::TagOverlap => write!(f, "tag-overlap"),
        }
    }
}

impl FromStr for ScoringLaw {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weighted" => Ok(ScoringLaw::Weighted),
            "tag-overlap" | "tag_overlap" => Ok(ScoringLaw::TagOverlap),
            other => Err(ConfigError::UnknownScoringLaw(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownScoringLaw(String),
    InvalidNumber { var: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownScoringLaw(name) => {
                write!(f, "Unknown scoring law '{}' (expected 'weighted' or 'tag-overlap')", name)
            }
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{} must be a finite number, got '{}'", var, value)
            }
        }
    }
}

impl Error for ConfigError {}

/// Tunables for a matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub law: ScoringLaw,
    /// Results are kept only when `match_percentage > threshold`.
    pub threshold: f64,
    /// Credit per tag category (protein, veggie, herb) under [`ScoringLaw::Weighted`].
    pub tag_bonus: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            law: ScoringLaw::Weighted,
            threshold: 0.0,
            tag_bonus: 10.0,
        }
    }
}

/// Parses a finite `f64`; `var` names the setting in the error.
pub fn parse_number(var: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            var: var.to_string(),
            value: value.to_string(),
        })
}

impl MatchConfig {
    /// Defaults overridden by `PANTRY_MATCH_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`MatchConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = MatchConfig::default();
        if let Some(law) = lookup(LAW_ENV_VAR) {
            config.law = law.parse()?;
        }
        if let Some(threshold) = lookup(THRESHOLD_ENV_VAR) {
            config.threshold = parse_number(THRESHOLD_ENV_VAR, &threshold)?;
        }
        if let Some(bonus) = lookup(TAG_BONUS_ENV_VAR) {
            config.tag_bonus = parse_number(TAG_BONUS_ENV_VAR, &bonus)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = MatchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(config.law, ScoringLaw::Weighted);
        assert_eq!(config.threshold, 0.0);
        assert_eq!(config.tag_bonus, 10.0);
    }

    #[test]
    fn test_overrides() {
        let config = MatchConfig::from_lookup(lookup_from(&[
            (LAW_ENV_VAR, "Tag-Overlap"),
            (THRESHOLD_ENV_VAR, " 20 "),
            (TAG_BONUS_ENV_VAR, "5.5"),
        ]))
        .unwrap();
        assert_eq!(config.law, ScoringLaw::TagOverlap);
        assert_eq!(config.threshold, 20.0);
        assert_eq!(config.tag_bonus, 5.5);
    }

    #[test]
    fn test_invalid_values() {
        let err = MatchConfig::from_lookup(lookup_from(&[(LAW_ENV_VAR, "magic")])).unwrap_err();
        assert!(err.to_string().contains("Unknown scoring law 'magic'"));

        let err = MatchConfig::from_lookup(lookup_from(&[(THRESHOLD_ENV_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
        assert!(err.to_string().contains(THRESHOLD_ENV_VAR));

        let err = MatchConfig::from_lookup(lookup_from(&[(TAG_BONUS_ENV_VAR, "NaN")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_law_display_round_trips_through_from_str() {
        for law in [ScoringLaw::Weighted, ScoringLaw::TagOverlap] {
            assert_eq!(law.to_string().parse::<ScoringLaw>().unwrap(), law);
        }
    }
}
