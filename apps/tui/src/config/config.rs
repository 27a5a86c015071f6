use crate::chart::transition::DEFAULT_TRANSITION_SECONDS;
use crate::dataset::DataSource;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATA_SOURCE: &str = "data/fifa23_maleplayers.json";
pub const DEFAULT_PLAYER: &str = "H. Son";
pub const DEFAULT_MIN_OVERALL: f64 = 85.0;
pub const DEFAULT_LOG_FILE: &str = "player_radar.log";

/// Runtime settings of the chart, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub data_source: DataSource,
    pub default_identifier: String,
    /// Records must score strictly above this to be shown.
    pub min_overall: f64,
    pub transition_seconds: f64,
    pub resize_debounce_seconds: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::parse(DEFAULT_DATA_SOURCE),
            default_identifier: DEFAULT_PLAYER.to_string(),
            min_overall: DEFAULT_MIN_OVERALL,
            transition_seconds: DEFAULT_TRANSITION_SECONDS,
            resize_debounce_seconds: 0.0,
        }
    }
}

impl ChartConfig {
    /// Reads the process environment. Call [`load_dotenv`] first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_source = lookup("DATA_SOURCE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.data_source, |value| DataSource::parse(&value));

        let default_identifier = lookup("DEFAULT_PLAYER")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.default_identifier);

        let min_overall = parse_or("MIN_OVERALL", lookup("MIN_OVERALL"), defaults.min_overall);

        let transition_seconds = parse_or::<u64>("TRANSITION_MS", lookup("TRANSITION_MS"), 600) as f64 / 1000.0;

        let resize_debounce_seconds =
            parse_or::<u64>("RESIZE_DEBOUNCE_MS", lookup("RESIZE_DEBOUNCE_MS"), 0) as f64 / 1000.0;

        Self {
            data_source,
            default_identifier,
            min_overall,
            transition_seconds,
            resize_debounce_seconds,
        }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {key}={raw:?}, using default");
            default
        }),
    }
}

/// Loads environment variables from a .env file, if one exists
pub fn load_dotenv() {
    dotenv().ok();
}

/// Gets the path of the log file used while the terminal UI is active
pub fn get_log_file() -> PathBuf {
    env::var("LOG_FILE").map_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

/// Whether debug logging was requested
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(ChartConfig::from_lookup(lookup(&[])), ChartConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ChartConfig::from_lookup(lookup(&[
            ("DATA_SOURCE", "https://example.com/players.json"),
            ("DEFAULT_PLAYER", "L. Messi"),
            ("MIN_OVERALL", "80"),
            ("TRANSITION_MS", "250"),
            ("RESIZE_DEBOUNCE_MS", "100"),
        ]));

        assert_eq!(
            config.data_source,
            DataSource::Url("https://example.com/players.json".to_string())
        );
        assert_eq!(config.default_identifier, "L. Messi");
        assert!((config.min_overall - 80.0).abs() < f64::EPSILON);
        assert!((config.transition_seconds - 0.25).abs() < f64::EPSILON);
        assert!((config.resize_debounce_seconds - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = ChartConfig::from_lookup(lookup(&[("MIN_OVERALL", "lots"), ("TRANSITION_MS", "-3")]));

        assert!((config.min_overall - DEFAULT_MIN_OVERALL).abs() < f64::EPSILON);
        assert!((config.transition_seconds - 0.6).abs() < f64::EPSILON);
    }
}
