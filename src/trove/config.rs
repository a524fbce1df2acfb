use crate::error::{Result, TroveError};
use crate::format::is_storable;
use crate::model::SATISFACTION_RANGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STATUS: &str = "new";
const DEFAULT_SATISFACTION: i32 = 5;

/// Configuration for trove, stored in `<data-root>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TroveConfig {
    /// Status given to new items when none is supplied
    #[serde(default = "default_status")]
    pub default_status: String,

    /// Satisfaction given to new items when none is supplied
    #[serde(default = "default_satisfaction")]
    pub default_satisfaction: i32,

    /// Statuses offered as suggestions. Any other status is still accepted.
    #[serde(default = "default_status_options")]
    pub status_options: Vec<String>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_satisfaction() -> i32 {
    DEFAULT_SATISFACTION
}

fn default_status_options() -> Vec<String> {
    vec!["new".to_string(), "used".to_string(), "for sale".to_string()]
}

impl Default for TroveConfig {
    fn default() -> Self {
        Self {
            default_status: default_status(),
            default_satisfaction: default_satisfaction(),
            status_options: default_status_options(),
        }
    }
}

impl TroveConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TroveConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn set_default_satisfaction(&mut self, value: i32) -> Result<()> {
        if !SATISFACTION_RANGE.contains(&value) {
            return Err(TroveError::Validation(format!(
                "Satisfaction must be between {} and {}",
                SATISFACTION_RANGE.start(),
                SATISFACTION_RANGE.end()
            )));
        }
        self.default_satisfaction = value;
        Ok(())
    }

    /// Replaces the suggested statuses from a comma-separated list.
    pub fn set_status_options(&mut self, list: &str) {
        self.status_options = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// The keys accepted by [`get`](Self::get) and [`set`](Self::set).
    pub const KEYS: [&'static str; 3] =
        ["default-status", "default-satisfaction", "status-options"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-status" => Some(self.default_status.clone()),
            "default-satisfaction" => Some(self.default_satisfaction.to_string()),
            "status-options" => Some(self.status_options.join(", ")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-status" => {
                if !is_storable(value) {
                    return Err(TroveError::Validation(format!(
                        "Status can't contain \"||\" or line breaks, \
                         or start or end with \"|\": {:?}",
                        value
                    )));
                }
                self.default_status = value.trim().to_string();
                Ok(())
            }
            "default-satisfaction" => {
                let parsed = value.trim().parse::<i32>().map_err(|_| {
                    TroveError::Validation(format!("Not a whole number: {}", value))
                })?;
                self.set_default_satisfaction(parsed)
            }
            "status-options" => {
                self.set_status_options(value);
                Ok(())
            }
            other => Err(TroveError::Api(format!(
                "Unknown config key: {} (expected one of: {})",
                other,
                Self::KEYS.join(", ")
            ))),
        }
    }
}
