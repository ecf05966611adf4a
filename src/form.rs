use crate::error::ConfigError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;

/// The timezones offered by the settings surface. The generated document carries
/// the selected zone verbatim in `settings.timezone`.
pub const TIMEZONES: &[&str] = &[
    "UTC",
    "Europe/Berlin",
    "Europe/London",
    "Europe/Madrid",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Sao_Paulo",
    "Asia/Tokyo",
    "Asia/Singapore",
    "Asia/Kolkata",
    "Australia/Sydney",
];

/// The user-entered chatbot settings, matching the configurator form field for field.
///
/// Every field is an independently editable string. There are no cross-field
/// invariants: a blank `webhook_path` is resolved from the automation name at
/// build time, everything else is embedded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BotSettings {
    pub automation_name: String,
    pub verify_token: String,
    pub page_access_token: String,
    pub webhook_path: String,
    pub default_reply: String,
    pub timezone: String,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            automation_name: "Messenger Auto-Reply Bot".to_string(),
            verify_token: String::new(),
            page_access_token: String::new(),
            webhook_path: String::new(),
            default_reply: "Thanks for your message! We'll get back to you soon.".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

impl BotSettings {
    /// Loads settings from a JSON file (the same camelCase shape the form persists).
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate_timezone()?;
        Ok(settings)
    }

    /// The webhook path the generated workflow listens on: the user-entered path
    /// verbatim when non-empty, otherwise a slug derived from the automation name.
    pub fn effective_webhook_path(&self) -> String {
        if self.webhook_path.is_empty() {
            slugify(&self.automation_name)
        } else {
            self.webhook_path.clone()
        }
    }

    /// Rejects timezones outside the fixed form list.
    pub fn validate_timezone(&self) -> Result<(), ConfigError> {
        if is_supported_timezone(&self.timezone) {
            Ok(())
        } else {
            Err(ConfigError::UnknownTimezone(self.timezone.clone()))
        }
    }
}

pub fn is_supported_timezone(timezone: &str) -> bool {
    TIMEZONES.contains(&timezone)
}

/// Lowercases the name, collapses every run of non-alphanumeric characters into a
/// single hyphen, and trims leading/trailing hyphens. `"My Bot!"` becomes `"my-bot"`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .join("-")
}
