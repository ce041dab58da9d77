use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from the optional `tasklight.toml`.
///
/// Every field is defaulted; a missing file means `Config::default()`.
/// The config is read once at startup and never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Name shown in the sidebar greeting ("Hey, <name>").
    #[serde(default)]
    pub name: Option<String>,
    /// Label of the category selected at startup.
    #[serde(default)]
    pub default_category: Option<String>,
    /// User lists seeded into the sidebar below the built-in categories.
    #[serde(default)]
    pub lists: Vec<String>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// "dark" or "light"; anything else falls back to dark.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Hex color overrides keyed by theme slot name (e.g. `background = "#0C001B"`).
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            theme: default_theme(),
            colors: HashMap::new(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}
