use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from codetasks.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Heading shown at the top of the panel
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "CodeTasks".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line at the bottom of the terminal panel
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
