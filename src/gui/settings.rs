use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        SettingsData { dark_mode: true }
    }
}
