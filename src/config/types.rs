use serde::{Deserialize, Serialize};

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 未指定時的補零寬度
pub const DEFAULT_ZERO_PADDING: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub zero_padding: usize,
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            zero_padding: DEFAULT_ZERO_PADDING,
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
