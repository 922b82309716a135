use serde::Deserialize;

use crate::log::{Level, LogFormat};

#[derive(Default, Debug, Clone, Deserialize)]
pub struct LogOptions {
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    #[serde(rename = "disable-timestamp")]
    pub disable_timestamp: bool,
    #[serde(default)]
    #[serde(rename = "disable-color")]
    pub disable_color: bool,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub output: String,
}
