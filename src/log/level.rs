use std::{error::Error, fmt, str::FromStr};

use colored::Colorize;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde_with::DeserializeFromStr,
    serde_with::SerializeDisplay,
)]
pub enum Level {
    Trace,
    Debug,
    Verbose,
    Message,
    Warning,
    Error,
    Fatal,
    Critical,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 8] = [
        Self::Trace,
        Self::Debug,
        Self::Verbose,
        Self::Message,
        Self::Warning,
        Self::Error,
        Self::Fatal,
        Self::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Verbose => "Verbose",
            Self::Message => "Message",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
            Self::Critical => "Critical",
        }
    }

    pub fn to_color_str(&self) -> String {
        let s = self.to_str();
        match self {
            Self::Trace => s.bright_black().to_string(),
            Self::Debug => s.white().to_string(),
            Self::Verbose => s.cyan().to_string(),
            Self::Message => s.green().to_string(),
            Self::Warning => s.yellow().to_string(),
            Self::Error => s.red().to_string(),
            Self::Fatal => s.bright_red().to_string(),
            Self::Critical => s.on_red().white().bold().to_string(),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Message
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = Box<dyn Error + Send + Sync>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "verbose" | "verb" => Ok(Self::Verbose),
            "message" | "msg" | "info" => Ok(Self::Message),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "critical" | "crit" => Ok(Self::Critical),
            _ => Err(format!("unknown log level: {}", s).into()),
        }
    }
}
