pub mod log;

pub use log::*;

use std::{fs, io, path::Path};

use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = "config.yaml";

#[derive(Default, Debug, Clone, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub log: LogOptions,
}

impl Options {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|err| anyhow::anyhow!("failed to parse config: {}", err))
    }

    /// Reads the config at `path`, or at [`DEFAULT_CONFIG`] when none is given.
    /// Only a missing default file falls back to the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        let content = match fs::read_to_string(path) {
            Ok(v) => v,
            Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(anyhow::anyhow!("failed to read config file: {}", e));
            }
        };
        Self::from_yaml(&content)
    }
}

/// Splits a `label=value` detail at the first `=`.
pub fn parse_detail(s: &str) -> anyhow::Result<(String, String)> {
    match s.split_once('=') {
        Some((label, value)) if !label.trim().is_empty() => {
            Ok((label.trim().to_owned(), value.to_owned()))
        }
        _ => Err(anyhow::anyhow!("invalid detail: {}, expected label=value", s)),
    }
}
