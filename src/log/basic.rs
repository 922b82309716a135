use std::{
    borrow::Cow,
    fmt::Write as _,
    io::{self, Write},
    sync::{Arc, Mutex},
};

use serde::Deserialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Writes one line per record to a shared output.
///
/// In text format, line breaks inside the scope, message, error and details
/// are written as `\n` / `\r` so a record never spans lines.
///
/// Records below `level` are dropped. When the message is missing or blank
/// and an error is present, the error text is used as the message.
pub struct BasicLogger {
    disable_timestamp: bool,
    level: super::Level,
    color_enabled: bool,
    format: LogFormat,
    output: Arc<Mutex<Box<dyn io::Write + Send + Sync>>>,
}

impl BasicLogger {
    pub fn new(
        disable_timestamp: bool,
        level: super::Level,
        color_enabled: bool,
        output: Box<dyn io::Write + Send + Sync>,
    ) -> Self {
        Self {
            disable_timestamp,
            level,
            color_enabled,
            format: LogFormat::Text,
            output: Arc::new(Mutex::new(output)),
        }
    }

    pub fn with_format(self, format: LogFormat) -> Self {
        Self { format, ..self }
    }

    pub fn into_box(self) -> Box<dyn super::Logger> {
        Box::new(self)
    }

    fn write_to_output(&self, s: &str) {
        if let Ok(mut output) = self.output.lock() {
            if output.write_all(s.as_bytes()).is_ok() {
                output.flush().ok();
            }
        }
    }

    fn format_text(&self, record: &super::Record<'_>) -> String {
        let mut s = String::new();
        if !self.disable_timestamp {
            write!(s, "[{}] ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")).ok();
        }
        if self.color_enabled {
            write!(s, "[{}]", record.level().to_color_str()).ok();
        } else {
            write!(s, "[{}]", record.level().to_str()).ok();
        }
        if let Some(scope) = record.scope() {
            write!(s, " [{}]", escape_line(&scope.to_string())).ok();
        }
        let mut body = String::new();
        if let Some(message) = record.effective_message() {
            body.push_str(&escape_line(message.trim_end()));
        }
        if let Some(err) = record.error() {
            if !record.message_from_error() {
                write!(body, ": {}", escape_line(&err.to_string())).ok();
            }
        }
        if !body.is_empty() {
            s.push(' ');
            s.push_str(&body);
        }
        for detail in record.details() {
            write!(
                s,
                " {}={}",
                escape_line(detail.label()),
                escape_line(&detail.value().to_string())
            )
            .ok();
        }
        s.push('\n');
        s
    }

    fn format_json(&self, record: &super::Record<'_>) -> String {
        let mut object = serde_json::Map::new();
        if !self.disable_timestamp {
            object.insert(
                "time".to_owned(),
                chrono::Local::now().to_rfc3339().into(),
            );
        }
        object.insert("level".to_owned(), record.level().to_str().into());
        if let Some(scope) = record.scope() {
            object.insert("scope".to_owned(), scope.to_string().into());
        }
        object.insert(
            "message".to_owned(),
            record
                .effective_message()
                .map(|m| m.trim_end().to_owned())
                .unwrap_or_default()
                .into(),
        );
        if let Some(err) = record.error() {
            object.insert("error".to_owned(), err.to_string().into());
        }
        if !record.details().is_empty() {
            let details = record
                .details()
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "label": d.label(),
                        "value": d.value().to_string(),
                    })
                })
                .collect::<Vec<_>>();
            object.insert("details".to_owned(), details.into());
        }
        let mut s = serde_json::Value::Object(object).to_string();
        s.push('\n');
        s
    }
}

impl super::Logger for BasicLogger {
    fn enabled(&self, level: super::Level) -> bool {
        self.level <= level
    }

    fn color_enabled(&self) -> bool {
        self.color_enabled && self.format == LogFormat::Text
    }

    fn write(&self, record: &super::Record<'_>) {
        if !self.enabled(record.level()) {
            return;
        }

        let s = match self.format {
            LogFormat::Text => self.format_text(record),
            LogFormat::Json => self.format_json(record),
        };

        self.write_to_output(&s);
    }
}

fn escape_line(s: &str) -> Cow<'_, str> {
    if s.contains(['\n', '\r']) {
        s.replace('\n', "\\n").replace('\r', "\\r").into()
    } else {
        s.into()
    }
}
