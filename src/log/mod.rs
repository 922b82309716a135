mod basic;
mod facade;
mod level;
mod logger;
mod r#macro;
mod nop;
mod record;
mod tag;
mod tracker;


pub use basic::*;
pub use facade::*;
pub use level::*;
pub use logger::*;
pub use nop::*;
pub use record::*;
pub use tag::*;
pub use tracker::*;

use std::{fs, io};

use crate::option;

/// Builds the root logger described by `options`.
///
/// Terminal outputs get colors unless `disable-color` is set; files never do.
pub fn new_logger(options: &option::LogOptions) -> anyhow::Result<Box<dyn Logger>> {
    if options.disabled {
        return Ok(NopLogger.into_box());
    }
    let mut color_enabled = false;
    let output = match options.output.as_str() {
        "" | "stdout" => {
            color_enabled = true;
            Box::new(io::stdout()) as Box<dyn io::Write + Send + Sync>
        }
        "stderr" => {
            color_enabled = true;
            Box::new(io::stderr()) as Box<dyn io::Write + Send + Sync>
        }
        _ => {
            let f = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&options.output)
                .map_err(|err| anyhow::anyhow!("failed to open log file: {}", err))?;
            Box::new(f) as Box<dyn io::Write + Send + Sync>
        }
    };
    if options.disable_color || options.format == LogFormat::Json {
        color_enabled = false;
    }
    Ok(BasicLogger::new(
        options.disable_timestamp,
        options.level,
        color_enabled,
        output,
    )
    .with_format(options.format)
    .into_box())
}
