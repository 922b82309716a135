//! Level-named logging operations over a pluggable [`log::Logger`].
//!
//! ```
//! use rslog::log::{BasicLogger, Entry, Level, LoggerExt};
//!
//! let logger = BasicLogger::new(true, Level::Message, false, Box::new(std::io::sink()));
//! logger.warning(Entry::message("disk nearly full"));
//! rslog::fatal!(logger, { scope = "scope-X" }, "shutdown");
//! ```

pub mod log;
pub mod option;

pub use log::{Entry, Level, Logger, LoggerExt};
pub use option::{LogOptions, Options};

use shadow_rs::shadow;

shadow!(build_info);
